//! Item id table.

pub(crate) const ITEM_ICON_BASE: &str = "https://ddragon.leagueoflegends.com/cdn/14.3.1/img/item";

pub(crate) static ITEMS: &[(u32, &str)] = &[
    // Mythic
    (6653, "Liandry's Anguish"),
    (6655, "Luden's Tempest"),
    (6656, "Everfrost"),
    (6657, "Rod of Ages"),
    (6662, "Iceborn Gauntlet"),
    (6664, "Turbo Chemtank"),
    (6665, "Jak'Sho, The Protean"),
    (6667, "Radiant Virtue"),
    (6671, "Galeforce"),
    (6672, "Kraken Slayer"),
    (6673, "Immortal Shieldbow"),
    (6691, "Duskblade of Draktharr"),
    (6692, "Eclipse"),
    (6693, "Prowler's Claw"),
    (3001, "Evenshroud"),
    (6632, "Divine Sunderer"),
    (6630, "Goredrinker"),
    (6631, "Stridebreaker"),
    (3152, "Hextech Rocketbelt"),
    (4644, "Crown of the Shattered Queen"),
    (6617, "Moonstone Renewer"),
    (6620, "Shurelya's Battlesong"),
    (4005, "Imperial Mandate"),
    // Legendary
    (3003, "Archangel's Staff"),
    (3004, "Manamune"),
    (3011, "Chemtech Putrifier"),
    (3026, "Guardian Angel"),
    (3031, "Infinity Edge"),
    (3033, "Mortal Reminder"),
    (3036, "Lord Dominik's Regards"),
    (3041, "Mejai's Soulstealer"),
    (3046, "Phantom Dancer"),
    (3050, "Zeke's Convergence"),
    (3053, "Sterak's Gage"),
    (3065, "Spirit Visage"),
    (3071, "Black Cleaver"),
    (3072, "Bloodthirster"),
    (3074, "Ravenous Hydra"),
    (3075, "Thornmail"),
    (3083, "Warmog's Armor"),
    (3085, "Runaan's Hurricane"),
    (3089, "Rabadon's Deathcap"),
    (3091, "Wit's End"),
    (3094, "Rapid Firecannon"),
    (3095, "Stormrazor"),
    (3100, "Lich Bane"),
    (3102, "Banshee's Veil"),
    (3107, "Redemption"),
    (3109, "Knight's Vow"),
    (3110, "Frozen Heart"),
    (3115, "Nashor's Tooth"),
    (3116, "Rylai's Crystal Scepter"),
    (3119, "Winter's Approach"),
    (3121, "Fimbulwinter"),
    (3124, "Guinsoo's Rageblade"),
    (3135, "Void Staff"),
    (3139, "Mercurial Scimitar"),
    (3142, "Youmuu's Ghostblade"),
    (3143, "Randuin's Omen"),
    (3153, "Blade of the Ruined King"),
    (3156, "Maw of Malmortius"),
    (3157, "Zhonya's Hourglass"),
    (3165, "Morellonomicon"),
    (3179, "Umbral Glaive"),
    (3181, "Hullbreaker"),
    (3190, "Locket of the Iron Solari"),
    (3193, "Gargoyle's Stoneplate"),
    (3222, "Mikael's Blessing"),
    (3504, "Ardent Censer"),
    (3508, "Essence Reaver"),
    (3742, "Dead Man's Plate"),
    (3748, "Titanic Hydra"),
    (3814, "Edge of Night"),
    (4401, "Force of Nature"),
    (4628, "Horizon Focus"),
    (4629, "Cosmic Drive"),
    (4637, "Demonic Embrace"),
    (4645, "Shadowflame"),
    (6035, "Silvermere Dawn"),
    (6333, "Death's Dance"),
    (6675, "Navori Quickblades"),
    (6676, "The Collector"),
    (6694, "Serylda's Grudge"),
    (6695, "Serpent's Fang"),
    (6696, "Axiom Arc"),
    // Boots
    (3006, "Berserker's Greaves"),
    (3009, "Boots of Swiftness"),
    (3020, "Sorcerer's Shoes"),
    (3047, "Plated Steelcaps"),
    (3111, "Mercury's Treads"),
    (3117, "Mobility Boots"),
    (3158, "Ionian Boots of Lucidity"),
    // Starters and components
    (1054, "Doran's Shield"),
    (1055, "Doran's Blade"),
    (1056, "Doran's Ring"),
    (1083, "Cull"),
    (1101, "Scorchclaw Pup"),
    (1102, "Gustwalker Hatchling"),
    (1103, "Mosstomper Seedling"),
    (1104, "Steel Sigil"),
    (2003, "Health Potion"),
    (2031, "Refillable Potion"),
    (2033, "Corrupting Potion"),
    (3070, "Tear of the Goddess"),
    (3112, "Guardian's Orb"),
    (3113, "Aether Wisp"),
    (3114, "Forbidden Idol"),
    (3145, "Hextech Alternator"),
    (3802, "Lost Chapter"),
];
