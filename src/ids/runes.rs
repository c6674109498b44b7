//! Rune and stat shard tables.

pub(crate) const PERK_IMAGE_BASE: &str = "https://ddragon.leagueoflegends.com/cdn/img/perk-images";
pub(crate) const SHARD_IMAGE_BASE: &str = "https://static.wikia.nocookie.net/leagueoflegends/images";
pub(crate) const SHARD_IMAGE_SUFFIX: &str = "revision/latest/scale-to-width-down/30?cb=20181122101607";

/// Stat shard slot index (as sent by the stats provider) to global rune id.
pub(crate) static STAT_SHARD_SLOTS: &[(u32, u32)] = &[
    (0, 5011),
    (1, 5002),
    (2, 5003),
    (3, 5008),
    (4, 5007),
    (5, 5005),
];

/// (id, name, icon path). Tree styles and runes use perk-image paths,
/// stat shards use wiki image paths.
pub(crate) static RUNES: &[(u32, &str, &str)] = &[
    // Precision
    (8000, "Precision", "Styles/7201_Precision.png"),
    (8005, "Press the Attack", "Styles/Precision/PressTheAttack/PressTheAttack.png"),
    (8008, "Lethal Tempo", "Styles/Precision/LethalTempo/LethalTempoTemp.png"),
    (8021, "Fleet Footwork", "Styles/Precision/FleetFootwork/FleetFootwork.png"),
    (8010, "Conqueror", "Styles/Precision/Conqueror/Conqueror.png"),
    (9101, "Overheal", "Styles/Precision/Overheal.png"),
    (9111, "Triumph", "Styles/Precision/Triumph.png"),
    (8009, "Presence of Mind", "Styles/Precision/PresenceOfMind/PresenceOfMind.png"),
    (9104, "Legend: Alacrity", "Styles/Precision/LegendAlacrity/LegendAlacrity.png"),
    (9105, "Legend: Tenacity", "Styles/Precision/LegendTenacity/LegendTenacity.png"),
    (9103, "Legend: Bloodline", "Styles/Precision/LegendBloodline/LegendBloodline.png"),
    (8014, "Coup de Grace", "Styles/Precision/CoupDeGrace/CoupDeGrace.png"),
    (8017, "Cut Down", "Styles/Precision/CutDown/CutDown.png"),
    (8299, "Last Stand", "Styles/Precision/LastStand/LastStand.png"),
    // Domination
    (8100, "Domination", "Styles/7200_Domination.png"),
    (8112, "Electrocute", "Styles/Domination/Electrocute/Electrocute.png"),
    (8124, "Predator", "Styles/Domination/Predator/Predator.png"),
    (8128, "Dark Harvest", "Styles/Domination/DarkHarvest/DarkHarvest.png"),
    (9923, "Hail of Blades", "Styles/Domination/HailOfBlades/HailOfBlades.png"),
    (8126, "Cheap Shot", "Styles/Domination/CheapShot/CheapShot.png"),
    (8139, "Taste of Blood", "Styles/Domination/TasteOfBlood/TasteOfBlood.png"),
    (8143, "Sudden Impact", "Styles/Domination/SuddenImpact/SuddenImpact.png"),
    (8136, "Zombie Ward", "Styles/Domination/ZombieWard/ZombieWard.png"),
    (8120, "Ghost Poro", "Styles/Domination/GhostPoro/GhostPoro.png"),
    (8138, "Eyeball Collection", "Styles/Domination/EyeballCollection/EyeballCollection.png"),
    (8135, "Treasure Hunter", "Styles/Domination/TreasureHunter/TreasureHunter.png"),
    (8134, "Ingenious Hunter", "Styles/Domination/IngeniousHunter/IngeniousHunter.png"),
    (8105, "Relentless Hunter", "Styles/Domination/RelentlessHunter/RelentlessHunter.png"),
    (8106, "Ultimate Hunter", "Styles/Domination/UltimateHunter/UltimateHunter.png"),
    // Sorcery
    (8200, "Sorcery", "Styles/7202_Sorcery.png"),
    (8214, "Summon Aery", "Styles/Sorcery/SummonAery/SummonAery.png"),
    (8229, "Arcane Comet", "Styles/Sorcery/ArcaneComet/ArcaneComet.png"),
    (8230, "Phase Rush", "Styles/Sorcery/PhaseRush/PhaseRush.png"),
    (8224, "Nullifying Orb", "Styles/Sorcery/NullifyingOrb/NullifyingOrb.png"),
    (8226, "Manaflow Band", "Styles/Sorcery/ManaflowBand/ManaflowBand.png"),
    (8275, "Nimbus Cloak", "Styles/Sorcery/NimbusCloak/NimbusCloak.png"),
    (8210, "Transcendence", "Styles/Sorcery/Transcendence/Transcendence.png"),
    (8234, "Celerity", "Styles/Sorcery/Celerity/Celerity.png"),
    (8233, "Absolute Focus", "Styles/Sorcery/AbsoluteFocus/AbsoluteFocus.png"),
    (8237, "Scorch", "Styles/Sorcery/Scorch/Scorch.png"),
    (8232, "Waterwalking", "Styles/Sorcery/Waterwalking/Waterwalking.png"),
    (8236, "Gathering Storm", "Styles/Sorcery/GatheringStorm/GatheringStorm.png"),
    // Resolve
    (8400, "Resolve", "Styles/7204_Resolve.png"),
    (8437, "Grasp of the Undying", "Styles/Resolve/GraspOfTheUndying/GraspOfTheUndying.png"),
    (8439, "Aftershock", "Styles/Resolve/VeteranAftershock/VeteranAftershock.png"),
    (8465, "Guardian", "Styles/Resolve/Guardian/Guardian.png"),
    (8446, "Demolish", "Styles/Resolve/Demolish/Demolish.png"),
    (8463, "Font of Life", "Styles/Resolve/FontOfLife/FontOfLife.png"),
    (8401, "Shield Bash", "Styles/Resolve/MirrorShell/MirrorShell.png"),
    (8429, "Conditioning", "Styles/Resolve/Conditioning/Conditioning.png"),
    (8444, "Second Wind", "Styles/Resolve/SecondWind/SecondWind.png"),
    (8473, "Bone Plating", "Styles/Resolve/BonePlating/BonePlating.png"),
    (8451, "Overgrowth", "Styles/Resolve/Overgrowth/Overgrowth.png"),
    (8453, "Revitalize", "Styles/Resolve/Revitalize/Revitalize.png"),
    (8242, "Unflinching", "Styles/Resolve/Unflinching/Unflinching.png"),
    // Inspiration
    (8300, "Inspiration", "Styles/7203_Whimsy.png"),
    (8351, "Glacial Augment", "Styles/Inspiration/GlacialAugment/GlacialAugment.png"),
    (8360, "Unsealed Spellbook", "Styles/Inspiration/UnsealedSpellbook/UnsealedSpellbook.png"),
    (8369, "First Strike", "Styles/Inspiration/FirstStrike/FirstStrike.png"),
    (8306, "Hextech Flashtraption", "Styles/Inspiration/HextechFlashtraption/HextechFlashtraption.png"),
    (8304, "Magical Footwear", "Styles/Inspiration/MagicalFootwear/MagicalFootwear.png"),
    (8313, "Perfect Timing", "Styles/Inspiration/PerfectTiming/PerfectTiming.png"),
    (8321, "Future's Market", "Styles/Inspiration/FuturesMarket/FuturesMarket.png"),
    (8316, "Minion Dematerializer", "Styles/Inspiration/MinionDematerializer/MinionDematerializer.png"),
    (8345, "Biscuit Delivery", "Styles/Inspiration/BiscuitDelivery/BiscuitDelivery.png"),
    (8347, "Cosmic Insight", "Styles/Inspiration/CosmicInsight/CosmicInsight.png"),
    (8410, "Approach Velocity", "Styles/Inspiration/Approach/Approach.png"),
    (8352, "Time Warp Tonic", "Styles/Inspiration/TimeWarpTonic/TimeWarpTonic.png"),
];

/// Stat shards: (id, name, wiki image path).
pub(crate) static STAT_SHARDS: &[(u32, &str, &str)] = &[
    (5011, "+9 Adaptive Force", "a/a3/Rune_shard_Adaptive_Force.png"),
    (5002, "+6 Armor", "5/56/Rune_shard_Armor.png"),
    (5003, "+8 Magic Resist", "3/3f/Rune_shard_Magic_Resist.png"),
    (5008, "+15-140 Health (based on level)", "7/7a/Rune_shard_Health.png"),
    (5007, "+8 Ability Haste", "8/8b/Rune_shard_CDR.png"),
    (5005, "+10% Attack Speed", "0/0f/Rune_shard_Attack_Speed.png"),
];
