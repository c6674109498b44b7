//! Summoner spell table.

pub(crate) const SPELL_ICON_BASE: &str = "https://ddragon.leagueoflegends.com/cdn/14.3.1/img/spell";

/// (id, display name, asset name)
pub(crate) static SUMMONER_SPELLS: &[(u32, &str, &str)] = &[
    (1, "Cleanse", "SummonerBoost"),
    (3, "Exhaust", "SummonerExhaust"),
    (4, "Flash", "SummonerFlash"),
    (6, "Ghost", "SummonerHaste"),
    (7, "Heal", "SummonerHeal"),
    (11, "Smite", "SummonerSmite"),
    (12, "Teleport", "SummonerTeleport"),
    (13, "Clarity", "SummonerMana"),
    (14, "Ignite", "SummonerDot"),
    (21, "Barrier", "SummonerBarrier"),
    (32, "Mark", "SummonerSnowball"),
];

pub const FLASH: u32 = 4;
pub const SMITE: u32 = 11;
pub const IGNITE: u32 = 14;
