use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A team position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Top,
    Jungle,
    Mid,
    #[serde(rename = "ADC")]
    Adc,
    Support,
}

impl Role {
    pub const ALL: [Role; 5] = [Role::Top, Role::Jungle, Role::Mid, Role::Adc, Role::Support];

    /// Lane code used by the stats provider.
    pub fn lane(self) -> &'static str {
        match self {
            Role::Top => "Top",
            Role::Jungle => "Jungle",
            Role::Mid => "Middle",
            Role::Adc => "Bot",
            Role::Support => "Supporter",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Top => "Top",
            Role::Jungle => "Jungle",
            Role::Mid => "Mid",
            Role::Adc => "ADC",
            Role::Support => "Support",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| format!("Invalid target role: {}", s))
    }
}

/// Champion stat block from Data Dragon. Only difficulty is used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChampionInfo {
    #[serde(default)]
    pub attack: u8,
    #[serde(default)]
    pub defense: u8,
    #[serde(default)]
    pub magic: u8,
    #[serde(default)]
    pub difficulty: u8,
}

/// A champion from the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Champion {
    /// Data Dragon key (e.g. "MonkeyKing")
    pub id: String,
    /// Numeric id as a string (e.g. "62")
    pub key: String,
    /// Display name (e.g. "Wukong")
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Derived from `tags` when the roster is loaded
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub info: ChampionInfo,
}

impl Champion {
    /// Build a champion with roles derived from its tags.
    pub fn new(id: &str, key: &str, name: &str, tags: &[&str]) -> Self {
        let tags: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
        let roles = roles_for_tags(&tags);
        Self {
            id: id.to_string(),
            key: key.to_string(),
            name: name.to_string(),
            title: String::new(),
            tags,
            roles,
            info: ChampionInfo::default(),
        }
    }

    pub fn difficulty(&self) -> u8 {
        self.info.difficulty
    }

    /// [`difficulty_text`] for this champion's rating.
    pub fn difficulty_label(&self) -> &'static str {
        difficulty_text(self.info.difficulty)
    }

    pub fn plays(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

/// Derive playable roles from class tags, deduplicated in first-seen order.
pub fn roles_for_tags<S: AsRef<str>>(tags: &[S]) -> Vec<Role> {
    let mut roles = Vec::new();
    for tag in tags {
        let mapped: &[Role] = match tag.as_ref() {
            "Fighter" => &[Role::Top, Role::Jungle],
            "Tank" => &[Role::Top, Role::Support],
            "Mage" => &[Role::Mid, Role::Support],
            "Assassin" => &[Role::Mid, Role::Jungle],
            "Marksman" => &[Role::Adc],
            "Support" => &[Role::Support],
            _ => &[],
        };
        for role in mapped {
            if !roles.contains(role) {
                roles.push(*role);
            }
        }
    }
    roles
}

/// Human label for a 0-10 difficulty rating.
pub fn difficulty_text(difficulty: u8) -> &'static str {
    match difficulty {
        0..=3 => "Easy",
        4..=6 => "Moderate",
        7..=8 => "Hard",
        _ => "Very Hard",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_lane_codes() {
        assert_eq!(Role::Top.lane(), "Top");
        assert_eq!(Role::Jungle.lane(), "Jungle");
        assert_eq!(Role::Mid.lane(), "Middle");
        assert_eq!(Role::Adc.lane(), "Bot");
        assert_eq!(Role::Support.lane(), "Supporter");
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("Mid".parse::<Role>().unwrap(), Role::Mid);
        assert_eq!("ADC".parse::<Role>().unwrap(), Role::Adc);
        assert!("adc".parse::<Role>().is_err());
        assert!("Bottom".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_serde() {
        assert_eq!(serde_json::to_string(&Role::Adc).unwrap(), "\"ADC\"");
        let role: Role = serde_json::from_str("\"Support\"").unwrap();
        assert_eq!(role, Role::Support);
    }

    #[test]
    fn test_roles_for_tags_dedup_in_order() {
        let roles = roles_for_tags(&["Fighter", "Tank"]);
        assert_eq!(roles, vec![Role::Top, Role::Jungle, Role::Support]);

        let roles = roles_for_tags(&["Mage", "Assassin"]);
        assert_eq!(roles, vec![Role::Mid, Role::Support, Role::Jungle]);

        assert!(roles_for_tags(&["Unknown"]).is_empty());
    }

    #[test]
    fn test_difficulty_text() {
        assert_eq!(difficulty_text(1), "Easy");
        assert_eq!(difficulty_text(3), "Easy");
        assert_eq!(difficulty_text(5), "Moderate");
        assert_eq!(difficulty_text(8), "Hard");
        assert_eq!(difficulty_text(10), "Very Hard");
    }

    #[test]
    fn test_champion_deserializes_data_dragon_shape() {
        let json = r#"{
            "version": "14.3.1",
            "id": "Ahri",
            "key": "103",
            "name": "Ahri",
            "title": "the Nine-Tailed Fox",
            "tags": ["Mage", "Assassin"],
            "info": {"attack": 3, "defense": 4, "magic": 8, "difficulty": 5},
            "image": {"full": "Ahri.png", "sprite": "champion0.png", "group": "champion"}
        }"#;
        let champion: Champion = serde_json::from_str(json).unwrap();
        assert_eq!(champion.key, "103");
        assert_eq!(champion.difficulty(), 5);
        assert!(champion.roles.is_empty());
    }
}
