use std::fmt;
use serde::{Deserialize, Serialize};

/// A hero record as served by `GET /api/heroes`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub id: u32,
    /// Internal name, e.g. `npc_dota_hero_axe`
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub localized_name: String,
    #[serde(default)]
    pub primary_attr: PrimaryAttribute,
    #[serde(default)]
    pub attack_type: AttackType,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Hero {
    /// Localized name, falling back to the internal name.
    pub fn display_name(&self) -> &str {
        if !self.localized_name.is_empty() {
            &self.localized_name
        } else if !self.name.is_empty() {
            &self.name
        } else {
            "Unknown Hero"
        }
    }

    /// Two-letter badge shown in place of a portrait.
    pub fn initials(&self) -> String {
        initials(&self.localized_name)
    }
}

/// First letter of each word (at most two), upper-cased.
/// "Anti-Mage" → "AM", "Lina" → "L".
pub fn initials(name: &str) -> String {
    if name.is_empty() {
        return "??".to_string();
    }

    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let mut letters = String::new();
    let mut prev_word = false;
    for c in name.chars() {
        let word = is_word(c);
        if word && !prev_word {
            letters.push(c);
        }
        prev_word = word;
    }

    let source = if letters.is_empty() { name } else { letters.as_str() };
    source.chars().take(2).collect::<String>().to_uppercase()
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PrimaryAttribute {
    #[serde(rename = "str")]
    Strength,
    #[serde(rename = "agi")]
    Agility,
    #[serde(rename = "int")]
    Intelligence,
    #[serde(rename = "all")]
    Universal,
    #[default]
    #[serde(other)]
    Unknown,
}

impl PrimaryAttribute {
    pub fn full_name(&self) -> &'static str {
        match self {
            PrimaryAttribute::Strength => "Strength",
            PrimaryAttribute::Agility => "Agility",
            PrimaryAttribute::Intelligence => "Intelligence",
            PrimaryAttribute::Universal => "Universal",
            PrimaryAttribute::Unknown => "Unknown",
        }
    }

    pub fn all() -> &'static [PrimaryAttribute] {
        &[
            PrimaryAttribute::Strength,
            PrimaryAttribute::Agility,
            PrimaryAttribute::Intelligence,
            PrimaryAttribute::Universal,
        ]
    }
}

impl fmt::Display for PrimaryAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.full_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AttackType {
    Melee,
    Ranged,
    #[default]
    #[serde(other)]
    Unknown,
}

impl AttackType {
    pub fn label(&self) -> &'static str {
        match self {
            AttackType::Melee => "Melee",
            AttackType::Ranged => "Ranged",
            AttackType::Unknown => "Unknown",
        }
    }
}
