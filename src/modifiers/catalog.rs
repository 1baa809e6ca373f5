//! Modifiers domain: the static modifier catalog.
//!
//! Every attribute a floor modifier can touch, which direction is good for the
//! player, how strong each intensity is, and how a modifier reads in the HUD.

use serde::{Deserialize, Serialize};

/// Stat a floor modifier perturbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModifierAttribute {
    PlayerSpeed,
    PlayerDamage,
    PlayerHealth,
    PlayerHealthRegen,
    EnemyDamage,
    EnemySpeed,
}

impl ModifierAttribute {
    /// Catalog order; the generator draws from a copy of this list.
    pub const ALL: [ModifierAttribute; 6] = [
        ModifierAttribute::PlayerSpeed,
        ModifierAttribute::PlayerDamage,
        ModifierAttribute::PlayerHealth,
        ModifierAttribute::PlayerHealthRegen,
        ModifierAttribute::EnemyDamage,
        ModifierAttribute::EnemySpeed,
    ];

    /// True for stats owned by the player, false for enemy stats.
    pub fn is_player_owned(&self) -> bool {
        match self {
            ModifierAttribute::PlayerSpeed
            | ModifierAttribute::PlayerDamage
            | ModifierAttribute::PlayerHealth
            | ModifierAttribute::PlayerHealthRegen => true,
            ModifierAttribute::EnemyDamage | ModifierAttribute::EnemySpeed => false,
        }
    }

    /// Valence rule: raising a player stat is good, raising an enemy stat is bad.
    pub fn is_good_for_player(&self, is_increasing: bool) -> bool {
        if self.is_player_owned() {
            is_increasing
        } else {
            !is_increasing
        }
    }

    /// Inverse of the valence rule: does a modifier of this valence raise the stat?
    pub fn is_increasing(&self, is_good: bool) -> bool {
        if self.is_player_owned() {
            is_good
        } else {
            !is_good
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ModifierAttribute::PlayerSpeed => "Speed",
            ModifierAttribute::PlayerDamage => "Damage",
            ModifierAttribute::PlayerHealth => "Health",
            ModifierAttribute::PlayerHealthRegen => "HP Regen",
            ModifierAttribute::EnemyDamage => "Enemy Damage",
            ModifierAttribute::EnemySpeed => "Enemy Speed",
        }
    }

    fn effect_text(&self, is_good: bool) -> &'static str {
        match (self, is_good) {
            (ModifierAttribute::PlayerSpeed, true) => "Increases player movement speed",
            (ModifierAttribute::PlayerSpeed, false) => "Decreases player movement speed",
            (ModifierAttribute::PlayerDamage, true) => "Increases player damage",
            (ModifierAttribute::PlayerDamage, false) => "Decreases player damage",
            (ModifierAttribute::PlayerHealth, true) => "Increases player health",
            (ModifierAttribute::PlayerHealth, false) => "Decreases player health",
            (ModifierAttribute::PlayerHealthRegen, true) => "Player health slowly regenerates",
            (ModifierAttribute::PlayerHealthRegen, false) => "Player health slowly decreases",
            (ModifierAttribute::EnemyDamage, true) => "Decreases enemy damage",
            (ModifierAttribute::EnemyDamage, false) => "Increases enemy damage",
            (ModifierAttribute::EnemySpeed, true) => "Decreases enemy speed",
            (ModifierAttribute::EnemySpeed, false) => "Increases enemy speed",
        }
    }
}

/// Strength of a modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntensityLevel {
    Small = 0,
    Medium = 1,
    Large = 2,
}

impl IntensityLevel {
    pub const ALL: [IntensityLevel; 3] = [
        IntensityLevel::Small,
        IntensityLevel::Medium,
        IntensityLevel::Large,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Fractional change applied to multiplier fields (2% / 5% / 8%).
    pub fn fraction(&self) -> f32 {
        match self {
            IntensityLevel::Small => 0.02,
            IntensityLevel::Medium => 0.05,
            IntensityLevel::Large => 0.08,
        }
    }

    /// Absolute health-per-second magnitude used by regen modifiers.
    pub fn regen_rate(&self) -> f32 {
        match self {
            IntensityLevel::Small => 0.5,
            IntensityLevel::Medium => 1.0,
            IntensityLevel::Large => 1.5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IntensityLevel::Small => "Small",
            IntensityLevel::Medium => "Medium",
            IntensityLevel::Large => "Large",
        }
    }

    fn adverb(&self) -> &'static str {
        match self {
            IntensityLevel::Small => "Slightly",
            IntensityLevel::Medium => "Moderately",
            IntensityLevel::Large => "Greatly",
        }
    }
}

/// One random perturbation active for the current floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorModifier {
    pub attribute: ModifierAttribute,
    pub is_good: bool,
    pub intensity: IntensityLevel,
}

impl FloorModifier {
    pub fn new(attribute: ModifierAttribute, is_good: bool, intensity: IntensityLevel) -> Self {
        Self {
            attribute,
            is_good,
            intensity,
        }
    }

    /// Human readable effect, e.g. "Moderately Decreases enemy speed".
    pub fn description(&self) -> String {
        format!(
            "{} {}",
            self.intensity.adverb(),
            self.attribute.effect_text(self.is_good)
        )
    }

    /// Compact HUD label: name plus one arrow per intensity step.
    pub fn badge(&self) -> String {
        let arrow = if self.attribute.is_increasing(self.is_good) {
            "↑"
        } else {
            "↓"
        };
        format!(
            "{}{}",
            self.attribute.display_name(),
            arrow.repeat(self.intensity.index() + 1)
        )
    }

    pub fn valence_label(&self) -> &'static str {
        if self.is_good { "Good" } else { "Bad" }
    }
}

/// Ordered modifiers for one floor. No two entries share an attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierSet {
    modifiers: Vec<FloorModifier>,
}

impl ModifierSet {
    pub const MAX_LEN: usize = 3;

    pub fn new() -> Self {
        Self::default()
    }

    /// Append a modifier. Refuses duplicates of an attribute already present.
    pub fn push(&mut self, modifier: FloorModifier) -> bool {
        if self.contains(modifier.attribute) {
            return false;
        }
        self.modifiers.push(modifier);
        true
    }

    pub fn contains(&self, attribute: ModifierAttribute) -> bool {
        self.modifiers.iter().any(|m| m.attribute == attribute)
    }

    pub fn as_slice(&self) -> &[FloorModifier] {
        &self.modifiers
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FloorModifier> {
        self.modifiers.iter()
    }

    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }

    pub fn clear(&mut self) {
        self.modifiers.clear();
    }

    pub fn good_count(&self) -> usize {
        self.modifiers.iter().filter(|m| m.is_good).count()
    }

    pub fn bad_count(&self) -> usize {
        self.modifiers.iter().filter(|m| !m.is_good).count()
    }

    /// One-line teaser shown before the player enters the floor.
    pub fn forecast(&self) -> String {
        let good = self.good_count();
        let bad = self.bad_count();
        let blessings = format!("{} blessing{}", good, if good > 1 { "s" } else { "" });
        let curses = format!("{} curse{}", bad, if bad > 1 { "s" } else { "" });

        match (good, bad) {
            (0, 0) => "The journey ahead seems ordinary...".to_string(),
            (0, 1) => "Beware, darkness lurks with a curse...".to_string(),
            (0, _) => format!("Beware, darkness lurks with {}...", curses),
            (1, 0) => "Fortune smiles upon you with a blessing!".to_string(),
            (_, 0) => format!("Fortune smiles upon you with {}!", blessings),
            _ => format!("The next floor holds {} and {}...", blessings, curses),
        }
    }
}

impl<'a> IntoIterator for &'a ModifierSet {
    type Item = &'a FloorModifier;
    type IntoIter = std::slice::Iter<'a, FloorModifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.modifiers.iter()
    }
}
