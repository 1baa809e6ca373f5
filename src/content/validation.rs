//! Validation for loaded floor configuration values.

use super::data::FloorDefaults;

/// Longest accepted settle delay.
pub const MAX_SETTLE_DELAY_SECS: f32 = 60.0;

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

/// A validation error with context about which value failed.
#[derive(Debug)]
pub struct ValidationError {
    pub section: &'static str,
    pub field: String,
    pub reason: &'static str,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{} {}", self.section, self.field, self.reason)
    }
}

/// Helper macro for checking a numeric rule
macro_rules! check_value {
    ($errors:expr, $ok:expr, $section:expr, $field:expr, $reason:expr) => {
        if !$ok {
            $errors.push(ValidationError {
                section: $section,
                field: $field.to_string(),
                reason: $reason,
            });
        }
    };
}

/// Validate all values in the floor configuration.
/// Returns a list of validation errors, empty if the configuration is usable.
pub fn validate_floor_defaults(defaults: &FloorDefaults) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let difficulty = &defaults.difficulty;
    for (field, value) in [
        (
            "enemy_health_percent_per_floor",
            difficulty.enemy_health_percent_per_floor,
        ),
        (
            "enemy_damage_percent_per_floor",
            difficulty.enemy_damage_percent_per_floor,
        ),
        (
            "enemy_count_percent_per_floor",
            difficulty.enemy_count_percent_per_floor,
        ),
    ] {
        check_value!(
            errors,
            value.is_finite() && value >= 0.0,
            "difficulty",
            field,
            "must be a non-negative number"
        );
    }

    let settle = defaults.encounter.settle_delay_secs;
    check_value!(
        errors,
        settle.is_finite() && (0.0..=MAX_SETTLE_DELAY_SECS).contains(&settle),
        "encounter",
        "settle_delay_secs",
        "must be between 0 and 60 seconds"
    );

    check_value!(
        errors,
        defaults.campaign.boss_floor >= 1,
        "campaign",
        "boss_floor",
        "must be at least 1"
    );

    let player = &defaults.player;
    for (field, value) in [
        ("max_health", player.max_health),
        ("move_speed", player.move_speed),
        ("attack_damage", player.attack_damage),
        ("attacks_per_sec", player.attacks_per_sec),
    ] {
        check_value!(errors, is_positive(value), "player", field, "must be positive");
    }

    // A floor with no spawners never registers any population and never resolves
    check_value!(
        errors,
        !defaults.waves.is_empty(),
        "waves",
        "waves",
        "must list at least one wave"
    );

    for (index, wave) in defaults.waves.iter().enumerate() {
        check_value!(
            errors,
            is_positive(wave.spawn_interval_secs),
            "waves",
            format!("[{}].spawn_interval_secs", index),
            "must be positive"
        );
        check_value!(
            errors,
            wave.start_secs >= 0.0 && wave.start_secs < wave.end_secs,
            "waves",
            format!("[{}].start_secs", index),
            "must be non-negative and before end_secs"
        );
        // An endless window keeps its spawner registered forever
        check_value!(
            errors,
            wave.end_secs.is_finite(),
            "waves",
            format!("[{}].end_secs", index),
            "must be finite"
        );
        for (field, value) in [
            ("enemy_health", wave.enemy_health),
            ("enemy_damage", wave.enemy_damage),
            ("enemy_speed", wave.enemy_speed),
        ] {
            check_value!(
                errors,
                is_positive(value),
                "waves",
                format!("[{}].{}", index, field),
                "must be positive"
            );
        }
    }

    let economy = &defaults.economy;
    check_value!(
        errors,
        economy.upgrade_base_cost >= 1,
        "economy",
        "upgrade_base_cost",
        "must be at least 1"
    );
    for (field, value) in [
        ("upgrade_cost_growth", economy.upgrade_cost_growth),
        ("upgrade_factor", economy.upgrade_factor),
    ] {
        check_value!(
            errors,
            value.is_finite() && value >= 1.0,
            "economy",
            field,
            "must be at least 1.0"
        );
    }
    check_value!(
        errors,
        (0.0..=1.0).contains(&economy.reset_refund_fraction),
        "economy",
        "reset_refund_fraction",
        "must be between 0 and 1"
    );

    for (index, drop) in economy.drops.iter().enumerate() {
        check_value!(
            errors,
            (0.0..=1.0).contains(&drop.chance),
            "economy",
            format!("drops[{}].chance", index),
            "must be between 0 and 1"
        );
        check_value!(
            errors,
            drop.min_amount <= drop.max_amount,
            "economy",
            format!("drops[{}].min_amount", index),
            "must not exceed max_amount"
        );
    }

    errors
}
