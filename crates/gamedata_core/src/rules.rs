//! Declarative rule tables for each document kind.
//!
//! Rules are evaluated in declaration order, which fixes the order defects
//! are reported in for a given record.

use crate::record::ValueKind::{self, Integer, Number, String as Str};

/// Stat names accepted inside a `stats` sub-object.
pub const STAT_KEYS: &[&str] = &[
    "damage",
    "max_hp",
    "move_speed",
    "attack_speed",
    "armor",
    "dodge",
    "crit_chance",
    "crit_damage",
    "cooldown_reduction",
    "xp_magnet",
    "hp_regen",
];

/// Values accepted in a weapon's `scales` list.
pub const SCALES_ALLOWED: &[&str] = &["damage", "attack_speed", "range", "crit"];

/// A single field check: key, presence requirement and expected kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    /// Field name.
    pub key: &'static str,
    /// Whether absence is a defect.
    pub required: bool,
    /// Expected value kind when present.
    pub kind: ValueKind,
}

impl FieldRule {
    /// A field that must be present.
    #[must_use]
    pub const fn required(key: &'static str, kind: ValueKind) -> Self {
        Self {
            key,
            required: true,
            kind,
        }
    }

    /// A field that is only type-checked when present.
    #[must_use]
    pub const fn optional(key: &'static str, kind: ValueKind) -> Self {
        Self {
            key,
            required: false,
            kind,
        }
    }
}

/// One step of a record schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Plain field check.
    Field(FieldRule),
    /// Optional `stats` sub-object with keys from [`STAT_KEYS`].
    Stats,
    /// Optional `proc` sub-object checked against [`PROC_RULES`].
    Proc,
    /// Optional `scales` list with values from [`SCALES_ALLOWED`].
    Scales,
}

const fn req(key: &'static str, kind: ValueKind) -> Rule {
    Rule::Field(FieldRule::required(key, kind))
}

const fn opt(key: &'static str, kind: ValueKind) -> Rule {
    Rule::Field(FieldRule::optional(key, kind))
}

/// Recognized keys of an item's `proc` sub-object. All optional.
pub const PROC_RULES: &[FieldRule] = &[
    FieldRule::optional("chance", Number),
    FieldRule::optional("damage", Number),
    FieldRule::optional("bounces", Integer),
    FieldRule::optional("range", Number),
];

/// Schema for entries of `weapons.json`.
pub const WEAPON_RULES: &[Rule] = &[
    req("id", Str),
    req("name", Str),
    req("type", Str),
    req("rarity", Str),
    req("cooldown", Number),
    req("damage", Number),
    req("range", Number),
    req("projectile_speed", Number),
    opt("pierce", Integer),
    opt("pellets", Integer),
    opt("homing", Integer),
    opt("spread", Number),
    opt("crit_multiplier", Number),
    Rule::Scales,
];

/// Schema for entries of `items.json`.
pub const ITEM_RULES: &[Rule] = &[
    req("id", Str),
    req("name", Str),
    req("rarity", Str),
    req("desc", Str),
    Rule::Stats,
    Rule::Proc,
    opt("slow_on_hit", Number),
    opt("slow_aura", Number),
    opt("burn_on_hit", Number),
    opt("burn_aura", Number),
    opt("thorns_percent", Number),
    opt("lifesteal_on_kill", Number),
    opt("rarity_bias", Number),
    opt("slow_bonus_damage", Number),
    opt("legendary_amp", Number),
    opt("hp_regen_amp", Number),
    opt("xp_kill_chance", Number),
    opt("ultimate_cdr", Number),
    opt("totem_spawn_rate", Number),
    opt("totem_duration_bonus", Number),
    opt("chest_reroll_bonus", Integer),
];

/// Schema for entries of `enemies.json`.
pub const ENEMY_RULES: &[Rule] = &[
    req("id", Str),
    req("name", Str),
    req("role", Str),
    req("hp", Number),
    req("speed", Number),
    req("damage", Number),
    opt("cooldown", Number),
    opt("projectile_speed", Number),
    opt("charge_speed", Number),
    opt("charge_cooldown", Number),
    opt("explode_radius", Number),
];

/// Schema for entries of `characters.json`.
///
/// The weapon cross-reference is not a table rule; it needs the weapon set.
pub const CHARACTER_RULES: &[Rule] = &[
    req("id", Str),
    req("name", Str),
    req("portrait", Str),
    req("weapon", Str),
    req("rule", Str),
    req("ultimate", Str),
    Rule::Stats,
];

/// True if `key` is a recognized stat name.
#[must_use]
pub fn is_stat_key(key: &str) -> bool {
    STAT_KEYS.contains(&key)
}

/// True if `scale` is an allowed weapon scaling.
#[must_use]
pub fn is_allowed_scale(scale: &str) -> bool {
    SCALES_ALLOWED.contains(&scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_keys(rules: &[Rule]) -> Vec<&'static str> {
        rules
            .iter()
            .filter_map(|r| match r {
                Rule::Field(f) => Some(f.key),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_every_schema_requires_id_first() {
        for rules in [WEAPON_RULES, ITEM_RULES, ENEMY_RULES, CHARACTER_RULES] {
            assert_eq!(rules[0], req("id", Str));
        }
    }

    #[test]
    fn test_item_modifier_table_size() {
        let numeric_optionals = ITEM_RULES
            .iter()
            .filter(|r| matches!(r, Rule::Field(f) if !f.required && f.kind == Number))
            .count();
        assert_eq!(numeric_optionals, 14);
    }

    #[test]
    fn test_no_duplicate_keys_in_schemas() {
        for rules in [WEAPON_RULES, ITEM_RULES, ENEMY_RULES, CHARACTER_RULES] {
            let keys = field_keys(rules);
            let unique: std::collections::HashSet<_> = keys.iter().collect();
            assert_eq!(keys.len(), unique.len(), "duplicate key in {keys:?}");
        }
    }

    #[test]
    fn test_allow_lists() {
        assert!(is_stat_key("crit_chance"));
        assert!(!is_stat_key("luck"));
        assert!(is_allowed_scale("crit"));
        assert!(!is_allowed_scale("poison"));
    }
}
