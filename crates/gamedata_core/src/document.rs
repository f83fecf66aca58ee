//! The four content documents and where they live.

use std::fmt;

use crate::rules::{Rule, CHARACTER_RULES, ENEMY_RULES, ITEM_RULES, WEAPON_RULES};

/// One category of game content, stored as one JSON file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// `weapons.json`
    Weapons,
    /// `items.json`
    Items,
    /// `enemies.json`
    Enemies,
    /// `characters.json`
    Characters,
}

impl DocumentKind {
    /// All kinds, in validation and report order.
    ///
    /// Weapons come first: characters reference weapon ids.
    pub const ALL: [Self; 4] = [Self::Weapons, Self::Items, Self::Enemies, Self::Characters];

    /// File name inside the data directory.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Weapons => "weapons.json",
            Self::Items => "items.json",
            Self::Enemies => "enemies.json",
            Self::Characters => "characters.json",
        }
    }

    /// Top-level key holding the record list.
    #[must_use]
    pub const fn list_key(self) -> &'static str {
        match self {
            Self::Weapons => "weapons",
            Self::Items => "items",
            Self::Enemies => "enemies",
            Self::Characters => "characters",
        }
    }

    /// Rule table applied to every record of this kind.
    #[must_use]
    pub const fn schema(self) -> &'static [Rule] {
        match self {
            Self::Weapons => WEAPON_RULES,
            Self::Items => ITEM_RULES,
            Self::Enemies => ENEMY_RULES,
            Self::Characters => CHARACTER_RULES,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.list_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weapons_validated_before_characters() {
        let weapons = DocumentKind::ALL
            .iter()
            .position(|k| *k == DocumentKind::Weapons);
        let characters = DocumentKind::ALL
            .iter()
            .position(|k| *k == DocumentKind::Characters);
        assert!(weapons < characters);
    }

    #[test]
    fn test_file_name_matches_list_key() {
        for kind in DocumentKind::ALL {
            assert_eq!(kind.file_name(), format!("{}.json", kind.list_key()));
        }
    }
}
