//! The closed set of NPC kinds

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::ArenaError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    Toad,
    Dragon,
    Knight,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Toad, Variant::Dragon, Variant::Knight];

    /// Record token, also used for display
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Toad => "Toad",
            Variant::Dragon => "Dragon",
            Variant::Knight => "Knight",
        }
    }

    /// Map a numeric tag (0, 1, 2) to a variant
    pub fn from_index(index: usize) -> Result<Self, ArenaError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| ArenaError::UnknownVariant(format!("tag {}", index)))
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = ArenaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ArenaError::UnknownVariant(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tokens() {
        assert_eq!("Toad".parse::<Variant>().unwrap(), Variant::Toad);
        assert_eq!("Dragon".parse::<Variant>().unwrap(), Variant::Dragon);
        assert_eq!("Knight".parse::<Variant>().unwrap(), Variant::Knight);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("toad".parse::<Variant>().is_err());
        assert!("Frog".parse::<Variant>().is_err());
    }

    #[test]
    fn test_unknown_tag() {
        assert_eq!(Variant::from_index(2).unwrap(), Variant::Knight);
        assert!(matches!(
            Variant::from_index(999),
            Err(ArenaError::UnknownVariant(_))
        ));
    }
}
