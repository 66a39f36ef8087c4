// src/hero/src/class.rs

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Character class
#[derive(
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Encode,
    Decode,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Class {
    #[default]
    Knight,
    Mage,
    Cleric,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn parses_any_case() {
        assert_eq!(Class::from_str("mage"), Ok(Class::Mage));
        assert_eq!(Class::from_str("CLERIC"), Ok(Class::Cleric));
        assert!(Class::from_str("Rogue").is_err());
    }

    #[test]
    fn knight_is_default() {
        assert_eq!(Class::default(), Class::Knight);
        assert_eq!(Class::iter().count(), 3);
        assert_eq!(Class::Cleric.to_string(), "Cleric");
    }
}
