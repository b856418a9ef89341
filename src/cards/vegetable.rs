//! The closed set of vegetable kinds.

use serde::{Deserialize, Serialize};

/// One of the six vegetable kinds.
///
/// Identity only; kinds have no ordering semantics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vegetable {
    Pepper,
    Lettuce,
    Carrot,
    Cabbage,
    Onion,
    Tomato,
}

impl Vegetable {
    /// All six kinds, in manifest order.
    pub const ALL: [Vegetable; 6] = [
        Vegetable::Pepper,
        Vegetable::Lettuce,
        Vegetable::Carrot,
        Vegetable::Cabbage,
        Vegetable::Onion,
        Vegetable::Tomato,
    ];

    /// Number of kinds.
    pub const COUNT: usize = Self::ALL.len();

    /// Uppercase name as it appears in rule text and the card manifest.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Vegetable::Pepper => "PEPPER",
            Vegetable::Lettuce => "LETTUCE",
            Vegetable::Carrot => "CARROT",
            Vegetable::Cabbage => "CABBAGE",
            Vegetable::Onion => "ONION",
            Vegetable::Tomato => "TOMATO",
        }
    }

    /// Parse a rule-text token. Leading/trailing whitespace is the caller's
    /// problem; matching is exact and case-sensitive, as in rule text.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Vegetable> {
        Self::ALL.into_iter().find(|v| v.name() == token)
    }
}

impl std::fmt::Display for Vegetable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
