//! The four colour categories and their opposite pairing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::scoring::ScoringError;

/// One of the four mutually exclusive communication styles.
///
/// Declaration order is significant: it is the precedence used to break
/// ties between equal scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Rojo")]
    Red,
    #[serde(rename = "Amarillo")]
    Yellow,
    #[serde(rename = "Verde")]
    Green,
    #[serde(rename = "Azul")]
    Blue,
}

impl Category {
    /// Every category, in declaration (tie-break) order.
    pub const ALL: [Category; 4] = [
        Category::Red,
        Category::Yellow,
        Category::Green,
        Category::Blue,
    ];

    /// The paired category across the wheel. Involutive and fixed-point free.
    pub fn opposite(&self) -> Category {
        match self {
            Category::Red => Category::Green,
            Category::Green => Category::Red,
            Category::Yellow => Category::Blue,
            Category::Blue => Category::Yellow,
        }
    }

    /// Position in [`Category::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Category::Red => 0,
            Category::Yellow => 1,
            Category::Green => 2,
            Category::Blue => 3,
        }
    }

    /// Display label, as used in questionnaires and reports.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Red => "Rojo",
            Category::Yellow => "Amarillo",
            Category::Green => "Verde",
            Category::Blue => "Azul",
        }
    }

    /// Hex colour used by chart renderers.
    pub fn chart_color(&self) -> &'static str {
        match self {
            Category::Red => "#e6194b",
            Category::Yellow => "#ffe119",
            Category::Green => "#3cb44b",
            Category::Blue => "#4363d8",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = ScoringError;

    /// Accepts the Spanish labels and the English variant names, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rojo" | "red" => Ok(Category::Red),
            "amarillo" | "yellow" => Ok(Category::Yellow),
            "verde" | "green" => Ok(Category::Green),
            "azul" | "blue" => Ok(Category::Blue),
            _ => Err(ScoringError::InvalidCategory(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn any_category() -> impl Strategy<Value = Category> {
        prop::sample::select(Category::ALL.to_vec())
    }

    #[test]
    fn opposite_pairs_match_the_wheel() {
        assert_eq!(Category::Red.opposite(), Category::Green);
        assert_eq!(Category::Yellow.opposite(), Category::Blue);
    }

    #[test]
    fn index_follows_declaration_order() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn from_str_accepts_labels_and_names() {
        assert_eq!("Rojo".parse::<Category>().unwrap(), Category::Red);
        assert_eq!("  azul ".parse::<Category>().unwrap(), Category::Blue);
        assert_eq!("GREEN".parse::<Category>().unwrap(), Category::Green);
    }

    #[test]
    fn from_str_rejects_unknown_category() {
        let err = "Morado".parse::<Category>().unwrap_err();
        assert_eq!(err, ScoringError::InvalidCategory("Morado".to_string()));
    }

    #[test]
    fn serializes_with_spanish_label() {
        assert_eq!(serde_json::to_string(&Category::Yellow).unwrap(), "\"Amarillo\"");
        let parsed: Category = serde_json::from_str("\"Verde\"").unwrap();
        assert_eq!(parsed, Category::Green);
    }

    proptest! {
        #[test]
        fn opposite_is_an_involution(c in any_category()) {
            prop_assert_eq!(c.opposite().opposite(), c);
        }

        #[test]
        fn opposite_has_no_fixed_points(c in any_category()) {
            prop_assert_ne!(c.opposite(), c);
        }

        #[test]
        fn label_parses_back(c in any_category()) {
            prop_assert_eq!(c.label().parse::<Category>().unwrap(), c);
        }
    }
}
