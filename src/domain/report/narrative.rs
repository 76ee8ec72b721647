//! Narrative catalog - static text fragments keyed by category.
//!
//! The catalog is built once and passed by reference to the assembler.
//! Nothing here is mutated after construction; customised catalogs are
//! produced with [`NarrativeCatalog::with_style`], which returns a new value.

use serde::{Deserialize, Serialize};

use crate::domain::styles::Category;

/// Default report title.
pub const DEFAULT_TITLE: &str = "Estilos de Comunicación Preferenciales";

/// Text fragments describing one style.
///
/// Fragments are sentence tails; the catalog supplies the framing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleNarrative {
    /// How the style shows up when things go well.
    pub good_day: String,
    /// How the style degrades under pressure.
    pub bad_day: String,
    /// Noun phrase naming what the style contributes to others.
    pub strength: String,
    /// Development advice for someone with this dominant style.
    pub growth: String,
    /// Advice for others on connecting with this style.
    pub connect_with: String,
}

impl StyleNarrative {
    fn new(
        good_day: &str,
        bad_day: &str,
        strength: &str,
        growth: &str,
        connect_with: &str,
    ) -> Self {
        Self {
            good_day: good_day.to_string(),
            bad_day: bad_day.to_string(),
            strength: strength.to_string(),
            growth: growth.to_string(),
            connect_with: connect_with.to_string(),
        }
    }
}

/// Immutable lookup table of report text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrativeCatalog {
    title: String,
    styles: [StyleNarrative; 4],
}

impl NarrativeCatalog {
    pub fn new(title: impl Into<String>, styles: [StyleNarrative; 4]) -> Self {
        Self {
            title: title.into(),
            styles,
        }
    }

    /// Returns a copy with the narrative for `category` replaced.
    pub fn with_style(mut self, category: Category, narrative: StyleNarrative) -> Self {
        self.styles[category.index()] = narrative;
        self
    }

    /// Returns a copy with a different title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn narrative(&self, category: Category) -> &StyleNarrative {
        &self.styles[category.index()]
    }

    pub fn good_day(&self, dominant: Category) -> String {
        format!(
            "En un buen día, tu estilo {} {}.",
            dominant,
            self.narrative(dominant).good_day
        )
    }

    pub fn bad_day(&self, dominant: Category) -> String {
        format!(
            "En un mal día, tu estilo {} {}.",
            dominant,
            self.narrative(dominant).bad_day
        )
    }

    /// Combined "dominant with influence from secondary" recommendation.
    pub fn recommendation(&self, dominant: Category, secondary: Category) -> String {
        let own = self.narrative(dominant);
        if dominant == secondary {
            return format!("Para mejorar tu comunicación {}, {}.", dominant, own.growth);
        }
        format!(
            "Combina tu {} con {} de {}. Para mejorar tu comunicación {}, {}.",
            dominant,
            self.narrative(secondary).strength,
            secondary,
            dominant,
            own.growth
        )
    }

    /// Relationship guidance towards the opposite of `dominant`.
    pub fn opposite_guidance(&self, dominant: Category) -> String {
        let opposite = dominant.opposite();
        format!(
            "Tu color opuesto es {}. Para conectar mejor con perfiles {}, {}.",
            opposite,
            opposite,
            self.narrative(opposite).connect_with
        )
    }
}

impl Default for NarrativeCatalog {
    fn default() -> Self {
        Self::new(
            DEFAULT_TITLE,
            [
                StyleNarrative::new(
                    "aporta energía, claridad y liderazgo",
                    "puede volverse autoritario o impaciente",
                    "la determinación",
                    "practica la escucha activa y deja espacio a otras opiniones",
                    "sé directo y ve al grano",
                ),
                StyleNarrative::new(
                    "contagia entusiasmo y abre conversaciones",
                    "puede volverse disperso o poco constante",
                    "el entusiasmo",
                    "aterriza tus ideas en planes concretos y cierra lo que empiezas",
                    "muestra entusiasmo y deja espacio para la conversación",
                ),
                StyleNarrative::new(
                    "muestra empatía y colaboración",
                    "puede volverse pasivo o indeciso",
                    "la empatía",
                    "practica afirmarte con claridad y tomar iniciativas",
                    "muestra interés genuino y dale tiempo para asimilar los cambios",
                ),
                StyleNarrative::new(
                    "aporta rigor y precisión en el análisis",
                    "puede volverse crítico o distante",
                    "el rigor",
                    "comparte tus conclusiones antes de tener todos los datos",
                    "llega con datos y detalles, y dale tiempo para analizar",
                ),
            ],
        )
    }
}
