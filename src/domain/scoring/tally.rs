//! Per-category score tally.

use crate::domain::styles::Category;

/// Accumulated score for each category.
///
/// Starts at zero everywhere and only grows while responses are folded in;
/// once returned by the engine it is treated as immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScoreTally {
    scores: [u32; 4],
}

impl ScoreTally {
    /// An all-zero tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tally from explicit scores; categories not listed stay at zero
    /// and repeated categories accumulate.
    pub fn from_scores(scores: impl IntoIterator<Item = (Category, u32)>) -> Self {
        let mut tally = Self::new();
        for (category, score) in scores {
            tally.add(category, score);
        }
        tally
    }

    pub(crate) fn add(&mut self, category: Category, weight: u32) {
        let slot = &mut self.scores[category.index()];
        *slot = slot.saturating_add(weight);
    }

    pub fn get(&self, category: Category) -> u32 {
        self.scores[category.index()]
    }

    pub fn total(&self) -> u32 {
        self.scores.iter().fold(0u32, |acc, s| acc.saturating_add(*s))
    }

    /// True when nothing has been scored.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Scores in category declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        Category::ALL.iter().map(move |c| (*c, self.get(*c)))
    }
}
