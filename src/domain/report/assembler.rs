//! Report Assembler - turns a scored, interpreted tally into a `Report`.

use super::{Behaviours, CategoryScore, NarrativeCatalog, OppositeGuidance, ProfileSummary, Report};
use crate::domain::foundation::Percentage;
use crate::domain::scoring::{DualProfile, Interpretation, ScoreTally};

/// Report assembly functions.
///
/// Pure: no I/O, no clock, no randomness. The same inputs always produce
/// an identical report.
pub struct ReportAssembler;

impl ReportAssembler {
    pub fn assemble(
        tally: &ScoreTally,
        interpretation: &Interpretation,
        dual: Option<DualProfile>,
        catalog: &NarrativeCatalog,
    ) -> Report {
        let dominant = interpretation.dominant;
        let total = tally.total();

        let scores = tally
            .iter()
            .map(|(category, score)| CategoryScore {
                category,
                score,
                percentage: Percentage::share_of(score, total),
                color: category.chart_color().to_string(),
            })
            .collect();

        Report {
            title: catalog.title().to_string(),
            profile: ProfileSummary {
                dominant,
                secondary: interpretation.runner_up,
                conscious: interpretation.conscious(),
                unconscious: interpretation.unconscious(),
                gap: interpretation.gap,
            },
            behaviours: Behaviours {
                good_day: catalog.good_day(dominant),
                bad_day: catalog.bad_day(dominant),
            },
            recommendation: catalog.recommendation(dominant, interpretation.runner_up),
            opposite: OppositeGuidance {
                category: dominant.opposite(),
                guidance: catalog.opposite_guidance(dominant),
            },
            scores,
            total,
            dual,
        }
    }
}
