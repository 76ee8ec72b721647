//! Template-based report exporter adapter.
//!
//! Renders a `Report` as a markdown document with a fixed section layout,
//! or as pretty-printed JSON for chart and PDF tooling downstream.

use async_trait::async_trait;

use crate::domain::report::Report;
use crate::domain::scoring::Interpretation;
use crate::ports::{ExportError, ExportFormat, ExportedDocument, ReportExporter};

/// Template-based implementation of ReportExporter.
#[derive(Debug, Clone, Default)]
pub struct TemplateReportExporter;

impl TemplateReportExporter {
    pub fn new() -> Self {
        Self
    }

    /// Renders the full markdown document.
    pub fn render_markdown(&self, report: &Report) -> String {
        let mut doc = format!("# {}\n\n", report.title);
        doc.push_str(&self.profile_section(report));
        doc.push_str(&self.behaviour_section(report));
        doc.push_str(&format!("## Recomendaciones\n\n{}\n\n", report.recommendation));
        doc.push_str(&format!(
            "## Relación con tu color opuesto\n\n{}\n\n",
            report.opposite.guidance
        ));
        doc.push_str(&self.score_section(report));
        if let Some(dual) = &report.dual {
            doc.push_str(&self.dual_section(&dual.conscious, &dual.unconscious));
        }
        doc
    }

    fn profile_section(&self, report: &Report) -> String {
        let profile = &report.profile;
        let mut section = String::from("## Perfil\n\n");
        section.push_str(&format!("- **Dominante:** {}\n", profile.dominant));
        section.push_str(&format!("- **Secundario:** {}\n", profile.secondary));
        section.push_str(&format!("- **Consciente:** {}\n", profile.conscious));
        section.push_str(&format!("- **Inconsciente:** {}\n\n", profile.unconscious));
        section
    }

    fn behaviour_section(&self, report: &Report) -> String {
        format!(
            "## Comportamientos\n\n**Buen día:** {}\n\n**Mal día:** {}\n\n",
            report.behaviours.good_day, report.behaviours.bad_day
        )
    }

    fn score_section(&self, report: &Report) -> String {
        let mut section = String::from("## Puntuaciones\n\n");
        section.push_str("| Color | Puntuación | Porcentaje |\n");
        section.push_str("|-------|-----------:|-----------:|\n");
        for entry in &report.scores {
            section.push_str(&format!(
                "| {} | {} | {} |\n",
                entry.category, entry.score, entry.percentage
            ));
        }
        section.push_str(&format!("\n**Total:** {}\n", report.total));
        section
    }

    fn dual_section(&self, conscious: &Interpretation, unconscious: &Interpretation) -> String {
        let mut section = String::from("\n## Perfil consciente e inconsciente\n\n");
        section.push_str("| | Consciente | Inconsciente |\n");
        section.push_str("|---|---|---|\n");
        section.push_str(&format!(
            "| Dominante | {} | {} |\n",
            conscious.dominant, unconscious.dominant
        ));
        section.push_str(&format!(
            "| Secundario | {} | {} |\n",
            conscious.secondary, unconscious.secondary
        ));
        section
    }

    fn check_filename(base_filename: &str) -> Result<(), ExportError> {
        let trimmed = base_filename.trim();
        if trimmed.is_empty()
            || trimmed.contains('/')
            || trimmed.contains('\\')
            || trimmed.contains("..")
        {
            return Err(ExportError::InvalidFilename(base_filename.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ReportExporter for TemplateReportExporter {
    async fn export(
        &self,
        report: &Report,
        format: ExportFormat,
        base_filename: &str,
    ) -> Result<ExportedDocument, ExportError> {
        Self::check_filename(base_filename)?;

        let content = match format {
            ExportFormat::Markdown => self.render_markdown(report).into_bytes(),
            ExportFormat::Json => serde_json::to_vec_pretty(report)
                .map_err(|e| ExportError::render_failed(e.to_string()))?,
        };

        tracing::debug!(format = %format, bytes = content.len(), "Report rendered");
        Ok(ExportedDocument::new(content, format, base_filename.trim()))
    }

    fn supports(&self, format: ExportFormat) -> bool {
        matches!(format, ExportFormat::Markdown | ExportFormat::Json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::{NarrativeCatalog, ReportAssembler};
    use crate::domain::scoring::{InterpretationPolicy, Interpreter, ScoreTally};
    use crate::domain::styles::Category;

    fn sample_report() -> Report {
        let tally = ScoreTally::from_scores([
            (Category::Red, 24),
            (Category::Yellow, 6),
            (Category::Green, 0),
            (Category::Blue, 2),
        ]);
        let interpretation =
            Interpreter::interpret(&tally, &InterpretationPolicy::default()).unwrap();
        ReportAssembler::assemble(&tally, &interpretation, None, &NarrativeCatalog::default())
    }

    #[tokio::test]
    async fn markdown_contains_every_section() {
        let exporter = TemplateReportExporter::new();
        let doc = exporter
            .export(&sample_report(), ExportFormat::Markdown, "informe")
            .await
            .unwrap();

        let text = String::from_utf8(doc.content).unwrap();
        assert!(text.starts_with("# Estilos de Comunicación Preferenciales"));
        assert!(text.contains("- **Dominante:** Rojo"));
        assert!(text.contains("- **Secundario:** Amarillo"));
        assert!(text.contains("## Comportamientos"));
        assert!(text.contains("## Recomendaciones"));
        assert!(text.contains("Tu color opuesto es Verde"));
        assert!(text.contains("| Rojo | 24 | 75% |"));
        assert!(text.contains("**Total:** 32"));
        assert!(!text.contains("Perfil consciente e inconsciente"));
        assert_eq!(doc.filename, "informe.md");
    }

    #[tokio::test]
    async fn json_round_trips_to_same_report() {
        let exporter = TemplateReportExporter::new();
        let report = sample_report();
        let doc = exporter
            .export(&report, ExportFormat::Json, "informe")
            .await
            .unwrap();

        let back: Report = serde_json::from_slice(&doc.content).unwrap();
        assert_eq!(back, report);
        assert_eq!(doc.filename, "informe.json");
    }

    #[tokio::test]
    async fn export_is_deterministic() {
        let exporter = TemplateReportExporter::new();
        let report = sample_report();
        let a = exporter.export(&report, ExportFormat::Markdown, "a").await.unwrap();
        let b = exporter.export(&report, ExportFormat::Markdown, "a").await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn rejects_path_like_filenames() {
        let exporter = TemplateReportExporter::new();
        for name in ["", "  ", "../x", "dir/x", "dir\\x"] {
            let result = exporter
                .export(&sample_report(), ExportFormat::Markdown, name)
                .await;
            assert!(
                matches!(result, Err(ExportError::InvalidFilename(_))),
                "accepted {:?}",
                name
            );
        }
    }

    #[test]
    fn supports_both_formats() {
        let exporter = TemplateReportExporter::new();
        assert!(exporter.supports(ExportFormat::Markdown));
        assert!(exporter.supports(ExportFormat::Json));
    }
}
