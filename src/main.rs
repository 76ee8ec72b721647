//! Terminal driver for the communication styles questionnaire.
//!
//! Asks each question on stdout, reads answers from stdin (option number or
//! label), prints the report and exports it to the configured directory.

use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use communication_styles::adapters::{FsReportStorage, TemplateReportExporter};
use communication_styles::application::{
    AssessmentService, ExportReportCommand, ExportReportHandler,
};
use communication_styles::config::{AppConfig, LoggingConfig};
use communication_styles::domain::report::{NarrativeCatalog, Report};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("loading configuration")?;
    config.validate().context("validating configuration")?;
    init_tracing(&config.logging)?;

    let bank = config
        .questionnaire
        .load_bank()
        .context("loading question bank")?;
    let service = AssessmentService::new(
        Arc::new(bank),
        config.scoring.settings(),
        Arc::new(NarrativeCatalog::default()),
    );

    let mut assessment = service.start()?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(question) = service.current_question(&assessment) {
        let id = question.id();
        let levels = question.offered_levels();

        println!();
        println!("[{}] {}", service.progress(&assessment), question.text());
        for (i, level) in levels.iter().enumerate() {
            println!("  {}. {}", i + 1, level);
        }

        let Some(line) = lines.next_line().await? else {
            anyhow::bail!("input closed before the questionnaire was finished");
        };
        let input = line.trim();

        let result = match input.parse::<usize>() {
            Ok(n) if (1..=levels.len()).contains(&n) => {
                service.submit_response(&mut assessment, id, levels[n - 1])
            }
            _ => service.submit_label(&mut assessment, id, input),
        };
        if let Err(e) = result {
            println!("  {}", e.message);
        }
    }

    let report = service.get_report(&mut assessment)?.clone();
    print_report(&report);

    if config.export.enabled {
        let handler = ExportReportHandler::new(
            Arc::new(TemplateReportExporter::new()),
            Arc::new(FsReportStorage::new(&config.export.output_dir)),
        );
        let command = ExportReportCommand {
            report,
            format: config.export.format,
            base_filename: config.export.base_filename.clone(),
        };
        // Export failure is reported but does not invalidate the printed report
        match handler.handle(command).await {
            Ok(result) => println!("\nInforme guardado en {}", result.path.display()),
            Err(e) => eprintln!("\nNo se pudo guardar el informe: {}", e),
        }
    }

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
    let filter = logging.env_filter()?;
    let registry = tracing_subscriber::registry().with(filter);
    if logging.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
    Ok(())
}

fn print_report(report: &Report) {
    let profile = &report.profile;
    println!("\n{}\n", report.title);
    println!("Dominante:    {}", profile.dominant);
    println!("Secundario:   {}", profile.secondary);
    println!("Consciente:   {}", profile.conscious);
    println!("Inconsciente: {}", profile.unconscious);
    println!();
    println!("{}", report.behaviours.good_day);
    println!("{}", report.behaviours.bad_day);
    println!();
    println!("{}", report.recommendation);
    println!("{}", report.opposite.guidance);
    println!();
    for entry in &report.scores {
        println!(
            "  {:<9} {:>3}  {:>4}",
            entry.category.to_string(),
            entry.score,
            entry.percentage.to_string()
        );
    }
}
