use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::info;

use mietcheck::config::AppConfig;
use mietcheck::error::AppError;
use mietcheck::rentcheck::{
    ComparisonStatus, CsvHistoryImporter, HistoryValidator, ReferenceRateTable, RentHistory,
    ValidationReport,
};
use mietcheck::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "mietcheck",
    about = "Check a Swiss tenancy's rent history against the published reference rates",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a tenancy history and report unapplied reductions
    Check(CheckArgs),
    /// Print the published reference-rate series
    Rates,
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// History file: a JSON rent history, or a CSV export (*.csv)
    history: PathBuf,
    /// Validation date (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,
    /// Emit the raw report as JSON instead of the rendered summary
    #[arg(long)]
    json: bool,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let cli = Cli::parse();
    match cli.command {
        Command::Check(args) => run_check(args, &config),
        Command::Rates => {
            render_rates(&ReferenceRateTable::official());
            Ok(())
        }
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

fn run_check(args: CheckArgs, config: &AppConfig) -> Result<(), AppError> {
    let history = load_history(&args.history)?;
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    let validator = HistoryValidator::with_official_table(config.validation.clone());
    let report = validator.validate(&history, today);

    info!(
        %today,
        comparisons = report.comparisons.len(),
        critical = report.critical.len(),
        "validation finished"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_report(&report, today);
    }

    Ok(())
}

fn load_history(path: &Path) -> Result<RentHistory, AppError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("csv") => Ok(CsvHistoryImporter::from_path(path)?),
        _ => {
            let file = File::open(path)?;
            Ok(serde_json::from_reader(file)?)
        }
    }
}

fn render_rates(table: &ReferenceRateTable) {
    println!("Publizierte Referenzzinssätze (BWO)");
    for entry in table.entries() {
        println!("- ab {}: {}%", entry.effective_date, entry.rate_percent);
    }
}

fn render_report(report: &ValidationReport, today: NaiveDate) {
    println!("Mietzins-Prüfung per {today}");
    if report.is_valid {
        println!("Chronologie: in Ordnung");
    } else {
        println!("\nFehler");
        for finding in &report.errors {
            println!("- [{}] {}", finding.kind.label(), finding.message);
        }
    }

    if report.comparisons.is_empty() {
        println!("\nSoll/Ist-Vergleich: keine Anpassungen erfasst");
    } else {
        println!("\nSoll/Ist-Vergleich");
        for row in &report.comparisons {
            println!(
                "- {} | Soll CHF {} ({}%) | Ist CHF {} ({}%) | {}",
                row.date,
                row.expected_rent,
                row.expected_rate,
                row.actual_rent,
                row.actual_rate,
                row.status.label()
            );
            if row.status != ComparisonStatus::Correct {
                println!("  {}", row.explanation);
            }
        }
    }

    if !report.skipped_steps.is_empty() {
        println!("\nÜbersprungene Schritte");
        for notice in &report.skipped_steps {
            println!("- zwischen {} und {}:", notice.from_date, notice.to_date);
            for step in &notice.missed {
                println!(
                    "  - ab {}: {}% (Mietzins wäre CHF {})",
                    step.date, step.rate_percent, step.rent
                );
            }
        }
    }

    if !report.warnings.is_empty() {
        println!("\nWarnungen");
        for finding in &report.warnings {
            println!("- [{}] {}", finding.kind.label(), finding.message);
        }
    }

    if !report.critical.is_empty() {
        println!("\nKritische Befunde");
        for finding in &report.critical {
            println!("- [{}] {}", finding.kind.label(), finding.message);
        }
    }

    match &report.savings {
        Some(savings) => println!(
            "\nSparpotenzial: CHF {}/Monat (CHF {}/Jahr), Herabsetzung frühestens wirksam per {}",
            savings.monthly, savings.yearly, savings.next_eligible_date
        ),
        None => println!("\nKein offenes Sparpotenzial festgestellt"),
    }
}
