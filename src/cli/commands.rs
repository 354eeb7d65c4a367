//! Command implementations for the DDT importer CLI
//!
//! The import command is a thin consumer of the core: it reads the file,
//! runs the importer, and renders the resulting document and diagnostics to
//! the console. All parsing behavior lives in the library.

use colored::Colorize;
use tracing::debug;

use crate::app::models::VerificationStatus;
use crate::app::services::importer::{DdtImporter, ImportOutcome};
use crate::cli::args::{Args, Commands, ImportArgs};
use crate::{Error, Result};

/// Main command runner, dispatching to the subcommand handlers
pub fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Commands::Import(import_args)) => run_import(import_args),
        None => {
            // clap prints usage for us via --help; mirror the short form here
            println!("Usage: ddt-importer import <FILE> [OPTIONS]");
            println!("Try 'ddt-importer import --help' for details.");
            Ok(())
        }
    }
}

/// Execute the import command
fn run_import(args: ImportArgs) -> Result<()> {
    setup_logging(&args);

    let text = std::fs::read_to_string(&args.file)
        .map_err(|e| Error::io(format!("failed to read {}", args.file.display()), e))?;
    debug!("read {} bytes from {}", text.len(), args.file.display());

    let importer = DdtImporter::new(args.to_config()?)?;
    let outcome = importer.parse(&text, args.format.as_deref())?;

    print_outcome(&outcome, args.quiet);
    Ok(())
}

/// Render the normalized document and its diagnostics
fn print_outcome(outcome: &ImportOutcome, quiet: bool) {
    let document = &outcome.document;

    println!("{}", "=== DOCUMENT ===".bold());
    println!("Supplier:     {} ({})", document.supplier_name, outcome.format);
    println!("Type:         {}", document.doc_type);
    println!("Number:       {}", field(&document.doc_number));
    println!(
        "Date:         {}",
        document
            .doc_date
            .map(|d| d.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|| "-".to_string())
    );
    println!("Customer:     {}", field(&document.customer_name));
    println!("Destination:  {}", field(&document.destination_line1));
    if document.destination_line2.is_some() {
        println!("              {}", field(&document.destination_line2));
    }

    let verification = match document.verification {
        VerificationStatus::Verified => "verified".green().to_string(),
        VerificationStatus::Unverified => "UNVERIFIED - review recipient".red().to_string(),
        VerificationStatus::NotChecked => "not checked".dimmed().to_string(),
    };
    println!("Recipient:    {}", verification);

    println!("\n{}", "=== LINE ITEMS ===".bold());
    for item in &document.line_items {
        let code = item
            .supplier_article_code
            .as_deref()
            .or(item.article_code.as_deref())
            .unwrap_or("-");
        let price = item
            .unit_price
            .map(|p| format!("{:.2}", p))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>4}  {:<20} {:<40} qty {:>10.3}  price {:>10}",
            item.row_number,
            code,
            item.description.as_deref().unwrap_or("-"),
            item.quantity,
            price
        );
    }
    println!("\nTotal line items: {}", document.line_items.len());

    let diagnostics = &outcome.diagnostics;
    if !diagnostics.is_clean() && !quiet {
        println!(
            "\n{} {} row(s) skipped, {} issue(s):",
            "!".yellow().bold(),
            diagnostics.rows_skipped,
            diagnostics.entries.len()
        );
        for entry in &diagnostics.entries {
            match entry.line {
                Some(line) => println!("  line {}: {}", line, entry.message),
                None => println!("  {}", entry.message),
            }
        }
    }
}

/// Render an optional field for the console
fn field(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

/// Set up structured logging for the import command
fn setup_logging(args: &ImportArgs) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let level = if args.quiet { "error" } else { &args.log_level };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ddt_importer={}", level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}
