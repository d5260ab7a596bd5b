mod output;
mod parser;
mod pdf;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "aditzak_atera",
    about = "Extract allocutive verb forms (hikako moldea) from the Euskaltzaindia rule-14 PDF"
)]
struct Cli {
    /// Source PDF with the conjugation tables
    #[arg(default_value = "docs/Araua_0014.pdf")]
    pdf: PathBuf,

    /// Destination JSON file
    #[arg(default_value = "json/aditzak_hika.json")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let pages = pdf::extract_pages(&cli.pdf)?;
    info!("Loaded {} pages from {}", pages.len(), cli.pdf.display());
    println!("Processing {} pages...", pages.len());

    let entries = parser::process_pages(pages)?;
    output::write_entries(&cli.output, &entries)?;
    info!(
        "Extracted {} verb forms to {}",
        entries.len(),
        cli.output.display()
    );

    println!(
        "Done: {} verb forms extracted in {:.1}s.",
        entries.len(),
        t0.elapsed().as_secs_f64()
    );
    println!("Written to {}", cli.output.display());
    Ok(())
}
