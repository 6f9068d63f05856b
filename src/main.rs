//! Binary entry point: resolve flags, install the colored logger, seed the
//! catalog, and run the lending walkthrough once.
use anyhow::Context;
use clap::Parser;
use library_catalog::{demo, logging, Cli, Library, Settings};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::from_cli(&cli);
    logging::init(&settings).context("failed to set up logging")?;

    let mut library = Library::seeded().with_processing_delay(settings.processing_delay);
    demo::run(&mut library).context("demo walkthrough failed")?;
    Ok(())
}
