use std::{fs::File, io::BufWriter, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use phonetic_cost::{phoneme::PhonemeTable, CostFunction, PhoneticCostFunction};
use simplelog::{ColorChoice, TermLogger, TerminalMode};

#[derive(Parser)]
struct Cli {
    /// The minimum importance of log messages to output.
    #[clap(long, short = 'l', default_value = "info")]
    log_level: LevelFilter,

    /// A CSV file with a custom phoneme inventory.
    ///
    /// The first row is a header, and every further row contains a symbol followed by its
    /// weighted place, obstruction, length, nasality, roundedness, voice and laterality.
    /// If not given, the British English inventory is used.
    #[clap(long, short = 'f')]
    features: Option<PathBuf>,

    /// The file to write the pairwise cost matrix to as CSV.
    /// If not given, the matrix is written to stdout.
    #[clap(long, short = 'o')]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    TermLogger::init(
        cli.log_level,
        Default::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    info!("Logging initialised");

    let custom_cost_function;
    let cost_function = if let Some(path) = &cli.features {
        custom_cost_function = PhoneticCostFunction::new(PhonemeTable::from_csv_file(path)?)
            .with_context(|| format!("Error building cost function from {path:?}"))?;
        &custom_cost_function
    } else {
        info!("Using the British English inventory");
        PhoneticCostFunction::en_gb()
    };

    info!(
        "Costs range from {} to {}",
        cost_function.min_cost(),
        cost_function.max_cost()
    );

    if let Some(path) = &cli.output {
        info!("Writing cost matrix to {path:?}");
        let file =
            File::create(path).with_context(|| format!("Error creating output file {path:?}"))?;
        cost_function
            .cost_table()
            .write_csv(cost_function.phonemes(), BufWriter::new(file))
            .with_context(|| format!("Error writing output file {path:?}"))?;
    } else {
        cost_function
            .cost_table()
            .write_csv(cost_function.phonemes(), std::io::stdout().lock())?;
    }

    info!("Terminating");

    Ok(())
}
