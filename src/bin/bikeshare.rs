use anyhow::{Context, Result};
use bikeshare_stats::prompt::{Answer, Prompter};
use bikeshare_stats::{report, storage};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "bikeshare",
    version,
    about = "Interactively explore US bikeshare trip data"
)]
struct Cli {
    /// Directory holding chicago.csv, new_york_city.csv and washington.csv.
    #[arg(long, env = "BIKESHARE_DATA_DIR", default_value = ".")]
    data_dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("data directory: {}", cli.data_dir.display());

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    loop {
        let selection = match prompter.get_filters()? {
            Answer::Value(s) => s,
            Answer::Exit => break,
        };

        let table = storage::load_data(&cli.data_dir, &selection)
            .with_context(|| format!("loading trips for {:?}", selection))?;

        let out = prompter.output();
        report::full_report(out, &table)?;
        out.flush()?;

        if !prompter.ask_restart()? {
            return Ok(());
        }
    }

    writeln!(prompter.output(), "Exiting the program. Have a nice day!")?;
    Ok(())
}
