//! Validate the game's content documents.
//!
//! Checks `weapons.json`, `items.json`, `enemies.json` and `characters.json`
//! and prints every defect found. Exits with status 1 if there are any.
//!
//! # Usage
//!
//! ```bash
//! # From the repository root
//! cargo run -p gamedata_tools --bin validate-data
//!
//! # Another data directory, machine-readable output
//! cargo run -p gamedata_tools --bin validate-data -- --data-dir path/to/data --json
//! ```

use clap::Parser;

use gamedata_tools::{
    cli::{init_tracing, LayoutArgs},
    report::run_validation,
};

#[derive(Parser)]
#[command(name = "validate-data")]
#[command(about = "Check content documents for schema and reference errors")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    layout: LayoutArgs,

    /// Print defects as a JSON array instead of text
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.layout.verbose);

    let layout = match cli.layout.resolve() {
        Ok(layout) => layout,
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(2);
        }
    };
    tracing::debug!("Validating data files in: {}", layout.data_dir.display());

    let report = run_validation(&layout);
    if cli.json {
        match report.render_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                tracing::error!("Failed to serialize report: {e}");
                std::process::exit(2);
            }
        }
    } else {
        print!("{}", report.render());
    }

    std::process::exit(report.exit_code());
}
