//! Report characters and enemies whose sprite files are missing.
//!
//! Informational only: always exits with status 0 once a report is printed.

use clap::Parser;

use gamedata_tools::{
    audit::run_sprite_audit,
    cli::{init_tracing, LayoutArgs},
};

#[derive(Parser)]
#[command(name = "report-missing-sprites")]
#[command(about = "List missing hero portraits and enemy sprites")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    layout: LayoutArgs,
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

    let report = run_sprite_audit(&layout);
    print!("{}", report.render());
}
