//! Command-line die roller.

mod logging;
mod render;
mod roll;

use std::process;

use clap::Parser;

use roll::{Output, RollOptions};

#[derive(Parser)]
#[command(
    name = "droll",
    about = "Roll dice from tabletop RPG die codes",
    long_about = "Roll dice from tabletop RPG die codes.\n\n\
        Codes look like [count]<type>[0]<faces>[.threshold][+/-modifier]:\n  \
        d  sum           3d6+2\n  \
        x  explode       3x4.3+7\n  \
        e  explode all   3e4\n  \
        k  keep highest  4k6.3\n  \
        K  keep lowest   2K20\n  \
        n  count >= t    6n10.6\n  \
        N  count <= t    6N10.5\n\n\
        A leading 0 on the faces (3d03) numbers the die from 0.",
    version
)]
struct Cli {
    /// Die codes to roll
    #[arg(required = true)]
    codes: Vec<String>,

    /// RNG seed for repeatable rolls
    #[arg(short, long)]
    seed: Option<u64>,

    /// Roll each code this many times
    #[arg(short = 'n', long, default_value = "1")]
    times: u32,

    /// Print only the total of each roll
    #[arg(short, long, conflicts_with = "json")]
    total_only: bool,

    /// Print each roll as a JSON object
    #[arg(long)]
    json: bool,

    /// Log parsing and rolling details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let output = if cli.json {
        Output::Json
    } else if cli.total_only {
        Output::Total
    } else {
        Output::Line
    };
    let options = RollOptions {
        seed: cli.seed,
        times: cli.times,
        output,
    };

    if let Err(e) = roll::run(&cli.codes, &options) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
