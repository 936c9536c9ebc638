//! word-drill CLI: load word lists, draw a drill, run it on the terminal.

use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use tracing::error;

use word_drill::{
    generate_drill, load, session, DrillMode, DrillRequest, LogConfig, LogTarget,
};

#[derive(Parser)]
#[command(
    name = "word-drill",
    version,
    about = "Reads the words from the input CSV files and quizzes you on them",
    after_help = "Example:\n  word-drill german words.csv verbs.csv -l 20"
)]
struct Cli {
    /// What kind of drill to run
    #[arg(value_enum, ignore_case = true)]
    mode: DrillMode,

    /// CSV files with the words
    #[arg(required = true)]
    sources: Vec<PathBuf>,

    /// Don't show the category of the word in the prompt
    #[arg(long)]
    no_show_category: bool,

    /// How many words to draw (default: every word)
    #[arg(short, long, allow_negative_numbers = true)]
    length: Option<usize>,

    /// 0 = DEBUG, 1 = INFO, 2 = WARNING, 3 = ERROR, 4 = CRITICAL
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=4))]
    log_level: u8,

    /// Where the logs will be written: stderr, stdout or a file path
    #[arg(long, default_value = "stderr")]
    log_file: String,

    /// Seed for a reproducible drill
    #[arg(long)]
    seed: Option<u64>,
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let table = load(&cli.sources).context("loading word lists")?;

    let request = DrillRequest {
        mode: cli.mode,
        length: cli.length,
        show_category: !cli.no_show_category,
        rng_seed: cli.seed,
    };
    let pairs = generate_drill(&table, &request);

    let stdin = io::stdin();
    let stdout = io::stdout();
    session::run(&pairs, cli.mode.kind(), &mut stdin.lock(), &mut stdout.lock())
        .context("running drill session")?;
    Ok(())
}

fn main() {
    if std::env::args_os().len() <= 1 {
        let _ = Cli::command().write_long_help(&mut io::stderr());
        process::exit(1);
    }

    let cli = Cli::parse();
    let log = LogConfig {
        level: cli.log_level,
        target: LogTarget::parse(&cli.log_file),
    };
    let dispatch = match log.dispatch() {
        Ok(dispatch) => dispatch,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let result = tracing::dispatcher::with_default(&dispatch, || {
        run(cli).inspect_err(|e| error!("{e:#}"))
    });

    if let Err(e) = result {
        // Already on stderr via the error! above.
        if log.target != LogTarget::Stderr {
            eprintln!("Error: {e:#}");
        }
        process::exit(1);
    }
}
