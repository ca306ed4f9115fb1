//! Play blackjack against the dealer in the terminal.

use std::io;
use std::process::ExitCode;

use bjterm::options::DEFAULT_BALANCE;
use bjterm::{GameOptions, Session};
use clap::Parser;
use log::LevelFilter;

/// Single-player blackjack against a dealer who stands on 17.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Starting cash balance.
    #[arg(long, default_value_t = DEFAULT_BALANCE)]
    balance: f64,
    /// Seed for the shuffler, for a reproducible sequence of decks.
    #[arg(long)]
    seed: Option<u64>,
    /// Log more detail to stderr (repeat for more).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    const fn level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    const fn options(&self) -> GameOptions {
        GameOptions {
            starting_balance: self.balance,
            seed: self.seed,
        }
    }
}

fn log(level: LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    if let Err(err) = simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("failed to initialize logger: {err}");
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    log(args.level());

    let options = args.options();
    if let Err(err) = options.validate() {
        log::error!("{err}");
        return ExitCode::FAILURE;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(options, stdin.lock(), stdout.lock());

    match session.run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("session aborted: {err}");
            ExitCode::FAILURE
        }
    }
}
