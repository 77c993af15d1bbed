//! Command-line arguments.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{ArgAction, Parser};

use crate::types::DEFAULT_LEXICON_PATH;

#[derive(Debug, Parser)]
#[command(
    name = "tui-boggle",
    version,
    about = "Terminal Boggle: trace words through a shaken 4x4 letter grid",
    long_about = "Terminal Boggle.\n\n\
                  Click a letter to start a word, click neighbouring letters to extend it,\n\
                  and click the last letter again to submit. Arrow keys and Enter work too.\n\
                  Press r to re-shake the board, q or Esc to quit."
)]
pub struct Cli {
    /// Word list, one word per line.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_LEXICON_PATH)]
    pub lexicon: PathBuf,

    /// Seed for the dice (default: derived from the clock).
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u32>,

    /// Write logs to this file. Logging is off without it.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The explicit seed, or one taken from the system clock.
    pub fn seed(&self) -> u32 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
