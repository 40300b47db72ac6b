//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// Lexicon: interactive vocabulary manager
#[derive(Debug, Parser)]
#[command(name = "lexicon")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Vocabulary file to load and save
    #[arg(short, long, value_name = "FILE", default_value = "voc.txt")]
    pub file: PathBuf,

    /// Do not load the vocabulary file at startup
    #[arg(long)]
    pub no_autoload: bool,

    /// Do not save the vocabulary when exiting
    #[arg(long)]
    pub no_save_on_exit: bool,

    /// Guess attempts allowed per quizzed word
    #[arg(long, value_name = "N", default_value_t = lexicon::quiz::DEFAULT_TRIES)]
    pub tries: usize,

    /// Entries shown in the short listing above the menu
    #[arg(long, value_name = "N", default_value_t = 5)]
    pub short: usize,

    /// Column width words are right-aligned into
    #[arg(long, value_name = "N", default_value_t = 15)]
    pub width: usize,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
