//! Lexicon CLI - interactive vocabulary manager.

mod cli;
mod shell;

use std::io;

use clap::Parser;

use cli::Cli;
use shell::{Shell, ShellConfig};

fn main() {
    let cli = Cli::parse();

    let config = ShellConfig {
        file: cli.file,
        autoload: !cli.no_autoload,
        save_on_exit: !cli.no_save_on_exit,
        tries: cli.tries,
        short_listing: cli.short,
        word_width: cli.width,
        verbose: cli.verbose,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(config, stdin.lock(), stdout.lock());

    if let Err(e) = shell.run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
