/*! `mwc` - macOS window control from the command line. */

mod commands;
mod error;
mod fullscreen;

use clap::Parser;
use commands::Cli;

fn main() {
  let cli = Cli::parse();
  init_logging(cli.verbose);

  if let Err(err) = cli.execute() {
    eprintln!("mwc: {err}");
    std::process::exit(1);
  }
}

fn init_logging(verbose: u8) {
  let level = match verbose {
    0 => "warn",
    1 => "info",
    2 => "debug",
    _ => "trace",
  };
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
