#![doc = include_str!("../README.md")]

pub mod cargo;
pub mod cli;
pub mod command;
pub mod config;
pub mod dispatch;
pub mod error;

pub use error::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run() -> Result<()> {
    use clap::Parser;

    let cli = cli::ReleaseCli::parse();
    init_logging(cli.verbose);

    let config = config::Config::from(cli);
    command::execute(&config)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
