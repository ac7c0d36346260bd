use airGM::cli::cli_main::{Cli, cli_main};
use clap::Parser;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

pub fn main() {
    let cli = Cli::parse();
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap_or_else(|e| eprintln!("logger is not available: {}", e));
    if let Err(e) = cli_main(&cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
