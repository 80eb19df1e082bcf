#![warn(clippy::uninlined_format_args)]

mod bootstrap;
mod commands;

use bootstrap::AppConfig;
use commands::Command;
use std::{borrow::Cow, env, process};
use tabsplit_application::GroupProcessor;
use tabsplit_infrastructure::JsonFileStore;

type CliResult<T> = Result<T, Cow<'static, str>>;

fn main() {
    bootstrap::init_logging();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let config = AppConfig::from_env();
    let args: Vec<String> = env::args().skip(1).collect();
    let command = Command::parse(&args)?;

    tracing::debug!(state_path = %config.state_path.display(), ?command, "running command");

    let store = JsonFileStore::new(&config.state_path);
    let processor = GroupProcessor::new(&store);
    print!("{}", commands::execute(command, &processor, &config)?);
    Ok(())
}
