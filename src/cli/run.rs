use std::{fs, path::Path};

use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, CommandSummary, InitSummary, check::check, list::list},
};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Dispatch to the command handler for the parsed arguments.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::List(cmd)) => list(cmd),
        Some(Command::Init) => {
            init()?;
            Ok(CommandResult::without_issues(CommandSummary::Init(
                InitSummary { created: true },
            )))
        }
        None => bail!("No command provided. Use --help to see available commands."),
    }
}

fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(())
}
