use std::{env, fs, path::Path};

use anyhow::{Context, Result};
use colored::Colorize;

use super::{
    args::{Arguments, Command, GenerateCommand},
    exit_status::ExitStatus,
    report::{self, SUCCESS_MARK},
};
use crate::config::{CONFIG_FILE_NAME, default_config_json, load_config};
use crate::core::generate;

/// Dispatch to the command handler.
///
/// # Returns
/// - `Ok(ExitStatus::Success)` when the command did its work
/// - `Ok(ExitStatus::Failure)` when the input prevented it (reported already)
/// - `Err` for internal errors such as an unreadable config file
pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    let cwd = env::current_dir().context("Failed to read current directory")?;

    match command {
        Some(Command::Generate(cmd)) => run_generate(&cwd, cmd),
        Some(Command::Init) => init(&cwd),
        None => anyhow::bail!("No command provided. Use --help to see available commands."),
    }
}

fn run_generate(cwd: &Path, GenerateCommand { args }: GenerateCommand) -> Result<ExitStatus> {
    let loaded = load_config(cwd)?;
    let config = args.apply_to(loaded.config);
    config.validate()?;

    if args.verbose {
        report::print_config_source(loaded.path.as_deref());
    }

    let generation = match generate(cwd, &config) {
        Ok(generation) => generation,
        Err(err) => {
            report::print_error(&err.to_string());
            report::print_failure("Generation failed");
            return Ok(ExitStatus::Failure);
        }
    };

    report::print_warnings(&generation.warnings);
    if args.verbose {
        report::print_documents(&generation);
    }

    generation
        .write()
        .context("Failed to write generated files")?;
    report::print_generated(&generation);

    Ok(ExitStatus::Success)
}

fn init(cwd: &Path) -> Result<ExitStatus> {
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        report::print_error(&format!("{} already exists", CONFIG_FILE_NAME));
        return Ok(ExitStatus::Failure);
    }

    fs::write(&config_path, format!("{}\n", default_config_json()?))
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", CONFIG_FILE_NAME).green()
    );

    Ok(ExitStatus::Success)
}
