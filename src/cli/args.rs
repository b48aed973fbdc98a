//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `generate`: Generate the locale key constants and message table files
//! - `init`: Initialize glotgen configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Folder containing the localization JSON files (overrides config file)
    #[arg(short = 'S', long, env = "GLOTGEN_SOURCE_DIR")]
    pub source_dir: Option<PathBuf>,

    /// Use only this file inside the source folder
    #[arg(short = 's', long, env = "GLOTGEN_SOURCE_FILE")]
    pub source_file: Option<PathBuf>,

    /// Output folder for the generated files (overrides config file)
    #[arg(short = 'O', long, env = "GLOTGEN_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// File name of the generated key constants
    #[arg(long)]
    pub keys_file: Option<String>,

    /// File name of the generated message table
    #[arg(long)]
    pub messages_file: Option<String>,

    /// Locale whose keys become constants (default: first file by name)
    #[arg(long)]
    pub reference_locale: Option<String>,

    /// Fail on symbol collisions and invalid identifiers instead of warning
    #[arg(long)]
    pub strict: bool,

    /// Only generate constants for leaf keys
    #[arg(long)]
    pub skip_branch_keys: bool,

    /// Maximum object nesting depth accepted in a document
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl GenerateArgs {
    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply_to(&self, mut config: Config) -> Config {
        if let Some(dir) = &self.source_dir {
            config.source_dir = dir.to_string_lossy().to_string();
        }
        if let Some(file) = &self.source_file {
            config.source_file = Some(file.to_string_lossy().to_string());
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.to_string_lossy().to_string();
        }
        if let Some(name) = &self.keys_file {
            config.keys_file = name.clone();
        }
        if let Some(name) = &self.messages_file {
            config.messages_file = name.clone();
        }
        if let Some(locale) = &self.reference_locale {
            config.reference_locale = Some(locale.clone());
        }
        if let Some(depth) = self.max_depth {
            config.max_depth = depth;
        }
        config.strict |= self.strict;
        config.skip_branch_keys |= self.skip_branch_keys;
        config
    }
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub args: GenerateArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate locale key constants and the embedded message table
    Generate(GenerateCommand),
    /// Initialize a new .glotgenrc.json configuration file
    Init,
}
