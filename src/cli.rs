use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Addressbook - contacts, phone numbers and birthday reminders in your terminal
#[derive(Debug, Parser)]
#[command(name = "addressbook")]
#[command(about = "Contacts, phone numbers and birthday reminders in your terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Contacts file to load and save (overrides the config file)
    #[arg(long = "data-file", value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Configuration file to use instead of the default location
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Do not save contacts on exit
    #[arg(long = "no-save")]
    pub no_save: bool,
}

impl Cli {
    /// Load the configuration and apply command line overrides on top
    pub fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        if let Some(path) = &self.data_file {
            config.storage.data_file = Some(path.clone());
        }
        if self.no_save {
            config.storage.autosave = false;
        }
        Ok(config)
    }
}
