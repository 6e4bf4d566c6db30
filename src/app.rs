use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::address_book::AddressBook;
use crate::command_processor::{CommandProcessor, Reply};
use crate::config::Config;
use crate::state::{ContactStorage, StorageError};

const PROMPT: &str = "Enter a command: ";

pub struct Application {
    command_processor: CommandProcessor,
    storage: ContactStorage,
    autosave: bool,
}

impl Application {
    pub fn new(config: Config) -> Self {
        let storage = ContactStorage::new(config.data_file());
        Self {
            command_processor: CommandProcessor::new(config.birthdays),
            storage,
            autosave: config.storage.autosave,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        log::info!("Starting address book with data file {:?}", self.storage.path());
        let mut book = self.load_book();
        let mut rl = DefaultEditor::new()?;

        println!("Welcome to the assistant bot!");

        loop {
            match rl.readline(PROMPT) {
                Ok(line) => {
                    let _ = rl.add_history_entry(line.as_str());
                    match self.command_processor.execute(&line, &mut book) {
                        Some(Reply::Message(text)) => println!("{}", text),
                        Some(Reply::Exit(text)) => {
                            println!("{}", text);
                            break;
                        }
                        None => {}
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    log::error!("Failed to read input: {:?}", err);
                    break;
                }
            }
        }

        self.save_book(&book);
        Ok(())
    }

    /// Load the saved book. Any failure starts an empty one.
    ///
    /// An unreadable file is moved aside first. If that fails, saving is
    /// disabled for the session so the file is never overwritten.
    pub fn load_book(&mut self) -> AddressBook {
        match self.storage.load() {
            Ok(book) => book,
            Err(StorageError::Missing(path)) => {
                println!(
                    "No saved contacts found at {}, starting with an empty address book.",
                    path.display()
                );
                AddressBook::new()
            }
            Err(err) => {
                log::warn!("Failed to load contacts from {:?}: {}", self.storage.path(), err);
                println!(
                    "Could not read saved contacts ({}), starting with an empty address book.",
                    err
                );
                match self.storage.backup() {
                    Ok(backup) => println!("The unreadable file was moved to {}.", backup.display()),
                    Err(backup_err) => {
                        log::error!("Failed to back up {:?}: {}", self.storage.path(), backup_err);
                        println!("Changes in this session will not be saved.");
                        self.autosave = false;
                    }
                }
                AddressBook::new()
            }
        }
    }

    /// Save on shutdown when autosave is on. Errors are reported, not returned.
    pub fn save_book(&self, book: &AddressBook) {
        if !self.autosave {
            log::debug!("Autosave disabled, not writing {:?}", self.storage.path());
            return;
        }
        if let Err(err) = self.storage.save(book) {
            log::error!("Failed to save contacts to {:?}: {}", self.storage.path(), err);
            println!("Failed to save contacts: {}", err);
        }
    }
}
