use log::{debug, warn};
use std::fmt::Debug;

use crate::address_book::AddressBook;
use crate::config::BirthdaysConfig;
use crate::error::AddressBookError;

pub mod birthday_handler;
pub mod contact_handler;
pub mod exit_handler;
pub mod help_handler;

/// A parsed input line: lowercased command word plus raw arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandArgs {
    pub command: String,
    pub args: Vec<String>,
}

impl CommandArgs {
    pub fn new(command: String, args: Vec<String>) -> Self {
        Self { command, args }
    }

    /// Split on whitespace. Returns `None` for a blank line.
    pub fn parse(input: &str) -> Option<Self> {
        let mut tokens = input.split_whitespace();
        let command = preprocess_input(tokens.next()?);
        let args = tokens.map(String::from).collect();
        Some(Self { command, args })
    }

    /// First `N` arguments, or a usage error
    pub fn require<const N: usize>(
        &self,
        usage: &'static str,
    ) -> Result<[&str; N], AddressBookError> {
        if self.args.len() < N {
            return Err(AddressBookError::Usage(usage));
        }
        Ok(std::array::from_fn(|i| self.args[i].as_str()))
    }
}

/// Standardized input preprocessing function
pub fn preprocess_input(input: &str) -> String {
    input.trim().to_lowercase()
}

/// What the REPL should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Message(String),
    Exit(String),
}

pub type HandlerResult = Result<Reply, AddressBookError>;

pub trait CommandHandler: Debug {
    fn execute(&self, args: &CommandArgs, book: &mut AddressBook) -> HandlerResult;
    fn can_handle(&self, command: &str) -> bool;
}

#[derive(Debug)]
pub struct CommandProcessor {
    handlers: Vec<Box<dyn CommandHandler>>,
}

impl CommandProcessor {
    pub fn new(birthdays: BirthdaysConfig) -> Self {
        let handlers: Vec<Box<dyn CommandHandler>> = vec![
            Box::new(help_handler::HelpHandler),
            Box::new(contact_handler::ContactHandler),
            Box::new(birthday_handler::BirthdayHandler::new(birthdays)),
            Box::new(exit_handler::ExitHandler),
        ];
        Self { handlers }
    }

    /// Run one input line. Handler errors come back as `Error: ...` messages.
    pub fn execute(&self, input: &str, book: &mut AddressBook) -> Option<Reply> {
        let args = CommandArgs::parse(input)?;
        debug!("Parsed command: {:?}, args: {:?}", args.command, args.args);

        let Some(handler) = self.handlers.iter().find(|h| h.can_handle(&args.command)) else {
            warn!("Unrecognized command: {}", args.command);
            return Some(Reply::Message("Invalid command.".to_string()));
        };

        match handler.execute(&args, book) {
            Ok(reply) => {
                debug!("Command '{}' executed successfully", args.command);
                Some(reply)
            }
            Err(e) => {
                debug!("Command '{}' failed: {:?}", args.command, e);
                Some(Reply::Message(format!("Error: {}", e)))
            }
        }
    }
}

impl Default for CommandProcessor {
    fn default() -> Self {
        Self::new(BirthdaysConfig::default())
    }
}
