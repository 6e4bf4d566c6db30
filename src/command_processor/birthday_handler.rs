//! Birthday command handler
//!
//! Handles `add-birthday`, `show-birthday` and `birthdays`.

use chrono::{Local, NaiveDate};

use super::{CommandArgs, CommandHandler, HandlerResult, Reply};
use crate::address_book::AddressBook;
use crate::config::BirthdaysConfig;
use crate::error::AddressBookError;

#[derive(Debug)]
pub struct BirthdayHandler {
    config: BirthdaysConfig,
    today: fn() -> NaiveDate,
}

impl BirthdayHandler {
    pub fn new(config: BirthdaysConfig) -> Self {
        Self { config, today: local_today }
    }

    /// Use a fixed clock instead of the local date
    pub fn with_clock(config: BirthdaysConfig, today: fn() -> NaiveDate) -> Self {
        Self { config, today }
    }

    fn upcoming(&self, book: &AddressBook) -> String {
        let upcoming = book.upcoming_birthdays((self.today)(), &self.config);
        if upcoming.is_empty() {
            return match self.config.window_days {
                7 => "No birthdays in the next week.".to_string(),
                1 => "No birthdays in the next day.".to_string(),
                days => format!("No birthdays in the next {} days.", days),
            };
        }
        upcoming.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
    }
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl CommandHandler for BirthdayHandler {
    fn execute(&self, args: &CommandArgs, book: &mut AddressBook) -> HandlerResult {
        let message = match args.command.as_str() {
            "add-birthday" => add_birthday(args, book)?,
            "show-birthday" => show_birthday(args, book)?,
            _ => self.upcoming(book),
        };
        Ok(Reply::Message(message))
    }

    fn can_handle(&self, command: &str) -> bool {
        matches!(command, "add-birthday" | "show-birthday" | "birthdays")
    }
}

fn add_birthday(args: &CommandArgs, book: &mut AddressBook) -> Result<String, AddressBookError> {
    let [name, birthday] = args.require::<2>("add-birthday [name] [DD.MM.YYYY]")?;
    book.find_mut(name)
        .ok_or_else(|| AddressBookError::ContactNotFound(name.to_string()))?
        .add_birthday(birthday)?;
    Ok("Birthday added.".to_string())
}

fn show_birthday(args: &CommandArgs, book: &AddressBook) -> Result<String, AddressBookError> {
    let [name] = args.require::<1>("show-birthday [name]")?;
    let birthday = book
        .find(name)
        .ok_or_else(|| AddressBookError::ContactNotFound(name.to_string()))?
        .birthday()
        .ok_or_else(|| AddressBookError::BirthdayNotFound(name.to_string()))?;
    Ok(format!("{}'s birthday: {}", name, birthday))
}
