//! Contact command handler
//!
//! Handles `add`, `change`, `phone` and `all`.

use super::{CommandArgs, CommandHandler, HandlerResult, Reply};
use crate::address_book::AddressBook;
use crate::error::AddressBookError;
use crate::record::Record;
use crate::validation::Phone;

#[derive(Debug)]
pub struct ContactHandler;

impl CommandHandler for ContactHandler {
    fn execute(&self, args: &CommandArgs, book: &mut AddressBook) -> HandlerResult {
        let message = match args.command.as_str() {
            "add" => add_contact(args, book)?,
            "change" => change_contact(args, book)?,
            "phone" => show_phone(args, book)?,
            _ => show_all(book),
        };
        Ok(Reply::Message(message))
    }

    fn can_handle(&self, command: &str) -> bool {
        matches!(command, "add" | "change" | "phone" | "all")
    }
}

fn add_contact(args: &CommandArgs, book: &mut AddressBook) -> Result<String, AddressBookError> {
    let [name, phone] = args.require::<2>("add [name] [phone]")?;
    // Validate before touching the book so a bad phone never leaves an empty contact
    Phone::new(phone)?;

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        return Ok("Contact updated.".to_string());
    }

    let mut record = Record::new(name)?;
    record.add_phone(phone)?;
    book.add_record(record);
    log::info!("Added contact {}", name);
    Ok("Contact added.".to_string())
}

fn change_contact(args: &CommandArgs, book: &mut AddressBook) -> Result<String, AddressBookError> {
    let [name, old_phone, new_phone] =
        args.require::<3>("change [name] [old_phone] [new_phone]")?;
    let record = book
        .find_mut(name)
        .ok_or_else(|| AddressBookError::ContactNotFound(name.to_string()))?;
    record.edit_phone(old_phone, new_phone)?;
    Ok("Contact updated.".to_string())
}

fn show_phone(args: &CommandArgs, book: &AddressBook) -> Result<String, AddressBookError> {
    let [name] = args.require::<1>("phone [name]")?;
    let record = book
        .find(name)
        .ok_or_else(|| AddressBookError::ContactNotFound(name.to_string()))?;
    let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
    Ok(format!("{}: {}", name, phones.join(", ")))
}

fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts found.".to_string();
    }
    book.records().map(Record::to_string).collect::<Vec<_>>().join("\n")
}
