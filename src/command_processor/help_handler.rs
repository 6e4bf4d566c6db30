//! Help command handler
//!
//! Handles `hello`.

use super::{CommandArgs, CommandHandler, HandlerResult, Reply};
use crate::address_book::AddressBook;

const HELP: &str = "How can I help you? Possible commands are:
- add [name] [phone]
- change [name] [old_phone] [new_phone]
- phone [name]
- all
- add-birthday [name] [DD.MM.YYYY]
- show-birthday [name]
- birthdays
- close | exit";

#[derive(Debug)]
pub struct HelpHandler;

impl CommandHandler for HelpHandler {
    fn execute(&self, _args: &CommandArgs, _book: &mut AddressBook) -> HandlerResult {
        Ok(Reply::Message(HELP.to_string()))
    }

    fn can_handle(&self, command: &str) -> bool {
        command == "hello"
    }
}
