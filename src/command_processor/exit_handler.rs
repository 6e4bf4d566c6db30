//! Exit command handler
//!
//! Handles `close` and `exit`.

use super::{CommandArgs, CommandHandler, HandlerResult, Reply};
use crate::address_book::AddressBook;

#[derive(Debug)]
pub struct ExitHandler;

impl CommandHandler for ExitHandler {
    fn execute(&self, _args: &CommandArgs, _book: &mut AddressBook) -> HandlerResult {
        Ok(Reply::Exit("Good bye!".to_string()))
    }

    fn can_handle(&self, command: &str) -> bool {
        command == "exit" || command == "close"
    }
}
