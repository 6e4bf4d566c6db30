pub mod address_book;
pub mod app;
pub mod cli;
pub mod command_processor;
pub mod config;
pub mod error;
pub mod record;
pub mod state;
pub mod validation;

use env_logger::Env;

/// Initialize stderr logging. `RUST_LOG` overrides the default `warn` filter.
pub fn init_logger() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            use chrono::Local;
            use std::io::Write;
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();
}

// Re-export commonly used types
pub use address_book::{AddressBook, UpcomingBirthday};
pub use config::Config;
pub use error::AddressBookError;
pub use record::Record;
pub use validation::{Birthday, Name, Phone, ValidationError};
