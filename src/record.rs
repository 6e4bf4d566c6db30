use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AddressBookError, Result};
use crate::validation::{Birthday, Name, Phone, ValidationError};

/// A single contact: name, phone numbers and an optional birthday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: &str) -> std::result::Result<Self, ValidationError> {
        Ok(Self { name: Name::new(name)?, phones: Vec::new(), birthday: None })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append a phone. Duplicates are kept.
    pub fn add_phone(&mut self, value: &str) -> std::result::Result<(), ValidationError> {
        self.phones.push(Phone::new(value)?);
        Ok(())
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// The phone list is unchanged when `old` is missing or `new` is invalid.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        let idx = self
            .position_of(old)
            .ok_or_else(|| AddressBookError::PhoneNotFound(old.to_string()))?;
        self.phones[idx] = Phone::new(new)?;
        Ok(())
    }

    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| phone.as_str() == value)
    }

    pub fn remove_phone(&mut self, value: &str) -> Result<Phone> {
        let idx = self
            .position_of(value)
            .ok_or_else(|| AddressBookError::PhoneNotFound(value.to_string()))?;
        Ok(self.phones.remove(idx))
    }

    /// Set the birthday, overwriting any previous one
    pub fn add_birthday(&mut self, value: &str) -> std::result::Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(value)?);
        Ok(())
    }

    fn position_of(&self, value: &str) -> Option<usize> {
        self.phones.iter().position(|phone| phone.as_str() == value)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join(", "))
    }
}
