//! In-memory contact store and the upcoming birthdays query.
//
// Records live in a Vec so iteration keeps insertion order; lookups are a
// linear scan by name.

use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use std::fmt;

use crate::config::BirthdaysConfig;
use crate::error::{AddressBookError, Result};
use crate::record::Record;
use crate::validation::BIRTHDAY_FORMAT;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressBook {
    records: Vec<Record>,
}

/// A birthday inside the lookahead window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub birthday: NaiveDate,
    pub congratulation_date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}'s birthday is on {} (congratulate on {})",
            self.name,
            self.birthday.format(BIRTHDAY_FORMAT),
            self.congratulation_date.format(BIRTHDAY_FORMAT)
        )
    }
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        let mut book = Self::new();
        for record in records {
            book.add_record(record);
        }
        book
    }

    /// Insert a record, replacing one with the same name in place
    pub fn add_record(&mut self, record: Record) {
        match self.position_of(record.name().as_str()) {
            Some(idx) => self.records[idx] = record,
            None => self.records.push(record),
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|record| record.name().as_str() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|record| record.name().as_str() == name)
    }

    pub fn delete(&mut self, name: &str) -> Result<Record> {
        let idx = self
            .position_of(name)
            .ok_or_else(|| AddressBookError::ContactNotFound(name.to_string()))?;
        Ok(self.records.remove(idx))
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Birthdays in the next week, counted from the local date
    pub fn get_upcoming_birthdays(&self, shift_weekend_to_monday: bool) -> Vec<UpcomingBirthday> {
        let config = BirthdaysConfig { shift_weekend_to_monday, ..BirthdaysConfig::default() };
        self.upcoming_birthdays(Local::now().date_naive(), &config)
    }

    /// Birthdays falling in `[today, today + window_days]`.
    ///
    /// The occurrence is taken in `today`'s year, so early January birthdays
    /// are missed in late December unless `wrap_year_end` is set.
    pub fn upcoming_birthdays(
        &self,
        today: NaiveDate,
        config: &BirthdaysConfig,
    ) -> Vec<UpcomingBirthday> {
        // An out-of-range window never ends
        let window_end = Duration::try_days(config.window_days)
            .and_then(|window| today.checked_add_signed(window))
            .unwrap_or(NaiveDate::MAX);

        self.records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?.date();
                let mut occurrence = occurrence_in(birthday, today.year());
                if config.wrap_year_end && occurrence < today {
                    occurrence = occurrence_in(birthday, today.year() + 1);
                }
                if occurrence < today || occurrence > window_end {
                    return None;
                }
                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    birthday: occurrence,
                    congratulation_date: congratulation_date(
                        occurrence,
                        config.shift_weekend_to_monday,
                    ),
                })
            })
            .collect()
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|record| record.name().as_str() == name)
    }
}

/// The birthday's month and day in `year`. 29 February falls back to the 28th.
fn occurrence_in(birthday: NaiveDate, year: i32) -> NaiveDate {
    birthday
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day() - 1))
        .unwrap_or(birthday)
}

fn congratulation_date(date: NaiveDate, shift_weekend_to_monday: bool) -> NaiveDate {
    let offset = match (date.weekday(), shift_weekend_to_monday) {
        (Weekday::Sat, true) => 2,
        (Weekday::Sun, true) => 1,
        (Weekday::Sat, false) => -1,
        (Weekday::Sun, false) => -2,
        _ => 0,
    };
    date + Duration::days(offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn date(day: u32, month: u32, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn contact(name: &str, birthday: Option<&str>) -> Record {
        let mut record = Record::new(name).unwrap();
        record.add_phone("1234567890").unwrap();
        if let Some(birthday) = birthday {
            record.add_birthday(birthday).unwrap();
        }
        record
    }

    fn policy(shift_weekend_to_monday: bool) -> BirthdaysConfig {
        BirthdaysConfig { shift_weekend_to_monday, ..BirthdaysConfig::default() }
    }

    #[test]
    fn test_add_find_delete() {
        let mut book = AddressBook::new();
        book.add_record(contact("John", None));
        book.add_record(contact("Jane", None));

        assert_eq!(book.len(), 2);
        assert!(book.find("John").is_some());
        assert!(book.find("john").is_none());

        let removed = book.delete("John").unwrap();
        assert_eq!(removed.name().as_str(), "John");
        assert!(book.find("John").is_none());
        assert_eq!(
            book.delete("John"),
            Err(AddressBookError::ContactNotFound("John".to_string()))
        );
    }

    #[test]
    fn test_add_record_replaces_in_place() {
        let mut book = AddressBook::new();
        book.add_record(contact("John", None));
        book.add_record(contact("Jane", None));

        let mut replacement = Record::new("John").unwrap();
        replacement.add_phone("5555555555").unwrap();
        book.add_record(replacement);

        let names: Vec<&str> = book.records().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["John", "Jane"]);
        assert_eq!(book.find("John").unwrap().phones()[0].as_str(), "5555555555");
    }

    #[test]
    fn test_upcoming_weekday_birthday() {
        // 12.01.2024 is a Friday
        let book = AddressBook::from_records(vec![contact("John", Some("12.01.1990"))]);
        let upcoming = book.upcoming_birthdays(date(10, 1, 2024), &policy(true));

        assert_eq!(
            upcoming,
            vec![UpcomingBirthday {
                name: "John".to_string(),
                birthday: date(12, 1, 2024),
                congratulation_date: date(12, 1, 2024),
            }]
        );
        assert_eq!(
            upcoming[0].to_string(),
            "John's birthday is on 12.01.2024 (congratulate on 12.01.2024)"
        );
    }

    // 13.01.2024 is a Saturday, 14.01.2024 a Sunday
    #[test_case("13.01.1990", true, date(15, 1, 2024) ; "saturday to monday")]
    #[test_case("13.01.1990", false, date(12, 1, 2024) ; "saturday to friday")]
    #[test_case("14.01.1990", true, date(15, 1, 2024) ; "sunday to monday")]
    #[test_case("14.01.1990", false, date(12, 1, 2024) ; "sunday to friday")]
    fn test_weekend_shift(birthday: &str, shift: bool, expected: NaiveDate) {
        let book = AddressBook::from_records(vec![contact("Jane", Some(birthday))]);
        let upcoming = book.upcoming_birthdays(date(10, 1, 2024), &policy(shift));

        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].congratulation_date, expected);
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let book = AddressBook::from_records(vec![
            contact("Yesterday", Some("09.01.1980")),
            contact("Today", Some("10.01.1980")),
            contact("LastDay", Some("17.01.1980")),
            contact("TooLate", Some("18.01.1980")),
            contact("NoBirthday", None),
        ]);
        let names: Vec<String> = book
            .upcoming_birthdays(date(10, 1, 2024), &policy(true))
            .into_iter()
            .map(|b| b.name)
            .collect();

        assert_eq!(names, vec!["Today", "LastDay"]);
    }

    #[test]
    fn test_results_follow_insertion_order() {
        let book = AddressBook::from_records(vec![
            contact("Later", Some("16.01.2000")),
            contact("Sooner", Some("11.01.2000")),
        ]);
        let names: Vec<String> = book
            .upcoming_birthdays(date(10, 1, 2024), &policy(true))
            .into_iter()
            .map(|b| b.name)
            .collect();

        assert_eq!(names, vec!["Later", "Sooner"]);
    }

    #[test]
    fn test_year_end_is_not_wrapped_by_default() {
        let book = AddressBook::from_records(vec![contact("NewYear", Some("01.01.1990"))]);
        let today = date(28, 12, 2024);

        assert!(book.upcoming_birthdays(today, &policy(true)).is_empty());

        let wrapping = BirthdaysConfig { wrap_year_end: true, ..BirthdaysConfig::default() };
        let upcoming = book.upcoming_birthdays(today, &wrapping);
        // 01.01.2025 is a Wednesday
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].birthday, date(1, 1, 2025));
        assert_eq!(upcoming[0].congratulation_date, date(1, 1, 2025));
    }

    #[test]
    fn test_leap_day_birthday_in_common_year() {
        let book = AddressBook::from_records(vec![contact("Leap", Some("29.02.2000"))]);
        let upcoming = book.upcoming_birthdays(date(25, 2, 2023), &policy(true));

        // 28.02.2023 is a Tuesday
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].birthday, date(28, 2, 2023));
    }

    #[test]
    fn test_huge_window_does_not_overflow() {
        let book = AddressBook::from_records(vec![
            contact("Past", Some("01.01.1990")),
            contact("Far", Some("30.12.1990")),
        ]);
        let huge = BirthdaysConfig { window_days: 1_000_000_000_000, ..BirthdaysConfig::default() };
        let upcoming = book.upcoming_birthdays(date(10, 1, 2024), &huge);

        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].name, "Far");

        let maxed = BirthdaysConfig { window_days: i64::MAX, ..BirthdaysConfig::default() };
        assert_eq!(book.upcoming_birthdays(date(10, 1, 2024), &maxed).len(), 1);
    }

    #[test]
    fn test_get_upcoming_birthdays_uses_local_date() {
        let today = Local::now().date_naive();
        // 2000 is a leap year, so any month and day is valid
        let birthday = format!("{:02}.{:02}.2000", today.day(), today.month());
        let book = AddressBook::from_records(vec![
            contact("Today", Some(birthday.as_str())),
            contact("NoBirthday", None),
        ]);

        for shift in [true, false] {
            let upcoming = book.get_upcoming_birthdays(shift);
            assert_eq!(upcoming.len(), 1);
            assert_eq!(upcoming[0].name, "Today");
            assert_eq!(
                upcoming[0].birthday,
                occurrence_in(date(today.day(), today.month(), 2000), today.year())
            );
            assert_eq!(
                upcoming[0].congratulation_date,
                congratulation_date(upcoming[0].birthday, shift)
            );
        }
    }

    #[test]
    fn test_custom_window() {
        let book = AddressBook::from_records(vec![contact("Far", Some("30.01.1990"))]);
        let wide = BirthdaysConfig { window_days: 30, ..BirthdaysConfig::default() };

        assert!(book.upcoming_birthdays(date(10, 1, 2024), &policy(true)).is_empty());
        assert_eq!(book.upcoming_birthdays(date(10, 1, 2024), &wide).len(), 1);
    }
}
