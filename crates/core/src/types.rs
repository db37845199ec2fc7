/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Calendar dates (birthdays, release dates) carry no time zone.
pub type Date = chrono::NaiveDate;

/// Wire format for [`Date`] values in JSON payloads.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
