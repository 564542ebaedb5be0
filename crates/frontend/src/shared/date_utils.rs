//! Dates as the console uses them

use chrono::{Local, NaiveDate};

/// Local calendar date, the default for date fields of new records
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
