//! # Face Readings
//!
//! Gathers what the face shows: wall-clock time and date from `chrono`, and the
//! battery level from a Linux `power_supply` capacity file.

use crate::FaceReading;
use chrono::{Datelike, Local, Timelike};
use std::{fs, io, path::Path};
use thiserror::Error;

/// Errors reading the battery level.
#[derive(Error, Debug)]
pub enum BatteryError {
    /// Capacity file missing or unreadable
    #[error("battery IO: {0}")]
    Io(#[from] io::Error),

    /// Capacity file did not hold a number
    #[error("unreadable battery capacity {0:?}")]
    Parse(String),
}

impl FaceReading {
    /// Build a reading from any `chrono` date-time.
    ///
    /// # Example
    /// ```
    /// use chrono::NaiveDate;
    /// use sketch_clock_lib::FaceReading;
    ///
    /// let at = NaiveDate::from_ymd_opt(2025, 7, 24)
    ///     .unwrap()
    ///     .and_hms_opt(20, 14, 0)
    ///     .unwrap();
    /// let reading = FaceReading::from_datetime(&at, 87);
    /// assert_eq!((reading.hour, reading.minute), (20, 14));
    /// assert_eq!(reading.day_of_week, 4); // Thursday
    /// ```
    pub fn from_datetime<T: Datelike + Timelike>(at: &T, battery_percent: i16) -> Self {
        // chrono keeps all of these well inside u8
        Self {
            month: at.month() as u8,
            day: at.day() as u8,
            hour: at.hour() as u8,
            minute: at.minute() as u8,
            day_of_week: at.weekday().num_days_from_sunday() as u8,
            battery_percent,
        }
    }

    /// Reading for the current local time.
    pub fn now(battery_percent: i16) -> Self {
        Self::from_datetime(&Local::now(), battery_percent)
    }
}

/// Read a battery percentage from a `capacity` style file (e.g.
/// `/sys/class/power_supply/BAT0/capacity`).
pub fn read_battery_percent<P: AsRef<Path>>(path: P) -> Result<i16, BatteryError> {
    let contents = fs::read_to_string(path)?;
    let trimmed = contents.trim();
    trimmed
        .parse()
        .map_err(|_| BatteryError::Parse(trimmed.to_string()))
}
