/*
Copyright 2026 climoplot developers

This file is part of climoplot.

climoplot is a free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation; either version 3 of the License, or
(at your option) any later version.

climoplot is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with climoplot. If not, see https://www.gnu.org/licenses/.
*/

//! Decoding of CF time coordinates into calendar month labels.
//!
//! Climate-model output encodes time as an offset from an epoch, with
//! the offset unit and the calendar given as variable attributes
//! (e.g. `days since 1850-01-01` with calendar `noleap`). Model
//! calendars differ from the real one, so month extraction has to
//! follow the declared calendar rather than chrono alone.

use crate::constants::MONTH_ABBREVIATIONS;
use crate::errors::InputError;
use crate::Float;
use chrono::{Datelike, Duration, NaiveDate};

/// Cumulative month lengths of a `noleap` (365-day) year.
const NOLEAP_MONTH_ENDS: [f64; 12] = [
    31.0, 59.0, 90.0, 120.0, 151.0, 181.0, 212.0, 243.0, 273.0, 304.0, 334.0, 365.0,
];

/// Calendars understood by the decoder.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Calendar {
    /// Real-world (proleptic Gregorian) calendar.
    Standard,
    /// Twelve fixed 30-day months.
    Day360,
    /// Real month lengths, no leap days.
    NoLeap,
}

impl Calendar {
    /// Parses the CF `calendar` attribute. A missing attribute means
    /// the standard calendar.
    pub fn from_attribute(value: Option<&str>) -> Result<Self, InputError> {
        match value {
            None => Ok(Calendar::Standard),
            Some("standard" | "gregorian" | "proleptic_gregorian") => Ok(Calendar::Standard),
            Some("360_day") => Ok(Calendar::Day360),
            Some("noleap" | "365_day") => Ok(Calendar::NoLeap),
            Some(other) => Err(InputError::InvalidTimeAxis(format!(
                "unknown calendar {other:?}"
            ))),
        }
    }
}

/// A parsed CF time unit: offset step plus epoch.
#[derive(Clone, Debug)]
pub struct TimeUnit {
    seconds_per_step: f64,
    epoch: Epoch,
}

#[derive(Copy, Clone, Debug)]
struct Epoch {
    year: i32,
    month: u32,
    day: u32,
    seconds: f64,
}

impl TimeUnit {
    /// Parses a unit string of the form `<step> since <epoch>`, where
    /// the epoch is `YYYY-MM-DD` optionally followed by a time of day.
    pub fn parse(units: &str) -> Result<Self, InputError> {
        let (step, epoch_text) = units.split_once(" since ").ok_or_else(|| {
            InputError::InvalidTimeAxis(format!("time units {units:?} lack \"since\""))
        })?;

        let seconds_per_step = match step.trim() {
            "days" | "day" | "d" => 86_400.0,
            "hours" | "hour" | "h" => 3_600.0,
            "minutes" | "minute" | "min" => 60.0,
            "seconds" | "second" | "s" => 1.0,
            other => {
                return Err(InputError::InvalidTimeAxis(format!(
                    "unknown time step {other:?}"
                )))
            }
        };

        Ok(TimeUnit {
            seconds_per_step,
            epoch: parse_epoch(epoch_text)?,
        })
    }
}

fn parse_epoch(text: &str) -> Result<Epoch, InputError> {
    let text = text.trim().replace('T', " ");
    let mut parts = text.split_whitespace();

    let date = parts
        .next()
        .ok_or_else(|| InputError::InvalidTimeAxis(format!("empty epoch in {text:?}")))?;

    let bad_epoch = || InputError::InvalidTimeAxis(format!("cannot parse epoch {text:?}"));

    let mut date_fields = date.split('-');
    let year: i32 = date_fields
        .next()
        .and_then(|f| f.parse().ok())
        .ok_or_else(bad_epoch)?;
    let month: u32 = date_fields
        .next()
        .and_then(|f| f.parse().ok())
        .ok_or_else(bad_epoch)?;
    let day: u32 = date_fields
        .next()
        .and_then(|f| f.parse().ok())
        .ok_or_else(bad_epoch)?;

    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(bad_epoch());
    }

    // time of day, when present; trailing timezone tokens are ignored
    let seconds = match parts.next() {
        None => 0.0,
        Some(clock) => {
            let mut fields = clock.split(':');
            let hours: f64 = fields
                .next()
                .and_then(|f| f.parse().ok())
                .ok_or_else(bad_epoch)?;
            let minutes: f64 = fields.next().and_then(|f| f.parse().ok()).unwrap_or(0.0);
            let secs: f64 = fields.next().and_then(|f| f.parse().ok()).unwrap_or(0.0);
            hours * 3_600.0 + minutes * 60.0 + secs
        }
    };

    Ok(Epoch {
        year,
        month,
        day,
        seconds,
    })
}

/// Derives a month label for every time sample.
pub fn month_labels(
    values: &[Float],
    units: &str,
    calendar: Calendar,
) -> Result<Vec<&'static str>, InputError> {
    let unit = TimeUnit::parse(units)?;

    values
        .iter()
        .map(|&value| month_of(value, &unit, calendar))
        .collect()
}

fn month_of(value: Float, unit: &TimeUnit, calendar: Calendar) -> Result<&'static str, InputError> {
    let offset_seconds = value * unit.seconds_per_step + unit.epoch.seconds;
    let offset_days = offset_seconds / 86_400.0;
    let epoch = unit.epoch;

    let month_index = match calendar {
        Calendar::Standard => {
            let date = NaiveDate::from_ymd_opt(epoch.year, epoch.month, epoch.day)
                .ok_or_else(|| {
                    InputError::InvalidTimeAxis(format!(
                        "epoch {}-{}-{} is not a valid date",
                        epoch.year, epoch.month, epoch.day
                    ))
                })?
                .and_hms_opt(0, 0, 0)
                .unwrap_or_default()
                + Duration::milliseconds((offset_seconds * 1_000.0) as i64);
            date.month0() as usize
        }
        Calendar::Day360 => {
            let origin = (epoch.month as f64 - 1.0) * 30.0 + (epoch.day as f64 - 1.0);
            let total = origin + offset_days - epoch.seconds / 86_400.0;
            ((total / 30.0).floor() as i64).rem_euclid(12) as usize
        }
        Calendar::NoLeap => {
            let days_before_month = match epoch.month {
                1 => 0.0,
                m => NOLEAP_MONTH_ENDS[m as usize - 2],
            };
            let origin = days_before_month + (epoch.day as f64 - 1.0);
            let day_of_year = (origin + offset_days - epoch.seconds / 86_400.0).rem_euclid(365.0);
            NOLEAP_MONTH_ENDS
                .iter()
                .position(|&end| day_of_year < end)
                .unwrap_or(11)
        }
    };

    Ok(month_abbreviation(month_index))
}

/// Three-letter abbreviation for a zero-based month index.
pub fn month_abbreviation(index: usize) -> &'static str {
    MONTH_ABBREVIATIONS[index % 12]
}
