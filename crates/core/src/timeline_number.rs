// SPDX-License-Identifier: MIT

//!
//! The timeline number type
//!

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// The number of timelines that can be drawn
pub const TIMELINE_COUNT: u8 = 2;

/// Errors that can arise in relation to a [`TimelineNumber`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimelineNumberError {
    /// The number is not allowed (must be 1 <= number <= [`TIMELINE_COUNT`])
    #[error("Timeline `{0}` does not exist")]
    Invalid(i64),
}

/// Which of the timelines (1-based, as shown to users)
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
pub struct TimelineNumber(u8);

impl TimelineNumber {
    pub fn value(&self) -> u8 {
        self.0
    }

    /// All timeline numbers, in order
    pub fn all() -> impl Iterator<Item = TimelineNumber> {
        (1..=TIMELINE_COUNT).map(TimelineNumber)
    }
}

impl TryFrom<i64> for TimelineNumber {
    type Error = TimelineNumberError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (1..=TIMELINE_COUNT as i64).contains(&value) {
            Ok(TimelineNumber(value as u8))
        } else {
            Err(TimelineNumberError::Invalid(value))
        }
    }
}

impl<'de> Deserialize<'de> for TimelineNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        TimelineNumber::try_from(value).map_err(serde::de::Error::custom)
    }
}
