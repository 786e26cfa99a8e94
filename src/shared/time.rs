use std::{
    fmt::{self, Display},
    ops::{Add, AddAssign, Sub},
};
use thiserror::Error;

const MINUTE_TO_SEC: u32 = 60;
const HOUR_TO_SEC: u32 = 60 * MINUTE_TO_SEC;
const DAY_TO_SEC: u32 = 24 * HOUR_TO_SEC;

/// Shown in place of a duration when either clock time cannot be read.
pub const UNKNOWN_DURATION: &str = "-";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Malformed clock time {0:?}, expected HH:MM")]
    MalformedTime(String),
}

/// A wall clock time of day, stored as seconds since midnight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time(u32);

impl Time {
    pub const fn from_seconds(secs: u32) -> Self {
        Self(secs)
    }

    pub const fn from_hm(hours: u32, minutes: u32) -> Self {
        Self(hours * HOUR_TO_SEC + minutes * MINUTE_TO_SEC)
    }

    pub const fn as_seconds(&self) -> u32 {
        self.0
    }

    pub const fn hours(&self) -> u32 {
        self.0 / HOUR_TO_SEC
    }

    pub const fn minutes(&self) -> u32 {
        (self.0 % HOUR_TO_SEC) / MINUTE_TO_SEC
    }

    /// Parses a 24-hour `HH:MM` string. Both parts must be present,
    /// numeric and in range.
    pub fn parse_hm(time: &str) -> Result<Self, self::Error> {
        let malformed = || self::Error::MalformedTime(time.to_string());
        let (hours, minutes) = time.split_once(':').ok_or_else(malformed)?;
        let hours: u32 = hours.parse().map_err(|_| malformed())?;
        let minutes: u32 = minutes.parse().map_err(|_| malformed())?;
        if hours >= 24 || minutes >= 60 {
            return Err(malformed());
        }
        Ok(Self::from_hm(hours, minutes))
    }

    pub fn to_hm_string(&self) -> String {
        format!("{:02}:{:02}", self.hours(), self.minutes())
    }

    /// Time spent travelling from `self` until `arrival`.
    /// An arrival earlier in the day than the departure is taken to be on the next day.
    pub fn until(self, arrival: Time) -> Duration {
        if arrival.0 >= self.0 {
            Duration(arrival.0 - self.0)
        } else {
            Duration(arrival.0 + DAY_TO_SEC - self.0)
        }
    }
}

impl Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours(), self.minutes())
    }
}

impl Add<Duration> for Time {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self::Output {
        Self((self.0 + rhs.0) % DAY_TO_SEC)
    }
}

impl AddAssign<Duration> for Time {
    fn add_assign(&mut self, rhs: Duration) {
        *self = *self + rhs
    }
}

impl Sub<Time> for Time {
    type Output = Duration;

    fn sub(self, rhs: Self) -> Self::Output {
        rhs.until(self)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration(u32);

impl Duration {
    pub const fn from_seconds(secs: u32) -> Self {
        Self(secs)
    }

    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes * MINUTE_TO_SEC)
    }

    pub const fn from_hours(hours: u32) -> Self {
        Self(hours * HOUR_TO_SEC)
    }

    pub const fn as_seconds(&self) -> u32 {
        self.0
    }

    pub const fn as_minutes(&self) -> u32 {
        self.0 / MINUTE_TO_SEC
    }

    /// Whole hours part.
    pub const fn hours(&self) -> u32 {
        self.0 / HOUR_TO_SEC
    }

    /// Minutes left over after the whole hours.
    pub const fn minutes(&self) -> u32 {
        (self.0 % HOUR_TO_SEC) / MINUTE_TO_SEC
    }
}

/// Formats as `"{hours}s {minutes}d"` (saat / dakika).
impl Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s {}d", self.hours(), self.minutes())
    }
}

impl Add for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Duration {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0
    }
}

/// Travel time between two `HH:MM` strings, wrapping past midnight.
pub fn travel_duration(departure: &str, arrival: &str) -> Result<Duration, self::Error> {
    let departure = Time::parse_hm(departure)?;
    let arrival = Time::parse_hm(arrival)?;
    Ok(departure.until(arrival))
}

/// Same as [`travel_duration`] but rendered for display, falling back to
/// [`UNKNOWN_DURATION`] when either time is malformed.
pub fn duration_label(departure: &str, arrival: &str) -> String {
    match travel_duration(departure, arrival) {
        Ok(duration) => duration.to_string(),
        Err(err) => {
            tracing::debug!("Duration unavailable: {err}");
            UNKNOWN_DURATION.to_string()
        }
    }
}

#[test]
fn parse_unparse_1() {
    let time = "00:00";
    assert_eq!(time, Time::parse_hm(time).unwrap().to_hm_string())
}

#[test]
fn parse_unparse_2() {
    let time = "23:59";
    assert_eq!(time, Time::parse_hm(time).unwrap().to_hm_string())
}

#[test]
fn valid_time_test_1() {
    assert_eq!(Time::parse_hm("01:30").unwrap().as_seconds(), 5400);
}

#[test]
fn invalid_time_test_1() {
    assert!(Time::parse_hm("1a:00").is_err())
}

#[test]
fn invalid_time_test_2() {
    assert!(Time::parse_hm("24:00").is_err())
}

#[test]
fn invalid_time_test_3() {
    assert!(Time::parse_hm("1000").is_err())
}

#[test]
fn add_wraps_midnight() {
    let time = Time::from_hm(23, 30) + Duration::from_hours(1);
    assert_eq!(time, Time::from_hm(0, 30));
}

#[test]
fn duration_display() {
    assert_eq!(Duration::from_minutes(125).to_string(), "2s 5d");
}
