//! `Date` type.
//!
//! Dates are represented as a serial number of days since an epoch. The
//! epoch here is the Gregorian reform: serial 1 = **January 1, 1583**, the
//! first full year of the reformed calendar. Earlier dates are outside the
//! supported range (the proleptic calendar is a non-goal).
//!
//! # Serial number convention
//! * Serial 0 is the "null date" sentinel.
//! * Serial 1 = January 1, 1583 (a Saturday).
//! * The valid date range is 1583-01-01 to 4099-12-31.

use crate::weekday::Weekday;
use fest_core::errors::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// The null date sentinel (serial 0).
    pub const NULL: Date = Date(0);

    /// Minimum valid date: January 1, 1583.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 4099.
    pub const MAX: Date = Date(919_316);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    ///
    /// Returns an error if `serial <= 0` (the null sentinel or before the
    /// Gregorian reform) or past the maximum date.
    pub fn from_serial(serial: i32) -> Result<Self> {
        if serial <= 0 {
            return Err(Error::Date("serial number must be positive".into()));
        }
        let d = Date(serial);
        if d > Self::MAX {
            return Err(Error::Date(format!("serial {serial} exceeds maximum date")));
        }
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self> {
        if !(1583..=4099).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [1583, 4099]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return `true` if this is the null date sentinel.
    pub fn is_null(&self) -> bool {
        self.0 == 0
    }

    /// Return the year (1583–4099).
    pub fn year(&self) -> i32 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Serial 1 (1583-01-01) is a Saturday (ordinal 6).
        let w = ((self.0 - 1 + 5).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` calendar days (`n` may be negative). Month and year
    /// rollover fall out of the serial representation. Returns an error if
    /// the result leaves the supported range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        // n comes in unvalidated from rule records; overflow is out of
        // range, not a panic
        let serial = self
            .0
            .checked_add(n)
            .ok_or_else(|| Error::Date(format!("date arithmetic: {self} + {n} days overflows")))?;
        if serial <= 0 || Date(serial) > Self::MAX {
            return Err(Error::Date(format!(
                "date arithmetic: result {serial} out of range"
            )));
        }
        Ok(Date(serial))
    }

    /// Return the next Monday strictly after this date.
    ///
    /// A date that already falls on a Monday advances by a full 7 days, not
    /// zero: the shift rules this serves move a Monday holiday to the
    /// *following* Monday. All other weekdays advance 1–6 days.
    pub fn next_monday(self) -> Result<Self> {
        let days = match self.weekday().days_until(Weekday::Monday) {
            0 => 7,
            n => n,
        };
        self.add_days(days as i32)
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_null() {
            return write!(f, "null date");
        }
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_null() {
            return write!(f, "Date(null)");
        }
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year (Gregorian rule).
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Number of leap years in the interval [1583, year).
fn leap_years_before(year: i32) -> i32 {
    let y = year - 1;
    (y / 4 - 395) - (y / 100 - 15) + (y / 400 - 3)
}

/// Convert (year, month, day) to a serial number. Serial 1 = 1583-01-01.
fn serial_from_ymd(year: i32, month: u8, day: u8) -> i32 {
    let mut serial = (year - 1583) * 365 + leap_years_before(year);
    serial += MONTH_OFFSET[month as usize - 1] as i32;
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + day as i32
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (i32, u8, u8) {
    // Estimate year, then adjust until the serial falls within it
    let mut y = serial / 365 + 1583;
    loop {
        if serial < serial_from_ymd(y, 1, 1) {
            y -= 1;
        } else if serial >= serial_from_ymd(y + 1, 1, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let mut remaining = serial - serial_from_ymd(y, 1, 1) + 1; // 1-based day of year
    let mut m = 1u8;
    loop {
        let days = days_in_month(y, m) as i32;
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_epoch() {
        let d = Date::from_ymd(1583, 1, 1).unwrap();
        assert_eq!(d.serial(), 1);
        assert_eq!(d.weekday(), Weekday::Saturday);
    }

    #[test]
    fn test_max() {
        let d = Date::from_ymd(4099, 12, 31).unwrap();
        assert_eq!(d, Date::MAX);
        assert!(Date::from_serial(Date::MAX.serial() + 1).is_err());
    }

    #[test]
    fn test_roundtrip() {
        let dates = [
            (1583, 1, 1),
            (1600, 2, 29),  // leap century
            (1700, 2, 28),  // non-leap century
            (1899, 12, 31),
            (2000, 2, 29),
            (2025, 6, 15),
            (4099, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!(date.year(), y, "year mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.month(), m, "month mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.day_of_month(), d, "day mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_weekday() {
        // 2025-01-01 is a Wednesday
        assert_eq!(Date::from_ymd(2025, 1, 1).unwrap().weekday(), Weekday::Wednesday);
        // 2025-01-06 is a Monday
        assert_eq!(Date::from_ymd(2025, 1, 6).unwrap().weekday(), Weekday::Monday);
        // 1900-01-01 is a Monday
        assert_eq!(Date::from_ymd(1900, 1, 1).unwrap().weekday(), Weekday::Monday);
    }

    #[test]
    fn test_add_days_rollover() {
        let d = Date::from_ymd(2025, 12, 31).unwrap();
        assert_eq!(d.add_days(1).unwrap(), Date::from_ymd(2026, 1, 1).unwrap());
        let d = Date::from_ymd(2024, 3, 1).unwrap();
        assert_eq!(d.add_days(-1).unwrap(), Date::from_ymd(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_add_days_out_of_range() {
        assert!(Date::MIN.add_days(-1).is_err());
        assert!(Date::MAX.add_days(1).is_err());
    }

    #[test]
    fn test_add_days_extreme_offsets_error() {
        let d = Date::from_ymd(2025, 4, 20).unwrap();
        assert!(d.add_days(i32::MAX).is_err());
        assert!(d.add_days(i32::MIN).is_err());
        assert!(Date::MAX.add_days(i32::MAX).is_err());
    }

    #[test]
    fn test_next_monday_from_monday() {
        // 2025-01-06 is a Monday; next Monday is Jan 13, never Jan 6 itself
        let mon = Date::from_ymd(2025, 1, 6).unwrap();
        assert_eq!(mon.next_monday().unwrap(), Date::from_ymd(2025, 1, 13).unwrap());
    }

    #[test]
    fn test_next_monday_midweek() {
        // 2025-05-30 is a Friday; next Monday is 2025-06-02
        let fri = Date::from_ymd(2025, 5, 30).unwrap();
        assert_eq!(fri.next_monday().unwrap(), Date::from_ymd(2025, 6, 2).unwrap());
        // 2025-01-05 is a Sunday; next Monday is the day after
        let sun = Date::from_ymd(2025, 1, 5).unwrap();
        assert_eq!(sun.next_monday().unwrap(), Date::from_ymd(2025, 1, 6).unwrap());
    }

    #[test]
    fn test_arithmetic_operators() {
        let d = Date::from_ymd(2025, 1, 1).unwrap();
        let d2 = d + 31;
        assert_eq!(d2, Date::from_ymd(2025, 2, 1).unwrap());
        assert_eq!(d2 - d, 31);
        assert_eq!(d.days_between(d2), 31);
    }

    #[test]
    fn test_display() {
        let d = Date::from_ymd(2025, 4, 20).unwrap();
        assert_eq!(d.to_string(), "2025-04-20");
        assert_eq!(format!("{d:?}"), "Date(2025-04-20)");
    }

    #[test]
    fn test_invalid_ymd() {
        assert!(Date::from_ymd(1582, 12, 31).is_err());
        assert!(Date::from_ymd(2025, 0, 1).is_err());
        assert!(Date::from_ymd(2025, 13, 1).is_err());
        assert!(Date::from_ymd(2025, 2, 29).is_err());
        assert!(Date::from_ymd(2024, 2, 29).is_ok());
    }

    proptest! {
        #[test]
        fn serial_ymd_roundtrip(serial in 1..=Date::MAX.serial()) {
            let d = Date::from_serial(serial).unwrap();
            let back = Date::from_ymd(d.year(), d.month(), d.day_of_month()).unwrap();
            prop_assert_eq!(back.serial(), serial);
        }

        #[test]
        fn next_monday_is_monday_within_week(serial in 1..=(Date::MAX.serial() - 7)) {
            let d = Date::from_serial(serial).unwrap();
            let nm = d.next_monday().unwrap();
            prop_assert_eq!(nm.weekday(), Weekday::Monday);
            let gap = nm - d;
            prop_assert!((1..=7).contains(&gap));
            // Monday input shifts a full week, never returns itself
            if d.weekday() == Weekday::Monday {
                prop_assert_eq!(gap, 7);
            }
        }
    }
}
