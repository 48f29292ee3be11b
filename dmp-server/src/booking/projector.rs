//! Availability projector
//!
//! Occupancy is never stored. These pure functions derive a zone's
//! occupancy and month-by-month availability from its booking set, so
//! the answer can never drift from the bookings themselves.

use chrono::{Datelike, Days, Months, NaiveDate};
use shared::models::{Booking, BookingStatus, Occupancy};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Which booking statuses make a zone read as occupied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OccupancyPolicy {
    /// Any booking occupies: a pending request already claims the slot
    #[default]
    AnyBooking,
    /// Only APPROVED and BOOKED bookings occupy
    ActiveOnly,
}

impl OccupancyPolicy {
    pub fn is_occupying(&self, status: BookingStatus) -> bool {
        match self {
            OccupancyPolicy::AnyBooking => true,
            OccupancyPolicy::ActiveOnly => {
                matches!(status, BookingStatus::Approved | BookingStatus::Booked)
            }
        }
    }
}

impl FromStr for OccupancyPolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "any" | "any_booking" => Ok(OccupancyPolicy::AnyBooking),
            "active" | "active_only" => Ok(OccupancyPolicy::ActiveOnly),
            _ => Err(()),
        }
    }
}

/// A calendar month, keyed "YYYY-MM" in responses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    first: NaiveDate,
}

impl MonthWindow {
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn last_day(&self) -> NaiveDate {
        self.next()
            .first
            .checked_sub_days(Days::new(1))
            .unwrap_or(self.first)
    }

    pub fn next(&self) -> Self {
        Self {
            first: self
                .first
                .checked_add_months(Months::new(1))
                .unwrap_or(self.first),
        }
    }

    pub fn key(&self) -> String {
        format!("{:04}-{:02}", self.first.year(), self.first.month())
    }

    /// Whether the inclusive range [start, end] touches this month
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start <= self.last_day() && end >= self.first_day()
    }
}

/// Overall occupancy of a zone, from its full booking set
pub fn project_occupancy(bookings: &[Booking], policy: OccupancyPolicy) -> Occupancy {
    if bookings.iter().any(|b| policy.is_occupying(b.status)) {
        Occupancy::Occupied
    } else {
        Occupancy::Vacant
    }
}

/// Whether a month has no occupying booking overlapping it
pub fn month_is_available(
    bookings: &[Booking],
    window: MonthWindow,
    policy: OccupancyPolicy,
) -> bool {
    !bookings
        .iter()
        .any(|b| policy.is_occupying(b.status) && window.overlaps(b.start_date, b.end_date))
}

/// Availability for `months` consecutive months, starting with the month
/// containing `from`
pub fn monthly_availability(
    bookings: &[Booking],
    from: NaiveDate,
    months: usize,
    policy: OccupancyPolicy,
) -> BTreeMap<String, bool> {
    let mut map = BTreeMap::new();
    let mut window = MonthWindow::containing(from);
    for _ in 0..months {
        map.insert(window.key(), month_is_available(bookings, window, policy));
        window = window.next();
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(start: &str, end: &str, status: BookingStatus) -> Booking {
        Booking {
            id: 1,
            zone_id: 1,
            user_id: 1,
            start_date: start.parse().unwrap(),
            end_date: end.parse().unwrap(),
            total_price: 1000.0,
            status,
            created_at: 0,
        }
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_zone_is_vacant() {
        assert_eq!(
            project_occupancy(&[], OccupancyPolicy::AnyBooking),
            Occupancy::Vacant
        );
    }

    #[test]
    fn test_any_booking_policy_counts_pending() {
        let bookings = [booking("2026-09-01", "2026-09-30", BookingStatus::Pending)];
        assert_eq!(
            project_occupancy(&bookings, OccupancyPolicy::AnyBooking),
            Occupancy::Occupied
        );
        assert_eq!(
            project_occupancy(&bookings, OccupancyPolicy::ActiveOnly),
            Occupancy::Vacant
        );
    }

    #[test]
    fn test_active_only_policy_counts_approved_and_booked() {
        for status in [BookingStatus::Approved, BookingStatus::Booked] {
            let bookings = [booking("2026-09-01", "2026-09-30", status)];
            assert_eq!(
                project_occupancy(&bookings, OccupancyPolicy::ActiveOnly),
                Occupancy::Occupied
            );
        }
        let rejected = [booking("2026-09-01", "2026-09-30", BookingStatus::Rejected)];
        assert_eq!(
            project_occupancy(&rejected, OccupancyPolicy::ActiveOnly),
            Occupancy::Vacant
        );
    }

    #[test]
    fn test_month_window_bounds() {
        let window = MonthWindow::containing(date("2026-02-14"));
        assert_eq!(window.first_day(), date("2026-02-01"));
        assert_eq!(window.last_day(), date("2026-02-28"));
        assert_eq!(window.key(), "2026-02");
        assert_eq!(window.next().key(), "2026-03");
    }

    #[test]
    fn test_month_overlap_boundaries() {
        let september = MonthWindow::containing(date("2026-09-15"));

        // Ends exactly on the first day of the month
        assert!(september.overlaps(date("2026-08-01"), date("2026-09-01")));
        // Starts exactly on the last day of the month
        assert!(september.overlaps(date("2026-09-30"), date("2026-10-15")));
        // Fully before / fully after
        assert!(!september.overlaps(date("2026-08-01"), date("2026-08-31")));
        assert!(!september.overlaps(date("2026-10-01"), date("2026-10-31")));
        // Spanning the whole month
        assert!(september.overlaps(date("2026-08-01"), date("2026-12-31")));
    }

    #[test]
    fn test_monthly_availability_map() {
        let bookings = [booking("2026-10-05", "2026-11-20", BookingStatus::Approved)];
        let map = monthly_availability(
            &bookings,
            date("2026-09-28"),
            12,
            OccupancyPolicy::AnyBooking,
        );

        assert_eq!(map.len(), 12);
        assert_eq!(map.get("2026-09"), Some(&true));
        assert_eq!(map.get("2026-10"), Some(&false));
        assert_eq!(map.get("2026-11"), Some(&false));
        assert_eq!(map.get("2026-12"), Some(&true));
        // Year rollover keys are present
        assert_eq!(map.get("2027-08"), Some(&true));
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!("any".parse(), Ok(OccupancyPolicy::AnyBooking));
        assert_eq!("ACTIVE_ONLY".parse(), Ok(OccupancyPolicy::ActiveOnly));
        assert!("sometimes".parse::<OccupancyPolicy>().is_err());
    }
}
