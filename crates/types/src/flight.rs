use crate::airport::Airport;
use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

/// A scheduled flight leg.
///
/// The departure is a wall-clock time at the origin airport. Every derived
/// string used on the printed passes (clock times, dates, the barcode
/// fragment) is computed from it on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    carrier: String,
    number: String,
    origin: Airport,
    destination: Airport,
    departure: NaiveDateTime,
    duration_hours: u32,
}

impl Flight {
    pub fn new(
        carrier: impl Into<String>,
        number: impl Into<String>,
        origin: Airport,
        destination: Airport,
        departure: NaiveDateTime,
        duration_hours: u32,
    ) -> Self {
        Self {
            carrier: carrier.into(),
            number: number.into(),
            origin,
            destination,
            departure,
            duration_hours,
        }
    }

    pub fn carrier(&self) -> &str {
        &self.carrier
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn origin(&self) -> &Airport {
        &self.origin
    }

    pub fn destination(&self) -> &Airport {
        &self.destination
    }

    pub fn departure(&self) -> NaiveDateTime {
        self.departure
    }

    /// Carrier code followed by the flight number, e.g. `9W465`.
    pub fn complete_number(&self) -> String {
        format!("{}{}", self.carrier, self.number)
    }

    pub fn origin_display(&self) -> String {
        self.origin.to_string()
    }

    pub fn destination_display(&self) -> String {
        self.destination.to_string()
    }

    /// `BOM - MAA`
    pub fn origin_destination_codes(&self) -> String {
        format!("{} - {}", self.origin.code(), self.destination.code())
    }

    /// Departure plus the scheduled duration. Saturates instead of
    /// overflowing the calendar range.
    pub fn arrival(&self) -> NaiveDateTime {
        self.departure
            .checked_add_signed(TimeDelta::hours(i64::from(self.duration_hours)))
            .unwrap_or(NaiveDateTime::MAX)
    }

    pub fn departure_time(&self) -> String {
        self.departure.format("%H:%M").to_string()
    }

    pub fn arrival_time(&self) -> String {
        self.arrival().format("%H:%M").to_string()
    }

    /// `18 Oct 2026`
    pub fn departure_date(&self) -> String {
        self.departure.format("%d %b %Y").to_string()
    }

    /// Compact flight identification placed at the front of every barcode
    /// payload: carrier, number, origin, destination and `DDMONYY` date.
    pub fn barcode_fragment(&self) -> String {
        format!(
            "{}{}{}{}{}",
            self.carrier,
            self.number,
            self.origin.code(),
            self.destination.code(),
            self.departure.format("%d%b%y").to_string().to_uppercase()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn flight(departure: NaiveDateTime, hours: u32) -> Flight {
        Flight::new(
            "9W",
            "465",
            Airport::new("BOM", "Mumbai"),
            Airport::new("MAA", "Chennai"),
            departure,
            hours,
        )
    }

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 18)
            .and_then(|d| d.and_hms_opt(h, m, 0))
            .unwrap()
    }

    #[test]
    fn derived_strings() {
        let f = flight(at(10, 30), 2);
        assert_eq!(f.complete_number(), "9W465");
        assert_eq!(f.origin_display(), "Mumbai (BOM)");
        assert_eq!(f.destination_display(), "Chennai (MAA)");
        assert_eq!(f.origin_destination_codes(), "BOM - MAA");
        assert_eq!(f.departure_time(), "10:30");
        assert_eq!(f.arrival_time(), "12:30");
        assert_eq!(f.departure_date(), "18 Oct 2026");
        assert_eq!(f.barcode_fragment(), "9W465BOMMAA18OCT26");
    }

    #[test]
    fn arrival_rolls_over_midnight() {
        let f = flight(at(23, 15), 3);
        assert_eq!(f.arrival_time(), "02:15");
        assert_eq!(f.arrival().date(), NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
        // the printed date is always the departure date
        assert_eq!(f.departure_date(), "18 Oct 2026");
    }

    #[test]
    fn arrival_saturates_on_overflow() {
        let f = flight(NaiveDateTime::MAX, 1);
        assert_eq!(f.arrival(), NaiveDateTime::MAX);
    }
}
