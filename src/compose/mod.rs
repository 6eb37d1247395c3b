//! One composer per artifact kind.
//!
//! Document composers first describe their page as a [`PageSpec`] and then
//! hand it to the environment's renderer in a single call.
//!
//! [`PageSpec`]: boardpass_render_lopdf::PageSpec

pub mod calendar;
pub mod electronic;
pub mod kiosk;
pub mod mobile;

use crate::layout::summary_row;
use crate::pass::BoardingPass;
use boardpass_render_lopdf::Block;

/// The passenger-copy and airline-copy titles printed side by side at the
/// same baseline.
pub(crate) fn header_pair(
    left: (f32, &str),
    right: (f32, &str),
    baseline: f32,
    font_size: f32,
) -> [Block; 2] {
    [
        Block::text(left.0, baseline, font_size, left.1),
        Block::text(right.0, baseline, font_size, right.1),
    ]
}

/// Rows shared by the kiosk and desktop summaries. The last row depends on
/// whether the gate is printed.
pub(crate) fn summary_rows(pass: &BoardingPass, with_gate: bool) -> Vec<[String; 4]> {
    let flight = pass.flight();
    let passenger = pass.passenger();
    let name = format!("NAME: {}", passenger.full_name());
    let number = format!("FLT: {}", flight.complete_number());
    let date = format!("DATE: {}", flight.departure_date());
    let dep = format!("DEP: {}", flight.departure_time());
    let arr = format!("ARR: {}", flight.arrival_time());

    let last = if with_gate {
        summary_row(
            date.clone(),
            format!("GATE: {}", pass.gate()),
            format!("SEAT: {}   GATE: {}", pass.seat(), pass.gate()),
        )
    } else {
        summary_row(date.clone(), "", format!("SEAT: {}", pass.seat()))
    };

    vec![
        summary_row(name.clone(), format!("CLASS: {}", passenger.travel_class()), name),
        summary_row(number.clone(), format!("PNR: {}", pass.pnr()), number),
        summary_row(
            flight.origin_display(),
            flight.destination_display(),
            flight.origin_destination_codes(),
        ),
        summary_row(dep.clone(), arr.clone(), format!("{dep} {arr}")),
        summary_row(format!("SEQ: {}", pass.seq_no()), format!("SEAT: {}", pass.seat()), date),
        last,
    ]
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::pass::BoardingPass;
    use boardpass_types::{Airport, Flight, Passenger};
    use chrono::NaiveDate;

    pub fn pass() -> BoardingPass {
        let departure = NaiveDate::from_ymd_opt(2026, 10, 18)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .unwrap();
        let flight = Flight::new(
            "9W",
            "465",
            Airport::new("BOM", "Mumbai"),
            Airport::new("MAA", "Chennai"),
            departure,
            2,
        );
        let passenger = Passenger::new("First", "Last", "first.last@example.com", "Economy");
        BoardingPass::new(flight, passenger, "A1B2C3", "10D", "0018")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kiosk_rows_restate_the_passenger_copy() {
        let rows = summary_rows(&fixtures::pass().with_gate("45C"), true);
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0], ["NAME: First Last", "CLASS: Economy", "", "NAME: First Last"]);
        assert_eq!(rows[2], ["Mumbai (BOM)", "Chennai (MAA)", "", "BOM - MAA"]);
        assert_eq!(rows[3][3], "DEP: 09:30 ARR: 11:30");
        assert_eq!(rows[5], ["DATE: 18 Oct 2026", "GATE: 45C", "", "SEAT: 10D   GATE: 45C"]);
    }

    #[test]
    fn electronic_rows_leave_out_the_gate() {
        let rows = summary_rows(&fixtures::pass().with_gate("45C"), false);
        assert_eq!(rows[5], ["DATE: 18 Oct 2026", "", "", "SEAT: 10D"]);
        assert!(rows.iter().flatten().all(|cell| !cell.contains("45C")));
    }
}
