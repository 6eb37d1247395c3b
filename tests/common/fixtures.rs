use boardpass::{Airport, BoardingPass, Flight, Passenger};
use chrono::NaiveDate;

pub fn flight() -> Flight {
    let departure = NaiveDate::from_ymd_opt(2026, 10, 18)
        .and_then(|d| d.and_hms_opt(9, 30, 0))
        .expect("valid departure");
    Flight::new(
        "9W",
        "465",
        Airport::new("BOM", "Mumbai"),
        Airport::new("MAA", "Chennai"),
        departure,
        2,
    )
}

pub fn passenger() -> Passenger {
    Passenger::new("First", "Last", "first.last@example.com", "Economy")
}

/// 9W 465 BOM to MAA, booking A1B2C3, seat 10D, sequence 0018, no gate.
pub fn pass() -> BoardingPass {
    BoardingPass::new(flight(), passenger(), "A1B2C3", "10D", "0018")
}

pub fn pass_with_gate() -> BoardingPass {
    pass().with_gate("45C")
}
