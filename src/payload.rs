use crate::channel::ArtifactKind;
use boardpass_types::{Flight, Passenger};

/// Builds the text encoded in a pass barcode.
///
/// Only kiosk passes carry the gate. Calendar events have no barcode and get
/// an empty payload.
pub fn build_payload(
    kind: ArtifactKind,
    flight: &Flight,
    passenger: &Passenger,
    seat: &str,
    seq_no: &str,
    gate: &str,
) -> String {
    let fragment = flight.barcode_fragment();
    let name = passenger.full_name();
    match kind {
        ArtifactKind::Mobile | ArtifactKind::Electronic => {
            format!("{fragment}{seat}{seq_no}{name}")
        }
        ArtifactKind::Kiosk => format!("{fragment}{gate}{seat}{seq_no}{name}"),
        ArtifactKind::Calendar => String::new(),
    }
}
