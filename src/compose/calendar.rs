//! The iCalendar event sent with desktop and mobile passes.

use crate::env::RenderEnv;
use crate::error::BoardingPassError;
use crate::pass::BoardingPass;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::TimeDelta;
use icalendar::{Alarm, Calendar, CalendarDateTime, Component, Event, EventLike, Property};

pub const ATTACHMENT_NAME: &str = "Mobile Boarding Pass.pdf";

/// Content lines are folded at this many octets.
const FOLD_LIMIT: usize = 75;

pub fn title(pass: &BoardingPass) -> String {
    let flight = pass.flight();
    format!("Flight to {} ({})", flight.destination().city(), flight.complete_number())
}

/// Builds the single flight event. `mobile_pdf` is attached as-is; callers
/// pass the mobile pass regardless of the requesting channel.
///
/// The event runs for the configured number of hours from departure, not
/// for the flight's own duration.
pub fn event(pass: &BoardingPass, env: &RenderEnv, mobile_pdf: &[u8]) -> Event {
    let config = env.config();
    let title = title(pass);
    let start = pass.flight().departure();
    let end = start
        .checked_add_signed(TimeDelta::hours(i64::from(config.calendar_event_hours)))
        .unwrap_or(start);
    let zoned = |date_time| CalendarDateTime::WithTimezone {
        date_time,
        tzid: config.calendar_time_zone.clone(),
    };

    let passenger = pass.passenger();
    let attendee = Property::new("ATTENDEE", &passenger.email_uri())
        .add_parameter("ROLE", "REQ-PARTICIPANT")
        .add_parameter("CN", &passenger.full_name())
        .done();

    let attachment = Property::new("ATTACH", &STANDARD.encode(mobile_pdf))
        .add_parameter("VALUE", "BINARY")
        .add_parameter("ENCODING", "BASE64")
        .add_parameter("FMTTYPE", "application/pdf")
        .add_parameter("X-FILENAME", ATTACHMENT_NAME)
        .done();

    let reminder = Alarm::audio(-TimeDelta::hours(i64::from(config.reminder_lead_hours)))
        .duration_and_repeat(
            TimeDelta::minutes(i64::from(config.reminder_interval_minutes)),
            config.reminder_repeat,
        )
        .add_property("DESCRIPTION", &title)
        .done();

    Event::new()
        .uid(&uuid::Uuid::new_v4().to_string())
        .summary(&title)
        .starts(zoned(start))
        .ends(zoned(end))
        .append_property(attendee)
        .append_property(attachment)
        .alarm(reminder)
        .done()
}

pub fn compose(
    pass: &BoardingPass,
    env: &RenderEnv,
    mobile_pdf: &[u8],
) -> Result<Vec<u8>, BoardingPassError> {
    let mut calendar = Calendar::new();
    calendar.timezone(&env.config().calendar_time_zone);
    calendar.push(event(pass, env, mobile_pdf));
    let text = with_ordered_parameters(&calendar.done().to_string());
    log::debug!("Calendar event '{}': {} bytes", title(pass), text.len());
    Ok(text.into_bytes())
}

/// Rewrites every content line with its parameters sorted by name.
///
/// `icalendar` keeps parameters in a hash map, so their order otherwise
/// changes from one render to the next.
fn with_ordered_parameters(text: &str) -> String {
    text.replace("\r\n ", "")
        .replace("\r\n\t", "")
        .split("\r\n")
        .map(|line| fold(&order_parameters(line)))
        .collect::<Vec<_>>()
        .join("\r\n")
}

fn order_parameters(line: &str) -> String {
    let Some(value_at) = split_points(line, ':').next() else {
        return line.to_string();
    };
    let (head, value) = line.split_at(value_at);
    let mut bounds: Vec<usize> = split_points(head, ';').collect();
    if bounds.len() < 2 {
        return line.to_string();
    }
    bounds.push(head.len());

    let mut parameters: Vec<&str> = bounds.windows(2).map(|w| &head[w[0] + 1..w[1]]).collect();
    parameters.sort_by(|a, b| a.split('=').next().cmp(&b.split('=').next()));

    let mut ordered = head[..bounds[0]].to_string();
    for parameter in parameters {
        ordered.push(';');
        ordered.push_str(parameter);
    }
    ordered.push_str(value);
    ordered
}

/// Byte offsets of `separator` outside double-quoted parameter values.
fn split_points(text: &str, separator: char) -> impl Iterator<Item = usize> + '_ {
    let mut quoted = false;
    text.char_indices().filter_map(move |(at, c)| {
        if c == '"' {
            quoted = !quoted;
        }
        (c == separator && !quoted).then_some(at)
    })
}

/// Folds a content line on char boundaries. Continuations start with a
/// single space, which counts towards the limit.
fn fold(line: &str) -> String {
    let mut folded = String::with_capacity(line.len() + line.len() / FOLD_LIMIT * 3);
    let mut used = 0;
    for c in line.chars() {
        if used + c.len_utf8() > FOLD_LIMIT {
            folded.push_str("\r\n ");
            used = 1;
        }
        folded.push(c);
        used += c.len_utf8();
    }
    folded
}
