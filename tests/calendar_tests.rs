mod common;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use boardpass::{ArtifactKind, Channel, RenderEnv};
use common::fixtures::pass;
use common::{TestResult, init_logger};
use icalendar::{Calendar, CalendarComponent, Component};

fn parse(bytes: &[u8]) -> Result<Calendar, Box<dyn std::error::Error>> {
    let text = std::str::from_utf8(bytes)?;
    Ok(text.parse::<Calendar>()?)
}

fn event_summaries(calendar: &Calendar) -> Vec<String> {
    calendar
        .components
        .iter()
        .filter_map(|component| match component {
            CalendarComponent::Event(event) => event.get_summary().map(str::to_string),
            _ => None,
        })
        .collect()
}

#[test]
fn desktop_and_mobile_calendars_hold_exactly_one_event() -> TestResult {
    init_logger();
    for channel in [Channel::Desktop, Channel::Mobile] {
        let artifacts = pass().render(channel)?;
        assert_eq!(artifacts.len(), 2);
        assert_eq!(artifacts[1].kind(), ArtifactKind::Calendar);
        assert_eq!(artifacts[1].media_type(), "text/calendar");

        let calendar = parse(artifacts[1].bytes())?;
        assert_eq!(event_summaries(&calendar), vec!["Flight to Chennai (9W465)".to_string()]);
    }
    Ok(())
}

#[test]
fn desktop_calendar_attaches_the_mobile_pass() -> TestResult {
    let env = RenderEnv::bundled();
    let desktop = pass().render_with(&env, Channel::Desktop)?;
    let mobile = pass().render_with(&env, Channel::Mobile)?;

    let unfolded = String::from_utf8(desktop[1].bytes().to_vec())?.replace("\r\n ", "");
    let mobile_pdf = STANDARD.encode(mobile[0].bytes());
    let electronic_pdf = STANDARD.encode(desktop[0].bytes());

    assert!(unfolded.contains(&mobile_pdf));
    assert!(!unfolded.contains(&electronic_pdf));
    Ok(())
}

#[test]
fn calendar_uids_differ_between_renders() -> TestResult {
    let uid = |bytes: &[u8]| -> Result<Option<String>, Box<dyn std::error::Error>> {
        let calendar = parse(bytes)?;
        Ok(calendar.components.iter().find_map(|component| match component {
            CalendarComponent::Event(event) => event.get_uid().map(str::to_string),
            _ => None,
        }))
    };
    let first = pass().render(Channel::Mobile)?;
    let second = pass().render(Channel::Mobile)?;
    let (a, b) = (uid(first[1].bytes())?, uid(second[1].bytes())?);
    assert!(a.is_some());
    assert_ne!(a, b);
    Ok(())
}
