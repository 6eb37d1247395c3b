use crate::error::BoardingPassError;
use serde::{Deserialize, Serialize};

/// Tunables for rendering. Every field has a default, so a JSON file only
/// needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderConfig {
    /// IANA zone written as `TZID` on calendar start and end times.
    pub calendar_time_zone: String,
    /// Length of the calendar event. Deliberately not the flight duration.
    pub calendar_event_hours: u32,
    pub reminder_lead_hours: u32,
    /// Additional alarm repetitions after the first.
    pub reminder_repeat: u32,
    pub reminder_interval_minutes: u32,
    /// Path, relative to the resource provider, of the check-in instructions
    /// printed on desktop passes.
    pub instructions_resource: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            calendar_time_zone: "Asia/Calcutta".to_string(),
            calendar_event_hours: 2,
            reminder_lead_hours: 3,
            reminder_repeat: 4,
            reminder_interval_minutes: 30,
            instructions_resource: "electronic-boarding-pass-instructions.txt".to_string(),
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self, BoardingPassError> {
        let config: RenderConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_calendar_time_zone(mut self, zone: impl Into<String>) -> Self {
        self.calendar_time_zone = zone.into();
        self
    }

    pub fn with_calendar_event_hours(mut self, hours: u32) -> Self {
        self.calendar_event_hours = hours;
        self
    }

    pub fn with_reminder(mut self, lead_hours: u32, repeat: u32, interval_minutes: u32) -> Self {
        self.reminder_lead_hours = lead_hours;
        self.reminder_repeat = repeat;
        self.reminder_interval_minutes = interval_minutes;
        self
    }

    pub fn with_instructions_resource(mut self, path: impl Into<String>) -> Self {
        self.instructions_resource = path.into();
        self
    }

    pub(crate) fn validate(&self) -> Result<(), BoardingPassError> {
        if self.calendar_time_zone.trim().is_empty() {
            return Err(BoardingPassError::Config("calendarTimeZone must not be empty".to_string()));
        }
        if self.instructions_resource.trim().is_empty() {
            return Err(BoardingPassError::Config(
                "instructionsResource must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
