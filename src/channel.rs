//! Check-in channels, the artifact kinds they map onto, and rendered artifacts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The check-in context requesting a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Channel {
    AirportCounter,
    Kiosk,
    Desktop,
    Mobile,
}

impl Channel {
    pub const ALL: [Channel; 4] = [
        Channel::AirportCounter,
        Channel::Kiosk,
        Channel::Desktop,
        Channel::Mobile,
    ];

    /// The artifacts this channel produces, in output order.
    pub fn artifact_kinds(self) -> &'static [ArtifactKind] {
        match self {
            Channel::AirportCounter | Channel::Kiosk => &[ArtifactKind::Kiosk],
            Channel::Desktop => &[ArtifactKind::Electronic, ArtifactKind::Calendar],
            Channel::Mobile => &[ArtifactKind::Mobile, ArtifactKind::Calendar],
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Channel::AirportCounter => "airport-counter",
            Channel::Kiosk => "kiosk",
            Channel::Desktop => "desktop",
            Channel::Mobile => "mobile",
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown channel '{0}' (expected airport-counter, kiosk, desktop or mobile)")]
pub struct UnknownChannel(pub String);

impl FromStr for Channel {
    type Err = UnknownChannel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "airport-counter" | "counter" => Ok(Channel::AirportCounter),
            "kiosk" => Ok(Channel::Kiosk),
            "desktop" => Ok(Channel::Desktop),
            "mobile" => Ok(Channel::Mobile),
            _ => Err(UnknownChannel(s.to_string())),
        }
    }
}

/// The internal category of a rendered artifact. Several channels may share
/// one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Mobile,
    Kiosk,
    Electronic,
    Calendar,
}

impl ArtifactKind {
    pub fn media_type(self) -> &'static str {
        match self {
            ArtifactKind::Calendar => "text/calendar",
            _ => "application/pdf",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ArtifactKind::Calendar => "ics",
            _ => "pdf",
        }
    }
}

/// One rendered output of a boarding pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    kind: ArtifactKind,
    bytes: Vec<u8>,
}

impl Artifact {
    pub fn new(kind: ArtifactKind, bytes: Vec<u8>) -> Self {
        Self { kind, bytes }
    }

    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn media_type(&self) -> &'static str {
        self.kind.media_type()
    }

    pub fn extension(&self) -> &'static str {
        self.kind.extension()
    }
}
