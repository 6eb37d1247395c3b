//! The boarding pass aggregate and channel dispatch.

use crate::channel::{Artifact, ArtifactKind, Channel};
use crate::compose;
use crate::env::RenderEnv;
use crate::error::BoardingPassError;
use crate::payload::build_payload;
use boardpass_types::{Flight, Passenger};
use serde::{Deserialize, Serialize};

#[cfg(feature = "rayon-executor")]
use rayon::prelude::*;

/// Everything printed on a pass for one passenger on one flight.
///
/// Immutable once built: rendering is a pure function of these fields, the
/// requested channel and the (read-only) render environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardingPass {
    flight: Flight,
    passenger: Passenger,
    pnr: String,
    seat: String,
    seq_no: String,
    /// Empty when unknown; only kiosk passes print it.
    #[serde(default)]
    gate: String,
}

impl BoardingPass {
    pub fn new(
        flight: Flight,
        passenger: Passenger,
        pnr: impl Into<String>,
        seat: impl Into<String>,
        seq_no: impl Into<String>,
    ) -> Self {
        Self {
            flight,
            passenger,
            pnr: pnr.into(),
            seat: seat.into(),
            seq_no: seq_no.into(),
            gate: String::new(),
        }
    }

    pub fn with_gate(mut self, gate: impl Into<String>) -> Self {
        self.gate = gate.into();
        self
    }

    pub fn flight(&self) -> &Flight {
        &self.flight
    }

    pub fn passenger(&self) -> &Passenger {
        &self.passenger
    }

    pub fn pnr(&self) -> &str {
        &self.pnr
    }

    pub fn seat(&self) -> &str {
        &self.seat
    }

    pub fn seq_no(&self) -> &str {
        &self.seq_no
    }

    pub fn gate(&self) -> &str {
        &self.gate
    }

    /// The barcode text for an artifact of `kind`.
    pub fn payload(&self, kind: ArtifactKind) -> String {
        build_payload(kind, &self.flight, &self.passenger, &self.seat, &self.seq_no, &self.gate)
    }

    /// Renders with the process-wide environment. See [`RenderEnv::shared`].
    pub fn render(&self, channel: Channel) -> Result<Vec<Artifact>, BoardingPassError> {
        self.render_with(&RenderEnv::shared(), channel)
    }

    /// Renders every artifact `channel` calls for, in dispatch order.
    ///
    /// Artifacts are independent of each other and may be composed in
    /// parallel; the first failure aborts the whole call.
    pub fn render_with(
        &self,
        env: &RenderEnv,
        channel: Channel,
    ) -> Result<Vec<Artifact>, BoardingPassError> {
        let kinds = channel.artifact_kinds();
        log::debug!("Rendering {} pass for PNR {}: {:?}", channel, self.pnr, kinds);

        #[cfg(feature = "rayon-executor")]
        let artifacts = kinds.par_iter().map(|&kind| self.compose(env, kind)).collect();
        #[cfg(not(feature = "rayon-executor"))]
        let artifacts = kinds.iter().map(|&kind| self.compose(env, kind)).collect();

        artifacts
    }

    /// Composes a single artifact.
    ///
    /// A calendar event always embeds the mobile pass, whichever channel
    /// asked for it, so the mobile document is composed first.
    pub fn compose(
        &self,
        env: &RenderEnv,
        kind: ArtifactKind,
    ) -> Result<Artifact, BoardingPassError> {
        let bytes = match kind {
            ArtifactKind::Mobile => compose::mobile::compose(self, env)?,
            ArtifactKind::Kiosk => compose::kiosk::compose(self, env)?,
            ArtifactKind::Electronic => compose::electronic::compose(self, env)?,
            ArtifactKind::Calendar => {
                let mobile = compose::mobile::compose(self, env)?;
                compose::calendar::compose(self, env, &mobile)?
            }
        };
        log::debug!("Composed {:?} artifact: {} bytes", kind, bytes.len());
        Ok(Artifact::new(kind, bytes))
    }
}
