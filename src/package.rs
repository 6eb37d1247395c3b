//! Writing rendered artifacts to disk.
//!
//! Kiosk and counter passes are written as one PDF, mobile passes as a PDF
//! plus a calendar file, desktop passes as one zip archive holding the
//! electronic pass and the calendar event.

use crate::channel::{Artifact, ArtifactKind, Channel};
use crate::env::RenderEnv;
use crate::error::BoardingPassError;
use crate::pass::BoardingPass;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// File name of a single artifact, keyed by booking reference and surname.
pub fn artifact_file_name(kind: ArtifactKind, pass: &BoardingPass) -> String {
    let stem = match kind {
        ArtifactKind::Kiosk => "kiosk-boarding-pass",
        ArtifactKind::Mobile => "mobile-boarding-pass",
        ArtifactKind::Electronic => "electronic-boarding-pass",
        ArtifactKind::Calendar => "calendar-boarding-event",
    };
    format!("{stem}-{}.{}", suffix(pass), kind.extension())
}

pub fn desktop_archive_name(pass: &BoardingPass) -> String {
    format!("desktop-boarding-passes-{}.zip", suffix(pass))
}

fn suffix(pass: &BoardingPass) -> String {
    format!("{}-{}", pass.pnr(), pass.passenger().last_name())
}

/// Renders `channel` with `env` and writes the result below `out_dir`,
/// creating it if needed. Returns the written paths in output order.
pub fn write_artifacts_for(
    pass: &BoardingPass,
    env: &RenderEnv,
    channel: Channel,
    out_dir: &Path,
) -> Result<Vec<PathBuf>, BoardingPassError> {
    let artifacts = pass.render_with(env, channel)?;
    fs::create_dir_all(out_dir)?;

    let written = match channel {
        Channel::Desktop => {
            let path = out_dir.join(desktop_archive_name(pass));
            write_archive(&path, pass, &artifacts)?;
            vec![path]
        }
        Channel::AirportCounter | Channel::Kiosk | Channel::Mobile => artifacts
            .iter()
            .map(|artifact| -> Result<PathBuf, BoardingPassError> {
                let path = out_dir.join(artifact_file_name(artifact.kind(), pass));
                fs::write(&path, artifact.bytes())?;
                Ok(path)
            })
            .collect::<Result<Vec<_>, _>>()?,
    };

    for path in &written {
        log::info!("Wrote {} for {} channel", path.display(), channel);
    }
    Ok(written)
}

fn write_archive(
    path: &Path,
    pass: &BoardingPass,
    artifacts: &[Artifact],
) -> Result<(), BoardingPassError> {
    let mut zip = ZipWriter::new(BufWriter::new(File::create(path)?));
    let options = SimpleFileOptions::default();
    for artifact in artifacts {
        zip.start_file(artifact_file_name(artifact.kind(), pass), options)?;
        zip.write_all(artifact.bytes())?;
    }
    zip.finish()?.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::fixtures;

    #[test]
    fn names_use_pnr_and_surname() {
        let pass = fixtures::pass();
        assert_eq!(
            artifact_file_name(ArtifactKind::Kiosk, &pass),
            "kiosk-boarding-pass-A1B2C3-Last.pdf"
        );
        assert_eq!(
            artifact_file_name(ArtifactKind::Calendar, &pass),
            "calendar-boarding-event-A1B2C3-Last.ics"
        );
        assert_eq!(desktop_archive_name(&pass), "desktop-boarding-passes-A1B2C3-Last.zip");
    }
}
