//! JSON-Export eines gebauten Tracks für das Bewegungs- und Halte-System.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::{LoopTrack, TrackStation};

/// Persistierbare Form eines Bau-Ergebnisses.
///
/// Enthält nur, was die Konsumenten brauchen: Spline-Punkte für die
/// Streckenverfolgung und die Zeitfenster der Stationen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoopExport {
    pub spline_points: Vec<[f32; 3]>,
    pub stations: Vec<TrackStation>,
}

impl From<&LoopTrack> for LoopExport {
    fn from(track: &LoopTrack) -> Self {
        Self {
            spline_points: track.spline_points.iter().map(|p| p.to_array()).collect(),
            stations: track.track_stations(),
        }
    }
}

impl LoopExport {
    /// Serialisiert den Export als eingerücktes JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Export konnte nicht serialisiert werden")
    }

    /// Schreibt den Export als JSON-Datei.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = self.to_json_pretty()?;
        std::fs::write(path, content)
            .with_context(|| format!("Export nicht schreibbar: {}", path.display()))?;
        log::info!(
            "Export gespeichert nach: {} ({} Punkte, {} Stationen)",
            path.display(),
            self.spline_points.len(),
            self.stations.len()
        );
        Ok(())
    }
}
