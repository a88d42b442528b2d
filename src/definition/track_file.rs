//! Lesen und Schreiben von Track-Definitionen im TOML-Format.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::{build_loop, LoopTrack, Waypoint};
use crate::shared::TrackParams;

/// Autoren-Dokument einer Schleife.
///
/// ```toml
/// radius = 3.0
/// platform_offset = 0.5
///
/// [[points]]
/// position = [0.0, 0.0, 0.0]
/// is_platform_start = true
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrackDefinition {
    /// Skalare Parameter (fehlende Werte → Standardwerte)
    #[serde(flatten)]
    pub params: TrackParams,
    /// Wegpunkte in Fahrtreihenfolge der Hinfahrt
    #[serde(default)]
    pub points: Vec<Waypoint>,
}

impl TrackDefinition {
    /// Erstellt eine Definition aus Wegpunkten und Parametern.
    pub fn new(params: TrackParams, points: Vec<Waypoint>) -> Self {
        Self { params, points }
    }

    /// Parsed eine Definition aus einem TOML-String.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Track-Definition konnte nicht geparst werden")
    }

    /// Serialisiert die Definition als TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Track-Definition konnte nicht serialisiert werden")
    }

    /// Lädt eine Definition aus einer TOML-Datei.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Datei nicht lesbar: {}", path.display()))?;
        let definition = Self::from_toml_str(&content)
            .with_context(|| format!("Fehler in Track-Definition: {}", path.display()))?;
        log::info!(
            "Track-Definition geladen aus: {} ({} Wegpunkte)",
            path.display(),
            definition.points.len()
        );
        Ok(definition)
    }

    /// Speichert die Definition als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = self.to_toml_string()?;
        std::fs::write(path, content)
            .with_context(|| format!("Datei nicht schreibbar: {}", path.display()))?;
        log::info!("Track-Definition gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Anzahl markierter Bahnsteig-Starts.
    pub fn platform_count(&self) -> usize {
        self.points.iter().filter(|p| p.is_platform_start).count()
    }

    /// Baut die Schleife mit den gespeicherten Parametern.
    ///
    /// Mit `clamp` werden die Parameter vorher auf die empfohlenen Bereiche begrenzt.
    pub fn build(&self, clamp: bool) -> Result<LoopTrack> {
        let params = if clamp {
            self.params.clamped()
        } else {
            self.params
        };
        Ok(build_loop(&self.points, &params)?)
    }
}
