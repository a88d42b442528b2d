//! Repräsentiert einen vom Benutzer gesetzten Wegpunkt der Schleife.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Ein Kontrollpunkt der Schleife.
///
/// Die Reihenfolge der Wegpunkte bestimmt die Fahrtrichtung der Hinfahrt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Weltposition
    pub position: Vec3,
    /// Beginnt an diesem Wegpunkt ein Bahnsteig?
    #[serde(default)]
    pub is_platform_start: bool,
}

impl Waypoint {
    /// Erstellt einen Wegpunkt
    pub fn new(position: Vec3, is_platform_start: bool) -> Self {
        Self {
            position,
            is_platform_start,
        }
    }

    /// Erstellt einen Wegpunkt ohne Bahnsteig
    pub fn plain(position: Vec3) -> Self {
        Self::new(position, false)
    }

    /// Erstellt einen Wegpunkt mit Bahnsteig-Start
    pub fn platform(position: Vec3) -> Self {
        Self::new(position, true)
    }
}
