//! Bahnsteig-Fenster und Stationen entlang der Schleife.
//!
//! `PlatformWindow` und `Station` sind die Zwischenergebnisse des Builders
//! (inkl. Spawn-Transform), `TrackPlatform` und `TrackStation` die reduzierten
//! Datensätze für das Halte-System.

use glam::{Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Ein Bahnsteig auf einer Fahrtrichtung der Schleife.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformWindow {
    /// Normiertes Intervall `[start_t, end_t)` auf dem Schleifen-Parameter
    pub times: Vec2,
    /// Anker-Position des Bahnsteigs (weiter außen als die Schleife)
    pub position: Vec3,
    /// Ausrichtung in Fahrtrichtung
    pub rotation: Quat,
}

impl PlatformWindow {
    /// Start des Zeitfensters
    pub fn start_t(&self) -> f32 {
        self.times.x
    }

    /// Ende des Zeitfensters
    pub fn end_t(&self) -> f32 {
        self.times.y
    }

    /// Reduziert das Fenster auf die Zeitwerte.
    pub fn to_track_platform(&self) -> TrackPlatform {
        TrackPlatform {
            start_t: self.start_t(),
            end_t: self.end_t(),
        }
    }
}

/// Eine Station: derselbe physische Halt auf Hin- und Rückfahrt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Station {
    /// Bahnsteig der Hinfahrt
    pub outbound: PlatformWindow,
    /// Bahnsteig der Rückfahrt
    pub inbound: PlatformWindow,
}

impl Station {
    /// Reduziert die Station auf die persistierten Zeitfenster.
    pub fn to_track_station(&self) -> TrackStation {
        TrackStation {
            outbound: self.outbound.to_track_platform(),
            inbound: self.inbound.to_track_platform(),
        }
    }
}

/// Zeitfenster eines Bahnsteigs, wie es das Halte-System konsumiert.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackPlatform {
    /// Start des Zeitfensters auf dem Schleifen-Parameter
    pub start_t: f32,
    /// Ende des Zeitfensters auf dem Schleifen-Parameter
    pub end_t: f32,
}

impl TrackPlatform {
    /// `end_t - start_t`.
    ///
    /// Für Rückfahrt-Fenster kann der Wert negativ sein (`start_t > end_t`);
    /// die Werte werden unverändert exportiert.
    pub fn width(&self) -> f32 {
        self.end_t - self.start_t
    }
}

/// Persistierter Stations-Datensatz.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackStation {
    /// Zeitfenster der Hinfahrt
    pub outbound: TrackPlatform,
    /// Zeitfenster der Rückfahrt
    pub inbound: TrackPlatform,
}
