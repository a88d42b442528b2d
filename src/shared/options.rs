//! Parameter für den Schleifen-Bau.
//!
//! `TrackParams` enthält alle Werte, die eine Track-Definition neben den
//! Wegpunkten mitbringt. Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Radius ──────────────────────────────────────────────────────────

/// Standard-Abstand der Schleife zur Wegpunkt-Polyline (Welteinheiten).
pub const LOOP_RADIUS: f32 = 3.0;
/// Empfohlener minimaler Radius.
pub const LOOP_RADIUS_MIN: f32 = 0.5;
/// Empfohlener maximaler Radius.
pub const LOOP_RADIUS_MAX: f32 = 10.0;

// ── Bahnsteige ──────────────────────────────────────────────────────

/// Standard-Abstand des Bahnsteig-Ankers zur Schleife (Welteinheiten).
pub const PLATFORM_OFFSET: f32 = 0.5;
/// Empfohlener minimaler Bahnsteig-Abstand.
pub const PLATFORM_OFFSET_MIN: f32 = 0.1;
/// Empfohlener maximaler Bahnsteig-Abstand.
pub const PLATFORM_OFFSET_MAX: f32 = 3.0;

// ── Spline ──────────────────────────────────────────────────────────

/// Reservierte Unterteilung pro Segment (wird vom Builder nicht ausgewertet).
pub const SPLINE_POINTS_PER_SEGMENT: u32 = 5;
/// Minimal erlaubte Unterteilung.
pub const SPLINE_POINTS_PER_SEGMENT_MIN: u32 = 1;
/// Maximal erlaubte Unterteilung.
pub const SPLINE_POINTS_PER_SEGMENT_MAX: u32 = 20;

/// Skalare Parameter eines Schleifen-Baus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackParams {
    /// Seitlicher Abstand der Schleife zu den Wegpunkten
    pub radius: f32,
    /// Zusätzlicher Abstand des Bahnsteig-Ankers nach außen
    pub platform_offset: f32,
    /// Reserviert: wird angenommen, aber nicht verwendet
    pub spline_points_per_segment: u32,
}

impl Default for TrackParams {
    fn default() -> Self {
        Self {
            radius: LOOP_RADIUS,
            platform_offset: PLATFORM_OFFSET,
            spline_points_per_segment: SPLINE_POINTS_PER_SEGMENT,
        }
    }
}

impl TrackParams {
    /// Erstellt Parameter mit Standard-Unterteilung.
    pub fn new(radius: f32, platform_offset: f32) -> Self {
        Self {
            radius,
            platform_offset,
            ..Self::default()
        }
    }

    /// Begrenzt alle Werte auf die empfohlenen Bereiche.
    ///
    /// Der Builder selbst validiert nicht; Aufrufer sollen vorher klemmen.
    pub fn clamped(self) -> Self {
        let clamped = Self {
            radius: self.radius.clamp(LOOP_RADIUS_MIN, LOOP_RADIUS_MAX),
            platform_offset: self
                .platform_offset
                .clamp(PLATFORM_OFFSET_MIN, PLATFORM_OFFSET_MAX),
            spline_points_per_segment: self
                .spline_points_per_segment
                .clamp(SPLINE_POINTS_PER_SEGMENT_MIN, SPLINE_POINTS_PER_SEGMENT_MAX),
        };
        if clamped != self {
            log::warn!(
                "Track-Parameter ausserhalb des empfohlenen Bereichs, geklemmt: {:?} -> {:?}",
                self,
                clamped
            );
        }
        clamped
    }
}
