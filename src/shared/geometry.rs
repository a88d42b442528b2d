//! Reine Geometrie-Funktionen für den Schleifen-Bau.
//!
//! Layer-neutral: wird von `core::loop_builder` und vom Export genutzt,
//! ohne Zirkel-Abhängigkeiten zu erzeugen.

use glam::{Mat3, Quat, Vec3};

/// Feste Welt-Vertikale. Alle Offsets liegen in der Ebene senkrecht dazu.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Offset-Richtung rechts der Fahrtrichtung (`cross(up, to_next)`).
///
/// `to_next` sollte normalisiert sein. Das Ergebnis wird nicht
/// nachnormalisiert: hat die Fahrtrichtung einen vertikalen Anteil,
/// wird der Offset entsprechend kürzer.
pub fn offset_right(up: Vec3, to_next: Vec3) -> Vec3 {
    up.cross(to_next)
}

/// Rotation, die +Z auf `forward` und +Y in Richtung `up` dreht.
///
/// Linkshändige Look-Rotation wie in gängigen Game-Engines:
/// `right = normalize(cross(up, forward))`, `up' = cross(forward, right)`.
/// Sind `forward` und `up` parallel, ist das Ergebnis NaN.
pub fn look_rotation(forward: Vec3, up: Vec3) -> Quat {
    let right = up.cross(forward).normalize();
    let true_up = forward.cross(right);
    Quat::from_mat3(&Mat3::from_cols(right, true_up, forward))
}

/// Approximierte Länge einer offenen Polyline.
pub fn polyline_length(points: &[Vec3]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Länge einer geschlossenen Polyline inklusive implizitem Schluss-Segment.
pub fn closed_polyline_length(points: &[Vec3]) -> f32 {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) if points.len() > 1 => {
            polyline_length(points) + last.distance(*first)
        }
        _ => 0.0,
    }
}
