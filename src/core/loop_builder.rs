//! Baut eine geschlossene Schleife (Offset-Spline + Stationen) aus Wegpunkten.
//!
//! Die Schleife entsteht aus zwei gespiegelten Durchläufen der Wegpunkte:
//! Hinfahrt (vorwärts, rechts versetzt) und Rückfahrt (rückwärts, wieder
//! rechts versetzt), verbunden durch Kappen an beiden Enden.
//!
//! Spline-Aufbau für `N >= 2` Wegpunkte (`2N + 2` Punkte):
//! Einstiegs-Kappe, `N - 1` Hinfahrt-Punkte, zwei Wende-Punkte,
//! `N - 1` Rückfahrt-Punkte, Ausstiegs-Kappe.

use glam::{Vec2, Vec3};
use thiserror::Error;

use super::platform::{PlatformWindow, Station, TrackStation};
use super::waypoint::Waypoint;
use crate::shared::geometry::{closed_polyline_length, look_rotation, offset_right, WORLD_UP};
use crate::shared::TrackParams;

/// Fehler beim Schleifen-Bau.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoopBuildError {
    /// Hin- und Rückfahrt haben unterschiedlich viele Bahnsteige erzeugt.
    ///
    /// Tritt auf, wenn ein Bahnsteig nur am ersten oder nur am letzten
    /// Wegpunkt markiert ist: diese Indizes besucht jeweils nur ein Durchlauf.
    #[error(
        "Bahnsteig-Anzahl von Hin- und Rückfahrt weicht ab ({outbound} vs. {inbound})"
    )]
    PlatformCountMismatch { outbound: usize, inbound: usize },
}

/// Ergebnis eines Schleifen-Baus.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoopTrack {
    /// Punkte der geschlossenen Schleife in Fahrtreihenfolge (Schluss implizit)
    pub spline_points: Vec<Vec3>,
    /// Stationen in Reihenfolge der Hinfahrt
    pub stations: Vec<Station>,
}

impl LoopTrack {
    fn single_point(point: Vec3) -> Self {
        Self {
            spline_points: vec![point],
            stations: Vec::new(),
        }
    }

    /// Reduziert alle Stationen auf ihre Zeitfenster.
    pub fn track_stations(&self) -> Vec<TrackStation> {
        self.stations.iter().map(Station::to_track_station).collect()
    }

    /// Länge der geschlossenen Schleife inkl. Schluss-Segment.
    pub fn loop_length(&self) -> f32 {
        closed_polyline_length(&self.spline_points)
    }
}

/// Baut Offset-Spline und Stationen aus den Wegpunkten.
///
/// - 0 Wegpunkte: ein Spline-Punkt im Ursprung, keine Stationen
/// - 1 Wegpunkt: dieser Punkt, keine Stationen
/// - sonst: vollständige Schleife mit `2N + 2` Punkten
///
/// `params` wird nicht validiert (siehe [`TrackParams::clamped`]).
/// `spline_points_per_segment` ist reserviert und wird ignoriert.
/// Doppelte aufeinanderfolgende Wegpunkte erzeugen NaN-Punkte.
pub fn build_loop(
    waypoints: &[Waypoint],
    params: &TrackParams,
) -> Result<LoopTrack, LoopBuildError> {
    match waypoints {
        [] => return Ok(LoopTrack::single_point(Vec3::ZERO)),
        [only] => return Ok(LoopTrack::single_point(only.position)),
        _ => {}
    }

    let count = waypoints.len();
    let last = count - 1;
    let up = WORLD_UP;
    let radius = params.radius;
    let step = 1.0 / (2 * count + 2) as f32;
    let span = (last + 2) as f32;

    let window = |times: Vec2, point: Vec3, offset_dir: Vec3, to_next: Vec3| PlatformWindow {
        times,
        position: point + params.platform_offset * offset_dir,
        rotation: look_rotation(to_next, up),
    };

    let mut spline = Vec::with_capacity(2 * count + 2);
    let mut outbound: Vec<PlatformWindow> = Vec::with_capacity(count);
    let mut inbound: Vec<PlatformWindow> = Vec::with_capacity(count);

    // Einstiegs-Kappe: hinter dem ersten Wegpunkt
    let entry_dir = (-(waypoints[1].position - waypoints[0].position)).normalize();
    spline.push(waypoints[0].position + radius * entry_dir);

    // Hinfahrt
    for i in 0..last {
        let current = waypoints[i].position;
        let to_next = (waypoints[i + 1].position - current).normalize();
        let offset_dir = offset_right(up, to_next);
        let point = current + radius * offset_dir;
        spline.push(point);

        if !waypoints[i].is_platform_start {
            continue;
        }

        let start_t = 0.5 * (i + 2) as f32 / span;
        outbound.push(window(
            Vec2::new(start_t, start_t + step),
            point,
            offset_dir,
            to_next,
        ));
    }

    // Wende-Kappe am letzten Wegpunkt
    let turn_dir = (waypoints[last].position - waypoints[last - 1].position).normalize();
    spline.push(waypoints[last].position + radius * offset_right(up, turn_dir));
    spline.push(waypoints[last].position + radius * turn_dir);

    // Rückfahrt
    for i in (1..=last).rev() {
        let current = waypoints[i].position;
        let to_next = (waypoints[i - 1].position - current).normalize();
        let offset_dir = offset_right(up, to_next);
        let point = current + radius * offset_dir;
        spline.push(point);

        if !waypoints[i].is_platform_start {
            continue;
        }

        let start_t = 1.0 - 0.5 * (i + 2) as f32 / span + step;
        let end_t = 1.0 - 0.5 * (i + 3) as f32 / span;
        inbound.push(window(
            Vec2::new(start_t, end_t),
            point,
            offset_dir,
            to_next,
        ));
    }

    // Ausstiegs-Kappe: schließt die Schleife am Start
    let exit_dir = (waypoints[0].position - waypoints[1].position).normalize();
    spline.push(waypoints[0].position + radius * offset_right(up, exit_dir));

    if outbound.len() != inbound.len() {
        log::debug!(
            "Schleifen-Bau abgebrochen: {} Hinfahrt- vs. {} Rückfahrt-Bahnsteige",
            outbound.len(),
            inbound.len()
        );
        return Err(LoopBuildError::PlatformCountMismatch {
            outbound: outbound.len(),
            inbound: inbound.len(),
        });
    }

    // Rückfahrt-Liste liegt physisch umgekehrt vor
    let stations: Vec<Station> = outbound
        .into_iter()
        .zip(inbound.into_iter().rev())
        .map(|(outbound, inbound)| Station { outbound, inbound })
        .collect();

    log::debug!(
        "Schleife gebaut: {} Wegpunkte, {} Spline-Punkte, {} Stationen",
        count,
        spline.len(),
        stations.len()
    );

    Ok(LoopTrack {
        spline_points: spline,
        stations,
    })
}
