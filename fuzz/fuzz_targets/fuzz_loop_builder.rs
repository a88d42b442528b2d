#![no_main]

use glam::Vec3;
use libfuzzer_sys::fuzz_target;
use metro_loop_track::{build_loop, LoopBuildError, TrackParams, Waypoint};

// 13 Bytes pro Wegpunkt: 3 × f32 + Flag
fuzz_target!(|data: &[u8]| {
    let waypoints: Vec<Waypoint> = data
        .chunks_exact(13)
        .map(|chunk| {
            let read = |i: usize| {
                f32::from_le_bytes([chunk[i], chunk[i + 1], chunk[i + 2], chunk[i + 3]])
            };
            Waypoint::new(Vec3::new(read(0), read(4), read(8)), chunk[12] & 1 == 1)
        })
        .collect();

    match build_loop(&waypoints, &TrackParams::default()) {
        Ok(track) => {
            let expected = if waypoints.len() < 2 { 1 } else { 2 * waypoints.len() + 2 };
            assert_eq!(track.spline_points.len(), expected);
        }
        Err(LoopBuildError::PlatformCountMismatch { outbound, inbound }) => {
            assert_ne!(outbound, inbound);
        }
    }
});
