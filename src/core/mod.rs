//! Core-Domänentypen: Wegpunkte, Bahnsteige, Stationen und der Schleifen-Builder.

pub mod loop_builder;
pub mod platform;
pub mod waypoint;

pub use loop_builder::{build_loop, LoopBuildError, LoopTrack};
pub use platform::{PlatformWindow, Station, TrackPlatform, TrackStation};
pub use waypoint::Waypoint;
