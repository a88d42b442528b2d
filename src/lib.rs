//! Metro Loop Track Library.
//! Baut geschlossene Schleifen mit Stationen aus Wegpunkten; als Library
//! exportiert für Tests, Benchmarks und Wiederverwendung.

pub mod core;
pub mod definition;
pub mod shared;

pub use crate::core::{
    build_loop, LoopBuildError, LoopTrack, PlatformWindow, Station, TrackPlatform, TrackStation,
    Waypoint,
};
pub use definition::{LoopExport, TrackDefinition};
pub use shared::TrackParams;
