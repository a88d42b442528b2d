//! Geteilte, layer-neutrale Bausteine.
//!
//! Enthält Geometrie-Hilfen und Parameter, die von `core` und `definition`
//! gemeinsam genutzt werden.

pub mod geometry;
pub mod options;

pub use options::TrackParams;
