//! Track-Definitionen (TOML) und JSON-Export der Bau-Ergebnisse.
//!
//! Eine Definition enthält die Wegpunkte einer Schleife plus Parameter;
//! der Export reduziert das Ergebnis auf Spline-Punkte und Stations-Zeitfenster.

pub mod export;
pub mod track_file;

pub use export::LoopExport;
pub use track_file::TrackDefinition;
