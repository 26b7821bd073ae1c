//! Command implementations

pub mod census;
pub mod play;
pub mod simulate;

pub use census::{CensusResult, run_census};
pub use play::{PlayTally, run_play};
pub use simulate::{SimulationConfig, SimulationReport, run_simulation};
