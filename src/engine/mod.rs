//! Evil hangman engine
//!
//! Partitioning, adversarial family selection and the round state machine.

mod observer;
pub mod partition;
mod round;
pub mod selector;

pub use observer::{RoundEvent, RoundObserver};
pub use partition::{Families, family_sizes, partition};
pub use round::{GuessOutcome, Round, RoundConfig, RoundStatus};
pub use selector::{Choice, RankedFamily, rank_families, select_family};
