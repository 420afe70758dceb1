//! Eight-direction sweep scan: phase table and progress-driven machine.

mod phase;
mod session;

pub use phase::ScanPhase;
pub use session::{Advance, ScanMachine, ScanSession};
