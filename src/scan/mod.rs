//! Concurrent scanning
//!
//! The engine fans jobs out over a bounded pool of in-flight requests and
//! collects results as they complete; the scanner wires lists, inputs and
//! the engine together for each scan mode.

pub mod engine;
pub mod scanner;

// Re-export commonly used items
pub use engine::{NullObserver, ScanEngine, ScanObserver};
pub use scanner::Scanner;
