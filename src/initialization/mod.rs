//! Application initialization.
//!
//! The rater itself needs no shared resources; the binary only sets up logging.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
