//! Application initialization.
//!
//! Logger setup for the CLI binary; the library itself only uses the `log`
//! facade and leaves the choice of backend to its caller.

mod logger;

pub use logger::init_logger_with;
