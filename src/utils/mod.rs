//! Console and file output helpers

pub mod display;

pub use display::{ColorOutput, Frame, GridFormatter, ProgressIndicator};
