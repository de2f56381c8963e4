//! Dumps a plugin's rows from Ableton Live's plugin databases into a report
//! on the desktop, so users can send it along with a bug report.
//!
//! The launcher binary opens a Terminal window that runs the collector binary
//! under `sudo`.

pub mod collector;
pub mod launcher;
pub mod logging;
pub mod model;
