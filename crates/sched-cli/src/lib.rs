//! Library components of the schedule browser CLI.

pub mod filters;
pub mod logging;
