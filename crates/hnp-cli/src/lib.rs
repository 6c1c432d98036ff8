//! Library components of the HNP atlas CLI.

pub mod logging;
pub mod pipeline;
