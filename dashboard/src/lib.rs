// Dashboard library: chart rendering, the latest-entry panel, configuration and
// selection state. The `fittrack` binary in main.rs is a thin command line over it.

pub mod components;
pub mod config;
pub mod state;
pub mod surface;
