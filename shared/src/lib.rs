pub mod models;
pub mod utils;

// Data models and small helpers shared by the engine (storage, filtering, scaling)
// and the dashboard (rendering, command line).
