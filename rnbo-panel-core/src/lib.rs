pub mod config;
pub mod console;
pub mod errors;
pub mod levels;
pub mod logging;
pub mod patch;
pub mod steps;
pub mod tempo;
pub mod transport;
pub mod version;
