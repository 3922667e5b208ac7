pub mod models;
pub mod utils;

// Data models and formatting helpers shared by the engine library and the
// report binary. Nothing here touches the file system or the terminal.
