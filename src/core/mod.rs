pub mod engine;    // Async event loop
pub mod game;
pub mod logging;
pub mod menu;      // Game picker
pub mod renderer;  // Auto-injection traits
pub mod terminal;  // Console prompt helper
