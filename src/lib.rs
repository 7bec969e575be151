pub mod components;
pub mod content;
pub mod state;
pub mod util;
