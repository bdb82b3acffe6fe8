pub mod console;
pub mod handlers;
pub mod menu;
pub mod render;
pub mod repl;

pub use repl::{run_app, run_session};
