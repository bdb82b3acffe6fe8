pub mod session;
pub mod settings;

pub use session::SessionState;
pub use settings::Settings;
