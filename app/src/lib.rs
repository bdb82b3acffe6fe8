pub mod app;
pub mod fs_op;
pub mod logging;
pub mod runner;

pub use crate::app::{SessionState, Settings};
pub use crate::fs_op::{ErrorKind, FsOpError};
