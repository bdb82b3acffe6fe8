//! Filesystem operations behind the explorer menu.
//!
//! Each submodule wraps one platform primitive and returns
//! `Result<_, FsOpError>`; none of them print.

pub mod copy;
pub mod create;
pub mod error;
pub mod list;
pub mod mv;
pub mod path;
pub mod permissions;
pub mod remove;
pub mod search;
pub mod stat;

pub use copy::copy_file;
pub use create::write_file;
pub use error::{ErrorKind, FsOpError};
pub use list::{list_dir, DirEntry, EntryKind};
pub use mv::rename_path;
pub use path::{resolve_path, PathError};
pub use permissions::{change_permissions, inspect_permissions, parse_octal_mode, PermissionInfo};
pub use remove::remove_entry;
pub use search::{find_by_name, SearchSummary};
