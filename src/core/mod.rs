pub mod error;
pub mod path;
pub mod process;

pub use error::{HashgenError, Result};
pub use path::{executable_dir, is_contained, resolve_root};
pub use process::{ChildEnv, ProcessExecutor};
