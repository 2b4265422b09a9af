pub mod error;
pub mod operations;
pub mod parser;
pub mod types;

pub use error::PatchError;
pub use operations::{apply_diff, run_preflight_checks};
pub use parser::parse_diff;
pub use types::{Edit, Pos};
