pub mod applier;
pub mod file_operations;
pub mod preflight_checks;

pub use applier::apply_diff;
pub use preflight_checks::run_preflight_checks;
