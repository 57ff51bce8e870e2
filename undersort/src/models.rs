// src/models.rs
mod method_type;
mod run_outcome;
mod visibility;

pub use method_type::MethodType;
pub use run_outcome::RunOutcome;
pub use visibility::Visibility;
