// Infrastructure layer (shared components)
pub mod config;
pub mod error;
pub mod telemetry;

// Domain layer (business logic)
pub mod domain;

// Re-export the template module at the crate root
pub use domain::template;
