//! Business logic services (use cases).
//!
//! Services depend on traits (ports) -- never on concrete infrastructure
//! implementations.

pub mod appraisal;
pub mod score;
