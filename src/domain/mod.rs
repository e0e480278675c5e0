//! Domain layer: entities and recommendation logic
//!
//! This layer is independent of external concerns (no I/O, no CLI).

pub mod entities;
pub mod profiles;
pub mod recommend;

pub use entities::{AudienceKind, AudienceProfile, Recommendation};
pub use profiles::{builtin_profile, default_profiles};
pub use recommend::build_recommendations;
