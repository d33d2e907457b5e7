pub mod covers;
pub mod health;
pub mod interests;
pub mod recommendations;

pub use covers::covers_config;
pub use health::{health_check, list_genres};
pub use interests::analyze_interests;
pub use recommendations::recommendations_config;
