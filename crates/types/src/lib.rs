pub mod config;
pub mod ids;
pub mod viewport;

pub use config::{CodeBlockConfig, NavConfig};
pub use ids::SectionId;
pub use viewport::{NavState, NavVisibility, WidthClass};
