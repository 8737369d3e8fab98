//! Landing page content

pub mod services;
pub mod stats;

pub use services::{service_cards, ServiceCard};
pub use stats::{headline_stats, StatCounter, StatKind};
