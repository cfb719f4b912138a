//! Command implementations

mod evaluate;
mod parse_mrz;
mod quote;
mod request_review;
mod review;
mod service;
mod show_config;
mod status;
mod verify;

pub use evaluate::evaluate;
pub use parse_mrz::parse_mrz;
pub use quote::quote;
pub use request_review::request_review;
pub use review::review;
pub use show_config::show_config;
pub use status::status;
pub use verify::verify;
