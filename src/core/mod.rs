//! Core domain logic for pawnkyc
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`FormData`, `ExtractedData`, `Decision`, `KycRecord`)
//! - `services/` - Decision engine and orchestration
//! - `ports/` - Trait definitions for extraction backends and record storage

pub mod models;
pub mod ports;
pub mod services;
