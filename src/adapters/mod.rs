//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `extractor/` - Extraction backends (mock, MRZ text)
//! - `file/` - JSON file KYC record storage

pub mod extractor;
pub mod file;
