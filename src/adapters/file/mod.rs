//! File-based KYC record storage
//!
//! - [`store`] - `KycStore` implementation over JSON files

pub mod store;

pub use store::JsonFileKycStore;
