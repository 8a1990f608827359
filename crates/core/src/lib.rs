//! GoMarketplace Core - Shared types library.
//!
//! This crate provides common types used across all GoMarketplace
//! components:
//! - `cart` - In-memory shopping cart with local persistence
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no async, no storage
//! access. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe product IDs and prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
