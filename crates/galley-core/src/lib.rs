//! Core types for galley.
//!
//! This crate defines the steamapp descriptor ([`Steamapp`]) consumed by the
//! renderer in `galley-build`, descriptor-file loading, and shared error types.

pub mod error;
pub mod steamapp;

pub use error::{Error, Result};
pub use steamapp::{BRANCH_PUBLIC, PlatformType, Steamapp};
