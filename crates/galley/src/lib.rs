//! Render Dockerfiles for Steam-distributed dedicated game servers.
//!
//! This is the unified facade crate that re-exports the galley sub-crates.
//! Use feature flags to control which components are included.
//!
//! # Feature flags
//!
//! | Feature | Default | Crate | Description |
//! |---------|---------|-------|-------------|
//! | `core` | yes | [`galley-core`](https://crates.io/crates/galley-core) | Steamapp descriptor and shared types |
//! | `build` | yes | [`galley-build`](https://crates.io/crates/galley-build) | Dockerfile rendering |
//!
//! # Quick start
//!
//! ```toml
//! [dependencies]
//! galley = "0.2"
//! ```
//!
//! ```rust
//! use galley::Steamapp;
//! use galley::build::DockerfileGenerator;
//!
//! # fn main() -> Result<(), galley::Error> {
//! let steamapp = Steamapp::new(896660);
//! let dockerfile = DockerfileGenerator::new(&steamapp).render()?;
//! assert!(dockerfile.starts_with("FROM steamcmd/steamcmd AS steamcmd"));
//! # Ok(())
//! # }
//! ```

// Core types flattened into the root namespace for convenience.
#[cfg(feature = "core")]
pub use galley_core::*;

/// Dockerfile rendering.
///
/// See [`galley-build`](https://crates.io/crates/galley-build) for details.
#[cfg(feature = "build")]
pub mod build {
    pub use galley_build::*;
}
