//! Dockerfile rendering for steamapps.
//!
//! # Render pipeline
//!
//! ```text
//! galley render steamapp.toml
//!   1. Load      ── Steamapp::load()
//!   2. Validate  ── beta branch requires a beta password
//!   3. Render    ── DockerfileGenerator::render()
//! ```
//!
//! # Output shape
//!
//! Two build stages. The first, aliased `steamcmd`, fetches the app into
//! `/mnt` with an anonymous steamcmd login. The second starts from the
//! descriptor's base image, optionally installs apt packages and runs setup
//! commands, copies `/mnt` into the `steam` user's home, and drops
//! privileges before ENTRYPOINT/CMD.
//!
//! The renderer is a pure function of the descriptor: no I/O, and the same
//! descriptor always renders byte-identical output.

pub mod dockerfile;

pub use dockerfile::{DockerfileGenerator, render};
