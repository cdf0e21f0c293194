//! Decorative 2-D particle field: drifting points, proximity links and a
//! colour pulse, rendered onto any immediate-mode surface.
//!
//! Main components:
//! - [`field`] — the particle set and its frame/render operations.
//! - [`phases`] — per-frame motion, pulse, recolour and link passes.
//! - [`animator`] — host-driven mount/tick/unmount loop.
//! - [`surface`] — drawing interface and a recording implementation.
//! - [`config`] — tunables, loadable from TOML.
//! - [`color`] — colours and palettes.
//! - [`error`] — configuration errors.
//! - [`particle`] — a single particle.
//! - [`types`] — shared ids and sizes.

pub mod animator;
pub mod color;
pub mod config;
pub mod error;
pub mod field;
pub mod particle;
pub mod phases;
pub mod surface;
pub mod types;
