//! Rendering task catalogue and renderer argument construction.
//!
//! Each [`TaskKind`] is one fixed renderer configuration; a [`TaskSelection`] decides which of
//! them take part in a run.

/// Task kinds, their fixed renderer flags and the enable map.
pub mod catalogue;
/// Renderer argument lists for a task at a given frame.
pub mod command;
