//! World graph types for the Gamemaster narrative engine.
//!
//! A [`World`] is an immutable directed graph of [`Scene`]s joined by
//! labeled [`Choice`] edges. Choices may carry additive [`Effect`]s that the
//! engine applies to session state when the edge is taken. Cycles and
//! dangling targets are legal; the engine is responsible for rendering them
//! safely.

/// Effects attached to choices.
pub mod effect;
/// Error types used throughout the crate.
pub mod error;
/// Scene and choice records.
pub mod scene;
/// The world graph and its authoring format.
pub mod world;

/// Re-export effect types.
pub use effect::{Effect, EffectKind};
/// Re-export error types.
pub use error::{GmError, GmResult};
/// Re-export scene types.
pub use scene::{Choice, Scene};
/// Re-export world types.
pub use world::{World, WorldMeta};
