//! Scene collaborator module
//!
//! The contract assets spawn through, and an in-memory implementation.

mod scene;
mod spawner;

pub use scene::{Scene, SceneObject};
pub use spawner::{ObjectKey, Placement, PrefabKind, SceneSpawner};
