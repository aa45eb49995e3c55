//! Spawn planning module
//!
//! Authored placement rules and the planner that turns them into world
//! transforms (singleton or grid placement).

mod planner;
mod spawn_rule;

pub use planner::{execute_rule, grid_offsets, plan_spawn, GRID_SPACING};
pub use spawn_rule::SpawnRule;
