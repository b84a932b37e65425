//! tick-core: the hierarchical state machine behind a Tick story.
//!
//! A Tick story declares its conversation flow as an xstate-style tree of
//! states. Leaf states are actions, group states bundle them, and the `on`
//! map of each state labels transitions with intent (or trigger) names.
//!
//! # Public API
//!
//! - [`State`] -- a node of the tree, with read-only queries usable on any
//!   parsed tree (no integrity required)
//! - [`StateMachine`] -- a checked tree (no duplicate ids, no self-loops,
//!   every group has a valid initial) with navigation
//! - [`StateMachineError`] -- integrity failures

pub mod error;
pub mod machine;
pub mod state;

pub use error::StateMachineError;
pub use machine::StateMachine;
pub use state::State;
