//! Frame-driven finite state machine with guarded transitions.
//!
//! The machine holds exactly one active state. Every frame the caller invokes
//! [`StateMachine::update`], which runs the active state's update callback and
//! then evaluates the outgoing transitions of that state in registration order.
//! The first transition whose predicate holds is taken; the rest are skipped.
//!
//! - **Context-passing**: callbacks and predicates receive the caller's context
//!   instead of capturing shared mutable state
//! - **No history**: transitions are one-directional, there is no back-stack
//! - **Strict targets**: moving to a state without a definition is rejected
//!
//! # Architecture
//!
//! - [`StateDefinition`]: optional enter/update/exit callbacks for one state
//! - [`Transition`]: target state plus guard predicate
//! - [`StateMachine`]: the registry and the single active state

pub mod definition;
pub mod error;
pub mod machine;
pub mod transition;

pub use definition::StateDefinition;
pub use error::StateMachineError;
pub use machine::{StateChange, StateMachine};
pub use transition::Transition;
