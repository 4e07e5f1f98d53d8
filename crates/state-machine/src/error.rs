//! Errors raised by the state machine.

use core::fmt::Debug;

/// Errors surfaced while driving a [`StateMachine`](crate::StateMachine).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StateMachineError<S: Debug> {
    /// The requested state has no registered definition.
    ///
    /// Raised before the active state is touched, so the machine stays where
    /// it was.
    #[error("state {0:?} is not registered")]
    UnregisteredState(S),
}
