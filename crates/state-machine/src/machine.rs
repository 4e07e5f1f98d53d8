//! The state machine itself.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::{StateDefinition, StateMachineError, Transition};

/// Record of a transition that was taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StateChange<S> {
    pub from: S,
    pub to: S,
}

/// Finite state machine with a single active state.
///
/// `S` is the state key (typically a fieldless enum) and `C` the context
/// handed to callbacks and predicates.
///
/// # Frame semantics
///
/// [`update`](Self::update) must be called exactly once per frame:
/// 1. the active state's update callback runs
/// 2. transitions registered for the active state are checked in
///    registration order, and the first one whose predicate holds is taken
///
/// At most one transition fires per call.
pub struct StateMachine<S, C> {
    current: S,
    states: HashMap<S, StateDefinition<C>>,
    transitions: HashMap<S, Vec<Transition<S, C>>>,
}

impl<S, C> StateMachine<S, C>
where
    S: Copy + Eq + Hash + Debug,
{
    /// Creates an empty machine whose active state is `initial`.
    ///
    /// No callback runs until [`start`](Self::start) or the first transition.
    pub fn new(initial: S) -> Self {
        Self {
            current: initial,
            states: HashMap::new(),
            transitions: HashMap::new(),
        }
    }

    /// Currently active state.
    #[inline]
    pub fn current(&self) -> S {
        self.current
    }

    /// Returns true if `state` has a definition.
    pub fn is_registered(&self, state: S) -> bool {
        self.states.contains_key(&state)
    }

    /// Registers callbacks for `state`.
    ///
    /// Registering the same state twice replaces the earlier definition.
    pub fn add_state(&mut self, state: S, definition: StateDefinition<C>) {
        if self.states.insert(state, definition).is_some() {
            tracing::warn!(?state, "state registered twice, replacing definition");
        }
    }

    /// Appends a guarded transition from `from` to `to`.
    ///
    /// Transitions sharing a source are evaluated in the order they were added.
    pub fn add_transition(
        &mut self,
        from: S,
        to: S,
        predicate: impl Fn(&C) -> bool + Send + Sync + 'static,
    ) {
        self.transitions
            .entry(from)
            .or_default()
            .push(Transition::new(to, predicate));
    }

    /// Targets of the transitions leaving `state`, in evaluation order.
    pub fn transitions_from(&self, state: S) -> impl Iterator<Item = S> + '_ {
        self.transitions
            .get(&state)
            .into_iter()
            .flat_map(|edges| edges.iter().map(Transition::to))
    }

    /// Runs the enter callback of the initial state.
    pub fn start(&mut self, ctx: &mut C) -> Result<(), StateMachineError<S>> {
        let definition = self
            .states
            .get(&self.current)
            .ok_or(StateMachineError::UnregisteredState(self.current))?;
        tracing::debug!(state = ?self.current, "state machine started");
        definition.enter(ctx);
        Ok(())
    }

    /// Advances the machine by one frame.
    ///
    /// Returns the transition taken, if any.
    pub fn update(&mut self, ctx: &mut C) -> Result<Option<StateChange<S>>, StateMachineError<S>> {
        if let Some(definition) = self.states.get(&self.current) {
            definition.update(ctx);
        }

        let next = self.transitions.get(&self.current).and_then(|edges| {
            edges
                .iter()
                .find(|edge| edge.is_ready(&*ctx))
                .map(Transition::to)
        });

        match next {
            Some(to) => self.change_state(to, ctx).map(Some),
            None => Ok(None),
        }
    }

    /// Moves to `to`, running the exit callback of the active state and the
    /// enter callback of the new one.
    ///
    /// Fails without touching the active state when `to` is not registered.
    pub fn change_state(
        &mut self,
        to: S,
        ctx: &mut C,
    ) -> Result<StateChange<S>, StateMachineError<S>> {
        if !self.states.contains_key(&to) {
            return Err(StateMachineError::UnregisteredState(to));
        }

        let from = self.current;
        if let Some(definition) = self.states.get(&from) {
            definition.exit(ctx);
        }

        self.current = to;
        tracing::debug!(?from, ?to, "state changed");

        if let Some(definition) = self.states.get(&to) {
            definition.enter(ctx);
        }

        Ok(StateChange { from, to })
    }
}
