//! Guarded transitions between states.

/// Guard evaluated against a read-only view of the machine context.
pub type Predicate<C> = Box<dyn Fn(&C) -> bool + Send + Sync>;

/// An outgoing edge of a state.
///
/// The source state is the key under which the transition is stored in the
/// machine, so only the target and the guard live here.
pub struct Transition<S, C> {
    to: S,
    predicate: Predicate<C>,
}

impl<S: Copy, C> Transition<S, C> {
    /// Creates a transition to `to` guarded by `predicate`.
    pub fn new(to: S, predicate: impl Fn(&C) -> bool + Send + Sync + 'static) -> Self {
        Self {
            to,
            predicate: Box::new(predicate),
        }
    }

    /// Target state of this transition.
    #[inline]
    pub fn to(&self) -> S {
        self.to
    }

    /// Evaluates the guard.
    #[inline]
    pub fn is_ready(&self, ctx: &C) -> bool {
        (self.predicate)(ctx)
    }
}
