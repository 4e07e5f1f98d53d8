//! Per-state callbacks.

/// Callback invoked with mutable access to the machine context.
pub type Callback<C> = Box<dyn Fn(&mut C) + Send + Sync>;

/// Enter/update/exit callbacks attached to a single state.
///
/// Every callback is optional. Callbacks are side-effect only; the machine
/// never inspects what they do to the context.
pub struct StateDefinition<C> {
    on_enter: Option<Callback<C>>,
    on_update: Option<Callback<C>>,
    on_exit: Option<Callback<C>>,
}

impl<C> StateDefinition<C> {
    /// Creates a definition with no callbacks.
    pub fn new() -> Self {
        Self {
            on_enter: None,
            on_update: None,
            on_exit: None,
        }
    }

    /// Sets the callback run when the state becomes active.
    pub fn on_enter(mut self, callback: impl Fn(&mut C) + Send + Sync + 'static) -> Self {
        self.on_enter = Some(Box::new(callback));
        self
    }

    /// Sets the callback run once per frame while the state is active.
    pub fn on_update(mut self, callback: impl Fn(&mut C) + Send + Sync + 'static) -> Self {
        self.on_update = Some(Box::new(callback));
        self
    }

    /// Sets the callback run when the state stops being active.
    pub fn on_exit(mut self, callback: impl Fn(&mut C) + Send + Sync + 'static) -> Self {
        self.on_exit = Some(Box::new(callback));
        self
    }

    #[inline]
    pub(crate) fn enter(&self, ctx: &mut C) {
        if let Some(callback) = &self.on_enter {
            callback(ctx);
        }
    }

    #[inline]
    pub(crate) fn update(&self, ctx: &mut C) {
        if let Some(callback) = &self.on_update {
            callback(ctx);
        }
    }

    #[inline]
    pub(crate) fn exit(&self, ctx: &mut C) {
        if let Some(callback) = &self.on_exit {
            callback(ctx);
        }
    }
}

impl<C> Default for StateDefinition<C> {
    fn default() -> Self {
        Self::new()
    }
}
