//! A scope guard that binds one release action to the enclosing scope.

/// A guard that runs a release action when dropped, unless disarmed.
///
/// Created with the freestanding [`guard`] function. The action runs *at most
/// once*: either when the guard is dropped while still armed, or never, if
/// [`Guard::disarm`] was called first. A guard cannot be re-armed.
///
/// [`Guard`] is deliberately neither [`Clone`] nor [`Copy`]: duplicating it
/// would duplicate the release action for a single underlying resource.
/// Moving the guard (for example into a [`Chain`][crate::Chain] via
/// [`Chain::adopt`][crate::Chain::adopt]) is the only way to relocate it, and
/// the previous owner can no longer trigger the release afterwards.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
/// use backout::guard;
///
/// let closed = Cell::new(false);
/// {
///     let _close = guard(|| closed.set(true));
/// }
/// assert!(closed.get());
/// ```
///
/// Disarming cancels the release:
///
/// ```
/// use std::cell::Cell;
/// use backout::guard;
///
/// let closed = Cell::new(false);
/// {
///     let mut close = guard(|| closed.set(true));
///     close.disarm();
/// }
/// assert!(!closed.get());
/// ```
#[must_use = "`Guard` should be assigned to a variable, or it will be dropped (and run its action) immediately"]
pub struct Guard<F: FnOnce()> {
    action: Option<F>,
    armed: bool,
}

impl<F: FnOnce()> Guard<F> {
    pub(crate) fn new(action: F) -> Self {
        Self {
            action: Some(action),
            armed: true,
        }
    }

    /// Disarms the guard, so that dropping it will *not* run the release
    /// action.
    ///
    /// Disarming is idempotent and irreversible. It only clears the armed
    /// flag; the action itself is kept (and eventually dropped, unrun) until
    /// the guard goes out of scope.
    pub fn disarm(&mut self) {
        self.armed = false;
    }

    /// Returns whether dropping this guard would run its release action.
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Dismantles the guard without running its action.
    pub(crate) fn into_parts(mut self) -> (Option<F>, bool) {
        // With the action taken out, the `Drop` impl has nothing to run.
        (self.action.take(), self.armed)
    }
}

impl<F: FnOnce()> Drop for Guard<F> {
    fn drop(&mut self) {
        if self.armed {
            if let Some(action) = self.action.take() {
                action();
            }
        }
    }
}

/// Returns a [`Guard`] that runs `action` when dropped.
pub fn guard<F: FnOnce()>(action: F) -> Guard<F> {
    Guard::new(action)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn fires_exactly_once_on_drop() {
        let fired = Cell::new(0);
        let g = guard(|| fired.set(fired.get() + 1));
        assert_eq!(fired.get(), 0);
        drop(g);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn disarm_prevents_firing() {
        let fired = Cell::new(0);
        let mut g = guard(|| fired.set(fired.get() + 1));
        g.disarm();
        drop(g);
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn disarm_is_idempotent() {
        let fired = Cell::new(0);
        let mut g = guard(|| fired.set(fired.get() + 1));
        g.disarm();
        g.disarm();
        assert!(!g.is_armed());
        drop(g);
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn disarm_does_not_drop_the_action_early() {
        struct Tracked<'a>(&'a Cell<bool>);
        impl Drop for Tracked<'_> {
            fn drop(&mut self) {
                self.0.set(true);
            }
        }

        let dropped = Cell::new(false);
        let tracked = Tracked(&dropped);
        let mut g = guard(move || drop(tracked));
        g.disarm();
        assert!(!dropped.get());
        drop(g);
        assert!(dropped.get());
    }

    #[test]
    fn fires_during_panic_unwind() {
        let fired = Cell::new(false);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _g = guard(|| fired.set(true));
            panic!("acquisition failed");
        }));
        assert!(result.is_err());
        assert!(fired.get());
    }
}
