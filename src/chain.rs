//! An ordered chain of guards, released in reverse registration order.

use crate::guard::Guard;

/// The type-erased release action stored by a [`Chain`].
pub type Action<'scope> = Box<dyn FnOnce() + 'scope>;

/// An ordered owner of release guards, unwound in reverse registration order.
///
/// A [`Chain`] accompanies a fallible multi-step acquisition: after each
/// successful step, [`Chain::add`] registers an action that undoes that step.
/// If a later step fails and control leaves the scope, dropping the chain
/// runs every still-armed action strictly last-registered-first, mirroring
/// how nested resources depend on each other. If every step succeeds,
/// [`Chain::disarm_all`] commits the sequence and the drop does nothing.
///
/// Like [`Guard`], a [`Chain`] is neither [`Clone`] nor [`Copy`], so there is
/// always exactly one owner of each registered action. Actions may borrow
/// from the enclosing scope; the `'scope` lifetime ties the chain to those
/// borrows. A chain is not [`Send`]: guards and chains are scope-bound,
/// single-threaded constructs.
///
/// # Examples
///
/// ```
/// use std::cell::RefCell;
/// use backout::Chain;
///
/// let order = RefCell::new(Vec::new());
/// {
///     let mut chain = Chain::new();
///     chain.add(|| order.borrow_mut().push("close A"));
///     chain.add(|| order.borrow_mut().push("close B"));
///     // neither step committed; dropping the chain unwinds B before A
/// }
/// assert_eq!(*order.borrow(), ["close B", "close A"]);
/// ```
#[must_use = "`Chain` should be assigned to a variable, or it will be dropped (and unwound) immediately"]
#[derive(Default)]
pub struct Chain<'scope> {
    guards: Vec<Guard<Action<'scope>>>,
}

impl<'scope> Chain<'scope> {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self { guards: Vec::new() }
    }

    /// Registers `action` to run when the chain unwinds.
    ///
    /// The action is appended to the end of the chain and will run *before*
    /// every previously registered action. The returned reference can be used
    /// to [`disarm`][Guard::disarm] this one guard individually without
    /// affecting the rest of the chain; callers that only ever commit via
    /// [`Chain::disarm_all`] can ignore it.
    pub fn add<F>(&mut self, action: F) -> &mut Guard<Action<'scope>>
    where
        F: FnOnce() + 'scope,
    {
        self.guards.push(Guard::new(Box::new(action)));
        self.guards.last_mut().unwrap()
    }

    /// Transfers a pre-built [`Guard`] into the chain.
    ///
    /// The guard keeps its armed state: adopting an already-disarmed guard
    /// registers a slot that will not run anything. After the transfer the
    /// chain is the guard's only owner.
    pub fn adopt<F: FnOnce() + 'scope>(&mut self, guard: Guard<F>) {
        let (action, armed) = guard.into_parts();
        if let Some(action) = action {
            let slot = self.add(action);
            if !armed {
                slot.disarm();
            }
        }
    }

    /// Disarms every guard in the chain, committing the guarded sequence.
    ///
    /// Call this once all steps have succeeded; the chain's drop then runs no
    /// release actions. Idempotent. Guards added afterwards start armed as
    /// usual.
    pub fn disarm_all(&mut self) {
        log::trace!("committing chain of {} guard(s)", self.guards.len());
        for guard in &mut self.guards {
            guard.disarm();
        }
    }

    /// Returns the number of guards registered in the chain, armed or not.
    pub fn len(&self) -> usize {
        self.guards.len()
    }

    /// Returns whether the chain holds no guards.
    pub fn is_empty(&self) -> bool {
        self.guards.is_empty()
    }
}

impl Drop for Chain<'_> {
    fn drop(&mut self) {
        let armed = self.guards.iter().filter(|g| g.is_armed()).count();
        if armed != 0 {
            log::trace!("unwinding chain: {armed} of {} guard(s) armed", self.guards.len());
        }
        // `Vec` drops front to back; unwinding requires the reverse.
        while let Some(guard) = self.guards.pop() {
            drop(guard);
        }
    }
}
