//! Scope guards and guard chains for reverse-order cleanup.
//!
//! (if you're looking for a guard that hands a protected *value* to its
//! closure, check out [`scopeguard`] instead; this library is about unwinding
//! *sequences* of dependent acquisition steps)
//!
//! # Overview
//!
//! This library features two types: [`Guard`] and [`Chain`].
//!
//! A [`Guard`] binds a single zero-argument release action to the enclosing
//! scope. When the guard is dropped, the action runs, unless the guard was
//! *disarmed* first via [`Guard::disarm`]. The action runs at most once, and
//! a disarmed guard can never be re-armed.
//!
//! A [`Chain`] owns any number of guards and releases them in strict reverse
//! registration order when it is dropped. This makes multi-step resource
//! acquisition safe against partial failure: register an undo action after
//! each successful step, and if a later step fails, everything acquired so
//! far is torn down last-acquired-first, each action exactly once. If every
//! step succeeds, [`Chain::disarm_all`] commits the sequence, and scope exit
//! runs no cleanup at all.
//!
//! Cleanup runs on *any* exit path that drops the guard or chain, whether
//! that is a `?` early return or a panic unwinding through the scope.
//!
//! Neither type is [`Clone`], so every release action has exactly one owner
//! and can never be double-released. Neither type is [`Send`]: this is a
//! single-threaded, scope-bound primitive.
//!
//! # Usage
//!
//! A fallible multi-step acquisition, committed on success:
//!
//! ```
//! use backout::Chain;
//!
//! fn init_device() -> Result<(), &'static str> { Ok(()) }
//! fn close_device() {}
//! fn open_window() -> Result<(), &'static str> { Ok(()) }
//! fn close_window() {}
//!
//! fn start() -> Result<(), &'static str> {
//!     let mut undo = Chain::new();
//!
//!     init_device()?;
//!     undo.add(close_device);
//!
//!     open_window()?;
//!     undo.add(close_window);
//!
//!     // Every step succeeded; keep the resources.
//!     undo.disarm_all();
//!     Ok(())
//! }
//! # start().unwrap();
//! ```
//!
//! Had `open_window` failed, the `?` would have dropped `undo` on the way
//! out, running `close_device` before the error reaches the caller.
//!
//! A single acquisition needs no chain; a standalone [`guard`] does the same
//! job:
//!
//! ```
//! use backout::guard;
//!
//! fn init_device() -> Result<(), &'static str> { Ok(()) }
//! fn close_device() {}
//! fn open_window() -> Result<(), &'static str> { Ok(()) }
//!
//! fn start() -> Result<(), &'static str> {
//!     init_device()?;
//!     let mut close = guard(close_device);
//!
//!     open_window()?;
//!
//!     close.disarm();
//!     Ok(())
//! }
//! # start().unwrap();
//! ```
//!
//! [`scopeguard`]: https://crates.io/crates/scopeguard

mod chain;
mod guard;

pub use crate::chain::{Action, Chain};
pub use crate::guard::{guard, Guard};

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn standalone_guard_matches_chain_of_one() {
        let lone = Cell::new(0);
        let chained = Cell::new(0);
        {
            let _g = guard(|| lone.set(lone.get() + 1));
            let mut chain = Chain::new();
            chain.add(|| chained.set(chained.get() + 1));
        }
        assert_eq!(lone.get(), 1);
        assert_eq!(chained.get(), 1);
    }
}
