//! A monad which controls evaluation.
//!
//! [`Eval`] wraps a value, or a computation that produces a value, and
//! produces it on demand via [`Eval::value`]. There are three basic
//! construction strategies:
//!
//! - [`Eval::now`]: evaluated immediately
//! - [`Eval::later`]: evaluated once, when the value is first needed
//! - [`Eval::always`]: evaluated every time the value is needed
//!
//! `later` and `always` are both lazy, distinguished only by memoization:
//! once evaluated, `later` caches its result, while `always` re-runs its
//! thunk on every access.
//!
//! Computation chained through [`Eval::map`] and [`Eval::flat_map`] is
//! always deferred, even over an already-computed `now`, and evaluates
//! through an internal trampoline so arbitrarily long chains cannot
//! overflow the call stack. It is bad style for a thunk to call `value` on
//! another `Eval` directly: that bypasses the trampoline and reintroduces
//! the stack growth it exists to prevent.
//!
//! Everything here is single threaded. Sharing is via `Rc`, caching via
//! `RefCell`, and concurrent access to the same evaluation from multiple
//! threads is not supported.

mod compute;

pub use compute::Compute;

use std::cell::RefCell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::functor::{CovariantFunctor, InvariantFunctor, PartiallyApplied};
use crate::option;

/// A value of type `A`, or a recipe for producing one.
///
/// Variants can be matched but only constructed through the factory
/// functions; `Compute` in particular only ever arises from
/// [`Eval::flat_map`].
pub enum Eval<A> {
    Now(A),
    Later(Later<A>),
    Always(Always<A>),
    Compute(Compute<A>),
}

impl<A: Clone + 'static> Eval<A> {
    /// An evaluation that holds an already-computed value.
    pub fn now(a: A) -> Eval<A> {
        Eval::Now(a)
    }

    /// Runs `f` immediately and holds its result; strict construction from
    /// a supplier.
    pub fn now_with(f: impl FnOnce() -> A) -> Eval<A> {
        Eval::now(f())
    }

    /// An evaluation that runs `f` on first access and caches the result.
    ///
    /// Once evaluated, the thunk reference is discarded, so anything it
    /// captured becomes reclaimable.
    pub fn later(f: impl Fn() -> A + 'static) -> Eval<A> {
        Eval::Later(Later::new(Rc::new(f)))
    }

    /// An evaluation that runs `f` on every access, caching nothing.
    pub fn always(f: impl Fn() -> A + 'static) -> Eval<A> {
        Eval::Always(Always { thunk: Rc::new(f) })
    }

    /// Force the computation and return its result.
    ///
    /// Lazy instances run any pending work at this point; `now` returns
    /// immediately. Panics raised by user thunks or mapped functions
    /// propagate unmodified.
    pub fn value(&self) -> A {
        match self {
            Eval::Now(a) => a.clone(),
            Eval::Later(l) => l.force(),
            Eval::Always(a) => (a.thunk)(),
            Eval::Compute(c) => c.evaluate(),
        }
    }

    /// Transform the result with `f`, lazily.
    ///
    /// `f` never runs at call time, even when `self` is an
    /// already-computed `now`; it runs when `value` is called on the
    /// result. The chain this builds is stack safe.
    pub fn map<B: Clone + 'static>(self, f: impl Fn(A) -> B + 'static) -> Eval<B> {
        self.flat_map(move |a| Eval::now(f(a)))
    }

    /// Chain a dependent evaluation, lazily.
    ///
    /// Stack safe for arbitrarily long chains, including the
    /// left-associated shape produced by repeatedly calling `flat_map` on
    /// the running result in a loop: composition is restructured at
    /// construction time so evaluation never nests.
    pub fn flat_map<B: Clone + 'static>(self, f: impl Fn(A) -> Eval<B> + 'static) -> Eval<B> {
        match self {
            Eval::Compute(c) => Eval::Compute(c.and_then(f)),
            other => Eval::Compute(Compute::from_eval(other, f)),
        }
    }

    /// An evaluation with the same result whose as-yet-unexecuted
    /// computation is guaranteed to run at most once.
    ///
    /// `now` and `later` are returned as-is; `always` becomes a `later`
    /// over the same thunk; a chain becomes a `later` that runs the chain
    /// once and caches the outcome.
    pub fn memoize(&self) -> Eval<A> {
        match self {
            Eval::Now(_) | Eval::Later(_) => self.clone(),
            Eval::Always(a) => Eval::Later(Later::new(Rc::clone(&a.thunk))),
            Eval::Compute(c) => {
                let c = c.clone();
                Eval::Later(Later::new(Rc::new(move || c.evaluate())))
            }
        }
    }
}

impl<A> Clone for Eval<A>
where
    A: Clone,
{
    fn clone(&self) -> Eval<A> {
        match self {
            Eval::Now(a) => Eval::Now(a.clone()),
            Eval::Later(l) => Eval::Later(l.clone()),
            Eval::Always(a) => Eval::Always(a.clone()),
            Eval::Compute(c) => Eval::Compute(c.clone()),
        }
    }
}

/// Two evaluations are equal when their forced values are equal; comparing
/// forces both sides.
impl<A: Clone + PartialEq + 'static> PartialEq for Eval<A> {
    fn eq(&self, other: &Eval<A>) -> bool {
        self.value() == other.value()
    }
}

impl<A: Clone + Eq + 'static> Eq for Eval<A> {}

/// Hashes the forced value; hashing forces the evaluation.
impl<A: Clone + Hash + 'static> Hash for Eval<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value().hash(state);
    }
}

/// Shows the strategy, and the value only where one is already available.
/// Formatting never forces evaluation.
impl<A: fmt::Debug> fmt::Debug for Eval<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Eval::Now(a) => f.debug_tuple("Now").field(a).finish(),
            Eval::Later(l) => {
                let cache = l.inner.cache.borrow();
                if cache.is_defined() {
                    f.debug_tuple("Later").field(cache.get()).finish()
                } else {
                    f.write_str("Later(<thunk>)")
                }
            }
            Eval::Always(_) => f.write_str("Always(<thunk>)"),
            Eval::Compute(_) => f.write_str("Compute(..)"),
        }
    }
}

/// The lazy, memoizing strategy behind [`Eval::later`].
pub struct Later<A> {
    inner: Rc<LaterInner<A>>,
}

struct LaterInner<A> {
    thunk: RefCell<option::Option<Rc<dyn Fn() -> A>>>,
    cache: RefCell<option::Option<A>>,
}

impl<A> Clone for Later<A> {
    fn clone(&self) -> Later<A> {
        Later {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<A: Clone> Later<A> {
    fn new(thunk: Rc<dyn Fn() -> A>) -> Later<A> {
        Later {
            inner: Rc::new(LaterInner {
                thunk: RefCell::new(option::Option::Some(thunk)),
                cache: RefCell::new(option::Option::None),
            }),
        }
    }

    /// Runs the thunk on first call and drops it; afterwards reads the
    /// cache. Clones observe the same single execution.
    fn force(&self) -> A {
        if !self.inner.cache.borrow().is_defined() {
            let thunk = self.inner.thunk.borrow_mut().take();
            if let option::Option::Some(thunk) = thunk {
                let value = thunk();
                *self.inner.cache.borrow_mut() = option::Option::Some(value);
            }
        }
        self.inner.cache.borrow().get().clone()
    }
}

/// The lazy, non-memoizing strategy behind [`Eval::always`].
pub struct Always<A> {
    thunk: Rc<dyn Fn() -> A>,
}

impl<A> Clone for Always<A> {
    fn clone(&self) -> Always<A> {
        Always {
            thunk: Rc::clone(&self.thunk),
        }
    }
}

impl InvariantFunctor for Eval<PartiallyApplied> {
    type Of<A: Clone + 'static> = Eval<A>;

    fn imap<A: Clone + 'static, B: Clone + 'static>(
        fa: Eval<A>,
        f: impl Fn(A) -> B + 'static,
        _g: impl Fn(B) -> A + 'static,
    ) -> Eval<B> {
        <Self as CovariantFunctor>::map(fa, f)
    }
}

impl CovariantFunctor for Eval<PartiallyApplied> {
    fn map<A: Clone + 'static, B: Clone + 'static>(
        fa: Eval<A>,
        f: impl Fn(A) -> B + 'static,
    ) -> Eval<B> {
        fa.map(f)
    }
}
