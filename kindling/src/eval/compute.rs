//! The composite evaluation node and its trampoline.
//!
//! `Compute` is the variant of [`Eval`] produced by `map` and `flat_map`
//! chaining. Together with `Eval::flat_map` it implements the trampoline
//! that guarantees stack safety: evaluation walks the chain with an
//! explicit continuation stack instead of recursing once per step.
//!
//! Chained steps have arbitrary intermediate types, so the trampoline runs
//! over type-erased nodes: values travel as `Box<dyn Any>` and each step is
//! a boxed closure that downcasts internally. Erasure and the final
//! downcast are private to this module; a mismatch is unreachable through
//! the public constructors.

use std::any::Any;
use std::marker::PhantomData;
use std::mem;
use std::ptr;
use std::rc::Rc;

use super::Eval;

type Erased = Box<dyn Any>;

/// A deferred chain: evaluate `start`, then feed its result through `run`
/// to get the next evaluation step.
///
/// Instances only arise from `Eval::flat_map`; both halves are shared so a
/// chain can be cloned and re-evaluated any number of times.
pub struct Compute<A> {
    start: Rc<dyn Fn() -> Node>,
    run: Rc<StepFn>,
    _out: PhantomData<fn() -> A>,
}

impl<A> Clone for Compute<A> {
    fn clone(&self) -> Compute<A> {
        Compute {
            start: Rc::clone(&self.start),
            run: Rc::clone(&self.run),
            _out: PhantomData,
        }
    }
}

impl<A: Clone + 'static> Compute<A> {
    /// Chain `f` onto a leaf evaluation.
    pub(super) fn from_eval<B: Clone + 'static>(
        e: Eval<A>,
        f: impl Fn(A) -> Eval<B> + 'static,
    ) -> Compute<B> {
        Compute {
            start: Rc::new(move || erase(e.clone())),
            run: Rc::new(StepFn::step(f)),
            _out: PhantomData,
        }
    }

    /// Chain `f` onto an existing chain.
    ///
    /// The new node keeps the original `start` and right-associates the
    /// continuations: the old `run` is applied first, then `f`, no matter
    /// how the chain was built up. This restructuring at construction time
    /// is what keeps left-associated chains (repeated `flat_map` on the
    /// running result) evaluating in constant native stack.
    pub(super) fn and_then<B: Clone + 'static>(
        self,
        f: impl Fn(A) -> Eval<B> + 'static,
    ) -> Compute<B> {
        Compute {
            start: self.start,
            run: Rc::new(StepFn::Chain(self.run, Rc::new(StepFn::step(f)))),
            _out: PhantomData,
        }
    }

    /// Run the trampoline to completion and downcast the final value.
    pub(super) fn evaluate(&self) -> A {
        let initial = Node::Compute {
            start: Start::Node(Box::new((self.start)())),
            run: Rc::clone(&self.run),
        };
        *trampoline(initial).downcast::<A>().unwrap()
    }
}

/// A type-erased continuation step.
enum StepFn {
    /// A single user function, downcasting its input internally.
    Apply(Box<dyn Fn(Erased) -> Node>),
    /// Feed the value through the first step, then the second.
    Chain(Rc<StepFn>, Rc<StepFn>),
}

impl StepFn {
    fn step<A: Clone + 'static, B: Clone + 'static>(
        f: impl Fn(A) -> Eval<B> + 'static,
    ) -> StepFn {
        StepFn::Apply(Box::new(move |value: Erased| {
            let a = *value.downcast::<A>().unwrap();
            erase(f(a))
        }))
    }

    /// An inert step, used to hollow out chain nodes during drop.
    fn noop() -> StepFn {
        StepFn::Apply(Box::new(Node::Done))
    }

    /// Replaces a chain with an inert step and returns its halves.
    fn unlink(&mut self) -> Option<(Rc<StepFn>, Rc<StepFn>)> {
        if !matches!(self, StepFn::Chain(..)) {
            return None;
        }
        // `self` is a Chain; swap in an inert step and pull the two halves
        // out of the old value. `ManuallyDrop` keeps the old shell's
        // destructor from re-dropping the halves we are about to return,
        // so they can be moved out by hand (StepFn impls Drop, which
        // otherwise forbids the partial move).
        let mut old = mem::ManuallyDrop::new(mem::replace(self, StepFn::noop()));
        match &mut *old {
            // SAFETY: `old` is wrapped in `ManuallyDrop` and never read or
            // dropped again, so moving each field out by value is sound.
            StepFn::Chain(first, second) => {
                Some((unsafe { ptr::read(first) }, unsafe { ptr::read(second) }))
            }
            StepFn::Apply(_) => unreachable!("matches! above guarantees Chain"),
        }
    }
}

/// Long chains are deeply nested pairs; letting the compiler-generated
/// drop walk them recurses once per link, which is exactly the stack
/// growth the trampoline avoids during evaluation. Unlink iteratively
/// instead.
impl Drop for StepFn {
    fn drop(&mut self) {
        let mut stack = match self.unlink() {
            Some((first, second)) => vec![first, second],
            None => return,
        };
        while let Some(step) = stack.pop() {
            if let Ok(mut owned) = Rc::try_unwrap(step) {
                if let Some((first, second)) = owned.unlink() {
                    stack.push(first);
                    stack.push(second);
                }
            }
        }
    }
}

/// A node in one evaluation pass. Rebuilt from the shared chain on every
/// pass, so forcing a chain twice re-runs it.
enum Node {
    /// an already-forced value
    Done(Erased),
    /// a leaf whose value can be produced directly
    Thunk(Box<dyn FnOnce() -> Erased>),
    /// a composite: pending start plus its continuation
    Compute { start: Start, run: Rc<StepFn> },
}

/// The unexamined start of a composite node.
enum Start {
    /// an evaluation node
    Node(Box<Node>),
    /// a continuation applied to a forced value, not yet run
    Pending(Rc<StepFn>, Erased),
}

fn erase<A: Clone + 'static>(e: Eval<A>) -> Node {
    match e {
        Eval::Now(a) => Node::Done(Box::new(a)),
        Eval::Later(l) => Node::Thunk(Box::new(move || Box::new(l.force()) as Erased)),
        Eval::Always(a) => Node::Thunk(Box::new(move || Box::new((a.thunk)()) as Erased)),
        Eval::Compute(c) => Node::Compute {
            start: Start::Node(Box::new((c.start)())),
            run: c.run,
        },
    }
}

/// Force a leaf node.
fn force(leaf: Node) -> Erased {
    match leaf {
        Node::Done(value) => value,
        Node::Thunk(thunk) => thunk(),
        Node::Compute { .. } => unreachable!("force called on a compute node"),
    }
}

/// Apply a continuation step to a forced value.
///
/// Applying a chain does no work yet: it produces a composite node whose
/// start is the still-pending inner application, so nested chains are
/// unwound by the trampoline loop rather than by recursion here.
fn apply(step: &Rc<StepFn>, value: Erased) -> Node {
    match &**step {
        StepFn::Apply(f) => f(value),
        StepFn::Chain(first, second) => Node::Compute {
            start: Start::Pending(Rc::clone(first), value),
            run: Rc::clone(second),
        },
    }
}

/// The evaluation loop.
///
/// Walks down the left spine of nested composites, pushing their
/// continuations onto an explicit stack (most recently deferred first),
/// then unwinds by applying popped continuations to forced leaf values.
/// Native stack usage is constant regardless of chain length.
fn trampoline(initial: Node) -> Erased {
    let mut pending: Vec<Rc<StepFn>> = Vec::new();
    let mut curr = initial;

    loop {
        match curr {
            Node::Compute { start, run } => {
                let cstart = match start {
                    Start::Node(node) => *node,
                    Start::Pending(step, value) => apply(&step, value),
                };
                if let Node::Compute { .. } = cstart {
                    pending.push(run);
                    curr = cstart;
                } else {
                    curr = apply(&run, force(cstart));
                }
            }
            leaf => {
                let value = force(leaf);
                match pending.pop() {
                    Some(step) => curr = apply(&step, value),
                    None => return value,
                }
            }
        }
    }
}
