//! Laws that every functor instance must obey.
//!
//! Each law is a predicate so callers can drive it from property tests with
//! whatever generators suit the instance under test. Equality is the
//! container's own `PartialEq`; for `Eval` that comparison forces both sides.

use std::rc::Rc;

use crate::functor::{CovariantFunctor, InvariantFunctor};

/// Mapping the identity function returns an equal container.
pub fn covariant_identity<F, A>(fa: F::Of<A>) -> bool
where
    F: CovariantFunctor,
    A: Clone + 'static,
    F::Of<A>: PartialEq,
{
    F::map(fa.clone(), |a| a) == fa
}

/// Mapping `f` then `g` is the same as mapping their composition.
pub fn covariant_composition<F, A, B, C>(
    fa: F::Of<A>,
    f: impl Fn(A) -> B + 'static,
    g: impl Fn(B) -> C + 'static,
) -> bool
where
    F: CovariantFunctor,
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
    F::Of<C>: PartialEq,
{
    let f = Rc::new(f);
    let g = Rc::new(g);

    let lhs = {
        let (f, g) = (Rc::clone(&f), Rc::clone(&g));
        F::map(F::map(fa.clone(), move |a| f(a)), move |b| g(b))
    };
    let rhs = F::map(fa, move |a| g(f(a)));

    lhs == rhs
}

/// Invariantly mapping the identity pair returns an equal container.
pub fn invariant_identity<F, A>(fa: F::Of<A>) -> bool
where
    F: InvariantFunctor,
    A: Clone + 'static,
    F::Of<A>: PartialEq,
{
    F::imap(fa.clone(), |a| a, |a| a) == fa
}

/// Invariantly mapping one function pair after another is the same as
/// invariantly mapping the composed pair.
pub fn invariant_composition<F, A, B, C>(
    fa: F::Of<A>,
    f1: impl Fn(A) -> B + 'static,
    f2: impl Fn(B) -> A + 'static,
    g1: impl Fn(B) -> C + 'static,
    g2: impl Fn(C) -> B + 'static,
) -> bool
where
    F: InvariantFunctor,
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
    F::Of<C>: PartialEq,
{
    let f1 = Rc::new(f1);
    let f2 = Rc::new(f2);
    let g1 = Rc::new(g1);
    let g2 = Rc::new(g2);

    let lhs = {
        let (f1, f2, g1, g2) = (
            Rc::clone(&f1),
            Rc::clone(&f2),
            Rc::clone(&g1),
            Rc::clone(&g2),
        );
        F::imap(
            F::imap(fa.clone(), move |a| f1(a), move |b| f2(b)),
            move |b| g1(b),
            move |c| g2(c),
        )
    };
    let rhs = F::imap(fa, move |a| g1(f1(a)), move |c| f2(g2(c)));

    lhs == rhs
}
