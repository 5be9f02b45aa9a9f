//! Functor typeclasses for partially applied types.
//!
//! Rust does not allow implementing a trait for a partially applied type:
//! we can implement a trait for `Option<usize>` but not for just `Option`.
//! Instances are therefore written on a marker instantiation of the
//! container, conventionally `Container<PartiallyApplied>`, with the real
//! container recovered through the [`InvariantFunctor::Of`] associated type.

use std::marker::PhantomData;
use std::rc::Rc;

use crate::tuple::Tuple2;

/// An uninhabited type used to implement functor traits for partially
/// applied types.
///
/// For example: the functor instance for `MyBox<A>` cannot be written over
/// the partially applied type `MyBox`, so instead we write it over
/// `MyBox<PartiallyApplied>`.
#[derive(Clone, Debug)]
pub enum PartiallyApplied {}

/// A functor that maps over an isomorphism: a covariant function `f`
/// together with its contravariant counterpart `g`.
///
/// Must obey the laws in [`crate::laws`].
pub trait InvariantFunctor {
    /// the container type this instance maps over
    type Of<A: Clone + 'static>: Clone + 'static;

    fn imap<A: Clone + 'static, B: Clone + 'static>(
        fa: Self::Of<A>,
        f: impl Fn(A) -> B + 'static,
        g: impl Fn(B) -> A + 'static,
    ) -> Self::Of<B>;
}

/// A covariant functor, usually just called a functor.
///
/// Must obey the laws in [`crate::laws`].
pub trait CovariantFunctor: InvariantFunctor {
    /// Apply `f` to each value in the container.
    fn map<A: Clone + 'static, B: Clone + 'static>(
        fa: Self::Of<A>,
        f: impl Fn(A) -> B + 'static,
    ) -> Self::Of<B>;

    /// Lift a function on values to a function on containers.
    fn lift<A: Clone + 'static, B: Clone + 'static>(
        f: impl Fn(A) -> B + 'static,
    ) -> impl Fn(Self::Of<A>) -> Self::Of<B> {
        let f = Rc::new(f);
        move |fa| {
            let f = Rc::clone(&f);
            Self::map(fa, move |a| f(a))
        }
    }

    /// Pair each value with the result of applying `f` to it.
    fn fproduct<A: Clone + 'static, B: Clone + 'static>(
        fa: Self::Of<A>,
        f: impl Fn(A) -> B + 'static,
    ) -> Self::Of<Tuple2<A, B>> {
        Self::map(fa, move |a| Tuple2(a.clone(), f(a)))
    }

    /// Replace every value with `b`, preserving structure.
    fn replace<A: Clone + 'static, B: Clone + 'static>(fa: Self::Of<A>, b: B) -> Self::Of<B> {
        Self::map(fa, move |_| b.clone())
    }

    /// Empty the container of its values, preserving structure.
    fn clear<A: Clone + 'static>(fa: Self::Of<A>) -> Self::Of<()> {
        Self::replace(fa, ())
    }
}

/// The functor instance for a nested pair of functors, mapping over values
/// of shape `F<G<A>>`.
pub struct Composite<F, G>(PhantomData<(F, G)>);

impl<F: CovariantFunctor, G: CovariantFunctor> InvariantFunctor for Composite<F, G> {
    type Of<A: Clone + 'static> = F::Of<G::Of<A>>;

    fn imap<A: Clone + 'static, B: Clone + 'static>(
        fga: Self::Of<A>,
        f: impl Fn(A) -> B + 'static,
        _g: impl Fn(B) -> A + 'static,
    ) -> Self::Of<B> {
        <Self as CovariantFunctor>::map(fga, f)
    }
}

impl<F: CovariantFunctor, G: CovariantFunctor> CovariantFunctor for Composite<F, G> {
    fn map<A: Clone + 'static, B: Clone + 'static>(
        fga: Self::Of<A>,
        f: impl Fn(A) -> B + 'static,
    ) -> Self::Of<B> {
        let f = Rc::new(f);
        F::map(fga, move |ga| {
            let f = Rc::clone(&f);
            G::map(ga, move |a| f(a))
        })
    }
}
