//! Algebraic data types (`Option`, `List`, `Tuple2`), a lazy evaluation
//! control type (`Eval`) with a stack safe trampoline, and functor
//! abstractions implemented over partially applied type markers.

pub mod eval;
pub mod functor;
pub mod laws;
pub mod list;
pub mod option;
pub mod tuple;

pub use crate::eval::Eval;
pub use crate::functor::{Composite, CovariantFunctor, InvariantFunctor, PartiallyApplied};
pub use crate::list::List;
pub use crate::option::Option;
pub use crate::tuple::Tuple2;
