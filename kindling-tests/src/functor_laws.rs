//! Law conformance for every functor instance the library ships.

use crate::strategies::{arb_eval, arb_list, arb_list_of_option, arb_option};
use kindling::eval::Eval;
use kindling::functor::{Composite, PartiallyApplied};
use kindling::laws::{
    covariant_composition, covariant_identity, invariant_composition, invariant_identity,
};
use kindling::list::List;
use kindling::option::Option;
use proptest::prelude::*;

type OptionF = Option<PartiallyApplied>;
type ListF = List<PartiallyApplied>;
type EvalF = Eval<PartiallyApplied>;
type ListOfOptionF = Composite<ListF, OptionF>;

proptest! {
    #[test]
    fn option_covariant_identity(fa in arb_option()) {
        prop_assert!(covariant_identity::<OptionF, i64>(fa));
    }

    #[test]
    fn option_covariant_composition(fa in arb_option(), k in any::<i64>(), m in any::<i64>()) {
        prop_assert!(covariant_composition::<OptionF, i64, i64, i64>(
            fa,
            move |x| x.wrapping_add(k),
            move |x| x.wrapping_mul(m),
        ));
    }

    #[test]
    fn option_invariant_identity(fa in arb_option()) {
        prop_assert!(invariant_identity::<OptionF, i64>(fa));
    }

    #[test]
    fn option_invariant_composition(fa in arb_option(), k in any::<i64>(), m in any::<i64>()) {
        prop_assert!(invariant_composition::<OptionF, i64, i64, i64>(
            fa,
            move |x| x.wrapping_add(k),
            move |x| x.wrapping_sub(k),
            move |x| x.wrapping_add(m),
            move |x| x.wrapping_sub(m),
        ));
    }

    #[test]
    fn list_covariant_identity(fa in arb_list()) {
        prop_assert!(covariant_identity::<ListF, i64>(fa));
    }

    #[test]
    fn list_covariant_composition(fa in arb_list(), k in any::<i64>(), m in any::<i64>()) {
        prop_assert!(covariant_composition::<ListF, i64, i64, i64>(
            fa,
            move |x| x.wrapping_add(k),
            move |x| x.wrapping_mul(m),
        ));
    }

    #[test]
    fn list_invariant_identity(fa in arb_list()) {
        prop_assert!(invariant_identity::<ListF, i64>(fa));
    }

    #[test]
    fn list_invariant_composition(fa in arb_list(), k in any::<i64>(), m in any::<i64>()) {
        prop_assert!(invariant_composition::<ListF, i64, i64, i64>(
            fa,
            move |x| x.wrapping_add(k),
            move |x| x.wrapping_sub(k),
            move |x| x.wrapping_add(m),
            move |x| x.wrapping_sub(m),
        ));
    }

    #[test]
    fn eval_covariant_identity(fa in arb_eval()) {
        prop_assert!(covariant_identity::<EvalF, i64>(fa));
    }

    #[test]
    fn eval_covariant_composition(fa in arb_eval(), k in any::<i64>(), m in any::<i64>()) {
        prop_assert!(covariant_composition::<EvalF, i64, i64, i64>(
            fa,
            move |x| x.wrapping_add(k),
            move |x| x.wrapping_mul(m),
        ));
    }

    #[test]
    fn eval_invariant_identity(fa in arb_eval()) {
        prop_assert!(invariant_identity::<EvalF, i64>(fa));
    }

    #[test]
    fn eval_invariant_composition(fa in arb_eval(), k in any::<i64>(), m in any::<i64>()) {
        prop_assert!(invariant_composition::<EvalF, i64, i64, i64>(
            fa,
            move |x| x.wrapping_add(k),
            move |x| x.wrapping_sub(k),
            move |x| x.wrapping_add(m),
            move |x| x.wrapping_sub(m),
        ));
    }

    #[test]
    fn list_of_option_covariant_identity(fa in arb_list_of_option()) {
        prop_assert!(covariant_identity::<ListOfOptionF, i64>(fa));
    }

    #[test]
    fn list_of_option_covariant_composition(
        fa in arb_list_of_option(),
        k in any::<i64>(),
        m in any::<i64>(),
    ) {
        prop_assert!(covariant_composition::<ListOfOptionF, i64, i64, i64>(
            fa,
            move |x| x.wrapping_add(k),
            move |x| x.wrapping_mul(m),
        ));
    }

    #[test]
    fn list_of_option_invariant_identity(fa in arb_list_of_option()) {
        prop_assert!(invariant_identity::<ListOfOptionF, i64>(fa));
    }

    #[test]
    fn list_of_option_invariant_composition(
        fa in arb_list_of_option(),
        k in any::<i64>(),
        m in any::<i64>(),
    ) {
        prop_assert!(invariant_composition::<ListOfOptionF, i64, i64, i64>(
            fa,
            move |x| x.wrapping_add(k),
            move |x| x.wrapping_sub(k),
            move |x| x.wrapping_add(m),
            move |x| x.wrapping_sub(m),
        ));
    }
}
