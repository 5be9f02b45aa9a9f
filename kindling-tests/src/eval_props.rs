//! Properties of the evaluation strategies themselves, complementing the
//! counting unit tests in the library crate.

use std::cell::Cell;
use std::rc::Rc;

use crate::strategies::arb_eval;
use kindling::eval::Eval;
use proptest::prelude::*;

proptest! {
    #[test]
    fn now_is_eager_and_stable(x in any::<i64>()) {
        let e = Eval::now(x);
        prop_assert_eq!(e.value(), x);
        prop_assert_eq!(e.value(), x);
    }

    #[test]
    fn later_executes_exactly_once(x in any::<i64>(), calls in 1usize..5) {
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        let e = Eval::later(move || {
            c.set(c.get() + 1);
            x
        });
        for _ in 0..calls {
            prop_assert_eq!(e.value(), x);
        }
        prop_assert_eq!(count.get(), 1);
    }

    #[test]
    fn always_executes_once_per_call(x in any::<i64>(), calls in 1usize..5) {
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        let e = Eval::always(move || {
            c.set(c.get() + 1);
            x
        });
        for _ in 0..calls {
            prop_assert_eq!(e.value(), x);
        }
        prop_assert_eq!(count.get(), calls);
    }

    #[test]
    fn memoize_preserves_the_forced_value(e in arb_eval(), calls in 1usize..5) {
        let m = e.memoize();
        let expected = e.value();
        for _ in 0..calls {
            prop_assert_eq!(m.value(), expected);
        }
    }

    #[test]
    fn memoized_always_executes_exactly_once(x in any::<i64>(), calls in 1usize..5) {
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        let m = Eval::always(move || {
            c.set(c.get() + 1);
            x
        })
        .memoize();
        for _ in 0..calls {
            prop_assert_eq!(m.value(), x);
        }
        prop_assert_eq!(count.get(), 1);
    }

    #[test]
    fn map_composes(e in arb_eval(), k in any::<i64>(), m in any::<i64>()) {
        let f = move |x: i64| x.wrapping_add(k);
        let g = move |x: i64| x.wrapping_mul(m);
        let composed = e.clone().map(f).map(g);
        let fused = e.map(move |x| g(f(x)));
        prop_assert_eq!(composed.value(), fused.value());
    }

    #[test]
    fn map_identity(e in arb_eval()) {
        prop_assert_eq!(e.clone().map(|x| x).value(), e.value());
    }

    #[test]
    fn flat_map_associates(x in any::<i64>(), k in any::<i64>(), m in any::<i64>()) {
        let f = move |a: i64| Eval::now(a.wrapping_add(k));
        let g = move |b: i64| Eval::now(b.wrapping_mul(m));
        let left = Eval::now(x).flat_map(f).flat_map(g);
        let right = Eval::now(x).flat_map(move |a| f(a).flat_map(g));
        prop_assert_eq!(left.value(), right.value());
    }

    #[test]
    fn equality_is_by_forced_value(x in any::<i64>()) {
        prop_assert_eq!(Eval::now(x), Eval::later(move || x));
        prop_assert_eq!(Eval::now(x), Eval::always(move || x));
    }
}
