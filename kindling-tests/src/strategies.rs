//! Proptest generators for the kindling containers.

use kindling::eval::Eval;
use kindling::list::List;
use kindling::option::Option;
use proptest::collection::vec;
use proptest::prelude::*;

pub fn arb_option() -> impl Strategy<Value = Option<i64>> {
    prop_oneof![
        Just(Option::None),
        any::<i64>().prop_map(|x| Option::Some(x)),
    ]
}

pub fn arb_list() -> impl Strategy<Value = List<i64>> {
    vec(any::<i64>(), 0..32).prop_map(|items| List::of(items))
}

pub fn arb_list_of_option() -> impl Strategy<Value = List<Option<i64>>> {
    vec(arb_option(), 0..32).prop_map(|items| List::of(items))
}

/// Evaluations across every construction strategy, including mapped and
/// chained composites over the leaf strategies.
pub fn arb_eval() -> impl Strategy<Value = Eval<i64>> {
    let leaf = prop_oneof![
        any::<i64>().prop_map(|x| Eval::now(x)),
        any::<i64>().prop_map(|x| Eval::later(move || x)),
        any::<i64>().prop_map(|x| Eval::always(move || x)),
    ];
    leaf.prop_recursive(4, 16, 2, |inner| {
        prop_oneof![
            (inner.clone(), any::<i64>())
                .prop_map(|(e, k)| e.map(move |x| x.wrapping_add(k))),
            (inner.clone(), any::<i64>())
                .prop_map(|(e, k)| e.flat_map(move |x| Eval::now(x.wrapping_mul(k)))),
            (inner, any::<i64>())
                .prop_map(|(e, k)| e.flat_map(move |x| Eval::later(move || x.wrapping_add(k)))),
        ]
    })
}
