use dquel::{Criteria, Method};
use proptest::prelude::*;

// --- Fixed field schema ---
// name    : string
// age     : number
// enabled : boolean (unary methods)
// region  : string, small vocabulary
//
// Values come from fixed vocabularies that contain none of the DQL
// delimiter characters, so invariant checks can scan rendered text
// without tracking quoting.

const FIELDS: &[&str] = &["name", "age", "enabled", "region"];
const WORDS: &[&str] = &["alpha", "beta", "gamma", "delta"];
const UNARY_METHODS: &[Method] = &[Method::IsNull, Method::IsNotNull, Method::IsTrue, Method::IsFalse];
const STRING_METHODS: &[Method] = &[Method::Eq, Method::Contains, Method::StartsWith];
const NUMBER_METHODS: &[Method] = &[Method::Eq, Method::Gt, Method::Lt, Method::Goe, Method::Loe];

/// Generate a leaf criterion on a random field from the schema, negated half
/// the time.
pub fn arb_leaf() -> impl Strategy<Value = Criteria> {
    let leaf = prop_oneof![
        (
            prop::sample::select(FIELDS),
            prop::sample::select(UNARY_METHODS)
        )
            .prop_map(|(f, m)| Criteria::unary(f, m)),
        (
            prop::sample::select(FIELDS),
            prop::sample::select(STRING_METHODS),
            prop::sample::select(WORDS)
        )
            .prop_map(|(f, m, w)| Criteria::string(f, m, w)),
        (
            prop::sample::select(FIELDS),
            prop::sample::select(NUMBER_METHODS),
            -1000_i64..1000
        )
            .prop_map(|(f, m, n)| Criteria::number(f, m, n)),
        (
            prop::sample::select(FIELDS),
            prop::collection::vec(prop::sample::select(WORDS), 1..4)
        )
            .prop_map(|(f, ws)| Criteria::string_list(f, Method::MemberOf, ws)),
        (
            prop::sample::select(FIELDS),
            prop::collection::vec(-100_i64..100, 1..4)
        )
            .prop_map(|(f, ns)| Criteria::number_list(f, Method::MemberOf, ns)),
    ];
    (leaf, prop::bool::ANY).prop_map(|(c, negate)| if negate { !c } else { c })
}

/// Generate a composite criteria tree (AND, OR, NOT of leaves), bounded
/// depth.
pub fn arb_criteria(max_depth: u32) -> impl Strategy<Value = Criteria> {
    arb_leaf().prop_recursive(max_depth, 32, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(a, b)| a.and(b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| a.or(b)),
            inner.prop_map(|c| !c),
        ]
    })
}

/// Count leaf criteria in a tree.
pub fn leaf_count(criteria: &Criteria) -> usize {
    match criteria {
        Criteria::Criterion { .. } => 1,
        Criteria::Composite { left, right, .. } => leaf_count(left) + leaf_count(right),
    }
}
