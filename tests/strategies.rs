use radar::{Attributes, Node, Policy, attr};
use proptest::prelude::*;

// --- Fixed attribute schema ---
// amount       : integer text (0..=1000), occasionally non-numeric
// currency     : one of CURRENCIES
// card_country : one of COUNTRIES
// ip_country   : one of COUNTRIES

pub const CURRENCIES: &[&str] = &["USD", "EUR", "GBP"];
pub const COUNTRIES: &[&str] = &["US", "CA", "GB", "FR"];

fn arb_amount() -> impl Strategy<Value = String> {
    prop_oneof![
        8 => (0_i64..=1000).prop_map(|n| n.to_string()),
        1 => Just("n/a".to_owned()),
        1 => Just(String::new()),
    ]
}

/// Generate attributes aligned with the fixed schema. Each attribute may be absent.
pub fn arb_attributes() -> impl Strategy<Value = Attributes> {
    (
        prop::option::weighted(0.9, arb_amount()),
        prop::option::weighted(0.9, prop::sample::select(CURRENCIES)),
        prop::option::weighted(0.9, prop::sample::select(COUNTRIES)),
        prop::option::weighted(0.9, prop::sample::select(COUNTRIES)),
    )
        .prop_map(|(amount, currency, card_country, ip_country)| {
            let mut attrs = Attributes::new();
            if let Some(amount) = amount {
                attrs.insert("amount", amount);
            }
            if let Some(currency) = currency {
                attrs.insert("currency", currency);
            }
            if let Some(country) = card_country {
                attrs.insert("card_country", country);
            }
            if let Some(country) = ip_country {
                attrs.insert("ip_country", country);
            }
            attrs
        })
}

/// Generate a comparison leaf on a random schema attribute.
pub fn arb_comparison() -> impl Strategy<Value = Node> {
    prop_oneof![
        // amount ordering
        (0_i64..=1000, 0_u8..4).prop_map(|(val, op)| {
            let a = attr("amount");
            let val = val.to_string();
            match op {
                0 => a.lt(&val),
                1 => a.lte(&val),
                2 => a.gt(&val),
                _ => a.gte(&val),
            }
        }),
        // currency equality
        (prop::sample::select(CURRENCIES), prop::bool::ANY).prop_map(|(val, is_eq)| {
            if is_eq {
                attr("currency").eq(val)
            } else {
                attr("currency").ne(val)
            }
        }),
        // country against literal or against the other country attribute
        prop::sample::select(COUNTRIES).prop_map(|val| attr("card_country").eq(val)),
        Just(attr("card_country").ne("ip_country")),
    ]
}

/// Generate a tree in the shape the rule language can express: one comparison,
/// or two comparisons joined by AND/OR.
pub fn arb_rule_tree() -> impl Strategy<Value = Node> {
    prop_oneof![
        arb_comparison(),
        (arb_comparison(), arb_comparison()).prop_map(|(a, b)| a.and(b)),
        (arb_comparison(), arb_comparison()).prop_map(|(a, b)| a.or(b)),
    ]
}

/// Generate a policy, sometimes leaving a tree at its default.
pub fn arb_policy() -> impl Strategy<Value = Policy> {
    (
        prop::option::of(arb_rule_tree()),
        prop::option::of(arb_rule_tree()),
    )
        .prop_map(|(allow, block)| {
            let mut builder = Policy::builder();
            if let Some(allow) = allow {
                builder = builder.allow(allow);
            }
            if let Some(block) = block {
                builder = builder.block(block);
            }
            builder.build()
        })
}
