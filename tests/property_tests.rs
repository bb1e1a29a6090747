//! Property-based tests for the gosp analyzer
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use gosp::ast::{Node, Params};
use gosp::datum::{Datum, Literal};
use gosp::lang::keywords::{self, KeywordId};
use gosp::parser::{self, expand_formals};
use gosp::reader;
use proptest::prelude::*;

/// Identifiers that never collide with a special-form keyword.
fn plain_ident() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9?!-]{0,7}".prop_filter("keywords dispatch", |name| keywords::from_str(name).is_none())
}

fn idents(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(plain_ident(), 0..max)
}

// =============================================================================
// Formal-list expansion
// =============================================================================

mod formals_tests {
    use super::*;

    proptest! {
        /// Property: fixed formals keep their order.
        #[test]
        fn fixed_formals_preserve_order(names in idents(8)) {
            let formals: Vec<Datum> = names.iter().map(Datum::symbol).collect();
            let params = expand_formals(KeywordId::Lambda, &formals).unwrap();
            prop_assert_eq!(params, Params::Fixed(names));
        }

        /// Property: a dotted tail yields exactly one rest name, after the fixed ones.
        #[test]
        fn dotted_formals_yield_one_rest(names in idents(6), rest in plain_ident()) {
            let mut formals: Vec<Datum> = names.iter().map(Datum::symbol).collect();
            formals.push(Datum::dot());
            formals.push(Datum::symbol(rest.as_str()));

            let params = expand_formals(KeywordId::Define, &formals).unwrap();
            prop_assert_eq!(params.fixed(), names.as_slice());
            prop_assert_eq!(params.rest(), Some(&rest));
        }

        /// Property: a bare symbol pattern collects every argument.
        #[test]
        fn bare_symbol_lambda_is_rest_all(name in plain_ident()) {
            let nodes = parser::parse_str("prop", &format!("(lambda {name} {name})")).unwrap();
            let Node::Lambda(lambda) = &nodes[0] else {
                panic!("expected a lambda");
            };
            prop_assert_eq!(&lambda.params, &Params::Rest(name));
        }
    }
}

// =============================================================================
// Quote chains
// =============================================================================

mod quote_tests {
    use super::*;

    proptest! {
        /// Property: quoting a list of integers yields a proper chain of the same integers.
        #[test]
        fn quoted_list_is_a_proper_chain(values in prop::collection::vec(any::<i64>(), 0..16)) {
            let items: Vec<Datum> = values.iter().map(|v| Datum::int(*v)).collect();
            let datum = Datum::list(vec![Datum::symbol("quote"), Datum::list(items)]);

            let Node::Quote(data) = parser::parse_node(&datum).unwrap() else {
                panic!("expected a quote");
            };
            let walked: Vec<i64> = data
                .to_vec()
                .unwrap()
                .into_iter()
                .map(|node| match node {
                    Node::Literal(Literal::Int(n)) => *n,
                    other => panic!("expected an integer, got {other}"),
                })
                .collect();
            prop_assert_eq!(walked, values);
        }

        /// Property: a quasiquote template without escapes renders back as written.
        #[test]
        fn escape_free_template_round_trips(names in idents(8)) {
            let source = format!("`({})", names.join(" "));
            let nodes = parser::parse_str("prop", &source).unwrap();
            prop_assert_eq!(nodes[0].to_string(), source);
        }
    }
}

// =============================================================================
// Reader / Display agreement
// =============================================================================

mod reader_tests {
    use super::*;

    proptest! {
        /// Property: a call of plain identifiers reads, analyzes and prints back unchanged.
        #[test]
        fn call_renders_as_read(head in plain_ident(), args in idents(6)) {
            let source = std::iter::once(head).chain(args).collect::<Vec<_>>().join(" ");
            let source = format!("({source})");

            let datums = reader::read(&source).unwrap();
            prop_assert_eq!(datums[0].to_string(), source.clone());
            let node = parser::parse_node(&datums[0]).unwrap();
            prop_assert_eq!(node.to_string(), source);
        }

        /// Property: the analyzer returns errors, never panics, on arbitrary text.
        #[test]
        fn arbitrary_text_never_panics(source in "\\PC{0,64}") {
            let _ = parser::parse_str("fuzz", &source);
        }
    }
}
