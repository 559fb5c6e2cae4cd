//! Property-based tests for the print pipeline.
//!
//! These complement the example-driven tests in `print_tests.rs` by
//! generating arbitrary inputs and checking the structural rules:
//! separator placement, terminator placement, adapter extraction order,
//! non-mutation of adapters, and idempotence.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::BinaryHeap;

use proptest::prelude::*;
use pyprint::{format_values, render_to_string, PrintOptions, Queue, Render, Stack};

/// Join the `Display` forms of a slice with `sep`.
fn joined(values: &[i64], sep: &str) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(sep)
}

proptest! {
    #[test]
    fn sequence_is_bracketed_join(values in prop::collection::vec(any::<i64>(), 0..20)) {
        let rendered = render_to_string(&values);
        prop_assert_eq!(rendered, format!("[{}]", joined(&values, " ")));
    }

    #[test]
    fn sequence_respects_custom_separator(
        values in prop::collection::vec(any::<i64>(), 0..20),
        sep in "[,;|_-]{1,3}",
    ) {
        let options = PrintOptions::new().with_sep(sep.clone());
        let rendered = format_values(&[&values], options);
        prop_assert_eq!(rendered, format!("[{}]\n", joined(&values, &sep)));
    }

    #[test]
    fn top_level_arguments_join_like_a_sequence_body(
        values in prop::collection::vec(any::<i64>(), 0..10),
        sep in "[,;|_-]{1,3}",
    ) {
        let refs: Vec<&dyn Render> = values.iter().map(|v| v as &dyn Render).collect();
        let options = PrintOptions::new().with_sep(sep.clone());
        let rendered = format_values(&refs, options);
        prop_assert_eq!(rendered, format!("{}\n", joined(&values, &sep)));
    }

    #[test]
    fn terminator_appears_exactly_once_at_the_end(
        values in prop::collection::vec(any::<u32>(), 0..10),
        end in "(END|\\n|;;)",
    ) {
        let refs: Vec<&dyn Render> = values.iter().map(|v| v as &dyn Render).collect();
        let options = PrintOptions::new().with_end(end.clone());
        let rendered = format_values(&refs, options);
        prop_assert!(rendered.ends_with(&end));
        prop_assert_eq!(rendered.len(), joined_u32(&values).len() + end.len());
    }

    #[test]
    fn stack_renders_reverse_of_push_order(values in prop::collection::vec(any::<i64>(), 0..20)) {
        let stack: Stack<i64> = values.iter().copied().collect();
        let mut reversed = values.clone();
        reversed.reverse();
        prop_assert_eq!(render_to_string(&stack), format!("[{}]", joined(&reversed, " ")));
    }

    #[test]
    fn queue_renders_in_push_order(values in prop::collection::vec(any::<i64>(), 0..20)) {
        let queue: Queue<i64> = values.iter().copied().collect();
        prop_assert_eq!(render_to_string(&queue), format!("[{}]", joined(&values, " ")));
    }

    #[test]
    fn heap_renders_in_descending_order(values in prop::collection::vec(any::<i64>(), 0..20)) {
        let heap: BinaryHeap<i64> = values.iter().copied().collect();
        let mut sorted = values.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        prop_assert_eq!(render_to_string(&heap), format!("[{}]", joined(&sorted, " ")));
    }

    #[test]
    fn rendering_adapters_does_not_mutate_them(values in prop::collection::vec(any::<i64>(), 0..20)) {
        let stack: Stack<i64> = values.iter().copied().collect();
        let before = stack.clone();
        let _ = render_to_string(&stack);
        prop_assert_eq!(stack, before);

        let queue: Queue<i64> = values.iter().copied().collect();
        let before = queue.clone();
        let _ = render_to_string(&queue);
        prop_assert_eq!(queue, before);
    }

    #[test]
    fn identical_calls_are_byte_identical(
        values in prop::collection::vec(any::<i64>(), 0..10),
        sep in "[ ,;]{1,2}",
    ) {
        let refs: Vec<&dyn Render> = values.iter().map(|v| v as &dyn Render).collect();
        let options = PrintOptions::new().with_sep(sep);
        let first = format_values(&refs, options.clone());
        let second = format_values(&refs, options);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn bits_width_and_value_round_trip(value in any::<u16>()) {
        let bits = pyprint::Bits::<16>::from_value(u128::from(value));
        let rendered = render_to_string(&bits);
        prop_assert_eq!(rendered.len(), 16);
        prop_assert_eq!(rendered, format!("{value:016b}"));
    }
}

fn joined_u32(values: &[u32]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
