//! Unit tests for `Composable` and the `>>` operator.

#![cfg(feature = "composable")]

use pipekit::compose::{compose, identity, tupled};
use pipekit::composable::{Composable, IntoComposable};
use rstest::rstest;

fn add_one(value: i32) -> i32 {
    value + 1
}

fn to_text(value: i32) -> String {
    value.to_string()
}

fn sort_chars(text: String) -> String {
    let mut characters: Vec<char> = text.chars().collect();
    characters.sort_unstable();
    characters.into_iter().collect()
}

fn text_len(text: String) -> usize {
    text.len()
}

// =============================================================================
// Operator composition
// =============================================================================

#[test]
fn test_composable_scenario() {
    let composed = Composable::new(add_one) >> to_text >> sort_chars >> text_len >> |length: usize| length.to_string();
    assert_eq!(composed.call(2), "1");
}

#[rstest]
#[case(0)]
#[case(9)]
#[case(-40)]
fn test_bare_and_wrapped_right_sides_agree(#[case] input: i32) {
    let bare = Composable::new(add_one) >> to_text >> text_len;
    let wrapped = Composable::new(add_one) >> Composable::new(to_text) >> Composable::new(text_len);

    assert_eq!(bare.call(input), wrapped.call(input));
}

#[test]
fn test_operator_is_associative() {
    let left = (Composable::new(add_one) >> to_text) >> text_len;
    let right = Composable::new(add_one) >> (Composable::new(to_text) >> text_len);

    for value in [1, 99, 1000] {
        assert_eq!(left.call(value), right.call(value));
    }
}

#[test]
fn test_operator_matches_compose() {
    let by_operator = Composable::new(add_one) >> to_text;
    let by_function = compose(add_one, to_text);

    assert_eq!(by_operator.call(20), by_function(20));
}

#[test]
fn test_identity_is_neutral() {
    let plain = Composable::new(to_text);
    let left = Composable::new(identity::<i32>) >> to_text;
    let right = Composable::new(to_text) >> identity::<String>;

    assert_eq!(left.call(5), plain.call(5));
    assert_eq!(right.call(5), plain.call(5));
}

#[test]
fn test_operator_runs_left_before_right() {
    let subtract_then_double = Composable::new(|x: i32| x - 3) >> |x: i32| x * 2;
    let double_then_subtract = Composable::new(|x: i32| x * 2) >> |x: i32| x - 3;

    assert_eq!(subtract_then_double.call(10), 14);
    assert_eq!(double_then_subtract.call(10), 17);
}

#[test]
fn test_then_is_the_named_operator() {
    let by_name = Composable::new(add_one).then(to_text).then(text_len);
    let by_operator = Composable::new(add_one) >> to_text >> text_len;

    assert_eq!(by_name.call(99), by_operator.call(99));
}

// =============================================================================
// Multi-argument first stage
// =============================================================================

#[test]
fn test_tupled_first_stage() {
    fn add(left: i32, right: i32) -> i32 {
        left + right
    }

    let composed = Composable::new(tupled(add)) >> to_text;
    assert_eq!(composed.call((40, 2)), "42");
}

// =============================================================================
// Conversions
// =============================================================================

#[test]
fn test_into_composable_passes_wrapped_values_through() {
    let wrapped = Composable::new(add_one);
    let passed = IntoComposable::<i32>::into_composable(wrapped);

    assert_eq!(passed.call(1), wrapped.call(1));
}

#[test]
fn test_into_fn_and_into_inner() {
    let composed = Composable::new(add_one) >> add_one;
    let values: Vec<i32> = vec![1, 2].into_iter().map(composed.into_fn()).collect();
    assert_eq!(values, vec![3, 4]);

    let function = Composable::new(to_text).into_inner();
    assert_eq!(function(3), "3");
}

#[test]
fn test_constant_composable() {
    const INCREMENT: Composable<fn(i32) -> i32, i32> = Composable::new(add_one);

    let twice = INCREMENT >> INCREMENT;
    assert_eq!(twice.call(0), 2);
    assert_eq!(INCREMENT.call(0), 1);
}
