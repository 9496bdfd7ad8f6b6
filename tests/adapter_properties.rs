//! Property-based tests for call-shape normalization and skip policies

use proptest::prelude::*;
use sluice::{
    args, build, infallible, normalize, Arg, CallShape, Options, PredicateError, Record, Value,
};

fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Missing),
        Just(Value::Null),
        Just(Value::from("")),
        any::<bool>().prop_map(Value::Bool),
        (-1000i32..1000).prop_map(Value::from),
        "[a-z0-9_ ]{0,12}".prop_map(Value::String),
    ]
}

fn positional_strategy() -> impl Strategy<Value = Arg> {
    prop_oneof![
        Just(Arg::Null),
        any::<bool>().prop_map(Arg::Bool),
        (-1000i32..1000).prop_map(Arg::from),
        "[a-z]{0,8}".prop_map(Arg::Str),
        prop::collection::vec("[a-z]{1,4}", 0..3).prop_map(Arg::from),
    ]
}

fn options_strategy() -> impl Strategy<Value = Options> {
    (
        prop::option::of("[a-z ]{0,10}"),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(message, skip_null, skip_empty)| Options {
            message,
            skip_null,
            skip_empty,
        })
}

fn method_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["equals", "contains", "matches", "isURL", "isLength"])
}

// Parity of value length against argument count, so bound arguments change the outcome.
fn echo(value: &Value, args: &[Arg]) -> Result<bool, PredicateError> {
    Ok(value.to_input_string().len() % 2 == args.len() % 2)
}

proptest! {
    #[test]
    fn prop_normalize_is_deterministic(
        method in method_strategy(),
        options in prop::option::of(options_strategy()),
        rest in prop::collection::vec(positional_strategy(), 0..4),
    ) {
        let mut raw: Vec<Arg> = options.into_iter().map(Arg::from).collect();
        raw.extend(rest);

        let first = normalize(method, raw.clone());
        let second = normalize(method, raw);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_positional_calls_are_forwarded_untouched(
        method in method_strategy(),
        raw in prop::collection::vec(positional_strategy(), 0..4),
    ) {
        let shape = normalize(method, raw.clone());
        prop_assert_eq!(shape, CallShape { bound_args: raw, options: Options::default() });
    }

    #[test]
    fn prop_leading_options_are_stripped_except_for_url(
        method in method_strategy(),
        options in options_strategy(),
        rest in prop::collection::vec(positional_strategy(), 0..4),
    ) {
        let mut raw = args![options.clone()];
        raw.extend(rest.clone());

        let shape = normalize(method, raw.clone());
        prop_assert_eq!(&shape.options, &options);
        if method == "isURL" {
            prop_assert_eq!(shape.bound_args, raw);
        } else {
            prop_assert_eq!(shape.bound_args, rest);
        }
    }

    #[test]
    fn prop_skip_null_accepts_null_and_missing(
        options in options_strategy(),
        rest in prop::collection::vec(positional_strategy(), 0..3),
    ) {
        let never = infallible(|_: &Value, _: &[Arg]| false);
        let mut raw = args![options.skip_null(true)];
        raw.extend(rest);
        let d = build(never, normalize("never", raw));

        prop_assert_eq!(d.check(&Value::Null), Ok(true));
        prop_assert_eq!(d.check(&Value::Missing), Ok(true));
    }

    #[test]
    fn prop_skip_empty_accepts_null_missing_and_empty(options in options_strategy()) {
        let never = infallible(|_: &Value, _: &[Arg]| false);
        let d = build(never, normalize("never", args![options.skip_empty(true)]));

        prop_assert_eq!(d.check(&Value::Null), Ok(true));
        prop_assert_eq!(d.check(&Value::Missing), Ok(true));
        prop_assert_eq!(d.check(&Value::from("")), Ok(true));
    }

    #[test]
    fn prop_without_skip_descriptor_equals_core(
        value in value_strategy(),
        message in prop::option::of("[a-z]{1,6}"),
        rest in prop::collection::vec(positional_strategy(), 0..4),
    ) {
        let options = Options { message, skip_null: false, skip_empty: false };
        let mut raw = args![options];
        raw.extend(rest.clone());
        let d = build(echo, normalize("echo", raw));

        prop_assert_eq!(d.check(&value), echo(&value, &rest));
    }

    #[test]
    fn prop_message_is_verbatim_or_absent(message in prop::option::of(".{0,16}")) {
        let record = match &message {
            Some(m) => Record::new().with("message", m.as_str()),
            None => Record::new().with("message", Arg::Null),
        };
        let d = build(echo, normalize("echo", args![record]));
        prop_assert_eq!(d.message(), message.as_deref());
    }
}
