use dnetworkmanager_demo::{Demo, OverflowError, OverflowPolicy};
use rstest::rstest;
use serde_test::{assert_tokens, Token};

use crate::common::fixtures::SEED_CASES;

#[rstest]
fn test_try_add_without_overflow_is_exact(
    #[values(OverflowPolicy::Wrap, OverflowPolicy::Saturate, OverflowPolicy::Checked)]
    policy: OverflowPolicy,
) {
    let demo = Demo::with_policy(policy);
    for &(a, b, expected) in SEED_CASES {
        assert_eq!(demo.try_add(a, b), Ok(expected), "{} try_add({}, {})", policy, a, b);
    }
}

#[rstest]
#[case(OverflowPolicy::Wrap, Ok(i32::MAX))]
#[case(OverflowPolicy::Saturate, Ok(i32::MIN))]
#[case(OverflowPolicy::Checked, Err(OverflowError { a: i32::MIN, b: -1 }))]
fn test_try_add_int32_min_minus_one(
    #[case] policy: OverflowPolicy,
    #[case] expected: Result<i32, OverflowError>,
) {
    assert_eq!(Demo::with_policy(policy).try_add(i32::MIN, -1), expected);
}

#[test]
fn test_policy_tokens() {
    assert_tokens(
        &OverflowPolicy::Wrap,
        &[Token::UnitVariant {
            name: "OverflowPolicy",
            variant: "wrap",
        }],
    );
    assert_tokens(
        &OverflowPolicy::Checked,
        &[Token::UnitVariant {
            name: "OverflowPolicy",
            variant: "checked",
        }],
    );
}

#[test]
fn test_display_roundtrips_through_from_str() {
    for policy in OverflowPolicy::ALL {
        assert_eq!(policy.to_string().parse::<OverflowPolicy>(), Ok(policy));
    }
}

#[test]
fn test_overflow_error_serialization() {
    let err = OverflowError { a: i32::MAX, b: 1 };
    let value = serde_json::to_value(err).unwrap();
    assert_eq!(value["a"], i32::MAX);
    assert_eq!(value["b"], 1);
}
