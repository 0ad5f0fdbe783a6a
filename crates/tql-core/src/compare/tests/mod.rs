
use crate::{
    compare::{CompareOp, ComparePath, Outcome, compare, resolve, select_path},
    value::{Value, ValueKind},
};
use std::cmp::Ordering;

// ---- helpers -----------------------------------------------------------

fn s(x: &str) -> Value {
    Value::Str(x.to_string())
}

fn b(x: &[u8]) -> Value {
    Value::bytes(x)
}

fn opaque(type_name: &'static str, payload: &'static str) -> Value {
    Value::opaque(type_name, payload)
}

fn results(left: &Value, right: &Value) -> [bool; 6] {
    CompareOp::ALL.map(|op| compare(left, right, op))
}

// ---- scenarios ---------------------------------------------------------

#[test]
fn string_less_than_orders_bytewise() {
    assert!(compare(&s("1"), &s("2"), CompareOp::Lt));
}

#[test]
fn present_bytes_never_equal_unset_bytes() {
    assert!(!compare(&b(b"1"), &Value::unset_bytes(), CompareOp::Eq));
}

#[test]
fn int_below_float_is_not_gte() {
    assert!(!compare(&Value::Int(1), &Value::Float(2.0), CompareOp::Gte));
}

#[test]
fn absent_pair_satisfies_non_strict_ordering() {
    assert!(compare(&Value::Absent, &Value::Absent, CompareOp::Gte));
    assert!(compare(&Value::Absent, &Value::Absent, CompareOp::Lte));
    assert!(!compare(&Value::Absent, &Value::Absent, CompareOp::Lt));
    assert!(!compare(&Value::Absent, &Value::Absent, CompareOp::Gt));
}

#[test]
fn equal_opaque_values_are_equal_but_never_ordered() {
    let left = opaque("T", "hi");
    let right = opaque("T", "hi");

    assert!(!compare(&left, &right, CompareOp::Ne));
    assert!(!compare(&left, &right, CompareOp::Lte));
    assert_eq!(results(&left, &right), [true, false, false, false, false, false]);
}

#[test]
fn opaque_identity_against_itself_suppresses_ordering() {
    let x = opaque("T", "hi");

    assert_eq!(results(&x, &x), [true, false, false, false, false, false]);
}

// ---- absent equivalence ------------------------------------------------

#[test]
fn absent_equivalence_rules() {
    let absent = Value::Absent;

    assert!(compare(&absent, &Value::Absent, CompareOp::Eq));
    assert!(compare(&absent, &Value::unset_bytes(), CompareOp::Eq));
    assert!(!compare(&absent, &b(&[0x31]), CompareOp::Eq));
    assert!(!compare(&absent, &Value::Bool(false), CompareOp::Eq));
    assert!(!compare(&absent, &s(""), CompareOp::Eq));
}

#[test]
fn unset_bytes_pair_behaves_like_absent_pair() {
    assert_eq!(
        results(&Value::unset_bytes(), &Value::unset_bytes()),
        results(&Value::Absent, &Value::Absent),
    );
}

#[test]
fn empty_present_bytes_are_not_absent() {
    let empty = Value::bytes(Vec::<u8>::new());

    assert_eq!(empty.kind(), ValueKind::Bytes);
    assert!(!compare(&empty, &Value::Absent, CompareOp::Eq));
    assert!(compare(&empty, &Value::bytes(Vec::<u8>::new()), CompareOp::Eq));
}

// ---- cross-primitive incomparability ------------------------------------

#[test]
fn same_text_in_different_kinds_is_incomparable() {
    assert_eq!(
        results(&s("1"), &b(&[0x31])),
        [false, true, false, false, false, false]
    );
}

// ---- numeric path ------------------------------------------------------

#[test]
fn mixed_numeric_compares_by_real_value() {
    assert_eq!(
        results(&Value::Int(1), &Value::Float(2.0)),
        [false, true, true, true, false, false]
    );
    assert_eq!(
        results(&Value::Float(2.0), &Value::Int(1)),
        [false, true, false, false, true, true]
    );
    assert_eq!(
        results(&Value::Int(2), &Value::Float(2.0)),
        [true, false, false, true, true, false]
    );
}

#[test]
fn int_pairs_compare_exactly_beyond_f64_precision() {
    let big = Value::Int(1 << 53);
    let bigger = Value::Int((1 << 53) + 1);

    assert!(compare(&big, &bigger, CompareOp::Lt));
    assert!(compare(&big, &bigger, CompareOp::Ne));
}

#[test]
fn nan_is_incomparable_even_to_itself() {
    let nan = Value::Float(f64::NAN);

    assert_eq!(results(&nan, &nan), [false, true, false, false, false, false]);
    assert_eq!(
        results(&nan, &Value::Int(0)),
        [false, true, false, false, false, false]
    );
    assert_eq!(resolve(&nan, &nan).path, ComparePath::Numeric);
}

#[test]
fn infinities_order_around_integers() {
    assert!(compare(&Value::Int(i64::MAX), &Value::Float(f64::INFINITY), CompareOp::Lt));
    assert!(compare(&Value::Float(f64::NEG_INFINITY), &Value::Int(i64::MIN), CompareOp::Lt));
}

// ---- lexicographic path ------------------------------------------------

#[test]
fn shorter_prefix_sorts_first() {
    assert!(compare(&s("ab"), &s("abc"), CompareOp::Lt));
    assert!(compare(&b(b"ab"), &b(b"abc"), CompareOp::Lt));
    assert!(compare(&s(""), &s("a"), CompareOp::Lt));
}

#[test]
fn bytes_compare_unsigned() {
    assert!(compare(&b(&[0x7f]), &b(&[0x80]), CompareOp::Lt));
    assert!(compare(&b(&[0xff]), &b(&[0x00, 0x00]), CompareOp::Gt));
}

#[test]
fn strings_order_by_utf8_bytes_not_locale() {
    assert!(compare(&s("Z"), &s("a"), CompareOp::Lt));
    assert!(compare(&s("z"), &s("é"), CompareOp::Lt));
}

// ---- resolution --------------------------------------------------------

#[test]
fn select_path_follows_priority_order() {
    use ValueKind as K;

    assert_eq!(select_path(K::Absent, K::Int), ComparePath::Absent);
    assert_eq!(select_path(K::Opaque, K::Absent), ComparePath::Absent);
    assert_eq!(select_path(K::Int, K::Float), ComparePath::Numeric);
    assert_eq!(select_path(K::Float, K::Float), ComparePath::Numeric);
    assert_eq!(select_path(K::Bool, K::Bool), ComparePath::SameKind);
    assert_eq!(select_path(K::Str, K::Str), ComparePath::SameKind);
    assert_eq!(select_path(K::Bytes, K::Bytes), ComparePath::SameKind);
    assert_eq!(select_path(K::Opaque, K::Opaque), ComparePath::Opaque);
    assert_eq!(select_path(K::Str, K::Bytes), ComparePath::Incomparable);
    assert_eq!(select_path(K::Int, K::Opaque), ComparePath::Incomparable);
}

#[test]
fn select_path_is_symmetric() {
    for left in ValueKind::ALL {
        for right in ValueKind::ALL {
            assert_eq!(select_path(left, right), select_path(right, left));
        }
    }
}

#[test]
fn resolve_reports_outcome_shapes() {
    assert_eq!(
        resolve(&Value::Absent, &Value::Absent).outcome,
        Outcome::Ordered(Ordering::Equal)
    );
    assert_eq!(
        resolve(&Value::Bool(false), &Value::Bool(true)).outcome,
        Outcome::Ordered(Ordering::Less)
    );
    assert_eq!(
        resolve(&opaque("T", "hi"), &opaque("T", "hi")).outcome,
        Outcome::Unordered { equal: true }
    );
    assert_eq!(
        resolve(&opaque("T", "hi"), &opaque("U", "hi")).outcome,
        Outcome::INCOMPARABLE
    );
}

#[test]
fn compare_path_displays_its_label() {
    let labels: Vec<String> = ComparePath::ALL.iter().map(ToString::to_string).collect();

    assert_eq!(
        labels,
        ["absent", "numeric", "same_kind", "opaque", "incomparable"]
    );
    assert_eq!(
        resolve(&s("1"), &Value::Int(1)).path.to_string(),
        "incomparable"
    );
}

#[test]
fn every_cross_kind_pair_resolves_incomparable() {
    let samples = [
        Value::Bool(true),
        Value::Int(1),
        s("1"),
        b(b"1"),
        opaque("T", "1"),
    ];

    for left in &samples {
        for right in &samples {
            let resolution = resolve(left, right);
            if resolution.path != ComparePath::Incomparable {
                continue;
            }
            assert_eq!(resolution.outcome, Outcome::INCOMPARABLE, "{left} vs {right}");
            assert_eq!(results(left, right), [false, true, false, false, false, false]);
        }
    }
}

// ---- dispatch ----------------------------------------------------------

#[test]
fn dispatch_table_matches_every_outcome_row() {
    let rows = [
        (Outcome::Ordered(Ordering::Less), [false, true, true, true, false, false]),
        (Outcome::Ordered(Ordering::Equal), [true, false, false, true, true, false]),
        (Outcome::Ordered(Ordering::Greater), [false, true, false, false, true, true]),
        (Outcome::Unordered { equal: true }, [true, false, false, false, false, false]),
        (Outcome::INCOMPARABLE, [false, true, false, false, false, false]),
    ];

    for (outcome, want) in rows {
        let got = CompareOp::ALL.map(|op| op.apply(outcome));
        assert_eq!(got, want, "dispatch of {outcome:?}");
    }
}

// ---- operator surface --------------------------------------------------

#[test]
fn operator_tokens_parse_and_display() {
    for op in CompareOp::ALL {
        assert_eq!(op.symbol().parse::<CompareOp>(), Ok(op));
        assert_eq!(op.to_string(), op.symbol());
    }

    assert_eq!(" <= ".parse::<CompareOp>(), Ok(CompareOp::Lte));
}

#[test]
fn unknown_operator_tokens_are_rejected() {
    use crate::error::ParseCompareOpError;

    assert_eq!("".parse::<CompareOp>(), Err(ParseCompareOpError::Empty));
    assert_eq!(
        "=".parse::<CompareOp>(),
        Err(ParseCompareOpError::Unknown {
            token: "=".to_string()
        })
    );
    assert!("=<".parse::<CompareOp>().is_err());
}

#[test]
fn operator_serde_uses_tokens() {
    let json = serde_json::to_string(&CompareOp::ALL).expect("serialize ops");
    assert_eq!(json, r#"["==","!=","<","<=",">=",">"]"#);

    let back: Vec<CompareOp> = serde_json::from_str(&json).expect("deserialize ops");
    assert_eq!(back, CompareOp::ALL.to_vec());

    assert!(serde_json::from_str::<CompareOp>(r#""~=""#).is_err());
}

#[test]
fn mirror_is_an_involution() {
    for op in CompareOp::ALL {
        assert_eq!(op.mirror().mirror(), op);
        assert_eq!(op.mirror().is_ordering(), op.is_ordering());
    }
}
