//! Proptest strategies for the value domain.
//!
//! This module adapts the generation facility (proptest) to the shapes the
//! law engine asks for: scalars, unary functions, containers, and probe
//! inputs for the equality oracle. Functions are generated as finite
//! [`FnSpec`] descriptions compiled to closures, so every generated
//! function is pure by construction; the [`FnSpec::Sqrt`] shape produces
//! NaN for negative inputs, which exercises the determinizer's scrubbing
//! end to end.

use proptest::prelude::*;

use crate::check::determinize::DeterministicFn;
use crate::container::{Identity, Monad};
use crate::value::{FuncValue, Scalar};

/// How many probe inputs an equality oracle receives per check.
pub const PROBE_COUNT: usize = 3;

/// The range probe inputs are drawn from.
pub const PROBE_RANGE: std::ops::Range<i64> = 0..100;

/// A finite description of a unary function over the scalar domain.
///
/// Every shape is total: it accepts any scalar and produces a scalar,
/// with [`Scalar::Undefined`] propagating through all shapes except
/// [`FnSpec::Const`].
#[derive(Debug, Clone, PartialEq)]
pub enum FnSpec {
    /// Ignore the input and return a fixed scalar.
    Const(Scalar),
    /// Add a constant to the input's numeric view.
    Add(i64),
    /// Multiply the input's numeric view by a constant.
    Mul(i64),
    /// Negate the input (arithmetic, logical, or textual reversal).
    Negate,
    /// Render the input as text.
    Stringify,
    /// Square root of the input's numeric view; NaN for negatives.
    Sqrt,
}

impl FnSpec {
    /// Compiles the description to a callable payload.
    #[must_use]
    pub fn build(&self) -> FuncValue {
        match self {
            Self::Const(constant) => {
                let constant = constant.clone();
                FuncValue::new(move |_| constant.clone())
            }
            Self::Add(amount) => {
                let amount = *amount;
                FuncValue::new(move |input| add(input, amount))
            }
            Self::Mul(factor) => {
                let factor = *factor;
                FuncValue::new(move |input| mul(input, factor))
            }
            Self::Negate => FuncValue::new(negate),
            Self::Stringify => FuncValue::new(stringify),
            Self::Sqrt => FuncValue::new(sqrt),
        }
    }
}

fn text_length(text: &str) -> i64 {
    i64::try_from(text.len()).unwrap_or(i64::MAX)
}

fn add(input: Scalar, amount: i64) -> Scalar {
    match input {
        Scalar::Int(value) => Scalar::Int(value.wrapping_add(amount)),
        Scalar::Float(value) => Scalar::Float(value + amount as f64),
        Scalar::Bool(flag) => Scalar::Int(i64::from(flag).wrapping_add(amount)),
        Scalar::Text(text) => Scalar::Int(text_length(&text).wrapping_add(amount)),
        Scalar::Undefined => Scalar::Undefined,
    }
}

fn mul(input: Scalar, factor: i64) -> Scalar {
    match input {
        Scalar::Int(value) => Scalar::Int(value.wrapping_mul(factor)),
        Scalar::Float(value) => Scalar::Float(value * factor as f64),
        Scalar::Bool(flag) => Scalar::Int(i64::from(flag).wrapping_mul(factor)),
        Scalar::Text(text) => Scalar::Int(text_length(&text).wrapping_mul(factor)),
        Scalar::Undefined => Scalar::Undefined,
    }
}

fn negate(input: Scalar) -> Scalar {
    match input {
        Scalar::Int(value) => Scalar::Int(value.wrapping_neg()),
        Scalar::Float(value) => Scalar::Float(-value),
        Scalar::Bool(flag) => Scalar::Bool(!flag),
        Scalar::Text(text) => Scalar::Text(text.chars().rev().collect()),
        Scalar::Undefined => Scalar::Undefined,
    }
}

fn stringify(input: Scalar) -> Scalar {
    match input {
        Scalar::Undefined => Scalar::Undefined,
        other => Scalar::Text(other.to_string()),
    }
}

fn sqrt(input: Scalar) -> Scalar {
    match input {
        Scalar::Int(value) => Scalar::Float((value as f64).sqrt()),
        Scalar::Float(value) => Scalar::Float(value.sqrt()),
        Scalar::Bool(flag) => Scalar::Float(f64::from(flag)),
        Scalar::Text(text) => Scalar::Float((text.len() as f64).sqrt()),
        Scalar::Undefined => Scalar::Undefined,
    }
}

/// Arbitrary scalars. Floats are drawn from a finite range (no NaN at
/// generation time; NaN only ever arises from computation).
pub fn scalars() -> impl Strategy<Value = Scalar> {
    prop_oneof![
        4 => any::<i64>().prop_map(Scalar::Int),
        3 => (-1.0e9..1.0e9f64).prop_map(Scalar::Float),
        3 => "[a-z0-9]{0,8}".prop_map(Scalar::Text),
        2 => any::<bool>().prop_map(Scalar::Bool),
        1 => Just(Scalar::Undefined),
    ]
}

/// Arbitrary unary function descriptions.
pub fn fn_specs() -> impl Strategy<Value = FnSpec> {
    prop_oneof![
        scalars().prop_map(FnSpec::Const),
        any::<i64>().prop_map(FnSpec::Add),
        any::<i64>().prop_map(FnSpec::Mul),
        Just(FnSpec::Negate),
        Just(FnSpec::Stringify),
        Just(FnSpec::Sqrt),
    ]
}

/// Arbitrary containers: scalar payloads, plus occasional function
/// payloads already routed through the determinizer.
pub fn containers() -> impl Strategy<Value = Identity> {
    prop_oneof![
        3 => scalars().prop_map(|scalar| Identity::unit(scalar)),
        1 => fn_specs().prop_map(|spec| {
            Identity::unit(DeterministicFn::new(spec.build()).func_value())
        }),
    ]
}

/// Probe inputs for the equality oracle, drawn from [`PROBE_RANGE`].
pub fn probes() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(PROBE_RANGE, PROBE_COUNT)
}
