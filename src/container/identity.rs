//! Identity container - the reference implementation of the contract.
//!
//! `Identity` wraps a single [`Value`] and adds no structure of its own,
//! which makes it the simplest container that can satisfy the functor,
//! applicative, and monad laws, and the model the verification engine
//! exercises.

use crate::value::{FuncValue, Scalar, Value};

use super::monad::Monad;

/// The identity container - wraps one payload without adding behavior.
///
/// All operations come from the [`Monad`] contract; `Identity` only
/// supplies payload access. Instances are never mutated: every operation
/// produces a fresh container.
///
/// `Identity` has no `PartialEq`: payloads may be functions, whose
/// equality is only approximable by sampling. Compare containers through
/// [`crate::check::Equivalence`].
///
/// # Examples
///
/// ```rust
/// use lawful::container::{Identity, Monad};
/// use lawful::value::{Scalar, Value};
///
/// let wrapped = Identity::unit(Scalar::Int(42));
/// assert_eq!(wrapped.as_inner().as_scalar(), Some(&Scalar::Int(42)));
///
/// // Tuple-struct syntax
/// let direct = Identity(Value::Scalar(Scalar::Bool(true)));
/// assert_eq!(direct.0.kind(), "boolean");
/// ```
#[derive(Debug, Clone)]
pub struct Identity(pub Value);

impl Identity {
    /// Creates a new `Identity` wrapping the given payload.
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    /// Consumes the container and returns the payload.
    #[must_use]
    pub fn into_inner(self) -> Value {
        self.0
    }

    /// Borrows the payload.
    #[must_use]
    pub const fn as_inner(&self) -> &Value {
        &self.0
    }
}

impl Monad for Identity {
    fn value(&self) -> &Value {
        &self.0
    }

    fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for Identity {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

impl From<Scalar> for Identity {
    fn from(scalar: Scalar) -> Self {
        Self::new(Value::Scalar(scalar))
    }
}

impl From<FuncValue> for Identity {
    fn from(function: FuncValue) -> Self {
        Self::new(Value::Function(function))
    }
}

impl From<i64> for Identity {
    fn from(value: i64) -> Self {
        Self::from(Scalar::Int(value))
    }
}

impl From<f64> for Identity {
    fn from(value: f64) -> Self {
        Self::from(Scalar::Float(value))
    }
}

impl From<bool> for Identity {
    fn from(value: bool) -> Self {
        Self::from(Scalar::Bool(value))
    }
}

impl From<String> for Identity {
    fn from(value: String) -> Self {
        Self::from(Scalar::Text(value))
    }
}

impl From<&str> for Identity {
    fn from(value: &str) -> Self {
        Self::from(Scalar::from(value))
    }
}

// Containers are single-threaded by design; the payload's reference
// counting is not atomic.
static_assertions::assert_not_impl_any!(Identity: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn increment() -> FuncValue {
        FuncValue::new(|scalar| match scalar {
            Scalar::Int(n) => Scalar::Int(n + 1),
            other => other,
        })
    }

    #[rstest]
    fn unit_wraps_a_scalar() {
        let wrapped = Identity::unit(Scalar::Int(5));
        assert_eq!(wrapped.as_inner().as_scalar(), Some(&Scalar::Int(5)));
    }

    #[rstest]
    fn unit_is_idempotent_on_existing_containers() {
        let once = Identity::unit(Scalar::Int(5));
        let twice = Identity::unit(once.clone());
        // Still a scalar payload; no nesting occurred.
        assert_eq!(twice.as_inner().as_scalar(), Some(&Scalar::Int(5)));
    }

    #[rstest]
    fn map_transforms_a_scalar_payload() {
        let six = Identity::unit(Scalar::Int(5)).map(increment());
        assert_eq!(six.as_inner().as_scalar(), Some(&Scalar::Int(6)));
    }

    #[rstest]
    fn map_composes_onto_a_function_payload() {
        let double = FuncValue::new(|scalar| match scalar {
            Scalar::Int(n) => Scalar::Int(n * 2),
            other => other,
        });
        let composed = Identity::unit(increment()).map(double);
        let payload = composed.as_inner().as_function().expect("function payload");
        // Inner function first, outer second: (3 + 1) * 2 = 8.
        assert_eq!(payload.call(Scalar::Int(3)), Scalar::Int(8));
    }

    #[rstest]
    fn apply_maps_the_lifted_function() {
        let applied = Identity::unit(increment())
            .apply(Identity::unit(Scalar::Int(5)))
            .expect("function payload");
        assert_eq!(applied.as_inner().as_scalar(), Some(&Scalar::Int(6)));
    }

    #[rstest]
    fn apply_on_a_scalar_payload_is_a_contract_violation() {
        let error = Identity::unit(Scalar::Text("nope".to_string()))
            .apply(Identity::unit(Scalar::Int(5)))
            .unwrap_err();
        assert_eq!(error.operation, "apply");
        assert_eq!(error.found, "text");
    }

    #[rstest]
    fn bind_returns_the_continuation_result_unwrapped() {
        let doubled = Identity::unit(Scalar::Int(5)).bind(|value| match value {
            Value::Scalar(Scalar::Int(n)) => Identity::unit(Scalar::Int(n * 2)),
            other => Identity::unit(other),
        });
        assert_eq!(doubled.as_inner().as_scalar(), Some(&Scalar::Int(10)));
    }

    #[rstest]
    #[case(Identity::from(7i64), "integer")]
    #[case(Identity::from(1.25f64), "float")]
    #[case(Identity::from(true), "boolean")]
    #[case(Identity::from("text"), "text")]
    #[case(Identity::from(String::from("owned")), "text")]
    fn primitive_conversions(#[case] container: Identity, #[case] expected: &str) {
        assert_eq!(container.as_inner().kind(), expected);
    }

    #[rstest]
    fn into_inner_unwraps() {
        let inner = Identity::unit(Scalar::Bool(false)).into_inner();
        assert_eq!(inner.as_scalar(), Some(&Scalar::Bool(false)));
    }
}
