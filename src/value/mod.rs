//! The value domain - what a container may hold.
//!
//! A [`Value`] is a tagged union of the two payload shapes the containers
//! in this crate admit: a primitive [`Scalar`] or a unary [`FuncValue`]
//! over the scalar domain. No other shapes exist. Container operations
//! dispatch by pattern matching on this tag, never by runtime type
//! inspection.

mod function;
mod scalar;

pub use function::FuncValue;
pub use scalar::Scalar;

/// A container payload: either a primitive scalar or a unary function.
///
/// `Value` deliberately does not implement `PartialEq`. Observational
/// equality of function payloads is undecidable and is approximated by
/// sampling, which needs explicit probe configuration; all container
/// equality therefore flows through [`crate::check::Equivalence`].
///
/// # Examples
///
/// ```rust
/// use lawful::value::{FuncValue, Scalar, Value};
///
/// let scalar = Value::Scalar(Scalar::Int(5));
/// assert_eq!(scalar.as_scalar(), Some(&Scalar::Int(5)));
/// assert!(!scalar.is_function());
///
/// let function = Value::Function(FuncValue::identity());
/// assert!(function.is_function());
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// A primitive scalar payload.
    Scalar(Scalar),
    /// A unary function payload over the scalar domain.
    Function(FuncValue),
}

impl Value {
    /// Returns a short name for the payload's kind, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Scalar(scalar) => scalar.kind(),
            Self::Function(_) => "function",
        }
    }

    /// Returns the scalar payload, if this value is scalar-shaped.
    #[must_use]
    pub const fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(scalar) => Some(scalar),
            Self::Function(_) => None,
        }
    }

    /// Returns the function payload, if this value is function-shaped.
    #[must_use]
    pub const fn as_function(&self) -> Option<&FuncValue> {
        match self {
            Self::Function(function) => Some(function),
            Self::Scalar(_) => None,
        }
    }

    /// Returns `true` if the payload is function-shaped.
    #[must_use]
    pub const fn is_function(&self) -> bool {
        matches!(self, Self::Function(_))
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        Self::Scalar(scalar)
    }
}

impl From<FuncValue> for Value {
    fn from(function: FuncValue) -> Self {
        Self::Function(function)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Scalar(Scalar::Int(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Scalar(Scalar::Float(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Scalar(Scalar::Bool(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Scalar(Scalar::Text(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Scalar(Scalar::from(value))
    }
}

// Function payloads are reference-counted, so values never cross threads.
static_assertions::assert_not_impl_any!(Value: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn scalar_accessors() {
        let value = Value::from(5i64);
        assert_eq!(value.as_scalar(), Some(&Scalar::Int(5)));
        assert!(value.as_function().is_none());
        assert!(!value.is_function());
        assert_eq!(value.kind(), "integer");
    }

    #[rstest]
    fn function_accessors() {
        let value = Value::Function(FuncValue::identity());
        assert!(value.as_scalar().is_none());
        assert!(value.as_function().is_some());
        assert!(value.is_function());
        assert_eq!(value.kind(), "function");
    }

    #[rstest]
    #[case(Value::from("hi"), "text")]
    #[case(Value::from(true), "boolean")]
    #[case(Value::from(2.5f64), "float")]
    #[case(Value::from(String::from("owned")), "text")]
    fn conversions_preserve_kind(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.kind(), expected);
    }
}
