//! Monad capability contract - the four operations every container variant
//! must supply consistently with the algebraic laws.
//!
//! The contract is a single trait, [`Monad`], over containers holding one
//! [`Value`]. Construction is the `From<Value>` supertrait; a variant only
//! implements payload access. `map`, `apply`, and `bind` are provided
//! methods because their semantics are fixed by the contract, not by the
//! variant:
//!
//! - `map` transforms a scalar payload directly and composes onto a
//!   function payload instead of collapsing it early.
//! - `apply` is `map` with the function taken from another container, and
//!   is the one fallible operation: the receiver's payload must be a
//!   function.
//! - `bind` hands the bare payload to a continuation that decides the new
//!   container's shape; the framework adds no wrapping of its own.
//!
//! # Laws
//!
//! Every implementation must satisfy:
//!
//! ```text
//! m.map(id)                    == m                          (functor identity)
//! m.map(g then f)              == m.map(g).map(f)            (functor composition)
//! unit(id).apply(m)            == m                          (applicative identity)
//! unit(f).apply(unit(a))       == unit(f(a))                 (applicative homomorphism)
//! unit(a).bind(f)              == f(a)                       (monad left identity)
//! m.bind(unit)                 == m                          (monad right identity)
//! m.bind(f).bind(g)            == m.bind(|x| f(x).bind(g))   (monad associativity)
//! ```
//!
//! The engine in [`crate::check::laws`] verifies all of these for
//! [`Identity`](super::Identity) over generated inputs.

use std::fmt;

use crate::value::{FuncValue, Value};

/// The error returned when `apply` is invoked on a non-function payload.
///
/// This is a contract violation, not a recoverable condition: the caller
/// lifted something that is not a function and asked for it to be applied.
///
/// # Examples
///
/// ```rust
/// use lawful::container::{Identity, Monad};
/// use lawful::value::Scalar;
///
/// let not_a_function = Identity::unit(Scalar::Int(1));
/// let argument = Identity::unit(Scalar::Int(2));
/// let error = not_a_function.apply(argument).unwrap_err();
/// assert_eq!(
///     error.to_string(),
///     "apply: expected a function payload, found integer"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotCallableError {
    /// The operation that required a function payload.
    pub operation: &'static str,
    /// The kind of payload that was found instead.
    pub found: &'static str,
}

impl fmt::Display for NotCallableError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}: expected a function payload, found {}",
            self.operation, self.found
        )
    }
}

impl std::error::Error for NotCallableError {}

/// The algebraic container contract: `unit`, `map`, `apply`, `bind`.
///
/// A variant holds exactly one [`Value`] and supplies payload access
/// through [`value`](Monad::value) and [`into_value`](Monad::into_value).
/// Operations always produce fresh containers; nothing is mutated.
///
/// # Examples
///
/// ```rust
/// use lawful::container::{Identity, Monad};
/// use lawful::value::{Scalar, Value};
///
/// let doubled = Identity::unit(Scalar::Int(5))
///     .bind(|value| match value {
///         Value::Scalar(Scalar::Int(n)) => Identity::unit(Scalar::Int(n * 2)),
///         other => Identity::unit(other),
///     });
/// assert_eq!(doubled.as_inner().as_scalar(), Some(&Scalar::Int(10)));
/// ```
pub trait Monad: Sized + Clone + From<Value> {
    /// Borrows the wrapped payload.
    fn value(&self) -> &Value;

    /// Consumes the container and returns the wrapped payload.
    fn into_value(self) -> Value;

    /// Lifts a value into the container.
    ///
    /// Accepts anything convertible into the container. Passing an
    /// existing container of the same type returns it unchanged (the
    /// blanket `From<T> for T` conversion), so `unit` never double-wraps.
    /// `unit` never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::container::{Identity, Monad};
    /// use lawful::value::Scalar;
    ///
    /// let once = Identity::unit(Scalar::Int(1));
    /// let twice = Identity::unit(once.clone());
    /// assert_eq!(twice.as_inner().as_scalar(), Some(&Scalar::Int(1)));
    /// ```
    fn unit(value: impl Into<Self>) -> Self {
        value.into()
    }

    /// Applies a function to the payload, composing onto function payloads.
    ///
    /// A scalar payload is transformed and rewrapped. A function payload
    /// `g` becomes `g.pipe(function)`: invoking the new payload runs the
    /// original function first and `function` on its result, so mapping
    /// over containers-of-functions composes instead of collapsing early.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::container::{Identity, Monad};
    /// use lawful::value::{FuncValue, Scalar};
    ///
    /// let increment = FuncValue::new(|scalar| match scalar {
    ///     Scalar::Int(n) => Scalar::Int(n + 1),
    ///     other => other,
    /// });
    /// let double = FuncValue::new(|scalar| match scalar {
    ///     Scalar::Int(n) => Scalar::Int(n * 2),
    ///     other => other,
    /// });
    ///
    /// // Scalar payload: applied directly.
    /// let six = Identity::unit(Scalar::Int(5)).map(increment.clone());
    /// assert_eq!(six.as_inner().as_scalar(), Some(&Scalar::Int(6)));
    ///
    /// // Function payload: composed, inner function first.
    /// let composed = Identity::unit(increment).map(double);
    /// let payload = composed.as_inner().as_function().unwrap();
    /// assert_eq!(payload.call(Scalar::Int(3)), Scalar::Int(8));
    /// ```
    #[must_use]
    fn map(self, function: FuncValue) -> Self {
        match self.into_value() {
            Value::Scalar(scalar) => Self::from(Value::Scalar(function.call(scalar))),
            Value::Function(inner) => Self::from(Value::Function(inner.pipe(function))),
        }
    }

    /// Applies a lifted function to a lifted value.
    ///
    /// The receiver's payload must be a function; the operation is then
    /// `lifted.map(that function)`.
    ///
    /// # Errors
    ///
    /// Returns [`NotCallableError`] if the receiver's payload is not a
    /// function. This is a contract violation and is never recovered.
    fn apply(self, lifted: Self) -> Result<Self, NotCallableError> {
        match self.into_value() {
            Value::Function(function) => Ok(lifted.map(function)),
            Value::Scalar(scalar) => Err(NotCallableError {
                operation: "apply",
                found: scalar.kind(),
            }),
        }
    }

    /// Hands the bare payload to `function` and returns its result as-is.
    ///
    /// No additional wrapping happens: the continuation decides the new
    /// container's shape. This is what distinguishes `bind` from `map`.
    #[must_use]
    fn bind<F>(self, function: F) -> Self
    where
        F: FnOnce(Value) -> Self,
    {
        function(self.into_value())
    }
}
