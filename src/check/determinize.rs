//! Function determinizer - memoization and NaN scrubbing for generated
//! functions.
//!
//! Law checks evaluate the same generated function on both sides of an
//! equation. A function that answered differently on repeated calls would
//! make the check flaky for reasons unrelated to the laws, so every
//! generated function is wrapped in a [`DeterministicFn`]: a per-check
//! memoization cache that guarantees repeated application with the same
//! input returns the identical output. The wrapper also normalizes
//! NaN-valued float results to [`Scalar::Undefined`], because NaN never
//! equals anything (itself included) and would otherwise fail every
//! equality the law check performs.
//!
//! [`KleisliFn`] is the variant used by the monad laws: it lifts each
//! scrubbed output through `unit`, producing a deterministic
//! `Value -> container` continuation.
//!
//! Caches are scoped to a single law check. Sharing one across checks
//! would leak one assertion's observations into another, so each check
//! constructs fresh wrappers.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::container::Monad;
use crate::value::{FuncValue, Scalar, Value};

/// Cache key for scalar inputs. Floats key by bit pattern so that any
/// exact input bits map to exactly one cached output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum ScalarKey {
    Text(String),
    Int(i64),
    FloatBits(u64),
    Bool(bool),
    Undefined,
}

impl From<&Scalar> for ScalarKey {
    fn from(scalar: &Scalar) -> Self {
        match scalar {
            Scalar::Text(text) => Self::Text(text.clone()),
            Scalar::Int(value) => Self::Int(*value),
            Scalar::Float(value) => Self::FloatBits(value.to_bits()),
            Scalar::Bool(value) => Self::Bool(*value),
            Scalar::Undefined => Self::Undefined,
        }
    }
}

/// A memoizing, NaN-scrubbing wrapper around a function payload.
///
/// Within one wrapper's lifetime, calling with the same input always
/// returns the identical output, and no output is ever a NaN float.
/// Cloning shares the cache, which is what lets the same determinized
/// function appear on both sides of a law equation.
///
/// # Examples
///
/// ```rust
/// use lawful::check::DeterministicFn;
/// use lawful::value::{FuncValue, Scalar};
///
/// let scrubbed = DeterministicFn::new(FuncValue::new(|_| Scalar::Float(f64::NAN)));
/// assert_eq!(scrubbed.call(Scalar::Int(1)), Scalar::Undefined);
/// ```
#[derive(Debug, Clone)]
pub struct DeterministicFn {
    raw: FuncValue,
    cache: Rc<RefCell<HashMap<ScalarKey, Scalar>>>,
}

impl DeterministicFn {
    /// Wraps a raw function payload.
    #[must_use]
    pub fn new(raw: FuncValue) -> Self {
        Self {
            raw,
            cache: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    /// Applies the function, consulting the cache first and scrubbing NaN
    /// results to [`Scalar::Undefined`].
    #[must_use]
    pub fn call(&self, input: Scalar) -> Scalar {
        let key = ScalarKey::from(&input);
        let cached = self.cache.borrow().get(&key).cloned();
        if let Some(hit) = cached {
            return hit;
        }
        let output = self.raw.call(input).undefined_if_nan();
        self.cache.borrow_mut().insert(key, output.clone());
        output
    }

    /// Re-embeds the determinized function as a container payload.
    ///
    /// The returned [`FuncValue`] shares this wrapper's cache.
    #[must_use]
    pub fn func_value(&self) -> FuncValue {
        let this = self.clone();
        FuncValue::new(move |input| this.call(input))
    }
}

/// A deterministic Kleisli continuation: `Value -> container`.
///
/// This is the shape the monad laws need. Each call reduces the input to a
/// scalar (a function-shaped input collapses to [`Scalar::Undefined`], the
/// deterministic total extension of a scalar function to the whole value
/// domain), runs the underlying [`DeterministicFn`], and lifts the
/// scrubbed output through `unit`.
///
/// # Examples
///
/// ```rust
/// use lawful::check::KleisliFn;
/// use lawful::container::{Identity, Monad};
/// use lawful::value::{FuncValue, Scalar, Value};
///
/// let double = KleisliFn::new(FuncValue::new(|scalar| match scalar {
///     Scalar::Int(n) => Scalar::Int(n * 2),
///     other => other,
/// }));
/// let lifted: Identity = double.call(&Value::Scalar(Scalar::Int(5)));
/// assert_eq!(lifted.as_inner().as_scalar(), Some(&Scalar::Int(10)));
/// ```
#[derive(Debug, Clone)]
pub struct KleisliFn {
    inner: DeterministicFn,
}

impl KleisliFn {
    /// Wraps a raw function payload as a deterministic continuation.
    #[must_use]
    pub fn new(raw: FuncValue) -> Self {
        Self {
            inner: DeterministicFn::new(raw),
        }
    }

    /// Applies the continuation, lifting the result into `M`.
    #[must_use]
    pub fn call<M: Monad>(&self, input: &Value) -> M {
        let scalar = match input {
            Value::Scalar(scalar) => scalar.clone(),
            Value::Function(_) => Scalar::Undefined,
        };
        M::unit(Value::Scalar(self.inner.call(scalar)))
    }
}
