//! Function payloads - unary functions over the scalar domain.
//!
//! A [`FuncValue`] is the function-shaped member of the value domain: a
//! cheaply clonable wrapper around a unary function from [`Scalar`] to
//! [`Scalar`]. Containers holding a `FuncValue` compose under `map` instead
//! of being applied eagerly, which is what lets containers-of-functions
//! participate in the algebraic laws.

use std::fmt;
use std::rc::Rc;

use super::scalar::Scalar;

/// A unary function over the scalar domain, usable as a container payload.
///
/// Cloning is cheap (the underlying closure is reference-counted) and both
/// clones observe the same function. There is no intrinsic equality for
/// function payloads; the equality oracle in
/// [`crate::check::Equivalence`] approximates it by sampling.
///
/// # Examples
///
/// ```rust
/// use lawful::value::{FuncValue, Scalar};
///
/// let double = FuncValue::new(|scalar| match scalar {
///     Scalar::Int(n) => Scalar::Int(n * 2),
///     other => other,
/// });
/// assert_eq!(double.call(Scalar::Int(21)), Scalar::Int(42));
/// ```
#[derive(Clone)]
pub struct FuncValue {
    run: Rc<dyn Fn(Scalar) -> Scalar>,
}

impl FuncValue {
    /// Wraps a closure as a function payload.
    pub fn new(function: impl Fn(Scalar) -> Scalar + 'static) -> Self {
        Self {
            run: Rc::new(function),
        }
    }

    /// The identity transformation: returns its input unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::value::{FuncValue, Scalar};
    ///
    /// assert_eq!(FuncValue::identity().call(Scalar::Bool(true)), Scalar::Bool(true));
    /// ```
    #[must_use]
    pub fn identity() -> Self {
        Self::new(|input| input)
    }

    /// Applies the function to one input.
    #[must_use]
    pub fn call(&self, input: Scalar) -> Scalar {
        (self.run)(input)
    }

    /// Left-to-right composition: `self` runs first, then `next`.
    ///
    /// This is the composition `map` uses for function payloads: mapping
    /// `f` over a container holding `g` yields a container holding
    /// `g.pipe(f)`, so invoking the result runs the inner function first
    /// and applies `f` to its output.
    ///
    /// # Examples
    ///
    /// ```rust
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
    /// // increment first, then double: (3 + 1) * 2 = 8
    /// let composed = increment.pipe(double);
    /// assert_eq!(composed.call(Scalar::Int(3)), Scalar::Int(8));
    /// ```
    #[must_use]
    pub fn pipe(self, next: Self) -> Self {
        Self::new(move |input| next.call(self.call(input)))
    }
}

impl fmt::Debug for FuncValue {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("FuncValue(<function>)")
    }
}
