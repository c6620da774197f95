//! Scalar payloads - the primitive members of the value domain.
//!
//! A [`Scalar`] is one of the flat values a container can hold: text, an
//! integer, a float, a boolean, or the canonical undefined sentinel. The
//! sentinel stands in for any numeric result that came out as NaN: since
//! `NaN != NaN` under IEEE equality, leaving NaN in a payload would make
//! every downstream equality check fail spuriously. The determinizer in
//! [`crate::check`] replaces NaN with [`Scalar::Undefined`] before any
//! comparison happens, and two sentinels always compare equal.

use std::fmt;

/// A primitive value in the container domain.
///
/// Equality is standard structural equality with one extra rule: two
/// [`Scalar::Undefined`] sentinels are equal to each other. Float equality
/// is exact IEEE equality; NaN is expected to be normalized to
/// [`Scalar::Undefined`] before a comparison (see
/// [`Scalar::undefined_if_nan`]).
///
/// # Examples
///
/// ```rust
/// use lawful::value::Scalar;
///
/// assert_eq!(Scalar::Int(5), Scalar::Int(5));
/// assert_eq!(Scalar::Undefined, Scalar::Undefined);
/// assert_ne!(Scalar::Int(5), Scalar::Bool(true));
/// ```
#[derive(Debug, Clone)]
pub enum Scalar {
    /// A text value.
    Text(String),
    /// A signed integer.
    Int(i64),
    /// A floating-point number. Generated floats exclude NaN; computed
    /// NaN results are normalized to [`Scalar::Undefined`].
    Float(f64),
    /// A boolean.
    Bool(bool),
    /// The canonical sentinel substituted for indeterminate (NaN-valued)
    /// numeric results.
    Undefined,
}

impl Scalar {
    /// Returns a short name for the scalar's kind, used in error messages.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::value::Scalar;
    ///
    /// assert_eq!(Scalar::Int(1).kind(), "integer");
    /// assert_eq!(Scalar::Undefined.kind(), "undefined");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Bool(_) => "boolean",
            Self::Undefined => "undefined",
        }
    }

    /// Returns `true` if the scalar is a NaN-valued float.
    #[must_use]
    pub const fn is_nan(&self) -> bool {
        matches!(self, Self::Float(value) if value.is_nan())
    }

    /// Normalizes a NaN-valued float to the [`Scalar::Undefined`] sentinel.
    ///
    /// Any other scalar passes through unchanged. This is the rule that
    /// keeps equality well-defined for computed numeric results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::value::Scalar;
    ///
    /// assert_eq!(Scalar::Float(f64::NAN).undefined_if_nan(), Scalar::Undefined);
    /// assert_eq!(Scalar::Float(1.5).undefined_if_nan(), Scalar::Float(1.5));
    /// assert_eq!(Scalar::Int(3).undefined_if_nan(), Scalar::Int(3));
    /// ```
    #[must_use]
    pub fn undefined_if_nan(self) -> Self {
        if self.is_nan() { Self::Undefined } else { self }
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Text(left), Self::Text(right)) => left == right,
            (Self::Int(left), Self::Int(right)) => left == right,
            (Self::Float(left), Self::Float(right)) => left == right,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Undefined, Self::Undefined) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(formatter, "{text:?}"),
            Self::Int(value) => write!(formatter, "{value}"),
            Self::Float(value) => write!(formatter, "{value}"),
            Self::Bool(value) => write!(formatter, "{value}"),
            Self::Undefined => formatter.write_str("undefined"),
        }
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}
