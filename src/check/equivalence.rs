//! Equality oracle - comparing containers whose payload may be a function.
//!
//! Deciding whether two black-box functions are observationally equal is
//! undecidable, so the oracle approximates: when both payloads are
//! functions, it feeds each one the same fixed list of integer probe
//! inputs and declares the containers equal when every probe agrees. This
//! is a statistical approximation with a known false-positive risk - two
//! different functions can agree on all probes - which is why the probe
//! inputs are explicit configuration (generated from the run's seed)
//! rather than hidden ambient randomness, and why there are several of
//! them rather than one.
//!
//! Scalar payloads compare structurally; a function payload never equals
//! a scalar payload.

use crate::container::Monad;
use crate::value::{Scalar, Value};

/// Probe inputs used when no explicit configuration is supplied.
///
/// Values lie in the same `0..100` range the engine draws generated
/// probes from.
pub const DEFAULT_PROBES: [i64; 3] = [0, 17, 83];

/// The equality oracle: compares two containers of the same variant.
///
/// # Examples
///
/// ```rust
/// use lawful::check::Equivalence;
/// use lawful::container::{Identity, Monad};
/// use lawful::value::{FuncValue, Scalar};
///
/// let oracle = Equivalence::default();
///
/// let left = Identity::unit(Scalar::Int(3));
/// let right = Identity::unit(Scalar::Int(3));
/// assert!(oracle.equivalent(&left, &right));
///
/// // Function payloads are compared by sampling.
/// let f = Identity::unit(FuncValue::identity());
/// let g = Identity::unit(FuncValue::identity());
/// assert!(oracle.equivalent(&f, &g));
///
/// // Mixed shapes are never equal.
/// assert!(!oracle.equivalent(&left, &f));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equivalence {
    probes: Vec<i64>,
}

impl Equivalence {
    /// Creates an oracle with explicit probe inputs.
    ///
    /// An empty list falls back to [`DEFAULT_PROBES`]; function
    /// comparison over zero probes would be vacuously true.
    #[must_use]
    pub fn new(probes: Vec<i64>) -> Self {
        if probes.is_empty() {
            Self {
                probes: DEFAULT_PROBES.to_vec(),
            }
        } else {
            Self { probes }
        }
    }

    /// The probe inputs this oracle samples function payloads with.
    #[must_use]
    pub fn probes(&self) -> &[i64] {
        &self.probes
    }

    /// Compares two containers.
    ///
    /// Both payloads functions: equal when the outputs agree on every
    /// probe, each output NaN-normalized first. Both scalars: structural
    /// equality (two undefined sentinels are equal). Mixed: not equal.
    #[must_use]
    pub fn equivalent<M: Monad>(&self, left: &M, right: &M) -> bool {
        match (left.value(), right.value()) {
            (Value::Function(f), Value::Function(g)) => self.probes.iter().all(|&probe| {
                let left_output = f.call(Scalar::Int(probe)).undefined_if_nan();
                let right_output = g.call(Scalar::Int(probe)).undefined_if_nan();
                left_output == right_output
            }),
            (Value::Scalar(a), Value::Scalar(b)) => a == b,
            _ => false,
        }
    }
}

impl Default for Equivalence {
    fn default() -> Self {
        Self::new(DEFAULT_PROBES.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::Identity;
    use crate::value::FuncValue;
    use rstest::rstest;

    fn oracle() -> Equivalence {
        Equivalence::default()
    }

    #[rstest]
    fn scalar_payloads_compare_structurally() {
        assert!(oracle().equivalent(
            &Identity::unit(Scalar::Int(3)),
            &Identity::unit(Scalar::Int(3))
        ));
        assert!(!oracle().equivalent(
            &Identity::unit(Scalar::Int(3)),
            &Identity::unit(Scalar::Int(4))
        ));
    }

    #[rstest]
    fn undefined_sentinels_are_equal() {
        assert!(oracle().equivalent(
            &Identity::unit(Scalar::Undefined),
            &Identity::unit(Scalar::Undefined)
        ));
    }

    #[rstest]
    fn mixed_shapes_are_never_equal() {
        let scalar = Identity::unit(Scalar::Int(1));
        let function = Identity::unit(FuncValue::identity());
        assert!(!oracle().equivalent(&scalar, &function));
        assert!(!oracle().equivalent(&function, &scalar));
    }

    #[rstest]
    fn identical_functions_agree_on_all_probes() {
        let double = |scalar| match scalar {
            Scalar::Int(n) => Scalar::Int(n * 2),
            other => other,
        };
        let left = Identity::unit(FuncValue::new(double));
        let right = Identity::unit(FuncValue::new(double));
        assert!(oracle().equivalent(&left, &right));
    }

    #[rstest]
    fn differing_functions_are_detected() {
        let left = Identity::unit(FuncValue::identity());
        let right = Identity::unit(FuncValue::new(|scalar| match scalar {
            Scalar::Int(n) => Scalar::Int(n + 1),
            other => other,
        }));
        assert!(!oracle().equivalent(&left, &right));
    }

    #[rstest]
    fn nan_outputs_are_normalized_before_comparison() {
        let left = Identity::unit(FuncValue::new(|_| Scalar::Float(f64::NAN)));
        let right = Identity::unit(FuncValue::new(|_| Scalar::Undefined));
        assert!(oracle().equivalent(&left, &right));
    }

    #[rstest]
    fn empty_probe_list_falls_back_to_defaults() {
        let fallback = Equivalence::new(Vec::new());
        assert_eq!(fallback.probes(), DEFAULT_PROBES);
        let left = Identity::unit(FuncValue::identity());
        let right = Identity::unit(FuncValue::new(|scalar| match scalar {
            Scalar::Int(n) => Scalar::Int(n + 1),
            other => other,
        }));
        assert!(!fallback.equivalent(&left, &right));
    }

    #[rstest]
    fn explicit_probes_are_used() {
        // These functions agree everywhere except at 5.
        let left = Identity::unit(FuncValue::identity());
        let right = Identity::unit(FuncValue::new(|scalar| match scalar {
            Scalar::Int(5) => Scalar::Int(-5),
            other => other,
        }));
        assert!(Equivalence::new(vec![1, 2, 3]).equivalent(&left, &right));
        assert!(!Equivalence::new(vec![1, 5]).equivalent(&left, &right));
    }
}
