//! Law verification engine.
//!
//! Each law is checked property-based: a proptest [`TestRunner`] generates
//! containers, scalars, function descriptions, and oracle probes, then
//! both sides of the law's equation are constructed and compared through
//! [`Equivalence`]. Every generated function is routed through the
//! determinizer so the two sides observe identical behavior, and each law
//! gets its own runner so a seed reproduces any single law in isolation.
//!
//! Three groups are exercised:
//!
//! - **Functor**: identity and composition.
//! - **Applicative**: identity and homomorphism. The interchange and
//!   composition laws are acknowledged but not exercised: with `map`
//!   composing onto function payloads, `pure ($ y) <*> u` yields a
//!   function-shaped payload while `u <*> pure y` yields a scalar-shaped
//!   one, so those equations cannot hold in this container by
//!   construction.
//! - **Monad**: left identity, right identity, and associativity.
//!
//! A violated law is a hard failure of that check, reported as a
//! [`LawViolation`] naming the law and the minimized counterexample.
//! There is no retry: a violation indicates a genuine defect, not
//! transient state.

use std::fmt;

use proptest::prelude::*;
use proptest::test_runner::{Config, RngAlgorithm, TestCaseError, TestError, TestRng, TestRunner};

use crate::check::determinize::{DeterministicFn, KleisliFn};
use crate::check::equivalence::Equivalence;
use crate::check::strategy::{containers, fn_specs, probes, scalars};
use crate::container::{Identity, Monad};
use crate::value::{FuncValue, Scalar, Value};

/// Configuration for a verification run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckConfig {
    /// Number of generated cases per law check.
    pub cases: u32,
    /// Seed for reproducible generation; `None` runs with fresh entropy.
    pub seed: Option<u64>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            seed: None,
        }
    }
}

/// The three verified law groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LawGroup {
    /// Identity and composition of `map`.
    Functor,
    /// Identity and homomorphism of `apply`.
    Applicative,
    /// Left identity, right identity, and associativity of `bind`.
    Monad,
}

impl LawGroup {
    /// All groups, in verification order.
    pub const ALL: [Self; 3] = [Self::Functor, Self::Applicative, Self::Monad];
}

impl fmt::Display for LawGroup {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Functor => "functor",
            Self::Applicative => "applicative",
            Self::Monad => "monad",
        };
        formatter.write_str(name)
    }
}

/// A law that did not hold, with the inputs that falsified it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LawViolation {
    /// The name of the violated law.
    pub law: &'static str,
    /// The failure reason and the minimized counterexample.
    pub detail: String,
}

impl fmt::Display for LawViolation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} law violated: {}", self.law, self.detail)
    }
}

impl std::error::Error for LawViolation {}

/// The outcome of verifying one law group.
#[derive(Debug)]
pub struct GroupReport {
    /// The group that was verified.
    pub group: LawGroup,
    /// `Ok` when every law in the group held.
    pub outcome: Result<(), LawViolation>,
}

impl GroupReport {
    /// Returns `true` when every law in the group held.
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.outcome.is_ok()
    }
}

fn violation<V: fmt::Debug>(law: &'static str, error: &TestError<V>) -> LawViolation {
    let detail = match error {
        TestError::Fail(reason, input) => format!("{reason} (inputs: {input:?})"),
        TestError::Abort(reason) => format!("generation aborted: {reason}"),
    };
    LawViolation { law, detail }
}

fn build_runner(config: &CheckConfig) -> TestRunner {
    let proptest_config = Config {
        cases: config.cases,
        failure_persistence: None,
        ..Config::default()
    };
    match config.seed {
        Some(seed) => {
            let mut bytes = [0u8; 32];
            for (index, chunk) in bytes.chunks_mut(8).enumerate() {
                chunk.copy_from_slice(&seed.wrapping_add(index as u64).to_le_bytes());
            }
            TestRunner::new_with_rng(
                proptest_config,
                TestRng::from_seed(RngAlgorithm::ChaCha, &bytes),
            )
        }
        None => TestRunner::new(proptest_config),
    }
}

// =============================================================================
// Functor laws
// =============================================================================

/// `map(id) == m` for arbitrary containers, function payloads included.
fn functor_identity(config: &CheckConfig) -> Result<(), LawViolation> {
    build_runner(config)
        .run(&(containers(), probes()), |(container, probe_inputs)| {
            let oracle = Equivalence::new(probe_inputs);
            let mapped = container.clone().map(FuncValue::identity());
            prop_assert!(
                oracle.equivalent(&mapped, &container),
                "map(id) changed the container"
            );
            Ok(())
        })
        .map_err(|error| violation("functor identity", &error))
}

/// `map(g then f) == map(g) then map(f)` over unit-lifted integers.
///
/// Both functions are determinized once and shared across the two sides,
/// so a NaN produced by either collapses identically everywhere.
fn functor_composition(config: &CheckConfig) -> Result<(), LawViolation> {
    build_runner(config)
        .run(
            &(any::<i64>(), fn_specs(), fn_specs(), probes()),
            |(integer, f_spec, g_spec, probe_inputs)| {
                let oracle = Equivalence::new(probe_inputs);
                let f = DeterministicFn::new(f_spec.build());
                let g = DeterministicFn::new(g_spec.build());
                let composed = g.func_value().pipe(f.func_value());

                let container = Identity::unit(Scalar::Int(integer));
                let left = container.clone().map(composed);
                let right = container.map(g.func_value()).map(f.func_value());

                prop_assert!(
                    oracle.equivalent(&left, &right),
                    "map(f . g) diverged from map(g) then map(f)"
                );
                Ok(())
            },
        )
        .map_err(|error| violation("functor composition", &error))
}

/// Verifies the functor group.
///
/// # Errors
///
/// Returns the first [`LawViolation`] encountered.
pub fn functor_laws(config: &CheckConfig) -> Result<(), LawViolation> {
    functor_identity(config)?;
    functor_composition(config)
}

// =============================================================================
// Applicative laws
// =============================================================================

/// `unit(id).apply(m) == m` for arbitrary containers.
fn applicative_identity(config: &CheckConfig) -> Result<(), LawViolation> {
    build_runner(config)
        .run(&(containers(), probes()), |(container, probe_inputs)| {
            let oracle = Equivalence::new(probe_inputs);
            let applied = Identity::unit(FuncValue::identity())
                .apply(container.clone())
                .map_err(|error| TestCaseError::fail(error.to_string()))?;
            prop_assert!(
                oracle.equivalent(&applied, &container),
                "apply(unit(id)) changed the container"
            );
            Ok(())
        })
        .map_err(|error| violation("applicative identity", &error))
}

/// `unit(f).apply(unit(a)) == unit(f(a))` over scalars.
fn applicative_homomorphism(config: &CheckConfig) -> Result<(), LawViolation> {
    build_runner(config)
        .run(
            &(scalars(), fn_specs(), probes()),
            |(scalar, f_spec, probe_inputs)| {
                let oracle = Equivalence::new(probe_inputs);
                let f = DeterministicFn::new(f_spec.build());

                let left = Identity::unit(f.func_value())
                    .apply(Identity::unit(scalar.clone()))
                    .map_err(|error| TestCaseError::fail(error.to_string()))?;
                let right = Identity::unit(f.call(scalar));

                prop_assert!(
                    oracle.equivalent(&left, &right),
                    "apply over unit-wrapped operands diverged from direct application"
                );
                Ok(())
            },
        )
        .map_err(|error| violation("applicative homomorphism", &error))
}

/// Verifies the applicative group.
///
/// # Errors
///
/// Returns the first [`LawViolation`] encountered.
pub fn applicative_laws(config: &CheckConfig) -> Result<(), LawViolation> {
    applicative_identity(config)?;
    applicative_homomorphism(config)
}

// =============================================================================
// Monad laws
// =============================================================================

/// `unit(a).bind(f) == f(a)` over scalars.
fn monad_left_identity(config: &CheckConfig) -> Result<(), LawViolation> {
    build_runner(config)
        .run(
            &(scalars(), fn_specs(), probes()),
            |(scalar, f_spec, probe_inputs)| {
                let oracle = Equivalence::new(probe_inputs);
                let f = KleisliFn::new(f_spec.build());
                let value = Value::Scalar(scalar);

                let left = Identity::unit(value.clone()).bind(|inner| f.call(&inner));
                let right: Identity = f.call(&value);

                prop_assert!(
                    oracle.equivalent(&left, &right),
                    "bind over a unit-wrapped value diverged from direct application"
                );
                Ok(())
            },
        )
        .map_err(|error| violation("monad left identity", &error))
}

/// `m.bind(unit) == m` for arbitrary containers.
fn monad_right_identity(config: &CheckConfig) -> Result<(), LawViolation> {
    build_runner(config)
        .run(&(containers(), probes()), |(container, probe_inputs)| {
            let oracle = Equivalence::new(probe_inputs);
            let bound = container.clone().bind(|value| Identity::unit(value));
            prop_assert!(
                oracle.equivalent(&bound, &container),
                "bind(unit) changed the container"
            );
            Ok(())
        })
        .map_err(|error| violation("monad right identity", &error))
}

/// `m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))` with shared
/// determinized continuations.
fn monad_associativity(config: &CheckConfig) -> Result<(), LawViolation> {
    build_runner(config)
        .run(
            &(containers(), fn_specs(), fn_specs(), probes()),
            |(container, f_spec, g_spec, probe_inputs)| {
                let oracle = Equivalence::new(probe_inputs);
                let f = KleisliFn::new(f_spec.build());
                let g = KleisliFn::new(g_spec.build());

                let left = container
                    .clone()
                    .bind(|value| f.call::<Identity>(&value))
                    .bind(|value| g.call::<Identity>(&value));
                let right = container.bind(|value| {
                    f.call::<Identity>(&value).bind(|inner| g.call::<Identity>(&inner))
                });

                prop_assert!(
                    oracle.equivalent(&left, &right),
                    "sequential binds diverged from the composed continuation"
                );
                Ok(())
            },
        )
        .map_err(|error| violation("monad associativity", &error))
}

/// Verifies the monad group.
///
/// # Errors
///
/// Returns the first [`LawViolation`] encountered.
pub fn monad_laws(config: &CheckConfig) -> Result<(), LawViolation> {
    monad_left_identity(config)?;
    monad_right_identity(config)?;
    monad_associativity(config)
}

// =============================================================================
// Entry points
// =============================================================================

/// Verifies one law group.
///
/// # Errors
///
/// Returns the first [`LawViolation`] encountered in the group.
pub fn verify_group(group: LawGroup, config: &CheckConfig) -> Result<(), LawViolation> {
    match group {
        LawGroup::Functor => functor_laws(config),
        LawGroup::Applicative => applicative_laws(config),
        LawGroup::Monad => monad_laws(config),
    }
}

/// Verifies every law group and reports the outcome of each.
///
/// A failing group does not stop the others: the report always covers all
/// of [`LawGroup::ALL`].
///
/// # Examples
///
/// ```rust
/// use lawful::check::{verify_all, CheckConfig};
///
/// let config = CheckConfig { cases: 8, seed: Some(7) };
/// let reports = verify_all(&config);
/// assert!(reports.iter().all(|report| report.passed()));
/// ```
#[must_use]
pub fn verify_all(config: &CheckConfig) -> Vec<GroupReport> {
    LawGroup::ALL
        .into_iter()
        .map(|group| GroupReport {
            group,
            outcome: verify_group(group, config),
        })
        .collect()
}
