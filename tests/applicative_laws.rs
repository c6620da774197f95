//! Property-based tests for the applicative laws.
//!
//! - **Identity Law**: `unit(id).apply(m) == m`
//! - **Homomorphism Law**: `unit(f).apply(unit(a)) == unit(f(a))`
//!
//! The interchange and composition laws are not exercised: with `map`
//! composing onto function payloads, their two sides produce payloads of
//! different shapes (scalar on one side, function on the other), so the
//! equations cannot hold in this container by construction.

use lawful::check::strategy::{containers, fn_specs, probes, scalars};
use lawful::check::{DeterministicFn, Equivalence};
use lawful::container::{Identity, Monad};
use lawful::value::{FuncValue, Scalar};
use proptest::prelude::*;

proptest! {
    /// Identity Law: applying a unit-wrapped identity function changes
    /// nothing, whatever shape the payload has.
    #[test]
    fn prop_apply_identity_preserves_container(
        container in containers(),
        probe_inputs in probes(),
    ) {
        let oracle = Equivalence::new(probe_inputs);
        let applied = Identity::unit(FuncValue::identity())
            .apply(container.clone())
            .expect("identity payload is a function");
        prop_assert!(oracle.equivalent(&applied, &container));
    }

    /// Homomorphism Law: applying a unit-wrapped function to a
    /// unit-wrapped scalar equals unit-wrapping the direct application.
    #[test]
    fn prop_apply_homomorphism(
        scalar in scalars(),
        f_spec in fn_specs(),
        probe_inputs in probes(),
    ) {
        let oracle = Equivalence::new(probe_inputs);
        let f = DeterministicFn::new(f_spec.build());

        let left = Identity::unit(f.func_value())
            .apply(Identity::unit(scalar.clone()))
            .expect("lifted payload is a function");
        let right = Identity::unit(f.call(scalar));

        prop_assert!(oracle.equivalent(&left, &right));
    }

    /// Applying a non-function payload is a contract violation for every
    /// generated scalar.
    #[test]
    fn prop_apply_requires_a_function_payload(
        scalar in scalars(),
        argument in scalars(),
    ) {
        let error = Identity::unit(scalar.clone())
            .apply(Identity::unit(argument))
            .unwrap_err();
        prop_assert_eq!(error.operation, "apply");
        prop_assert_eq!(error.found, scalar.kind());
    }
}

#[test]
fn homomorphism_concrete_case() {
    let double = DeterministicFn::new(FuncValue::new(|scalar| match scalar {
        Scalar::Int(n) => Scalar::Int(n * 2),
        other => other,
    }));

    let left = Identity::unit(double.func_value())
        .apply(Identity::unit(Scalar::Int(21)))
        .expect("lifted payload is a function");
    let right = Identity::unit(double.call(Scalar::Int(21)));

    assert_eq!(left.as_inner().as_scalar(), Some(&Scalar::Int(42)));
    assert!(Equivalence::default().equivalent(&left, &right));
}

#[test]
fn apply_error_message_names_the_payload_kind() {
    let error = Identity::unit(Scalar::Bool(true))
        .apply(Identity::unit(Scalar::Int(1)))
        .unwrap_err();
    assert_eq!(
        error.to_string(),
        "apply: expected a function payload, found boolean"
    );
}
