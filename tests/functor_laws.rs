//! Property-based tests for the functor laws.
//!
//! - **Identity Law**: `m.map(id) == m`
//! - **Composition Law**: `m.map(g then f) == m.map(g).map(f)`
//!
//! Equality goes through the sampling oracle, so both laws are exercised
//! for function payloads as well as scalars. Note the oracle's function
//! comparison is a statistical approximation (a fixed set of probe
//! inputs), so a false positive is possible in principle; the probe
//! inputs are generated alongside each case to keep runs reproducible.

use lawful::check::strategy::{containers, fn_specs, probes};
use lawful::check::{DeterministicFn, Equivalence};
use lawful::container::{Identity, Monad};
use lawful::value::{FuncValue, Scalar};
use proptest::prelude::*;

proptest! {
    /// Identity Law: mapping the identity transformation preserves the
    /// container, whatever shape its payload has.
    #[test]
    fn prop_map_identity_preserves_container(
        container in containers(),
        probe_inputs in probes(),
    ) {
        let oracle = Equivalence::new(probe_inputs);
        let mapped = container.clone().map(FuncValue::identity());
        prop_assert!(oracle.equivalent(&mapped, &container));
    }

    /// Composition Law: mapping a composed transformation equals mapping
    /// the inner function and then the outer one.
    #[test]
    fn prop_map_distributes_over_composition(
        integer in any::<i64>(),
        f_spec in fn_specs(),
        g_spec in fn_specs(),
        probe_inputs in probes(),
    ) {
        let oracle = Equivalence::new(probe_inputs);
        let f = DeterministicFn::new(f_spec.build());
        let g = DeterministicFn::new(g_spec.build());
        let composed = g.func_value().pipe(f.func_value());

        let container = Identity::unit(Scalar::Int(integer));
        let left = container.clone().map(composed);
        let right = container.map(g.func_value()).map(f.func_value());

        prop_assert!(oracle.equivalent(&left, &right));
    }

    /// Composition also holds when the payload is itself a function:
    /// both sides then wrap composed functions, compared by sampling.
    #[test]
    fn prop_composition_over_function_payloads(
        base_spec in fn_specs(),
        f_spec in fn_specs(),
        g_spec in fn_specs(),
        probe_inputs in probes(),
    ) {
        let oracle = Equivalence::new(probe_inputs);
        let base = DeterministicFn::new(base_spec.build());
        let f = DeterministicFn::new(f_spec.build());
        let g = DeterministicFn::new(g_spec.build());
        let composed = g.func_value().pipe(f.func_value());

        let container = Identity::unit(base.func_value());
        let left = container.clone().map(composed);
        let right = container.map(g.func_value()).map(f.func_value());

        prop_assert!(oracle.equivalent(&left, &right));
    }
}

#[test]
fn mapping_increment_over_five_gives_six() {
    let increment = FuncValue::new(|scalar| match scalar {
        Scalar::Int(n) => Scalar::Int(n + 1),
        other => other,
    });
    let mapped = Identity::unit(Scalar::Int(5)).map(increment);

    assert_eq!(mapped.as_inner().as_scalar(), Some(&Scalar::Int(6)));
    let oracle = Equivalence::default();
    assert!(oracle.equivalent(&mapped, &Identity::unit(Scalar::Int(6))));
}

#[test]
fn mapping_over_a_function_payload_composes_inner_first() {
    let increment = FuncValue::new(|scalar| match scalar {
        Scalar::Int(n) => Scalar::Int(n + 1),
        other => other,
    });
    let double = FuncValue::new(|scalar| match scalar {
        Scalar::Int(n) => Scalar::Int(n * 2),
        other => other,
    });

    let composed = Identity::unit(increment).map(double);
    let payload = composed
        .as_inner()
        .as_function()
        .expect("function payload survives map");

    // Inner function first, outer second: (3 + 1) * 2 = 8.
    assert_eq!(payload.call(Scalar::Int(3)), Scalar::Int(8));
}
