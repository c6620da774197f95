//! Law verification: determinizer, equality oracle, generation strategies,
//! and the engine that exercises the functor, applicative, and monad laws.
//!
//! The pieces fit together like this: [`laws`] pulls generated inputs from
//! the strategies in [`strategy`], routes every generated function through
//! [`determinize`] so repeated evaluation is stable and NaN results
//! collapse to the undefined sentinel, builds both sides of each law's
//! equation, and decides equality through [`equivalence`].

pub mod determinize;
pub mod equivalence;
pub mod laws;
pub mod strategy;

pub use determinize::{DeterministicFn, KleisliFn};
pub use equivalence::{DEFAULT_PROBES, Equivalence};
pub use laws::{
    CheckConfig, GroupReport, LawGroup, LawViolation, applicative_laws, functor_laws, monad_laws,
    verify_all, verify_group,
};
