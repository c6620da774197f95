//! # lawful
//!
//! A minimal algebraic container library together with a property-based
//! harness that verifies the container obeys the classical functor,
//! applicative, and monad laws.
//!
//! ## Overview
//!
//! The crate has three layers:
//!
//! - **Value domain** ([`value`]): the tagged union of payloads a container
//!   may hold — primitive scalars or unary functions over the same domain.
//! - **Containers** ([`container`]): the [`Monad`](container::Monad)
//!   capability contract (`unit`, `map`, `apply`, `bind`) and the
//!   [`Identity`](container::Identity) reference implementation.
//! - **Verification** ([`check`]): the function determinizer, the sampling
//!   equality oracle, proptest strategies for the value domain, and the law
//!   verification engine itself.
//!
//! ## Example
//!
//! ```rust
//! use lawful::container::{Identity, Monad};
//! use lawful::value::{FuncValue, Scalar};
//!
//! let five = Identity::unit(Scalar::Int(5));
//! let six = five.map(FuncValue::new(|scalar| match scalar {
//!     Scalar::Int(n) => Scalar::Int(n + 1),
//!     other => other,
//! }));
//! assert_eq!(six.as_inner().as_scalar(), Some(&Scalar::Int(6)));
//! ```
//!
//! Running the whole law suite:
//!
//! ```rust
//! use lawful::check::{verify_all, CheckConfig};
//!
//! let config = CheckConfig { cases: 8, seed: Some(7) };
//! assert!(verify_all(&config).iter().all(|report| report.passed()));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use lawful::prelude::*;
/// ```
pub mod prelude {
    pub use crate::check::{
        CheckConfig, DeterministicFn, Equivalence, GroupReport, KleisliFn, LawGroup, LawViolation,
        verify_all, verify_group,
    };
    pub use crate::container::{Identity, Monad, NotCallableError};
    pub use crate::value::{FuncValue, Scalar, Value};
}

pub mod check;
pub mod container;
pub mod value;
