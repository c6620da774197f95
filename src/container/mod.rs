//! Algebraic containers.
//!
//! This module defines the capability contract every container variant
//! must satisfy - [`Monad`], with `unit`, `map`, `apply`, and `bind` - and
//! the one reference variant, [`Identity`]. The laws the contract demands
//! are verified property-based in [`crate::check`].

mod identity;
mod monad;

pub use identity::Identity;
pub use monad::{Monad, NotCallableError};
