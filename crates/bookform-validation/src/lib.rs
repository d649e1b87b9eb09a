//! Bookform Validation Core
//!
//! Pure field rules for the book review form, compatible with both std and
//! no_std environments. Shared by the host-agnostic validator and the WASM
//! browser binding.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod numeric;
pub mod rules;
pub mod text;

#[cfg(feature = "garde")]
pub mod garde_validators;

pub use numeric::*;
pub use rules::*;
pub use text::*;
