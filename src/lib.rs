// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Core numerics for STARK-style proof systems over the Goldilocks prime field.
//!
//! This crate implements three tightly-coupled pieces:
//!
//! * Arithmetic in the 64-bit prime field with modulus $2^{64} - 2^{32} + 1$, with all elements
//!   stored in Montgomery form and reduced via a Montgomery reduction tuned to the shape of
//!   this prime ([`BaseElement`]).
//! * The cubic extension of that field by the irreducible polynomial $x^3 - x + 1$
//!   ([`CubeExtension`]).
//! * In-place number-theoretic transforms over power-of-two sequences of either element type
//!   ([`ntt`]), with twiddle factors always drawn from the base field.

pub mod ntt;
pub mod utils;

mod field;
pub use field::{BaseElement, CubeExtension, FieldElement};

mod errors;
pub use errors::FieldError;

pub use utils::batch_inversion;
