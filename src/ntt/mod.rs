// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Number-theoretic transforms over power-of-two sequences of field elements.
//!
//! Functions in this module transform caller-owned sequences in place using radix-2
//! Cooley-Tukey decimation-in-time butterflies; the runtime complexity is O(`n` log `n`)
//! where `n` is the sequence length. The transforms are generic over the element type, but
//! twiddle factors are always base field elements; transforming a sequence of extension
//! elements multiplies each butterfly operand by a base field twiddle.
//!
//! The `noswap` variants trade the bit-reversal permutation for a precomputed twiddle table:
//! [`forward_noswap`] leaves its output in bit-reversed order, and [`inverse_noswap`] consumes
//! bit-reversed input without applying the final `1/n` scaling. Composing them with
//! [`bitreverse_order`] and [`unscale`] recovers the checked transforms exactly.

use crate::{
    errors::FieldError,
    field::{BaseElement, FieldElement},
};


// CHECKED TRANSFORMS
// ================================================================================================

/// Computes the forward transform of `values` in place.
///
/// The twiddle factor is the primitive root of unity whose order equals the sequence length.
/// An empty sequence is left unchanged.
///
/// # Errors
/// Returns [`FieldError::InvalidLength`] if the sequence length is not a power of two or
/// exceeds $2^{32}$.
///
/// # Examples
/// ```
/// use goldilocks_math::{ntt, BaseElement, FieldError};
///
/// let mut values = [1u64, 4, 0, 0].map(BaseElement::new);
/// let original = values;
///
/// ntt::forward(&mut values)?;
/// ntt::inverse(&mut values)?;
/// assert_eq!(original, values);
/// # Ok::<(), FieldError>(())
/// ```
pub fn forward<E: FieldElement>(values: &mut [E]) -> Result<(), FieldError> {
    let length = values.len();
    if length == 0 {
        return Ok(());
    }
    ensure_valid_length(length)?;

    let omega = BaseElement::primitive_root_of_unity(length as u64)?;
    forward_with_root(values, omega, length.trailing_zeros());
    Ok(())
}

/// Computes the inverse transform of `values` in place.
///
/// Runs the butterflies of [`forward`] with the inverted root of unity and then scales every
/// element by the inverse of the sequence length. An empty sequence is left unchanged.
///
/// # Errors
/// Returns [`FieldError::InvalidLength`] if the sequence length is not a power of two or
/// exceeds $2^{32}$.
pub fn inverse<E: FieldElement>(values: &mut [E]) -> Result<(), FieldError> {
    let length = values.len();
    if length == 0 {
        return Ok(());
    }
    ensure_valid_length(length)?;

    let omega = BaseElement::primitive_root_of_unity(length as u64)?;
    forward_with_root(values, omega.inverse()?, length.trailing_zeros());

    let length_inv = BaseElement::new(length as u64).inverse()?;
    for value in values.iter_mut() {
        *value = value.mul_base(length_inv);
    }
    Ok(())
}

// UNCHECKED TRANSFORM
// ================================================================================================

/// Transforms `values` in place using the provided root of unity; no validation is performed.
///
/// `root` must be a primitive root of unity of order `values.len()` and `log2_len` must be the
/// base-2 logarithm of `values.len()`. Passing an inverted root computes the inverse transform
/// without the final `1/n` scaling.
pub fn forward_with_root<E: FieldElement>(values: &mut [E], root: BaseElement, log2_len: u32) {
    debug_assert_eq!(values.len(), 1 << log2_len);
    bitreverse_order(values);
    butterflies(values, root, log2_len);
}

// NOSWAP TRANSFORMS
// ================================================================================================

/// Computes the forward transform of `values` in place, leaving the output in bit-reversed
/// order.
///
/// Butterflies read from a precomputed table of `values.len() / 2` twiddles stored in
/// bit-reversed order, and the final permutation of [`forward`] is skipped; applying
/// [`bitreverse_order`] to the output restores it.
///
/// # Errors
/// Returns [`FieldError::InvalidLength`] if the sequence length is not a power of two or
/// exceeds $2^{32}$.
pub fn forward_noswap<E: FieldElement>(values: &mut [E]) -> Result<(), FieldError> {
    let length = values.len();
    if length == 0 {
        return Ok(());
    }
    ensure_valid_length(length)?;

    let omega = BaseElement::primitive_root_of_unity(length as u64)?;
    let log2_len = length.trailing_zeros();

    // twiddle i lands at the reversal of i over log2(n) - 1 bits
    let mut twiddles = vec![BaseElement::ZERO; length / 2];
    let mut power = BaseElement::ONE;
    for i in 0..length / 2 {
        twiddles[bitreverse(i, log2_len.saturating_sub(1))] = power;
        power *= omega;
    }

    let mut m = 1;
    let mut t = length;
    while m < length {
        t >>= 1;
        for i in 0..m {
            let offset = i * t * 2;
            for j in offset..offset + t {
                let u = values[j];
                let v = values[j + t].mul_base(twiddles[i]);
                values[j] = u + v;
                values[j + t] = u - v;
            }
        }
        m *= 2;
    }
    Ok(())
}

/// Computes the unscaled inverse transform of a bit-reversed sequence, in place.
///
/// The input is assumed to be in bit-reversed order and the output is produced in natural
/// order, but it is not scaled by the inverse of the sequence length; call [`unscale`]
/// afterwards for full equivalence with [`inverse`].
///
/// # Errors
/// Returns [`FieldError::InvalidLength`] if the sequence length is not a power of two or
/// exceeds $2^{32}$.
pub fn inverse_noswap<E: FieldElement>(values: &mut [E]) -> Result<(), FieldError> {
    let length = values.len();
    if length == 0 {
        return Ok(());
    }
    ensure_valid_length(length)?;

    let omega = BaseElement::primitive_root_of_unity(length as u64)?;
    butterflies(values, omega.inverse()?, length.trailing_zeros());
    Ok(())
}

// SCALING AND PERMUTATION
// ================================================================================================

/// Multiplies every element of `values` by the inverse of the sequence length. An empty
/// sequence is left unchanged.
///
/// # Errors
/// Returns [`FieldError::InverseOfZero`] if the sequence length reduces to zero in the field.
pub fn unscale(values: &mut [BaseElement]) -> Result<(), FieldError> {
    if values.is_empty() {
        return Ok(());
    }

    let length_inv = BaseElement::new(values.len() as u64).inverse()?;
    for value in values.iter_mut() {
        *value *= length_inv;
    }
    Ok(())
}

/// Reorders `values` in place, moving the element at index `i` to the index obtained by
/// reversing the low `ceil(log2(n))` bits of `i`.
///
/// Callers are expected to pass sequences of power-of-two length; for other lengths the
/// resulting order is unspecified.
pub fn bitreverse_order<E>(values: &mut [E]) {
    let length = values.len();
    if length == 0 {
        return;
    }

    let bits = usize::BITS - (length - 1).leading_zeros();
    for i in 0..length {
        let reversed = bitreverse(i, bits);
        if i < reversed {
            values.swap(i, reversed);
        }
    }
}

// HELPER FUNCTIONS
// ================================================================================================

/// Runs log2_len stages of radix-2 decimation-in-time butterflies; expects input in
/// bit-reversed order and produces output in natural order.
fn butterflies<E: FieldElement>(values: &mut [E], root: BaseElement, log2_len: u32) {
    let length = values.len();

    let mut m = 1;
    for _ in 0..log2_len {
        let w_m = root.mod_pow_u64((length / (2 * m)) as u64);
        let mut k = 0;
        while k < length {
            let mut w = BaseElement::ONE;
            for j in 0..m {
                let u = values[k + j];
                let v = values[k + j + m].mul_base(w);
                values[k + j] = u + v;
                values[k + j + m] = u - v;
                w *= w_m;
            }
            k += 2 * m;
        }
        m *= 2;
    }
}

fn ensure_valid_length(length: usize) -> Result<(), FieldError> {
    if !length.is_power_of_two() || length as u64 > 1 << 32 {
        return Err(FieldError::InvalidLength(length));
    }
    Ok(())
}

fn bitreverse(index: usize, bits: u32) -> usize {
    let mut index = index;
    let mut reversed = 0;
    for _ in 0..bits {
        reversed = (reversed << 1) | (index & 1);
        index >>= 1;
    }
    reversed
}
