// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Utility routines for sequences of field elements.

use crate::{errors::FieldError, field::FieldElement};

// BATCH INVERSION
// ================================================================================================

/// Computes multiplicative inverses of all elements of `values` using the batch inversion
/// method.
///
/// The method transforms `n` inversions into `3n` multiplications and a single inversion:
/// partial products are accumulated in one pass, the total product is inverted once, and a
/// second pass walks the sequence backward multiplying the inverses out. An empty sequence
/// yields an empty result.
///
/// # Errors
/// Returns [`FieldError::InverseOfZero`] if any element of `values` is zero.
///
/// # Examples
/// ```
/// use goldilocks_math::{batch_inversion, BaseElement, FieldElement};
///
/// let values = [2u64, 3, 5].map(BaseElement::new);
/// let inverses = batch_inversion(&values).unwrap();
///
/// for (&value, &inverse) in values.iter().zip(inverses.iter()) {
///     assert_eq!(BaseElement::ONE, value * inverse);
/// }
/// ```
pub fn batch_inversion<E: FieldElement>(values: &[E]) -> Result<Vec<E>, FieldError> {
    let mut result = vec![E::ONE; values.len()];

    // first pass: result[i] accumulates the product of all values before index i
    let mut acc = E::ONE;
    for (result, &value) in result.iter_mut().zip(values.iter()) {
        if value.is_zero() {
            return Err(FieldError::InverseOfZero);
        }
        *result = acc;
        acc *= value;
    }

    // a single inversion of the running product
    let mut acc = acc.inverse()?;

    // second pass: peel one element off the inverted product at a time
    for i in (0..values.len()).rev() {
        result[i] *= acc;
        acc *= values[i];
    }

    Ok(result)
}

// TESTS
// ================================================================================================
