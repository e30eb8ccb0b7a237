// Copyright 2025 the Tweak Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Errors raised while configuring a [`NumberProperty`](crate::NumberProperty).
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum PropertyError {
    /// A range bound was NaN or infinite.
    #[error("range bound {0} is not finite")]
    NonFiniteBound(f64),
    /// The minimum was greater than the maximum.
    #[error("minimum {min} exceeds maximum {max}")]
    InvertedRange {
        /// Requested minimum.
        min: f64,
        /// Requested maximum.
        max: f64,
    },
    /// The step was not a finite, strictly positive number.
    #[error("step {0} must be finite and greater than zero")]
    InvalidStep(f64),
    /// The bound target held a NaN or infinite value.
    #[error("property value {0} is not finite")]
    NonFiniteValue(f64),
}
