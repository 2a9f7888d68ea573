// Copyright 2026 the Temporal Topology Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-axis affine transform: the simplest edge transform in the graph.

use crate::ordinate::Ordinate;

/// `output = scale * input + offset`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AffineTransform1D {
    /// Multiplicative factor.
    pub scale: Ordinate,
    /// Additive offset, applied after scaling.
    pub offset: Ordinate,
}

impl AffineTransform1D {
    /// `output = input` (`scale = 1, offset = 0`).
    pub const IDENTITY: Self = Self {
        scale: Ordinate::ONE,
        offset: Ordinate::ZERO,
    };

    /// Creates a pure translation (`scale = 1`).
    #[must_use]
    pub fn translation(offset: Ordinate) -> Self {
        Self {
            scale: Ordinate::ONE,
            offset,
        }
    }

    /// Applies the transform to a single value.
    #[must_use]
    pub fn apply(self, input: Ordinate) -> Ordinate {
        self.scale * input + self.offset
    }

    /// Returns the inverse transform, such that
    /// `self.invert().apply(self.apply(x)) == x`.
    ///
    /// # Panics
    ///
    /// Panics if `scale` is an exact rational zero (a non-invertible
    /// transform); see [`Ordinate::div`].
    #[must_use]
    pub fn invert(self) -> Self {
        let inv_scale = Ordinate::ONE / self.scale;
        Self {
            scale: inv_scale,
            offset: (self.offset.negate()) * inv_scale,
        }
    }

    /// Composes `self` after `inner`: `(self ∘ inner).apply(x) ==
    /// self.apply(inner.apply(x))`.
    #[must_use]
    pub fn compose(self, inner: Self) -> Self {
        Self {
            scale: self.scale * inner.scale,
            offset: self.scale * inner.offset + self.offset,
        }
    }

    /// Returns `true` if this transform is the identity (`scale == 1`,
    /// `offset == 0`).
    #[must_use]
    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }
}

impl Default for AffineTransform1D {
    fn default() -> Self {
        Self::IDENTITY
    }
}
