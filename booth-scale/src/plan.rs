// SPDX-License-Identifier: MIT
//! # Scaling Plan Computation
//!
//! Pure, allocation-free computation of output dimensions for the share
//! downscale. The share pipeline shrinks the keepsake to at most 400×600
//! before embedding it in a QR payload; sizing decisions live here and
//! must stay stable across builds so the same photo keeps producing the
//! same payload.
//!
//! ## Sizing Rules
//!
//! - Aspect ratio is always preserved; the non-constrained side is derived
//!   by rounding to the nearest integer.
//! - No upscaling: an image already inside the bound is left unchanged.
//! - The constraint is chosen by the input's orientation (`w > h` → width
//!   bound, otherwise height bound), never by which bound is exceeded. A
//!   very wide but short image is therefore only ever clamped by width,
//!   and a landscape image inside the width bound passes through even when
//!   taller than `max_h`. Downstream consumers depend on these exact
//!   dimensions; do not rebalance the branch.

/// Represents a 2D size with width and height in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub w: u32,
    pub h: u32,
}

/// Bounding box the output must fit (subject to the orientation rule above).
#[derive(Clone, Copy, Debug)]
pub struct Bounds {
    pub max_w: u32,
    pub max_h: u32,
}

/// Complete scaling plan computed from input parameters.
/// Contains all information needed to perform the actual scaling operation.
#[derive(Clone, Copy, Debug)]
pub struct ScalePlan {
    /// Original input dimensions
    pub input: Size,
    /// Bounding box used for planning
    pub bounds: Bounds,
    /// Final computed output dimensions
    pub out: Size,
}

impl ScalePlan {
    /// True when the plan leaves the image untouched (already within the
    /// active bound, or orientation exempted it).
    pub fn is_noop(&self) -> bool {
        self.out == self.input
    }
}

/// Compute the output dimensions for an input and a bounding box.
///
/// # Arguments
/// * `input` - Source image dimensions
/// * `bounds` - Maximum width/height the output should fit
///
/// # Returns
/// A [`ScalePlan`] carrying the derived output dimensions.
pub fn build_plan(input: Size, bounds: Bounds) -> ScalePlan {
    let (w, h) = (input.w, input.h);
    // Orientation picks the branch; the other bound is never consulted.
    let out = if w > h {
        if w > bounds.max_w {
            let scale = bounds.max_w as f64 / w as f64;
            Size {
                w: bounds.max_w,
                h: (h as f64 * scale).round() as u32,
            }
        } else {
            input
        }
    } else if h > bounds.max_h {
        let scale = bounds.max_h as f64 / h as f64;
        Size {
            w: (w as f64 * scale).round() as u32,
            h: bounds.max_h,
        }
    } else {
        input
    };

    ScalePlan { input, bounds, out }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHARE_BOUNDS: Bounds = Bounds {
        max_w: 400,
        max_h: 600,
    };

    #[test]
    fn test_landscape_clamped_by_width() {
        let plan = build_plan(Size { w: 800, h: 600 }, SHARE_BOUNDS);
        assert_eq!(plan.out, Size { w: 400, h: 300 });
    }

    #[test]
    fn test_portrait_clamped_by_height() {
        let plan = build_plan(Size { w: 640, h: 960 }, SHARE_BOUNDS);
        assert_eq!(plan.out, Size { w: 400, h: 600 });
    }

    #[test]
    fn test_derived_side_rounds_to_nearest() {
        // 1000x333 -> scale 0.4 -> 133.2 rounds down
        let plan = build_plan(Size { w: 1000, h: 333 }, SHARE_BOUNDS);
        assert_eq!(plan.out, Size { w: 400, h: 133 });
        // 1000x334 -> 133.6 rounds up
        let plan = build_plan(Size { w: 1000, h: 334 }, SHARE_BOUNDS);
        assert_eq!(plan.out, Size { w: 400, h: 134 });
    }

    #[test]
    fn test_no_upscaling_within_bounds() {
        let input = Size { w: 300, h: 200 };
        let plan = build_plan(input, SHARE_BOUNDS);
        assert!(plan.is_noop());
        assert_eq!(plan.out, input);
    }

    #[test]
    fn test_square_takes_height_branch() {
        // w == h is "not wider than tall", so the height bound applies.
        let plan = build_plan(Size { w: 900, h: 900 }, SHARE_BOUNDS);
        assert_eq!(plan.out, Size { w: 600, h: 600 });
    }

    #[test]
    fn test_orientation_asymmetry_is_preserved() {
        // Landscape within the width bound passes through untouched even
        // though it exceeds max_h. The height bound is never consulted on
        // the w > h branch.
        let bounds = Bounds {
            max_w: 400,
            max_h: 100,
        };
        let plan = build_plan(Size { w: 300, h: 200 }, bounds);
        assert!(plan.is_noop());
    }

    #[test]
    fn test_very_wide_short_image_only_width_clamped() {
        let plan = build_plan(Size { w: 2000, h: 120 }, SHARE_BOUNDS);
        assert_eq!(plan.out, Size { w: 400, h: 24 });
    }
}
