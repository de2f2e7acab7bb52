// SPDX-License-Identifier: MIT
//! # booth-scale: Keepsake Downscaling for Share Payloads
//!
//! This crate provides the scaling path used to shrink a composited keepsake
//! image until it is small enough to travel inside an optically-scannable
//! share payload (an inline `data:` URL embedded in a QR code).
//!
//! ## Architecture Overview
//!
//! The crate is split into two layers:
//! 1. [`plan`]: pure plan computation deciding the output dimensions from
//!    the input dimensions and a bounding box, preserving aspect ratio and
//!    never upscaling
//! 2. [`cpu`]: CPU-based execution using fast_image_resize (SIMD-accelerated),
//!    RGBA8 in → RGBA8 out, writing directly into a caller-provided buffer
//!
//! ## Branch Selection
//!
//! Plan computation picks its constraint by the input's orientation (wider
//! than tall → width-constrained, otherwise height-constrained), not by which
//! bound is actually exceeded. A landscape image that fits the width bound is
//! returned untouched even when it exceeds the height bound. Downstream
//! output parity depends on this exact behavior; do not "fix" it here.
//!
//! ## Usage Example
//!
//! ```rust
//! use booth_scale::cpu::scale_rgba_cpu;
//! use booth_scale::plan::{build_plan, Bounds, Size};
//!
//! let input = Size { w: 1280, h: 960 };
//! let plan = build_plan(input, Bounds { max_w: 400, max_h: 600 });
//!
//! let src = vec![0u8; (input.w * input.h * 4) as usize];
//! let mut dst = vec![0u8; (plan.out.w * plan.out.h * 4) as usize];
//! let mut resizer = fast_image_resize::Resizer::new();
//! scale_rgba_cpu(&mut resizer, &src, input, &plan, &mut dst).unwrap();
//! ```

pub mod cpu;
pub mod plan;
