//! Brightness-statistics feature extraction from a captured frame.
//!
//! Features are taken from a central crop (middle 50% of the width, middle
//! 70% of the height) so the statistics track the face rather than the
//! booth backdrop. Quantization happens at feature-string time: mean and
//! standard deviation snap to multiples of 5 and histogram bins are divided
//! by 100, which is what makes the downstream hash stable under sensor
//! noise: nearby raw inputs usually produce *identical* feature strings,
//! not merely nearby ones.

use crate::capture::RgbaFrame;

/// Number of equal-width luma histogram bins over the 0–255 range.
const HISTOGRAM_BINS: usize = 8;

/// Ephemeral brightness statistics for one frame.
#[derive(Clone, Debug)]
pub struct FeatureVector {
    pub mean_luma: f64,
    pub std_dev_luma: f64,
    pub histogram: [u64; HISTOGRAM_BINS],
}

impl FeatureVector {
    /// Extract features from the frame's central crop.
    ///
    /// Returns `None` when the computed crop region contains no pixels
    /// (zero frame dimension, or a frame so small the floored crop extents
    /// collapse); callers treat that as degraded input, not an error.
    pub fn from_frame(frame: &RgbaFrame) -> Option<Self> {
        let width = frame.width as usize;
        let height = frame.height as usize;
        let data = frame.data.as_ref();

        // Central crop: face region, assuming the subject fills the middle
        // 50% of the width and 70% of the height.
        let crop_x = (width as f64 * 0.25) as usize;
        let crop_y = (height as f64 * 0.15) as usize;
        let crop_w = (width as f64 * 0.5) as usize;
        let crop_h = (height as f64 * 0.7) as usize;

        let mut luma_values = Vec::with_capacity(crop_w * crop_h);
        let mut histogram = [0u64; HISTOGRAM_BINS];

        for y in crop_y..crop_y + crop_h {
            for x in crop_x..crop_x + crop_w {
                let i = (y * width + x) * 4;
                let r = data[i] as f64;
                let g = data[i + 1] as f64;
                let b = data[i + 2] as f64;

                // Perceptual luma; no rounding at this stage.
                let luma = 0.299 * r + 0.587 * g + 0.114 * b;
                luma_values.push(luma);

                // 256 levels / 8 bins = 32 levels per bin.
                let bin = ((luma / 32.0) as usize).min(HISTOGRAM_BINS - 1);
                histogram[bin] += 1;
            }
        }

        if luma_values.is_empty() {
            return None;
        }

        let mean_luma = luma_values.iter().sum::<f64>() / luma_values.len() as f64;
        let std_dev_luma = (luma_values
            .iter()
            .map(|l| (l - mean_luma).powi(2))
            .sum::<f64>()
            / luma_values.len() as f64)
            .sqrt();

        Some(Self {
            mean_luma,
            std_dev_luma,
            histogram,
        })
    }

    /// Render the quantized feature string fed to the hash: rounded mean,
    /// rounded standard deviation, then the 8 coarsened bin counts,
    /// comma-joined in fixed order.
    pub fn feature_string(&self) -> String {
        let mut parts = Vec::with_capacity(2 + HISTOGRAM_BINS);
        parts.push(((self.mean_luma / 5.0).round() as i64 * 5).to_string());
        parts.push(((self.std_dev_luma / 5.0).round() as i64 * 5).to_string());
        for count in &self.histogram {
            parts.push(((*count as f64 / 100.0).round() as i64).to_string());
        }
        parts.join(",")
    }
}
