//! Keepsake layout: wrap geometry and canvas sizing.
//!
//! All distances are fixed kiosk constants. The canvas grows downward from
//! the source image by exactly `title line + gap + caption lines + 2 *
//! padding`, so output dimensions are a pure function of the source size
//! and the wrapped line count.

/// Outer padding above and below the text block.
pub const PADDING: u32 = 50;
/// Vertical gap between the title and the caption block.
pub const TEXT_GAP: u32 = 25;
/// Title line height; the title renders bold at this pixel size.
pub const TITLE_LINE_HEIGHT: u32 = 48;
/// Caption line height.
pub const CAPTION_LINE_HEIGHT: u32 = 36;
/// Caption font pixel size (italic face).
pub const CAPTION_PX: f32 = 28.0;
/// Title font pixel size (bold face).
pub const TITLE_PX: f32 = 48.0;

/// Computed layout for one compositing call.
#[derive(Clone, Debug)]
pub struct CompositeLayout {
    pub image_w: u32,
    pub image_h: u32,
    pub lines: Vec<String>,
    pub canvas_w: u32,
    pub canvas_h: u32,
}

/// Greedy word wrap against `max_width`.
///
/// Words are whatever single spaces separate; the candidate line is
/// measured *with* its trailing space, and a line is only committed when it
/// already has content, so a single word wider than `max_width` stays on
/// its own overflowing line. The final partial line is always
/// committed, so an empty caption wraps to one empty line.
pub fn wrap_caption<F>(caption: &str, max_width: f32, measure: F) -> Vec<String>
where
    F: Fn(&str) -> f32,
{
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in caption.split(' ') {
        let test_line = format!("{line}{word} ");
        if measure(&test_line) > max_width && !line.is_empty() {
            lines.push(line.trim().to_string());
            line = format!("{word} ");
        } else {
            line = test_line;
        }
    }
    lines.push(line.trim().to_string());
    lines
}

/// Wrap the caption and derive the canvas dimensions.
pub fn compute_layout<F>(
    image_w: u32,
    image_h: u32,
    caption: &str,
    measure: F,
) -> CompositeLayout
where
    F: Fn(&str) -> f32,
{
    let max_width = image_w.saturating_sub(PADDING * 2) as f32;
    let lines = wrap_caption(caption, max_width, measure);

    let text_block = TITLE_LINE_HEIGHT + TEXT_GAP + lines.len() as u32 * CAPTION_LINE_HEIGHT;
    CompositeLayout {
        image_w,
        image_h,
        canvas_w: image_w,
        canvas_h: image_h + text_block + PADDING * 2,
        lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Character-count measure: every char is 10 units wide.
    fn char_measure(s: &str) -> f32 {
        s.chars().count() as f32 * 10.0
    }

    #[test]
    fn test_empty_caption_wraps_to_one_empty_line() {
        let lines = wrap_caption("", 500.0, char_measure);
        assert_eq!(lines, vec![String::new()]);
    }

    #[test]
    fn test_short_caption_stays_on_one_line() {
        let lines = wrap_caption("ab cd", 500.0, char_measure);
        assert_eq!(lines, vec!["ab cd".to_string()]);
    }

    #[test]
    fn test_words_break_greedily() {
        // "aaaa " measures 50, "aaaa bbbb " measures 100 > 95.
        let lines = wrap_caption("aaaa bbbb cccc", 95.0, char_measure);
        assert_eq!(lines, vec!["aaaa", "bbbb", "cccc"]);
    }

    #[test]
    fn test_oversized_single_word_overflows_unsplit() {
        let lines = wrap_caption("supercalifragilistic", 50.0, char_measure);
        assert_eq!(lines, vec!["supercalifragilistic".to_string()]);
    }

    #[test]
    fn test_oversized_word_mid_caption_gets_own_line() {
        let lines = wrap_caption("ab supercalifragilistic cd", 80.0, char_measure);
        assert_eq!(
            lines,
            vec![
                "ab".to_string(),
                "supercalifragilistic".to_string(),
                "cd".to_string()
            ]
        );
    }

    #[test]
    fn test_words_survive_wrapping_in_order() {
        let caption = "one two three four five six seven";
        let lines = wrap_caption(caption, 120.0, char_measure);
        let rejoined = lines.join(" ");
        assert_eq!(rejoined, caption);
    }

    #[test]
    fn test_layout_height_formula() {
        let layout = compute_layout(640, 480, "aaaa bbbb cccc", |s| {
            s.chars().count() as f32 * 60.0 // forces one word per line
        });
        assert_eq!(layout.lines.len(), 3);
        assert_eq!(layout.canvas_w, 640);
        assert_eq!(layout.canvas_h, 480 + 48 + 25 + 3 * 36 + 100);
    }

    #[test]
    fn test_layout_single_line_height() {
        let layout = compute_layout(640, 480, "hi", char_measure);
        assert_eq!(layout.lines.len(), 1);
        assert_eq!(layout.canvas_h, 689);
    }
}
