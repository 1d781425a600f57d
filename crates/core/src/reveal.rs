//! Scroll-linked reveals that need no state between frames.

use folio_protocol::QuoteFrame;

use crate::motion::clamp;

const WORD_FILL_START: f64 = 0.12;
const WORD_FILL_SPREAD: f64 = 0.28;
const WORD_FILL_SPAN: f64 = 0.10;
const WORD_MIN_ALPHA: f64 = 0.08;
const PHOTO_TRAVEL_PERCENT: f64 = 140.0;
const PHOTO_REVEAL_AT: f64 = 0.02;
const SEE_ALL_SHOW_RATIO: f64 = 0.5;

/// Logo rotation in degrees: one full turn over the page's scroll range.
pub fn logo_rotation(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    let progress = if scrollable > 0.0 {
        scroll_y / scrollable
    } else {
        0.0
    };
    progress * 360.0
}

/// Quote section: words fill in one after another while the section
/// crosses the viewport, and the photo slides against the scroll.
///
/// `section_top` is relative to the viewport.
pub fn quote_reveal(
    section_top: f64,
    section_height: f64,
    viewport_height: f64,
    words: usize,
) -> QuoteFrame {
    let entered = viewport_height - section_top;
    let travel = (section_height + viewport_height).max(1.0);
    let progress = clamp(entered / travel, 0.0, 1.0);

    let word_alpha = (0..words)
        .map(|i| {
            let start = WORD_FILL_START + (i as f64 / words as f64) * WORD_FILL_SPREAD;
            let t = clamp((progress - start) / WORD_FILL_SPAN, 0.0, 1.0);
            WORD_MIN_ALPHA + t * (1.0 - WORD_MIN_ALPHA)
        })
        .collect();

    QuoteFrame {
        progress,
        word_alpha,
        photo_offset_percent: PHOTO_TRAVEL_PERCENT - progress * 2.0 * PHOTO_TRAVEL_PERCENT,
        photo_visible: progress > PHOTO_REVEAL_AT,
    }
}

/// "See all works" fade, fed by an intersection ratio. The link appears
/// once more than half of it is on screen and only hides again after it
/// has left entirely; anything in between keeps the previous state.
pub fn see_all_visible(intersection_ratio: f64, was_visible: bool) -> bool {
    if intersection_ratio > SEE_ALL_SHOW_RATIO {
        true
    } else if intersection_ratio <= 0.0 {
        false
    } else {
        was_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::approx_eq;

    #[test]
    fn logo_turns_once() {
        assert_eq!(logo_rotation(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(logo_rotation(1000.0, 3000.0, 1000.0), 180.0);
        assert_eq!(logo_rotation(2000.0, 3000.0, 1000.0), 360.0);
        assert_eq!(logo_rotation(50.0, 800.0, 1000.0), 0.0);
    }

    #[test]
    fn quote_words_fill_in_order() {
        // Section top at the viewport bottom: nothing entered yet.
        let before = quote_reveal(1000.0, 1000.0, 1000.0, 4);
        assert_eq!(before.progress, 0.0);
        assert!(before.word_alpha.iter().all(|&a| approx_eq(a, 0.08)));
        assert!(!before.photo_visible);
        assert_eq!(before.photo_offset_percent, 140.0);

        // progress 0.3: word 0 full, the last word just starting.
        let mid = quote_reveal(400.0, 1000.0, 1000.0, 4);
        assert!(approx_eq(mid.progress, 0.3));
        assert!(approx_eq(mid.word_alpha[0], 1.0));
        assert!(mid.word_alpha[1] > mid.word_alpha[3]);
        assert!(mid.photo_visible);

        let after = quote_reveal(-1000.0, 1000.0, 1000.0, 4);
        assert_eq!(after.photo_offset_percent, -140.0);
    }

    #[test]
    fn see_all_has_hysteresis() {
        assert!(see_all_visible(0.6, false));
        assert!(see_all_visible(0.3, true));
        assert!(!see_all_visible(0.3, false));
        assert!(!see_all_visible(0.0, true));
        // NaN ratios never change the state
        assert!(see_all_visible(f64::NAN, true));
    }
}
