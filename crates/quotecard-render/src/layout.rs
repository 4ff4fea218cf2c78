//! Text measurement and greedy line breaking.

use rusttype::{point, Font, Scale};

/// Measured pixel width of `text` rendered at `px`.
pub(crate) fn text_width(font: &Font<'_>, px: f32, text: &str) -> f32 {
    if text.is_empty() {
        return 0.0;
    }
    let scale = Scale::uniform(px);
    let v_metrics = font.v_metrics(scale);
    font.layout(text, scale, point(0.0, v_metrics.ascent))
        .filter_map(|g| g.pixel_bounding_box())
        .fold(0.0f32, |width, bb| width.max(bb.max.x as f32))
}

/// Greedily packs whitespace-delimited words into lines whose measured width
/// stays within `max_width`. A single word wider than the limit gets its own
/// line; words are never split.
pub(crate) fn wrap_words(font: &Font<'_>, px: f32, text: &str, max_width: f32) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for word in text.split_whitespace() {
        let mut candidate = current.clone();
        candidate.push(word);
        if text_width(font, px, &candidate.join(" ")) <= max_width {
            current.push(word);
        } else {
            if !current.is_empty() {
                lines.push(current.join(" "));
            }
            current = vec![word];
        }
    }
    if !current.is_empty() {
        lines.push(current.join(" "));
    }

    if lines.is_empty() {
        vec![text.to_string()]
    } else {
        lines
    }
}
