//! Card font resolution.
//!
//! Tries a short list of known system font files first so cards pick up the
//! platform's native face, then falls back to the DejaVu Sans Bold face
//! compiled into the binary. The chain always produces a font.

use rusttype::Font;

/// System font paths tried in order before the embedded fallback.
const FONT_CANDIDATES: &[&str] = &[
    // macOS
    "/System/Library/Fonts/Helvetica.ttc",
    // Linux
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    // Windows
    "C:/Windows/Fonts/arialbd.ttf",
    "C:/Windows/Fonts/arial.ttf",
];

static EMBEDDED_FONT: &[u8] = include_bytes!("../assets/DejaVuSans-Bold.ttf");

/// Returns the font used for both the quote body and the attribution line
/// (the two differ only in scale).
pub(crate) fn load_card_font() -> Font<'static> {
    for &path in FONT_CANDIDATES {
        if let Ok(data) = std::fs::read(path) {
            if let Some(font) = Font::try_from_vec(data) {
                tracing::debug!(path, "loaded system card font");
                return font;
            }
            tracing::warn!(path, "font file exists but could not be parsed");
        }
    }
    embedded_font()
}

/// The compiled-in fallback face.
pub(crate) fn embedded_font() -> Font<'static> {
    Font::try_from_bytes(EMBEDDED_FONT).expect("embedded DejaVu Sans Bold parses")
}
