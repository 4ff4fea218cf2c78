//! Quote-card rendering: background, layout, text rasterization, and JPEG
//! export under a hard size budget.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::{Rgb, RgbImage};
use rusttype::{Font, Scale};

use crate::background::load_background;
use crate::error::RenderError;
use crate::fonts::load_card_font;
use crate::layout::{text_width, wrap_words};

/// Square canvas edge, in pixels.
const CANVAS_SIZE: u32 = 1080;
/// Margin kept clear of text on all four sides.
const MARGIN: u32 = 80;

const TEXT_COLOR: Rgb<u8> = Rgb([255, 255, 255]);
const BACKGROUND_COLOR: Rgb<u8> = Rgb([20, 20, 30]);

const QUOTE_SIZE_PX: f32 = 48.0;
const AUTHOR_SIZE_PX: f32 = 36.0;
const LINE_HEIGHT: i64 = 60;
const AUTHOR_LINE_HEIGHT: i64 = 50;
const AUTHOR_SPACING: i64 = 30;

/// Twitter's media ceiling, the tightest of the supported platforms.
pub const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// Export qualities tried in order until the file fits [`MAX_FILE_SIZE`].
const JPEG_QUALITIES: &[u8] = &[95, 85, 75, 65, 55];

/// A rendered card on disk, ready for publishing.
#[derive(Debug, Clone)]
pub struct RenderedCard {
    pub path: PathBuf,
    pub byte_size: u64,
}

/// Renders quote cards: wrapped quote text and an attribution line, centered
/// over a background template (or a solid dark fill), exported as JPEG.
pub struct CardRenderer {
    templates_dir: Option<PathBuf>,
    font: Font<'static>,
}

impl CardRenderer {
    /// Creates a renderer. `templates_dir` points at the background image
    /// directory; pass `None` (or a directory with no eligible files) to
    /// always render on the solid fallback color.
    #[must_use]
    pub fn new(templates_dir: Option<PathBuf>) -> Self {
        Self {
            templates_dir,
            font: load_card_font(),
        }
    }

    /// Renders the quote card and writes it to `output_path`.
    ///
    /// Parent directories are created as needed and an existing file at the
    /// path is overwritten. The returned [`RenderedCard::byte_size`] is the
    /// final on-disk size; it only exceeds [`MAX_FILE_SIZE`] when even the
    /// lowest export quality could not fit the budget, which is logged as a
    /// warning rather than treated as an error.
    ///
    /// # Errors
    ///
    /// - [`RenderError::Io`] if the output path cannot be created or written.
    /// - [`RenderError::Image`] if JPEG encoding fails.
    pub fn render(
        &self,
        quote: &str,
        author: &str,
        output_path: &Path,
    ) -> Result<RenderedCard, RenderError> {
        let mut canvas = self.background();

        let usable_width = (CANVAS_SIZE - 2 * MARGIN) as f32;
        let lines = wrap_words(&self.font, QUOTE_SIZE_PX, quote, usable_width);

        let quote_height = lines.len() as i64 * LINE_HEIGHT;
        let block_height = quote_height + AUTHOR_SPACING + AUTHOR_LINE_HEIGHT;
        let mut y = (i64::from(CANVAS_SIZE) - block_height) / 2;

        for line in &lines {
            let width = text_width(&self.font, QUOTE_SIZE_PX, line);
            let x = ((CANVAS_SIZE as f32 - width) / 2.0) as i64;
            draw_text(&mut canvas, &self.font, QUOTE_SIZE_PX, x, y, TEXT_COLOR, line);
            y += LINE_HEIGHT;
        }

        let attribution = format!("\u{2014} {author}");
        let width = text_width(&self.font, AUTHOR_SIZE_PX, &attribution);
        let x = ((CANVAS_SIZE as f32 - width) / 2.0) as i64;
        draw_text(
            &mut canvas,
            &self.font,
            AUTHOR_SIZE_PX,
            x,
            y + AUTHOR_SPACING,
            TEXT_COLOR,
            &attribution,
        );

        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| RenderError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let byte_size = write_jpeg_with_budget(&canvas, output_path, MAX_FILE_SIZE)?;
        tracing::info!(
            path = %output_path.display(),
            byte_size,
            lines = lines.len(),
            "rendered quote card"
        );

        Ok(RenderedCard {
            path: output_path.to_path_buf(),
            byte_size,
        })
    }

    /// A random template scaled to the canvas, or the solid fallback fill.
    fn background(&self) -> RgbImage {
        let mut rng = rand::rng();
        self.templates_dir
            .as_deref()
            .and_then(|dir| load_background(dir, CANVAS_SIZE, CANVAS_SIZE, &mut rng))
            .unwrap_or_else(|| RgbImage::from_pixel(CANVAS_SIZE, CANVAS_SIZE, BACKGROUND_COLOR))
    }
}

/// Rasterizes `text` onto the canvas with `(x, y)` as the top-left corner of
/// the line box, blending glyph coverage over the existing pixels.
fn draw_text(
    canvas: &mut RgbImage,
    font: &Font<'static>,
    px: f32,
    x: i64,
    y: i64,
    color: Rgb<u8>,
    text: &str,
) {
    let scale = Scale::uniform(px);
    let v_metrics = font.v_metrics(scale);
    let baseline = y as f32 + v_metrics.ascent;

    for glyph in font.layout(text, scale, rusttype::point(x as f32, baseline)) {
        let Some(bb) = glyph.pixel_bounding_box() else {
            continue;
        };
        glyph.draw(|gx, gy, coverage| {
            let px_x = i64::from(gx as i32 + bb.min.x);
            let px_y = i64::from(gy as i32 + bb.min.y);
            if px_x < 0 || px_y < 0 {
                return;
            }
            let (px_x, px_y) = (px_x as u32, px_y as u32);
            if px_x >= canvas.width() || px_y >= canvas.height() {
                return;
            }
            if coverage <= 0.0 {
                return;
            }
            let dst = canvas.get_pixel_mut(px_x, px_y);
            let inv = 1.0 - coverage;
            for channel in 0..3 {
                dst.0[channel] = (f32::from(color.0[channel]) * coverage
                    + f32::from(dst.0[channel]) * inv) as u8;
            }
        });
    }
}

/// Writes `canvas` as JPEG, stepping down [`JPEG_QUALITIES`] until the file
/// fits `ceiling`. When even the lowest quality exceeds the ceiling, the last
/// written file is kept and a warning records the overage.
fn write_jpeg_with_budget(
    canvas: &RgbImage,
    path: &Path,
    ceiling: u64,
) -> Result<u64, RenderError> {
    let mut byte_size = 0;
    for (attempt, &quality) in JPEG_QUALITIES.iter().enumerate() {
        byte_size = write_jpeg(canvas, path, quality)?;
        if byte_size <= ceiling {
            return Ok(byte_size);
        }
        if attempt + 1 < JPEG_QUALITIES.len() {
            tracing::debug!(quality, byte_size, ceiling, "over size budget, re-encoding");
        }
    }
    tracing::warn!(
        byte_size,
        ceiling,
        "card exceeds the size budget even at the lowest quality; keeping the oversized file"
    );
    Ok(byte_size)
}

fn write_jpeg(canvas: &RgbImage, path: &Path, quality: u8) -> Result<u64, RenderError> {
    let io_err = |source: std::io::Error| RenderError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = fs::File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    canvas.write_with_encoder(JpegEncoder::new_with_quality(&mut writer, quality))?;
    writer.flush().map_err(io_err)?;

    Ok(fs::metadata(path).map_err(io_err)?.len())
}
