//! Background template discovery and selection.

use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::RgbImage;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Extensions considered background templates.
const BACKGROUND_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// Lists eligible template files in `dir`, sorted by path so selection with a
/// seeded rng is reproducible. A missing or unreadable directory is treated
/// as empty.
pub(crate) fn list_backgrounds(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|e| e.path())
        .filter(|p| p.is_file() && has_background_extension(p))
        .collect();
    files.sort();
    files
}

fn has_background_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            let lower = ext.to_ascii_lowercase();
            BACKGROUND_EXTENSIONS.contains(&lower.as_str())
        })
}

/// Uniformly picks one template from `files`.
pub(crate) fn choose_background<'a, R: Rng + ?Sized>(
    files: &'a [PathBuf],
    rng: &mut R,
) -> Option<&'a PathBuf> {
    files.choose(rng)
}

/// Loads a random background from `dir` scaled to `width`×`height`.
/// Returns `None` when no template is available or the chosen file does not
/// decode, so the caller falls back to a solid color.
pub(crate) fn load_background<R: Rng + ?Sized>(
    dir: &Path,
    width: u32,
    height: u32,
    rng: &mut R,
) -> Option<RgbImage> {
    let files = list_backgrounds(dir);
    let path = choose_background(&files, rng)?;
    match image::open(path) {
        Ok(img) => Some(img.resize_exact(width, height, FilterType::Lanczos3).to_rgb8()),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not load background template");
            None
        }
    }
}
