//! End-to-end renderer tests: real files, real JPEG output.

use image::{Rgb, RgbImage};
use quotecard_render::{CardRenderer, MAX_FILE_SIZE};

const QUOTE: &str = "The unexamined life is not worth living.";
const AUTHOR: &str = "Socrates";

#[test]
fn renders_a_jpeg_within_budget_without_backgrounds() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("quote_card.jpg");

    let renderer = CardRenderer::new(None);
    let card = renderer.render(QUOTE, AUTHOR, &output).unwrap();

    assert_eq!(card.path, output);
    assert!(card.byte_size > 0);
    assert!(card.byte_size <= MAX_FILE_SIZE);

    let bytes = std::fs::read(&output).unwrap();
    assert_eq!(bytes.len() as u64, card.byte_size);
    assert_eq!(bytes[..3], [0xFF, 0xD8, 0xFF], "JPEG magic bytes");
}

#[test]
fn missing_templates_directory_falls_back_to_solid_color() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("card.jpg");

    let renderer = CardRenderer::new(Some(dir.path().join("no-such-subdir")));
    let card = renderer.render(QUOTE, AUTHOR, &output).unwrap();
    assert!(card.byte_size > 0);
}

#[test]
fn creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("nested").join("cards").join("card.jpg");

    let renderer = CardRenderer::new(None);
    renderer.render(QUOTE, AUTHOR, &output).unwrap();
    assert!(output.is_file());
}

#[test]
fn overwrites_an_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("card.jpg");
    std::fs::write(&output, b"stale contents").unwrap();

    let renderer = CardRenderer::new(None);
    let card = renderer.render(QUOTE, AUTHOR, &output).unwrap();
    let bytes = std::fs::read(&output).unwrap();
    assert_eq!(bytes.len() as u64, card.byte_size);
    assert_ne!(&bytes[..], b"stale contents");
}

#[test]
fn single_template_directory_renders_byte_identically() {
    let dir = tempfile::tempdir().unwrap();
    let templates = dir.path().join("templates");
    std::fs::create_dir(&templates).unwrap();

    // One eligible background removes the only source of randomness.
    let mut bg = RgbImage::new(64, 64);
    for (x, y, pixel) in bg.enumerate_pixels_mut() {
        *pixel = Rgb([(x * 4) as u8, (y * 4) as u8, 128]);
    }
    bg.save(templates.join("gradient.png")).unwrap();

    let renderer = CardRenderer::new(Some(templates));
    let first = dir.path().join("first.jpg");
    let second = dir.path().join("second.jpg");
    renderer.render(QUOTE, AUTHOR, &first).unwrap();
    renderer.render(QUOTE, AUTHOR, &second).unwrap();

    assert_eq!(
        std::fs::read(&first).unwrap(),
        std::fs::read(&second).unwrap(),
        "a fixed background must produce identical output"
    );
}

#[test]
fn long_quotes_still_fit_the_canvas_and_budget() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("card.jpg");

    let long_quote = "It is not because things are difficult that we do not dare; \
                      it is because we do not dare that things are difficult, and \
                      the obstacles we refuse to face multiply in imagination far \
                      beyond their measure in the world itself.";
    let renderer = CardRenderer::new(None);
    let card = renderer.render(long_quote, "Seneca", &output).unwrap();
    assert!(card.byte_size <= MAX_FILE_SIZE);
}
