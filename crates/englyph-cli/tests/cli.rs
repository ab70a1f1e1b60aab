use assert_cmd::Command;
use image::{Rgba, RgbaImage};
use predicates::prelude::*;

fn englyph() -> Command {
    Command::cargo_bin("englyph").unwrap()
}

#[test]
fn text_prints_composed_rows() {
    englyph()
        .args(["text", "--text", "HI"])
        .assert()
        .success()
        .stdout(predicate::str::contains("█ █ ▀█▀"))
        .stdout(predicate::str::contains("▀ ▀ ▀▀▀"));
}

#[test]
fn text_colors_every_row() {
    englyph()
        .args(["text", "-t", "I", "--fg", "#ff0000", "--underline"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1B[0;38;2;255;0;0m▀█▀"))
        .stdout(predicate::str::contains("\x1B[0;4;38;2;255;0;0m▀▀▀"));
}

#[test]
fn text_rejects_bad_colors() {
    englyph()
        .args(["text", "-t", "A", "--bg", "teal"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid color"));
}

#[test]
fn image_renders_blocks() {
    let path = std::env::temp_dir().join(format!("englyph-cli-{}.png", std::process::id()));
    let img = RgbaImage::from_fn(4, 3, |x, _| {
        if x % 2 == 0 {
            Rgba([255, 255, 255, 255])
        } else {
            Rgba([0, 0, 0, 255])
        }
    });
    img.save(&path).unwrap();
    englyph()
        .arg("image")
        .arg("--input")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("38;2;255;255;255;48;2;0;0;0m▌▌"));
    englyph()
        .arg("image")
        .arg("--input")
        .arg(&path)
        .args(["--geometry", "quadrant", "--pips"])
        .assert()
        .success()
        .stdout(predicate::str::contains("⠃⠃"));
    std::fs::remove_file(path).ok();
}

#[test]
fn image_reports_missing_input() {
    englyph()
        .args(["image", "--input", "/nonexistent/englyph.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("decoding"));
}

#[test]
fn inspect_shows_fallback_merge() {
    englyph()
        .args(["inspect", "--face", "seven_segment"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Glyph face: block/sans/seven_segment"))
        .stdout(predicate::str::contains("Defined characters: 11"))
        .stdout(predicate::str::contains("With fallback basic_latin"))
        .stdout(predicate::str::contains("basic_latin, seven_segment"));
}

#[test]
fn image_rejects_oversized_columns() {
    let path = std::env::temp_dir().join(format!("englyph-cli-wide-{}.png", std::process::id()));
    RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 255]))
        .save(&path)
        .unwrap();
    englyph()
        .arg("image")
        .arg("--input")
        .arg(&path)
        .args(["--columns", "4294967295"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("too wide"));
    std::fs::remove_file(path).ok();
}
