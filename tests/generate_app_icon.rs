use image::{GenericImageView, ImageFormat};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Runs `generate-app-icon -o <tmp>/assets` and checks every asset it promises.
#[test]
fn test_generates_all_app_icon_assets() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let assets = temp_dir.path().join("assets");

    let output = run_generator(&["-o", assets.to_str().unwrap()]);
    assert_success(&output);

    let expected = [
        ("icon.png", 1024),
        ("adaptive-icon.png", 1024),
        ("splash-icon.png", 1024),
        ("notification-icon.png", 256),
        ("favicon.png", 32),
    ];
    for (file, size) in expected {
        let path = assets.join(file);
        assert!(path.exists(), "{} should exist", path.display());
        assert_png_signature(&path);

        let img = image::open(&path).expect("Generated file should decode");
        assert_eq!(img.dimensions(), (size, size), "{file} dimensions");
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Created app icon"));
    assert!(stdout.contains("Created favicon"));
    assert!(!assets.join("icons.json").exists());
}

/// The three full-size assets are the same raster.
#[test]
fn test_full_size_assets_are_identical() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let assets = temp_dir.path().join("assets");
    assert_success(&run_generator(&["-o", assets.to_str().unwrap()]));

    let icon = image::open(assets.join("icon.png")).unwrap().to_rgb8();
    let adaptive = image::open(assets.join("adaptive-icon.png")).unwrap().to_rgb8();
    let splash = image::open(assets.join("splash-icon.png")).unwrap().to_rgb8();
    assert_eq!(icon, adaptive);
    assert_eq!(icon, splash);

    // Top-left corner is the untouched gradient start.
    assert_eq!(icon.get_pixel(0, 0).0, [0, 245, 255]);
}

#[test]
fn test_notification_icon_is_transparent_outside_book() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let assets = temp_dir.path().join("assets");
    assert_success(&run_generator(&["-o", assets.to_str().unwrap()]));

    let notification = image::open(assets.join("notification-icon.png")).unwrap().to_rgba8();
    assert_eq!(notification.get_pixel(0, 0)[3], 0);
    assert_eq!(notification.get_pixel(128, 128).0, [255, 255, 255, 255]);
}

#[test]
fn test_gradient_override_and_manifest() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let assets = temp_dir.path().join("assets");

    let output = run_generator(&[
        "-o",
        assets.to_str().unwrap(),
        "--gradient-top",
        "#ff0000",
        "--label",
        "PRO",
        "--manifest",
    ]);
    assert_success(&output);

    let icon = image::open(assets.join("icon.png")).unwrap().to_rgb8();
    assert_eq!(icon.get_pixel(0, 0).0, [255, 0, 0]);

    let manifest = std::fs::read_to_string(assets.join("icons.json")).expect("icons.json");
    let manifest: serde_json::Value = serde_json::from_str(&manifest).expect("valid JSON");
    let images = manifest["images"].as_array().unwrap();
    assert_eq!(images.len(), 5);
    assert!(images
        .iter()
        .any(|entry| entry["filename"] == "favicon.png" && entry["size"] == 32));
    assert!(images.iter().all(|entry| entry["shape"] == "square"));
}

/// A font path that can't be loaded falls back to the built-in font.
#[test]
fn test_unreadable_font_still_generates() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let assets = temp_dir.path().join("assets");
    let bogus_font = temp_dir.path().join("not-a-font.ttf");
    std::fs::write(&bogus_font, b"definitely not truetype").unwrap();

    let output = run_generator(&[
        "-o",
        assets.to_str().unwrap(),
        "--font",
        bogus_font.to_str().unwrap(),
    ]);
    assert_success(&output);
    assert!(assets.join("icon.png").exists());
}

fn run_generator(args: &[&str]) -> Output {
    Command::new(binary_path())
        .args(args)
        .output()
        .expect("Failed to run generate-app-icon")
}

fn assert_success(output: &Output) {
    if !output.status.success() {
        eprintln!("Command failed with status: {}", output.status);
        eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("generate-app-icon failed");
    }
}

fn assert_png_signature(path: &Path) {
    let bytes = std::fs::read(path).expect("Failed to read output");
    assert_eq!(
        image::guess_format(&bytes).expect("Unknown format"),
        ImageFormat::Png,
        "{} should be a PNG",
        path.display()
    );
}

fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_generate-app-icon"))
}
