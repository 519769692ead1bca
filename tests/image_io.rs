#![cfg(feature = "image-io")]

use cldraw::io::{decode_gray_image, load_gray_image, save_gray_image};
use cldraw::{ErrorKind, Raster};

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("cldraw-{}-{name}", std::process::id()))
}

#[test]
fn png_round_trip_preserves_pixels() {
    let raster = Raster::new((0u8..48).map(|v| v * 5).collect(), 8, 6).unwrap();
    let path = temp_path("roundtrip.png");
    save_gray_image(&raster, &path).unwrap();
    let back = load_gray_image(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(back, raster);
}

#[test]
fn directories_and_missing_files_are_rejected() {
    let err = load_gray_image(std::env::temp_dir()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Initialization);

    let err = load_gray_image(temp_path("does-not-exist.png")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Initialization);
}

#[test]
fn non_image_bytes_are_rejected() {
    let err = decode_gray_image(b"definitely not an image").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Initialization);

    // GIF magic is recognized but not accepted.
    let err = decode_gray_image(b"GIF89a\x01\x00\x01\x00").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Initialization);
}
