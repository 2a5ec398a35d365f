#![cfg(feature = "image-io")]

use graymap::io::{from_gray_image, load_gray_image, save_gray_image, to_gray_image};
use graymap::{GrayMap, GrayMapError};
use std::path::PathBuf;

fn temp_png(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("graymap-{tag}-{}.png", std::process::id()))
}

#[test]
fn gray_image_round_trip_keeps_full_range_samples() {
    let img = GrayMap::from_vec(vec![0, 1, 128, 254, 255, 42], 3, 2, 255).unwrap();
    let gray = to_gray_image(&img).unwrap();
    assert_eq!((gray.width(), gray.height()), (3, 2));
    assert_eq!(gray.as_raw().as_slice(), img.data());

    let back = from_gray_image(&gray).unwrap();
    assert_eq!(back, img);
}

#[test]
fn low_maxval_is_stretched_to_full_white() {
    let img = GrayMap::from_vec(vec![0, 5, 10, 15], 2, 2, 15).unwrap();
    let gray = to_gray_image(&img).unwrap();
    assert_eq!(gray.as_raw().as_slice(), &[0, 85, 170, 255]);
}

#[test]
fn samples_above_maxval_saturate() {
    let img = GrayMap::from_vec(vec![100, 101, 200], 3, 1, 100).unwrap();
    let gray = to_gray_image(&img).unwrap();
    assert_eq!(gray.as_raw().as_slice(), &[255, 255, 255]);
}

#[test]
fn png_file_round_trip() {
    let path = temp_png("bridge");
    let img = GrayMap::from_vec((0u8..24).map(|v| v * 10).collect(), 6, 4, 255).unwrap();
    save_gray_image(&img, &path).unwrap();
    let loaded = load_gray_image(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(loaded, img);
}

#[test]
fn png_file_keeps_white_of_low_maxval_image() {
    let path = temp_png("low-maxval");
    let img = GrayMap::from_vec(vec![0, 5, 10, 15], 2, 2, 15).unwrap();
    save_gray_image(&img, &path).unwrap();
    let loaded = load_gray_image(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(loaded.maxval(), 255);
    assert_eq!(loaded.data(), &[0, 85, 170, 255]);
}

#[test]
fn missing_file_is_an_image_io_error() {
    let err = load_gray_image("/nonexistent/graymap/input.png").err().unwrap();
    assert!(matches!(err, GrayMapError::ImageIo { .. }));
}
