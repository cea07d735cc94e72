use super::*;
use crate::foundation::core::{Canvas, Rgb8};
use std::path::PathBuf;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_image_file").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn writes_png_and_creates_parent_dirs() {
    let dir = scratch_dir("png");
    let path = dir.join("nested").join("frame.png");

    let mut fb = Framebuffer::filled(Canvas::new(4, 3).unwrap(), Rgb8::BLACK);
    fb.set_pixel(1, 2, Rgb8::new(200, 10, 20));
    ImageFileSink::new().save(&path, &fb).unwrap();

    let img = image::open(&path).unwrap().to_rgb8();
    assert_eq!(img.dimensions(), (4, 3));
    assert_eq!(img.get_pixel(1, 2).0, [200, 10, 20]);
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0]);
}

#[test]
fn unknown_extension_is_rejected() {
    let dir = scratch_dir("bad_ext");
    let fb = Framebuffer::filled(Canvas::new(1, 1).unwrap(), Rgb8::BLACK);
    let err = write_image(&dir.join("frame.nope"), &fb).unwrap_err();
    assert!(matches!(err, LoomError::Validation(_)));
}

#[test]
fn truncated_buffer_is_rejected() {
    let dir = scratch_dir("short");
    let mut fb = Framebuffer::filled(Canvas::new(2, 2).unwrap(), Rgb8::BLACK);
    fb.data.truncate(5);
    assert!(write_image(&dir.join("frame.png"), &fb).is_err());
}
