use super::*;

fn canvas(w: u32, h: u32) -> Canvas {
    Canvas::new(w, h).unwrap()
}

#[test]
fn filled_frame_has_uniform_pixels() {
    let fb = Framebuffer::filled(canvas(3, 2), Rgb8::new(1, 2, 3));
    assert_eq!(fb.data.len(), 18);
    assert_eq!(fb.pixel(2, 1), Some(Rgb8::new(1, 2, 3)));
    assert_eq!(fb.pixel(3, 0), None);
    assert_eq!(fb.count_not(Rgb8::new(1, 2, 3)), 0);
}

#[test]
fn set_pixel_ignores_out_of_bounds() {
    let mut fb = Framebuffer::filled(canvas(2, 2), Rgb8::BLACK);
    fb.set_pixel(1, 0, Rgb8::WHITE);
    fb.set_pixel(5, 5, Rgb8::WHITE);
    assert_eq!(fb.pixel(1, 0), Some(Rgb8::WHITE));
    assert_eq!(fb.count_not(Rgb8::BLACK), 1);
}

#[test]
fn ppm_header_matches_dimensions() {
    let fb = Framebuffer::filled(canvas(4, 2), Rgb8::WHITE);
    let ppm = fb.to_ppm();
    assert!(ppm.starts_with(b"P6\n4 2\n255\n"));
    assert_eq!(ppm.len(), b"P6\n4 2\n255\n".len() + 24);
}

#[test]
fn depth_test_keeps_closest_sample() {
    let mut t = RenderTarget::new(canvas(2, 2), Rgb8::BLACK);
    t.plot(0, 0, 1.0, Rgb8::new(10, 0, 0));
    t.plot(0, 0, 0.5, Rgb8::new(20, 0, 0));
    assert_eq!(t.color.pixel(0, 0), Some(Rgb8::new(10, 0, 0)));
    t.plot(0, 0, 2.0, Rgb8::new(30, 0, 0));
    assert_eq!(t.color.pixel(0, 0), Some(Rgb8::new(30, 0, 0)));
    assert_eq!(t.depth.get(0, 0), Some(2.0));
    assert_eq!(t.canvas(), canvas(2, 2));
}
