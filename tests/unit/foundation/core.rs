use super::*;

#[test]
fn canvas_rejects_zero_dimensions() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert_eq!(Canvas::new(4, 3).unwrap().pixel_count(), 12);
}

#[test]
fn rgb_clamps_and_rounds() {
    let c = Rgb8::from_dvec3_clamped(DVec3::new(-5.0, 127.6, 300.0));
    assert_eq!(c, Rgb8::new(0, 128, 255));
    assert_eq!(Rgb8::from_dvec3_clamped(DVec3::splat(f64::NAN)), Rgb8::BLACK);
}

#[test]
fn rgb_roundtrips_through_dvec3() {
    let c = Rgb8::new(150, 50, 200);
    assert_eq!(Rgb8::from_dvec3_clamped(c.to_dvec3()), c);
}
