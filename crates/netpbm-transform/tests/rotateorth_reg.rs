//! Orthogonal rotation regression test
//!
//! Rotations by 0, 90, 180 and 270 degrees and left-right / top-bottom
//! flips, checked on a bitmap, a greymap and a pixmap.

use netpbm_core::{Raster, Sample};
use netpbm_test::{RegParams, load_test_image};
use netpbm_transform::{flip_lr, flip_tb, rotate_90, rotate_180, rotate_orth};

#[test]
fn rotateorth_reg() {
    let mut rp = RegParams::new("rotateorth");

    let bitmap = load_test_image("j_bin.pbm")
        .expect("load bitmap")
        .into_bitmap()
        .expect("bitmap");
    test_orth_rotation(&mut rp, &bitmap, "bitmap");

    let greymap = load_test_image("feep.pgm")
        .expect("load greymap")
        .into_greymap()
        .expect("greymap");
    test_orth_rotation(&mut rp, &greymap, "greymap");

    let pixmap = load_test_image("rgb_bin.ppm")
        .expect("load pixmap")
        .into_pixmap()
        .expect("pixmap");
    test_orth_rotation(&mut rp, &pixmap, "pixmap");

    // The "FEEP" greymap turned clockwise: the top-left 3 lands on the
    // right edge, one row down.
    let r = rotate_90(&greymap, true);
    rp.compare_values(3.0, r.get(5, 1).unwrap_or(0) as f64, 0.0);
    rp.compare_values(0.0, r.get(6, 1).unwrap_or(99) as f64, 0.0);

    rp.write_raster_and_check(&r).expect("write rotated feep");

    assert!(rp.cleanup(), "rotateorth regression test failed");
}

fn test_orth_rotation<S: Sample>(rp: &mut RegParams, src: &Raster<S>, label: &str) {
    let (w, h) = src.size();
    eprintln!("Testing {} orthogonal rotation: {}x{}", label, w, h);

    // --- rotate_orth(0) = identity ---
    let r0 = rotate_orth(src, 0);
    rp.compare_rasters(src, &r0);

    // --- rotate_orth(1) = 90° CW ---
    let r1 = rotate_orth(src, 1);
    rp.compare_values(h as f64, r1.width() as f64, 0.0);
    rp.compare_values(w as f64, r1.height() as f64, 0.0);
    rp.compare_rasters(&rotate_90(src, true), &r1);

    // --- rotate_orth(2) = 180° ---
    let r2 = rotate_orth(src, 2);
    rp.compare_rasters(&rotate_180(src), &r2);
    rp.compare_rasters(&flip_tb(&flip_lr(src)), &r2);

    // --- rotate_orth(3) = 90° CCW ---
    let r3 = rotate_orth(src, 3);
    rp.compare_rasters(&rotate_90(src, false), &r3);

    // --- four quarter turns = identity ---
    let mut r4 = src.clone();
    for _ in 0..4 {
        r4 = rotate_90(&r4, true);
    }
    rp.compare_rasters(src, &r4);
    eprintln!("  {}: 4x rotate_90(cw) == identity: {}", label, *src == r4);

    // --- flips are involutions ---
    rp.compare_rasters(src, &flip_lr(&flip_lr(src)));
    rp.compare_rasters(src, &flip_tb(&flip_tb(src)));

    let mut in_place = src.clone();
    in_place.flip();
    rp.compare_rasters(&flip_lr(src), &in_place);
    in_place.flip();
    in_place.flop();
    rp.compare_rasters(&flip_tb(src), &in_place);

    // --- kind metadata carries over ---
    let kept = r1.max() == src.max() && r1.encoding() == src.encoding();
    rp.compare_values(1.0, if kept { 1.0 } else { 0.0 }, 0.0);
}
