use graymap::{blur, GrayMap};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_image(rng: &mut StdRng, width: usize, height: usize) -> GrayMap {
    let data = (0..width * height).map(|_| rng.random::<u8>()).collect();
    GrayMap::from_vec(data, width, height, 255).unwrap()
}

/// Direct windowed mean over the clipped window.
fn naive_blur(img: &GrayMap, dx: usize, dy: usize) -> Vec<u8> {
    let (w, h) = (img.width(), img.height());
    let data = img.data();
    let mut out = Vec::with_capacity(w * h);
    for y in 0..h {
        for x in 0..w {
            let (x0, x1) = (x.saturating_sub(dx), (x + dx).min(w - 1));
            let (y0, y1) = (y.saturating_sub(dy), (y + dy).min(h - 1));
            let mut sum = 0u64;
            for yy in y0..=y1 {
                for xx in x0..=x1 {
                    sum += u64::from(data[xx + w * yy]);
                }
            }
            let area = ((x1 - x0 + 1) * (y1 - y0 + 1)) as f64;
            out.push((sum as f64 / area + 0.5).floor() as u8);
        }
    }
    out
}

#[test]
fn zero_radius_keeps_the_image() {
    let mut rng = StdRng::seed_from_u64(31);
    let original = random_image(&mut rng, 12, 7);
    let mut img = original.clone();
    blur(&mut img, 0, 0).unwrap();
    assert_eq!(img, original);
}

#[test]
fn uniform_image_stays_uniform() {
    for (dx, dy) in [(1, 1), (3, 0), (0, 5), (40, 40)] {
        let mut img = GrayMap::from_vec(vec![137; 9 * 6], 9, 6, 255).unwrap();
        blur(&mut img, dx, dy).unwrap();
        assert!(img.data().iter().all(|&p| p == 137));
    }
}

#[test]
fn matches_direct_window_means() {
    let mut rng = StdRng::seed_from_u64(37);
    for (w, h, dx, dy) in [(10, 8, 1, 1), (17, 5, 3, 2), (6, 13, 0, 4), (4, 4, 9, 9)] {
        let mut img = random_image(&mut rng, w, h);
        let expected = naive_blur(&img, dx, dy);
        blur(&mut img, dx, dy).unwrap();
        assert_eq!(img.data(), expected.as_slice());
    }
}

#[test]
fn corner_uses_clipped_window() {
    let mut img = GrayMap::from_vec(vec![0, 0, 0, 0, 90, 0, 0, 0, 0], 3, 3, 255).unwrap();
    blur(&mut img, 1, 1).unwrap();
    // corners average 4 pixels, edges 6, centre 9
    assert_eq!(img.data(), &[23, 15, 23, 15, 10, 15, 23, 15, 23]);
}

#[test]
fn huge_radius_averages_everything() {
    let mut img = GrayMap::from_vec(vec![0, 10, 20, 30], 2, 2, 255).unwrap();
    blur(&mut img, usize::MAX, usize::MAX).unwrap();
    assert_eq!(img.data(), &[15, 15, 15, 15]);
}

#[test]
fn empty_image_is_a_no_op() {
    let mut img = GrayMap::new(0, 0, 255).unwrap();
    blur(&mut img, 2, 2).unwrap();
    assert!(img.data().is_empty());
}
