use super::*;

use rand::SeedableRng as _;
use rand::rngs::StdRng;

#[test]
fn defaults_match_the_tuned_animation() {
    let opts = GardenOptions::default();
    assert_eq!(opts.petal_count, ValueRange::new(5.0, 15.0));
    assert_eq!(opts.petal_stretch, ValueRange::new(0.1, 3.0));
    assert_eq!(opts.grow_factor, ValueRange::new(0.1, 1.0));
    assert_eq!(opts.bloom_start_distance, 20.0);
    assert_eq!(opts.color_opacity, 0.5);
    assert_eq!(opts.bloom_radius_factors, ValueRange::new(240.0, 75.0));
}

#[test]
fn samples_stay_inside_their_ranges() {
    let mut rng = StdRng::seed_from_u64(5);
    let range = ValueRange::new(0.1, 3.0);
    for _ in 0..200 {
        let v = range.sample(&mut rng);
        assert!((0.1..=3.0).contains(&v));
    }

    let ints = ValueRange::new(5.0, 15.0);
    for _ in 0..200 {
        let n = ints.sample_int(&mut rng);
        assert!((5..=15).contains(&n));
    }
}

#[test]
fn degenerate_ranges_return_their_minimum() {
    let mut rng = StdRng::seed_from_u64(5);
    assert_eq!(ValueRange::new(2.0, 2.0).sample(&mut rng), 2.0);
    assert_eq!(ValueRange::new(7.0, 3.0).sample_int(&mut rng), 7);
}

#[test]
fn partial_json_config_keeps_remaining_defaults() {
    let opts: GardenOptions =
        serde_json::from_str(r#"{ "bloom_start_distance": 35.0 }"#).unwrap();
    assert_eq!(opts.bloom_start_distance, 35.0);
    assert_eq!(opts.petal_count, GardenOptions::default().petal_count);
}
