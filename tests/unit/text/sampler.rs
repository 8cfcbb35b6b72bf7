use super::*;

use rand::SeedableRng as _;
use rand::rngs::StdRng;

use crate::foundation::error::BloomResult;
use crate::text::mask::PixelMask;

/// Fake measurer: each char is half as wide as the slice is tall; ink fills
/// a horizontal band given as fractions of the mask height.
struct BandRaster {
    band: (f64, f64),
    rasterize_calls: Vec<(String, u32, u32)>,
}

impl BandRaster {
    fn new(band: (f64, f64)) -> Self {
        Self {
            band,
            rasterize_calls: Vec::new(),
        }
    }

    fn all_ink() -> Self {
        Self::new((0.0, 1.0))
    }
}

impl WordRaster for BandRaster {
    fn measure(&mut self, word: &str, height_px: u32) -> BloomResult<u32> {
        Ok(word.chars().count() as u32 * height_px / 2)
    }

    fn rasterize(&mut self, word: &str, width_px: u32, height_px: u32) -> BloomResult<PixelMask> {
        self.rasterize_calls
            .push((word.to_string(), width_px, height_px));
        let band = self.band;
        Ok(PixelMask::from_fn(width_px, height_px, |_, y| {
            let f = f64::from(y) / f64::from(height_px.max(1));
            f >= band.0 && f < band.1
        }))
    }
}

fn opts() -> SamplerOptions {
    SamplerOptions::default()
}

#[test]
fn split_words_on_non_word_characters() {
    assert_eq!(split_words("hello, world!"), vec!["hello", "world"]);
    assert_eq!(split_words("don't stop"), vec!["don", "t", "stop"]);
    assert_eq!(split_words("__a__ b"), vec!["__a__", "b"]);
    assert_eq!(split_words(""), vec![""]);
    assert_eq!(split_words("?! ."), vec![""]);
}

#[test]
fn seed_cell_size_scales_with_viewport() {
    let opts = opts();
    assert_eq!(
        seed_cell_size(Viewport::new(400, 200).unwrap(), &opts),
        4
    );
    // Tiny viewports clamp to 1 instead of degenerating to 0.
    assert_eq!(seed_cell_size(Viewport::new(20, 20).unwrap(), &opts), 1);
}

#[test]
fn all_points_lie_within_the_viewport() {
    let viewport = Viewport::new(800, 600).unwrap();
    let mut raster = BandRaster::all_ink();
    let mut rng = StdRng::seed_from_u64(7);

    let points = seed_points(
        "Flowers are everywhere",
        viewport,
        &mut raster,
        &mut rng,
        &opts(),
    )
    .unwrap();

    assert!(!points.is_empty());
    for p in &points {
        assert!(viewport.contains(*p), "point {p:?} escaped the viewport");
    }
}

#[test]
fn word_height_unchanged_when_widest_word_fits() {
    let viewport = Viewport::new(400, 200).unwrap();
    let mut raster = BandRaster::all_ink();
    let mut rng = StdRng::seed_from_u64(1);

    seed_points("HI", viewport, &mut raster, &mut rng, &opts()).unwrap();

    // "HI" measures 2 * 200 / 2 = 200 <= padded 360, so no scaling.
    assert_eq!(raster.rasterize_calls, vec![("HI".to_string(), 200, 200)]);
}

#[test]
fn scale_down_shrinks_height_and_widths_proportionally() {
    let viewport = Viewport::new(400, 200).unwrap();
    let mut raster = BandRaster::all_ink();
    let mut rng = StdRng::seed_from_u64(1);

    seed_points("HIHIHIHI", viewport, &mut raster, &mut rng, &opts()).unwrap();

    // Measured 800 > padded 360: scale 0.45 applies to height and width.
    let (_, width, height) = raster.rasterize_calls[0].clone();
    assert_eq!(width, 360);
    assert_eq!(height, 90);
    assert!(height < 200);
}

#[test]
fn hi_scenario_samples_only_lit_padded_positions() {
    // Phrase "HI" at 400x200: one word, wordHeight 200, cell round(600/160)=4,
    // ink band rows [30, 150), horizontal centering offset (360-200)/2+20.
    let viewport = Viewport::new(400, 200).unwrap();
    let mut raster = BandRaster::new((0.15, 0.75));
    let mut rng = StdRng::seed_from_u64(42);

    let points = seed_points("HI", viewport, &mut raster, &mut rng, &opts()).unwrap();

    assert!(!points.is_empty());
    for p in &points {
        assert!(p.x >= 100.0 && p.x <= 300.0, "x {p:?} outside centered word");
        assert!(p.y >= 20.0 && p.y <= 180.0, "y {p:?} outside padded bounds");
        // Every sample maps back to a lit mask row.
        let row = p.y - 20.0;
        assert!((30.0..150.0).contains(&row), "unlit row sampled: {row}");
    }
}

#[test]
fn empty_phrase_degrades_to_no_points() {
    let viewport = Viewport::new(400, 200).unwrap();
    let mut raster = BandRaster::all_ink();
    let mut rng = StdRng::seed_from_u64(3);

    let points = seed_points("", viewport, &mut raster, &mut rng, &opts()).unwrap();
    assert!(points.is_empty());

    let points = seed_points("?! .", viewport, &mut raster, &mut rng, &opts()).unwrap();
    assert!(points.is_empty());
}

#[test]
fn seeded_rng_reproduces_the_same_cloud() {
    let viewport = Viewport::new(640, 480).unwrap();
    let run = || {
        let mut raster = BandRaster::new((0.2, 0.8));
        let mut rng = StdRng::seed_from_u64(99);
        seed_points("garden", viewport, &mut raster, &mut rng, &opts()).unwrap()
    };
    assert_eq!(run(), run());
}
