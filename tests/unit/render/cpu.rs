use super::*;

fn small_surface() -> CpuSurface {
    CpuSurface::new(Viewport::new(64, 64).unwrap(), Rgba8::WHITE).unwrap()
}

#[test]
fn new_surface_is_filled_with_the_background() {
    let surface = small_surface();
    assert_eq!(surface.width(), 64);
    assert_eq!(surface.height(), 64);
    assert!(surface.rgba8().iter().all(|&b| b == 255));
}

#[test]
fn flushed_strokes_change_pixels_and_persist() {
    let mut surface = small_surface();

    let mut path = BezPath::new();
    path.move_to((4.0, 32.0));
    path.line_to((60.0, 32.0));
    surface.stroke(&path, Affine::IDENTITY, Rgba8::new(0, 0, 0, 255), 2.0);
    surface.flush_frame();

    let after_first = surface.rgba8();
    assert!(after_first.iter().any(|&b| b != 255), "stroke left no ink");

    // A second, empty flush must not disturb prior frames.
    surface.flush_frame();
    assert_eq!(surface.rgba8(), after_first);
}

#[test]
fn later_frames_composite_over_earlier_strokes_and_the_background() {
    let mut surface = small_surface();
    let horizontal = |y: f64| {
        let mut path = BezPath::new();
        path.move_to((4.0, y));
        path.line_to((60.0, y));
        path
    };
    let px = |pixels: &[u8], x: usize, y: usize| -> [u8; 4] {
        let i = (y * 64 + x) * 4;
        [pixels[i], pixels[i + 1], pixels[i + 2], pixels[i + 3]]
    };

    surface.stroke(&horizontal(16.0), Affine::IDENTITY, Rgba8::new(0, 0, 0, 255), 2.0);
    surface.flush_frame();

    surface.stroke(&horizontal(48.0), Affine::IDENTITY, Rgba8::new(0, 0, 0, 255), 2.0);
    surface.flush_frame();

    let pixels = surface.rgba8();
    // The first frame's ink survives the second frame's flush.
    assert!(px(&pixels, 32, 16)[0] < 128, "first frame's stroke was erased");
    assert!(px(&pixels, 32, 48)[0] < 128, "second frame's stroke missing");
    // The opaque background survives: corner untouched, nothing transparent.
    assert_eq!(px(&pixels, 0, 0), [255, 255, 255, 255]);
    assert!(pixels.chunks_exact(4).all(|p| p[3] == 255));
}

#[test]
fn clear_restores_the_background() {
    let mut surface = small_surface();

    let mut path = BezPath::new();
    path.move_to((0.0, 0.0));
    path.line_to((63.0, 63.0));
    surface.stroke(&path, Affine::IDENTITY, Rgba8::new(10, 10, 10, 255), 3.0);
    surface.flush_frame();

    surface.clear();
    assert!(surface.rgba8().iter().all(|&b| b == 255));
}

#[test]
fn argb_u32_packs_opaque_background_as_white() {
    let surface = small_surface();
    let buffer = surface.argb_u32();
    assert_eq!(buffer.len(), 64 * 64);
    assert!(buffer.iter().all(|&px| px == 0x00FF_FFFF));
}

#[test]
fn surfaces_larger_than_u16_are_rejected() {
    let viewport = Viewport::new(70_000, 10).unwrap();
    assert!(CpuSurface::new(viewport, Rgba8::WHITE).is_err());
}
