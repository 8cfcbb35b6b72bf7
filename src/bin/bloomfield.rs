use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use rand::{SeedableRng as _, rngs::StdRng};

use bloomfield::{
    CpuSurface, Garden, GardenOptions, GlyphRaster, Point, Rgba8, SamplerOptions, Viewport,
    rot13, seed_points,
};

#[derive(Parser, Debug)]
#[command(name = "bloomfield", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the animation headlessly and write the final frame as a PNG.
    Render(RenderArgs),
    /// Open an interactive window; move the pointer over the text to grow blooms.
    Play(PlayArgs),
}

#[derive(Parser, Debug)]
struct CommonArgs {
    /// Phrase to rasterize. A leading '!' marks a rot13-enciphered phrase.
    #[arg(long, default_value = "Flowers are everywhere")]
    phrase: String,

    /// Viewport width in pixels.
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// TTF/OTF font used to measure and rasterize words. Defaults to the
    /// first system sans-serif found.
    #[arg(long)]
    font: Option<PathBuf>,

    /// RNG seed for reproducible layouts; omit for entropy.
    #[arg(long)]
    seed: Option<u64>,

    /// Options JSON overriding garden/sampler defaults.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Maximum number of frames to advance after triggering all blooms.
    #[arg(long, default_value_t = 600)]
    frames: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct AppConfig {
    garden: GardenOptions,
    sampler: SamplerOptions,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Play(args) => cmd_play(args),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let Some(path) = path else {
        return Ok(AppConfig::default());
    };
    let bytes = fs::read(path).with_context(|| format!("read config '{}'", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| "parse options JSON")
}

fn load_font(path: Option<&Path>) -> anyhow::Result<Vec<u8>> {
    if let Some(path) = path {
        return fs::read(path).with_context(|| format!("read font '{}'", path.display()));
    }
    find_system_sans().context("no system sans-serif font found; pass --font")
}

/// Well-known sans-serif locations, checked in order.
fn find_system_sans() -> Option<Vec<u8>> {
    const CANDIDATES: &[&str] = &[
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/Library/Fonts/Arial Unicode.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ];
    CANDIDATES.iter().find_map(|p| fs::read(p).ok())
}

/// Strip the cipher marker and decode rot13 phrases.
fn decipher(phrase: &str) -> String {
    match phrase.strip_prefix('!') {
        Some(rest) => rot13(rest),
        None => phrase.to_string(),
    }
}

fn seed_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn populate_garden(
    common: &CommonArgs,
    config: &AppConfig,
    rng: &mut StdRng,
) -> anyhow::Result<Garden> {
    let viewport = Viewport::new(common.width, common.height)?;
    let phrase = decipher(&common.phrase);

    let font_bytes = load_font(common.font.as_deref())?;
    let mut raster = GlyphRaster::new(font_bytes)?;
    let points = seed_points(&phrase, viewport, &mut raster, rng, &config.sampler)?;
    tracing::info!(
        points = points.len(),
        font = raster.family_name(),
        "seeded garden"
    );

    let mut garden = Garden::new(viewport, config.garden);
    for point in &points {
        garden.create_bloom_at(*point, rng);
    }
    Ok(garden)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let config = load_config(args.common.config.as_deref())?;
    let mut rng = seed_rng(args.common.seed);
    let mut garden = populate_garden(&args.common, &config, &mut rng)?;
    garden.trigger_all();

    let mut surface = CpuSurface::new(garden.viewport(), Rgba8::WHITE)?;
    let mut frames_rendered = 0u32;
    for _ in 0..args.frames {
        garden.render_frame(&mut surface);
        surface.flush_frame();
        frames_rendered += 1;
        if garden.is_empty() {
            break;
        }
    }
    tracing::info!(frames = frames_rendered, remaining = garden.len(), "render done");

    let image = image::RgbaImage::from_raw(surface.width(), surface.height(), surface.rgba8())
        .context("assemble output image")?;
    image
        .save(&args.out)
        .with_context(|| format!("write PNG '{}'", args.out.display()))?;
    Ok(())
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

    let config = load_config(args.common.config.as_deref())?;
    let mut rng = seed_rng(args.common.seed);
    let mut garden = populate_garden(&args.common, &config, &mut rng)?;

    let viewport = garden.viewport();
    let mut surface = CpuSurface::new(viewport, Rgba8::WHITE)?;

    let mut window = Window::new(
        "bloomfield",
        viewport.width as usize,
        viewport.height as usize,
        WindowOptions::default(),
    )
    .map_err(|e| anyhow::anyhow!("open window: {e}"))?;
    window.set_target_fps(60);

    let start_distance = garden.options().bloom_start_distance;
    let mut mouse_was_down = false;
    while window.is_open() && !window.is_key_down(Key::Escape) {
        if let Some((x, y)) = window.get_mouse_pos(MouseMode::Discard) {
            garden.trigger_near(Point::new(f64::from(x), f64::from(y)), start_distance);
        }

        // Click starts everything at once; R re-seeds from scratch.
        let mouse_down = window.get_mouse_down(MouseButton::Left);
        if mouse_down && !mouse_was_down {
            garden.trigger_all();
        }
        mouse_was_down = mouse_down;

        if window.is_key_pressed(Key::R, KeyRepeat::No) {
            garden = populate_garden(&args.common, &config, &mut rng)?;
            bloomfield::DrawSurface::clear(&mut surface);
        }

        garden.render_frame(&mut surface);
        surface.flush_frame();
        window
            .update_with_buffer(
                &surface.argb_u32(),
                viewport.width as usize,
                viewport.height as usize,
            )
            .map_err(|e| anyhow::anyhow!("update window: {e}"))?;
    }

    Ok(())
}
