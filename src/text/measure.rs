use crate::foundation::error::{BloomError, BloomResult};
use crate::text::mask::PixelMask;

/// Zero-sized Parley brush; mask rasterization only needs coverage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct InkBrush;

/// Text-measurement and rasterization capability injected into the sampler.
///
/// Keeping font metrics behind this seam keeps the sampler pure; tests drive
/// it with a fake measurer and a synthetic ink mask.
pub trait WordRaster {
    /// Measured ink width in pixels of `word` rendered at `height_px`.
    fn measure(&mut self, word: &str, height_px: u32) -> BloomResult<u32>;

    /// Rasterize `word` into a `width_px x height_px` ink mask, glyphs drawn
    /// at baseline `0.75 * height_px`.
    fn rasterize(&mut self, word: &str, width_px: u32, height_px: u32) -> BloomResult<PixelMask>;
}

/// Fraction of the word slice height at which the glyph baseline sits.
const BASELINE_FACTOR: f32 = 0.75;

/// Production [`WordRaster`] backed by Parley shaping and `vello_cpu`
/// glyph rasterization over caller-provided font bytes.
pub struct GlyphRaster {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<InkBrush>,
    font: vello_cpu::peniko::FontData,
    family_name: String,
}

impl GlyphRaster {
    /// Register `font_bytes` (TTF/OTF) and build shaping contexts around the
    /// first family they contain.
    pub fn new(font_bytes: Vec<u8>) -> BloomResult<Self> {
        let mut font_ctx = parley::FontContext::default();

        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.clone()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            BloomError::validation("no font families registered from font bytes")
        })?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| BloomError::validation("registered font family has no name"))?
            .to_string();

        let font = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(font_bytes),
            0,
        );

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            font,
            family_name,
        })
    }

    /// Primary family name resolved from the registered font bytes.
    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    fn layout(&mut self, word: &str, size_px: f32) -> parley::Layout<InkBrush> {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, word, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));

        let mut layout: parley::Layout<InkBrush> = builder.build(word);
        layout.break_all_lines(None);
        layout
    }
}

impl WordRaster for GlyphRaster {
    fn measure(&mut self, word: &str, height_px: u32) -> BloomResult<u32> {
        if word.is_empty() || height_px == 0 {
            return Ok(0);
        }

        let layout = self.layout(word, height_px as f32);
        let mut width = 0.0f32;
        for line in layout.lines() {
            width = width.max(line.metrics().advance);
        }
        Ok(width.ceil() as u32)
    }

    fn rasterize(&mut self, word: &str, width_px: u32, height_px: u32) -> BloomResult<PixelMask> {
        if word.is_empty() || width_px == 0 || height_px == 0 {
            return Ok(PixelMask::new(width_px, height_px));
        }

        let w: u16 = width_px
            .try_into()
            .map_err(|_| BloomError::render(format!("mask width {width_px} exceeds u16")))?;
        let h: u16 = height_px
            .try_into()
            .map_err(|_| BloomError::render(format!("mask height {height_px} exceeds u16")))?;

        let layout = self.layout(word, height_px as f32);

        // Parley lays lines out from the top; shift so the first-line baseline
        // lands at BASELINE_FACTOR * height, matching the layout the sampler
        // was tuned against.
        let ascent = layout
            .lines()
            .next()
            .map(|line| line.metrics().ascent)
            .unwrap_or(0.0);
        let dy = f64::from(BASELINE_FACTOR * height_px as f32 - ascent);

        let mut ctx = vello_cpu::RenderContext::new(w, h);
        ctx.set_transform(vello_cpu::kurbo::Affine::translate((0.0, dy)));
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(255, 255, 255, 255));
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&self.font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        ctx.flush();

        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        ctx.render_to_pixmap(&mut pixmap);

        PixelMask::from_rgba8(width_px, height_px, pixmap.data_as_u8_slice(), 0)
    }
}
