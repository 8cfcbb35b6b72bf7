use crate::foundation::core::{Affine, BezPath, Rgba8, Viewport};
use crate::foundation::error::{BloomError, BloomResult};
use crate::foundation::math::mul_div255_u8;
use crate::render::surface::DrawSurface;

/// CPU render surface backed by a persistent `vello_cpu` pixmap.
///
/// Stroke commands queue in a render context; [`flush_frame`] rasterizes the
/// queued frame and composites it over everything drawn so far.
///
/// [`flush_frame`]: CpuSurface::flush_frame
pub struct CpuSurface {
    width: u16,
    height: u16,
    background: Rgba8,
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
    scratch: vello_cpu::Pixmap,
    dirty: bool,
}

impl CpuSurface {
    /// Create a surface filled with `background` (drawn opaque underneath
    /// the translucent petal strokes).
    pub fn new(viewport: Viewport, background: Rgba8) -> BloomResult<Self> {
        let width: u16 = viewport
            .width
            .try_into()
            .map_err(|_| BloomError::render(format!("surface width {} exceeds u16", viewport.width)))?;
        let height: u16 = viewport.height.try_into().map_err(|_| {
            BloomError::render(format!("surface height {} exceeds u16", viewport.height))
        })?;

        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        fill_pixmap(&mut pixmap, background);

        Ok(Self {
            width,
            height,
            background,
            ctx: vello_cpu::RenderContext::new(width, height),
            pixmap,
            scratch: vello_cpu::Pixmap::new(width, height),
            dirty: false,
        })
    }

    /// Surface width in pixels.
    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    /// Surface height in pixels.
    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    /// Rasterize strokes queued since the last flush and composite them over
    /// the persistent pixmap. No-op when nothing was drawn.
    ///
    /// The render context writes only the current frame over transparency, so
    /// the frame goes through a scratch pixmap and is src-over blended onto
    /// the accumulated content; earlier frames and the background survive.
    pub fn flush_frame(&mut self) {
        if !self.dirty {
            return;
        }
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut self.scratch);
        self.ctx.reset();
        premul_over_in_place(
            self.pixmap.data_as_u8_slice_mut(),
            self.scratch.data_as_u8_slice(),
        );
        self.dirty = false;
    }

    /// Current pixels as row-major RGBA8 bytes.
    ///
    /// The background is opaque, so the composited output's premultiplied
    /// form coincides with straight alpha and encodes directly to PNG.
    pub fn rgba8(&self) -> Vec<u8> {
        self.pixmap.data_as_u8_slice().to_vec()
    }

    /// Current pixels packed as `0RGB` u32 values for windowed display.
    pub fn argb_u32(&self) -> Vec<u32> {
        self.pixmap
            .data_as_u8_slice()
            .chunks_exact(4)
            .map(|px| (u32::from(px[0]) << 16) | (u32::from(px[1]) << 8) | u32::from(px[2]))
            .collect()
    }
}

impl DrawSurface for CpuSurface {
    fn stroke(&mut self, path: &BezPath, transform: Affine, color: Rgba8, width: f64) {
        self.ctx.set_transform(affine_to_cpu(transform));
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
        self.ctx
            .set_stroke(vello_cpu::kurbo::Stroke::new(width));
        self.ctx.stroke_path(&bezpath_to_cpu(path));
        self.dirty = true;
    }

    fn clear(&mut self) {
        self.ctx.reset();
        self.dirty = false;
        fill_pixmap(&mut self.pixmap, self.background);
    }
}

/// Src-over blend one premultiplied RGBA8 buffer onto another in place.
fn premul_over_in_place(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let sa = s[3];
        if sa == 0 {
            continue;
        }
        let inv = 255u16 - u16::from(sa);
        for c in 0..4 {
            d[c] = s[c].saturating_add(mul_div255_u8(u16::from(d[c]), inv));
        }
    }
}

fn fill_pixmap(pixmap: &mut vello_cpu::Pixmap, color: Rgba8) {
    let premul = color.to_premul_bytes();
    for px in pixmap.data_as_u8_slice_mut().chunks_exact_mut(4) {
        px.copy_from_slice(&premul);
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
