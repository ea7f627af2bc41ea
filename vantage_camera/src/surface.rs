// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;
use std::io::Write;

use peniko::color::Rgba8;
use vello_cpu::{Pixmap, RenderContext, RenderMode, RenderSettings};

/// The camera's raster target: a render context and the pixmap it resolves into.
///
/// Both are allocated once and reused for every frame. Write access only
/// happens inside [`Surface::paint`]; readers get a [`Frame`].
pub(crate) struct Surface {
    ctx: RenderContext,
    pixmap: Pixmap,
    width: u16,
    height: u16,
    painted: bool,
}

impl fmt::Debug for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("painted", &self.painted)
            .finish_non_exhaustive()
    }
}

impl Surface {
    pub(crate) fn new(width: u16, height: u16) -> Self {
        let settings = RenderSettings {
            // The u8 pipeline keeps output identical across machines.
            render_mode: RenderMode::OptimizeSpeed,
            ..RenderSettings::default()
        };
        Self {
            ctx: RenderContext::new_with(width, height, settings),
            pixmap: Pixmap::new(width, height),
            width,
            height,
            painted: false,
        }
    }

    /// Clears the surface, runs `draw` against it and publishes the result.
    pub(crate) fn paint(&mut self, draw: impl FnOnce(&mut RenderContext)) -> Frame<'_> {
        self.ctx.reset();
        draw(&mut self.ctx);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut self.pixmap);
        self.painted = true;
        self.frame()
    }

    fn frame(&self) -> Frame<'_> {
        Frame {
            pixmap: &self.pixmap,
            width: self.width,
            height: self.height,
        }
    }

    /// The most recently painted frame, if any.
    pub(crate) fn last_frame(&self) -> Option<Frame<'_>> {
        self.painted.then(|| self.frame())
    }
}

/// Read-only view of a rendered frame.
///
/// A frame borrows the camera's surface. It is valid until the camera renders
/// again; copy the pixels out with [`Frame::to_rgba8`] to keep them longer.
///
/// The scene always starts from an opaque background, so the stored
/// premultiplied pixels equal their straight-alpha values.
#[derive(Clone, Copy)]
pub struct Frame<'a> {
    pixmap: &'a Pixmap,
    width: u16,
    height: u16,
}

impl fmt::Debug for Frame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl Frame<'_> {
    /// Frame width in pixels.
    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Frame height in pixels.
    #[must_use]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Color of the pixel at column `x`, row `y`, or `None` outside the frame.
    #[must_use]
    pub fn pixel(&self, x: u16, y: u16) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = usize::from(y) * usize::from(self.width) + usize::from(x);
        let p = self.pixmap.data().get(idx)?;
        Some(Rgba8 {
            r: p.r,
            g: p.g,
            b: p.b,
            a: p.a,
        })
    }

    /// Copies the frame into a row-major RGBA8 buffer.
    #[must_use]
    pub fn to_rgba8(&self) -> Vec<u8> {
        let data = self.pixmap.data();
        let mut bytes = Vec::with_capacity(data.len() * 4);
        for p in data {
            bytes.extend_from_slice(&[p.r, p.g, p.b, p.a]);
        }
        bytes
    }

    /// Encodes the frame as an RGBA PNG into `out`.
    pub fn write_png<W: Write>(&self, out: W) -> Result<(), png::EncodingError> {
        let mut encoder = png::Encoder::new(out, u32::from(self.width), u32::from(self.height));
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.to_rgba8())?;
        writer.finish()
    }
}
