//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
// -----------------------------------------------------------------------------
// Ported to rust from https://github.com/rxi/microui/ and the original license
//
// Copyright (c) 2020 rxi
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to
// deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
// FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS
// IN THE SOFTWARE.
//
#![deny(missing_docs)]
//! `immediate-ui` is the core of an immediate-mode GUI: the application redraws its widgets every frame, the
//! [`InteractionState`] decides which widget is hot or active, and the [`Drawer`] batches the emitted primitives
//! into a layered, depth-ordered [`DrawList`] that any [`Renderer`] backend can consume.
//!
//! A frame looks like this:
//!
//! ```ignore
//! ui.update_mouse_state(x, y, ButtonState::Down);
//! ui.begin_frame();
//! if ui.button("OK") { /* ... */ }
//! ui.end_frame();
//! ui.process_draw_list();
//! ```

mod context;
mod draw_list;
mod drawer;
mod error;
mod font;
mod id;
mod input;
mod interaction;
mod layout;
mod renderer;
mod style;
mod text_layout;
mod ui;
mod widgets;

pub use context::*;
pub use draw_list::*;
pub use drawer::*;
pub use error::*;
pub use font::*;
pub use id::*;
pub use input::*;
pub use interaction::*;
pub use layout::*;
pub use renderer::*;
pub use rs_math3d::*;
pub use style::*;
pub use text_layout::TextLine;
pub use ui::*;
pub use widgets::*;

/// Floating-point type used by geometry, layout and colors.
pub type Real = f32;

#[derive(Copy, Clone, Debug, Default)]
/// Axis aligned rectangle with rounded corners, in screen pixels (y grows downwards).
pub struct UiRect {
    /// Top-left corner.
    pub pos: Vec2f,
    /// Width and height.
    pub dim: Vec2f,
    /// Corner radius in pixels, `0` for sharp corners.
    pub roundness: Real,
}

impl PartialEq for UiRect {
    fn eq(&self, other: &Self) -> bool {
        self.pos.x == other.pos.x && self.pos.y == other.pos.y && self.dim.x == other.dim.x && self.dim.y == other.dim.y && self.roundness == other.roundness
    }
}

impl UiRect {
    /// Creates a sharp-cornered rectangle.
    pub fn new(x: Real, y: Real, w: Real, h: Real) -> Self {
        Self {
            pos: Vec2f::new(x, y),
            dim: Vec2f::new(w, h),
            roundness: 0.0,
        }
    }

    /// Returns a copy with the given corner radius.
    pub fn with_roundness(mut self, roundness: Real) -> Self {
        self.roundness = roundness;
        self
    }

    /// Right edge.
    pub fn right(&self) -> Real { self.pos.x + self.dim.x }

    /// Bottom edge.
    pub fn bottom(&self) -> Real { self.pos.y + self.dim.y }

    /// Returns `true` if `p` lies inside the rectangle. The right and bottom edges are exclusive.
    pub fn contains(&self, p: Vec2f) -> bool { p.x >= self.pos.x && p.x < self.right() && p.y >= self.pos.y && p.y < self.bottom() }

    /// Returns `true` if the two rectangles overlap.
    pub fn overlaps(&self, other: &UiRect) -> bool {
        self.pos.x < other.right() && other.pos.x < self.right() && self.pos.y < other.bottom() && other.pos.y < self.bottom()
    }

    /// Returns the overlapping area of two rectangles, empty when they do not overlap.
    pub fn intersect(&self, other: &UiRect) -> UiRect {
        let x0 = self.pos.x.max(other.pos.x);
        let y0 = self.pos.y.max(other.pos.y);
        let x1 = self.right().min(other.right()).max(x0);
        let y1 = self.bottom().min(other.bottom()).max(y0);
        UiRect::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// Moves the rectangle by the given offset.
    pub fn translate(mut self, dx: Real, dy: Real) -> Self {
        self.pos.x += dx;
        self.pos.y += dy;
        self
    }

    /// Shrinks (or grows for negative `n`) the rectangle uniformly on all sides.
    pub fn shrink(self, n: Real) -> Self {
        UiRect {
            pos: Vec2f::new(self.pos.x + n, self.pos.y + n),
            dim: Vec2f::new((self.dim.x - n * 2.0).max(0.0), (self.dim.y - n * 2.0).max(0.0)),
            roundness: self.roundness,
        }
    }
}

/// Convenience constructor for [`Vec2f`].
pub fn vec2f(x: Real, y: Real) -> Vec2f { Vec2f::new(x, y) }

/// Convenience constructor for [`UiRect`].
pub fn ui_rect(x: Real, y: Real, w: Real, h: Real) -> UiRect { UiRect::new(x, y, w, h) }

/// Converts an 8-bit RGBA color to the normalized floating-point form stored in vertices.
pub fn color(r: u8, g: u8, b: u8, a: u8) -> Vec4f { Vec4f::new(r as Real / 255.0, g as Real / 255.0, b as Real / 255.0, a as Real / 255.0) }

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Handle referencing a renderer-owned texture. The raw value `0` means "no texture".
pub struct TextureHandle(u32);

impl TextureHandle {
    /// Handle used for untextured geometry.
    pub const NONE: TextureHandle = TextureHandle(0);

    /// Wraps a raw backend handle.
    pub fn new(raw: u32) -> Self { Self(raw) }

    /// Returns the raw numeric identifier stored inside the handle.
    pub fn raw(self) -> u32 { self.0 }

    /// Returns `true` for the "no texture" handle.
    pub fn is_none(self) -> bool { self.0 == 0 }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
/// A texture known to the UI: its renderer handle and pixel size.
pub struct Texture {
    /// Renderer handle.
    pub handle: TextureHandle,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
/// How a texture is mapped onto a rectangle.
pub enum TextureScale {
    /// The whole texture stretched over the rectangle.
    #[default]
    Image,
    /// Corners kept at their pixel size, edges and center stretched.
    NineSlice,
    /// Like [`TextureScale::NineSlice`] without the center patch.
    Border,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
/// Horizontal text alignment.
pub enum TextAlign {
    /// Flush left.
    #[default]
    Left,
    /// Centered.
    Center,
    /// Flush right.
    Right,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
/// Vertical text alignment inside a rectangle.
pub enum VerticalAlign {
    /// Flush top.
    Top,
    /// Centered.
    #[default]
    Center,
    /// Flush bottom.
    Bottom,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
/// Axis along which auto-placed widgets advance.
pub enum Direction {
    /// Top to bottom.
    #[default]
    Vertical,
    /// Left to right.
    Horizontal,
}
