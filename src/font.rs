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
//! Font collaborator.
//!
//! Rasterization and atlas packing live outside the crate. A [`Font`] implementation only reports glyph metrics,
//! the line metrics and the atlas texture; measuring, line breaking and glyph geometry are provided on top.
use crate::text_layout::build_text_lines;
use crate::*;

#[derive(Copy, Clone, Debug, Default)]
/// Metrics of one glyph at scale `1`.
pub struct GlyphMetrics {
    /// Atlas window as `(u, v, width, height)` in normalized coordinates.
    pub uv: Vec4f,
    /// Offset from the pen position to the glyph's top-left corner, `y` measured upwards from the baseline.
    pub bearing: Vec2f,
    /// Glyph bitmap size in pixels.
    pub dimension: Vec2f,
    /// Horizontal pen advance in pixels.
    pub advance: Real,
}

#[derive(Copy, Clone, Debug, Default)]
/// A positioned glyph ready to be emitted.
pub struct GlyphQuad {
    /// Screen rectangle.
    pub rect: UiRect,
    /// Atlas window.
    pub uv: Vec4f,
}

#[derive(Copy, Clone, Debug, PartialEq)]
/// Word wrapping parameters.
pub struct TextWrap {
    /// Width lines are wrapped to and aligned in.
    pub max_width: Real,
    /// Alignment of each line inside `max_width`.
    pub align: TextAlign,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
/// Index of a font registered with the context. `FontId(0)` is the default font.
pub struct FontId(pub usize);

/// Glyph metrics source backing text rendering.
pub trait Font {
    /// Atlas texture the glyphs are sampled from.
    fn texture_handle(&self) -> TextureHandle;
    /// Distance between two lines at scale `1`.
    fn line_height(&self) -> Real;
    /// Distance from the top of a line to its baseline at scale `1`.
    fn baseline(&self) -> Real;
    /// Metrics for `ch`, `None` when the font has no glyph for it.
    fn glyph(&self, ch: char) -> Option<GlyphMetrics>;

    /// Pen advance of one character.
    fn char_advance(&self, ch: char, scale: Real) -> Real { self.glyph(ch).map(|g| g.advance * scale).unwrap_or(0.0) }

    /// Width of a single line of text.
    fn text_length(&self, text: &str, scale: Real) -> Real { text.chars().map(|ch| self.char_advance(ch, scale)).sum() }

    /// Width of the first `n` characters of `text`.
    fn n_text_length(&self, text: &str, n: usize, scale: Real) -> Real { text.chars().take(n).map(|ch| self.char_advance(ch, scale)).sum() }

    /// Height of one line.
    fn text_height(&self, scale: Real) -> Real { self.line_height() * scale }

    /// Number of leading characters of `text` that fit entirely in `length`.
    fn position_at_length(&self, text: &str, length: Real, scale: Real) -> usize {
        let mut width = 0.0;
        for (i, ch) in text.chars().enumerate() {
            let advance = self.char_advance(ch, scale);
            if width + advance > length {
                return i;
            }
            width += advance;
        }
        text.chars().count()
    }

    /// Breaks `text` into lines, word-wrapping to `max_width` when given.
    fn wrap_lines(&self, text: &str, scale: Real, max_width: Option<Real>) -> Vec<TextLine> {
        build_text_lines(text, max_width, &|s: &str| self.text_length(s, scale))
    }

    /// Height of `text` once broken into lines.
    fn wrapped_text_height(&self, text: &str, scale: Real, max_width: Option<Real>) -> Real {
        self.wrap_lines(text, scale, max_width).len() as Real * self.text_height(scale)
    }

    /// Positions every visible glyph of `text` with its first line's top-left corner at `origin`, calling `emit`
    /// for each. Returns the number of lines.
    fn layout_glyphs(&self, text: &str, origin: Vec2f, scale: Real, wrap: Option<TextWrap>, emit: &mut dyn FnMut(GlyphQuad)) -> usize {
        let lines = self.wrap_lines(text, scale, wrap.map(|w| w.max_width));
        let line_height = self.text_height(scale);
        let baseline = self.baseline();
        for (row, line) in lines.iter().enumerate() {
            let mut pen = match wrap {
                Some(TextWrap { max_width, align: TextAlign::Center }) => origin.x + (max_width - line.width) * 0.5,
                Some(TextWrap { max_width, align: TextAlign::Right }) => origin.x + max_width - line.width,
                _ => origin.x,
            };
            let top = origin.y + row as Real * line_height;
            for ch in text[line.start..line.end].chars() {
                let Some(glyph) = self.glyph(ch) else { continue };
                if glyph.dimension.x > 0.0 && glyph.dimension.y > 0.0 {
                    let rect = UiRect::new(
                        pen + glyph.bearing.x * scale,
                        top + (baseline - glyph.bearing.y) * scale,
                        glyph.dimension.x * scale,
                        glyph.dimension.y * scale,
                    );
                    emit(GlyphQuad { rect, uv: glyph.uv });
                }
                pen += glyph.advance * scale;
            }
        }
        lines.len()
    }

    /// Raw triangles for `text`, six vertices per visible glyph.
    fn text_vertices(&self, text: &str, origin: Vec2f, scale: Real, color: Vec4f, depth: Real, wrap: Option<TextWrap>) -> Vec<Vertex> {
        let mut vertices = Vec::new();
        self.layout_glyphs(text, origin, scale, wrap, &mut |quad| vertices.extend_from_slice(&quad_vertices(&quad.rect, quad.uv, depth, color)));
        vertices
    }

    /// Instanced quads for `text`, one per visible glyph.
    fn text_instances(&self, text: &str, origin: Vec2f, scale: Real, color: Vec4f, depth: Real, wrap: Option<TextWrap>) -> Vec<DrawInstance> {
        let mut instances = Vec::new();
        self.layout_glyphs(text, origin, scale, wrap, &mut |quad| {
            instances.push(DrawInstance {
                pos: quad.rect.pos,
                depth,
                dimension: quad.rect.dim,
                roundness: 0.0,
                color,
                uv: quad.uv,
            })
        });
        instances
    }
}


#[cfg(test)]
mod tests {
    use super::test_font::MonoFont;
    use super::*;

    #[test]
    fn measures_text() {
        let font = MonoFont;
        assert_eq!(font.text_length("abc", 1.0), 24.0);
        assert_eq!(font.text_length("abc", 2.0), 48.0);
        assert_eq!(font.n_text_length("abcdef", 2, 1.0), 16.0);
        assert_eq!(font.text_height(1.5), 15.0);
    }

    #[test]
    fn position_at_length_counts_whole_glyphs() {
        let font = MonoFont;
        assert_eq!(font.position_at_length("abcdef", 20.0, 1.0), 2);
        assert_eq!(font.position_at_length("abcdef", 24.0, 1.0), 3);
        assert_eq!(font.position_at_length("ab", 100.0, 1.0), 2);
        assert_eq!(font.position_at_length("ab", 0.0, 1.0), 0);
    }

    #[test]
    fn spaces_advance_without_geometry() {
        let font = MonoFont;
        let instances = font.text_instances("a b", Vec2f::new(10.0, 20.0), 1.0, Vec4f::new(1.0, 1.0, 1.0, 1.0), 0.5, None);
        assert_eq!(instances.len(), 2);
        assert_eq!(instances[0].pos.x, 10.0);
        assert_eq!(instances[0].pos.y, 20.0);
        assert_eq!(instances[1].pos.x, 26.0);
        assert_eq!(instances[1].depth, 0.5);
    }

    #[test]
    fn vertices_are_six_per_glyph() {
        let font = MonoFont;
        let vertices = font.text_vertices("ab", Vec2f::new(0.0, 0.0), 1.0, Vec4f::new(1.0, 1.0, 1.0, 1.0), 0.1, None);
        assert_eq!(vertices.len(), 12);
        assert_eq!(vertices[2].pos.x, 8.0);
        assert_eq!(vertices[2].pos.y, 10.0);
        assert_eq!(vertices[2].tex_coord.x, 0.0625);
    }

    #[test]
    fn wrapped_lines_are_aligned() {
        let font = MonoFont;
        let wrap = TextWrap { max_width: 30.0, align: TextAlign::Right };
        let mut quads = Vec::new();
        let lines = font.layout_glyphs("ab cd", Vec2f::new(0.0, 0.0), 1.0, Some(wrap), &mut |q| quads.push(q));
        assert_eq!(lines, 2);
        assert_eq!(quads.len(), 4);
        // "ab" right aligned in 30 starts at 14, the second line sits one line lower
        assert_eq!(quads[0].rect.pos.x, 14.0);
        assert_eq!(quads[2].rect.pos.y, 10.0);
        assert_eq!(font.wrapped_text_height("ab cd", 1.0, Some(30.0)), 20.0);
    }
}
