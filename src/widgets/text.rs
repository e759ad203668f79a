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
use crate::context::pick_font;
use crate::*;

impl Context {
    /// Auto-placed single line of text in `color` with the default text style.
    pub fn text(&mut self, label: &str, color: Vec4f) {
        let style = FontStyle { color, ..self.styles.text };
        let size = self.text_size(label, &style);
        let rect = self.next_rect(size);
        self.draw_text_in_pos(rect.pos, label, &style);
    }

    /// Auto-placed text in the default text style.
    pub fn label(&mut self, label: &str) {
        let color = self.styles.text.color;
        self.text(label, color);
    }

    /// Draws `text` with its top-left corner at `pos`. Returns the number of lines drawn.
    pub fn draw_text_in_pos(&mut self, pos: Vec2f, text: &str, style: &FontStyle) -> usize {
        let font = pick_font(&self.fonts, style.font);
        let options = TextOptions {
            scale: style.scale,
            ..TextOptions::default()
        };
        self.drawer.draw_text(font, text, pos, style.color, &options)
    }

    /// Draws one line of `text` aligned inside `rect`. Text wider than `rect` is cropped to it.
    pub fn draw_text_in_rect(&mut self, rect: &UiRect, text: &str, style: &FontStyle, align: TextAlign, v_align: VerticalAlign) {
        let font = pick_font(&self.fonts, style.font);
        let width = font.text_length(text, style.scale);
        let height = font.text_height(style.scale);
        let x = match align {
            TextAlign::Left => rect.pos.x,
            TextAlign::Center => rect.pos.x + (rect.dim.x - width) * 0.5,
            TextAlign::Right => rect.right() - width,
        };
        let y = match v_align {
            VerticalAlign::Top => rect.pos.y,
            VerticalAlign::Center => rect.pos.y + (rect.dim.y - height) * 0.5,
            VerticalAlign::Bottom => rect.bottom() - height,
        };
        let overflow = width > rect.dim.x || height > rect.dim.y;
        let options = TextOptions {
            scale: style.scale,
            wrap: None,
            crop: overflow.then_some(*rect),
        };
        let x = if overflow && align != TextAlign::Left { x.max(rect.pos.x) } else { x };
        self.drawer.draw_text(font, text, vec2f(x, y), style.color, &options);
    }

    /// Auto-placed paragraph word-wrapped to `width` (the rest of the line when `0`), as tall as its lines.
    /// Returns the number of lines.
    pub fn multi_line_text(&mut self, text: &str, width: Real) -> usize {
        let style = self.styles.text;
        let layout = self.state.layout();
        let width = if width > 0.0 { width } else { (layout.current_body().right() - layout.position().x).max(0.0) };
        let height = pick_font(&self.fonts, style.font).wrapped_text_height(text, style.scale, Some(width));
        let rect = self.next_rect(vec2f(width, height));
        self.draw_multi_line_text(&rect, text, &style, TextAlign::Left, VerticalAlign::Top)
    }

    /// Draws `text` word-wrapped to the width of `rect`, aligned inside it and cropped to it. A paragraph taller
    /// than `rect` starts at its top. Returns the number of lines.
    pub fn draw_multi_line_text(&mut self, rect: &UiRect, text: &str, style: &FontStyle, align: TextAlign, v_align: VerticalAlign) -> usize {
        let font = pick_font(&self.fonts, style.font);
        let height = font.wrapped_text_height(text, style.scale, Some(rect.dim.x));
        let y = match v_align {
            _ if height >= rect.dim.y => rect.pos.y,
            VerticalAlign::Top => rect.pos.y,
            VerticalAlign::Center => rect.pos.y + (rect.dim.y - height) * 0.5,
            VerticalAlign::Bottom => rect.bottom() - height,
        };
        let options = TextOptions {
            scale: style.scale,
            wrap: Some(TextWrap { max_width: rect.dim.x, align }),
            crop: Some(*rect),
        };
        self.drawer.draw_text(font, text, vec2f(rect.pos.x, y), style.color, &options)
    }

    /// Maps `texture` onto `rect`.
    pub fn draw_texture_in_rect(&mut self, rect: &UiRect, texture: &Texture, tint: Vec4f, scale: TextureScale, offset: Vec4f) {
        self.drawer.draw_texture(rect, texture, tint, scale, offset);
    }

    /// Auto-placed image at its native size.
    pub fn image(&mut self, texture: &Texture, tint: Vec4f) {
        let rect = self.next_rect(vec2f(texture.width as Real, texture.height as Real));
        self.drawer.draw_texture(&rect, texture, tint, TextureScale::Image, Vec4f::new(0.0, 0.0, 0.0, 0.0));
    }
}
