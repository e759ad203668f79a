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
//! Widgets built on [`Context::evaluate`] and the [`Drawer`].
//!
//! Each widget takes its rectangle (or reserves one from the layout cursor), derives its id, evaluates the
//! interaction once, draws the look matching its visual state and returns its result right away.
mod button;
mod drop_down;
mod menu;
mod panel;
mod slider;
mod text;
mod text_input;

use crate::context::pick_font;
use crate::*;
use bitflags::*;

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// State bits returned by editing widgets.
    pub struct ResourceState : u32 {
        /// The bound value changed.
        const CHANGE = 4;
        /// Editing was committed (Enter or focus loss).
        const SUBMIT = 2;
        /// The widget is being edited.
        const ACTIVE = 1;
        /// No interaction.
        const NONE = 0;
    }
}

impl ResourceState {
    /// Returns `true` if the widget changed its bound value.
    pub fn is_changed(&self) -> bool { self.intersects(Self::CHANGE) }
    /// Returns `true` if the widget committed its edit.
    pub fn is_submitted(&self) -> bool { self.intersects(Self::SUBMIT) }
    /// Returns `true` if the widget is being edited.
    pub fn is_active(&self) -> bool { self.intersects(Self::ACTIVE) }
    /// Returns `true` if the state contains no flags.
    pub fn is_none(&self) -> bool { self.bits() == 0 }
}

/// Accepts the characters of a decimal number.
pub fn number_filter(ch: char) -> bool { ch.is_ascii_digit() || ch == '-' || ch == '.' }

/// Accepts the characters of an integer.
pub fn integer_filter(ch: char) -> bool { ch.is_ascii_digit() || ch == '-' }

pub(crate) fn format_number(value: Real, as_int: bool) -> String {
    if as_int { format!("{}", value.round() as i64) } else { format!("{:.2}", value) }
}

impl Context {
    pub(crate) fn draw_button_frame(&mut self, rect: &UiRect, style: &ButtonStyle, visual: VisualState) { self.draw_widget_style(rect, style.state(visual)); }

    /// Button with an explicit id, the building block of composite widgets.
    pub(crate) fn button_with_id(&mut self, id: Id, rect: &UiRect, label: &str, style: &ButtonStyle, selected: bool) -> Interaction {
        let res = self.evaluate(id, rect, FocusPolicy::ReleaseOnMouseUp);
        self.draw_button_frame(rect, style, res.visual_selected(selected));
        self.draw_text_in_rect(rect, label, &style.font, TextAlign::Center, VerticalAlign::Center);
        res
    }

    pub(crate) fn text_width(&self, text: &str, style: &FontStyle) -> Real { pick_font(&self.fonts, style.font).text_length(text, style.scale) }

    pub(crate) fn line_height(&self, style: &FontStyle) -> Real { pick_font(&self.fonts, style.font).text_height(style.scale) }

    /// Small filled triangle pointing down (`open`) or right.
    pub(crate) fn draw_arrow(&mut self, rect: &UiRect, open: bool, color: Vec4f) {
        let c = vec2f(rect.pos.x + rect.dim.x * 0.5, rect.pos.y + rect.dim.y * 0.5);
        let r = rect.dim.x.min(rect.dim.y) * 0.25;
        let points = if open {
            [vec2f(c.x - r, c.y - r * 0.5), vec2f(c.x + r, c.y - r * 0.5), vec2f(c.x, c.y + r * 0.5)]
        } else {
            [vec2f(c.x - r * 0.5, c.y - r), vec2f(c.x + r * 0.5, c.y), vec2f(c.x - r * 0.5, c.y + r)]
        };
        self.drawer.draw_shape(&points, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_filters() {
        assert!("-12.5".chars().all(number_filter));
        assert!(!number_filter('e'));
        assert!(!integer_filter('.'));
    }

    #[test]
    fn numbers_format_by_kind() {
        assert_eq!(format_number(2.6, true), "3");
        assert_eq!(format_number(2.5, false), "2.50");
        assert_eq!(format_number(-0.25, false), "-0.25");
    }
}
