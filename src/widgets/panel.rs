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
use crate::*;

/// Pixels scrolled per wheel notch.
const WHEEL_STEP: Real = 30.0;

impl Context {
    /// Opens a movable, collapsible panel. The first call creates it at `initial`; later frames reuse the
    /// persisted position, size, scroll and collapsed state.
    ///
    /// Always pair with [`Context::end_panel`], whether the panel is open or not. Returns `false` while the panel is
    /// collapsed; widgets emitted then are neither visible nor hoverable.
    pub fn begin_panel(&mut self, label: &str, initial: UiRect, auto_size: bool) -> bool {
        let id = self.id_from_str(label);
        let style = self.styles.panel;
        let mut ps = *self.state.panel_state_mut(id, || PanelState {
            rect: initial,
            auto_size,
            ..PanelState::default()
        });
        ps.auto_size = auto_size;
        if ps.auto_size && !ps.closed {
            ps.rect.dim.y = style.header_height + ps.content_size.y + style.padding * 2.0;
        }

        let header = UiRect::new(ps.rect.pos.x, ps.rect.pos.y, ps.rect.dim.x, style.header_height);
        let drag = self.evaluate(Id::from_index(id, 0), &header, FocusPolicy::ReleaseOnMouseUp);
        let toggle_rect = UiRect::new(header.right() - header.dim.y, header.pos.y, header.dim.y, header.dim.y);
        let toggle = self.evaluate(Id::from_index(id, 1), &toggle_rect, FocusPolicy::ReleaseOnMouseUp);
        if drag.active && !drag.just_activated {
            let delta = self.state.mouse().delta;
            ps.rect = ps.rect.translate(delta.x, delta.y);
        }
        if toggle.clicked {
            ps.closed = !ps.closed;
            log::debug!("panel {:?} {}", label, if ps.closed { "collapsed" } else { "expanded" });
        }

        let header = UiRect::new(ps.rect.pos.x, ps.rect.pos.y, ps.rect.dim.x, style.header_height);
        let toggle_rect = UiRect::new(header.right() - header.dim.y, header.pos.y, header.dim.y, header.dim.y);
        let title = UiRect::new(header.pos.x + style.padding, header.pos.y, (header.dim.x - header.dim.y - style.padding).max(0.0), header.dim.y);
        self.draw_button_frame(&header, &style.header, drag.visual());
        self.draw_text_in_rect(&title, label, &style.header.font, TextAlign::Left, VerticalAlign::Center);
        self.draw_arrow(&toggle_rect, !ps.closed, style.header.font.color);

        let body = if ps.closed {
            UiRect::new(header.pos.x, header.bottom(), header.dim.x, 0.0)
        } else {
            UiRect::new(header.pos.x, header.bottom(), header.dim.x, (ps.rect.dim.y - style.header_height).max(0.0))
        };
        let mut content = body.shrink(style.padding);
        if !ps.closed {
            self.draw_widget_style(&body, &style.body);
            let max_scroll = (ps.content_size.y - content.dim.y).max(0.0);
            if max_scroll > 0.0 {
                if self.state.mouse_over(&body) {
                    let wheel = self.use_scroll_offset();
                    ps.scroll -= wheel * WHEEL_STEP;
                }
                let thickness = self.styles.scroll_bar.thickness;
                let bar = UiRect::new(body.right() - thickness, body.pos.y, thickness, body.dim.y);
                ps.scroll = ps.scroll.clamp(0.0, max_scroll);
                ps.scroll = self.scroll_bar_ex(Id::from_index(id, 2), &bar, ps.scroll, content.dim.y, ps.content_size.y, Direction::Vertical);
                content.dim.x = (content.dim.x - thickness).max(0.0);
            } else {
                ps.scroll = 0.0;
            }
        }

        *self.state.panel_state_mut(id, PanelState::default) = ps;
        self.state.panels.push(id);
        self.drawer.push_rect_mask(&body);
        self.state.push_clip(body);
        self.state.layout.push_area(content, vec2f(0.0, ps.scroll));
        self.ids.push_id(id);
        !ps.closed
    }

    /// Closes the innermost panel and records the size of what was laid out in it.
    pub fn end_panel(&mut self) {
        let id = match self.state.panels.pop() {
            Some(id) => id,
            None => panic!("end_panel without a matching begin_panel"),
        };
        self.ids.pop_id();
        let content = self.state.layout.pop_area();
        self.state.pop_clip();
        self.drawer.pop_mask();
        let ps = self.state.panel_state_mut(id, PanelState::default);
        if !ps.closed && (ps.content_size.x != content.x || ps.content_size.y != content.y) {
            log::trace!("panel {:?} content resized to {}x{}", id, content.x, content.y);
            ps.content_size = content;
        }
    }
}
