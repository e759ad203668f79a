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
use crate::*;

impl Context {
    /// Auto-placed drop-down selecting one of `options`. Returns `true` when the selection changed.
    pub fn drop_down(&mut self, selected: &mut usize, options: &[&str]) -> bool {
        let size = self.styles.drop_down.header.size;
        let rect = self.next_rect(size);
        self.drop_down_ex(&rect, selected, options)
    }

    /// Drop-down whose header fills `rect`. Pressing the header opens the option list below it on layer `1`; the
    /// list stays open until an option is clicked, the header is pressed again or the mouse is pressed elsewhere.
    pub fn drop_down_ex(&mut self, rect: &UiRect, selected: &mut usize, options: &[&str]) -> bool {
        let id = self.ids.get_id_from_ptr(&*selected);
        let style = self.styles.drop_down;
        let res = self.evaluate(id, rect, FocusPolicy::ReleaseOnMouseUp);
        if res.just_activated {
            self.state.open_drop_down = if self.state.open_drop_down == id { Id::NONE } else { id };
        }
        let open = self.state.open_drop_down == id;

        self.draw_button_frame(rect, &style.header, res.visual_selected(open));
        let text = UiRect::new(rect.pos.x + self.styles.spacing, rect.pos.y, (rect.dim.x - rect.dim.y - self.styles.spacing).max(0.0), rect.dim.y);
        let current = options.get(*selected).copied().unwrap_or("");
        self.draw_text_in_rect(&text, current, &style.header.font, TextAlign::Left, VerticalAlign::Center);
        let arrow = UiRect::new(rect.right() - rect.dim.y, rect.pos.y, rect.dim.y, rect.dim.y);
        self.draw_arrow(&arrow, open, style.header.font.color);
        if !open {
            return false;
        }

        let prev_layer = self.layer();
        self.set_layer(1);
        let item_height = style.item.size.y;
        let list = UiRect::new(rect.pos.x, rect.bottom(), rect.dim.x, item_height * options.len() as Real);
        self.draw_widget_style(&list, &style.list);
        let mut changed = false;
        for (index, option) in options.iter().enumerate() {
            let item = UiRect::new(list.pos.x, list.pos.y + index as Real * item_height, list.dim.x, item_height);
            let res = self.evaluate(Id::from_index(id, index as u32 + 1), &item, FocusPolicy::ReleaseOnMouseUp);
            self.draw_button_frame(&item, &style.item, res.visual_selected(index == *selected));
            let label = UiRect::new(item.pos.x + self.styles.spacing, item.pos.y, (item.dim.x - self.styles.spacing).max(0.0), item.dim.y);
            self.draw_text_in_rect(&label, option, &style.item.font, TextAlign::Left, VerticalAlign::Center);
            if res.clicked {
                changed = *selected != index;
                *selected = index;
                self.state.open_drop_down = Id::NONE;
            }
        }
        self.state.register_overlay(list);

        let mouse = *self.state.mouse();
        if mouse.pressed() && !list.contains(mouse.pos) && !rect.contains(mouse.pos) {
            self.state.open_drop_down = Id::NONE;
        }
        self.set_layer(prev_layer);
        changed
    }
}
