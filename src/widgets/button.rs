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
use super::format_number;
use crate::*;

impl Context {
    /// Auto-placed push button. Returns `true` on the frame the button is clicked.
    pub fn button(&mut self, label: &str) -> bool {
        let size = self.styles.button.size;
        let rect = self.next_rect(size);
        self.button_ex(label, &rect)
    }

    /// Push button in `rect`.
    pub fn button_ex(&mut self, label: &str, rect: &UiRect) -> bool {
        let id = self.id_from_str(label);
        let style = self.styles.button;
        self.button_with_id(id, rect, label, &style, false).clicked
    }

    fn toggle_size(&self, label: &str, style: &ToggleStyle) -> Vec2f {
        let width = style.box_size + self.styles.spacing + self.text_width(label, &style.frame.font);
        vec2f(width, style.box_size.max(self.line_height(&style.frame.font)))
    }

    /// Draws a toggle box at `pos` followed by its label. The whole row is clickable.
    fn toggle(&mut self, id: Id, pos: Vec2f, label: &str, on: bool, style: &ToggleStyle, round: bool) -> Interaction {
        let size = self.toggle_size(label, style);
        let row = UiRect::new(pos.x, pos.y, size.x, size.y);
        let res = self.evaluate(id, &row, FocusPolicy::ReleaseOnMouseUp);
        let box_rect = UiRect::new(pos.x, pos.y + (size.y - style.box_size) * 0.5, style.box_size, style.box_size);
        let roundness = if round { style.box_size * 0.5 } else { 0.0 };
        let frame = style.frame.state(res.visual()).rounded(roundness);
        self.draw_widget_style(&box_rect, &frame);
        if on {
            let mark = style.mark.rounded(if round { (style.box_size * 0.5 - 4.0).max(0.0) } else { 0.0 });
            self.draw_widget_style(&box_rect.shrink(4.0), &mark);
        }
        let text_rect = UiRect::new(box_rect.right() + self.styles.spacing, pos.y, size.x - style.box_size - self.styles.spacing, size.y);
        self.draw_text_in_rect(&text_rect, label, &style.frame.font, TextAlign::Left, VerticalAlign::Center);
        res
    }

    /// Auto-placed check box. Returns the new checked state.
    pub fn check_box(&mut self, label: &str, checked: bool) -> bool {
        let size = self.toggle_size(label, &self.styles.check_box);
        let rect = self.next_rect(size);
        self.check_box_ex(rect.pos, label, checked)
    }

    /// Check box with its box at `pos`. Returns the new checked state.
    pub fn check_box_ex(&mut self, pos: Vec2f, label: &str, checked: bool) -> bool {
        let id = self.id_from_str(label);
        let style = self.styles.check_box;
        let res = self.toggle(id, pos, label, checked, &style, false);
        if res.clicked { !checked } else { checked }
    }

    /// Radio button `index` of a group sharing `selected`. Returns `true` when it becomes selected.
    pub fn radio_button(&mut self, index: usize, pos: Vec2f, label: &str, selected: &mut usize) -> bool {
        let group = self.ids.get_id_from_ptr(&*selected);
        let id = Id::from_index(group, index as u32);
        let style = self.styles.radio;
        let res = self.toggle(id, pos, label, *selected == index, &style, true);
        if res.clicked && *selected != index {
            *selected = index;
            return true;
        }
        false
    }

    /// Auto-placed group of radio buttons, one per label. Returns `true` when the selection changed.
    pub fn radio_buttons(&mut self, labels: &[&str], selected: &mut usize) -> bool {
        let mut changed = false;
        for (index, label) in labels.iter().enumerate() {
            let size = self.toggle_size(label, &self.styles.radio);
            let rect = self.next_rect(size);
            changed |= self.radio_button(index, rect.pos, label, selected);
        }
        changed
    }

    /// Auto-placed `[-] value [+]` stepper. Returns `true` when the value changed.
    pub fn number_stepper(&mut self, value: &mut Real, step: Real, as_int: bool) -> bool {
        let size = self.styles.text_input.frame.size;
        let rect = self.next_rect(size);
        self.number_stepper_ex(&rect, value, step, as_int)
    }

    /// Stepper in `rect`: a decrement button, the value, an increment button.
    pub fn number_stepper_ex(&mut self, rect: &UiRect, value: &mut Real, step: Real, as_int: bool) -> bool {
        let base = self.ids.get_id_from_ptr(&*value);
        let style = self.styles.stepper;
        let side = style.size.x.min(rect.dim.x * 0.5);
        let minus = UiRect::new(rect.pos.x, rect.pos.y, side, rect.dim.y);
        let plus = UiRect::new(rect.right() - side, rect.pos.y, side, rect.dim.y);
        let middle = UiRect::new(minus.right(), rect.pos.y, (rect.dim.x - 2.0 * side).max(0.0), rect.dim.y);

        let mut stepped = false;
        if self.button_with_id(Id::from_index(base, 0), &minus, "-", &style, false).clicked {
            *value -= step;
            stepped = true;
        }
        if self.button_with_id(Id::from_index(base, 1), &plus, "+", &style, false).clicked {
            *value += step;
            stepped = true;
        }
        if stepped && as_int {
            *value = value.round();
        }
        let text = format_number(*value, as_int);
        let font = self.styles.text;
        self.draw_text_in_rect(&middle, &text, &font, TextAlign::Center, VerticalAlign::Center);
        stepped
    }
}

#[cfg(test)]
mod tests {
    use crate::context::test_support::*;
    use crate::*;

    #[test]
    fn button_clicks_on_release_inside() {
        let mut ctx = context();
        let rect = ui_rect(0.0, 0.0, 100.0, 30.0);
        assert!(!frame(&mut ctx, 50.0, 15.0, ButtonState::Up, |ctx| ctx.button_ex("OK", &rect)));
        assert!(!frame(&mut ctx, 50.0, 15.0, ButtonState::Down, |ctx| ctx.button_ex("OK", &rect)));
        assert!(frame(&mut ctx, 50.0, 15.0, ButtonState::Up, |ctx| ctx.button_ex("OK", &rect)));
        assert!(!frame(&mut ctx, 50.0, 15.0, ButtonState::Up, |ctx| ctx.button_ex("OK", &rect)));
    }

    #[test]
    fn button_release_outside_does_not_click() {
        let mut ctx = context();
        let rect = ui_rect(0.0, 0.0, 100.0, 30.0);
        frame(&mut ctx, 50.0, 15.0, ButtonState::Down, |ctx| ctx.button_ex("OK", &rect));
        frame(&mut ctx, 300.0, 15.0, ButtonState::Down, |ctx| ctx.button_ex("OK", &rect));
        assert_eq!(ctx.state().active_item(), ctx.state().last_active_item());
        assert!(!frame(&mut ctx, 300.0, 15.0, ButtonState::Up, |ctx| ctx.button_ex("OK", &rect)));
        assert!(ctx.state().active_item().is_none());
    }

    #[test]
    fn pressed_button_draws_down_color() {
        let mut ctx = context();
        let down = ctx.style().button.down.color;
        frame(&mut ctx, 50.0, 15.0, ButtonState::Down, |ctx| ctx.button_ex("OK", &ui_rect(0.0, 0.0, 100.0, 30.0)));
        let list = ctx.draw_list();
        assert_eq!(list.len(), 2);
        let fill = list.items()[0].instances()[0].color;
        assert_eq!((fill.x, fill.y, fill.z, fill.w), (down.x, down.y, down.z, down.w));
        assert!(list.items()[1].is_font());
    }

    #[test]
    fn check_box_toggles_on_click() {
        let mut ctx = context();
        let mut checked = false;
        for button in [ButtonState::Down, ButtonState::Up] {
            checked = frame(&mut ctx, 5.0, 5.0, button, |ctx| ctx.check_box_ex(vec2f(0.0, 0.0), "opt", checked));
        }
        assert!(checked);
        // clicking the label toggles too
        for button in [ButtonState::Down, ButtonState::Up] {
            checked = frame(&mut ctx, 30.0, 5.0, button, |ctx| ctx.check_box_ex(vec2f(0.0, 0.0), "opt", checked));
        }
        assert!(!checked);
    }

    #[test]
    fn radio_buttons_select_one() {
        let mut ctx = context();
        let mut selected = 0;
        let mut changed = false;
        // second button sits one row (16 + spacing) below the first
        for button in [ButtonState::Down, ButtonState::Up] {
            changed = frame(&mut ctx, 10.0, 28.0, button, |ctx| ctx.radio_buttons(&["a", "b", "c"], &mut selected));
        }
        assert!(changed);
        assert_eq!(selected, 1);
    }

    #[test]
    fn stepper_steps_and_rounds() {
        let mut ctx = context();
        let rect = ui_rect(0.0, 0.0, 120.0, 24.0);
        let mut value = 1.4;
        for button in [ButtonState::Down, ButtonState::Up] {
            frame(&mut ctx, 110.0, 10.0, button, |ctx| ctx.number_stepper_ex(&rect, &mut value, 1.0, true));
        }
        assert_eq!(value, 2.0);
        for button in [ButtonState::Down, ButtonState::Up] {
            frame(&mut ctx, 5.0, 10.0, button, |ctx| ctx.number_stepper_ex(&rect, &mut value, 0.5, false));
        }
        assert_eq!(value, 1.5);
    }

    #[test]
    fn idle_integer_stepper_leaves_value() {
        let mut ctx = context();
        let rect = ui_rect(0.0, 0.0, 120.0, 24.0);
        let mut value = 1.4;
        let changed = frame(&mut ctx, 60.0, 10.0, ButtonState::Up, |ctx| ctx.number_stepper_ex(&rect, &mut value, 1.0, true));
        assert!(!changed);
        assert_eq!(value, 1.4);
    }
}
