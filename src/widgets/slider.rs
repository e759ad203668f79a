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

fn along(direction: Direction, v: Vec2f) -> Real {
    match direction {
        Direction::Vertical => v.y,
        Direction::Horizontal => v.x,
    }
}

/// Thumb of a scroll bar over `track`, or `None` when the content fits in the view.
pub(crate) fn scroll_thumb(track: &UiRect, direction: Direction, offset: Real, view: Real, content: Real, min_thumb: Real) -> Option<UiRect> {
    let max_scroll = content - view;
    let length = along(direction, track.dim);
    if max_scroll <= 0.0 || length <= 0.0 {
        return None;
    }
    let thumb_len = (length * view / content).max(min_thumb).min(length);
    let travel = length - thumb_len;
    let at = offset.clamp(0.0, max_scroll) / max_scroll * travel;
    Some(match direction {
        Direction::Vertical => UiRect::new(track.pos.x, track.pos.y + at, track.dim.x, thumb_len),
        Direction::Horizontal => UiRect::new(track.pos.x + at, track.pos.y, thumb_len, track.dim.y),
    })
}

impl Context {
    /// Auto-placed horizontal slider over `0..=1`. Returns `true` when the value changed.
    pub fn slider(&mut self, percent: &mut Real) -> bool {
        let size = self.styles.slider.size;
        let rect = self.next_rect(size);
        self.slider_ex(&rect, percent)
    }

    /// Slider in `rect`. Pressing the track jumps the thumb under the pointer; dragging moves it by the pointer
    /// movement.
    pub fn slider_ex(&mut self, rect: &UiRect, percent: &mut Real) -> bool {
        let id = self.ids.get_id_from_ptr(&*percent);
        let style = self.styles.slider;
        let old = *percent;
        let travel = (rect.dim.x - style.thumb_width).max(0.0);
        let res = self.evaluate(id, rect, FocusPolicy::ReleaseOnMouseUp);
        let mouse = *self.state.mouse();
        if travel > 0.0 {
            let thumb_x = rect.pos.x + percent.clamp(0.0, 1.0) * travel;
            let on_thumb = mouse.pos.x >= thumb_x && mouse.pos.x < thumb_x + style.thumb_width;
            if res.just_activated && !on_thumb {
                *percent = (mouse.pos.x - rect.pos.x - style.thumb_width * 0.5) / travel;
            } else if res.active && !res.just_activated {
                *percent += mouse.delta.x / travel;
            }
        }
        *percent = percent.clamp(0.0, 1.0);

        self.draw_widget_style(rect, &style.track);
        let thumb = UiRect::new(rect.pos.x + *percent * travel, rect.pos.y, style.thumb_width.min(rect.dim.x), rect.dim.y);
        self.draw_button_frame(&thumb, &style.thumb, res.visual());
        *percent != old
    }

    /// Scroll bar at `pos`, `view_size` long along `direction`. Returns the new offset into the content.
    pub fn scroll_bar(&mut self, pos: Vec2f, offset: Real, view_size: Real, content_size: Real, direction: Direction) -> Real {
        let mut key = [0u8; 8];
        key[..4].copy_from_slice(&pos.x.to_le_bytes());
        key[4..].copy_from_slice(&pos.y.to_le_bytes());
        let id = self.ids.get_id_u32(hash_data(&key, 0));
        let thickness = self.styles.scroll_bar.thickness;
        let rect = match direction {
            Direction::Vertical => UiRect::new(pos.x, pos.y, thickness, view_size),
            Direction::Horizontal => UiRect::new(pos.x, pos.y, view_size, thickness),
        };
        self.scroll_bar_ex(id, &rect, offset, view_size, content_size, direction)
    }

    /// Scroll bar with an explicit id filling `rect`. Dragging the thumb scrolls proportionally to the content.
    pub fn scroll_bar_ex(&mut self, id: Id, rect: &UiRect, offset: Real, view_size: Real, content_size: Real, direction: Direction) -> Real {
        let style = self.styles.scroll_bar;
        let max_scroll = (content_size - view_size).max(0.0);
        self.draw_widget_style(rect, &style.track);
        let thumb = match scroll_thumb(rect, direction, offset, view_size, content_size, style.min_thumb) {
            Some(thumb) => thumb,
            None => return 0.0,
        };
        let res = self.evaluate(id, &thumb, FocusPolicy::ReleaseOnMouseUp);
        let mut offset = offset;
        if res.active && !res.just_activated {
            let length = along(direction, rect.dim) - along(direction, thumb.dim);
            if length > 0.0 {
                offset += along(direction, self.state.mouse().delta) * max_scroll / length;
            }
        }
        let offset = offset.clamp(0.0, max_scroll);
        let thumb = scroll_thumb(rect, direction, offset, view_size, content_size, style.min_thumb).unwrap_or(thumb);
        self.draw_button_frame(&thumb, &style.thumb, res.visual());
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::test_support::*;

    #[test]
    fn thumb_is_proportional() {
        let track = ui_rect(0.0, 0.0, 10.0, 100.0);
        let thumb = scroll_thumb(&track, Direction::Vertical, 0.0, 50.0, 200.0, 5.0).unwrap();
        assert_eq!(thumb.dim.y, 25.0);
        assert_eq!(thumb.pos.y, 0.0);
        let thumb = scroll_thumb(&track, Direction::Vertical, 150.0, 50.0, 200.0, 5.0).unwrap();
        assert_eq!(thumb.pos.y, 75.0);
        assert!(scroll_thumb(&track, Direction::Vertical, 0.0, 200.0, 100.0, 5.0).is_none());
        let tiny = scroll_thumb(&track, Direction::Vertical, 0.0, 1.0, 10_000.0, 12.0).unwrap();
        assert_eq!(tiny.dim.y, 12.0);
    }

    #[test]
    fn pressing_track_jumps_then_drag_tracks_delta() {
        let mut ctx = context();
        let rect = ui_rect(0.0, 0.0, 108.0, 20.0);
        let mut value = 0.0;
        // travel is 100 once the 8 wide thumb is taken out
        frame(&mut ctx, 0.0, 10.0, ButtonState::Up, |_| ());
        let changed = frame(&mut ctx, 54.0, 10.0, ButtonState::Down, |ctx| ctx.slider_ex(&rect, &mut value));
        assert!(changed);
        assert!((value - 0.5).abs() < 1e-6);
        // dragging outside the widget keeps tracking the pointer movement
        frame(&mut ctx, 74.0, 40.0, ButtonState::Down, |ctx| ctx.slider_ex(&rect, &mut value));
        assert!((value - 0.7).abs() < 1e-6);
        frame(&mut ctx, 500.0, 40.0, ButtonState::Down, |ctx| ctx.slider_ex(&rect, &mut value));
        assert_eq!(value, 1.0);
        let changed = frame(&mut ctx, 500.0, 40.0, ButtonState::Up, |ctx| ctx.slider_ex(&rect, &mut value));
        assert!(!changed);
    }

    #[test]
    fn pressing_thumb_does_not_jump() {
        let mut ctx = context();
        let rect = ui_rect(0.0, 0.0, 108.0, 20.0);
        let mut value = 0.25;
        let changed = frame(&mut ctx, 27.0, 10.0, ButtonState::Down, |ctx| ctx.slider_ex(&rect, &mut value));
        assert!(!changed);
        assert_eq!(value, 0.25);
    }

    #[test]
    fn scroll_bar_drag_scales_to_content() {
        let mut ctx = context();
        // 100 long track, thumb 25 long, 75 pixels of travel for 300 of scroll
        let mut offset = 0.0;
        let track_pos = vec2f(300.0, 0.0);
        frame(&mut ctx, 305.0, 10.0, ButtonState::Up, |_| ());
        offset = frame(&mut ctx, 305.0, 10.0, ButtonState::Down, |ctx| ctx.scroll_bar(track_pos, offset, 100.0, 400.0, Direction::Vertical));
        assert_eq!(offset, 0.0);
        offset = frame(&mut ctx, 305.0, 40.0, ButtonState::Down, |ctx| ctx.scroll_bar(track_pos, offset, 100.0, 400.0, Direction::Vertical));
        assert_eq!(offset, 120.0);
        offset = frame(&mut ctx, 305.0, 400.0, ButtonState::Down, |ctx| ctx.scroll_bar(track_pos, offset, 100.0, 400.0, Direction::Vertical));
        assert_eq!(offset, 300.0);
    }

    #[test]
    fn scroll_bar_without_overflow_is_inert() {
        let mut ctx = context();
        let offset = frame(&mut ctx, 5.0, 5.0, ButtonState::Down, |ctx| ctx.scroll_bar(vec2f(0.0, 0.0), 30.0, 100.0, 80.0, Direction::Vertical));
        assert_eq!(offset, 0.0);
        assert_eq!(ctx.draw_list().len(), 1);
    }
}
