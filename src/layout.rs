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

#[derive(Copy, Clone, Debug, Default)]
struct LayoutArea {
    body: UiRect,
    cursor: Vec2f,
    row_extent: Real,
    max: Option<Vec2f>,
}

/// Places auto-positioned widgets.
///
/// The cursor walks the innermost pushed area along the innermost pushed direction. Vertical placement stacks
/// widgets top to bottom; a horizontal run places them left to right and breaks to a new line when it is popped.
#[derive(Clone, Debug, Default)]
pub struct LayoutCursor {
    areas: Vec<LayoutArea>,
    directions: Vec<Direction>,
    spacing: Real,
    last_rect: UiRect,
}

impl LayoutCursor {
    /// Drops every pushed area and direction and starts over in `body`.
    pub fn reset(&mut self, body: UiRect, spacing: Real) {
        self.areas.clear();
        self.directions.clear();
        self.spacing = spacing;
        self.last_rect = UiRect::default();
        self.areas.push(LayoutArea {
            body,
            cursor: body.pos,
            ..LayoutArea::default()
        });
    }

    fn top(&self) -> LayoutArea { self.areas.last().copied().unwrap_or_default() }

    fn top_mut(&mut self) -> &mut LayoutArea {
        if self.areas.is_empty() {
            self.areas.push(LayoutArea::default());
        }
        let last = self.areas.len() - 1;
        &mut self.areas[last]
    }

    /// Number of pushed areas, the root area included.
    pub fn area_depth(&self) -> usize { self.areas.len() }

    /// Number of pushed directions.
    pub fn direction_depth(&self) -> usize { self.directions.len() }

    /// Area widgets are currently placed in.
    pub fn current_body(&self) -> UiRect { self.top().body }

    /// Where the next widget goes.
    pub fn position(&self) -> Vec2f { self.top().cursor }

    /// Current placement direction.
    pub fn direction(&self) -> Direction { self.directions.last().copied().unwrap_or_default() }

    /// Rectangle handed out by the last [`LayoutCursor::next`].
    pub fn last_rect(&self) -> UiRect { self.last_rect }

    /// Bottom-right corner of everything placed in the current area, relative to its origin.
    pub fn content_size(&self) -> Vec2f {
        let top = self.top();
        match top.max {
            Some(max) => vec2f((max.x - top.body.pos.x).max(0.0), (max.y - top.body.pos.y).max(0.0)),
            None => vec2f(0.0, 0.0),
        }
    }

    /// Reserves a rectangle of `size` at the cursor and advances it. A width of `0` or less fills the rest of the
    /// line.
    pub fn next(&mut self, size: Vec2f) -> UiRect {
        let direction = self.direction();
        let spacing = self.spacing;
        let area = self.top_mut();
        let width = if size.x > 0.0 { size.x } else { (area.body.right() - area.cursor.x).max(0.0) };
        let rect = UiRect::new(area.cursor.x, area.cursor.y, width, size.y);
        match direction {
            Direction::Vertical => {
                area.cursor.x = area.body.pos.x;
                area.cursor.y += size.y + spacing;
            }
            Direction::Horizontal => {
                area.cursor.x += width + spacing;
                area.row_extent = area.row_extent.max(size.y);
            }
        }
        area.max = Some(match area.max {
            Some(max) => vec2f(max.x.max(rect.right()), max.y.max(rect.bottom())),
            None => vec2f(rect.right(), rect.bottom()),
        });
        self.last_rect = rect;
        rect
    }

    /// Starts placing inside `body`, shifted by `-scroll`.
    pub fn push_area(&mut self, body: UiRect, scroll: Vec2f) {
        let body = body.translate(-scroll.x, -scroll.y);
        self.areas.push(LayoutArea {
            body,
            cursor: body.pos,
            ..LayoutArea::default()
        });
    }

    /// Returns to the enclosing area and reports the content size of the popped one.
    pub fn pop_area(&mut self) -> Vec2f {
        assert!(self.areas.len() > 1, "pop_area without a matching push_area");
        let content = self.content_size();
        self.areas.pop();
        content
    }

    /// Switches the placement direction until the matching [`LayoutCursor::pop_direction`].
    pub fn push_direction(&mut self, direction: Direction) {
        if direction == Direction::Horizontal {
            self.top_mut().row_extent = 0.0;
        }
        self.directions.push(direction);
    }

    /// Restores the previous direction. Leaving a horizontal run moves the cursor below it.
    pub fn pop_direction(&mut self) {
        let popped = match self.directions.pop() {
            Some(direction) => direction,
            None => panic!("pop_direction without a matching push_direction"),
        };
        if popped == Direction::Horizontal && self.direction() == Direction::Vertical {
            let spacing = self.spacing;
            let area = self.top_mut();
            if area.row_extent > 0.0 {
                area.cursor.y += area.row_extent + spacing;
            }
            area.cursor.x = area.body.pos.x;
            area.row_extent = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor() -> LayoutCursor {
        let mut c = LayoutCursor::default();
        c.reset(ui_rect(10.0, 10.0, 200.0, 300.0), 4.0);
        c
    }

    #[test]
    fn vertical_stacks_with_spacing() {
        let mut c = cursor();
        let a = c.next(vec2f(50.0, 20.0));
        let b = c.next(vec2f(50.0, 20.0));
        assert_eq!(a, ui_rect(10.0, 10.0, 50.0, 20.0));
        assert_eq!(b, ui_rect(10.0, 34.0, 50.0, 20.0));
        assert_eq!(c.last_rect(), b);
    }

    #[test]
    fn zero_width_fills_line() {
        let mut c = cursor();
        let r = c.next(vec2f(0.0, 20.0));
        assert_eq!(r.dim.x, 200.0);
    }

    #[test]
    fn horizontal_run_breaks_line_on_pop() {
        let mut c = cursor();
        c.push_direction(Direction::Horizontal);
        let a = c.next(vec2f(30.0, 20.0));
        let b = c.next(vec2f(30.0, 26.0));
        c.pop_direction();
        let d = c.next(vec2f(30.0, 20.0));
        assert_eq!(a.pos.x, 10.0);
        assert_eq!(b.pos.x, 44.0);
        assert_eq!(b.pos.y, 10.0);
        assert_eq!(d.pos.x, 10.0);
        assert_eq!(d.pos.y, 40.0);
        assert_eq!(c.direction_depth(), 0);
    }

    #[test]
    fn nested_area_reports_content_size() {
        let mut c = cursor();
        c.push_area(ui_rect(0.0, 100.0, 80.0, 50.0), vec2f(0.0, 10.0));
        let r = c.next(vec2f(40.0, 30.0));
        assert_eq!(r.pos.y, 90.0);
        c.next(vec2f(60.0, 30.0));
        let content = c.pop_area();
        assert_eq!(content.x, 60.0);
        assert_eq!(content.y, 64.0);
        assert_eq!(c.area_depth(), 1);
    }

    #[test]
    #[should_panic(expected = "pop_area without a matching push_area")]
    fn root_area_cannot_be_popped() {
        let mut c = cursor();
        c.pop_area();
    }
}
