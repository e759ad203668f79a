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
use super::{format_number, integer_filter, number_filter, ResourceState};
use crate::context::pick_font;
use crate::*;

const NUMBER_CAPACITY: usize = 32;

impl Context {
    /// Editable line of text with an explicit id.
    ///
    /// Pressing inside starts a session seeded from `buf`. While the widget is active, typed characters and editing
    /// keys reach the session and every edit is copied back into `buf` ([`ResourceState::CHANGE`]). Enter or a
    /// press outside commits the edit ([`ResourceState::SUBMIT`]).
    pub fn text_input_with_id(&mut self, id: Id, rect: &UiRect, buf: &mut String, capacity: usize, filter: Option<TextFilter>) -> ResourceState {
        let style = self.styles.text_input;
        let res = self.evaluate(id, rect, FocusPolicy::HoldUntilClickOutside);
        let mut state = ResourceState::NONE;
        if let Some(mut displaced) = self.state.take_displaced_session(id) {
            if displaced.take_changed() {
                state |= ResourceState::CHANGE;
            }
            *buf = displaced.buffer().to_string();
            state |= ResourceState::SUBMIT;
        }
        if res.just_activated && self.state.text_session(id).is_none() {
            self.state.begin_text_session(id, buf, capacity, filter);
        }

        let mut finished = false;
        let inner = rect.shrink(style.padding);
        let font = pick_font(&self.fonts, style.frame.font.font);
        let mut caret = None;
        if let Some(session) = self.state.text_session_mut(id) {
            if session.take_changed() {
                *buf = session.buffer().to_string();
                state |= ResourceState::CHANGE;
            }
            if session.is_committed() || !res.active {
                state |= ResourceState::SUBMIT;
                finished = true;
            } else {
                session.fit_cursor(font, style.frame.font.scale, inner.dim.x);
                let visible = session.buffer()[session.scroll()..].to_string();
                let caret_x = font.text_length(&session.buffer()[session.scroll()..session.cursor()], style.frame.font.scale);
                caret = Some((visible, caret_x));
                state |= ResourceState::ACTIVE;
            }
        }
        if finished {
            self.state.end_text_session(id);
            self.state.deactivate(id);
        }

        let visual = if state.is_active() { VisualState::Down } else { res.visual() };
        self.draw_button_frame(rect, &style.frame, visual);
        match caret {
            Some((visible, caret_x)) => {
                self.draw_text_in_rect(&inner, &visible, &style.frame.font, TextAlign::Left, VerticalAlign::Center);
                let height = self.line_height(&style.frame.font).min(inner.dim.y);
                let cursor = UiRect::new(inner.pos.x + caret_x, inner.pos.y + (inner.dim.y - height) * 0.5, style.cursor_width, height);
                self.draw_widget_style(&cursor, &style.cursor);
            }
            None => self.draw_text_in_rect(&inner, buf, &style.frame.font, TextAlign::Left, VerticalAlign::Center),
        }
        state
    }

    /// Auto-placed text input bound to `buf`, holding at most `capacity` characters.
    pub fn text_input(&mut self, buf: &mut String, capacity: usize) -> ResourceState {
        let size = self.styles.text_input.frame.size;
        let rect = self.next_rect(size);
        self.text_input_ex(&rect, buf, capacity)
    }

    /// Text input in `rect`.
    pub fn text_input_ex(&mut self, rect: &UiRect, buf: &mut String, capacity: usize) -> ResourceState {
        let id = self.ids.get_id_from_ptr(&*buf);
        self.text_input_with_id(id, rect, buf, capacity, None)
    }

    fn number_input_with_id(&mut self, id: Id, rect: &UiRect, value: &mut Real, as_int: bool) -> ResourceState {
        let mut buf = match self.state.displaced_session(id).or_else(|| self.state.text_session(id)) {
            Some(session) => session.buffer().to_string(),
            None => format_number(*value, as_int),
        };
        let filter: TextFilter = if as_int { integer_filter } else { number_filter };
        let state = self.text_input_with_id(id, rect, &mut buf, NUMBER_CAPACITY, Some(filter));
        if state.is_submitted() {
            if let Ok(parsed) = buf.trim().parse::<Real>() {
                *value = if as_int { parsed.round() } else { parsed };
            }
        }
        state
    }

    /// Auto-placed number input. The typed number is parsed when the edit is committed.
    pub fn number_input(&mut self, value: &mut Real, as_int: bool) -> ResourceState {
        let size = self.styles.text_input.frame.size;
        let rect = self.next_rect(size);
        self.number_input_ex(&rect, value, as_int)
    }

    /// Number input in `rect`.
    pub fn number_input_ex(&mut self, rect: &UiRect, value: &mut Real, as_int: bool) -> ResourceState {
        let id = self.ids.get_id_from_ptr(&*value);
        self.number_input_with_id(id, rect, value, as_int)
    }

    /// Auto-placed row of `N` number inputs, e.g. a 2, 3 or 4 component vector.
    pub fn vector_input<const N: usize>(&mut self, values: &mut [Real; N], as_int: bool) -> ResourceState {
        let size = self.styles.text_input.frame.size;
        let rect = self.next_rect(vec2f(0.0, size.y));
        self.vector_input_ex(&rect, values, as_int)
    }

    /// `N` number inputs sharing `rect`.
    pub fn vector_input_ex<const N: usize>(&mut self, rect: &UiRect, values: &mut [Real; N], as_int: bool) -> ResourceState {
        if N == 0 {
            return ResourceState::NONE;
        }
        let base = self.ids.get_id_from_ptr(&*values);
        let spacing = self.styles.spacing;
        let width = ((rect.dim.x - spacing * (N - 1) as Real) / N as Real).max(0.0);
        let mut state = ResourceState::NONE;
        for (index, value) in values.iter_mut().enumerate() {
            let cell = UiRect::new(rect.pos.x + index as Real * (width + spacing), rect.pos.y, width, rect.dim.y);
            state |= self.number_input_with_id(Id::from_index(base, index as u32), &cell, value, as_int);
        }
        state
    }
}
