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
use crate::Real;

#[derive(Clone, Copy, Debug, PartialEq)]
/// One laid out line of text: a byte range of the source string and its measured width.
pub struct TextLine {
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character, trailing wrap spaces included.
    pub end: usize,
    /// Width of the visible characters.
    pub width: Real,
}

fn push_wrapped_line(lines: &mut Vec<TextLine>, buf: &str, line_start: usize, line_end: usize, max_width: Option<Real>, measure: &dyn Fn(&str) -> Real) {
    let line = &buf[line_start..line_end];
    if line.is_empty() {
        lines.push(TextLine {
            start: line_start,
            end: line_start,
            width: 0.0,
        });
        return;
    }

    let max_width = match max_width {
        Some(w) if w > 0.0 => w,
        _ => {
            lines.push(TextLine {
                start: line_start,
                end: line_end,
                width: measure(line),
            });
            return;
        }
    };

    let mut offset = 0;
    let mut seg_start = 0;
    let mut seg_width = 0.0;
    for word in line.split_inclusive(' ') {
        let word_width = measure(word);
        let visible_width = measure(word.trim_end_matches(' '));
        if seg_width > 0.0 && seg_width + visible_width > max_width {
            lines.push(TextLine {
                start: line_start + seg_start,
                end: line_start + offset,
                width: measure(line[seg_start..offset].trim_end_matches(' ')),
            });
            seg_start = offset;
            seg_width = 0.0;
        }
        seg_width += word_width;
        offset += word.len();
    }

    lines.push(TextLine {
        start: line_start + seg_start,
        end: line_start + line.len(),
        width: measure(line[seg_start..].trim_end_matches(' ')),
    });
}

/// Splits `buf` on newlines and, when `max_width` is given, word-wraps each line to fit it.
/// Always returns at least one line.
pub(crate) fn build_text_lines(buf: &str, max_width: Option<Real>, measure: &dyn Fn(&str) -> Real) -> Vec<TextLine> {
    let mut lines = Vec::new();
    let mut line_start = 0;
    for (idx, ch) in buf.char_indices() {
        if ch == '\n' {
            push_wrapped_line(&mut lines, buf, line_start, idx, max_width, measure);
            line_start = idx + ch.len_utf8();
        }
    }
    push_wrapped_line(&mut lines, buf, line_start, buf.len(), max_width, measure);
    lines
}
