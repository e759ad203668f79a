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

/// Renderer-independent UI state: interaction, draw lists, styles, fonts and the frame bracket.
///
/// Every widget is a method on the context. Between [`Context::begin_frame`] and [`Context::end_frame`] the
/// application calls widgets in back-to-front order; the resulting draw list is then available from
/// [`Context::draw_list`].
pub struct Context {
    pub(crate) state: InteractionState,
    pub(crate) drawer: Drawer,
    pub(crate) styles: Styles,
    pub(crate) fonts: Vec<Box<dyn Font>>,
    pub(crate) ids: IdStack,
    screen: Vec2f,
    pending_screen: Option<Vec2f>,
    in_frame: bool,
    frame_count: u64,
}

pub(crate) fn pick_font(fonts: &[Box<dyn Font>], id: FontId) -> &dyn Font {
    match fonts.get(id.0) {
        Some(font) => font.as_ref(),
        None => fonts[0].as_ref(),
    }
}

impl Context {
    /// Creates a context for a `width` x `height` screen using `default_font` as [`FontId`] `0`.
    pub fn new(width: i32, height: i32, default_font: Box<dyn Font>) -> Self { Self::with_policy(width, height, default_font, DrawPolicy::default()) }

    /// Like [`Context::new`] with an explicit emission policy.
    pub fn with_policy(width: i32, height: i32, default_font: Box<dyn Font>, policy: DrawPolicy) -> Self {
        Self {
            state: InteractionState::new(),
            drawer: Drawer::new(policy),
            styles: Styles::default(),
            fonts: vec![default_font],
            ids: IdStack::new(),
            screen: vec2f(width as Real, height as Real),
            pending_screen: None,
            in_frame: false,
            frame_count: 0,
        }
    }

    /// Registers another font.
    pub fn add_font(&mut self, font: Box<dyn Font>) -> FontId {
        self.fonts.push(font);
        FontId(self.fonts.len() - 1)
    }

    /// Font registered as `id`, the default font when unknown.
    pub fn font(&self, id: FontId) -> &dyn Font { pick_font(&self.fonts, id) }

    /// Widget styles.
    pub fn style(&self) -> &Styles { &self.styles }

    /// Mutable widget styles.
    pub fn style_mut(&mut self) -> &mut Styles { &mut self.styles }

    /// Interaction state.
    pub fn state(&self) -> &InteractionState { &self.state }

    /// Mutable interaction state.
    pub fn state_mut(&mut self) -> &mut InteractionState { &mut self.state }

    /// The drawer, for custom emission.
    pub fn drawer(&self) -> &Drawer { &self.drawer }

    /// Mutable drawer, for custom emission.
    pub fn drawer_mut(&mut self) -> &mut Drawer { &mut self.drawer }

    /// The list filled by the current (or last completed) frame.
    pub fn draw_list(&self) -> &DrawList { self.drawer.current_draw_list() }

    /// Screen width in pixels.
    pub fn screen_width(&self) -> Real { self.screen.x }

    /// Screen height in pixels.
    pub fn screen_height(&self) -> Real { self.screen.y }

    /// Number of frames begun so far.
    pub fn frame_count(&self) -> u64 { self.frame_count }

    /// Returns `true` between `begin_frame` and `end_frame`.
    pub fn is_in_frame(&self) -> bool { self.in_frame }

    /// Records a new screen size, applied at the next `begin_frame`.
    pub fn resize_window(&mut self, width: i32, height: i32) { self.pending_screen = Some(vec2f(width as Real, height as Real)); }

    /// Overwrites the mouse snapshot.
    pub fn update_mouse_state(&mut self, x: Real, y: Real, button: ButtonState) { self.state.update_mouse_state(x, y, button); }

    /// Accumulates wheel movement.
    pub fn record_mouse_scroll(&mut self, y: Real) { self.state.record_mouse_scroll(y); }

    /// Feeds a typed character to the active text input.
    pub fn record_text_input(&mut self, ch: char) { self.state.record_text_input(ch); }

    /// Feeds an editing key to the active text input.
    pub fn record_keyboard_button(&mut self, key: Key, state: KeyState) { self.state.record_keyboard_button(key, state); }

    /// Returns the pending wheel movement and resets it.
    pub fn use_scroll_offset(&mut self) -> Real { self.state.use_scroll_offset() }

    /// Starts a frame.
    pub fn begin_frame(&mut self) {
        assert!(!self.in_frame, "begin_frame called twice without end_frame");
        if let Some(screen) = self.pending_screen.take() {
            self.screen = screen;
        }
        let spacing = self.styles.spacing;
        let screen = UiRect::new(0.0, 0.0, self.screen.x, self.screen.y).shrink(spacing);
        self.state.begin_frame(screen, spacing);
        self.drawer.begin_frame();
        self.in_frame = true;
        self.frame_count += 1;
    }

    /// Ends a frame. Every push made during the frame must have been popped.
    pub fn end_frame(&mut self) {
        assert!(self.in_frame, "end_frame called without begin_frame");
        self.state.end_frame();
        assert!(self.ids.is_empty(), "unbalanced id stack: {} scope(s) still pushed at end of frame", self.ids.len());
        self.drawer.end_frame();
        self.in_frame = false;
        let list = self.drawer.current_draw_list();
        log::trace!(
            "frame {} done: {} draw items, hot {:?}, active {:?}",
            self.frame_count,
            list.len(),
            self.state.hot_item(),
            self.state.active_item()
        );
    }

    /// Layer subsequent widgets are evaluated and drawn on. Layers above `0` are overlays.
    pub fn layer(&self) -> i32 { self.state.layer() }

    /// Switches the layer for interaction and drawing.
    pub fn set_layer(&mut self, layer: i32) {
        self.state.set_layer(layer);
        self.drawer.set_layer(layer);
    }

    /// Id of `label` in the current id scope.
    pub fn id_from_str(&mut self, label: &str) -> Id { self.ids.get_id_from_str(label) }

    /// Opens an id scope named by `label`.
    pub fn push_id_from_str(&mut self, label: &str) { self.ids.push_id_from_str(label); }

    /// Opens an id scope named by an object address.
    pub fn push_id_from_ptr<T: ?Sized>(&mut self, value: &T) { self.ids.push_id_from_ptr(value); }

    /// Opens an id scope named by an integer, typically a row index.
    pub fn push_id_u32(&mut self, value: u32) { self.ids.push_id_u32(value); }

    /// Closes the innermost id scope.
    pub fn pop_id(&mut self) { self.ids.pop_id(); }

    /// Reserves the next auto-placed rectangle.
    pub fn next_rect(&mut self, size: Vec2f) -> UiRect { self.state.layout.next(size) }

    /// Places subsequent auto-placed widgets along `direction`.
    pub fn push_layout_direction(&mut self, direction: Direction) { self.state.layout.push_direction(direction); }

    /// Restores the previous placement direction.
    pub fn pop_layout_direction(&mut self) { self.state.layout.pop_direction(); }

    /// Runs the hot/active state machine for a custom widget.
    pub fn evaluate(&mut self, id: Id, rect: &UiRect, policy: FocusPolicy) -> Interaction {
        debug_assert!(self.in_frame, "widgets must be called between begin_frame and end_frame");
        self.state.evaluate(id, rect, policy)
    }

    /// Draws a widget surface: its texture when it has one, a flat fill otherwise.
    pub fn draw_widget_style(&mut self, rect: &UiRect, style: &WidgetStyle) {
        if style.is_invisible() {
            return;
        }
        let rect = rect.with_roundness(style.roundness);
        match style.texture {
            Some(texture) => self.drawer.draw_texture(&rect, &texture, style.color, style.scale, style.offset),
            None => self.drawer.draw_rect(&rect, style.color),
        }
    }

    /// Size of `text` in a font style.
    pub fn text_size(&self, text: &str, style: &FontStyle) -> Vec2f {
        let font = self.font(style.font);
        let lines = font.wrap_lines(text, style.scale, None);
        let width = lines.iter().fold(0.0, |w: Real, line| w.max(line.width));
        vec2f(width, lines.len() as Real * font.text_height(style.scale))
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::font::test_font::MonoFont;

    pub(crate) fn context() -> Context { Context::new(800, 600, Box::new(MonoFont)) }

    /// Runs one frame with the mouse at `(x, y)`.
    pub(crate) fn frame<T>(ctx: &mut Context, x: Real, y: Real, button: ButtonState, f: impl FnOnce(&mut Context) -> T) -> T {
        ctx.update_mouse_state(x, y, button);
        ctx.begin_frame();
        let out = f(ctx);
        ctx.end_frame();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn frames_bracket_and_count() {
        let mut ctx = context();
        assert!(!ctx.is_in_frame());
        ctx.begin_frame();
        assert!(ctx.is_in_frame());
        ctx.end_frame();
        ctx.begin_frame();
        ctx.end_frame();
        assert_eq!(ctx.frame_count(), 2);
    }

    #[test]
    #[should_panic(expected = "begin_frame called twice")]
    fn double_begin_panics() {
        let mut ctx = context();
        ctx.begin_frame();
        ctx.begin_frame();
    }

    #[test]
    #[should_panic(expected = "end_frame called without begin_frame")]
    fn end_without_begin_panics() {
        let mut ctx = context();
        ctx.end_frame();
    }

    #[test]
    #[should_panic(expected = "unbalanced id stack")]
    fn unpopped_id_scope_panics() {
        let mut ctx = context();
        ctx.begin_frame();
        ctx.push_id_u32(3);
        ctx.end_frame();
    }

    #[test]
    fn resize_applies_at_next_frame() {
        let mut ctx = context();
        ctx.begin_frame();
        ctx.resize_window(1024, 768);
        assert_eq!(ctx.screen_width(), 800.0);
        ctx.end_frame();
        ctx.begin_frame();
        assert_eq!(ctx.screen_width(), 1024.0);
        assert_eq!(ctx.screen_height(), 768.0);
        ctx.end_frame();
    }

    #[test]
    fn layer_switch_reaches_drawer() {
        let mut ctx = context();
        ctx.begin_frame();
        ctx.set_layer(1);
        assert_eq!(ctx.drawer().layer(), 1);
        assert_eq!(ctx.state().layer(), 1);
        ctx.set_layer(0);
        ctx.end_frame();
    }

    #[test]
    fn unknown_font_falls_back_to_default() {
        let ctx = context();
        assert_eq!(ctx.font(FontId(5)).line_height(), 10.0);
        let size = ctx.text_size("ab\nabcd", &FontStyle::default());
        assert_eq!(size.x, 32.0);
        assert_eq!(size.y, 20.0);
    }

    #[test]
    fn independent_contexts_do_not_share_state() {
        let mut a = context();
        let mut b = context();
        frame(&mut a, 10.0, 10.0, ButtonState::Down, |ctx| ctx.evaluate(Id::new(1), &ui_rect(0.0, 0.0, 50.0, 50.0), FocusPolicy::ReleaseOnMouseUp));
        frame(&mut b, 10.0, 10.0, ButtonState::Up, |_| ());
        assert_eq!(a.state().active_item(), Id::new(1));
        assert_eq!(b.state().active_item(), Id::NONE);
    }
}
