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
use std::collections::HashMap;
use std::ops::{Deref, DerefMut};

/// Application-facing facade: a [`Context`] wired to a [`Renderer`].
///
/// `Ui` dereferences to its context, so widgets are called on it directly. Frames follow
/// `begin_frame`, widget calls, `end_frame`, then [`Ui::process_draw_list`] to hand the frame to the renderer.
/// Textures created through the facade are released by [`Ui::destroy`] or when the facade is dropped.
pub struct Ui<R: Renderer> {
    renderer: R,
    ctx: Context,
    textures: HashMap<TextureHandle, Texture>,
    destroyed: bool,
}

impl<R: Renderer> Ui<R> {
    /// Initializes `renderer` for a `width` x `height` window and creates the context with `default_font`.
    pub fn init(mut renderer: R, width: i32, height: i32, default_font: Box<dyn Font>) -> Result<Self, UiError> {
        if let Err(err) = renderer.init(width, height) {
            log::error!("renderer initialization failed: {}", err);
            return Err(err.into());
        }
        log::info!("ui initialized at {}x{}", width, height);
        Ok(Self {
            renderer,
            ctx: Context::new(width, height, default_font),
            textures: HashMap::new(),
            destroyed: false,
        })
    }

    /// The renderer.
    pub fn renderer(&self) -> &R { &self.renderer }

    /// Mutable renderer.
    pub fn renderer_mut(&mut self) -> &mut R { &mut self.renderer }

    /// Resizes the renderer now and the layout at the next frame.
    pub fn resize_window(&mut self, width: i32, height: i32) {
        self.renderer.resize(width, height);
        self.ctx.resize_window(width, height);
    }

    /// Hands the completed frame to the renderer and flips the draw lists.
    pub fn process_draw_list(&mut self) {
        assert!(!self.ctx.is_in_frame(), "process_draw_list called inside a frame");
        self.renderer.process_draw_list(self.ctx.drawer.current_draw_list());
        self.ctx.drawer.swap_buffer();
    }

    /// Returns `true` once the platform asked the application to quit.
    pub fn request_to_close(&self) -> bool { self.renderer.request_to_close() }

    /// Uploads `pixels` (`channels` bytes per pixel, rows top to bottom) as a texture.
    pub fn create_texture(&mut self, pixels: &[u8], width: u32, height: u32, channels: u32) -> Result<Texture, UiError> {
        let expected = width as usize * height as usize * channels as usize;
        if pixels.len() != expected || expected == 0 {
            log::warn!("rejected {}x{}x{} texture with {} bytes", width, height, channels, pixels.len());
            return Err(UiError::InvalidTexture {
                width,
                height,
                channels,
                expected,
                actual: pixels.len(),
            });
        }
        let handle = self.renderer.create_texture(pixels, width, height, channels);
        let texture = Texture { handle, width, height };
        self.textures.insert(handle, texture);
        Ok(texture)
    }

    /// Releases a texture created by [`Ui::create_texture`]. Unknown handles are ignored.
    pub fn destroy_texture(&mut self, texture: &Texture) {
        if self.textures.remove(&texture.handle).is_some() {
            self.renderer.destroy_texture(texture.handle);
        }
    }

    /// Number of live textures created through the facade.
    pub fn texture_count(&self) -> usize { self.textures.len() }

    fn release(&mut self) {
        if self.destroyed {
            return;
        }
        let mut handles: Vec<TextureHandle> = self.textures.drain().map(|(handle, _)| handle).collect();
        handles.sort();
        for handle in handles {
            self.renderer.destroy_texture(handle);
        }
        self.renderer.destroy();
        self.destroyed = true;
        log::info!("ui destroyed after {} frames", self.ctx.frame_count());
    }

    /// Releases textures and the renderer. Consumes the facade.
    pub fn destroy(mut self) { self.release(); }
}

impl<R: Renderer> Drop for Ui<R> {
    fn drop(&mut self) { self.release(); }
}

impl<R: Renderer> Deref for Ui<R> {
    type Target = Context;
    fn deref(&self) -> &Context { &self.ctx }
}

impl<R: Renderer> DerefMut for Ui<R> {
    fn deref_mut(&mut self) -> &mut Context { &mut self.ctx }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::test_font::MonoFont;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Log {
        calls: Vec<String>,
        items: Vec<usize>,
    }

    struct RecordingRenderer {
        log: Rc<RefCell<Log>>,
        fail: bool,
        next: u32,
    }

    impl RecordingRenderer {
        fn new(log: &Rc<RefCell<Log>>) -> Self { Self { log: log.clone(), fail: false, next: 1 } }
        fn record(&self, call: &str) { self.log.borrow_mut().calls.push(call.to_string()); }
    }

    impl Renderer for RecordingRenderer {
        fn init(&mut self, width: i32, height: i32) -> Result<(), RendererError> {
            self.record(&format!("init {}x{}", width, height));
            if self.fail { Err(RendererError::Context("no device".into())) } else { Ok(()) }
        }
        fn process_draw_list(&mut self, list: &DrawList) {
            self.record("draw");
            self.log.borrow_mut().items.push(list.len());
        }
        fn destroy(&mut self) { self.record("destroy"); }
        fn request_to_close(&self) -> bool { false }
        fn create_texture(&mut self, _pixels: &[u8], width: u32, height: u32, _channels: u32) -> TextureHandle {
            self.record(&format!("create {}x{}", width, height));
            self.next += 1;
            TextureHandle::new(self.next)
        }
        fn destroy_texture(&mut self, handle: TextureHandle) { self.record(&format!("free {}", handle.raw())); }
        fn resize(&mut self, width: i32, height: i32) { self.record(&format!("resize {}x{}", width, height)); }
    }

    fn ui(log: &Rc<RefCell<Log>>) -> Ui<RecordingRenderer> { Ui::init(RecordingRenderer::new(log), 640, 480, Box::new(MonoFont)).unwrap() }

    #[test]
    fn pressed_button_end_to_end() {
        let log = Rc::new(RefCell::new(Log::default()));
        let mut ui = ui(&log);
        ui.begin_frame();
        ui.update_mouse_state(50.0, 15.0, ButtonState::Down);
        let clicked = ui.button_ex("OK", &ui_rect(0.0, 0.0, 100.0, 30.0));
        ui.end_frame();
        assert!(!clicked);
        assert_eq!(ui.state().hot_item(), Id::from_str("OK"));
        assert_eq!(ui.state().active_item(), Id::from_str("OK"));

        let list = ui.draw_list();
        assert_eq!(list.len(), 2);
        let background = &list.items()[0];
        assert!(background.is_instanced());
        assert!(background.texture_handle().is_none());
        let down = ui.style().button.down.color;
        assert_eq!(background.instances()[0].color.x, down.x);
        assert!(list.items()[1].is_font());

        ui.process_draw_list();
        assert_eq!(log.borrow().items, vec![2]);
        assert_eq!(ui.drawer().presented_draw_list().len(), 2);
    }

    #[test]
    fn init_failure_is_reported() {
        let log = Rc::new(RefCell::new(Log::default()));
        let mut renderer = RecordingRenderer::new(&log);
        renderer.fail = true;
        match Ui::init(renderer, 640, 480, Box::new(MonoFont)) {
            Err(UiError::Renderer(RendererError::Context(msg))) => assert_eq!(msg, "no device"),
            Err(err) => panic!("unexpected error {}", err),
            Ok(_) => panic!("init should fail"),
        }
    }

    #[test]
    fn textures_are_validated_and_released() {
        let log = Rc::new(RefCell::new(Log::default()));
        let mut ui = ui(&log);
        let err = ui.create_texture(&[0; 10], 2, 2, 4).unwrap_err();
        assert!(matches!(err, UiError::InvalidTexture { expected: 16, actual: 10, .. }));
        let a = ui.create_texture(&[0; 16], 2, 2, 4).unwrap();
        let b = ui.create_texture(&[0; 4], 2, 2, 1).unwrap();
        assert_eq!(ui.texture_count(), 2);
        ui.destroy_texture(&a);
        ui.destroy_texture(&a);
        ui.destroy();
        let calls = log.borrow().calls.clone();
        assert_eq!(
            calls,
            vec![
                "init 640x480".to_string(),
                "create 2x2".to_string(),
                "create 2x2".to_string(),
                format!("free {}", a.handle.raw()),
                format!("free {}", b.handle.raw()),
                "destroy".to_string(),
            ]
        );
    }

    #[test]
    fn drop_releases_once() {
        let log = Rc::new(RefCell::new(Log::default()));
        {
            let _ui = ui(&log);
        }
        assert_eq!(log.borrow().calls.iter().filter(|c| *c == "destroy").count(), 1);
    }

    #[test]
    fn resize_reaches_renderer_and_layout() {
        let log = Rc::new(RefCell::new(Log::default()));
        let mut ui = ui(&log);
        ui.resize_window(800, 600);
        assert!(log.borrow().calls.contains(&"resize 800x600".to_string()));
        ui.begin_frame();
        ui.end_frame();
        assert_eq!(ui.screen_width(), 800.0);
    }

    #[test]
    #[should_panic(expected = "process_draw_list called inside a frame")]
    fn processing_mid_frame_panics() {
        let log = Rc::new(RefCell::new(Log::default()));
        let mut ui = ui(&log);
        ui.begin_frame();
        ui.process_draw_list();
    }
}
