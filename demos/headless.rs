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
//! Drives a few frames of a small tool panel with a simulated mouse and prints what a renderer would receive.
//!
//! `RUST_LOG=debug cargo run --example headless`
use immediate_ui::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Fixed-advance font over a 16x16 glyph atlas.
struct BoxFont;

impl Font for BoxFont {
    fn texture_handle(&self) -> TextureHandle { TextureHandle::new(1) }
    fn line_height(&self) -> Real { 14.0 }
    fn baseline(&self) -> Real { 11.0 }
    fn glyph(&self, ch: char) -> Option<GlyphMetrics> {
        if !ch.is_ascii() || ch.is_control() {
            return None;
        }
        let code = ch as u32;
        let (u, v) = ((code % 16) as Real / 16.0, (code / 16) as Real / 16.0);
        Some(GlyphMetrics {
            uv: Vec4f::new(u, v, 1.0 / 16.0, 1.0 / 16.0),
            bearing: Vec2f::new(0.0, 11.0),
            dimension: if ch == ' ' { Vec2f::new(0.0, 0.0) } else { Vec2f::new(7.0, 14.0) },
            advance: 8.0,
        })
    }
}

/// Prints a summary of every frame instead of drawing it.
#[derive(Default)]
struct ConsoleRenderer {
    frames: usize,
    textures: u32,
}

impl Renderer for ConsoleRenderer {
    fn init(&mut self, width: i32, height: i32) -> Result<(), RendererError> {
        log::info!("console renderer {}x{}", width, height);
        Ok(())
    }

    fn process_draw_list(&mut self, list: &DrawList) {
        self.frames += 1;
        let mut stencil = StencilCounter::new();
        let mut primitives = 0;
        for item in list.render_order() {
            stencil.apply(item.mask_op());
            if !item.is_mask() {
                primitives += item.primitive_count();
            }
        }
        let (base, overlay) = list.partition_layers();
        println!("frame {:3}: {:2} items ({} base, {} overlay), {} primitives", self.frames, list.len(), base.len(), overlay.len(), primitives);
    }

    fn destroy(&mut self) { log::info!("console renderer closed after {} frames", self.frames); }

    fn request_to_close(&self) -> bool { self.frames >= 60 }

    fn create_texture(&mut self, _pixels: &[u8], _width: u32, _height: u32, _channels: u32) -> TextureHandle {
        self.textures += 1;
        TextureHandle::new(self.textures + 1)
    }

    fn destroy_texture(&mut self, _handle: TextureHandle) {}

    fn resize(&mut self, width: i32, height: i32) { log::info!("resize {}x{}", width, height); }
}

struct State {
    volume: Real,
    mute: bool,
    quality: usize,
    name: String,
    position: [Real; 3],
    clicks: u32,
}

fn main() -> Result<(), UiError> {
    env_logger::init();
    let mut ui = Ui::init(ConsoleRenderer::default(), 800, 600, Box::new(BoxFont))?;
    let checker: Vec<u8> = (0..16 * 16).flat_map(|i| if (i / 16 + i % 16) % 2 == 0 { [255u8; 4] } else { [40u8, 40, 40, 255] }).collect();
    let texture = ui.create_texture(&checker, 16, 16, 4)?;

    let mut state = State {
        volume: 0.5,
        mute: false,
        quality: 1,
        name: String::from("untitled"),
        position: [0.0, 1.0, 2.0],
        clicks: 0,
    };
    let mut rng = StdRng::seed_from_u64(7);
    let (mut x, mut y) = (120.0, 120.0);

    while !ui.request_to_close() {
        x = (x + rng.random_range(-30.0..30.0) as Real).clamp(0.0, 400.0);
        y = (y + rng.random_range(-30.0..30.0) as Real).clamp(0.0, 400.0);
        let button = if rng.random_bool(0.3) { ButtonState::Down } else { ButtonState::Up };
        ui.update_mouse_state(x, y, button);
        if rng.random_bool(0.1) {
            ui.record_mouse_scroll(-1.0);
        }

        ui.begin_frame();
        ui.begin_menu();
        if ui.menu("File") {
            ui.begin_sub_menu(120.0);
            if ui.sub_menu("Reset", false) {
                state.volume = 0.5;
            }
            ui.end_sub_menu();
        }
        ui.end_menu();

        if ui.begin_panel("Mixer", ui_rect(40.0, 60.0, 320.0, 300.0), false) {
            ui.label("Volume");
            if ui.slider(&mut state.volume) {
                log::debug!("volume {:.2}", state.volume);
            }
            state.mute = ui.check_box("Mute", state.mute);
            ui.drop_down(&mut state.quality, &["low", "medium", "high"]);
            if ui.text_input(&mut state.name, 24).is_submitted() {
                log::info!("renamed to {}", state.name);
            }
            ui.vector_input(&mut state.position, false);
            ui.push_layout_direction(Direction::Horizontal);
            if ui.button("Apply") {
                state.clicks += 1;
            }
            ui.image(&texture, Vec4f::new(1.0, 1.0, 1.0, 1.0));
            ui.pop_layout_direction();
        }
        ui.end_panel();
        ui.end_frame();
        ui.process_draw_list();
    }

    println!("volume {:.2}, muted {}, quality {}, applied {} times", state.volume, state.mute, state.quality, state.clicks);
    ui.destroy_texture(&texture);
    ui.destroy();
    Ok(())
}
