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

/// Backend that turns draw lists into pixels.
///
/// Renderers draw [`DrawList::render_order`]: items on layer `0` and below, then overlay items. A mask push
/// increments the stencil inside its geometry and a pop decrements it; regular items only pass where the stencil
/// equals the current mask depth (see [`StencilCounter`]).
pub trait Renderer {
    /// Creates the window/surface and GPU resources.
    fn init(&mut self, width: i32, height: i32) -> Result<(), RendererError>;
    /// Draws a completed frame.
    fn process_draw_list(&mut self, list: &DrawList);
    /// Releases every backend resource. No other call follows.
    fn destroy(&mut self);
    /// Returns `true` once the platform asked the application to quit.
    fn request_to_close(&self) -> bool;
    /// Uploads pixels and returns the new texture's handle. `channels` is the number of bytes per pixel.
    fn create_texture(&mut self, pixels: &[u8], width: u32, height: u32, channels: u32) -> TextureHandle;
    /// Releases a texture created by [`Renderer::create_texture`].
    fn destroy_texture(&mut self, handle: TextureHandle);
    /// Adapts the viewport to a new window size.
    fn resize(&mut self, width: i32, height: i32);
}

#[derive(Default, Debug)]
/// Tracks stencil nesting while a renderer walks a draw list.
pub struct StencilCounter {
    depth: u32,
}

impl StencilCounter {
    /// Creates a counter at depth `0`.
    pub fn new() -> Self { Self::default() }

    /// Current nesting depth, the stencil reference value for regular items.
    pub fn depth(&self) -> u32 { self.depth }

    /// Applies a mask item and returns the depth its geometry should be drawn against.
    pub fn apply(&mut self, op: MaskOp) -> u32 {
        match op {
            MaskOp::None => self.depth,
            MaskOp::Push => {
                let reference = self.depth;
                self.depth += 1;
                reference
            }
            MaskOp::Pop => {
                assert!(self.depth > 0, "stencil pop below zero");
                let reference = self.depth;
                self.depth -= 1;
                reference
            }
        }
    }
}
