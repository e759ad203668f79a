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

/// Depth given to the first primitive of a frame.
pub const DEPTH_START: Real = 0.00001;
/// Depth increment between two primitives.
pub const DEPTH_STEP: Real = 0.00001;

const FULL_UV: Vec4f = Vec4f { x: 0.0, y: 0.0, z: 1.0, w: 1.0 };

#[derive(Copy, Clone, Debug)]
/// Chooses between instanced quads and raw triangles.
pub struct DrawPolicy {
    /// Emit rectangles, textures and masks as instances.
    pub rect_instancing: bool,
    /// Emit glyphs as instances.
    pub font_instancing: bool,
}

impl Default for DrawPolicy {
    fn default() -> Self {
        Self {
            rect_instancing: true,
            font_instancing: true,
        }
    }
}

#[derive(Copy, Clone, Debug)]
/// Parameters of [`Drawer::draw_text`].
pub struct TextOptions {
    /// Glyph scale, `1` for the font's native size.
    pub scale: Real,
    /// Word wrapping, `None` to only break on newlines.
    pub wrap: Option<TextWrap>,
    /// Box outside of which glyphs are cut by the renderer.
    pub crop: Option<UiRect>,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            wrap: None,
            crop: None,
        }
    }
}

/// Turns draw calls into batched [`DrawItem`]s.
///
/// The drawer owns two draw lists: the current one is filled during a frame, the other one holds what was last
/// handed to the renderer. [`Drawer::swap_buffer`] flips them.
pub struct Drawer {
    lists: [DrawList; 2],
    current: usize,
    depth: Real,
    depth_warned: bool,
    layer: i32,
    policy: DrawPolicy,
    masks: Vec<UiRect>,
}

impl Default for Drawer {
    fn default() -> Self { Self::new(DrawPolicy::default()) }
}

impl Drawer {
    /// Creates a drawer with empty lists.
    pub fn new(policy: DrawPolicy) -> Self {
        Self {
            lists: [DrawList::new(), DrawList::new()],
            current: 0,
            depth: DEPTH_START,
            depth_warned: false,
            layer: 0,
            policy,
            masks: Vec::new(),
        }
    }

    /// Active emission policy.
    pub fn policy(&self) -> DrawPolicy { self.policy }

    /// Replaces the emission policy.
    pub fn set_policy(&mut self, policy: DrawPolicy) { self.policy = policy; }

    /// The list being filled.
    pub fn current_draw_list(&self) -> &DrawList { &self.lists[self.current] }

    /// Mutable access to the list being filled, for custom emission.
    pub fn current_draw_list_mut(&mut self) -> &mut DrawList { &mut self.lists[self.current] }

    /// The list filled before the last swap.
    pub fn presented_draw_list(&self) -> &DrawList { &self.lists[1 - self.current] }

    /// Index (`0` or `1`) of the list being filled.
    pub fn current_index(&self) -> usize { self.current }

    /// Flips the two lists.
    pub fn swap_buffer(&mut self) { self.current = 1 - self.current; }

    /// Clears the current list and restarts depth and layer.
    pub fn begin_frame(&mut self) {
        assert!(self.masks.is_empty(), "begin_frame with {} rect mask(s) still pushed", self.masks.len());
        self.lists[self.current].reset();
        self.depth = DEPTH_START;
        self.depth_warned = false;
        self.layer = 0;
    }

    /// Checks that every mask pushed during the frame was popped.
    pub fn end_frame(&mut self) {
        assert!(self.masks.is_empty(), "unbalanced rect masks: {} still pushed at end of frame", self.masks.len());
        self.layer = 0;
    }

    /// Clears both lists and all transient state.
    pub fn reset(&mut self) {
        for list in self.lists.iter_mut() {
            list.reset();
        }
        self.masks.clear();
        self.depth = DEPTH_START;
        self.depth_warned = false;
        self.layer = 0;
    }

    /// Layer tagged onto subsequent items. Layers above `0` are drawn in the overlay pass.
    pub fn layer(&self) -> i32 { self.layer }

    /// Changes the layer for subsequent items.
    pub fn set_layer(&mut self, layer: i32) { self.layer = layer; }

    /// Depth the next primitive will get.
    pub fn depth(&self) -> Real { self.depth }

    /// Number of masks currently pushed.
    pub fn mask_depth(&self) -> usize { self.masks.len() }

    /// Innermost mask rectangle.
    pub fn current_mask(&self) -> Option<&UiRect> { self.masks.last() }

    fn next_depth(&mut self) -> Real {
        let depth = self.depth;
        self.depth += DEPTH_STEP;
        if depth >= 1.0 && !self.depth_warned {
            log::warn!("depth range exhausted, later primitives share the far plane");
            self.depth_warned = true;
        }
        depth.min(1.0)
    }

    fn key(&self, texture: TextureHandle, flags: DrawFlags) -> DrawKey { DrawKey::new(texture, flags, self.layer) }

    fn push_quads(&mut self, key: DrawKey, quads: &[(UiRect, Vec4f)], roundness: Real, color: Vec4f, depth: Real) {
        let list = &mut self.lists[self.current];
        if self.policy.rect_instancing {
            let item = list.texture_instance_item(key);
            for (rect, uv) in quads {
                item.push_instance(DrawInstance {
                    pos: rect.pos,
                    depth,
                    dimension: rect.dim,
                    roundness,
                    color,
                    uv: *uv,
                });
            }
        } else {
            let item = list.texture_item(key);
            for (rect, uv) in quads {
                item.push_vertices(&quad_vertices(rect, *uv, depth, color));
            }
        }
    }

    /// Fills `rect` with a flat color, honoring its roundness.
    pub fn draw_rect(&mut self, rect: &UiRect, color: Vec4f) {
        if rect.dim.x <= 0.0 || rect.dim.y <= 0.0 {
            return;
        }
        let depth = self.next_depth();
        let mut key = self.key(TextureHandle::NONE, DrawFlags::NONE);
        if !self.policy.rect_instancing {
            key = key.with_region(DrawFlags::SHAPE, *rect);
        }
        self.push_quads(key, &[(*rect, FULL_UV)], rect.roundness, color, depth);
    }

    /// Maps `texture` onto `rect`. For [`TextureScale::NineSlice`] and [`TextureScale::Border`], `offset` holds the
    /// left, top, right and bottom insets as fractions of the texture size.
    pub fn draw_texture(&mut self, rect: &UiRect, texture: &Texture, color: Vec4f, scale: TextureScale, offset: Vec4f) {
        if rect.dim.x <= 0.0 || rect.dim.y <= 0.0 {
            return;
        }
        let patches = texture_patches(rect, texture, scale, offset);
        if patches.is_empty() {
            return;
        }
        let depth = self.next_depth();
        let key = self.key(texture.handle, DrawFlags::NONE);
        self.push_quads(key, &patches, rect.roundness, color, depth);
    }

    /// Draws `text` with its first line's top-left corner at `pos`. Returns the number of lines laid out.
    pub fn draw_text(&mut self, font: &dyn Font, text: &str, pos: Vec2f, color: Vec4f, options: &TextOptions) -> usize {
        let mut key = self.key(font.texture_handle(), DrawFlags::FONT);
        if let Some(crop) = options.crop {
            key = key.with_region(DrawFlags::CROP, crop);
        }
        let mut quads = Vec::new();
        let lines = font.layout_glyphs(text, pos, options.scale, options.wrap, &mut |quad| quads.push(quad));
        if quads.is_empty() {
            return lines;
        }
        let depth = self.next_depth();
        let list = &mut self.lists[self.current];
        if self.policy.font_instancing {
            let item = list.texture_instance_item(key);
            for quad in &quads {
                item.push_instance(DrawInstance {
                    pos: quad.rect.pos,
                    depth,
                    dimension: quad.rect.dim,
                    roundness: 0.0,
                    color,
                    uv: quad.uv,
                });
            }
        } else {
            let item = list.texture_item(key);
            for quad in &quads {
                item.push_vertices(&quad_vertices(&quad.rect, quad.uv, depth, color));
            }
        }
        lines
    }

    /// Fills a convex polygon given as a triangle fan around `points[0]`.
    pub fn draw_shape(&mut self, points: &[Vec2f], color: Vec4f) {
        if points.len() < 3 {
            return;
        }
        let depth = self.next_depth();
        let key = self.key(TextureHandle::NONE, DrawFlags::NONE);
        let item = self.lists[self.current].texture_item(key);
        let zero = Vec2f::new(0.0, 0.0);
        let mut vertices = Vec::with_capacity((points.len() - 2) * 3);
        for pair in points[1..].windows(2) {
            vertices.push(Vertex::new(points[0], depth, zero, color));
            vertices.push(Vertex::new(pair[0], depth, zero, color));
            vertices.push(Vertex::new(pair[1], depth, zero, color));
        }
        item.push_vertices(&vertices);
    }

    fn emit_mask(&mut self, rect: &UiRect, op: MaskOp) {
        let depth = self.next_depth();
        let layer = self.layer;
        let list = &mut self.lists[self.current];
        if self.policy.rect_instancing {
            let key = DrawKey::new(TextureHandle::NONE, DrawFlags::INSTANCED, layer);
            list.mask_item(key, op).push_instance(DrawInstance {
                pos: rect.pos,
                depth,
                dimension: rect.dim,
                roundness: rect.roundness,
                color: Vec4f::new(1.0, 1.0, 1.0, 1.0),
                uv: FULL_UV,
            });
        } else {
            let key = DrawKey::new(TextureHandle::NONE, DrawFlags::NONE, layer).with_region(DrawFlags::SHAPE, *rect);
            list.mask_item(key, op).push_vertices(&quad_vertices(rect, FULL_UV, depth, Vec4f::new(1.0, 1.0, 1.0, 1.0)));
        }
    }

    /// Restricts subsequent drawing to `rect` until the matching [`Drawer::pop_mask`].
    pub fn push_rect_mask(&mut self, rect: &UiRect) {
        self.masks.push(*rect);
        self.emit_mask(rect, MaskOp::Push);
    }

    /// Removes the innermost mask.
    pub fn pop_mask(&mut self) {
        let rect = match self.masks.pop() {
            Some(rect) => rect,
            None => panic!("pop_mask without a matching push_rect_mask"),
        };
        self.emit_mask(&rect, MaskOp::Pop);
    }
}

/// Splits `rect` into the textured quads a scale mode needs, with their atlas windows.
fn texture_patches(rect: &UiRect, texture: &Texture, scale: TextureScale, offset: Vec4f) -> Vec<(UiRect, Vec4f)> {
    if scale == TextureScale::Image {
        return vec![(*rect, FULL_UV)];
    }

    let (l, t) = (offset.x.clamp(0.0, 1.0), offset.y.clamp(0.0, 1.0));
    let (r, b) = (offset.z.clamp(0.0, 1.0 - l), offset.w.clamp(0.0, 1.0 - t));
    let half_w = rect.dim.x * 0.5;
    let half_h = rect.dim.y * 0.5;
    let left = (l * texture.width as Real).min(half_w);
    let right = (r * texture.width as Real).min(half_w);
    let top = (t * texture.height as Real).min(half_h);
    let bottom = (b * texture.height as Real).min(half_h);

    let xs = [rect.pos.x, rect.pos.x + left, rect.right() - right, rect.right()];
    let ys = [rect.pos.y, rect.pos.y + top, rect.bottom() - bottom, rect.bottom()];
    let us = [0.0, l, 1.0 - r, 1.0];
    let vs = [0.0, t, 1.0 - b, 1.0];

    let mut patches = Vec::with_capacity(9);
    for row in 0..3 {
        for col in 0..3 {
            if scale == TextureScale::Border && row == 1 && col == 1 {
                continue;
            }
            let w = xs[col + 1] - xs[col];
            let h = ys[row + 1] - ys[row];
            if w <= 0.0 || h <= 0.0 {
                continue;
            }
            let uv = Vec4f::new(us[col], vs[row], us[col + 1] - us[col], vs[row + 1] - vs[row]);
            patches.push((UiRect::new(xs[col], ys[row], w, h), uv));
        }
    }
    patches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::test_font::{MONO_TEXTURE, MonoFont};

    fn white() -> Vec4f { Vec4f::new(1.0, 1.0, 1.0, 1.0) }

    fn texture() -> Texture {
        Texture {
            handle: TextureHandle::new(3),
            width: 32,
            height: 32,
        }
    }

    #[test]
    fn rects_batch_into_one_instanced_item() {
        let mut drawer = Drawer::default();
        drawer.begin_frame();
        for i in 0..4 {
            drawer.draw_rect(&ui_rect(i as Real * 10.0, 0.0, 8.0, 8.0), white());
        }
        let list = drawer.current_draw_list();
        assert_eq!(list.len(), 1);
        assert!(list.items()[0].is_instanced());
        assert_eq!(list.items()[0].instances().len(), 4);
    }

    #[test]
    fn vertex_rects_carry_their_shape() {
        let mut drawer = Drawer::new(DrawPolicy {
            rect_instancing: false,
            font_instancing: false,
        });
        drawer.begin_frame();
        let r = ui_rect(0.0, 0.0, 8.0, 8.0).with_roundness(2.0);
        drawer.draw_rect(&r, white());
        drawer.draw_rect(&ui_rect(10.0, 0.0, 8.0, 8.0), white());
        let list = drawer.current_draw_list();
        assert_eq!(list.len(), 2);
        assert!(list.items()[0].has_shape());
        assert_eq!(*list.items()[0].region(), r);
        assert_eq!(list.items()[0].vertices().len(), 6);
    }

    #[test]
    fn depth_grows_per_primitive() {
        let mut drawer = Drawer::default();
        drawer.begin_frame();
        assert_eq!(drawer.depth(), DEPTH_START);
        drawer.draw_rect(&ui_rect(0.0, 0.0, 4.0, 4.0), white());
        drawer.draw_rect(&ui_rect(0.0, 0.0, 4.0, 4.0), white());
        let instances = drawer.current_draw_list().items()[0].instances();
        assert!(instances[1].depth > instances[0].depth);
        assert_eq!(instances[0].depth, DEPTH_START);
        drawer.begin_frame();
        assert_eq!(drawer.depth(), DEPTH_START);
    }

    #[test]
    fn empty_rects_are_skipped() {
        let mut drawer = Drawer::default();
        drawer.begin_frame();
        drawer.draw_rect(&ui_rect(0.0, 0.0, 0.0, 4.0), white());
        assert!(drawer.current_draw_list().is_empty());
        assert_eq!(drawer.depth(), DEPTH_START);
    }

    #[test]
    fn nine_slice_and_border_patch_counts() {
        let mut drawer = Drawer::default();
        drawer.begin_frame();
        let offset = Vec4f::new(0.25, 0.25, 0.25, 0.25);
        drawer.draw_texture(&ui_rect(0.0, 0.0, 100.0, 40.0), &texture(), white(), TextureScale::NineSlice, offset);
        drawer.draw_texture(&ui_rect(0.0, 50.0, 100.0, 40.0), &texture(), white(), TextureScale::Border, offset);
        drawer.draw_texture(&ui_rect(0.0, 100.0, 100.0, 40.0), &texture(), white(), TextureScale::Image, offset);
        let list = drawer.current_draw_list();
        assert_eq!(list.len(), 1);
        let instances = list.items()[0].instances();
        assert_eq!(instances.len(), 9 + 8 + 1);
        // 0.25 of a 32 pixel texture keeps an 8 pixel corner
        assert_eq!(instances[0].dimension.x, 8.0);
        assert_eq!(instances[0].uv.z, 0.25);
        assert_eq!(instances[4].dimension.x, 84.0);
        assert_eq!(list.items()[0].texture_handle().raw(), 3);
    }

    #[test]
    fn text_uses_font_texture() {
        let mut drawer = Drawer::default();
        drawer.begin_frame();
        let lines = drawer.draw_text(&MonoFont, "hi there", vec2f(0.0, 0.0), white(), &TextOptions::default());
        assert_eq!(lines, 1);
        let list = drawer.current_draw_list();
        assert_eq!(list.len(), 1);
        let item = &list.items()[0];
        assert!(item.is_font());
        assert_eq!(item.texture_handle().raw(), MONO_TEXTURE);
        assert_eq!(item.instances().len(), 7);
        assert_eq!(drawer.depth(), DEPTH_START + DEPTH_STEP);
    }

    #[test]
    fn cropped_text_gets_its_own_item() {
        let mut drawer = Drawer::new(DrawPolicy {
            rect_instancing: true,
            font_instancing: false,
        });
        drawer.begin_frame();
        drawer.draw_text(&MonoFont, "ab", vec2f(0.0, 0.0), white(), &TextOptions::default());
        let options = TextOptions {
            crop: Some(ui_rect(0.0, 20.0, 8.0, 10.0)),
            ..TextOptions::default()
        };
        drawer.draw_text(&MonoFont, "cd", vec2f(0.0, 20.0), white(), &options);
        let list = drawer.current_draw_list();
        assert_eq!(list.len(), 2);
        assert!(!list.items()[0].is_crop());
        assert!(list.items()[1].is_crop());
        assert_eq!(list.items()[1].crop_rect().y, 20.0);
        assert_eq!(list.items()[1].vertices().len(), 12);
    }

    #[test]
    fn blank_text_emits_nothing() {
        let mut drawer = Drawer::default();
        drawer.begin_frame();
        drawer.draw_text(&MonoFont, "   ", vec2f(0.0, 0.0), white(), &TextOptions::default());
        assert!(drawer.current_draw_list().is_empty());
    }

    #[test]
    fn shape_is_a_triangle_fan() {
        let mut drawer = Drawer::default();
        drawer.begin_frame();
        let points = [vec2f(0.0, 0.0), vec2f(10.0, 0.0), vec2f(10.0, 10.0), vec2f(0.0, 10.0)];
        drawer.draw_shape(&points, white());
        drawer.draw_shape(&points[..2], white());
        let item = &drawer.current_draw_list().items()[0];
        assert_eq!(drawer.current_draw_list().len(), 1);
        assert_eq!(item.vertices().len(), 6);
        assert_eq!(item.vertices()[3].pos.x, 0.0);
        assert_eq!(item.vertices()[5].pos.y, 10.0);
    }

    #[test]
    fn masks_bracket_their_content() {
        let mut drawer = Drawer::default();
        drawer.begin_frame();
        let clip = ui_rect(0.0, 0.0, 50.0, 50.0);
        drawer.push_rect_mask(&clip);
        drawer.draw_rect(&ui_rect(0.0, 0.0, 100.0, 100.0), white());
        assert_eq!(drawer.mask_depth(), 1);
        drawer.pop_mask();
        drawer.end_frame();
        let list = drawer.current_draw_list();
        let ops: Vec<MaskOp> = list.items().iter().map(|i| i.mask_op()).collect();
        assert_eq!(ops, vec![MaskOp::Push, MaskOp::None, MaskOp::Pop]);
        assert_eq!(list.items()[2].instances()[0].dimension.x, 50.0);
    }

    #[test]
    #[should_panic(expected = "unbalanced rect masks")]
    fn unpopped_mask_panics_at_end_frame() {
        let mut drawer = Drawer::default();
        drawer.begin_frame();
        drawer.push_rect_mask(&ui_rect(0.0, 0.0, 5.0, 5.0));
        drawer.end_frame();
    }

    #[test]
    #[should_panic(expected = "without a matching push_rect_mask")]
    fn pop_without_push_panics() {
        let mut drawer = Drawer::default();
        drawer.begin_frame();
        drawer.pop_mask();
    }

    #[test]
    fn layers_are_tagged_on_items() {
        let mut drawer = Drawer::default();
        drawer.begin_frame();
        drawer.draw_rect(&ui_rect(0.0, 0.0, 4.0, 4.0), white());
        drawer.set_layer(1);
        drawer.draw_rect(&ui_rect(0.0, 0.0, 4.0, 4.0), white());
        drawer.set_layer(0);
        drawer.draw_rect(&ui_rect(0.0, 0.0, 4.0, 4.0), white());
        let list = drawer.current_draw_list();
        assert_eq!(list.len(), 3);
        let (base, overlay) = list.partition_layers();
        assert_eq!((base.len(), overlay.len()), (2, 1));
    }

    #[test]
    fn swap_alternates_lists() {
        let mut drawer = Drawer::default();
        drawer.begin_frame();
        drawer.draw_rect(&ui_rect(0.0, 0.0, 4.0, 4.0), white());
        drawer.end_frame();
        assert_eq!(drawer.current_index(), 0);
        drawer.swap_buffer();
        assert_eq!(drawer.current_index(), 1);
        assert_eq!(drawer.presented_draw_list().len(), 1);
        drawer.begin_frame();
        assert!(drawer.current_draw_list().is_empty());
        assert_eq!(drawer.presented_draw_list().len(), 1);
        drawer.reset();
        assert!(drawer.presented_draw_list().is_empty());
    }
}
