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
//! Batched draw commands.
//!
//! A [`DrawList`] is the output of one frame: an ordered run of [`DrawItem`]s, each holding geometry that shares
//! one [`DrawKey`]. Appends coalesce greedily into the most recent item when the key matches; nothing is ever
//! reordered. Mask items are control entries the renderer turns into stencil increments/decrements.
use crate::*;
use bitflags::*;
use std::collections::HashMap;

#[derive(Copy, Clone, Debug, Default)]
#[repr(C)]
/// Vertex used by raw-triangle geometry.
pub struct Vertex {
    /// Screen position.
    pub pos: Vec2f,
    /// Depth assigned by the drawer, growing with emission order.
    pub depth: Real,
    /// Texture coordinate.
    pub tex_coord: Vec2f,
    /// Normalized RGBA color.
    pub color: Vec4f,
}

impl Vertex {
    /// Creates a vertex.
    pub fn new(pos: Vec2f, depth: Real, tex_coord: Vec2f, color: Vec4f) -> Self { Self { pos, depth, tex_coord, color } }
}

#[derive(Copy, Clone, Debug, Default)]
#[repr(C)]
/// One instanced quad.
pub struct DrawInstance {
    /// Top-left corner.
    pub pos: Vec2f,
    /// Depth assigned by the drawer.
    pub depth: Real,
    /// Width and height.
    pub dimension: Vec2f,
    /// Corner radius.
    pub roundness: Real,
    /// Normalized RGBA color.
    pub color: Vec4f,
    /// Texture window as `(u, v, width, height)` in normalized coordinates.
    pub uv: Vec4f,
}

/// The two triangles covering `rect`, with `uv` given as `(u, v, width, height)`.
pub fn quad_vertices(rect: &UiRect, uv: Vec4f, depth: Real, color: Vec4f) -> [Vertex; 6] {
    let (x0, y0, x1, y1) = (rect.pos.x, rect.pos.y, rect.right(), rect.bottom());
    let (u0, v0, u1, v1) = (uv.x, uv.y, uv.x + uv.z, uv.y + uv.w);
    let tl = Vertex::new(Vec2f::new(x0, y0), depth, Vec2f::new(u0, v0), color);
    let tr = Vertex::new(Vec2f::new(x1, y0), depth, Vec2f::new(u1, v0), color);
    let bl = Vertex::new(Vec2f::new(x0, y1), depth, Vec2f::new(u0, v1), color);
    let br = Vertex::new(Vec2f::new(x1, y1), depth, Vec2f::new(u1, v1), color);
    [tl, tr, br, tl, br, bl]
}

bitflags! {
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    /// Properties that split geometry into separate draw items.
    pub struct DrawFlags : u32 {
        /// Clipped to a crop box stored in the item's region.
        const CROP = 8;
        /// Untextured raw triangles whose shape (position, dimension, roundness) is stored in the item's region.
        const SHAPE = 4;
        /// Instanced quads rather than raw triangles.
        const INSTANCED = 2;
        /// Glyphs sampled from a font atlas.
        const FONT = 1;
        /// Plain geometry.
        const NONE = 0;
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
/// Stencil operation carried by a draw item.
pub enum MaskOp {
    /// Regular geometry.
    #[default]
    None,
    /// Increments the stencil inside the item's geometry.
    Push,
    /// Decrements the stencil inside the item's geometry.
    Pop,
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
/// Everything two appends must agree on to share a draw item.
pub struct DrawKey {
    /// Texture sampled by the geometry, [`TextureHandle::NONE`] for flat color.
    pub texture: TextureHandle,
    /// Geometry flags.
    pub flags: DrawFlags,
    /// Layer active at append time.
    pub layer: i32,
    /// Crop box for [`DrawFlags::CROP`], shape for [`DrawFlags::SHAPE`], unused otherwise.
    pub region: UiRect,
}

impl DrawKey {
    /// Key for geometry with no crop or shape.
    pub fn new(texture: TextureHandle, flags: DrawFlags, layer: i32) -> Self {
        Self {
            texture,
            flags,
            layer,
            region: UiRect::default(),
        }
    }

    /// Returns a copy carrying `region` and the given region flag.
    pub fn with_region(mut self, flag: DrawFlags, region: UiRect) -> Self {
        self.flags |= flag;
        self.region = region;
        self
    }
}

#[derive(Clone, Debug, Default)]
/// A run of geometry sharing one [`DrawKey`]. Holds either vertices or instances, never both.
pub struct DrawItem {
    key: DrawKey,
    mask: MaskOp,
    vertices: Vec<Vertex>,
    instances: Vec<DrawInstance>,
    primitives: usize,
}

impl DrawItem {
    fn open(&mut self, key: DrawKey, mask: MaskOp) {
        self.key = key;
        self.mask = mask;
        self.vertices.clear();
        self.instances.clear();
        self.primitives = 0;
    }

    /// Key shared by the item's geometry.
    pub fn key(&self) -> &DrawKey { &self.key }

    /// Texture sampled by the item.
    pub fn texture_handle(&self) -> TextureHandle { self.key.texture }

    /// Geometry flags.
    pub fn flags(&self) -> DrawFlags { self.key.flags }

    /// Returns `true` for font glyphs.
    pub fn is_font(&self) -> bool { self.key.flags.contains(DrawFlags::FONT) }

    /// Returns `true` for instanced quads.
    pub fn is_instanced(&self) -> bool { self.key.flags.contains(DrawFlags::INSTANCED) }

    /// Returns `true` when the item is clipped to [`DrawItem::region`].
    pub fn is_crop(&self) -> bool { self.key.flags.contains(DrawFlags::CROP) }

    /// Returns `true` when [`DrawItem::region`] describes the shape of untextured raw triangles.
    pub fn has_shape(&self) -> bool { self.key.flags.contains(DrawFlags::SHAPE) }

    /// Layer the item was appended on. Items above `0` belong to the overlay pass.
    pub fn layer(&self) -> i32 { self.key.layer }

    /// Returns `true` for overlay items.
    pub fn is_overlay(&self) -> bool { self.key.layer > 0 }

    /// Stencil operation.
    pub fn mask_op(&self) -> MaskOp { self.mask }

    /// Returns `true` for mask push/pop items.
    pub fn is_mask(&self) -> bool { self.mask != MaskOp::None }

    /// Crop box or shape rectangle.
    pub fn region(&self) -> &UiRect { &self.key.region }

    /// Crop box as `(x, y, width, height)`.
    pub fn crop_rect(&self) -> Vec4f {
        let r = &self.key.region;
        Vec4f::new(r.pos.x, r.pos.y, r.dim.x, r.dim.y)
    }

    /// Raw triangle vertices, three per triangle.
    pub fn vertices(&self) -> &[Vertex] { &self.vertices }

    /// Instanced quads.
    pub fn instances(&self) -> &[DrawInstance] { &self.instances }

    /// Number of primitives (quads, glyphs, shapes) appended to the item.
    pub fn primitive_count(&self) -> usize { self.primitives }

    /// Appends the triangles of one primitive.
    pub fn push_vertices(&mut self, vertices: &[Vertex]) {
        debug_assert!(!self.is_instanced(), "vertices appended to an instanced item");
        self.vertices.extend_from_slice(vertices);
        self.primitives += 1;
    }

    /// Appends one instanced primitive.
    pub fn push_instance(&mut self, instance: DrawInstance) {
        debug_assert!(self.is_instanced(), "instance appended to a vertex item");
        self.instances.push(instance);
        self.primitives += 1;
    }
}

/// Ordered draw items of one frame.
///
/// Item storage survives [`DrawList::reset`], so steady-state frames do not allocate.
#[derive(Default, Debug)]
pub struct DrawList {
    items: Vec<DrawItem>,
    count: usize,
    texture_to_item: HashMap<TextureHandle, usize>,
    texture_to_instance_item: HashMap<TextureHandle, usize>,
}

impl DrawList {
    /// Creates an empty list.
    pub fn new() -> Self { Self::default() }

    /// Number of items in use.
    pub fn len(&self) -> usize { self.count }

    /// Returns `true` when nothing was drawn.
    pub fn is_empty(&self) -> bool { self.count == 0 }

    /// Items in emission order.
    pub fn items(&self) -> &[DrawItem] { &self.items[..self.count] }

    /// Item at `index`, if in use.
    pub fn item(&self, index: usize) -> Option<&DrawItem> { self.items().get(index) }

    /// Number of item slots allocated, used or not.
    pub fn capacity(&self) -> usize { self.items.len() }

    /// Forgets all items and lookup entries while keeping the item storage.
    pub fn reset(&mut self) {
        self.count = 0;
        self.texture_to_item.clear();
        self.texture_to_instance_item.clear();
    }

    /// Releases the item storage.
    pub fn free_items(&mut self) {
        self.reset();
        self.items.clear();
        self.items.shrink_to_fit();
    }

    fn open_item(&mut self, key: DrawKey, mask: MaskOp) -> usize {
        let index = self.count;
        if index == self.items.len() {
            self.items.push(DrawItem::default());
        }
        self.items[index].open(key, mask);
        self.count += 1;
        index
    }

    fn coalescable(&self, index: Option<usize>, key: &DrawKey) -> Option<usize> {
        let index = index?;
        let item = &self.items[index];
        (index + 1 == self.count && !item.is_mask() && item.key == *key).then_some(index)
    }

    /// Item that raw-triangle geometry with `key` should be appended to: the most recent item if its key
    /// matches, a new item otherwise.
    pub fn texture_item(&mut self, key: DrawKey) -> &mut DrawItem {
        let mut key = key;
        key.flags.remove(DrawFlags::INSTANCED);
        let index = match self.coalescable(self.texture_to_item.get(&key.texture).copied(), &key) {
            Some(index) => index,
            None => {
                let index = self.open_item(key, MaskOp::None);
                self.texture_to_item.insert(key.texture, index);
                index
            }
        };
        &mut self.items[index]
    }

    /// Instanced counterpart of [`DrawList::texture_item`].
    pub fn texture_instance_item(&mut self, key: DrawKey) -> &mut DrawItem {
        let mut key = key;
        key.flags.insert(DrawFlags::INSTANCED);
        let index = match self.coalescable(self.texture_to_instance_item.get(&key.texture).copied(), &key) {
            Some(index) => index,
            None => {
                let index = self.open_item(key, MaskOp::None);
                self.texture_to_instance_item.insert(key.texture, index);
                index
            }
        };
        &mut self.items[index]
    }

    /// Opens a mask item. Mask items are never shared with other geometry.
    pub fn mask_item(&mut self, key: DrawKey, op: MaskOp) -> &mut DrawItem {
        assert!(op != MaskOp::None, "mask item needs a push or pop operation");
        let index = self.open_item(key, op);
        &mut self.items[index]
    }

    /// Items in the order a renderer draws them: base items (layer `<= 0`) first, then overlay items, each pass
    /// in emission order.
    pub fn render_order(&self) -> impl Iterator<Item = &DrawItem> + '_ {
        let items = self.items();
        items.iter().filter(|item| !item.is_overlay()).chain(items.iter().filter(|item| item.is_overlay()))
    }

    /// Splits the items into the base pass and the overlay pass.
    pub fn partition_layers(&self) -> (Vec<&DrawItem>, Vec<&DrawItem>) { self.items().iter().partition(|item| !item.is_overlay()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn quad(item: &mut DrawItem) {
        let v = Vertex::default();
        item.push_vertices(&[v; 6]);
    }

    fn key(texture: u32) -> DrawKey { DrawKey::new(TextureHandle::new(texture), DrawFlags::NONE, 0) }

    #[test]
    fn quad_uv_is_origin_and_extent() {
        let rect = UiRect::new(0.0, 0.0, 8.0, 8.0);
        let v = quad_vertices(&rect, Vec4f::new(0.25, 0.5, 0.0625, 0.0625), 0.0, Vec4f::new(1.0, 1.0, 1.0, 1.0));
        assert_eq!((v[0].tex_coord.x, v[0].tex_coord.y), (0.25, 0.5));
        assert_eq!((v[2].tex_coord.x, v[2].tex_coord.y), (0.3125, 0.5625));
    }

    #[test]
    fn same_key_draws_share_one_item() {
        let mut list = DrawList::new();
        for _ in 0..5 {
            quad(list.texture_item(key(3)));
        }
        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].primitive_count(), 5);
        assert_eq!(list.items()[0].vertices().len(), 30);
    }

    #[test]
    fn interleaved_keys_are_not_reordered() {
        let mut list = DrawList::new();
        quad(list.texture_item(key(1)));
        quad(list.texture_item(key(2)));
        quad(list.texture_item(key(1)));
        let textures: Vec<u32> = list.items().iter().map(|i| i.texture_handle().raw()).collect();
        assert_eq!(textures, vec![1, 2, 1]);
    }

    #[test]
    fn instanced_and_vertex_items_do_not_mix() {
        let mut list = DrawList::new();
        quad(list.texture_item(key(0)));
        list.texture_instance_item(key(0)).push_instance(DrawInstance::default());
        list.texture_instance_item(key(0)).push_instance(DrawInstance::default());
        assert_eq!(list.len(), 2);
        assert!(!list.items()[0].is_instanced());
        assert!(list.items()[1].is_instanced());
        assert_eq!(list.items()[1].instances().len(), 2);
    }

    #[test]
    fn crop_layer_and_shape_split_items() {
        let mut list = DrawList::new();
        let base = key(0);
        quad(list.texture_item(base));
        let cropped = base.with_region(DrawFlags::CROP, ui_rect(0.0, 0.0, 10.0, 10.0));
        quad(list.texture_item(cropped));
        quad(list.texture_item(cropped));
        let mut overlay = base;
        overlay.layer = 1;
        quad(list.texture_item(overlay));
        let shape = base.with_region(DrawFlags::SHAPE, ui_rect(1.0, 1.0, 4.0, 4.0));
        quad(list.texture_item(shape));
        quad(list.texture_item(base.with_region(DrawFlags::SHAPE, ui_rect(2.0, 1.0, 4.0, 4.0))));
        assert_eq!(list.len(), 5);
        assert!(list.items()[1].is_crop());
        assert_eq!(list.items()[1].primitive_count(), 2);
        assert_eq!(list.items()[1].crop_rect().z, 10.0);
    }

    #[test]
    fn masks_never_coalesce() {
        let mut list = DrawList::new();
        let k = key(0);
        list.mask_item(k, MaskOp::Push).push_instance(DrawInstance::default());
        list.texture_instance_item(k).push_instance(DrawInstance::default());
        list.mask_item(k, MaskOp::Pop).push_instance(DrawInstance::default());
        list.texture_instance_item(k).push_instance(DrawInstance::default());
        assert_eq!(list.len(), 4);
        let ops: Vec<MaskOp> = list.items().iter().map(|i| i.mask_op()).collect();
        assert_eq!(ops, vec![MaskOp::Push, MaskOp::None, MaskOp::Pop, MaskOp::None]);
    }

    #[test]
    fn reset_keeps_storage() {
        let mut list = DrawList::new();
        quad(list.texture_item(key(1)));
        quad(list.texture_item(key(2)));
        list.reset();
        assert!(list.is_empty());
        assert_eq!(list.capacity(), 2);
        quad(list.texture_item(key(2)));
        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].vertices().len(), 6);
        assert_eq!(list.items()[0].texture_handle().raw(), 2);
        list.free_items();
        assert_eq!(list.capacity(), 0);
    }

    #[test]
    fn overlay_items_render_last() {
        let mut list = DrawList::new();
        let mut popup = key(1);
        popup.layer = 1;
        quad(list.texture_item(key(0)));
        quad(list.texture_item(popup));
        quad(list.texture_item(key(2)));
        let order: Vec<u32> = list.render_order().map(|i| i.texture_handle().raw()).collect();
        assert_eq!(order, vec![0, 2, 1]);
        let (base, overlay) = list.partition_layers();
        assert_eq!(base.len(), 2);
        assert_eq!(overlay.len(), 1);
    }

    #[test]
    fn random_runs_coalesce_adjacent_only() {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        for _ in 0..50 {
            let mut list = DrawList::new();
            let mut expected_items = 0;
            let mut last: Option<u32> = None;
            let n = rng.random_range(1..64);
            for _ in 0..n {
                let texture = rng.random_range(0..3u32);
                if last != Some(texture) {
                    expected_items += 1;
                }
                last = Some(texture);
                quad(list.texture_item(key(texture)));
            }
            assert_eq!(list.len(), expected_items);
            let total: usize = list.items().iter().map(|i| i.primitive_count()).sum();
            assert_eq!(total, n);
            for pair in list.items().windows(2) {
                assert_ne!(pair[0].texture_handle(), pair[1].texture_handle());
            }
        }
    }
}
