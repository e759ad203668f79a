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
//! Hot/active state machine.
//!
//! A widget is *hot* while the pointer is over it and *active* while the user interacts with it. Both are
//! decided by [`InteractionState::evaluate`], which every widget calls exactly once per frame with its id and
//! rectangle:
//!
//! - hot is reset at the start of each frame and the last widget evaluated under the pointer wins,
//! - a widget becomes active when the button goes down while it is hot,
//! - it stays active while the button is held, wherever the pointer goes,
//! - releasing the button over the widget clicks it, releasing elsewhere does not.
//!
//! Widgets on the base layer ignore the pointer inside overlay regions (open menus, drop-down lists) registered
//! during the previous frame.
use crate::*;
use std::collections::HashMap;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
/// When an active widget gives up focus.
pub enum FocusPolicy {
    /// On mouse release (buttons, sliders, drags).
    #[default]
    ReleaseOnMouseUp,
    /// When the mouse is pressed outside the widget, or the widget deactivates itself (text inputs).
    HoldUntilClickOutside,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
/// Outcome of evaluating a widget for one frame.
pub struct Interaction {
    /// The pointer is over the widget.
    pub hot: bool,
    /// The widget owns the interaction.
    pub active: bool,
    /// The widget became active this frame.
    pub just_activated: bool,
    /// The widget stopped being active this frame.
    pub just_released: bool,
    /// The button was released over the active widget.
    pub clicked: bool,
}

impl Interaction {
    /// Look matching the interaction.
    pub fn visual(&self) -> VisualState {
        if self.active {
            VisualState::Down
        } else if self.hot {
            VisualState::Hover
        } else {
            VisualState::Up
        }
    }

    /// Like [`Interaction::visual`], showing `Selected` for an idle selected widget.
    pub fn visual_selected(&self, selected: bool) -> VisualState {
        match self.visual() {
            VisualState::Up if selected => VisualState::Selected,
            visual => visual,
        }
    }
}

#[derive(Copy, Clone, Debug, Default)]
/// Persistent state of a panel, kept across frames.
pub struct PanelState {
    /// Outer rectangle, title bar included.
    pub rect: UiRect,
    /// Vertical scroll offset of the content.
    pub scroll: Real,
    /// Collapsed to its title bar.
    pub closed: bool,
    /// Size of the content laid out during the last frame.
    pub content_size: Vec2f,
    /// Height follows the content.
    pub auto_size: bool,
}

#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct MenuInfo {
    pub id: Id,
    pub rect: UiRect,
    pub level: usize,
    pub is_sub_menu: bool,
    pub prev_layer: i32,
    pub anchor: UiRect,
}

/// Character filter applied before insertion into a text input.
pub type TextFilter = fn(char) -> bool;

#[derive(Clone, Debug, Default)]
/// Editing session of the active text input.
pub struct TextSession {
    owner: Id,
    buffer: String,
    capacity: usize,
    cursor: usize,
    scroll: usize,
    filter: Option<TextFilter>,
    changed: bool,
    committed: bool,
    touched: bool,
}

fn prev_boundary(buf: &str, index: usize) -> usize {
    if index == 0 {
        return 0;
    }
    let mut i = index.min(buf.len()) - 1;
    while i > 0 && !buf.is_char_boundary(i) {
        i -= 1;
    }
    i
}

fn next_boundary(buf: &str, index: usize) -> usize {
    if index >= buf.len() {
        return buf.len();
    }
    let mut i = index + 1;
    while i < buf.len() && !buf.is_char_boundary(i) {
        i += 1;
    }
    i
}

impl TextSession {
    /// Widget owning the session.
    pub fn owner(&self) -> Id { self.owner }

    /// Text being edited.
    pub fn buffer(&self) -> &str { &self.buffer }

    /// Maximum number of characters.
    pub fn capacity(&self) -> usize { self.capacity }

    /// Caret position as a byte offset into [`TextSession::buffer`].
    pub fn cursor(&self) -> usize { self.cursor }

    /// Byte offset of the first visible character.
    pub fn scroll(&self) -> usize { self.scroll }

    /// Returns `true` once Enter was pressed.
    pub fn is_committed(&self) -> bool { self.committed }

    /// Returns and clears the "buffer edited" flag.
    pub fn take_changed(&mut self) -> bool { std::mem::take(&mut self.changed) }

    /// Inserts `ch` at the caret unless filtered out or the buffer is full.
    pub fn insert(&mut self, ch: char) {
        if ch.is_control() {
            return;
        }
        if let Some(filter) = self.filter {
            if !filter(ch) {
                return;
            }
        }
        if self.buffer.chars().count() >= self.capacity {
            return;
        }
        self.buffer.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
        self.changed = true;
    }

    /// Applies an editing key.
    pub fn apply_key(&mut self, key: Key, state: KeyState) {
        if state == KeyState::Released {
            return;
        }
        match key {
            Key::Backspace => {
                if self.cursor > 0 {
                    let start = prev_boundary(&self.buffer, self.cursor);
                    self.buffer.replace_range(start..self.cursor, "");
                    self.cursor = start;
                    self.changed = true;
                }
            }
            Key::Delete => {
                if self.cursor < self.buffer.len() {
                    let end = next_boundary(&self.buffer, self.cursor);
                    self.buffer.replace_range(self.cursor..end, "");
                    self.changed = true;
                }
            }
            Key::Left => self.cursor = prev_boundary(&self.buffer, self.cursor),
            Key::Right => self.cursor = next_boundary(&self.buffer, self.cursor),
            Key::Home => self.cursor = 0,
            Key::End => self.cursor = self.buffer.len(),
            Key::Enter => self.committed = true,
        }
    }

    /// Moves the visible window so the caret stays inside a viewport `width` pixels wide.
    pub fn fit_cursor(&mut self, font: &dyn Font, scale: Real, width: Real) {
        self.scroll = self.scroll.min(self.cursor);
        while self.scroll < self.cursor && font.text_length(&self.buffer[self.scroll..self.cursor], scale) > width {
            self.scroll = next_boundary(&self.buffer, self.scroll);
        }
        while self.scroll > 0 {
            let prev = prev_boundary(&self.buffer, self.scroll);
            if font.text_length(&self.buffer[prev..], scale) > width {
                break;
            }
            self.scroll = prev;
        }
    }
}

/// Per-context interaction state: focus, input, stacks and persistent widget state.
#[derive(Default)]
pub struct InteractionState {
    hot_item: Id,
    active_item: Id,
    last_active_item: Id,
    active_policy: FocusPolicy,
    active_seen: bool,
    input: Input,
    text: TextSession,
    displaced: Vec<TextSession>,
    layer: i32,
    overlays: Vec<UiRect>,
    blocking: Vec<UiRect>,
    clips: Vec<UiRect>,
    panel_states: HashMap<Id, PanelState>,
    pub(crate) layout: LayoutCursor,
    pub(crate) menus: Vec<MenuInfo>,
    pub(crate) open_menus: Vec<Id>,
    pub(crate) menu_clicked: bool,
    pub(crate) menu_heights: HashMap<Id, Real>,
    pub(crate) open_drop_down: Id,
    pub(crate) panels: Vec<Id>,
    #[cfg(debug_assertions)]
    claims: HashMap<Id, UiRect>,
}

impl InteractionState {
    /// Creates an idle state.
    pub fn new() -> Self { Self::default() }

    /// Widget under the pointer, as decided so far this frame.
    pub fn hot_item(&self) -> Id { self.hot_item }

    /// Widget owning the interaction.
    pub fn active_item(&self) -> Id { self.active_item }

    /// Widget that was active at the end of the previous frame.
    pub fn last_active_item(&self) -> Id { self.last_active_item }

    /// Current input snapshot.
    pub fn input(&self) -> &Input { &self.input }

    /// Current mouse snapshot.
    pub fn mouse(&self) -> &MouseSnapshot { self.input.mouse() }

    /// Layer widgets are evaluated and drawn on.
    pub fn layer(&self) -> i32 { self.layer }

    pub(crate) fn set_layer(&mut self, layer: i32) { self.layer = layer; }

    /// Auto-placement cursor.
    pub fn layout(&self) -> &LayoutCursor { &self.layout }

    /// Overwrites the mouse snapshot.
    pub fn update_mouse_state(&mut self, x: Real, y: Real, button: ButtonState) { self.input.update_mouse(x, y, button); }

    /// Accumulates wheel movement until [`InteractionState::use_scroll_offset`] consumes it.
    pub fn record_mouse_scroll(&mut self, y: Real) { self.input.scroll(y); }

    /// Returns the pending wheel movement and resets it.
    pub fn use_scroll_offset(&mut self) -> Real { self.input.take_scroll() }

    fn session_is_live(&self) -> bool { !self.text.owner.is_none() && self.text.owner == self.active_item }

    /// Feeds a typed character to the active text input. Dropped when no text input is active.
    pub fn record_text_input(&mut self, ch: char) {
        if self.session_is_live() {
            self.text.insert(ch);
        }
    }

    /// Feeds an editing key to the active text input. Dropped when no text input is active.
    pub fn record_keyboard_button(&mut self, key: Key, state: KeyState) {
        if self.session_is_live() {
            self.text.apply_key(key, state);
        }
    }

    /// Parks the live session as committed until its owner runs again.
    fn displace_text_session(&mut self) {
        if self.text.owner.is_none() {
            return;
        }
        let mut session = std::mem::take(&mut self.text);
        session.committed = true;
        self.displaced.retain(|s| s.owner != session.owner);
        self.displaced.push(session);
    }

    /// Starts editing `text` in the widget `owner`. A session owned by another widget is committed and kept for
    /// [`InteractionState::take_displaced_session`].
    pub fn begin_text_session(&mut self, owner: Id, text: &str, capacity: usize, filter: Option<TextFilter>) {
        if self.text.owner != owner {
            self.displace_text_session();
        }
        self.displaced.retain(|s| s.owner != owner);
        let mut buffer: String = text.chars().take(capacity).collect();
        if let Some(filter) = filter {
            buffer.retain(filter);
        }
        self.text = TextSession {
            owner,
            cursor: buffer.len(),
            buffer,
            capacity,
            scroll: 0,
            filter,
            changed: false,
            committed: false,
            touched: true,
        };
    }

    /// Session owned by `owner`, if any.
    pub fn text_session(&self, owner: Id) -> Option<&TextSession> { (!owner.is_none() && self.text.owner == owner).then_some(&self.text) }

    /// Mutable session owned by `owner`, if any. A session nobody asks for during a frame is displaced as committed
    /// once its owner is no longer active.
    pub fn text_session_mut(&mut self, owner: Id) -> Option<&mut TextSession> {
        if owner.is_none() || self.text.owner != owner {
            return None;
        }
        self.text.touched = true;
        Some(&mut self.text)
    }

    /// Committed session `owner` lost before it could close it (focus moved to another text input, or the owner
    /// was not drawn while active).
    pub fn displaced_session(&self, owner: Id) -> Option<&TextSession> { self.displaced.iter().find(|s| !owner.is_none() && s.owner == owner) }

    /// Removes and returns the displaced session of `owner`.
    pub fn take_displaced_session(&mut self, owner: Id) -> Option<TextSession> {
        let index = self.displaced.iter().position(|s| !owner.is_none() && s.owner == owner)?;
        Some(self.displaced.remove(index))
    }

    /// Closes the session owned by `owner` and returns its text.
    pub fn end_text_session(&mut self, owner: Id) -> Option<String> {
        if owner.is_none() || self.text.owner != owner {
            return None;
        }
        Some(std::mem::take(&mut self.text).buffer)
    }

    /// Gives the interaction to `id`.
    pub fn set_active(&mut self, id: Id, policy: FocusPolicy) {
        self.active_item = id;
        self.active_policy = policy;
        self.active_seen = true;
    }

    /// Drops the interaction if `id` owns it.
    pub fn deactivate(&mut self, id: Id) {
        if self.active_item == id {
            self.active_item = Id::NONE;
        }
    }

    /// Marks `rect` as covered by an overlay. Base-layer widgets ignore the pointer there next frame.
    pub fn register_overlay(&mut self, rect: UiRect) { self.overlays.push(rect); }

    /// Returns `true` when the pointer is over an overlay and the current layer is not an overlay.
    pub fn pointer_blocked(&self) -> bool {
        let pos = self.input.mouse().pos;
        self.layer <= 0 && self.blocking.iter().any(|r| r.contains(pos))
    }

    /// Overlay regions registered so far this frame.
    pub fn overlays(&self) -> &[UiRect] { &self.overlays }

    /// Limits hovering to `rect` (intersected with the enclosing clip) until the matching pop.
    pub fn push_clip(&mut self, rect: UiRect) {
        let clip = match self.clips.last() {
            Some(outer) => rect.intersect(outer),
            None => rect,
        };
        self.clips.push(clip);
    }

    /// Removes the innermost hover clip.
    pub fn pop_clip(&mut self) {
        assert!(self.clips.pop().is_some(), "pop_clip without a matching push_clip");
    }

    /// Returns `true` when the pointer is inside `rect` and the current clip, and not blocked by an overlay.
    pub fn mouse_over(&self, rect: &UiRect) -> bool {
        let pos = self.input.mouse().pos;
        rect.contains(pos) && self.clips.last().is_none_or(|clip| clip.contains(pos)) && !self.pointer_blocked()
    }

    #[cfg(debug_assertions)]
    fn claim(&mut self, id: Id, rect: &UiRect) {
        if let Some(previous) = self.claims.insert(id, *rect) {
            if previous != *rect {
                log::warn!("widget id {:?} used by two widgets this frame ({:?} and {:?})", id, previous, rect);
            }
            assert!(previous == *rect, "widget id {:?} claimed twice with different rectangles", id);
        }
    }

    #[cfg(not(debug_assertions))]
    fn claim(&mut self, _id: Id, _rect: &UiRect) {}

    /// Runs the hot/active state machine for one widget. Call once per widget per frame.
    pub fn evaluate(&mut self, id: Id, rect: &UiRect, policy: FocusPolicy) -> Interaction {
        self.claim(id, rect);
        let mouse = *self.input.mouse();
        let inside = self.mouse_over(rect);
        let mut result = Interaction { hot: inside, ..Interaction::default() };

        if inside {
            self.hot_item = id;
            if mouse.pressed() {
                self.set_active(id, policy);
                result.just_activated = true;
            }
        }

        if self.active_item == id {
            self.active_seen = true;
            let released = match self.active_policy {
                FocusPolicy::ReleaseOnMouseUp => !mouse.is_down(),
                FocusPolicy::HoldUntilClickOutside => mouse.pressed() && !inside,
            };
            if released {
                result.just_released = true;
                result.clicked = inside && self.active_policy == FocusPolicy::ReleaseOnMouseUp;
                self.active_item = Id::NONE;
            } else {
                result.active = true;
            }
        } else if self.last_active_item == id {
            // lost focus before this widget ran
            result.just_released = true;
        }
        result
    }

    /// Persistent state of a panel.
    pub fn panel_state(&self, id: Id) -> Option<&PanelState> { self.panel_states.get(&id) }

    pub(crate) fn panel_state_mut(&mut self, id: Id, init: impl FnOnce() -> PanelState) -> &mut PanelState { self.panel_states.entry(id).or_insert_with(init) }

    /// Forgets a panel's persistent state.
    pub fn remove_panel_state(&mut self, id: Id) -> Option<PanelState> { self.panel_states.remove(&id) }

    /// Starts a frame: resets hot, samples last active and rotates overlay regions.
    pub fn begin_frame(&mut self, screen: UiRect, spacing: Real) {
        self.hot_item = Id::NONE;
        self.last_active_item = self.active_item;
        self.active_seen = false;
        self.layer = 0;
        self.menu_clicked = false;
        self.text.touched = false;
        self.blocking = std::mem::take(&mut self.overlays);
        self.layout.reset(screen, spacing);
        #[cfg(debug_assertions)]
        self.claims.clear();
    }

    /// Ends a frame: checks stack balance and releases stale focus.
    pub fn end_frame(&mut self) {
        assert!(self.menus.is_empty(), "unbalanced menus: {} still open at end of frame", self.menus.len());
        assert!(self.panels.is_empty(), "unbalanced panels: {} still open at end of frame", self.panels.len());
        assert!(self.layout.area_depth() == 1, "unbalanced layout areas: {} still pushed at end of frame", self.layout.area_depth() - 1);
        assert!(self.layout.direction_depth() == 0, "unbalanced layout directions: {} still pushed at end of frame", self.layout.direction_depth());
        assert!(self.clips.is_empty(), "unbalanced hover clips: {} still pushed at end of frame", self.clips.len());

        if !self.active_item.is_none() {
            let released = self.active_policy == FocusPolicy::ReleaseOnMouseUp && !self.input.mouse().is_down();
            if released || !self.active_seen {
                self.active_item = Id::NONE;
            }
        }
        if !self.text.owner.is_none() && self.text.owner != self.active_item && !self.text.touched {
            self.displace_text_session();
        }
        self.input.epilogue();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::test_font::MonoFont;

    fn state() -> InteractionState {
        let mut s = InteractionState::new();
        s.begin_frame(ui_rect(0.0, 0.0, 800.0, 600.0), 4.0);
        s
    }

    fn frame(s: &mut InteractionState, x: Real, y: Real, button: ButtonState, f: impl FnOnce(&mut InteractionState)) {
        s.update_mouse_state(x, y, button);
        f(s);
        s.end_frame();
        s.begin_frame(ui_rect(0.0, 0.0, 800.0, 600.0), 4.0);
    }

    #[test]
    fn last_evaluated_widget_is_hot() {
        let mut s = state();
        s.update_mouse_state(15.0, 15.0, ButtonState::Up);
        let a = s.evaluate(Id::new(1), &ui_rect(0.0, 0.0, 30.0, 30.0), FocusPolicy::ReleaseOnMouseUp);
        let b = s.evaluate(Id::new(2), &ui_rect(10.0, 10.0, 30.0, 30.0), FocusPolicy::ReleaseOnMouseUp);
        let c = s.evaluate(Id::new(3), &ui_rect(100.0, 100.0, 30.0, 30.0), FocusPolicy::ReleaseOnMouseUp);
        assert!(a.hot && b.hot && !c.hot);
        assert_eq!(s.hot_item(), Id::new(2));
        s.end_frame();
        s.begin_frame(ui_rect(0.0, 0.0, 800.0, 600.0), 4.0);
        assert_eq!(s.hot_item(), Id::NONE);
    }

    #[test]
    fn press_activates_and_release_inside_clicks_once() {
        let mut s = state();
        let id = Id::new(9);
        let r = ui_rect(0.0, 0.0, 100.0, 30.0);
        let mut results = Vec::new();
        frame(&mut s, 50.0, 10.0, ButtonState::Down, |s| results.push(s.evaluate(id, &r, FocusPolicy::ReleaseOnMouseUp)));
        assert_eq!(s.last_active_item(), id);
        frame(&mut s, 50.0, 10.0, ButtonState::Up, |s| results.push(s.evaluate(id, &r, FocusPolicy::ReleaseOnMouseUp)));
        frame(&mut s, 50.0, 10.0, ButtonState::Up, |s| results.push(s.evaluate(id, &r, FocusPolicy::ReleaseOnMouseUp)));
        assert!(results[0].just_activated && results[0].active && !results[0].clicked);
        assert!(results[1].clicked && results[1].just_released && !results[1].active);
        assert!(!results[2].clicked && !results[2].active);
        assert_eq!(s.active_item(), Id::NONE);
    }

    #[test]
    fn release_outside_does_not_click() {
        let mut s = state();
        let id = Id::new(9);
        let r = ui_rect(0.0, 0.0, 100.0, 30.0);
        let mut results = Vec::new();
        frame(&mut s, 50.0, 10.0, ButtonState::Down, |s| results.push(s.evaluate(id, &r, FocusPolicy::ReleaseOnMouseUp)));
        frame(&mut s, 300.0, 200.0, ButtonState::Down, |s| results.push(s.evaluate(id, &r, FocusPolicy::ReleaseOnMouseUp)));
        frame(&mut s, 300.0, 200.0, ButtonState::Up, |s| results.push(s.evaluate(id, &r, FocusPolicy::ReleaseOnMouseUp)));
        assert!(results[1].active && !results[1].hot);
        assert!(!results[2].clicked && results[2].just_released);
        assert_eq!(s.active_item(), Id::NONE);
    }

    #[test]
    fn press_outside_then_drag_in_does_not_activate() {
        let mut s = state();
        let id = Id::new(4);
        let r = ui_rect(0.0, 0.0, 100.0, 30.0);
        let mut results = Vec::new();
        frame(&mut s, 300.0, 10.0, ButtonState::Down, |s| results.push(s.evaluate(id, &r, FocusPolicy::ReleaseOnMouseUp)));
        frame(&mut s, 50.0, 10.0, ButtonState::Down, |s| results.push(s.evaluate(id, &r, FocusPolicy::ReleaseOnMouseUp)));
        frame(&mut s, 50.0, 10.0, ButtonState::Up, |s| results.push(s.evaluate(id, &r, FocusPolicy::ReleaseOnMouseUp)));
        assert!(results.iter().all(|r| !r.active && !r.clicked));
        assert!(results[1].hot);
    }

    #[test]
    fn hold_policy_survives_mouse_up_until_click_outside() {
        let mut s = state();
        let id = Id::new(5);
        let r = ui_rect(0.0, 0.0, 100.0, 30.0);
        frame(&mut s, 10.0, 10.0, ButtonState::Down, |s| {
            s.evaluate(id, &r, FocusPolicy::HoldUntilClickOutside);
        });
        frame(&mut s, 10.0, 10.0, ButtonState::Up, |s| {
            assert!(s.evaluate(id, &r, FocusPolicy::HoldUntilClickOutside).active);
        });
        assert_eq!(s.active_item(), id);
        frame(&mut s, 400.0, 400.0, ButtonState::Down, |s| {
            let i = s.evaluate(id, &r, FocusPolicy::HoldUntilClickOutside);
            assert!(!i.active && i.just_released && !i.clicked);
        });
        assert_eq!(s.active_item(), Id::NONE);
    }

    #[test]
    fn vanished_active_widget_loses_focus() {
        let mut s = state();
        let id = Id::new(5);
        frame(&mut s, 10.0, 10.0, ButtonState::Down, |s| {
            s.evaluate(id, &ui_rect(0.0, 0.0, 50.0, 50.0), FocusPolicy::HoldUntilClickOutside);
        });
        frame(&mut s, 10.0, 10.0, ButtonState::Down, |_| {});
        assert_eq!(s.active_item(), Id::NONE);
    }

    #[test]
    fn overlays_block_base_layer_next_frame() {
        let mut s = state();
        let base = Id::new(1);
        let popup = Id::new(2);
        let r = ui_rect(0.0, 0.0, 100.0, 100.0);
        frame(&mut s, 20.0, 20.0, ButtonState::Up, |s| {
            s.set_layer(1);
            s.register_overlay(ui_rect(0.0, 0.0, 50.0, 50.0));
            s.set_layer(0);
        });
        s.update_mouse_state(20.0, 20.0, ButtonState::Up);
        assert!(!s.evaluate(base, &r, FocusPolicy::ReleaseOnMouseUp).hot);
        s.set_layer(1);
        assert!(s.evaluate(popup, &ui_rect(0.0, 0.0, 50.0, 50.0), FocusPolicy::ReleaseOnMouseUp).hot);
        s.set_layer(0);
        s.update_mouse_state(70.0, 70.0, ButtonState::Up);
        assert!(s.mouse_over(&r));
    }

    #[test]
    fn clip_limits_hover() {
        let mut s = state();
        s.update_mouse_state(80.0, 10.0, ButtonState::Up);
        s.push_clip(ui_rect(0.0, 0.0, 50.0, 50.0));
        assert!(!s.evaluate(Id::new(1), &ui_rect(0.0, 0.0, 100.0, 20.0), FocusPolicy::ReleaseOnMouseUp).hot);
        s.pop_clip();
        assert!(s.evaluate(Id::new(2), &ui_rect(0.0, 0.0, 100.0, 20.0), FocusPolicy::ReleaseOnMouseUp).hot);
    }

    #[test]
    fn scroll_is_consumed_once_per_frame() {
        let mut s = state();
        s.record_mouse_scroll(2.0);
        assert_eq!(s.use_scroll_offset(), 2.0);
        assert_eq!(s.use_scroll_offset(), 0.0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "claimed twice")]
    fn id_collision_is_caught_in_debug() {
        let mut s = state();
        s.evaluate(Id::new(1), &ui_rect(0.0, 0.0, 10.0, 10.0), FocusPolicy::ReleaseOnMouseUp);
        s.evaluate(Id::new(1), &ui_rect(20.0, 0.0, 10.0, 10.0), FocusPolicy::ReleaseOnMouseUp);
    }

    #[test]
    #[should_panic(expected = "unbalanced layout directions")]
    fn unbalanced_direction_is_fatal() {
        let mut s = state();
        s.layout.push_direction(Direction::Horizontal);
        s.end_frame();
    }

    fn editing_state(text: &str, capacity: usize, filter: Option<TextFilter>) -> (InteractionState, Id) {
        let mut s = state();
        let id = Id::new(77);
        s.set_active(id, FocusPolicy::HoldUntilClickOutside);
        s.begin_text_session(id, text, capacity, filter);
        (s, id)
    }

    #[test]
    fn typing_edits_the_session() {
        let (mut s, id) = editing_state("ac", 10, None);
        s.record_keyboard_button(Key::Left, KeyState::Pressed);
        s.record_text_input('b');
        s.record_keyboard_button(Key::End, KeyState::Pressed);
        s.record_keyboard_button(Key::Backspace, KeyState::Repeat);
        s.record_keyboard_button(Key::Backspace, KeyState::Released);
        s.record_keyboard_button(Key::Home, KeyState::Pressed);
        s.record_keyboard_button(Key::Delete, KeyState::Pressed);
        let session = s.text_session_mut(id).unwrap();
        assert_eq!(session.buffer(), "b");
        assert_eq!(session.cursor(), 0);
        assert!(session.take_changed());
        assert!(!session.take_changed());
    }

    fn digits(c: char) -> bool { c.is_ascii_digit() }

    #[test]
    fn capacity_and_filter_drop_characters() {
        let (mut s, id) = editing_state("", 3, Some(digits as TextFilter));
        for ch in "1a2b34".chars() {
            s.record_text_input(ch);
        }
        assert_eq!(s.text_session(id).unwrap().buffer(), "123");
    }

    #[test]
    fn input_without_session_is_dropped() {
        let mut s = state();
        s.record_text_input('x');
        s.record_keyboard_button(Key::Enter, KeyState::Pressed);
        assert!(s.text_session(Id::new(1)).is_none());
    }

    #[test]
    fn multibyte_cursor_moves_by_char() {
        let (mut s, id) = editing_state("a\u{1F600}b", 10, None);
        s.record_keyboard_button(Key::Left, KeyState::Pressed);
        s.record_keyboard_button(Key::Left, KeyState::Pressed);
        assert_eq!(s.text_session(id).unwrap().cursor(), 1);
        s.record_keyboard_button(Key::Delete, KeyState::Pressed);
        assert_eq!(s.text_session(id).unwrap().buffer(), "ab");
    }

    #[test]
    fn enter_commits() {
        let (mut s, id) = editing_state("42", 10, None);
        s.record_keyboard_button(Key::Enter, KeyState::Pressed);
        assert!(s.text_session(id).unwrap().is_committed());
        assert_eq!(s.end_text_session(id).as_deref(), Some("42"));
        assert!(s.text_session(id).is_none());
    }

    #[test]
    fn new_session_commits_the_previous_one() {
        let (mut s, first) = editing_state("1", 10, None);
        s.record_text_input('2');
        let second = Id::new(78);
        s.set_active(second, FocusPolicy::HoldUntilClickOutside);
        s.begin_text_session(second, "x", 10, None);
        assert!(s.text_session(first).is_none());
        assert_eq!(s.displaced_session(first).unwrap().buffer(), "12");

        let mut old = s.take_displaced_session(first).unwrap();
        assert!(old.is_committed());
        assert!(old.take_changed());
        assert!(s.take_displaced_session(first).is_none());
        assert_eq!(s.text_session(second).unwrap().buffer(), "x");
    }

    #[test]
    fn session_of_undrawn_widget_is_kept_committed() {
        let (mut s, id) = editing_state("4", 10, None);
        s.record_text_input('5');
        s.end_frame();
        s.begin_frame(ui_rect(0.0, 0.0, 800.0, 600.0), 4.0);
        s.end_frame();
        assert_eq!(s.active_item(), Id::NONE);
        assert!(s.text_session(id).is_none());
        let session = s.displaced_session(id).unwrap();
        assert_eq!(session.buffer(), "45");
        assert!(session.is_committed());
    }

    #[test]
    fn scroll_window_follows_cursor() {
        let (mut s, id) = editing_state("abcdefghij", 20, None);
        let session = s.text_session_mut(id).unwrap();
        // 10 glyphs of 8 pixels in a 40 pixel viewport: the last 5 stay visible
        session.fit_cursor(&MonoFont, 1.0, 40.0);
        assert_eq!(session.scroll(), 5);
        session.apply_key(Key::Home, KeyState::Pressed);
        session.fit_cursor(&MonoFont, 1.0, 40.0);
        assert_eq!(session.scroll(), 0);
    }
}
