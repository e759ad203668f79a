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
//! Menu bar with cascading sub-menus.
//!
//! The open path lives in the interaction state: entry `n` is the item open at depth `n` (`0` for the bar). Sub-menus
//! are drawn on layer `1` and register their area as an overlay so the widgets underneath stop reacting to the
//! pointer while a menu is open.
use crate::interaction::MenuInfo;
use crate::*;

impl Context {
    /// Starts the menu bar, placed across the current layout area.
    pub fn begin_menu(&mut self) {
        let style = self.styles.menu;
        let bar = self.next_rect(vec2f(0.0, style.height));
        self.draw_widget_style(&bar, &style.bar);
        let id = self.id_from_str("##menu_bar");
        self.state.menus.push(MenuInfo {
            id,
            rect: bar,
            level: 0,
            is_sub_menu: false,
            prev_layer: self.layer(),
            anchor: UiRect::new(bar.pos.x, bar.pos.y, 0.0, bar.dim.y),
        });
    }

    /// Top-level entry of the menu bar. Returns `true` while its menu is open.
    pub fn menu(&mut self, label: &str) -> bool {
        let style = self.styles.menu;
        let info = match self.state.menus.last() {
            Some(info) if !info.is_sub_menu => *info,
            _ => panic!("menu called outside of begin_menu/end_menu"),
        };
        let width = self.text_width(label, &style.item.font) + style.padding * 2.0;
        let rect = UiRect::new(info.anchor.right(), info.rect.pos.y, width, info.rect.dim.y);
        let id = self.id_from_str(label);
        let res = self.evaluate(id, &rect, FocusPolicy::ReleaseOnMouseUp);

        let menus = &mut self.state.open_menus;
        let was_open = menus.first() == Some(&id);
        if res.just_activated {
            self.state.menu_clicked = true;
            menus.clear();
            if !was_open {
                menus.push(id);
            }
        } else if res.hot && !menus.is_empty() && !was_open {
            menus.clear();
            menus.push(id);
        }
        let open = self.state.open_menus.first() == Some(&id);

        if let Some(top) = self.state.menus.last_mut() {
            top.anchor = rect;
        }
        self.button_frame_with_label(&rect, label, &style.item, res.visual_selected(open), TextAlign::Center);
        open
    }

    /// Ends the menu bar. A press that landed outside the bar and every open sub-menu closes the menus.
    pub fn end_menu(&mut self) {
        match self.state.menus.pop() {
            Some(info) if !info.is_sub_menu => {
                let mouse = *self.state.mouse();
                if mouse.pressed() && !self.state.menu_clicked && !self.state.open_menus.is_empty() {
                    let inside = info.rect.contains(mouse.pos) || self.state.overlays().iter().any(|r| r.contains(mouse.pos));
                    if !inside {
                        self.state.open_menus.clear();
                    }
                }
            }
            _ => panic!("end_menu without a matching begin_menu"),
        }
    }

    /// Starts the sub-menu of the entry that just reported open: below a bar entry, to the right of a sub-menu
    /// entry. Items are `width` pixels wide.
    pub fn begin_sub_menu(&mut self, width: Real) {
        let style = self.styles.menu;
        let parent = match self.state.menus.last() {
            Some(info) => *info,
            None => panic!("begin_sub_menu outside of a menu"),
        };
        let level = parent.level + 1;
        let pos = if parent.is_sub_menu {
            vec2f(parent.anchor.right(), parent.anchor.pos.y - style.padding)
        } else {
            vec2f(parent.anchor.pos.x, parent.anchor.bottom())
        };
        let opener = self.state.open_menus.get(parent.level).copied().unwrap_or(parent.id);
        let id = Id::from_index(opener, level as u32);
        let height = self.state.menu_heights.get(&id).copied().unwrap_or(0.0);

        let prev_layer = self.layer();
        self.set_layer(1);
        let background = UiRect::new(pos.x, pos.y, width, height + style.padding * 2.0);
        self.draw_widget_style(&background, &style.sub_menu);
        self.ids.push_id(id);
        self.state.menus.push(MenuInfo {
            id,
            rect: UiRect::new(pos.x, pos.y + style.padding, width, 0.0),
            level,
            is_sub_menu: true,
            prev_layer,
            anchor: UiRect::default(),
        });
    }

    /// Sub-menu entry. Entries with `has_sub_menu` open on hover and return `true` while open; plain entries return
    /// `true` when clicked, which also closes the whole menu.
    pub fn sub_menu(&mut self, label: &str, has_sub_menu: bool) -> bool {
        let style = self.styles.menu;
        let info = match self.state.menus.last_mut() {
            Some(info) if info.is_sub_menu => info,
            _ => panic!("sub_menu called outside of begin_sub_menu/end_sub_menu"),
        };
        let rect = UiRect::new(info.rect.pos.x, info.rect.bottom(), info.rect.dim.x, style.sub_item.size.y);
        info.rect.dim.y += rect.dim.y;
        info.anchor = rect;
        let level = info.level;

        let id = self.id_from_str(label);
        let res = self.evaluate(id, &rect, FocusPolicy::ReleaseOnMouseUp);
        if res.just_activated {
            self.state.menu_clicked = true;
        }
        let menus = &mut self.state.open_menus;
        if res.hot && menus.get(level) != Some(&id) {
            menus.truncate(level);
            if has_sub_menu {
                menus.push(id);
            }
        }
        let open = has_sub_menu && self.state.open_menus.get(level) == Some(&id);
        if res.clicked && !has_sub_menu {
            self.state.open_menus.clear();
        }

        let text = UiRect::new(rect.pos.x + style.padding, rect.pos.y, (rect.dim.x - style.padding * 2.0).max(0.0), rect.dim.y);
        self.button_frame_with_label(&rect, "", &style.sub_item, res.visual_selected(open), TextAlign::Left);
        self.draw_text_in_rect(&text, label, &style.sub_item.font, TextAlign::Left, VerticalAlign::Center);
        if has_sub_menu {
            let arrow = UiRect::new(rect.right() - rect.dim.y, rect.pos.y, rect.dim.y, rect.dim.y);
            self.draw_arrow(&arrow, false, style.sub_item.font.color);
        }
        if has_sub_menu { open } else { res.clicked }
    }

    /// Ends the innermost sub-menu.
    pub fn end_sub_menu(&mut self) {
        let style = self.styles.menu;
        let info = match self.state.menus.pop() {
            Some(info) if info.is_sub_menu => info,
            _ => panic!("end_sub_menu without a matching begin_sub_menu"),
        };
        self.ids.pop_id();
        self.state.menu_heights.insert(info.id, info.rect.dim.y);
        let area = UiRect::new(info.rect.pos.x, info.rect.pos.y - style.padding, info.rect.dim.x, info.rect.dim.y + style.padding * 2.0);
        self.state.register_overlay(area);
        self.set_layer(info.prev_layer);
    }

    fn button_frame_with_label(&mut self, rect: &UiRect, label: &str, style: &ButtonStyle, visual: VisualState, align: TextAlign) {
        self.draw_button_frame(rect, style, visual);
        if !label.is_empty() {
            self.draw_text_in_rect(rect, label, &style.font, align, VerticalAlign::Center);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::context::test_support::*;
    use crate::*;

    #[derive(Default, Debug, PartialEq)]
    struct Outcome {
        file_open: bool,
        recent_open: bool,
        save: bool,
        edit_open: bool,
    }

    fn menus(ctx: &mut Context) -> Outcome {
        let mut out = Outcome::default();
        ctx.begin_menu();
        out.file_open = ctx.menu("File");
        if out.file_open {
            ctx.begin_sub_menu(120.0);
            out.save = ctx.sub_menu("Save", false);
            out.recent_open = ctx.sub_menu("Recent", true);
            if out.recent_open {
                ctx.begin_sub_menu(100.0);
                ctx.sub_menu("a.txt", false);
                ctx.end_sub_menu();
            }
            ctx.end_sub_menu();
        }
        out.edit_open = ctx.menu("Edit");
        ctx.end_menu();
        out
    }

    // bar at y 4..26; "File" spans x 4..52 and "Edit" 52..100; "File" items start at y 34, 22 high
    const FILE: (Real, Real) = (20.0, 10.0);
    const EDIT: (Real, Real) = (70.0, 10.0);
    const SAVE: (Real, Real) = (20.0, 40.0);
    const RECENT: (Real, Real) = (20.0, 60.0);

    fn click(ctx: &mut Context, at: (Real, Real)) -> Outcome {
        frame(ctx, at.0, at.1, ButtonState::Down, menus);
        frame(ctx, at.0, at.1, ButtonState::Up, menus)
    }

    #[test]
    fn press_opens_and_press_again_closes() {
        let mut ctx = context();
        assert!(click(&mut ctx, FILE).file_open);
        assert!(!click(&mut ctx, FILE).file_open);
    }

    #[test]
    fn hover_switches_between_open_menus() {
        let mut ctx = context();
        click(&mut ctx, FILE);
        let out = frame(&mut ctx, EDIT.0, EDIT.1, ButtonState::Up, menus);
        assert!(out.edit_open);
        let out = frame(&mut ctx, EDIT.0, EDIT.1, ButtonState::Up, menus);
        assert!(out.edit_open && !out.file_open);
        assert_eq!(ctx.state().hot_item(), Id::from_str("Edit"));
    }

    #[test]
    fn nested_sub_menu_opens_on_hover() {
        let mut ctx = context();
        click(&mut ctx, FILE);
        frame(&mut ctx, RECENT.0, RECENT.1, ButtonState::Up, menus);
        let out = frame(&mut ctx, RECENT.0, RECENT.1, ButtonState::Up, menus);
        assert!(out.file_open && out.recent_open);
        // moving back to a plain entry closes the nested menu
        let out = frame(&mut ctx, SAVE.0, SAVE.1, ButtonState::Up, menus);
        assert!(out.file_open);
        let out = frame(&mut ctx, SAVE.0, SAVE.1, ButtonState::Up, menus);
        assert!(!out.recent_open);
    }

    #[test]
    fn clicking_an_entry_reports_and_closes() {
        let mut ctx = context();
        click(&mut ctx, FILE);
        let out = click(&mut ctx, SAVE);
        assert!(out.save);
        assert!(!frame(&mut ctx, SAVE.0, SAVE.1, ButtonState::Up, menus).file_open);
    }

    #[test]
    fn press_outside_closes_and_blocks_nothing_after() {
        let mut ctx = context();
        click(&mut ctx, FILE);
        let out = frame(&mut ctx, 600.0, 400.0, ButtonState::Down, menus);
        assert!(out.file_open);
        let out = frame(&mut ctx, 600.0, 400.0, ButtonState::Up, menus);
        assert_eq!(out, Outcome::default());
    }

    #[test]
    fn open_sub_menu_blocks_base_layer() {
        let mut ctx = context();
        click(&mut ctx, FILE);
        let covered = ui_rect(0.0, 30.0, 200.0, 100.0);
        let hot = frame(&mut ctx, SAVE.0, SAVE.1, ButtonState::Up, |ctx| {
            let r = ctx.evaluate(Id::new(99), &covered, FocusPolicy::ReleaseOnMouseUp);
            menus(ctx);
            r.hot
        });
        assert!(!hot);
        let overlay = ctx.draw_list().items().iter().filter(|i| i.is_overlay()).count();
        assert!(overlay > 0);
    }

    #[test]
    #[should_panic(expected = "unbalanced menus")]
    fn missing_end_menu_panics() {
        let mut ctx = context();
        ctx.begin_frame();
        ctx.begin_menu();
        ctx.menu("File");
        ctx.end_frame();
    }

    #[test]
    #[should_panic(expected = "unbalanced menus")]
    fn missing_end_sub_menu_panics() {
        let mut ctx = context();
        ctx.begin_frame();
        ctx.begin_menu();
        ctx.begin_sub_menu(100.0);
        ctx.end_frame();
    }

    #[test]
    #[should_panic(expected = "end_menu without a matching begin_menu")]
    fn extra_end_menu_panics() {
        let mut ctx = context();
        frame(&mut ctx, 0.0, 0.0, ButtonState::Up, |ctx| {
            menus(ctx);
            ctx.end_menu();
        });
    }

    #[test]
    #[should_panic(expected = "end_sub_menu without a matching begin_sub_menu")]
    fn extra_end_sub_menu_panics() {
        let mut ctx = context();
        frame(&mut ctx, 0.0, 0.0, ButtonState::Up, |ctx| {
            ctx.begin_menu();
            ctx.begin_sub_menu(100.0);
            ctx.end_sub_menu();
            ctx.end_sub_menu();
        });
    }
}
