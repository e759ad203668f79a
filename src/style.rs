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
//! Widget appearance.
//!
//! Every visual is a [`WidgetStyle`]: a flat color, optionally replaced by a texture mapped with a
//! [`TextureScale`]. Styles are plain data; the application can change any field between frames.
use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Which look a widget takes this frame.
pub enum VisualState {
    /// Idle.
    Up,
    /// Hot.
    Hover,
    /// Active.
    Down,
    /// Checked/selected and idle.
    Selected,
}

#[derive(Copy, Clone, Debug)]
/// Look of one widget surface.
pub struct WidgetStyle {
    /// Fill color, or tint when a texture is set.
    pub color: Vec4f,
    /// Texture drawn instead of a flat fill.
    pub texture: Option<Texture>,
    /// How the texture is mapped.
    pub scale: TextureScale,
    /// 9-slice insets as fractions of the texture (left, top, right, bottom).
    pub offset: Vec4f,
    /// Corner radius.
    pub roundness: Real,
}

impl WidgetStyle {
    /// A flat fill.
    pub fn flat(color: Vec4f) -> Self {
        Self {
            color,
            texture: None,
            scale: TextureScale::Image,
            offset: Vec4f::new(0.0, 0.0, 0.0, 0.0),
            roundness: 0.0,
        }
    }

    /// A textured surface tinted white.
    pub fn textured(texture: Texture, scale: TextureScale, offset: Vec4f) -> Self {
        Self {
            color: Vec4f::new(1.0, 1.0, 1.0, 1.0),
            texture: Some(texture),
            scale,
            offset,
            roundness: 0.0,
        }
    }

    /// Returns a copy with rounded corners.
    pub fn rounded(mut self, roundness: Real) -> Self {
        self.roundness = roundness;
        self
    }

    /// Returns `true` when drawing the style produces nothing.
    pub fn is_invisible(&self) -> bool { self.texture.is_none() && self.color.w <= 0.0 }
}

#[derive(Copy, Clone, Debug)]
/// Font, scale and color of a text run.
pub struct FontStyle {
    /// Registered font.
    pub font: FontId,
    /// Glyph scale.
    pub scale: Real,
    /// Text color.
    pub color: Vec4f,
}

impl Default for FontStyle {
    fn default() -> Self {
        Self {
            font: FontId(0),
            scale: 1.0,
            color: color(230, 230, 230, 255),
        }
    }
}

#[derive(Copy, Clone, Debug)]
/// Looks of a clickable surface in each visual state.
pub struct ButtonStyle {
    /// Idle.
    pub up: WidgetStyle,
    /// Hot.
    pub hover: WidgetStyle,
    /// Active.
    pub down: WidgetStyle,
    /// Checked/selected.
    pub selected: WidgetStyle,
    /// Label text.
    pub font: FontStyle,
    /// Size used by auto-placed widgets.
    pub size: Vec2f,
}

impl ButtonStyle {
    /// Style for `state`.
    pub fn state(&self, state: VisualState) -> &WidgetStyle {
        match state {
            VisualState::Up => &self.up,
            VisualState::Hover => &self.hover,
            VisualState::Down => &self.down,
            VisualState::Selected => &self.selected,
        }
    }
}

#[derive(Copy, Clone, Debug)]
/// Looks of check boxes and radio buttons.
pub struct ToggleStyle {
    /// The box.
    pub frame: ButtonStyle,
    /// Mark drawn inside the box when checked.
    pub mark: WidgetStyle,
    /// Side of the square box.
    pub box_size: Real,
}

#[derive(Copy, Clone, Debug)]
/// Looks of sliders.
pub struct SliderStyle {
    /// Groove.
    pub track: WidgetStyle,
    /// Draggable thumb.
    pub thumb: ButtonStyle,
    /// Width of the thumb.
    pub thumb_width: Real,
    /// Size used by auto-placed sliders.
    pub size: Vec2f,
}

#[derive(Copy, Clone, Debug)]
/// Looks of scroll bars.
pub struct ScrollBarStyle {
    /// Groove.
    pub track: WidgetStyle,
    /// Draggable thumb.
    pub thumb: ButtonStyle,
    /// Width of a vertical bar, height of a horizontal one.
    pub thickness: Real,
    /// Smallest thumb length.
    pub min_thumb: Real,
}

#[derive(Copy, Clone, Debug)]
/// Looks of panels.
pub struct PanelStyle {
    /// Body background.
    pub body: WidgetStyle,
    /// Title bar.
    pub header: ButtonStyle,
    /// Height of the title bar.
    pub header_height: Real,
    /// Gap between the body border and the content.
    pub padding: Real,
}

#[derive(Copy, Clone, Debug)]
/// Looks of drop-down lists.
pub struct DropdownStyle {
    /// Closed box showing the selection.
    pub header: ButtonStyle,
    /// Background of the open list.
    pub list: WidgetStyle,
    /// One entry of the open list.
    pub item: ButtonStyle,
}

#[derive(Copy, Clone, Debug)]
/// Looks of text, number and vector inputs.
pub struct TextInputStyle {
    /// Box, `down` is used while editing.
    pub frame: ButtonStyle,
    /// Caret.
    pub cursor: WidgetStyle,
    /// Width of the caret.
    pub cursor_width: Real,
    /// Horizontal gap between the box border and the text.
    pub padding: Real,
}

#[derive(Copy, Clone, Debug)]
/// Looks of menu bars and sub-menus.
pub struct MenuStyle {
    /// Menu bar background.
    pub bar: WidgetStyle,
    /// Menu bar entry.
    pub item: ButtonStyle,
    /// Height of the menu bar.
    pub height: Real,
    /// Sub-menu background.
    pub sub_menu: WidgetStyle,
    /// Sub-menu entry; `selected` marks an open nested sub-menu.
    pub sub_item: ButtonStyle,
    /// Horizontal gap around entry labels.
    pub padding: Real,
}

#[derive(Copy, Clone, Debug)]
/// Every widget style of a context.
pub struct Styles {
    /// Default text.
    pub text: FontStyle,
    /// Buttons.
    pub button: ButtonStyle,
    /// Check boxes.
    pub check_box: ToggleStyle,
    /// Radio buttons.
    pub radio: ToggleStyle,
    /// Sliders.
    pub slider: SliderStyle,
    /// Scroll bars.
    pub scroll_bar: ScrollBarStyle,
    /// Panels.
    pub panel: PanelStyle,
    /// Drop-down lists.
    pub drop_down: DropdownStyle,
    /// Text inputs.
    pub text_input: TextInputStyle,
    /// Number stepper buttons.
    pub stepper: ButtonStyle,
    /// Menus.
    pub menu: MenuStyle,
    /// Gap between auto-placed widgets.
    pub spacing: Real,
}

fn button_style(up: Vec4f, hover: Vec4f, down: Vec4f, size: Vec2f) -> ButtonStyle {
    ButtonStyle {
        up: WidgetStyle::flat(up),
        hover: WidgetStyle::flat(hover),
        down: WidgetStyle::flat(down),
        selected: WidgetStyle::flat(down),
        font: FontStyle::default(),
        size,
    }
}

impl Default for Styles {
    fn default() -> Self {
        let button = color(75, 75, 75, 255);
        let button_hover = color(95, 95, 95, 255);
        let button_down = color(115, 115, 115, 255);
        let base = color(30, 30, 30, 255);
        let base_hover = color(35, 35, 35, 255);
        let base_down = color(40, 40, 40, 255);
        let title = color(25, 25, 25, 255);
        let window = color(50, 50, 50, 255);
        let scroll_base = color(43, 43, 43, 255);
        let text = color(230, 230, 230, 255);

        let toggle = ToggleStyle {
            frame: button_style(base, base_hover, base_down, vec2f(120.0, 20.0)),
            mark: WidgetStyle::flat(text),
            box_size: 16.0,
        };
        let mut header = button_style(title, title, title, vec2f(0.0, 24.0));
        header.font.color = color(240, 240, 240, 255);

        Self {
            text: FontStyle::default(),
            button: button_style(button, button_hover, button_down, vec2f(100.0, 24.0)),
            check_box: toggle,
            radio: ToggleStyle {
                frame: toggle.frame,
                mark: WidgetStyle::flat(text),
                box_size: 16.0,
            },
            slider: SliderStyle {
                track: WidgetStyle::flat(base),
                thumb: button_style(button, button_hover, button_down, vec2f(8.0, 20.0)),
                thumb_width: 8.0,
                size: vec2f(150.0, 20.0),
            },
            scroll_bar: ScrollBarStyle {
                track: WidgetStyle::flat(scroll_base),
                thumb: button_style(base, base_hover, base_down, vec2f(12.0, 12.0)),
                thickness: 12.0,
                min_thumb: 12.0,
            },
            panel: PanelStyle {
                body: WidgetStyle::flat(window),
                header,
                header_height: 24.0,
                padding: 5.0,
            },
            drop_down: DropdownStyle {
                header: button_style(base, base_hover, base_down, vec2f(150.0, 24.0)),
                list: WidgetStyle::flat(title),
                item: button_style(base, button_hover, button_down, vec2f(150.0, 22.0)),
            },
            text_input: TextInputStyle {
                frame: button_style(base, base_hover, base_down, vec2f(150.0, 24.0)),
                cursor: WidgetStyle::flat(text),
                cursor_width: 1.0,
                padding: 4.0,
            },
            stepper: button_style(button, button_hover, button_down, vec2f(24.0, 24.0)),
            menu: MenuStyle {
                bar: WidgetStyle::flat(title),
                item: button_style(title, button_hover, button_down, vec2f(0.0, 22.0)),
                height: 22.0,
                sub_menu: WidgetStyle::flat(window),
                sub_item: button_style(window, button_hover, button_down, vec2f(0.0, 22.0)),
                padding: 8.0,
            },
            spacing: 4.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_states_pick_their_style() {
        let styles = Styles::default();
        let b = &styles.button;
        assert_eq!(b.state(VisualState::Hover).color.x, b.hover.color.x);
        assert!(b.state(VisualState::Down).color.x > b.state(VisualState::Up).color.x);
        assert!(!b.up.is_invisible());
        assert!(WidgetStyle::flat(Vec4f::new(0.0, 0.0, 0.0, 0.0)).is_invisible());
    }
}
