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

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
/// State of the primary mouse button.
pub enum ButtonState {
    /// Released.
    #[default]
    Up,
    /// Held down.
    Down,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Transition reported for a keyboard key.
pub enum KeyState {
    /// The key went down.
    Pressed,
    /// The key went up.
    Released,
    /// The key is held and auto-repeating.
    Repeat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Editing keys understood by text inputs. Printable characters arrive through `record_text_input`.
pub enum Key {
    /// Deletes the character before the cursor.
    Backspace,
    /// Commits the text input.
    Enter,
    /// Deletes the character after the cursor.
    Delete,
    /// Moves the cursor one character left.
    Left,
    /// Moves the cursor one character right.
    Right,
    /// Moves the cursor to the start of the text.
    Home,
    /// Moves the cursor to the end of the text.
    End,
}

#[derive(Copy, Clone, Debug, Default)]
/// Mouse state seen by widgets during a frame.
pub struct MouseSnapshot {
    /// Pointer position in screen coordinates.
    pub pos: Vec2f,
    /// Movement since the previous recorded position.
    pub delta: Vec2f,
    /// Current button state.
    pub button: ButtonState,
    /// Button state latched at the end of the previous frame.
    pub last_button: ButtonState,
}

impl MouseSnapshot {
    /// Button went Up -> Down since the previous frame.
    pub fn pressed(&self) -> bool { self.button == ButtonState::Down && self.last_button == ButtonState::Up }

    /// Button went Down -> Up since the previous frame.
    pub fn released(&self) -> bool { self.button == ButtonState::Up && self.last_button == ButtonState::Down }

    /// Button is currently held.
    pub fn is_down(&self) -> bool { self.button == ButtonState::Down }
}

#[derive(Clone, Debug, Default)]
/// Raw input collected between two frames.
pub struct Input {
    mouse: MouseSnapshot,
    scroll: Real,
}

impl Input {
    /// Current mouse snapshot.
    pub fn mouse(&self) -> &MouseSnapshot { &self.mouse }

    /// Overwrites the mouse snapshot. The delta is measured from the previously recorded position.
    pub fn update_mouse(&mut self, x: Real, y: Real, button: ButtonState) {
        let pos = vec2f(x, y);
        self.mouse.delta = vec2f(self.mouse.delta.x + pos.x - self.mouse.pos.x, self.mouse.delta.y + pos.y - self.mouse.pos.y);
        self.mouse.pos = pos;
        self.mouse.button = button;
    }

    /// Accumulates vertical wheel movement.
    pub fn scroll(&mut self, y: Real) { self.scroll += y; }

    /// Accumulated wheel movement not yet consumed.
    pub fn pending_scroll(&self) -> Real { self.scroll }

    /// Returns the accumulated wheel movement and resets it, so only the first caller in a frame sees it.
    pub fn take_scroll(&mut self) -> Real { std::mem::take(&mut self.scroll) }

    pub(crate) fn epilogue(&mut self) {
        self.mouse.last_button = self.mouse.button;
        self.mouse.delta = Vec2f::default();
        self.scroll = 0.0;
    }
}
