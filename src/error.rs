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
use thiserror::Error;

#[derive(Debug, Error)]
/// Failures a [`crate::Renderer`] backend reports while starting up.
pub enum RendererError {
    /// The platform window could not be created.
    #[error("failed to create window: {0}")]
    Window(String),
    /// The graphics context or device could not be created.
    #[error("failed to create graphics context: {0}")]
    Context(String),
    /// Shader compilation or pipeline setup failed.
    #[error("failed to build render pipeline: {0}")]
    Pipeline(String),
}

#[derive(Debug, Error)]
/// Errors returned by the [`crate::Ui`] facade.
pub enum UiError {
    /// The renderer failed to initialize.
    #[error("renderer initialization failed: {0}")]
    Renderer(#[from] RendererError),
    /// Pixel data does not match the declared texture size.
    #[error("invalid texture data: expected {expected} bytes for {width}x{height}x{channels}, got {actual}")]
    InvalidTexture {
        /// Declared width.
        width: u32,
        /// Declared height.
        height: u32,
        /// Declared channel count.
        channels: u32,
        /// Byte count implied by the declared size.
        expected: usize,
        /// Byte count received.
        actual: usize,
    },
}
