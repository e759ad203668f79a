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
//! Widget identifiers.
//!
//! Ids are CRC32 hashes of a label, a pointer or raw bytes, optionally seeded by the enclosing scope on the
//! [`IdStack`]. The value `0` is reserved for "no widget" and is never produced by hashing.

/// Value substituted when a hash naturally comes out as `0`.
pub const ZERO_HASH_SUBSTITUTE: u32 = 0x9E37_79B9;

#[derive(Default, Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
/// Opaque 32-bit widget identifier.
pub struct Id(u32);

impl Id {
    /// The "no widget" id.
    pub const NONE: Id = Id(0);

    /// Wraps a caller-supplied value. `Id::new(0)` is [`Id::NONE`].
    pub fn new(raw: u32) -> Self { Self(raw) }

    /// Hashes a string label with no seed.
    pub fn from_str(label: &str) -> Self { Self(hash_string(label, 0)) }

    /// Hashes the address of a stable object.
    pub fn from_ptr<T: ?Sized>(value: &T) -> Self { Self(hash_pointer(value as *const T, 0)) }

    /// Derives the id of the `index`th repetition of a widget from a base id.
    pub fn from_index(base: Id, index: u32) -> Self { Self(hash_data(&index.to_le_bytes(), base.0)) }

    /// Returns the raw numeric value.
    pub fn raw(self) -> u32 { self.0 }

    /// Returns `true` for [`Id::NONE`].
    pub fn is_none(self) -> bool { self.0 == 0 }
}

fn non_zero(hash: u32) -> u32 { if hash == 0 { ZERO_HASH_SUBSTITUTE } else { hash } }

/// CRC32 of `data` continued from `seed`. Never returns `0`.
pub fn hash_data(data: &[u8], seed: u32) -> u32 {
    let mut hasher = crc32fast::Hasher::new_with_initial(seed);
    hasher.update(data);
    non_zero(hasher.finalize())
}

/// CRC32 of the UTF-8 bytes of `s` continued from `seed`. Never returns `0`.
pub fn hash_string(s: &str, seed: u32) -> u32 { hash_data(s.as_bytes(), seed) }

/// CRC32 of a pointer's address continued from `seed`. Never returns `0`, the null pointer included.
pub fn hash_pointer<T: ?Sized>(ptr: *const T, seed: u32) -> u32 {
    let addr = ptr as *const () as usize;
    hash_data(&addr.to_le_bytes(), seed)
}

/// Scope stack used to make ids of repeated widgets distinct.
///
/// Ids computed while a scope is pushed are seeded by the scope's id, so two buttons labelled "Delete" in two
/// different list rows hash differently.
#[derive(Default, Debug)]
pub struct IdStack {
    stack: Vec<Id>,
    last_id: Option<Id>,
}

impl IdStack {
    /// Creates an empty stack.
    pub fn new() -> Self { Self::default() }

    /// Number of pushed scopes.
    pub fn len(&self) -> usize { self.stack.len() }

    /// Returns `true` when no scope is pushed.
    pub fn is_empty(&self) -> bool { self.stack.is_empty() }

    /// The id most recently produced by this stack.
    pub fn last_id(&self) -> Option<Id> { self.last_id }

    fn seed(&self) -> u32 { self.stack.last().map(|id| id.0).unwrap_or(0) }

    /// Id of a label in the current scope.
    pub fn get_id_from_str(&mut self, label: &str) -> Id {
        let id = Id(hash_string(label, self.seed()));
        self.last_id = Some(id);
        id
    }

    /// Id of an object address in the current scope.
    pub fn get_id_from_ptr<T: ?Sized>(&mut self, value: &T) -> Id {
        let id = Id(hash_pointer(value as *const T, self.seed()));
        self.last_id = Some(id);
        id
    }

    /// Id of an integer in the current scope.
    pub fn get_id_u32(&mut self, value: u32) -> Id {
        let id = Id(hash_data(&value.to_le_bytes(), self.seed()));
        self.last_id = Some(id);
        id
    }

    /// Pushes an already computed id as the new scope.
    pub fn push_id(&mut self, id: Id) { self.stack.push(id) }

    /// Pushes the id of `label` as the new scope.
    pub fn push_id_from_str(&mut self, label: &str) {
        let id = self.get_id_from_str(label);
        self.stack.push(id);
    }

    /// Pushes the id of an object address as the new scope.
    pub fn push_id_from_ptr<T: ?Sized>(&mut self, value: &T) {
        let id = self.get_id_from_ptr(value);
        self.stack.push(id);
    }

    /// Pushes the id of an integer as the new scope.
    pub fn push_id_u32(&mut self, value: u32) {
        let id = self.get_id_u32(value);
        self.stack.push(id);
    }

    /// Pops the innermost scope.
    pub fn pop_id(&mut self) {
        assert!(self.stack.pop().is_some(), "pop_id called on an empty id stack");
    }
}
