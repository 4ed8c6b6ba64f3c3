// This file is part of Substrate.

// Copyright (C) Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: Apache-2.0

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// 	http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! State machine of the tiny runtime.
//!
//! The runtime never talks to a storage engine directly. It reads and writes through the
//! [`Externalities`] that are installed for the current thread with
//! [`set_and_run_with_externalities`]. [`BasicExternalities`] layers an
//! [`OverlayedChanges`](overlayed_changes::OverlayedChanges) on top of any [`Backend`] so that
//! writes can be grouped into nested transactions and committed or discarded as a unit.

#![warn(missing_docs)]

pub mod backend;
mod basic;
mod ext;
mod in_memory_backend;
pub mod overlayed_changes;

pub use backend::Backend;
pub use basic::BasicExternalities;
pub use ext::{set_and_run_with_externalities, with_externalities, Externalities};
pub use in_memory_backend::InMemoryBackend;
pub use overlayed_changes::NoOpenTransaction;

/// Log target of this crate.
const LOG_TARGET: &str = "state-machine";

/// Raw storage key.
pub type StorageKey = Vec<u8>;

/// Raw storage value.
pub type StorageValue = Vec<u8>;

/// Externalities over an in-memory backend, used by tests and the genesis builder.
pub type TestExternalities = BasicExternalities<InMemoryBackend>;

/// Compute the root of the given, sorted, key/value pairs.
///
/// The root is the `blake2_256` hash of the SCALE encoding of the pairs. It changes if and only
/// if the effective content of the storage changes.
pub fn storage_root<'a>(pairs: impl Iterator<Item = (&'a StorageKey, &'a StorageValue)>) -> [u8; 32] {
	use codec::Encode;

	let pairs = pairs.collect::<Vec<_>>();
	sp_crypto_hashing::blake2_256(&pairs.encode())
}
