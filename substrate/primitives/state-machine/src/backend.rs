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

//! State machine backends. These manage the code and storage of contracts.

use crate::{StorageKey, StorageValue};

/// A state backend is used to read and write the committed state.
///
/// The backend knows nothing about transactions. All writes that reach it have already been
/// committed by the overlay.
pub trait Backend {
	/// Get keyed storage or None if there is nothing associated.
	fn get(&self, key: &[u8]) -> Option<StorageValue>;

	/// Store `value` under `key`, replacing any previous value.
	fn put(&mut self, key: StorageKey, value: StorageValue);

	/// Remove the value stored under `key`, if any.
	fn remove(&mut self, key: &[u8]);

	/// Return the next key in storage in lexicographic order or `None` if there is no value.
	fn next_key(&self, key: &[u8]) -> Option<StorageKey>;

	/// Return all key/value pairs in lexicographic order.
	fn pairs(&self) -> Vec<(StorageKey, StorageValue)>;

	/// true if a key exists in storage.
	fn exists(&self, key: &[u8]) -> bool {
		self.get(key).is_some()
	}

	/// Store `value` under `key` or remove the key if `value` is `None`.
	fn place(&mut self, key: StorageKey, value: Option<StorageValue>) {
		match value {
			Some(value) => self.put(key, value),
			None => self.remove(&key),
		}
	}
}
