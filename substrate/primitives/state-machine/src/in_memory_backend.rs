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

//! State machine in memory backend.

use crate::{Backend, StorageKey, StorageValue};
use std::{collections::BTreeMap, ops::Bound};

/// Backend that keeps all state in a sorted map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryBackend {
	inner: BTreeMap<StorageKey, StorageValue>,
}

impl InMemoryBackend {
	/// Create a new empty backend.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of keys stored.
	pub fn len(&self) -> usize {
		self.inner.len()
	}

	/// true if nothing is stored.
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	/// Consume the backend and return the raw map.
	pub fn into_inner(self) -> BTreeMap<StorageKey, StorageValue> {
		self.inner
	}
}

impl From<BTreeMap<StorageKey, StorageValue>> for InMemoryBackend {
	fn from(inner: BTreeMap<StorageKey, StorageValue>) -> Self {
		Self { inner }
	}
}

impl FromIterator<(StorageKey, StorageValue)> for InMemoryBackend {
	fn from_iter<I: IntoIterator<Item = (StorageKey, StorageValue)>>(iter: I) -> Self {
		Self { inner: iter.into_iter().collect() }
	}
}

impl Backend for InMemoryBackend {
	fn get(&self, key: &[u8]) -> Option<StorageValue> {
		self.inner.get(key).cloned()
	}

	fn put(&mut self, key: StorageKey, value: StorageValue) {
		self.inner.insert(key, value);
	}

	fn remove(&mut self, key: &[u8]) {
		self.inner.remove(key);
	}

	fn next_key(&self, key: &[u8]) -> Option<StorageKey> {
		self.inner
			.range::<[u8], _>((Bound::Excluded(key), Bound::Unbounded))
			.next()
			.map(|(k, _)| k.clone())
	}

	fn pairs(&self) -> Vec<(StorageKey, StorageValue)> {
		self.inner.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
	}
}
