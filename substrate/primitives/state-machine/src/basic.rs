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

//! Basic implementation for Externalities.

use crate::{
	overlayed_changes::OverlayedChanges, set_and_run_with_externalities, storage_root, Backend,
	Externalities, InMemoryBackend, NoOpenTransaction, StorageKey, StorageValue, LOG_TARGET,
};
use std::collections::BTreeMap;

/// Simple externalities over a [`Backend`].
///
/// Writes made outside of a transaction go straight to the backend. Writes made inside a
/// transaction are buffered in the overlay and only reach the backend once the outermost
/// transaction commits.
#[derive(Debug, Default, Clone)]
pub struct BasicExternalities<B: Backend = InMemoryBackend> {
	backend: B,
	overlay: OverlayedChanges,
}

impl<B: Backend> BasicExternalities<B> {
	/// Create a new instance of `BasicExternalities` on top of the given backend.
	pub fn new(backend: B) -> Self {
		Self { backend, overlay: Default::default() }
	}

	/// Access the committed state.
	pub fn backend(&self) -> &B {
		&self.backend
	}

	/// Consume self and return the committed state.
	///
	/// Panics if a transaction is still open.
	pub fn into_backend(mut self) -> B {
		self.flush();
		self.backend
	}

	/// Return all effective key/value pairs in key order.
	pub fn pairs(&self) -> Vec<(StorageKey, StorageValue)> {
		self.merged().into_iter().collect()
	}

	/// Write all committed overlay changes into the backend.
	fn flush(&mut self) {
		for (key, value) in self.overlay.drain_committed() {
			self.backend.place(key, value);
		}
	}

	fn merged(&self) -> BTreeMap<StorageKey, StorageValue> {
		let mut merged: BTreeMap<_, _> = self.backend.pairs().into_iter().collect();
		for (key, value) in self.overlay.changes() {
			match value {
				Some(value) => merged.insert(key.clone(), value.clone()),
				None => merged.remove(key),
			};
		}
		merged
	}
}

impl<B: Backend + 'static> BasicExternalities<B> {
	/// Execute the given closure `f` with the externalities set and initialized with `self`.
	///
	/// Returns the result of the given closure.
	pub fn execute_with<R>(&mut self, f: impl FnOnce() -> R) -> R {
		let r = set_and_run_with_externalities(&mut *self, f);
		if self.overlay.transaction_depth() == 0 {
			self.flush();
		} else {
			log::warn!(
				target: LOG_TARGET,
				"execution finished with {} open transactions, changes are kept in the overlay",
				self.overlay.transaction_depth(),
			);
		}
		r
	}
}

impl<B: Backend> Externalities for BasicExternalities<B> {
	fn storage(&self, key: &[u8]) -> Option<StorageValue> {
		match self.overlay.storage(key) {
			Some(value) => value.map(<[u8]>::to_vec),
			None => self.backend.get(key),
		}
	}

	fn next_storage_key(&self, key: &[u8]) -> Option<StorageKey> {
		let mut cursor = key.to_vec();
		loop {
			let next_backend = self.backend.next_key(&cursor);
			let next_overlay = self.overlay.next_storage_key_change(&cursor).cloned();
			let candidate = match (next_backend, next_overlay) {
				(Some(b), Some(o)) => b.min(o),
				(Some(b), None) => b,
				(None, Some(o)) => o,
				(None, None) => return None,
			};

			// Keys deleted in the overlay are skipped.
			if self.storage(&candidate).is_some() {
				return Some(candidate)
			}
			cursor = candidate;
		}
	}

	fn place_storage(&mut self, key: StorageKey, value: Option<StorageValue>) {
		if self.overlay.transaction_depth() == 0 && self.overlay.is_empty() {
			self.backend.place(key, value);
		} else {
			self.overlay.set_storage(key, value);
		}
	}

	fn storage_root(&self) -> [u8; 32] {
		storage_root(self.merged().iter())
	}

	fn storage_start_transaction(&mut self) {
		log::trace!(target: LOG_TARGET, "start transaction at depth {}", self.transaction_depth());
		self.overlay.start_transaction()
	}

	fn storage_rollback_transaction(&mut self) -> Result<(), NoOpenTransaction> {
		log::trace!(target: LOG_TARGET, "rollback transaction at depth {}", self.transaction_depth());
		self.overlay.rollback_transaction()?;
		if self.overlay.transaction_depth() == 0 {
			self.flush();
		}
		Ok(())
	}

	fn storage_commit_transaction(&mut self) -> Result<(), NoOpenTransaction> {
		log::trace!(target: LOG_TARGET, "commit transaction at depth {}", self.transaction_depth());
		self.overlay.commit_transaction()?;
		if self.overlay.transaction_depth() == 0 {
			self.flush();
		}
		Ok(())
	}

	fn transaction_depth(&self) -> usize {
		self.overlay.transaction_depth()
	}
}

impl From<BTreeMap<StorageKey, StorageValue>> for BasicExternalities<InMemoryBackend> {
	fn from(inner: BTreeMap<StorageKey, StorageValue>) -> Self {
		Self::new(inner.into())
	}
}
