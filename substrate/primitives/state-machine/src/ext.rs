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

//! The externalities the runtime executes against.
//!
//! The runtime code reaches its state through [`with_externalities`]. The caller decides which
//! state that is by installing an implementation with [`set_and_run_with_externalities`] for the
//! duration of a closure. Installation is scoped to the current thread, so two runtime instances
//! living on different threads never observe each other.

use crate::{NoOpenTransaction, StorageKey, StorageValue};

/// The Substrate externalities.
///
/// Provides access to the storage and the transaction stack of one runtime instance.
pub trait Externalities {
	/// Read runtime storage.
	fn storage(&self, key: &[u8]) -> Option<StorageValue>;

	/// Returns the key that follows `key` in lexicographic order, if any.
	fn next_storage_key(&self, key: &[u8]) -> Option<StorageKey>;

	/// Set or clear a storage entry (`key`) of current contract being called (effective
	/// immediately).
	fn place_storage(&mut self, key: StorageKey, value: Option<StorageValue>);

	/// Hash of the effective storage content.
	///
	/// Two calls return the same root if and only if no effective change happened in between.
	fn storage_root(&self) -> [u8; 32];

	/// Start a new nested transaction.
	fn storage_start_transaction(&mut self);

	/// Rollback the last transaction started by `storage_start_transaction`.
	fn storage_rollback_transaction(&mut self) -> Result<(), NoOpenTransaction>;

	/// Commit the last transaction started by `storage_start_transaction`.
	fn storage_commit_transaction(&mut self) -> Result<(), NoOpenTransaction>;

	/// Number of currently open transactions.
	fn transaction_depth(&self) -> usize;

	/// Whether a storage entry exists.
	fn exists_storage(&self, key: &[u8]) -> bool {
		self.storage(key).is_some()
	}

	/// Set storage entry `key` of current contract being called (effective immediately).
	fn set_storage(&mut self, key: StorageKey, value: StorageValue) {
		self.place_storage(key, Some(value));
	}

	/// Clear a storage entry (`key`) of current contract being called (effective immediately).
	fn clear_storage(&mut self, key: &[u8]) {
		self.place_storage(key.to_vec(), None)
	}
}

environmental::environmental!(ext: dyn Externalities + 'static);

/// Set the given externalities while executing the given closure. To get access to the
/// externalities while executing the given closure [`with_externalities`] grants access to them.
/// The externalities are only set for the same thread this function was called from.
pub fn set_and_run_with_externalities<F, R>(ext: &mut (dyn Externalities + 'static), f: F) -> R
where
	F: FnOnce() -> R,
{
	ext::using(ext, f)
}

/// Execute the given closure with the currently set externalities.
///
/// Returns `None` if no externalities are set or `Some(_)` with the result of the closure.
pub fn with_externalities<F: FnOnce(&mut (dyn Externalities + 'static)) -> R, R>(f: F) -> Option<R> {
	ext::with(f)
}
