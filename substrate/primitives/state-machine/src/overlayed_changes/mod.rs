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

//! The overlayed changes to state.

mod changeset;

pub use self::changeset::{NoOpenTransaction, OverlayedChangeSet};

use crate::{StorageKey, StorageValue};

/// The set of changes that are overlaid onto the backend.
///
/// It allows changes to be modified using nestable transactions.
#[derive(Debug, Default, Clone)]
pub struct OverlayedChanges {
	top: OverlayedChangeSet,
}

impl OverlayedChanges {
	/// Whether no changes are contained in the top nor in any of the child changes.
	pub fn is_empty(&self) -> bool {
		self.top.is_empty()
	}

	/// Returns a double-Option: None if the key is unknown (i.e. and the query should be referred
	/// to the backend); Some(None) if the key has been deleted. Some(Some(...)) for a key whose
	/// value has been set.
	pub fn storage(&self, key: &[u8]) -> Option<Option<&[u8]>> {
		self.top.get(key).map(|v| v.map(|v| v.as_slice()))
	}

	/// Set a new value for the specified key.
	///
	/// Can be rolled back or committed when called inside a transaction.
	pub fn set_storage(&mut self, key: StorageKey, val: Option<StorageValue>) {
		self.top.set(key, val);
	}

	/// Returns the next key of the overlay that is strictly greater than `key`.
	///
	/// Deleted keys are returned as well. Callers resolve them against the backend.
	pub fn next_storage_key_change(&self, key: &[u8]) -> Option<&StorageKey> {
		self.top.next_key(key)
	}

	/// Iterate over the changes visible to the current transaction.
	pub fn changes(&self) -> impl Iterator<Item = (&StorageKey, Option<&StorageValue>)> {
		self.top.changes()
	}

	/// Returns the current nesting depth of the transaction stack.
	///
	/// A value of zero means that no transaction is open and changes are committed on write.
	pub fn transaction_depth(&self) -> usize {
		self.top.transaction_depth()
	}

	/// Start a new nested transaction.
	///
	/// This allows to either commit or roll back all changes that are made after this call.
	/// For every transaction there can be a matching call to either `rollback_transaction`
	/// or `commit_transaction`. This is also effective for all values changed inside the
	/// transaction.
	pub fn start_transaction(&mut self) {
		self.top.start_transaction();
	}

	/// Rollback the last transaction started by `start_transaction`.
	///
	/// Any changes made during that transaction are discarded. Returns an error if
	/// there is no open transaction that can be rolled back.
	pub fn rollback_transaction(&mut self) -> Result<(), NoOpenTransaction> {
		self.top.rollback_transaction()
	}

	/// Commit the last transaction started by `start_transaction`.
	///
	/// Any changes made during that transaction are committed. Returns an error if
	/// there is no open transaction that can be committed.
	pub fn commit_transaction(&mut self) -> Result<(), NoOpenTransaction> {
		self.top.commit_transaction()
	}

	/// Drain all committed changes. Panics if a transaction is open.
	pub fn drain_committed(
		&mut self,
	) -> impl Iterator<Item = (StorageKey, Option<StorageValue>)> {
		self.top.drain_committed()
	}
}
