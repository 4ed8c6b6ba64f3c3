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

//! Houses the code that implements the transactional overlay storage.

use crate::{StorageKey, StorageValue};
use std::{
	collections::{BTreeMap, BTreeSet},
	ops::Bound,
};

/// The set of keys written in each open transaction, innermost last.
type DirtyKeysSets = Vec<BTreeSet<StorageKey>>;

/// Error returned when trying to commit or rollback while no transaction is open.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(test, derive(PartialEq))]
pub struct NoOpenTransaction;

/// An overlay that contains all versions of a value for a specific key.
///
/// The first entry is the value outside of any transaction. Every open transaction that wrote
/// the key adds one entry on top.
#[derive(Debug, Default, Clone)]
struct OverlayedEntry {
	transactions: Vec<Option<StorageValue>>,
}

impl OverlayedEntry {
	/// The value as seen by the current transaction. `None` means "deleted".
	fn value(&self) -> Option<&StorageValue> {
		self.transactions
			.last()
			.expect("An entry is never stored without at least one version; qed")
			.as_ref()
	}

	fn value_mut(&mut self) -> &mut Option<StorageValue> {
		self.transactions
			.last_mut()
			.expect("An entry is never stored without at least one version; qed")
	}

	fn pop_transaction(&mut self) -> Option<StorageValue> {
		self.transactions
			.pop()
			.expect("An entry is never stored without at least one version; qed")
	}

	fn set(&mut self, value: Option<StorageValue>, first_write_in_tx: bool) {
		if first_write_in_tx || self.transactions.is_empty() {
			self.transactions.push(value);
		} else {
			*self.value_mut() = value;
		}
	}
}

/// Holds all the storage changes that were not yet written to the backend.
#[derive(Debug, Default, Clone)]
pub struct OverlayedChangeSet {
	changes: BTreeMap<StorageKey, OverlayedEntry>,
	dirty_keys: DirtyKeysSets,
}

impl OverlayedChangeSet {
	/// true if no changes are buffered.
	pub fn is_empty(&self) -> bool {
		self.changes.is_empty()
	}

	/// Get the value for `key`.
	///
	/// The outer option is `None` when the overlay does not know the key, the inner one is `None`
	/// when the key was deleted.
	pub fn get(&self, key: &[u8]) -> Option<Option<&StorageValue>> {
		self.changes.get(key).map(OverlayedEntry::value)
	}

	/// Set a new value for the specified key. `None` deletes the key.
	pub fn set(&mut self, key: StorageKey, value: Option<StorageValue>) {
		let first_write_in_tx = insert_dirty(&mut self.dirty_keys, key.clone());
		self.changes.entry(key).or_default().set(value, first_write_in_tx);
	}

	/// The first key known to the overlay that is strictly greater than `key`.
	pub fn next_key(&self, key: &[u8]) -> Option<&StorageKey> {
		self.changes
			.range::<[u8], _>((Bound::Excluded(key), Bound::Unbounded))
			.next()
			.map(|(k, _)| k)
	}

	/// Iterate over all changes visible to the current transaction, in key order.
	pub fn changes(&self) -> impl Iterator<Item = (&StorageKey, Option<&StorageValue>)> {
		self.changes.iter().map(|(k, v)| (k, v.value()))
	}

	/// Returns the current nesting depth of the transaction stack.
	pub fn transaction_depth(&self) -> usize {
		self.dirty_keys.len()
	}

	/// Start a new nested transaction.
	///
	/// All writes are recorded against the innermost transaction until it is committed or
	/// rolled back.
	pub fn start_transaction(&mut self) {
		self.dirty_keys.push(Default::default());
	}

	/// Rollback the last transaction started by `start_transaction`.
	///
	/// Any changes made during that transaction are discarded. Returns an error if
	/// there is no open transaction that can be rolled back.
	pub fn rollback_transaction(&mut self) -> Result<(), NoOpenTransaction> {
		self.close_transaction(true)
	}

	/// Commit the last transaction started by `start_transaction`.
	///
	/// Any changes made during that transaction are merged into the parent transaction, or
	/// become committed changes if there is no parent. Returns an error if there is no open
	/// transaction that can be committed.
	pub fn commit_transaction(&mut self) -> Result<(), NoOpenTransaction> {
		self.close_transaction(false)
	}

	fn close_transaction(&mut self, rollback: bool) -> Result<(), NoOpenTransaction> {
		for key in self.dirty_keys.pop().ok_or(NoOpenTransaction)? {
			let overlayed = self.changes.get_mut(&key).expect(
				"A write is recorded in the dirty key set of the transaction it happened in. \
				 This function only visits keys of the closed transaction's dirty set; qed",
			);

			if rollback {
				overlayed.pop_transaction();

				if overlayed.transactions.is_empty() {
					self.changes.remove(&key);
				}
			} else {
				let has_predecessor = if let Some(dirty_keys) = self.dirty_keys.last_mut() {
					// Not the last tx: did the previous tx write to this key?
					!dirty_keys.insert(key)
				} else {
					// Last tx: is there already a value in the committed set?
					overlayed.transactions.len() > 1
				};

				if has_predecessor {
					let dropped_tx = overlayed.pop_transaction();
					*overlayed.value_mut() = dropped_tx;
				}
			}
		}

		Ok(())
	}

	/// Consume all committed changes.
	///
	/// Panics if a transaction is still open.
	pub fn drain_committed(&mut self) -> impl Iterator<Item = (StorageKey, Option<StorageValue>)> {
		assert!(self.transaction_depth() == 0, "Drain is not allowed with open transactions.");

		std::mem::take(&mut self.changes)
			.into_iter()
			.map(|(k, mut v)| (k, v.pop_transaction()))
	}
}

/// Inserts a key into the dirty set.
///
/// Returns true iff there is at least one open transaction and this is the first write to the
/// given key in that transaction.
fn insert_dirty(set: &mut DirtyKeysSets, key: StorageKey) -> bool {
	set.last_mut().map(|dk| dk.insert(key)).unwrap_or_default()
}
