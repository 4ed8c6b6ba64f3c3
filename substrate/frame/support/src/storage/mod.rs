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

//! Stuff to do with the runtime's storage.

pub use self::{
	storage_noop_guard::StorageNoopGuard,
	transactional::{
		require_transaction, with_storage_layer, with_transaction, TransactionOutcome,
		TRANSACTIONAL_LIMIT,
	},
};
use sp_state_machine::with_externalities;

mod storage_noop_guard;
pub mod transactional;
pub mod types;
pub mod unhashed;

/// Hash of the whole storage, as seen by the current transaction.
///
/// Two calls return the same root if and only if the effective content of the storage is the
/// same.
pub fn storage_root() -> [u8; 32] {
	with_externalities(|ext| ext.storage_root())
		.expect("`storage_root` cannot be called outside of an Externalities-provided environment.")
}
