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

//! Contains the [`crate::StorageNoopGuard`] for conveniently asserting
//! that no storage mutation has been made by a whole code block.

/// Asserts that no storage changes took place between con- and destruction of [`Self`].
///
/// This is easier than wrapping the whole code-block inside a `assert_storage_noop!`.
///
/// # Example
///
/// ```should_panic
/// use tiny_frame_support::{StorageNoopGuard, storage::unhashed::put};
///
/// sp_state_machine::TestExternalities::default().execute_with(|| {
/// 	let _guard = tiny_frame_support::StorageNoopGuard::default();
/// 	put(b"key", b"value");
/// 	// Panics since there are storage changes.
/// });
/// ```
#[must_use]
pub struct StorageNoopGuard<'a> {
	storage_root: [u8; 32],
	error_message: &'a str,
}

impl<'a> Default for StorageNoopGuard<'a> {
	fn default() -> Self {
		Self {
			storage_root: super::storage_root(),
			error_message: "`StorageNoopGuard` detected an attempted storage change.",
		}
	}
}

impl<'a> StorageNoopGuard<'a> {
	/// Alias to `default()`.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a new [`StorageNoopGuard`] with a custom error message.
	pub fn from_error_message(error_message: &'a str) -> Self {
		Self { storage_root: super::storage_root(), error_message }
	}

	/// Sets a custom error message for a [`StorageNoopGuard`].
	pub fn set_error_message(&mut self, error_message: &'a str) {
		self.error_message = error_message;
	}
}

impl<'a> Drop for StorageNoopGuard<'a> {
	fn drop(&mut self) {
		// No need to double panic, eg. inside a test assertion failure.
		if std::thread::panicking() {
			return
		}
		assert_eq!(super::storage_root(), self.storage_root, "{}", self.error_message);
	}
}
