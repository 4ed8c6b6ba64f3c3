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

//! Operation on unhashed runtime storage.

use codec::{Decode, Encode};
use sp_state_machine::with_externalities;

/// Return the value of the item in storage under `key`, or `None` if there is no explicit entry.
pub fn get<T: Decode + Sized>(key: &[u8]) -> Option<T> {
	get_raw(key).and_then(|val| {
		Decode::decode(&mut &val[..]).map(Some).unwrap_or_else(|e| {
			log::error!(
				target: crate::LOG_TARGET,
				"Corrupted state at `{:?}`: {:?}",
				key,
				e,
			);
			None
		})
	})
}

/// Return the value of the item in storage under `key`, or the type's default if there is no
/// explicit entry.
pub fn get_or_default<T: Decode + Sized + Default>(key: &[u8]) -> T {
	get(key).unwrap_or_default()
}

/// Put `value` in storage under `key`.
pub fn put<T: Encode + ?Sized>(key: &[u8], value: &T) {
	value.using_encoded(|slice| put_raw(key, slice));
}

/// Remove `key` from storage, returning its value if it had an explicit entry or `None`
/// otherwise.
pub fn take<T: Decode + Sized>(key: &[u8]) -> Option<T> {
	let r = get(key);
	if r.is_some() {
		kill(key);
	}
	r
}

/// Check to see if `key` has an explicit entry in storage.
pub fn exists(key: &[u8]) -> bool {
	with_externalities(|ext| ext.exists_storage(key))
		.expect("`exists` cannot be called outside of an Externalities-provided environment.")
}

/// Ensure `key` has no explicit entry in storage.
pub fn kill(key: &[u8]) {
	with_externalities(|ext| ext.clear_storage(key))
		.expect("`kill` cannot be called outside of an Externalities-provided environment.")
}

/// Get a Vec of bytes from storage.
pub fn get_raw(key: &[u8]) -> Option<Vec<u8>> {
	with_externalities(|ext| ext.storage(key))
		.expect("`get_raw` cannot be called outside of an Externalities-provided environment.")
}

/// Put a raw byte slice into storage.
pub fn put_raw(key: &[u8], value: &[u8]) {
	with_externalities(|ext| ext.set_storage(key.to_vec(), value.to_vec()))
		.expect("`put_raw` cannot be called outside of an Externalities-provided environment.")
}

/// Returns the next key in storage after `key`, in lexicographic order.
pub fn next_key(key: &[u8]) -> Option<Vec<u8>> {
	with_externalities(|ext| ext.next_storage_key(key))
		.expect("`next_key` cannot be called outside of an Externalities-provided environment.")
}

#[cfg(test)]
mod tests {
	use super::*;
	use sp_state_machine::TestExternalities;

	#[test]
	fn put_get_take_work() {
		TestExternalities::default().execute_with(|| {
			assert_eq!(get::<u32>(b"k"), None);
			assert_eq!(get_or_default::<u32>(b"k"), 0);

			put(b"k", &42u32);
			assert!(exists(b"k"));
			assert_eq!(get::<u32>(b"k"), Some(42));

			assert_eq!(take::<u32>(b"k"), Some(42));
			assert!(!exists(b"k"));
		});
	}

	#[test]
	fn undecodable_value_reads_as_none() {
		TestExternalities::default().execute_with(|| {
			put_raw(b"k", &[1]);
			assert_eq!(get::<u32>(b"k"), None);
			assert_eq!(get_raw(b"k"), Some(vec![1]));
		});
	}

	#[test]
	fn next_key_walks_in_order() {
		TestExternalities::default().execute_with(|| {
			put(b"b", &1u8);
			put(b"a", &1u8);
			assert_eq!(next_key(b""), Some(b"a".to_vec()));
			assert_eq!(next_key(b"a"), Some(b"b".to_vec()));
			assert_eq!(next_key(b"b"), None);
		});
	}

	#[test]
	#[should_panic(expected = "outside of an Externalities-provided environment")]
	fn access_without_externalities_panics() {
		let _ = get_raw(b"k");
	}
}
