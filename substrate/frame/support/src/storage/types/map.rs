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

//! Storage map type.

use super::{OptionQuery, QueryKindTrait};
use crate::{
	hash::{ReversibleStorageHasher, StorageHasher},
	storage::unhashed,
	traits::StorageInstance,
};
use codec::{EncodeLike, FullCodec};
use core::marker::PhantomData;

/// A type representing a *map* in storage. A *storage map* is a mapping of keys to values of a
/// given type stored on-chain.
///
/// The final key of an entry is `twox_128(pallet_prefix) ++ twox_128(storage_prefix) ++
/// Hasher(encode(key))`.
///
/// # Example
///
/// ```
/// use tiny_frame_support::{
/// 	storage_prefix, Blake2_128Concat, storage::types::{StorageMap, ValueQuery},
/// };
///
/// storage_prefix! {
///     pub struct ScoresPrefix => ("Example", "Scores");
/// }
///
/// type Scores = StorageMap<ScoresPrefix, Blake2_128Concat, u64, u32, ValueQuery>;
///
/// sp_state_machine::TestExternalities::default().execute_with(|| {
///     Scores::insert(1, 10);
///     Scores::mutate(2, |score| *score += 5);
///     assert_eq!(Scores::get(2), 5);
///     assert_eq!(Scores::iter().count(), 2);
/// });
/// ```
pub struct StorageMap<Prefix, Hasher, Key, Value, QueryKind = OptionQuery>(
	PhantomData<(Prefix, Hasher, Key, Value, QueryKind)>,
);

impl<Prefix, Hasher, Key, Value, QueryKind> StorageMap<Prefix, Hasher, Key, Value, QueryKind>
where
	Prefix: StorageInstance,
	Hasher: StorageHasher,
	Key: FullCodec,
	Value: FullCodec,
	QueryKind: QueryKindTrait<Value>,
{
	/// The prefix shared by every entry of the map.
	pub fn final_prefix() -> [u8; 32] {
		Prefix::prefix_hash()
	}

	/// Get the storage key used to fetch a value corresponding to a specific key.
	pub fn hashed_key_for<KeyArg: EncodeLike<Key>>(key: KeyArg) -> Vec<u8> {
		let key_hashed = key.using_encoded(Hasher::hash);
		let mut final_key = Vec::with_capacity(32 + key_hashed.as_ref().len());

		final_key.extend_from_slice(&Self::final_prefix());
		final_key.extend_from_slice(key_hashed.as_ref());

		final_key
	}

	/// Does the value (explicitly) exist in storage?
	pub fn contains_key<KeyArg: EncodeLike<Key>>(key: KeyArg) -> bool {
		unhashed::exists(&Self::hashed_key_for(key))
	}

	/// Load the value associated with the given key from the map.
	pub fn get<KeyArg: EncodeLike<Key>>(key: KeyArg) -> QueryKind::Query {
		QueryKind::from_optional_value_to_query(unhashed::get(&Self::hashed_key_for(key)))
	}

	/// Try to get the value for the given key from the map.
	///
	/// Returns `Ok` if it exists, `Err` if not.
	pub fn try_get<KeyArg: EncodeLike<Key>>(key: KeyArg) -> Result<Value, ()> {
		unhashed::get(&Self::hashed_key_for(key)).ok_or(())
	}

	/// Store a value to be associated with the given key from the map.
	pub fn insert<KeyArg: EncodeLike<Key>, ValArg: EncodeLike<Value>>(key: KeyArg, val: ValArg) {
		unhashed::put(&Self::hashed_key_for(key), &val)
	}

	/// Store or remove the value to be associated with `key` so that `get` returns the `query`.
	pub fn set<KeyArg: EncodeLike<Key>>(key: KeyArg, query: QueryKind::Query) {
		let final_key = Self::hashed_key_for(key);
		match QueryKind::from_query_to_optional_value(query) {
			Some(val) => unhashed::put(&final_key, &val),
			None => unhashed::kill(&final_key),
		}
	}

	/// Remove the value under a key.
	pub fn remove<KeyArg: EncodeLike<Key>>(key: KeyArg) {
		unhashed::kill(&Self::hashed_key_for(key))
	}

	/// Mutate the value under a key.
	pub fn mutate<KeyArg: EncodeLike<Key>, R, F: FnOnce(&mut QueryKind::Query) -> R>(
		key: KeyArg,
		f: F,
	) -> R {
		match Self::try_mutate(key, |v| Ok::<R, core::convert::Infallible>(f(v))) {
			Ok(r) => r,
			Err(never) => match never {},
		}
	}

	/// Mutate the item, only if an `Ok` value is returned.
	pub fn try_mutate<KeyArg, R, E, F>(key: KeyArg, f: F) -> Result<R, E>
	where
		KeyArg: EncodeLike<Key>,
		F: FnOnce(&mut QueryKind::Query) -> Result<R, E>,
	{
		let final_key = Self::hashed_key_for(key);
		let mut val = QueryKind::from_optional_value_to_query(unhashed::get(&final_key));

		let ret = f(&mut val);
		if ret.is_ok() {
			match QueryKind::from_query_to_optional_value(val) {
				Some(ref val) => unhashed::put(&final_key, val),
				None => unhashed::kill(&final_key),
			}
		}
		ret
	}

	/// Take the value under a key.
	pub fn take<KeyArg: EncodeLike<Key>>(key: KeyArg) -> QueryKind::Query {
		QueryKind::from_optional_value_to_query(unhashed::take(&Self::hashed_key_for(key)))
	}
}

impl<Prefix, Hasher, Key, Value, QueryKind> StorageMap<Prefix, Hasher, Key, Value, QueryKind>
where
	Prefix: StorageInstance,
	Hasher: StorageHasher + ReversibleStorageHasher,
	Key: FullCodec,
	Value: FullCodec,
	QueryKind: QueryKindTrait<Value>,
{
	/// Enumerate all elements in the map in lexicographic order of the hashed key.
	///
	/// If you alter the map while doing this, you'll get undefined results.
	pub fn iter() -> PrefixIterator<(Key, Value)> {
		let prefix = Self::final_prefix().to_vec();
		PrefixIterator {
			previous_key: prefix.clone(),
			prefix,
			closure: |raw_key_without_prefix, raw_value| {
				let mut key_material = Hasher::reverse(raw_key_without_prefix);
				Ok((Key::decode(&mut key_material)?, Value::decode(&mut &raw_value[..])?))
			},
		}
	}

	/// Enumerate all keys in the map in lexicographic order of the hashed key.
	pub fn iter_keys() -> impl Iterator<Item = Key> {
		Self::iter().map(|(key, _)| key)
	}

	/// Enumerate all values in the map in lexicographic order of the hashed key.
	pub fn iter_values() -> impl Iterator<Item = Value> {
		Self::iter().map(|(_, value)| value)
	}
}

/// Iterate over all entries of storage sharing a prefix, decoding each one with `closure`.
///
/// Entries that fail to decode are logged and skipped.
pub struct PrefixIterator<T> {
	prefix: Vec<u8>,
	previous_key: Vec<u8>,
	closure: fn(&[u8], Vec<u8>) -> Result<T, codec::Error>,
}

impl<T> Iterator for PrefixIterator<T> {
	type Item = T;

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			let next_key = unhashed::next_key(&self.previous_key)
				.filter(|n| n.starts_with(&self.prefix))?;
			self.previous_key = next_key;

			let Some(raw_value) = unhashed::get_raw(&self.previous_key) else {
				log::error!(
					target: crate::LOG_TARGET,
					"next_key returned a key with no value at {:?}",
					self.previous_key,
				);
				continue
			};

			match (self.closure)(&self.previous_key[self.prefix.len()..], raw_value) {
				Ok(item) => return Some(item),
				Err(e) => {
					log::error!(
						target: crate::LOG_TARGET,
						"(key, value) failed to decode at {:?}: {:?}",
						self.previous_key,
						e,
					);
					continue
				},
			}
		}
	}
}
