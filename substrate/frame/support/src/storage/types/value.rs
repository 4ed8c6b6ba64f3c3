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

//! Storage value type.

use super::{OptionQuery, QueryKindTrait};
use crate::{
	storage::unhashed,
	traits::StorageInstance,
};
use codec::FullCodec;
use core::marker::PhantomData;

/// A type representing a *value* in storage. A *storage value* is a single value of a given type
/// stored on-chain.
///
/// # Example
///
/// ```
/// use tiny_frame_support::{storage_prefix, storage::types::{StorageValue, ValueQuery}};
///
/// storage_prefix! {
///     pub struct FooPrefix => ("Example", "Foo");
/// }
///
/// type Foo = StorageValue<FooPrefix, u32, ValueQuery>;
///
/// sp_state_machine::TestExternalities::default().execute_with(|| {
///     assert_eq!(Foo::get(), 0);
///     Foo::put(7);
///     Foo::mutate(|v| *v += 1);
///     assert_eq!(Foo::get(), 8);
/// });
/// ```
pub struct StorageValue<Prefix, Value, QueryKind = OptionQuery>(
	PhantomData<(Prefix, Value, QueryKind)>,
);

impl<Prefix, Value, QueryKind> StorageValue<Prefix, Value, QueryKind>
where
	Prefix: StorageInstance,
	Value: FullCodec,
	QueryKind: QueryKindTrait<Value>,
{
	/// Get the storage key.
	pub fn hashed_key() -> [u8; 32] {
		Prefix::prefix_hash()
	}

	/// Does the value (explicitly) exist in storage?
	pub fn exists() -> bool {
		unhashed::exists(&Self::hashed_key())
	}

	/// Load the value from the provided storage instance.
	pub fn get() -> QueryKind::Query {
		QueryKind::from_optional_value_to_query(unhashed::get(&Self::hashed_key()))
	}

	/// Try to get the underlying value from the provided storage instance.
	///
	/// Returns `Ok` if it exists, `Err` if not.
	pub fn try_get() -> Result<Value, ()> {
		unhashed::get(&Self::hashed_key()).ok_or(())
	}

	/// Store a value under this key into the provided storage instance.
	pub fn put(val: Value) {
		unhashed::put(&Self::hashed_key(), &val)
	}

	/// Store a value under this key into the provided storage instance.
	///
	/// This uses the query type rather than the underlying value.
	pub fn set(val: QueryKind::Query) {
		match QueryKind::from_query_to_optional_value(val) {
			Some(val) => Self::put(val),
			None => Self::kill(),
		}
	}

	/// Mutate the value
	pub fn mutate<R, F: FnOnce(&mut QueryKind::Query) -> R>(f: F) -> R {
		match Self::try_mutate(|v| Ok::<R, core::convert::Infallible>(f(v))) {
			Ok(r) => r,
			Err(never) => match never {},
		}
	}

	/// Mutate the value if closure returns `Ok`
	pub fn try_mutate<R, E, F: FnOnce(&mut QueryKind::Query) -> Result<R, E>>(
		f: F,
	) -> Result<R, E> {
		let mut val = Self::get();

		let ret = f(&mut val);
		if ret.is_ok() {
			Self::set(val);
		}
		ret
	}

	/// Clear the storage value.
	pub fn kill() {
		unhashed::kill(&Self::hashed_key())
	}

	/// Take a value from storage, removing it afterwards.
	pub fn take() -> QueryKind::Query {
		QueryKind::from_optional_value_to_query(unhashed::take(&Self::hashed_key()))
	}
}
