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


//! Atomicity and re-entrancy of dispatched calls, and routing between pallets declaring
//! functions of the same name.

use frame_support::{
	assert_noop, assert_ok, construct_runtime,
	dispatch::{DispatchError, TransactionalError, UnfilteredDispatchable},
	storage::{transactional::get_transaction_level, TRANSACTIONAL_LIMIT},
	traits::BuildStorage,
};
use frame_system::RawOrigin;
use pretty_assertions::assert_eq;
use sp_state_machine::TestExternalities;

mod counter {
	use frame_support::{
		dispatch::{ArithmeticError, UnfilteredDispatchable},
		pallet_prelude::*,
		storage::with_storage_layer,
		storage_prefix,
	};
	use frame_system::pallet_prelude::*;

	pub trait Config: frame_system::Config {}

	storage_prefix! {
		pub struct CountPrefix<T: Config> => (Pallet<T>, "Count");
		pub struct LastNestedPrefix<T: Config> => (Pallet<T>, "LastNested");
	}

	pub type Count<T> = StorageValue<CountPrefix<T>, u32, ValueQuery>;

	/// The outcome of the last nested dispatch attempted by `reenter_and_continue`.
	pub type LastNested<T> = StorageValue<LastNestedPrefix<T>, DispatchError, OptionQuery>;

	#[derive(CloneNoBound, EqNoBound, PartialEqNoBound, DebugNoBound, DefaultNoBound)]
	pub struct Pallet<T>(PhantomData<T>);

	#[frame_support::error]
	pub enum Error<T> {
		/// Returned after the count was already written.
		Refused,
	}

	#[frame_support::call]
	impl<T: Config> Pallet<T> {
		pub fn increment(origin: OriginFor<T>, by: u32) -> DispatchResult {
			ensure_signed(origin)?;
			bump::<T>(by)
		}

		pub fn increment_then_fail(origin: OriginFor<T>, by: u32) -> DispatchResult {
			ensure_signed(origin)?;
			bump::<T>(by)?;
			Err(Error::<T>::Refused.into())
		}

		/// Bump by one, then dispatch `increment { by }` from within this call.
		pub fn reenter(origin: OriginFor<T>, by: u32) -> DispatchResult {
			bump::<T>(1)?;
			Call::<T>::increment { by }.dispatch_bypass_filter(origin)
		}

		/// Like `reenter`, but keeps going when the nested dispatch fails.
		pub fn reenter_and_continue(origin: OriginFor<T>, by: u32) -> DispatchResult {
			bump::<T>(1)?;
			if let Err(e) = (Call::<T>::increment { by }).dispatch_bypass_filter(origin) {
				LastNested::<T>::put(e);
			}
			Ok(())
		}

		/// Open `depth` nested storage layers and bump the count in the innermost one.
		pub fn nest(_origin: OriginFor<T>, depth: u32) -> DispatchResult {
			open_layers::<T>(depth)
		}
	}

	impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {}

	fn bump<T: Config>(by: u32) -> DispatchResult {
		Count::<T>::try_mutate(|count| {
			*count = count.checked_add(by).ok_or(ArithmeticError::Overflow)?;
			Ok(())
		})
	}

	fn open_layers<T: Config>(depth: u32) -> DispatchResult {
		if depth == 0 {
			return bump::<T>(1)
		}
		with_storage_layer(|| open_layers::<T>(depth - 1))
	}
}

mod other {
	use frame_support::{pallet_prelude::*, storage_prefix};
	use frame_system::pallet_prelude::*;

	pub trait Config: frame_system::Config {}

	storage_prefix! {
		pub struct CountPrefix<T: Config> => (Pallet<T>, "Count");
	}

	pub type Count<T> = StorageValue<CountPrefix<T>, u32, ValueQuery>;

	#[derive(CloneNoBound, EqNoBound, PartialEqNoBound, DebugNoBound, DefaultNoBound)]
	pub struct Pallet<T>(PhantomData<T>);

	#[frame_support::call]
	impl<T: Config> Pallet<T> {
		pub fn increment(origin: OriginFor<T>, by: u32) -> DispatchResult {
			ensure_signed(origin)?;
			Count::<T>::mutate(|count| *count = count.saturating_add(by));
			Ok(())
		}
	}

	impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {}
}

construct_runtime!(
	pub struct Runtime {
		System: frame_system,
		Counter: counter,
		Other: other,
	}
);

impl frame_system::Config for Runtime {
	type AccountId = u64;
	type BlockNumber = u64;
	type Nonce = u64;
	type PalletInfo = PalletInfo;
}

impl counter::Config for Runtime {}
impl other::Config for Runtime {}

fn new_test_ext() -> TestExternalities {
	RuntimeGenesisConfig {}.build_storage().unwrap()
}

fn signed() -> RawOrigin<u64> {
	RawOrigin::Signed(1)
}

fn count() -> u32 {
	counter::Count::<Runtime>::get()
}

#[test]
fn same_function_name_is_routed_by_pallet() {
	new_test_ext().execute_with(|| {
		assert_ok!(RuntimeCall::Counter(counter::Call::increment { by: 2 })
			.dispatch_bypass_filter(signed()));
		assert_eq!(count(), 2);
		assert_eq!(other::Count::<Runtime>::get(), 0);

		assert_ok!(RuntimeCall::Other(other::Call::increment { by: 5 })
			.dispatch_bypass_filter(signed()));
		assert_eq!(count(), 2);
		assert_eq!(other::Count::<Runtime>::get(), 5);
	});
}

#[test]
fn generated_constructors_build_the_variants() {
	assert_eq!(
		counter::Call::<Runtime>::new_call_variant_increment(3),
		counter::Call::increment { by: 3 },
	);
	assert_eq!(
		RuntimeCall::from(other::Call::<Runtime>::new_call_variant_increment(3)),
		RuntimeCall::Other(other::Call::increment { by: 3 }),
	);
}

#[test]
fn failing_call_discards_its_writes() {
	new_test_ext().execute_with(|| {
		assert_ok!(counter::Call::<Runtime>::increment { by: 1 }.dispatch_bypass_filter(signed()));

		assert_noop!(
			counter::Call::<Runtime>::increment_then_fail { by: 10 }
				.dispatch_bypass_filter(signed()),
			counter::Error::<Runtime>::Refused,
		);
		assert_eq!(count(), 1);
	});
}

#[test]
fn failed_preconditions_leave_storage_untouched() {
	new_test_ext().execute_with(|| {
		assert_noop!(
			counter::Call::<Runtime>::increment { by: 1 }.dispatch_bypass_filter(RawOrigin::None),
			DispatchError::BadOrigin,
		);

		counter::Count::<Runtime>::put(u32::MAX);
		assert_noop!(
			counter::Call::<Runtime>::increment { by: 1 }.dispatch_bypass_filter(signed()),
			frame_support::dispatch::ArithmeticError::Overflow,
		);
		assert_eq!(count(), u32::MAX);
	});
}

#[test]
fn reentrant_dispatch_is_rejected() {
	new_test_ext().execute_with(|| {
		assert_noop!(
			counter::Call::<Runtime>::reenter { by: 10 }.dispatch_bypass_filter(signed()),
			DispatchError::Reentrancy,
		);
		assert_eq!(count(), 0);

		// going through the runtime call does not make a difference
		assert_noop!(
			RuntimeCall::Counter(counter::Call::reenter { by: 10 })
				.dispatch_bypass_filter(signed()),
			DispatchError::Reentrancy,
		);
	});
}

#[test]
fn rejected_nested_dispatch_runs_nothing() {
	new_test_ext().execute_with(|| {
		assert_ok!(
			counter::Call::<Runtime>::reenter_and_continue { by: 10 }
				.dispatch_bypass_filter(signed())
		);

		// only the outer bump went through
		assert_eq!(count(), 1);
		assert_eq!(counter::LastNested::<Runtime>::get(), Some(DispatchError::Reentrancy));

		// the guard is released once the outer dispatch returns
		assert_ok!(counter::Call::<Runtime>::increment { by: 10 }.dispatch_bypass_filter(signed()));
		assert_eq!(count(), 11);
	});
}

#[test]
fn storage_layers_are_bounded() {
	new_test_ext().execute_with(|| {
		assert_eq!(get_transaction_level(), 0);

		// the dispatch itself takes the first layer
		let deepest = TRANSACTIONAL_LIMIT - 1;
		assert_ok!(counter::Call::<Runtime>::nest { depth: deepest }.dispatch_bypass_filter(signed()));
		assert_eq!(count(), 1);

		assert_noop!(
			counter::Call::<Runtime>::nest { depth: deepest + 1 }.dispatch_bypass_filter(signed()),
			DispatchError::Transactional(TransactionalError::LimitReached),
		);
		assert_eq!(get_transaction_level(), 0);
	});
}
