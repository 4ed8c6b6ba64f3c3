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

//! # Ledger Pallet
//!
//! A pallet keeping an append-only ledger of notes per account.
//!
//! ## Overview
//!
//! Any signed account holding at least `MinimumBalance` can `record` a note. Every note is stored
//! together with the number of the block it was recorded in. Balances are read through
//! [`Inspect`], so the pallet works with any pallet providing one and never touches the storage of
//! that pallet.
//!
//! ### Dispatchable Functions
//!
//! - `record`: Append a note to the ledger of the caller.

#![warn(missing_docs)]

#[cfg(test)]
mod mock;

use frame_support::{
	pallet_prelude::*, storage_prefix, traits::tokens::Inspect, ConfigurationError,
};
use frame_system::pallet_prelude::*;

/// Log target of this pallet.
pub const LOG_TARGET: &str = "runtime::ledger";

/// The balance type of the currency of a runtime using `T`.
pub type BalanceOf<T> =
	<<T as Config>::Currency as Inspect<<T as frame_system::Config>::AccountId>>::Balance;

/// The configuration trait of the Ledger pallet.
pub trait Config: frame_system::Config {
	/// The currency the balance requirement is checked against.
	type Currency: Inspect<Self::AccountId>;

	/// The balance an account must hold to record a note.
	type MinimumBalance: Get<BalanceOf<Self>>;

	/// The maximum length of a note, in bytes. Must not be zero.
	type MaxNoteLength: Get<u32>;
}

/// A note of the ledger, with the block it was recorded in.
#[derive(Encode, Decode, Clone, PartialEq, Eq, Debug, TypeInfo)]
pub struct LedgerEntry<BlockNumber> {
	/// The recorded note.
	pub note: Vec<u8>,
	/// The block the note was recorded in.
	pub recorded_at: BlockNumber,
}

storage_prefix! {
	struct EntriesPrefix<T: Config> => (Pallet<T>, "Entries");
	struct EntryCountPrefix<T: Config> => (Pallet<T>, "EntryCount");
}

/// The notes of each account, oldest first.
type Entries<T> = StorageMap<
	EntriesPrefix<T>,
	Blake2_128Concat,
	<T as frame_system::Config>::AccountId,
	Vec<LedgerEntry<BlockNumberFor<T>>>,
	ValueQuery,
>;

/// The number of notes recorded so far, over all accounts.
type EntryCount<T> = StorageValue<EntryCountPrefix<T>, u32, ValueQuery>;

/// The Ledger pallet.
#[derive(CloneNoBound, EqNoBound, PartialEqNoBound, DebugNoBound, DefaultNoBound)]
pub struct Pallet<T>(PhantomData<T>);

/// Errors of the Ledger pallet.
#[frame_support::error]
pub enum Error<T> {
	/// The note is empty.
	EmptyNote,
	/// The note is longer than `MaxNoteLength`.
	NoteTooLong,
	/// The caller holds less than `MinimumBalance`.
	BalanceTooLow,
}

#[frame_support::call]
impl<T: Config> Pallet<T> {
	/// Append `note` to the ledger of the caller, stamped with the current block number.
	#[pallet::call_index(0)]
	pub fn record(origin: OriginFor<T>, note: Vec<u8>) -> DispatchResult {
		let who = ensure_signed(origin)?;

		ensure!(!note.is_empty(), Error::<T>::EmptyNote);
		ensure!(note.len() <= T::MaxNoteLength::get() as usize, Error::<T>::NoteTooLong);
		ensure!(T::Currency::balance(&who) >= T::MinimumBalance::get(), Error::<T>::BalanceTooLow);

		let recorded_at = frame_system::Pallet::<T>::block_number();
		Entries::<T>::mutate(&who, |entries| entries.push(LedgerEntry { note, recorded_at }));
		EntryCount::<T>::mutate(|count| *count = count.saturating_add(1));

		log::debug!(target: LOG_TARGET, "{:?} recorded a note at block {:?}", who, recorded_at);
		Ok(())
	}
}

impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
	fn integrity_test() -> Result<(), ConfigurationError> {
		if T::MaxNoteLength::get() == 0 {
			return Err(ConfigurationError::IntegrityTest {
				pallet: "Ledger",
				reason: "`MaxNoteLength` must be greater than zero",
			})
		}
		Ok(())
	}
}

impl<T: Config> Pallet<T> {
	/// The notes recorded by `who`, oldest first.
	pub fn entries(who: &T::AccountId) -> Vec<LedgerEntry<BlockNumberFor<T>>> {
		Entries::<T>::get(who)
	}

	/// The number of notes recorded so far, over all accounts.
	pub fn entry_count() -> u32 {
		EntryCount::<T>::get()
	}
}
