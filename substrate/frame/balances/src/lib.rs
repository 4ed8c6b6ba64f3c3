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

//! # Balances Pallet
//!
//! The Balances pallet provides functionality for handling accounts and balances for a single
//! token.
//!
//! ## Overview
//!
//! Each account holds a free balance of the runtime's `Balance` type. The sum of all balances is
//! tracked as the total issuance, which only genesis and [`Pallet::set_balance`] can change:
//! transfers move value around without creating or destroying any.
//!
//! ### Dispatchable Functions
//!
//! - `transfer`: Transfer some liquid free balance to another account.
//!
//! Other pallets read balances through the [`Inspect`] implementation of [`Pallet`] rather than
//! through the storage of this pallet.
//!
//! ## Genesis config
//!
//! The Balances pallet depends on the [`GenesisConfig`].

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

use frame_support::{
	dispatch::ArithmeticError,
	pallet_prelude::*,
	storage_prefix,
	traits::tokens::Inspect,
	ConfigurationError,
};
use frame_system::pallet_prelude::*;

/// Log target of this pallet.
pub const LOG_TARGET: &str = "runtime::balances";

/// The configuration trait of the Balances pallet.
pub trait Config: frame_system::Config {
	/// The balance of an account.
	type Balance: Parameter + Member + BaseArithmetic + MaybeSerializeDeserialize;
}

storage_prefix! {
	struct TotalIssuancePrefix<T: Config> => (Pallet<T>, "TotalIssuance");
	struct AccountPrefix<T: Config> => (Pallet<T>, "Account");
}

/// The total units issued in the system.
pub(crate) type TotalIssuance<T> =
	StorageValue<TotalIssuancePrefix<T>, <T as Config>::Balance, ValueQuery>;

/// The balance of an account. Accounts holding nothing are not stored.
pub(crate) type Account<T> = StorageMap<
	AccountPrefix<T>,
	Blake2_128Concat,
	<T as frame_system::Config>::AccountId,
	<T as Config>::Balance,
	ValueQuery,
>;

/// The Balances pallet.
#[derive(CloneNoBound, EqNoBound, PartialEqNoBound, DebugNoBound, DefaultNoBound)]
pub struct Pallet<T>(PhantomData<T>);

/// Errors of the Balances pallet.
#[frame_support::error]
pub enum Error<T> {
	/// Balance too low to send value.
	InsufficientBalance,
}

#[frame_support::call]
impl<T: Config> Pallet<T> {
	/// Transfer some liquid free balance to another account.
	///
	/// The dispatch origin for this call must be `Signed` by the transactor. Transferring to
	/// oneself succeeds without changing anything, provided the balance covers `amount`.
	#[pallet::call_index(0)]
	pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: T::Balance) -> DispatchResult {
		let source = ensure_signed(origin)?;

		let new_source_balance = Self::balance(&source)
			.checked_sub(&amount)
			.ok_or(Error::<T>::InsufficientBalance)?;

		if source == to {
			return Ok(())
		}

		let new_to_balance =
			Self::balance(&to).checked_add(&amount).ok_or(ArithmeticError::Overflow)?;

		Self::write_balance(&source, new_source_balance);
		Self::write_balance(&to, new_to_balance);

		log::debug!(target: LOG_TARGET, "transferred {:?} from {:?} to {:?}", amount, source, to);
		Ok(())
	}
}

impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {}

impl<T: Config> Pallet<T> {
	/// Get the balance of an account.
	pub fn balance(who: &T::AccountId) -> T::Balance {
		Account::<T>::get(who)
	}

	/// The total units issued in the system.
	pub fn total_issuance() -> T::Balance {
		TotalIssuance::<T>::get()
	}

	/// Set the balance of `who` to `amount`, adjusting the total issuance by the difference.
	///
	/// Fails without writing anything if the new total issuance would overflow.
	pub fn set_balance(who: &T::AccountId, amount: T::Balance) -> DispatchResult {
		let old = Self::balance(who);
		let issuance = Self::total_issuance();
		let new_issuance = if amount >= old {
			issuance.checked_add(&(amount - old)).ok_or(ArithmeticError::Overflow)?
		} else {
			issuance.checked_sub(&(old - amount)).ok_or(ArithmeticError::Underflow)?
		};

		TotalIssuance::<T>::put(new_issuance);
		Self::write_balance(who, amount);
		Ok(())
	}

	fn write_balance(who: &T::AccountId, amount: T::Balance) {
		if amount.is_zero() {
			Account::<T>::remove(who);
		} else {
			Account::<T>::insert(who, amount);
		}
	}
}

impl<T: Config> Inspect<T::AccountId> for Pallet<T> {
	type Balance = T::Balance;

	fn total_issuance() -> Self::Balance {
		TotalIssuance::<T>::get()
	}

	fn balance(who: &T::AccountId) -> Self::Balance {
		Account::<T>::get(who)
	}
}

/// Genesis configuration of the Balances pallet.
#[derive(DefaultNoBound, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[serde(bound(serialize = "", deserialize = ""))]
pub struct GenesisConfig<T: Config> {
	/// The initial balance of each endowed account.
	pub balances: Vec<(T::AccountId, T::Balance)>,
}

impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
	fn build(&self) -> Result<(), ConfigurationError> {
		let mut seen = std::collections::BTreeSet::new();
		for (who, amount) in &self.balances {
			if !seen.insert(who) {
				return Err(ConfigurationError::InvalidGenesis {
					pallet: "Balances",
					reason: format!("duplicate balances in genesis for {:?}", who),
				})
			}

			Pallet::<T>::set_balance(who, *amount).map_err(|e| {
				ConfigurationError::InvalidGenesis {
					pallet: "Balances",
					reason: format!("endowing {:?} failed: {}", who, e),
				}
			})?;
		}

		log::debug!(
			target: LOG_TARGET,
			"endowed {} accounts, total issuance {:?}",
			self.balances.len(),
			TotalIssuance::<T>::get(),
		);
		Ok(())
	}
}
