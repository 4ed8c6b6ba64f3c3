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

//! # Proof of Existence Pallet
//!
//! Lets accounts claim a piece of content, proving they held it no later than the block the
//! claim was made in.
//!
//! ## Overview
//!
//! A piece of content is claimed by at most one account at a time. Only the owner of a claim can
//! revoke it, after which anyone may claim the content again.
//!
//! ### Dispatchable Functions
//!
//! - `create_claim`: Claim a piece of content for the caller.
//! - `revoke_claim`: Release a claim owned by the caller.

#![warn(missing_docs)]

#[cfg(test)]
mod mock;
#[cfg(test)]
mod tests;

use frame_support::{pallet_prelude::*, storage_prefix, ConfigurationError};
use frame_system::pallet_prelude::*;

/// Log target of this pallet.
pub const LOG_TARGET: &str = "runtime::proof-of-existence";

/// The configuration trait of the Proof of Existence pallet.
pub trait Config: frame_system::Config {
	/// The type of the content which can be claimed.
	type Content: Parameter + Member + Ord + MaybeSerializeDeserialize;
}

storage_prefix! {
	struct ClaimsPrefix<T: Config> => (Pallet<T>, "Claims");
}

/// The owner of each claimed piece of content.
type Claims<T> = StorageMap<
	ClaimsPrefix<T>,
	Blake2_128Concat,
	<T as Config>::Content,
	<T as frame_system::Config>::AccountId,
	OptionQuery,
>;

/// The Proof of Existence pallet.
#[derive(CloneNoBound, EqNoBound, PartialEqNoBound, DebugNoBound, DefaultNoBound)]
pub struct Pallet<T>(PhantomData<T>);

/// Errors of the Proof of Existence pallet.
#[frame_support::error]
pub enum Error<T> {
	/// This content is already claimed.
	AlreadyClaimed,
	/// The claim does not exist, so it cannot be revoked.
	ClaimNotFound,
	/// This content is claimed by another account.
	NotClaimOwner,
}

#[frame_support::call]
impl<T: Config> Pallet<T> {
	/// Create a new claim on behalf of the caller.
	///
	/// Fails if someone already claimed `claim`, including the caller.
	pub fn create_claim(origin: OriginFor<T>, claim: T::Content) -> DispatchResult {
		let who = ensure_signed(origin)?;
		ensure!(!Claims::<T>::contains_key(&claim), Error::<T>::AlreadyClaimed);

		Claims::<T>::insert(&claim, &who);
		log::debug!(target: LOG_TARGET, "{:?} claimed {:?}", who, claim);
		Ok(())
	}

	/// Revoke an existing claim on some content.
	///
	/// Only the owner of the claim can revoke it.
	pub fn revoke_claim(origin: OriginFor<T>, claim: T::Content) -> DispatchResult {
		let who = ensure_signed(origin)?;
		let owner = Claims::<T>::get(&claim).ok_or(Error::<T>::ClaimNotFound)?;
		ensure!(owner == who, Error::<T>::NotClaimOwner);

		Claims::<T>::remove(&claim);
		log::debug!(target: LOG_TARGET, "{:?} revoked {:?}", who, claim);
		Ok(())
	}
}

impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {}

impl<T: Config> Pallet<T> {
	/// The owner of `claim`, if any.
	pub fn get_claim(claim: &T::Content) -> Option<T::AccountId> {
		Claims::<T>::get(claim)
	}

	/// All claims with their owner, in storage order.
	pub fn claims() -> Vec<(T::Content, T::AccountId)> {
		Claims::<T>::iter().collect()
	}
}

/// Genesis configuration of the Proof of Existence pallet.
#[derive(DefaultNoBound, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[serde(bound(serialize = "", deserialize = ""))]
pub struct GenesisConfig<T: Config> {
	/// Content claimed at genesis, with its owner.
	pub claims: Vec<(T::Content, T::AccountId)>,
}

impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
	fn build(&self) -> Result<(), ConfigurationError> {
		for (claim, owner) in &self.claims {
			if Claims::<T>::contains_key(claim) {
				return Err(ConfigurationError::InvalidGenesis {
					pallet: "ProofOfExistence",
					reason: format!("{:?} is claimed more than once", claim),
				})
			}
			Claims::<T>::insert(claim, owner);
		}
		Ok(())
	}
}
