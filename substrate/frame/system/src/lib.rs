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

//! # System Pallet
//!
//! The System pallet provides low-level access to core types and cross-cutting utilities. It acts
//! as the base layer for other pallets to interact with the runtime.
//!
//! ## Overview
//!
//! The System pallet defines the core data types used in a runtime: the account identifier, the
//! block number and the account nonce, bound once by the runtime through [`Config`]. Every other
//! pallet extends [`Config`] and reaches these types through it, never through a concrete type.
//!
//! It also keeps the current block number and the nonce of every account that submitted an
//! extrinsic, and provides the [`RawOrigin`] a dispatchable function is called with.
//!
//! ### Dispatchable Functions
//!
//! - `remark`: Make some on-chain remark.
//!
//! ### Public Functions
//!
//! - [`Pallet::initialize`]: Start the execution of a block with the given number.
//! - [`Pallet::block_number`]: The block number currently being executed.
//! - [`Pallet::account_nonce`] and [`Pallet::inc_account_nonce`]: Read and bump the nonce of an
//!   account.
//!
//! ### Origin helpers
//!
//! [`ensure_signed`], [`ensure_root`] and [`ensure_none`] extract the expected origin or fail with
//! [`BadOrigin`].

#![warn(missing_docs)]

extern crate self as tiny_frame_system;

use codec::EncodeLike;
use frame_support::{
	dispatch::BadOrigin,
	pallet_prelude::*,
	storage_prefix,
	traits::PalletInfo,
};

#[cfg(test)]
mod mock;

/// Log target of this pallet.
pub const LOG_TARGET: &str = "runtime::system";

/// Prelude to be used alongside the pallet attribute macros, for ease of use.
pub mod pallet_prelude {
	pub use crate::{ensure_none, ensure_root, ensure_signed, BlockNumberFor, OriginFor};
}

/// Type alias for the `BlockNumber` associated type of system config.
pub type BlockNumberFor<T> = <T as Config>::BlockNumber;

/// Type alias for the `AccountId` associated type of system config.
pub type AccountIdFor<T> = <T as Config>::AccountId;

/// Type alias for the origin of a dispatchable function of a runtime using `T`.
pub type OriginFor<T> = RawOrigin<<T as Config>::AccountId>;

/// System configuration trait. Implemented by runtime.
pub trait Config: 'static + Eq + Clone + core::fmt::Debug {
	/// The user account identifier type for the runtime.
	type AccountId: Parameter + Member + Ord + MaybeSerializeDeserialize;

	/// The block number type used by the runtime.
	type BlockNumber: Parameter + Member + BaseArithmetic + MaybeSerializeDeserialize;

	/// This stores the number of previous transactions associated with a sender account.
	type Nonce: Parameter + Member + BaseArithmetic + MaybeSerializeDeserialize;

	/// Provides information about the pallet setup in the runtime.
	///
	/// Expects the `PalletInfo` type that is being generated by `construct_runtime!` in the
	/// runtime.
	type PalletInfo: PalletInfo;
}

/// Origin for the System pallet.
#[derive(PartialEq, Eq, Clone, Debug, Encode, Decode, TypeInfo)]
pub enum RawOrigin<AccountId> {
	/// The system itself ordained this dispatch to happen: this is the highest privilege level.
	Root,
	/// It is signed by some public key and we provide the `AccountId`.
	Signed(AccountId),
	/// It is signed by nobody, can be either:
	/// * included and agreed upon by the validators anyway,
	/// * or unsigned transaction validated by a pallet.
	None,
}

impl<AccountId> From<Option<AccountId>> for RawOrigin<AccountId> {
	fn from(s: Option<AccountId>) -> RawOrigin<AccountId> {
		match s {
			Some(who) => RawOrigin::Signed(who),
			None => RawOrigin::None,
		}
	}
}

impl<AccountId> RawOrigin<AccountId> {
	/// Returns `Some` with a reference to the `AccountId` if `self` is `Signed`, `None` otherwise.
	pub fn as_signed(&self) -> Option<&AccountId> {
		match &self {
			Self::Signed(x) => Some(x),
			_ => None,
		}
	}

	/// Returns `true` if `self` is `Root`, `None` otherwise.
	pub fn is_root(&self) -> bool {
		matches!(&self, Self::Root)
	}

	/// Returns `true` if `self` is `None`, `None` otherwise.
	pub fn is_none(&self) -> bool {
		matches!(&self, Self::None)
	}
}

/// Ensure that the origin `o` represents a signed extrinsic (i.e. transaction).
/// Returns `Ok` with the account that signed the extrinsic or an `Err` otherwise.
pub fn ensure_signed<AccountId>(o: RawOrigin<AccountId>) -> Result<AccountId, BadOrigin> {
	match o {
		RawOrigin::Signed(t) => Ok(t),
		_ => Err(BadOrigin),
	}
}

/// Ensure that the origin `o` represents the root. Returns `Ok` or an `Err` otherwise.
pub fn ensure_root<AccountId>(o: RawOrigin<AccountId>) -> Result<(), BadOrigin> {
	match o {
		RawOrigin::Root => Ok(()),
		_ => Err(BadOrigin),
	}
}

/// Ensure that the origin `o` represents an unsigned extrinsic. Returns `Ok` or an `Err` otherwise.
pub fn ensure_none<AccountId>(o: RawOrigin<AccountId>) -> Result<(), BadOrigin> {
	match o {
		RawOrigin::None => Ok(()),
		_ => Err(BadOrigin),
	}
}

storage_prefix! {
	struct NumberPrefix<T: Config> => (Pallet<T>, "Number");
	struct AccountNoncePrefix<T: Config> => (Pallet<T>, "AccountNonce");
}

/// The current block number being processed. Set by `execute_block`.
type Number<T> = StorageValue<NumberPrefix<T>, BlockNumberFor<T>, ValueQuery>;

/// Extrinsics nonce for accounts.
type AccountNonce<T> = StorageMap<
	AccountNoncePrefix<T>,
	Blake2_128Concat,
	<T as Config>::AccountId,
	<T as Config>::Nonce,
	ValueQuery,
>;

/// The System pallet.
#[derive(CloneNoBound, EqNoBound, PartialEqNoBound, DebugNoBound, DefaultNoBound)]
pub struct Pallet<T>(PhantomData<T>);

#[frame_support::call]
impl<T: Config> Pallet<T> {
	/// Make some on-chain remark.
	///
	/// Can be executed by every `origin`.
	#[pallet::call_index(0)]
	pub fn remark(_origin: OriginFor<T>, remark: Vec<u8>) -> DispatchResult {
		log::trace!(target: LOG_TARGET, "remark of {} bytes", remark.len());
		Ok(())
	}
}

impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {}

impl<T: Config> Pallet<T> {
	/// Start the execution of a particular block.
	pub fn initialize(number: &BlockNumberFor<T>) {
		log::debug!(target: LOG_TARGET, "initializing block {:?}", number);
		Number::<T>::put(*number);
	}

	/// The current block number being processed.
	pub fn block_number() -> BlockNumberFor<T> {
		Number::<T>::get()
	}

	/// Set the block number to something in particular. Can be used as an alternative to
	/// `initialize` for tests that don't need to bother with the other environment entries.
	pub fn set_block_number(n: BlockNumberFor<T>) {
		Number::<T>::put(n);
	}

	/// Retrieve the account transaction counter from storage.
	pub fn account_nonce(who: impl EncodeLike<T::AccountId>) -> T::Nonce {
		AccountNonce::<T>::get(who)
	}

	/// Increment a particular account's nonce by 1.
	pub fn inc_account_nonce(who: impl EncodeLike<T::AccountId>) {
		AccountNonce::<T>::mutate(who, |n| *n = n.saturating_add(T::Nonce::one()));
	}
}
