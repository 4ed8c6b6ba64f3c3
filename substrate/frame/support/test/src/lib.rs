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


//! Test crate for the runtime composition and dispatch machinery of FRAME.
//!
//! The tests live under `tests/`. This crate only carries the helpers they share, and the doc
//! tests below, which pin down what must not compile.
//!
//! A runtime is closed over the calls of the pallets it declares with a `Call` part. Building a
//! call of a pallet the runtime does not contain is rejected by the compiler:
//!
//! ```compile_fail
//! # use frame_support::{construct_runtime, traits::{ConstU32, ConstU64}};
//! # construct_runtime!(
//! # 	pub struct Runtime {
//! # 		System: frame_system::{Pallet},
//! # 		Balances: pallet_balances::{Pallet, Call, Config<T>},
//! # 	}
//! # );
//! # impl frame_system::Config for Runtime {
//! # 	type AccountId = u64;
//! # 	type BlockNumber = u64;
//! # 	type Nonce = u64;
//! # 	type PalletInfo = PalletInfo;
//! # }
//! # impl pallet_balances::Config for Runtime {
//! # 	type Balance = u64;
//! # }
//! # impl pallet_ledger::Config for Runtime {
//! # 	type Currency = Balances;
//! # 	type MinimumBalance = ConstU64<0>;
//! # 	type MaxNoteLength = ConstU32<8>;
//! # }
//! fn main() {
//! 	let _ = RuntimeCall::Ledger(pallet_ledger::Call::record { note: vec![1] });
//! }
//! ```
//!
//! The same runtime accepts the calls of its own pallets:
//!
//! ```
//! # use frame_support::{construct_runtime, traits::{ConstU32, ConstU64}};
//! # construct_runtime!(
//! # 	pub struct Runtime {
//! # 		System: frame_system::{Pallet},
//! # 		Balances: pallet_balances::{Pallet, Call, Config<T>},
//! # 	}
//! # );
//! # impl frame_system::Config for Runtime {
//! # 	type AccountId = u64;
//! # 	type BlockNumber = u64;
//! # 	type Nonce = u64;
//! # 	type PalletInfo = PalletInfo;
//! # }
//! # impl pallet_balances::Config for Runtime {
//! # 	type Balance = u64;
//! # }
//! # impl pallet_ledger::Config for Runtime {
//! # 	type Currency = Balances;
//! # 	type MinimumBalance = ConstU64<0>;
//! # 	type MaxNoteLength = ConstU32<8>;
//! # }
//! fn main() {
//! 	let _ = RuntimeCall::Balances(pallet_balances::Call::transfer { to: 2, amount: 1 });
//! }
//! ```
//!
//! Only signed dispatchables can be declared, so a call without an origin is rejected too:
//!
//! ```compile_fail
//! # use frame_support::pallet_prelude::*;
//! # use frame_system::pallet_prelude::*;
//! # pub trait Config: frame_system::Config {}
//! # #[derive(CloneNoBound, EqNoBound, PartialEqNoBound, DebugNoBound, DefaultNoBound)]
//! # pub struct Pallet<T>(PhantomData<T>);
//! #[frame_support::call]
//! impl<T: Config> Pallet<T> {
//! 	pub fn no_origin(value: u32) -> DispatchResult {
//! 		Ok(())
//! 	}
//! }
//! # fn main() {}
//! ```

use sp_state_machine::{StorageKey, StorageValue};
use std::collections::{BTreeMap, BTreeSet};

/// The prefix shared by every storage item of the pallet named `pallet`.
pub fn pallet_prefix(pallet: &str) -> [u8; 16] {
	sp_crypto_hashing::twox_128(pallet.as_bytes())
}

/// The keys whose value differs between the two given storage snapshots.
///
/// Keys present in only one of the snapshots count as changed.
pub fn changed_keys(
	before: &[(StorageKey, StorageValue)],
	after: &[(StorageKey, StorageValue)],
) -> BTreeSet<StorageKey> {
	let before: BTreeMap<_, _> = before.iter().cloned().collect();
	let after: BTreeMap<_, _> = after.iter().cloned().collect();

	before
		.keys()
		.chain(after.keys())
		.filter(|key| before.get(*key) != after.get(*key))
		.cloned()
		.collect()
}

/// The pallets, out of `pallets`, owning at least one of `keys`.
pub fn touched_pallets<'a>(
	keys: &BTreeSet<StorageKey>,
	pallets: &[&'a str],
) -> Vec<&'a str> {
	pallets
		.iter()
		.filter(|pallet| {
			let prefix = pallet_prefix(pallet);
			keys.iter().any(|key| key.starts_with(&prefix))
		})
		.copied()
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn changed_keys_covers_updates_insertions_and_removals() {
		let before = vec![(b"a".to_vec(), vec![1]), (b"b".to_vec(), vec![2]), (b"c".to_vec(), vec![3])];
		let after = vec![(b"a".to_vec(), vec![1]), (b"b".to_vec(), vec![9]), (b"d".to_vec(), vec![4])];

		let changed = changed_keys(&before, &after);
		assert_eq!(
			changed.into_iter().collect::<Vec<_>>(),
			vec![b"b".to_vec(), b"c".to_vec(), b"d".to_vec()],
		);
	}

	#[test]
	fn touched_pallets_matches_on_the_pallet_prefix() {
		let mut key = pallet_prefix("Ledger").to_vec();
		key.extend(sp_crypto_hashing::twox_128(b"EntryCount"));
		let keys = BTreeSet::from([key]);

		assert_eq!(touched_pallets(&keys, &["Balances", "Ledger", "System"]), vec!["Ledger"]);
		assert!(touched_pallets(&BTreeSet::new(), &["Ledger"]).is_empty());
	}
}
