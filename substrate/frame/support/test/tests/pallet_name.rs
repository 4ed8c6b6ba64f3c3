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

//! Storage of a pallet lives under the name the runtime registers it with.

use frame_support::{
	assert_ok, construct_runtime, dispatch::UnfilteredDispatchable, traits::BuildStorage,
	StorageValue, ValueQuery,
};
use frame_system::RawOrigin;
use pretty_assertions::assert_eq;
use tiny_frame_support_test::{changed_keys, pallet_prefix, touched_pallets};

construct_runtime!(
	pub struct Runtime {
		System: frame_system::{Pallet},
		Currency: pallet_balances::{Pallet, Call, Config<T>},
	}
);

impl frame_system::Config for Runtime {
	type AccountId = u64;
	type BlockNumber = u32;
	type Nonce = u32;
	type PalletInfo = PalletInfo;
}

impl pallet_balances::Config for Runtime {
	type Balance = u64;
}

#[test]
fn storage_follows_the_registered_name() {
	let mut ext = RuntimeGenesisConfig {
		currency: pallet_balances::GenesisConfig { balances: vec![(1, 100)] },
	}
	.build_storage()
	.unwrap();

	let genesis = ext.pairs();
	assert!(!genesis.is_empty());
	assert!(genesis.iter().all(|(key, _)| key.starts_with(&pallet_prefix("Currency"))));

	ext.execute_with(|| {
		let call = RuntimeCall::Currency(pallet_balances::Call::transfer { to: 2, amount: 10 });
		assert_ok!(call.dispatch_bypass_filter(RawOrigin::Signed(1)));
		assert_eq!(Currency::balance(&2), 10);
	});

	let changed = changed_keys(&genesis, &ext.pairs());
	assert!(!changed.is_empty());
	assert_eq!(
		touched_pallets(&changed, &["System", "Balances", "Currency"]),
		vec!["Currency"],
	);
}

#[test]
fn total_issuance_key_uses_the_registered_name() {
	let mut ext = RuntimeGenesisConfig {
		currency: pallet_balances::GenesisConfig { balances: vec![(1, 100)] },
	}
	.build_storage()
	.unwrap();

	frame_support::storage_prefix! {
		struct TotalIssuancePrefix => ("Currency", "TotalIssuance");
	}
	type TotalIssuance = StorageValue<TotalIssuancePrefix, u64, ValueQuery>;

	ext.execute_with(|| {
		assert_eq!(TotalIssuance::get(), 100);
		assert_eq!(Currency::total_issuance(), 100);
	});
}
