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

//! Tests and the mock runtime of the Balances pallet.

#![cfg(test)]

use crate::{self as pallet_balances, Account, Config, Error, TotalIssuance};
use frame_support::{
	assert_err, assert_noop, assert_ok, construct_runtime,
	dispatch::{ArithmeticError, DispatchError, GetCallMetadata, UnfilteredDispatchable},
	traits::BuildStorage,
	StorageNoopGuard,
};
use frame_system::RawOrigin;
use pretty_assertions::assert_eq;
use sp_state_machine::TestExternalities;


construct_runtime!(
	pub struct Test {
		System: frame_system::{Pallet, Call},
		Balances: pallet_balances::{Pallet, Call, Config<T>},
	}
);

impl frame_system::Config for Test {
	type AccountId = u64;
	type BlockNumber = u64;
	type Nonce = u64;
	type PalletInfo = PalletInfo;
}

impl Config for Test {
	type Balance = u64;
}

pub struct ExtBuilder {
	balances: Vec<(u64, u64)>,
}

impl Default for ExtBuilder {
	fn default() -> Self {
		Self { balances: vec![] }
	}
}

impl ExtBuilder {
	pub fn balances(mut self, balances: Vec<(u64, u64)>) -> Self {
		self.balances = balances;
		self
	}

	pub fn monied(self) -> Self {
		self.balances(vec![(1, 10), (2, 20), (3, 30), (4, 40), (12, 10)])
	}

	pub fn build(self) -> TestExternalities {
		let mut ext = RuntimeGenesisConfig {
			balances: pallet_balances::GenesisConfig::<Test> { balances: self.balances },
		}
		.build_storage()
		.unwrap();
		ext.execute_with(|| System::set_block_number(1));
		ext
	}

	pub fn build_and_execute_with(self, f: impl FnOnce()) {
		let mut ext = self.build();
		ext.execute_with(f);
		ext.execute_with(ensure_ti_valid);
	}
}

/// Check that the total-issuance matches the sum of all accounts' balances.
pub fn ensure_ti_valid() {
	let sum = Account::<Test>::iter_values().sum::<u64>();
	assert_eq!(TotalIssuance::<Test>::get(), sum, "Total Issuance is incorrect");
}
