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

//! Test environment for the Ledger pallet.

use crate as pallet_ledger;
use frame_support::{construct_runtime, parameter_types, traits::BuildStorage};
use sp_state_machine::TestExternalities;

construct_runtime!(
	pub struct Test {
		System: frame_system::{Pallet, Call},
		Balances: pallet_balances::{Pallet, Call, Config<T>},
		Ledger: pallet_ledger,
	}
);

impl frame_system::Config for Test {
	type AccountId = u64;
	type BlockNumber = u64;
	type Nonce = u64;
	type PalletInfo = PalletInfo;
}

impl pallet_balances::Config for Test {
	type Balance = u64;
}

parameter_types! {
	pub static MinimumBalance: u64 = 10;
	pub static MaxNoteLength: u32 = 8;
}

impl pallet_ledger::Config for Test {
	type Currency = Balances;
	type MinimumBalance = MinimumBalance;
	type MaxNoteLength = MaxNoteLength;
}

pub const ALICE: u64 = 1;
pub const BOB: u64 = 2;
pub const CHARLIE: u64 = 3;

pub fn new_test_ext() -> TestExternalities {
	let mut ext = RuntimeGenesisConfig {
		balances: pallet_balances::GenesisConfig::<Test> {
			balances: vec![(ALICE, 100), (BOB, 10), (CHARLIE, 5)],
		},
	}
	.build_storage()
	.unwrap();
	ext.execute_with(|| System::set_block_number(1));
	ext
}
