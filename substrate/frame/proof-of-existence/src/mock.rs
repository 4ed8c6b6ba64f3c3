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

//! Test environment for the Proof of Existence pallet.

use crate as pallet_proof_of_existence;
use frame_support::{construct_runtime, traits::BuildStorage};
use sp_state_machine::TestExternalities;

construct_runtime!(
	pub struct Test {
		System: frame_system,
		ProofOfExistence: pallet_proof_of_existence::{Pallet, Call, Config<T>},
	}
);

impl frame_system::Config for Test {
	type AccountId = u64;
	type BlockNumber = u64;
	type Nonce = u64;
	type PalletInfo = PalletInfo;
}

impl pallet_proof_of_existence::Config for Test {
	type Content = String;
}

pub const ALICE: u64 = 1;
pub const BOB: u64 = 2;

pub fn new_test_ext() -> TestExternalities {
	ExtBuilder::default().build()
}

#[derive(Default)]
pub struct ExtBuilder {
	claims: Vec<(String, u64)>,
}

impl ExtBuilder {
	pub fn claim(mut self, content: &str, owner: u64) -> Self {
		self.claims.push((content.to_string(), owner));
		self
	}

	pub fn build(self) -> TestExternalities {
		let mut ext = RuntimeGenesisConfig {
			proof_of_existence: pallet_proof_of_existence::GenesisConfig::<Test> {
				claims: self.claims,
			},
		}
		.build_storage()
		.unwrap();
		ext.execute_with(|| System::set_block_number(1));
		ext
	}
}
