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

use crate::{self as frame_system, Config};
use frame_support::construct_runtime;
use sp_state_machine::TestExternalities;

construct_runtime!(
	pub struct Test {
		System: frame_system::{Pallet, Call},
	}
);

impl Config for Test {
	type AccountId = u64;
	type BlockNumber = u64;
	type Nonce = u64;
	type PalletInfo = PalletInfo;
}

/// Create new externalities for `System` module tests.
pub fn new_test_ext() -> TestExternalities {
	let mut ext = TestExternalities::default();
	ext.execute_with(|| System::set_block_number(1));
	ext
}
