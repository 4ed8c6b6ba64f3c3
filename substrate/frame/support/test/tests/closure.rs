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


//! A runtime exposing exactly two operations, `Balances::transfer` and `Ledger::record`.

use codec::{Decode, Encode};
use frame_support::{
	assert_noop, assert_ok, assert_storage_noop, construct_runtime,
	dispatch::{
		CallMetadata, DispatchError, GetCallMetadata, ModuleError, UnfilteredDispatchable,
	},
	parameter_types,
	traits::{BuildStorage, ConstU32},
};
use frame_system::RawOrigin;
use pretty_assertions::assert_eq;
use scale_info::{TypeDef, TypeInfo};
use sp_state_machine::TestExternalities;
use tiny_frame_support_test::{changed_keys, touched_pallets};

construct_runtime!(
	pub struct Runtime {
		System: frame_system::{Pallet},
		Balances: pallet_balances::{Pallet, Call, Config<T>},
		Ledger: pallet_ledger,
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

parameter_types! {
	pub const MinimumBalance: u64 = 1;
}

impl pallet_ledger::Config for Runtime {
	type Currency = Balances;
	type MinimumBalance = MinimumBalance;
	type MaxNoteLength = ConstU32<32>;
}

const ALICE: u64 = 1;
const BOB: u64 = 2;

fn new_test_ext(alice: u64) -> TestExternalities {
	let mut ext = RuntimeGenesisConfig {
		balances: pallet_balances::GenesisConfig { balances: vec![(ALICE, alice)] },
	}
	.build_storage()
	.unwrap();
	ext.execute_with(|| System::set_block_number(1));
	ext
}

fn transfer(to: u64, amount: u64) -> RuntimeCall {
	RuntimeCall::Balances(pallet_balances::Call::transfer { to, amount })
}

fn record(note: &[u8]) -> RuntimeCall {
	RuntimeCall::Ledger(pallet_ledger::Call::record { note: note.to_vec() })
}

/// Fails to compile as soon as the runtime gains or loses a callable pallet.
fn pallet_of(call: &RuntimeCall) -> &'static str {
	match call {
		RuntimeCall::Balances(_) => "Balances",
		RuntimeCall::Ledger(_) => "Ledger",
	}
}

#[test]
fn the_call_set_is_closed() {
	assert_eq!(RuntimeCall::get_module_names(), &["Balances", "Ledger"]);
	assert_eq!(RuntimeCall::get_call_names("Balances"), &["transfer"]);
	assert_eq!(RuntimeCall::get_call_names("Ledger"), &["record"]);
	// System is part of the runtime, but without calls.
	assert!(RuntimeCall::get_call_names("System").is_empty());

	let TypeDef::Variant(outer) = RuntimeCall::type_info().type_def else {
		panic!("the runtime call is an enum")
	};
	let variants: Vec<_> = outer.variants.iter().map(|v| (v.name, v.index)).collect();
	assert_eq!(variants, vec![("Balances", 1), ("Ledger", 2)]);

	assert_eq!(pallet_of(&transfer(BOB, 1)), "Balances");
	assert_eq!(pallet_of(&record(b"x")), "Ledger");
}

#[test]
fn calls_are_encoded_with_their_pallet_index() {
	let call = record(b"hi");
	let encoded = call.encode();
	assert_eq!(encoded[0], 2);
	assert_eq!(RuntimeCall::decode(&mut &encoded[..]).unwrap(), call);

	// System has no calls, so nothing decodes under its index.
	let mut unknown = encoded.clone();
	unknown[0] = 0;
	assert!(RuntimeCall::decode(&mut &unknown[..]).is_err());
}

#[test]
fn transfer_moves_funds() {
	new_test_ext(100).execute_with(|| {
		assert_ok!(transfer(BOB, 10).dispatch_bypass_filter(RawOrigin::Signed(ALICE)));

		assert_eq!(Balances::balance(&ALICE), 90);
		assert_eq!(Balances::balance(&BOB), 10);
		assert_eq!(Balances::total_issuance(), 100);
	});
}

#[test]
fn transfer_above_the_balance_changes_nothing() {
	new_test_ext(5).execute_with(|| {
		assert_noop!(
			transfer(BOB, 10).dispatch_bypass_filter(RawOrigin::Signed(ALICE)),
			pallet_balances::Error::<Runtime>::InsufficientBalance,
		);
		assert_eq!(Balances::balance(&ALICE), 5);
		assert_eq!(Balances::balance(&BOB), 0);
	});
}

#[test]
fn transfer_to_self_is_a_no_op() {
	new_test_ext(100).execute_with(|| {
		assert_storage_noop!(assert_eq!(
			transfer(ALICE, 10).dispatch_bypass_filter(RawOrigin::Signed(ALICE)),
			Ok(()),
		));
		assert_eq!(Balances::balance(&ALICE), 100);
	});
}

#[test]
fn each_call_reaches_only_its_pallet() {
	let mut ext = new_test_ext(100);
	let pallets = ["System", "Balances", "Ledger"];

	let before = ext.pairs();
	ext.execute_with(|| {
		assert_ok!(record(b"note").dispatch_bypass_filter(RawOrigin::Signed(ALICE)));
	});
	let after = ext.pairs();
	assert_eq!(touched_pallets(&changed_keys(&before, &after), &pallets), vec!["Ledger"]);

	ext.execute_with(|| {
		assert_ok!(transfer(BOB, 1).dispatch_bypass_filter(RawOrigin::Signed(ALICE)));
	});
	let last = ext.pairs();
	assert_eq!(touched_pallets(&changed_keys(&after, &last), &pallets), vec!["Balances"]);
}

#[test]
fn errors_are_attributed_to_the_failing_pallet() {
	new_test_ext(100).execute_with(|| {
		let call = record(b"");
		assert_eq!(
			call.get_call_metadata(),
			CallMetadata { function_name: "record", pallet_name: "Ledger" },
		);
		assert_eq!(
			call.dispatch_bypass_filter(RawOrigin::Signed(ALICE)),
			Err(DispatchError::Module(ModuleError {
				index: 2,
				error: 0,
				message: Some("EmptyNote"),
			})),
		);

		// the ledger reads balances, so BOB without funds cannot record
		assert_noop!(
			record(b"note").dispatch_bypass_filter(RawOrigin::Signed(BOB)),
			pallet_ledger::Error::<Runtime>::BalanceTooLow,
		);
		assert_noop!(record(b"note").dispatch_bypass_filter(RawOrigin::None), DispatchError::BadOrigin);
	});
}
