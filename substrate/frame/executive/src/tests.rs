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

//! Test the `frame-executive` crate.

use super::*;

use frame_support::{
	assert_ok, construct_runtime,
	dispatch::{CallMetadata, DispatchError, ModuleError},
	generic,
	storage::storage_root,
	traits::BuildStorage,
};
use pallet_balances::Call as BalancesCall;
use pretty_assertions::assert_eq;
use sp_state_machine::TestExternalities;

mod custom {
	use frame_support::{pallet_prelude::*, storage_prefix};
	use frame_system::pallet_prelude::*;

	pub trait Config: frame_system::Config {}

	/// What happened in a block, in order.
	#[derive(Encode, Decode, Clone, Copy, PartialEq, Eq, Debug, TypeInfo)]
	pub enum Step {
		Initialize,
		Call,
		Finalize,
	}

	storage_prefix! {
		pub struct StepsPrefix<T: Config> => (Pallet<T>, "Steps");
	}

	pub type Steps<T> = StorageValue<StepsPrefix<T>, Vec<(Step, BlockNumberFor<T>)>, ValueQuery>;

	#[derive(CloneNoBound, EqNoBound, PartialEqNoBound, DebugNoBound, DefaultNoBound)]
	pub struct Pallet<T>(PhantomData<T>);

	#[frame_support::error]
	pub enum Error<T> {
		/// Always returned by `fail`.
		Failure,
	}

	#[frame_support::call]
	impl<T: Config> Pallet<T> {
		pub fn note(_origin: OriginFor<T>) -> DispatchResult {
			push::<T>(Step::Call, frame_system::Pallet::<T>::block_number());
			Ok(())
		}

		pub fn fail(origin: OriginFor<T>) -> DispatchResult {
			ensure_signed(origin)?;
			push::<T>(Step::Call, frame_system::Pallet::<T>::block_number());
			Err(Error::<T>::Failure.into())
		}
	}

	impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
		fn on_initialize(n: BlockNumberFor<T>) {
			push::<T>(Step::Initialize, n);
		}

		fn on_finalize(n: BlockNumberFor<T>) {
			push::<T>(Step::Finalize, n);
		}
	}

	fn push<T: Config>(step: Step, n: BlockNumberFor<T>) {
		Steps::<T>::mutate(|steps| steps.push((step, n)));
	}
}

use custom::{Step, Steps};

construct_runtime!(
	pub struct Runtime {
		System: frame_system,
		Balances: pallet_balances::{Pallet, Call, Config<T>},
		Custom: custom,
	}
);

impl frame_system::Config for Runtime {
	type AccountId = u64;
	type BlockNumber = u64;
	type Nonce = u64;
	type PalletInfo = PalletInfo;
}

impl pallet_balances::Config for Runtime {
	type Balance = u64;
}

impl custom::Config for Runtime {}

type TestXt = generic::CheckedExtrinsic<u64, RuntimeCall>;
type TestBlock = generic::Block<generic::Header<u64>, TestXt>;
type Executive = super::Executive<Runtime, TestBlock, AllPalletsWithSystem>;

fn call_transfer(to: u64, amount: u64) -> RuntimeCall {
	RuntimeCall::Balances(BalancesCall::transfer { to, amount })
}

fn signed(who: u64, call: RuntimeCall) -> TestXt {
	TestXt::new_signed(call, who)
}

fn block(number: u64, extrinsics: Vec<TestXt>) -> TestBlock {
	TestBlock::new(generic::Header::new(number), extrinsics)
}

fn new_test_ext(balance_factor: u64) -> TestExternalities {
	RuntimeGenesisConfig {
		balances: pallet_balances::GenesisConfig::<Runtime> {
			balances: vec![(1, 111 * balance_factor)],
		},
	}
	.build_storage()
	.unwrap()
}

#[test]
fn balance_transfer_dispatch_works() {
	new_test_ext(1).execute_with(|| {
		Executive::initialize_block(&generic::Header::new(1));
		let r = Executive::apply_extrinsic(signed(1, call_transfer(2, 69)));
		assert_eq!(r, Ok(Ok(())));
		assert_eq!(Balances::balance(&1), 42);
		assert_eq!(Balances::balance(&2), 69);
		assert_eq!(System::account_nonce(1), 1);
	});
}

#[test]
fn failed_dispatch_reports_the_call() {
	new_test_ext(1).execute_with(|| {
		Executive::initialize_block(&generic::Header::new(1));
		let r = Executive::apply_extrinsic(signed(1, call_transfer(2, 112)));
		assert_eq!(
			r,
			Ok(Err(DispatchErrorWithCall {
				call: CallMetadata { function_name: "transfer", pallet_name: "Balances" },
				error: DispatchError::Module(ModuleError {
					index: 1,
					error: 0,
					message: Some("InsufficientBalance"),
				}),
			}))
		);
		assert_eq!(Balances::balance(&1), 111);
		// the nonce is bumped regardless of the outcome
		assert_eq!(System::account_nonce(1), 1);
	});
}

#[test]
fn unsigned_extrinsic_keeps_nonces() {
	new_test_ext(1).execute_with(|| {
		Executive::initialize_block(&generic::Header::new(1));
		let r = Executive::apply_extrinsic(TestXt::new_unsigned(call_transfer(2, 1)));
		assert_eq!(r.unwrap().unwrap_err().error, DispatchError::BadOrigin);

		let r = Executive::apply_extrinsic(TestXt::new_unsigned(RuntimeCall::Custom(
			custom::Call::note {},
		)));
		assert_eq!(r, Ok(Ok(())));
		assert_eq!(System::account_nonce(1), 0);
	});
}

#[test]
fn block_import_works() {
	new_test_ext(1).execute_with(|| {
		let results = Executive::execute_block(block(
			1,
			vec![
				signed(1, call_transfer(2, 69)),
				signed(2, RuntimeCall::Custom(custom::Call::note {})),
			],
		))
		.unwrap();

		assert_eq!(results, vec![Ok(Ok(())), Ok(Ok(()))]);
		assert_eq!(System::block_number(), 1);
		assert_eq!(System::account_nonce(1), 1);
		assert_eq!(System::account_nonce(2), 1);
		assert_eq!(
			Steps::<Runtime>::get(),
			vec![(Step::Initialize, 1), (Step::Call, 1), (Step::Finalize, 1)]
		);
	});
}

#[test]
fn consecutive_blocks_are_imported() {
	new_test_ext(1).execute_with(|| {
		assert_ok!(Executive::execute_block(block(1, vec![signed(1, call_transfer(2, 10))])));
		assert_ok!(Executive::execute_block(block(2, vec![signed(1, call_transfer(3, 10))])));
		assert_ok!(Executive::execute_block(block(3, vec![])));

		assert_eq!(System::block_number(), 3);
		assert_eq!(System::account_nonce(1), 2);
		assert_eq!(Balances::balance(&1), 91);
		assert_eq!(Steps::<Runtime>::get().len(), 6);
	});
}

#[test]
fn block_import_of_bad_block_number_fails() {
	new_test_ext(1).execute_with(|| {
		let before = storage_root();

		assert_eq!(
			Executive::execute_block(block(2, vec![signed(1, call_transfer(2, 69))])),
			Err(BlockError::InvalidBlockNumber { current: 0, found: 2 })
		);
		assert_eq!(
			Executive::execute_block(block(0, vec![])),
			Err(BlockError::InvalidBlockNumber { current: 0, found: 0 })
		);

		assert_eq!(storage_root(), before);
	});
}

#[test]
fn failing_extrinsic_does_not_stop_the_block() {
	new_test_ext(1).execute_with(|| {
		let results = Executive::execute_block(block(
			1,
			vec![
				signed(1, call_transfer(2, 500)),
				signed(1, RuntimeCall::Custom(custom::Call::fail {})),
				signed(1, call_transfer(2, 11)),
			],
		))
		.unwrap();

		assert!(matches!(results[0], Ok(Err(_))));
		assert_eq!(
			results[1].clone().unwrap().unwrap_err().error,
			DispatchError::Module(ModuleError { index: 2, error: 0, message: None })
		);
		assert_eq!(results[2], Ok(Ok(())));

		assert_eq!(Balances::balance(&2), 11);
		assert_eq!(System::account_nonce(1), 3);
		// the step written by the failing call is discarded
		assert_eq!(Steps::<Runtime>::get(), vec![(Step::Initialize, 1), (Step::Finalize, 1)]);
	});
}

#[test]
fn call_to_unregistered_pallet_is_not_applied() {
	type ExecutiveWithoutSystem = super::Executive<Runtime, TestBlock, AllPalletsWithoutSystem>;

	new_test_ext(1).execute_with(|| {
		ExecutiveWithoutSystem::initialize_block(&generic::Header::new(1));
		let before = storage_root();

		let remark = RuntimeCall::System(frame_system::Call::remark { remark: vec![1, 2, 3] });
		assert_eq!(
			ExecutiveWithoutSystem::apply_extrinsic(signed(1, remark)),
			Err(InternalConsistencyError::UnregisteredPallet { pallet: "System" })
		);
		assert_eq!(storage_root(), before);

		// later calls are applied as usual
		assert_eq!(
			ExecutiveWithoutSystem::apply_extrinsic(signed(1, call_transfer(2, 1))),
			Ok(Ok(()))
		);
		assert_eq!(System::account_nonce(1), 1);
	});
}

#[test]
fn unregistered_calls_do_not_stop_the_block() {
	type ExecutiveWithoutSystem = super::Executive<Runtime, TestBlock, AllPalletsWithoutSystem>;

	new_test_ext(1).execute_with(|| {
		let remark = RuntimeCall::System(frame_system::Call::remark { remark: vec![] });
		let results = ExecutiveWithoutSystem::execute_block(block(
			1,
			vec![signed(1, remark), signed(1, call_transfer(2, 5))],
		))
		.unwrap();

		assert!(results[0].is_err());
		assert_eq!(results[1], Ok(Ok(())));
		assert_eq!(Balances::balance(&2), 5);
	});
}
