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

//! A minimal runtime that includes the [`pallet_balances`], [`pallet_proof_of_existence`] and
//! [`pallet_ledger`] pallets.

pub mod genesis_config_presets;

use frame_support::{
	construct_runtime,
	genesis_builder_helper::{build_state, get_preset, PresetId},
	parameter_types,
	traits::ConstU32,
	ConfigurationError,
};
use frame_executive::{ApplyExtrinsicResult, BlockError};
use sp_state_machine::BasicExternalities;

pub use types::*;

/// Log target of the runtime.
const LOG_TARGET: &str = "runtime";

/// The concrete types the pallets of this runtime are bound to.
///
/// Pallets only ever see these through their `Config` traits.
pub mod types {
	use frame_support::generic;

	/// Some way of identifying an account on the chain.
	pub type AccountId = String;

	/// Balance of an account.
	pub type Balance = u128;

	/// The number of a block.
	pub type BlockNumber = u32;

	/// The number of transactions an account has sent.
	pub type Nonce = u32;

	/// Something that can be claimed in the proof of existence pallet.
	pub type Content = String;

	/// Extrinsic type as expected by this runtime.
	pub type Extrinsic = generic::CheckedExtrinsic<AccountId, super::RuntimeCall>;

	/// Header of a block of this runtime.
	pub type Header = generic::Header<BlockNumber>;

	/// Block type as expected by this runtime.
	pub type Block = generic::Block<Header, Extrinsic>;

	pub use frame_system::Call as SystemCall;
	pub use pallet_balances::Call as BalancesCall;
	pub use pallet_ledger::Call as LedgerCall;
	pub use pallet_proof_of_existence::Call as ProofOfExistenceCall;
}

// Composes the runtime by adding all the used pallets and deriving necessary types.
construct_runtime!(
	/// The main runtime type.
	pub struct Runtime {
		/// Mandatory system pallet that should always be included in a FRAME runtime.
		System: frame_system = 0,

		/// Provides the ability to keep track of balances.
		Balances: pallet_balances::{Pallet, Call, Config<T>} = 1,

		/// Lets accounts prove they knew some content at a given block.
		ProofOfExistence: pallet_proof_of_existence::{Pallet, Call, Config<T>} = 2,

		/// Keeps a ledger of notes per account.
		Ledger: pallet_ledger = 3,
	}
);

/// Implements the types required for the system pallet.
impl frame_system::Config for Runtime {
	type AccountId = AccountId;
	type BlockNumber = BlockNumber;
	type Nonce = Nonce;
	type PalletInfo = PalletInfo;
}

// Implements the types required for the balances pallet.
impl pallet_balances::Config for Runtime {
	type Balance = Balance;
}

// Implements the types required for the proof of existence pallet.
impl pallet_proof_of_existence::Config for Runtime {
	type Content = Content;
}

parameter_types! {
	/// Accounts holding less than this cannot record notes in the ledger.
	pub const LedgerMinimumBalance: Balance = 10;
}

/// Configure the ledger pallet, reading balances from the balances pallet.
impl pallet_ledger::Config for Runtime {
	type Currency = Balances;
	type MinimumBalance = LedgerMinimumBalance;
	type MaxNoteLength = ConstU32<256>;
}

/// Executes blocks and extrinsics against the pallets of this runtime.
pub type RuntimeExecutive = frame_executive::Executive<Runtime, Block, AllPalletsWithSystem>;

/// The entry points the node uses to drive the runtime.
impl Runtime {
	/// Execute a whole block, returning the result of each extrinsic.
	pub fn execute_block(block: Block) -> Result<Vec<ApplyExtrinsicResult>, BlockError<BlockNumber>> {
		RuntimeExecutive::execute_block(block)
	}

	/// Start a block without executing any extrinsic.
	pub fn initialize_block(header: &Header) {
		RuntimeExecutive::initialize_block(header)
	}

	/// Apply a single extrinsic to the current block.
	pub fn apply_extrinsic(extrinsic: Extrinsic) -> ApplyExtrinsicResult {
		RuntimeExecutive::apply_extrinsic(extrinsic)
	}

	/// Finish the current block.
	pub fn finalize_block() {
		RuntimeExecutive::finalize_block()
	}

	/// The number of the last executed block.
	pub fn block_number() -> BlockNumber {
		System::block_number()
	}

	/// The nonce of `account`.
	pub fn account_nonce(account: AccountId) -> Nonce {
		System::account_nonce(account)
	}

	/// Build the genesis state from a JSON encoded `RuntimeGenesisConfig`.
	pub fn build_state(config: Vec<u8>) -> Result<(), ConfigurationError> {
		build_state::<RuntimeGenesisConfig>(config)
	}

	/// The JSON encoded genesis config of the preset `id`, or the default config for `None`.
	pub fn get_preset(id: &Option<PresetId>) -> Option<Vec<u8>> {
		get_preset::<RuntimeGenesisConfig>(id.as_deref(), genesis_config_presets::get_preset)
	}

	/// The names of the available genesis presets.
	pub fn preset_names() -> Vec<PresetId> {
		genesis_config_presets::preset_names()
	}

	/// Create the state of a new chain from the genesis preset `id`.
	///
	/// The integrity tests of all pallets are run first.
	pub fn genesis_externalities(id: &str) -> Result<BasicExternalities, ConfigurationError> {
		Self::integrity_test()?;

		let config = Self::get_preset(&Some(id.into()))
			.ok_or_else(|| ConfigurationError::UnknownPreset(id.into()))?;

		let mut ext = BasicExternalities::default();
		ext.execute_with(|| Self::build_state(config))?;
		log::info!(target: LOG_TARGET, "genesis state built from preset `{}`", id);
		Ok(ext)
	}
}
