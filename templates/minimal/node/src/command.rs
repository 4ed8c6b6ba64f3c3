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

use crate::{cli::Cli, demo};
use frame_executive::BlockError;
use frame_support::ConfigurationError;
use runtime::{
	genesis_config_presets::{ALICE, BOB, CHARLIE},
	Balances, BlockNumber, Ledger, ProofOfExistence, Runtime,
};

/// Log target of the node.
const LOG_TARGET: &str = "minimal-node";

/// Errors which stop the node.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The runtime could not be set up.
	#[error(transparent)]
	Configuration(#[from] ConfigurationError),
	/// A block was rejected by the runtime.
	#[error("block rejected: {0}")]
	Block(#[from] BlockError<BlockNumber>),
}

/// Parse and run command line arguments
pub fn run(cli: Cli) -> Result<(), Error> {
	if cli.list_presets {
		for name in Runtime::preset_names() {
			println!("{}", name);
		}
		return Ok(())
	}

	if cli.export_genesis {
		let config = Runtime::get_preset(&Some(cli.preset.clone()))
			.ok_or_else(|| ConfigurationError::UnknownPreset(cli.preset.clone()))?;
		println!("{}", String::from_utf8_lossy(&config));
		return Ok(())
	}

	let mut ext = Runtime::genesis_externalities(&cli.preset)?;

	ext.execute_with(|| -> Result<(), Error> {
		for block in demo::blocks(Runtime::block_number()) {
			let number = block.header.number;
			let results = Runtime::execute_block(block)?;
			let failed = results.iter().filter(|r| !matches!(r, Ok(Ok(())))).count();
			log::info!(
				target: LOG_TARGET,
				"✨ Imported #{} ({} extrinsics, {} failed)",
				number,
				results.len(),
				failed,
			);
		}

		print_state();
		Ok(())
	})
}

fn print_state() {
	println!("Block number: {}", Runtime::block_number());
	for who in [ALICE, BOB, CHARLIE] {
		let account = who.to_string();
		println!(
			"{}: balance {}, nonce {}, {} ledger entries",
			who,
			Balances::balance(&account),
			Runtime::account_nonce(account.clone()),
			Ledger::entries(&account).len(),
		);
	}
	println!("Total issuance: {}", Balances::total_issuance());
	for (content, owner) in ProofOfExistence::claims() {
		println!("Claim {:?} owned by {}", content, owner);
	}
}
