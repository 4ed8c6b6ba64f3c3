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

//! The blocks executed by the node.

use runtime::{
	genesis_config_presets::{ALICE, BOB, CHARLIE},
	AccountId, Block, BlockNumber, Extrinsic, Header, RuntimeCall,
};

fn account(name: &str) -> AccountId {
	name.into()
}

fn signed(who: &str, call: impl Into<RuntimeCall>) -> Extrinsic {
	Extrinsic::new_signed(call.into(), account(who))
}

fn transfer(to: &str, amount: u128) -> runtime::BalancesCall<runtime::Runtime> {
	runtime::BalancesCall::transfer { to: account(to), amount }
}

fn create_claim(claim: &str) -> runtime::ProofOfExistenceCall<runtime::Runtime> {
	runtime::ProofOfExistenceCall::create_claim { claim: claim.into() }
}

fn revoke_claim(claim: &str) -> runtime::ProofOfExistenceCall<runtime::Runtime> {
	runtime::ProofOfExistenceCall::revoke_claim { claim: claim.into() }
}

fn record(note: &str) -> runtime::LedgerCall<runtime::Runtime> {
	runtime::LedgerCall::record { note: note.as_bytes().to_vec() }
}

/// The demo blocks, to be executed on top of block `parent`.
///
/// Alice funds bob and charlie, then claims some content. Bob's claim of the same content fails
/// until alice revokes hers. Finally alice and bob leave a note in the ledger.
pub fn blocks(parent: BlockNumber) -> Vec<Block> {
	let content = "Hello, world!";
	vec![
		Block::new(
			Header::new(parent + 1),
			vec![signed(ALICE, transfer(BOB, 20)), signed(ALICE, transfer(CHARLIE, 20))],
		),
		Block::new(
			Header::new(parent + 2),
			vec![signed(ALICE, create_claim(content)), signed(BOB, create_claim(content))],
		),
		Block::new(
			Header::new(parent + 3),
			vec![signed(ALICE, revoke_claim(content)), signed(BOB, create_claim(content))],
		),
		Block::new(
			Header::new(parent + 4),
			vec![signed(ALICE, record("funded bob and charlie")), signed(BOB, record("claimed"))],
		),
	]
}
