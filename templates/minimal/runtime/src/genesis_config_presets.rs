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

//! Genesis presets of the minimal runtime.

use crate::{AccountId, Balance, Content};
use frame_support::genesis_builder_helper::{
	PresetId, DEV_RUNTIME_PRESET, LOCAL_TESTNET_RUNTIME_PRESET,
};
use serde_json::{json, Value};

/// Account endowed in every preset.
pub const ALICE: &str = "alice";
/// Account endowed in the local testnet preset.
pub const BOB: &str = "bob";
/// Account endowed in the local testnet preset.
pub const CHARLIE: &str = "charlie";

fn account(name: &str) -> AccountId {
	name.into()
}

fn testnet_genesis(
	endowed_accounts: Vec<(AccountId, Balance)>,
	claims: Vec<(Content, AccountId)>,
) -> Value {
	json!({
		"balances": {
			"balances": endowed_accounts,
		},
		"proofOfExistence": {
			"claims": claims,
		},
	})
}

/// Return the development genesis config.
///
/// Only alice is endowed, so she can fund the others.
fn development_config_genesis() -> Value {
	testnet_genesis(vec![(account(ALICE), 100)], vec![])
}

/// Return the local testnet genesis config.
fn local_testnet_genesis() -> Value {
	testnet_genesis(
		[ALICE, BOB, CHARLIE].into_iter().map(|name| (account(name), 1 << 20)).collect(),
		vec![("genesis".into(), account(ALICE))],
	)
}

/// Provides the JSON representation of predefined genesis config for given `id`.
pub fn get_preset(id: &str) -> Option<Vec<u8>> {
	let patch = match id {
		DEV_RUNTIME_PRESET => development_config_genesis(),
		LOCAL_TESTNET_RUNTIME_PRESET => local_testnet_genesis(),
		_ => return None,
	};
	Some(patch.to_string().into_bytes())
}

/// List of supported presets.
pub fn preset_names() -> Vec<PresetId> {
	vec![PresetId::from(DEV_RUNTIME_PRESET), PresetId::from(LOCAL_TESTNET_RUNTIME_PRESET)]
}
