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

//! Helper functions for implementing the genesis builder of a runtime.
//!
//! A runtime exposes its genesis configuration as JSON. The helpers here turn such a JSON blob
//! into storage, and resolve named presets.

use crate::{traits::BuildGenesisConfig, ConfigurationError};

/// The name of a genesis preset.
pub type PresetId = String;

/// The default development preset used to communicate with the runtime via
/// [`get_preset`].
pub const DEV_RUNTIME_PRESET: &str = "development";

/// The default local testnet preset used to communicate with the runtime via
/// [`get_preset`].
pub const LOCAL_TESTNET_RUNTIME_PRESET: &str = "local_testnet";

/// Build `GenesisConfig` from a JSON blob not using any defaults and store it in the storage.
///
/// Unknown fields and missing fields are rejected, so a misspelled key in a preset fails loudly
/// instead of being silently ignored.
pub fn build_state<GC: BuildGenesisConfig>(json: Vec<u8>) -> Result<(), ConfigurationError> {
	let gc = serde_json::from_slice::<GC>(&json)
		.map_err(|e| ConfigurationError::Deserialization(e.to_string()))?;
	log::debug!(target: crate::LOG_TARGET, "building genesis state from {} bytes of JSON", json.len());
	gc.build()
}

/// Get the default `GenesisConfig` as a JSON blob if `name` is None.
///
/// Query of named presets is delegated to provided `preset_for_name` closure.
pub fn get_preset<GC>(
	name: Option<&str>,
	preset_for_name: impl FnOnce(&str) -> Option<Vec<u8>>,
) -> Option<Vec<u8>>
where
	GC: BuildGenesisConfig + Default,
{
	name.map(preset_for_name).unwrap_or_else(|| {
		Some(serde_json::to_string(&GC::default()).ok()?.into_bytes())
	})
}
