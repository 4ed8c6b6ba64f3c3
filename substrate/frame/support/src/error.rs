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

//! Errors surfaced to the operator of a runtime rather than to the caller of a dispatchable.

/// A runtime could not be brought into a usable state.
///
/// Returned while building the genesis state or while checking the pallets' constants at
/// startup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
	/// The genesis configuration of a pallet is invalid.
	#[error("invalid genesis configuration for pallet `{pallet}`: {reason}")]
	InvalidGenesis {
		/// Name of the pallet the genesis configuration belongs to.
		pallet: &'static str,
		/// What is wrong with it.
		reason: String,
	},
	/// The genesis configuration could not be deserialized.
	#[error("genesis configuration cannot be deserialized: {0}")]
	Deserialization(String),
	/// A genesis preset with this name does not exist.
	#[error("unknown genesis preset `{0}`")]
	UnknownPreset(String),
	/// A pallet constant or type binding does not satisfy the pallet's requirements.
	#[error("integrity test of pallet `{pallet}` failed: {reason}")]
	IntegrityTest {
		/// Name of the pallet whose integrity test failed.
		pallet: &'static str,
		/// What is wrong with it.
		reason: &'static str,
	},
}

/// The runtime's own bookkeeping is inconsistent.
///
/// This is never caused by the caller of a dispatchable. It is logged, the offending call is
/// aborted and subsequent calls keep being processed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InternalConsistencyError {
	/// A call was routed to a pallet which is not registered in the runtime.
	#[error("call routed to pallet `{pallet}` which is not registered in the runtime")]
	UnregisteredPallet {
		/// Name of the pallet the call targets.
		pallet: &'static str,
	},
}
