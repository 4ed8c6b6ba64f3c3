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

//! # Executive Module
//!
//! The Executive module acts as the orchestration layer for the runtime. It dispatches incoming
//! extrinsic calls to the respective pallets in the runtime.
//!
//! ## Overview
//!
//! The executive module is not a typical pallet providing functionality around a specific feature.
//! It is a cross-cutting framework component for FRAME. It works in conjunction with the
//! [FRAME System module](../frame_system/index.html) to perform these cross-cutting functions.
//!
//! The Executive module provides functions to:
//!
//! - Check the number of an imported block.
//! - Execute an entire block.
//! - Initialize and finalize a block.
//! - Apply a single extrinsic.
//!
//! ## Usage
//!
//! The default Substrate node template declares the [`Executive`](./struct.Executive.html) type in
//! its library.
//!
//! ```ignore
//! pub type Executive = frame_executive::Executive<Runtime, Block, AllPalletsWithSystem>;
//! ```
//!
//! `AllPalletsWithSystem` is both the set of pallets whose hooks run around the extrinsics of a
//! block and the registry calls are checked against before being dispatched.

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

use core::{fmt::Debug, marker::PhantomData};
use frame_support::{
	dispatch::{
		DispatchErrorWithCall, DispatchOutcome, GetCallMetadata, UnfilteredDispatchable,
	},
	generic::{Block, CheckedExtrinsic, Header},
	traits::{CheckedAdd, Hooks, One, PalletsInfoAccess},
	InternalConsistencyError,
};
use frame_system::{AccountIdFor, BlockNumberFor, OriginFor};

/// Log target of the executive.
pub const LOG_TARGET: &str = "runtime::executive";

/// The result of applying one extrinsic.
///
/// The outer error means the extrinsic was never dispatched because the runtime is inconsistent,
/// the inner one that the dispatch itself failed.
pub type ApplyExtrinsicResult = Result<DispatchOutcome, InternalConsistencyError>;

/// A block could not be executed. Nothing was written.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlockError<BlockNumber: Debug> {
	/// The block does not directly follow the current block.
	#[error("block number {found:?} does not follow the current block {current:?}")]
	InvalidBlockNumber {
		/// The number of the current block.
		current: BlockNumber,
		/// The number in the header of the rejected block.
		found: BlockNumber,
	},
}

/// Main entry point for certain runtime actions as e.g. `execute_block`.
///
/// Generic parameters:
/// - `System`: Something that implements `frame_system::Config`
/// - `Block`: The block type of the runtime
/// - `AllPallets`: Tuple that contains all pallets including frame system pallet. Will be used to
///   call hooks and to check calls are routed to registered pallets.
pub struct Executive<System, Block, AllPallets>(PhantomData<(System, Block, AllPallets)>);

impl<System, Call, AllPallets>
	Executive<
		System,
		Block<Header<BlockNumberFor<System>>, CheckedExtrinsic<AccountIdFor<System>, Call>>,
		AllPallets,
	>
where
	System: frame_system::Config,
	Call: UnfilteredDispatchable<RuntimeOrigin = OriginFor<System>> + GetCallMetadata,
	AllPallets: Hooks<BlockNumberFor<System>> + PalletsInfoAccess,
{
	/// Start the execution of a particular block.
	pub fn initialize_block(header: &Header<BlockNumberFor<System>>) {
		log::trace!(target: LOG_TARGET, "initialize_block({:?})", header.number);
		frame_system::Pallet::<System>::initialize(&header.number);
		AllPallets::on_initialize(header.number);
	}

	/// Apply extrinsic outside of the block execution function.
	///
	/// This doesn't attempt to validate anything regarding the block, but it builds a list of
	/// uncommitted storage changes per call. The nonce of the signer is incremented whether the
	/// call succeeds or not, unless the call targets a pallet that is not registered.
	pub fn apply_extrinsic(
		uxt: CheckedExtrinsic<AccountIdFor<System>, Call>,
	) -> ApplyExtrinsicResult {
		let CheckedExtrinsic { signed, function } = uxt;
		let call = function.get_call_metadata();

		if !AllPallets::contains(call.pallet_name) {
			let err = InternalConsistencyError::UnregisteredPallet { pallet: call.pallet_name };
			log::error!(
				target: LOG_TARGET,
				"{}, `{}` aborted",
				err,
				call.function_name,
			);
			return Err(err)
		}

		if let Some(who) = &signed {
			frame_system::Pallet::<System>::inc_account_nonce(who);
		}

		let outcome = function
			.dispatch_bypass_filter(signed.into())
			.map_err(|error| DispatchErrorWithCall { call, error });
		Ok(outcome)
	}

	/// Finalize the current block, running the `on_finalize` hooks of all pallets.
	pub fn finalize_block() {
		let number = frame_system::Pallet::<System>::block_number();
		log::trace!(target: LOG_TARGET, "finalize_block({:?})", number);
		AllPallets::on_finalize(number);
	}

	/// Actually execute all transitions for `block`.
	///
	/// The block must directly follow the current block, otherwise it is rejected before anything
	/// is written. A failing extrinsic is logged and does not prevent the following ones from
	/// being applied. The results are returned in extrinsic order.
	pub fn execute_block(
		block: Block<Header<BlockNumberFor<System>>, CheckedExtrinsic<AccountIdFor<System>, Call>>,
	) -> Result<Vec<ApplyExtrinsicResult>, BlockError<BlockNumberFor<System>>> {
		let Block { header, extrinsics } = block;
		let current = frame_system::Pallet::<System>::block_number();

		if current.checked_add(&One::one()) != Some(header.number) {
			return Err(BlockError::InvalidBlockNumber { current, found: header.number })
		}

		Self::initialize_block(&header);

		let results = extrinsics
			.into_iter()
			.enumerate()
			.map(|(index, uxt)| {
				let res = Self::apply_extrinsic(uxt);
				match &res {
					Ok(Ok(())) => {},
					Ok(Err(e)) => log::info!(
						target: LOG_TARGET,
						"extrinsic error (block number: {:?}, extrinsic index: {}): {}",
						header.number,
						index,
						e,
					),
					Err(e) => log::error!(
						target: LOG_TARGET,
						"extrinsic not applied (block number: {:?}, extrinsic index: {}): {}",
						header.number,
						index,
						e,
					),
				}
				res
			})
			.collect::<Vec<_>>();

		Self::finalize_block();

		log::debug!(
			target: LOG_TARGET,
			"executed block {:?} with {} extrinsics",
			header.number,
			results.len(),
		);
		Ok(results)
	}
}
