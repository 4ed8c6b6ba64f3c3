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

//! Traits relating to pallet hooks.
//!
//! See [`Hooks`] as the main entry-point.

use crate::ConfigurationError;
use impl_trait_for_tuples::impl_for_tuples;
use sp_state_machine::TestExternalities;

/// The pallet hooks trait. This is merely an umbrella trait for the hooks a pallet can define.
///
/// The hooks of all pallets are called by the executive in the order the pallets are declared
/// in `construct_runtime!`:
///
/// ```text
/// initialize_block:  on_initialize (all pallets)
/// apply_extrinsic:   dispatch of each extrinsic
/// finalize_block:    on_finalize (all pallets)
/// ```
///
/// `integrity_test` is not part of block execution. It is run once by the runtime before the
/// first block and in the test generated by `construct_runtime!`.
pub trait Hooks<BlockNumber> {
	/// Block initialization hook. This is called at the very beginning of block execution.
	fn on_initialize(_n: BlockNumber) {}

	/// Block finalization hook. This is called at the very end of block execution.
	fn on_finalize(_n: BlockNumber) {}

	/// Check the integrity of this pallet's configuration.
	///
	/// Any code located in this hook is placed in an auto-generated test, and generated as a part
	/// of `construct_runtime!`'s expansion. Look for a test case with a name along the lines of:
	/// `__construct_runtime_integrity_test`.
	///
	/// This hook is the location where the values/types provided to the `Config` trait
	/// of the pallet can be tested for correctness. For example, if two `type Foo: Get<u32>` and
	/// `type Bar: Get<u32>` where `Foo::get()` must always be greater than `Bar::get()`, such
	/// checks can be asserted upon here.
	fn integrity_test() -> Result<(), ConfigurationError> {
		Ok(())
	}
}

#[impl_for_tuples(64)]
impl<BlockNumber: Clone> Hooks<BlockNumber> for Tuple {
	fn on_initialize(n: BlockNumber) {
		for_tuples!( #( Tuple::on_initialize(n.clone()); )* );
	}

	fn on_finalize(n: BlockNumber) {
		for_tuples!( #( Tuple::on_finalize(n.clone()); )* );
	}

	fn integrity_test() -> Result<(), ConfigurationError> {
		for_tuples!( #( Tuple::integrity_test()?; )* );
		Ok(())
	}
}

/// A trait to define the build function of a genesis config for both runtime and pallets.
pub trait BuildGenesisConfig: Default + super::MaybeSerializeDeserialize {
	/// The build function puts initial `GenesisConfig` keys/values pairs into the storage.
	fn build(&self) -> Result<(), ConfigurationError>;
}

/// Complex storage builder stuff.
pub trait BuildStorage {
	/// Build the storage out of this builder.
	fn build_storage(&self) -> Result<TestExternalities, ConfigurationError>;
}

impl<GC: BuildGenesisConfig> BuildStorage for GC {
	fn build_storage(&self) -> Result<TestExternalities, ConfigurationError> {
		let mut ext = TestExternalities::default();
		ext.execute_with(|| self.build())?;
		Ok(ext)
	}
}
