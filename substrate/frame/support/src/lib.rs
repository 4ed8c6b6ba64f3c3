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

//! Support code for the runtime.
//!
//! ## Note on Tuple Traits
//!
//! Many of the traits defined in [`traits`] have auto-implementations on tuples as well. Usually,
//! the tuple is a function of number of pallets in the runtime. By default, the traits are
//! implemented for tuples of up to 64 items.

#![warn(missing_docs)]

extern crate self as tiny_frame_support;

#[doc(hidden)]
pub mod __private {
	pub use codec;
	pub use log;
	pub use paste;
	pub use scale_info;
	pub use serde;
	pub use serde_json;
	pub use sp_crypto_hashing;
	pub use sp_state_machine;
	pub use std::{boxed::Box, vec, vec::Vec};
}

#[macro_use]
pub mod macros;

pub mod dispatch;
mod error;
pub mod generic;
pub mod genesis_builder_helper;
pub mod hash;
pub mod storage;
pub mod traits;

pub use error::{ConfigurationError, InternalConsistencyError};
pub use hash::{Blake2_128Concat, Identity, StorageHasher, Twox64Concat};
pub use storage::{
	types::{OptionQuery, StorageMap, StorageValue, ValueQuery},
	StorageNoopGuard,
};

pub use frame_support_procedural::{
	call, construct_runtime, error, CloneNoBound, DebugNoBound, DefaultNoBound, EqNoBound,
	PartialEqNoBound,
};

/// Log target of the runtime support code.
pub const LOG_TARGET: &str = "runtime::frame-support";

/// A type that cannot be instantiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Never {}

/// Prelude to be used for pallet testing, for ease of use.
pub mod testing_prelude {
	pub use super::{assert_err, assert_noop, assert_ok, assert_storage_noop, parameter_types};
}

/// Prelude to be used alongside pallet macro, for ease of use.
pub mod pallet_prelude {
	pub use crate::{
		dispatch::{BadOrigin, DispatchError, DispatchResult},
		ensure,
		storage::types::{OptionQuery, StorageMap, StorageValue, ValueQuery},
		traits::{
			BaseArithmetic, BuildGenesisConfig, CheckedAdd, CheckedSub, ConstU32, Get, Hooks,
			MaybeSerializeDeserialize, Member, One, Parameter, Saturating, Zero,
		},
		Blake2_128Concat, CloneNoBound, DebugNoBound, DefaultNoBound, EqNoBound, Identity,
		PartialEqNoBound, Twox64Concat,
	};
	pub use codec::{Decode, Encode};
	pub use core::marker::PhantomData;
	pub use scale_info::TypeInfo;
	pub use serde::{Deserialize, Serialize};
}
