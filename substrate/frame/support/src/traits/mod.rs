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

//! Traits for FRAME.
//!
//! NOTE: If you're looking for `parameter_types`, it has moved in to the top-level module.

mod hooks;
pub use hooks::{BuildGenesisConfig, BuildStorage, Hooks};

mod metadata;
pub use metadata::{PalletInfo, PalletInfoAccess, PalletInfoData, PalletsInfoAccess};

mod misc;
pub use misc::{
	BaseArithmetic, ConstBool, ConstU128, ConstU16, ConstU32, ConstU64, ConstU8, Get, IsSubType,
	MaybeSerializeDeserialize, Member, Parameter, TypedGet,
};

mod storage;
pub use storage::StorageInstance;

pub mod tokens;

/// Arithmetic traits the numeric types of a runtime are bounded by.
pub use num_traits::{Bounded, CheckedAdd, CheckedSub, One, Saturating, Zero};
