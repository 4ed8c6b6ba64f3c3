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

//! Generic implementations of the block and extrinsic types the executive works on.

use codec::{Decode, Encode};
use scale_info::TypeInfo;

/// Abstraction over a block header.
///
/// Only the block number is part of it: the runtime has no consensus and no parent hash to
/// check.
#[derive(Encode, Decode, Clone, Copy, PartialEq, Eq, Debug, TypeInfo)]
pub struct Header<Number> {
	/// The block number.
	pub number: Number,
}

impl<Number> Header<Number> {
	/// Create a new header for the block `number`.
	pub fn new(number: Number) -> Self {
		Self { number }
	}
}

/// Abstraction over a substrate block.
#[derive(Encode, Decode, Clone, PartialEq, Eq, Debug, TypeInfo)]
pub struct Block<Header, Extrinsic> {
	/// The block header.
	pub header: Header,
	/// The accompanying extrinsics.
	pub extrinsics: Vec<Extrinsic>,
}

impl<Header, Extrinsic> Block<Header, Extrinsic> {
	/// Create a new block from its header and extrinsics.
	pub fn new(header: Header, extrinsics: Vec<Extrinsic>) -> Self {
		Self { header, extrinsics }
	}
}

/// Definition of something that the external world might want to say; its existence implies
/// that it has been checked and is good, particularly with regards to the signature.
#[derive(Encode, Decode, Clone, PartialEq, Eq, Debug, TypeInfo)]
pub struct CheckedExtrinsic<AccountId, Call> {
	/// Who this purports to be from, if anyone (note this is not a signature).
	pub signed: Option<AccountId>,
	/// The function that should be called.
	pub function: Call,
}

impl<AccountId, Call> CheckedExtrinsic<AccountId, Call> {
	/// An extrinsic signed by `who`.
	pub fn new_signed(function: Call, who: AccountId) -> Self {
		Self { signed: Some(who), function }
	}

	/// An extrinsic without signer.
	pub fn new_unsigned(function: Call) -> Self {
		Self { signed: None, function }
	}
}
