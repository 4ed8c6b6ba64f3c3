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

//! Traits for working with tokens and their associated datastructures.

use super::BaseArithmetic;

/// Trait for providing balance-inspection access to a fungible asset.
///
/// Other pallets read balances through this trait instead of reaching into the storage of the
/// pallet that owns them.
pub trait Inspect<AccountId> {
	/// Scalar type for representing balance of an account.
	type Balance: BaseArithmetic;

	/// The total amount of issuance in the system.
	fn total_issuance() -> Self::Balance;

	/// Get the balance of `who`.
	fn balance(who: &AccountId) -> Self::Balance;
}
