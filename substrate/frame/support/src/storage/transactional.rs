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

//! Provides functionality around the transaction storage.
//!
//! Transactional storage provides functionality to run an entire code block
//! in a storage transaction. This means that either the entire changes to the
//! storage are committed or everything is thrown away. This simplifies the
//! writing of functionality that may bail at any point when operating on the
//! storage.

use crate::dispatch::{DispatchError, TransactionalError};
use sp_state_machine::with_externalities;

/// The type that is being used to store the current number of active layers.
pub type Layer = u32;

/// The maximum number of nested layers.
pub const TRANSACTIONAL_LIMIT: Layer = 255;

/// Describes on what should happen with a storage transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionOutcome<R> {
	/// Commit the transaction.
	Commit(R),
	/// Rollback the transaction.
	Rollback(R),
}

impl<R> TransactionOutcome<R> {
	/// Convert into the inner type.
	pub fn into_inner(self) -> R {
		match self {
			Self::Commit(r) => r,
			Self::Rollback(r) => r,
		}
	}
}

/// Returns the current number of nested transactional layers.
pub fn get_transaction_level() -> Layer {
	with_externalities(|ext| ext.transaction_depth() as Layer).expect(
		"`get_transaction_level` cannot be called outside of an Externalities-provided \
		 environment.",
	)
}

/// Check if the current call is within a transactional layer.
pub fn is_transactional() -> bool {
	get_transaction_level() > 0
}

/// Return an error if the current call is not within a transactional layer.
///
/// Functions that must only run as part of a dispatch, where a failure rolls back every change
/// they made, call this first.
pub fn require_transaction() -> Result<(), DispatchError> {
	if is_transactional() {
		Ok(())
	} else {
		Err(TransactionalError::NoLayer.into())
	}
}

fn start_transaction() {
	with_externalities(|ext| ext.storage_start_transaction()).expect(
		"`start_transaction` cannot be called outside of an Externalities-provided environment.",
	)
}

fn rollback_transaction() {
	with_externalities(|ext| ext.storage_rollback_transaction())
		.expect(
			"`rollback_transaction` cannot be called outside of an Externalities-provided \
			 environment.",
		)
		.expect("A transaction was started by `with_transaction` before; qed");
}

fn commit_transaction() {
	with_externalities(|ext| ext.storage_commit_transaction())
		.expect(
			"`commit_transaction` cannot be called outside of an Externalities-provided \
			 environment.",
		)
		.expect("A transaction was started by `with_transaction` before; qed");
}

/// Execute the supplied function in a new storage transaction.
///
/// All changes to storage performed by the supplied function are discarded if the returned
/// outcome is `TransactionOutcome::Rollback`.
///
/// Transactions can be nested up to `TRANSACTIONAL_LIMIT` times; more than that will result in an
/// error.
///
/// Commits happen to the parent transaction.
pub fn with_transaction<T, E, F>(f: F) -> Result<T, E>
where
	E: From<DispatchError>,
	F: FnOnce() -> TransactionOutcome<Result<T, E>>,
{
	if get_transaction_level() >= TRANSACTIONAL_LIMIT {
		log::warn!(
			target: crate::LOG_TARGET,
			"refusing to open a storage layer beyond the limit of {}",
			TRANSACTIONAL_LIMIT,
		);
		return Err(E::from(TransactionalError::LimitReached.into()))
	}

	start_transaction();

	match f() {
		TransactionOutcome::Commit(res) => {
			commit_transaction();
			res
		},
		TransactionOutcome::Rollback(res) => {
			rollback_transaction();
			res
		},
	}
}

/// Execute the supplied function, adding a new storage layer.
///
/// This is the same as `with_transaction`, but assuming that any function returning an `Err` should
/// rollback, and any function returning `Ok` should commit. This provides a cleaner API to the
/// developer who wants this behavior.
pub fn with_storage_layer<T, E, F>(f: F) -> Result<T, E>
where
	E: From<DispatchError>,
	F: FnOnce() -> Result<T, E>,
{
	with_transaction(|| {
		let r = f();
		if r.is_ok() {
			TransactionOutcome::Commit(r)
		} else {
			TransactionOutcome::Rollback(r)
		}
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{assert_noop, assert_ok, dispatch::DispatchResult, storage::unhashed};
	use sp_state_machine::TestExternalities;

	#[test]
	fn is_transactional_should_return_false() {
		TestExternalities::default().execute_with(|| {
			assert!(!is_transactional());
			assert_eq!(require_transaction(), Err(TransactionalError::NoLayer.into()));
		});
	}

	#[test]
	fn is_transactional_should_not_error_in_with_transaction() {
		TestExternalities::default().execute_with(|| {
			assert_ok!(with_transaction(|| -> TransactionOutcome<DispatchResult> {
				assert!(is_transactional());
				TransactionOutcome::Commit(Ok(()))
			}));

			assert_noop!(
				with_transaction(|| -> TransactionOutcome<DispatchResult> {
					assert!(is_transactional());
					TransactionOutcome::Rollback(Err("revert".into()))
				}),
				"revert"
			);
		});
	}

	fn recursive_transactional(num: u32) -> DispatchResult {
		if num == 0 {
			return Ok(())
		}

		with_transaction(|| -> TransactionOutcome<DispatchResult> {
			let res = recursive_transactional(num - 1);
			TransactionOutcome::Commit(res)
		})
	}

	#[test]
	fn transaction_limit_should_work() {
		TestExternalities::default().execute_with(|| {
			assert_eq!(get_transaction_level(), 0);

			assert_ok!(with_transaction(|| -> TransactionOutcome<DispatchResult> {
				assert_eq!(get_transaction_level(), 1);
				TransactionOutcome::Commit(Ok(()))
			}));

			assert_ok!(with_transaction(|| -> TransactionOutcome<DispatchResult> {
				assert_eq!(get_transaction_level(), 1);
				let res = with_transaction(|| -> TransactionOutcome<DispatchResult> {
					assert_eq!(get_transaction_level(), 2);
					TransactionOutcome::Commit(Ok(()))
				});
				TransactionOutcome::Commit(res)
			}));

			assert_ok!(recursive_transactional(255));
			assert_noop!(
				recursive_transactional(256),
				DispatchError::Transactional(TransactionalError::LimitReached)
			);

			assert_eq!(get_transaction_level(), 0);
		});
	}

	#[test]
	fn with_storage_layer_commits_on_ok_and_discards_on_err() {
		TestExternalities::default().execute_with(|| {
			assert_ok!(with_storage_layer(|| -> DispatchResult {
				unhashed::put(b"kept", &1u8);
				Ok(())
			}));
			assert_eq!(unhashed::get::<u8>(b"kept"), Some(1));

			assert_noop!(
				with_storage_layer(|| -> DispatchResult {
					unhashed::put(b"dropped", &1u8);
					unhashed::kill(b"kept");
					Err("nope".into())
				}),
				"nope"
			);
			assert_eq!(unhashed::get::<u8>(b"kept"), Some(1));
		});
	}

	#[test]
	fn nested_rollback_keeps_outer_changes() {
		TestExternalities::default().execute_with(|| {
			assert_ok!(with_storage_layer(|| -> DispatchResult {
				unhashed::put(b"outer", &1u8);
				let inner = with_storage_layer(|| -> DispatchResult {
					unhashed::put(b"inner", &1u8);
					Err("inner failed".into())
				});
				assert!(inner.is_err());
				Ok(())
			}));

			assert!(unhashed::exists(b"outer"));
			assert!(!unhashed::exists(b"inner"));
		});
	}
}
