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

//! Dispatch system. Contains the errors and traits that pallet calls and the outer runtime call
//! are dispatched through.

use codec::{Codec, Decode, Encode};
use core::fmt;
use scale_info::TypeInfo;

/// Log target of the dispatch logic.
pub const LOG_TARGET: &str = "runtime::dispatch";

/// Unaugmented version of `Dispatchable` that doesn't check the origin.
pub trait UnfilteredDispatchable {
	/// The origin type of the runtime, (i.e. `frame_system::Config::RuntimeOrigin`).
	type RuntimeOrigin;

	/// Dispatch this call but do not check the filter in origin.
	fn dispatch_bypass_filter(self, origin: Self::RuntimeOrigin) -> DispatchResult;
}

/// Type that can be dispatched with an origin but without checking the origin filter.
///
/// Implemented for pallet dispatchable type by `#[call]` and for runtime dispatchable by
/// `construct_runtime`.
pub trait Callable<T> {
	/// The call type of the pallet.
	type RuntimeCall: UnfilteredDispatchable + Codec + Clone + PartialEq + Eq + fmt::Debug;
}

// dirty hack to work around serde_derive issue
// https://github.com/rust-lang/rust/issues/51331
/// The call type of the pallet `A` in runtime `R`.
pub type CallableCallFor<A, R> = <A as Callable<R>>::RuntimeCall;

/// Gets the function name of the Call.
pub trait GetCallName {
	/// Return all function names in the same order as [`GetCallIndex`].
	fn get_call_names() -> &'static [&'static str];
	/// Return the function name of the Call.
	fn get_call_name(&self) -> &'static str;
}

/// Gets the function index of the Call.
pub trait GetCallIndex {
	/// Return all call indices in the same order as [`GetCallName`].
	fn get_call_indices() -> &'static [u8];
	/// Return the index of this Call.
	fn get_call_index(&self) -> u8;
}

/// The function and pallet name of the Call.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct CallMetadata {
	/// Name of the function.
	pub function_name: &'static str,
	/// Name of the pallet to which the function belongs.
	pub pallet_name: &'static str,
}

/// Gets the metadata for the Call - function name and pallet name.
pub trait GetCallMetadata {
	/// Return all module names.
	fn get_module_names() -> &'static [&'static str];
	/// Return all function names for the given `module`.
	fn get_call_names(module: &str) -> &'static [&'static str];
	/// Return a [`CallMetadata`], containing function and pallet name of the Call.
	fn get_call_metadata(&self) -> CallMetadata;
}

/// An argument of a dispatchable function, as declared.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct ArgMetadata {
	/// Name of the argument.
	pub name: &'static str,
	/// Type of the argument, as written in the declaration.
	pub ty: &'static str,
}

/// A dispatchable function of a pallet, as declared.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct FunctionMetadata {
	/// Name of the function.
	pub name: &'static str,
	/// Index of the matching variant in the encoded call.
	pub index: u8,
	/// The arguments, origin excluded, in declaration order.
	pub args: &'static [ArgMetadata],
	/// Doc comments of the function.
	pub docs: &'static [&'static str],
}

/// Reason why a pallet call failed.
#[derive(Eq, Clone, Copy, Encode, Decode, Debug, TypeInfo)]
pub struct ModuleError {
	/// Module index, matching the metadata module index.
	pub index: u8,
	/// Module specific error value.
	pub error: u8,
	/// Optional error message.
	#[codec(skip)]
	pub message: Option<&'static str>,
}

impl PartialEq for ModuleError {
	fn eq(&self, other: &Self) -> bool {
		(self.index == other.index) && (self.error == other.error)
	}
}

/// Arithmetic errors.
#[derive(Eq, PartialEq, Clone, Copy, Encode, Decode, Debug, TypeInfo)]
pub enum ArithmeticError {
	/// Underflow.
	Underflow,
	/// Overflow.
	Overflow,
	/// Division by zero.
	DivisionByZero,
}

impl ArithmeticError {
	fn as_str(&self) -> &'static str {
		match self {
			Self::Underflow => "An underflow would occur",
			Self::Overflow => "An overflow would occur",
			Self::DivisionByZero => "Division by zero",
		}
	}
}

/// Errors related to transactional storage layers.
#[derive(Eq, PartialEq, Clone, Copy, Encode, Decode, Debug, TypeInfo)]
pub enum TransactionalError {
	/// Too many transactional layers have been spawned.
	LimitReached,
	/// A transactional layer was expected, but does not exist.
	NoLayer,
}

impl TransactionalError {
	fn as_str(&self) -> &'static str {
		match self {
			Self::LimitReached => "Too many transactional layers have been spawned",
			Self::NoLayer => "A transactional layer was expected, but does not exist",
		}
	}
}

/// Reason why a dispatch call failed.
#[derive(Eq, Clone, Copy, Encode, Decode, Debug, TypeInfo, PartialEq)]
pub enum DispatchError {
	/// Some error occurred.
	Other(
		#[codec(skip)]
		&'static str,
	),
	/// Bad origin.
	BadOrigin,
	/// A custom error in a module.
	Module(ModuleError),
	/// An arithmetic error.
	Arithmetic(ArithmeticError),
	/// The number of transactional layers has been reached, or we are not in a transactional
	/// layer.
	Transactional(TransactionalError),
	/// A call was dispatched while another dispatch of the same runtime was in progress.
	Reentrancy,
}

impl DispatchError {
	/// Return the same error but without the attached message.
	pub fn stripped(self) -> Self {
		match self {
			DispatchError::Module(ModuleError { index, error, message: Some(_) }) =>
				DispatchError::Module(ModuleError { index, error, message: None }),
			m => m,
		}
	}
}

impl From<&'static str> for DispatchError {
	fn from(err: &'static str) -> DispatchError {
		DispatchError::Other(err)
	}
}

impl From<ArithmeticError> for DispatchError {
	fn from(e: ArithmeticError) -> DispatchError {
		Self::Arithmetic(e)
	}
}

impl From<TransactionalError> for DispatchError {
	fn from(e: TransactionalError) -> DispatchError {
		Self::Transactional(e)
	}
}

impl From<DispatchError> for &'static str {
	fn from(err: DispatchError) -> &'static str {
		use DispatchError::*;
		match err {
			Other(msg) => msg,
			BadOrigin => "Bad origin",
			Module(ModuleError { message, .. }) => message.unwrap_or("Unknown module error"),
			Arithmetic(e) => e.as_str(),
			Transactional(e) => e.as_str(),
			Reentrancy => "Re-entrant dispatch",
		}
	}
}

impl fmt::Display for DispatchError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Module(ModuleError { index, error, message }) => {
				write!(f, "module error (index: {}, error: {})", index, error)?;
				if let Some(message) = message {
					write!(f, ": {}", message)?;
				}
				Ok(())
			},
			other => f.write_str(<&'static str>::from(*other)),
		}
	}
}

impl std::error::Error for DispatchError {}

/// An error type that indicates that the origin is invalid.
#[derive(Encode, Decode, Clone, Copy, PartialEq, Eq, Debug, TypeInfo)]
pub struct BadOrigin;

impl From<BadOrigin> for DispatchError {
	fn from(_: BadOrigin) -> DispatchError {
		DispatchError::BadOrigin
	}
}

impl From<BadOrigin> for &'static str {
	fn from(_: BadOrigin) -> &'static str {
		"Bad origin"
	}
}

/// The return type of a dispatchable function.
pub type DispatchResult = Result<(), DispatchError>;

/// A [`DispatchError`] together with the call that produced it.
#[derive(Eq, PartialEq, Clone, Copy, Debug)]
pub struct DispatchErrorWithCall {
	/// The call that failed.
	pub call: CallMetadata,
	/// The error the call failed with.
	pub error: DispatchError,
}

impl fmt::Display for DispatchErrorWithCall {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}::{} failed: {}", self.call.pallet_name, self.call.function_name, self.error)
	}
}

impl std::error::Error for DispatchErrorWithCall {}

/// The outcome of routing one call through the runtime.
pub type DispatchOutcome = Result<(), DispatchErrorWithCall>;

environmental::environmental!(dispatching: bool);

/// Run `f` as the dispatch of a call.
///
/// Only one dispatch can be in progress at a time: calling this from within `f` does not run the
/// nested closure and returns [`DispatchError::Reentrancy`] instead, leaving the state untouched.
pub fn dispatch_guarded<F: FnOnce() -> DispatchResult>(f: F) -> DispatchResult {
	dispatching::using_once(&mut false, || {
		let entered = dispatching::with(|in_dispatch| !core::mem::replace(in_dispatch, true))
			.expect("`using_once` sets the value for the duration of this closure; qed");

		if !entered {
			log::warn!(target: LOG_TARGET, "rejected re-entrant dispatch");
			return Err(DispatchError::Reentrancy)
		}

		let res = f();
		dispatching::with(|in_dispatch| *in_dispatch = false);
		res
	})
}
