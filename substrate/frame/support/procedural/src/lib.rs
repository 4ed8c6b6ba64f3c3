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

//! Proc macro of Support code for the runtime.

#![recursion_limit = "512"]

mod construct_runtime;
mod no_bound;
mod pallet;

use proc_macro::TokenStream;

/// Construct a runtime, with the given name and the given pallets.
///
/// # Example:
///
/// ```ignore
/// construct_runtime!(
///     pub struct Runtime {
///         System: frame_system::{Pallet, Call, Config<T>} = 0,
///         Balances: pallet_balances::{Pallet, Call, Config<T>},
///
///         // Without parts, the pallet uses `{Pallet, Call}`.
///         Ledger: pallet_ledger,
///     }
/// );
/// ```
///
/// Each pallet is declared as such:
/// * `Identifier`: name given to the pallet that uniquely identifies it.
///
/// * `:`: colon separator
///
/// * `path::to::pallet`: identifiers separated by colons which declare the path to a pallet
///   definition.
///
/// * `::{ Part1, Part2<T>, .. }` optional: comma separated parts declared with their generic.
///   Parts default to `{Pallet, Call}`. We provide support for the following module parts in a
///   pallet:
///
///   - `Pallet` - Required for all pallets
///   - `Call` - If the pallet has callable functions
///   - `Config` or `Config<T>` (if the config is generic) - If the pallet builds the genesis
///     storage with `GenesisConfig`
///
/// * `= $n` optional: number to define at which index the pallet variant in `RuntimeCall` is
///   encoded, and to define the `PalletInfo` index.
///
///   if `= $n` is not given, then index is resolved in the same way as fieldless enum in Rust
///   (i.e. incrementedly from previous index):
///   ```nocompile
///   pallet1 .. = 2,
///   pallet2 .., // Here pallet2 is given index 3
///   pallet3 .. = 0,
///   pallet4 .., // Here pallet4 is given index 1
///   ```
///
/// # Note
///
/// The population of the genesis storage depends on the order of pallets. So, if one of your
/// pallets depends on another pallet, the pallet that is depended upon needs to come before
/// the pallet depending on it.
///
/// # Type definitions
///
/// * The macro generates a type alias for each pallet to their `Pallet`. E.g. `type System =
///   frame_system::Pallet<Runtime>`
/// * `RuntimeCall`, `RuntimeOrigin`, `PalletInfo`, `AllPalletsWithSystem`,
///   `AllPalletsWithoutSystem` and, if any pallet declares a `Config` part,
///   `RuntimeGenesisConfig`.
#[proc_macro]
pub fn construct_runtime(input: TokenStream) -> TokenStream {
	construct_runtime::construct_runtime(input.into()).into()
}

/// Declare the dispatchable functions of a pallet.
///
/// Attached to an `impl<T: Config> Pallet<T>` block. Every method must be `pub`, take an
/// `OriginFor<T>` first and return `DispatchResult`. The macro generates the `Call<T>` enum with
/// one variant per method, its encoding indices, dispatch and metadata.
///
/// Indices are set with `#[call_index(n)]`, otherwise they follow the previous index.
///
/// Docs at [`frame_support::call`](../frame_support/attr.call.html).
#[proc_macro_attribute]
pub fn call(attr: TokenStream, item: TokenStream) -> TokenStream {
	pallet::call(attr.into(), item.into()).into()
}

/// Declare the error enum of a pallet, `Error<T>`.
///
/// Docs at [`frame_support::error`](../frame_support/attr.error.html).
#[proc_macro_attribute]
pub fn error(attr: TokenStream, item: TokenStream) -> TokenStream {
	pallet::error(attr.into(), item.into()).into()
}

/// Derive [`Clone`] but do not bound any generic.
///
/// Docs at [`frame_support::CloneNoBound`](../frame_support/derive.CloneNoBound.html).
#[proc_macro_derive(CloneNoBound)]
pub fn derive_clone_no_bound(input: TokenStream) -> TokenStream {
	no_bound::clone::derive_clone_no_bound(input)
}

/// Derive [`Debug`] but do not bound any generics.
///
/// Docs at [`frame_support::DebugNoBound`](../frame_support/derive.DebugNoBound.html).
#[proc_macro_derive(DebugNoBound)]
pub fn derive_debug_no_bound(input: TokenStream) -> TokenStream {
	no_bound::debug::derive_debug_no_bound(input)
}

/// Derive [`PartialEq`] but do not bound any generic.
///
/// Docs at [`frame_support::PartialEqNoBound`](../frame_support/derive.PartialEqNoBound.html).
#[proc_macro_derive(PartialEqNoBound)]
pub fn derive_partial_eq_no_bound(input: TokenStream) -> TokenStream {
	no_bound::partial_eq::derive_partial_eq_no_bound(input)
}

/// DeriveEq but do no bound any generic.
///
/// Docs at [`frame_support::EqNoBound`](../frame_support/derive.EqNoBound.html).
#[proc_macro_derive(EqNoBound)]
pub fn derive_eq_no_bound(input: TokenStream) -> TokenStream {
	let input: syn::DeriveInput = match syn::parse(input) {
		Ok(input) => input,
		Err(e) => return e.to_compile_error().into(),
	};

	let name = &input.ident;
	let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

	quote::quote_spanned!(name.span() =>
		const _: () = {
			impl #impl_generics ::core::cmp::Eq for #name #ty_generics #where_clause {}
		};
	)
	.into()
}

/// derive `Default` but do no bound any generic.
///
/// Docs at [`frame_support::DefaultNoBound`](../frame_support/derive.DefaultNoBound.html).
#[proc_macro_derive(DefaultNoBound)]
pub fn derive_default_no_bound(input: TokenStream) -> TokenStream {
	no_bound::default::derive_default_no_bound(input)
}
