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

//! Implementation for the pallet item attributes: `#[frame_support::call]` and
//! `#[frame_support::error]`.
//!
//! General workflow:
//! 1 - parse the item using the definitions in `parse::*`. This checks the item is well-formed
//!   without resolving anything.
//! 2 - resolve the paths to the support and system crates from the caller's manifest.
//! 3 - expand from the parsed definition, using `expand::*`.

pub mod expand;
pub mod parse;

use frame_support_procedural_tools::{frame_support_path, frame_system_path};
use proc_macro2::TokenStream;
use syn::spanned::Spanned;

fn ensure_no_attr_args(attr: &TokenStream, name: &str) -> syn::Result<()> {
	if attr.is_empty() {
		Ok(())
	} else {
		let msg = format!("Invalid `{}` attribute: expected no arguments", name);
		Err(syn::Error::new(attr.span(), msg))
	}
}

/// Generate the call enum and its dispatch for an `impl<T: Config> Pallet<T>` block.
pub fn call(attr: TokenStream, item: TokenStream) -> TokenStream {
	let attr_span = attr.span();
	let res = ensure_no_attr_args(&attr, "call")
		.and_then(|_| syn::parse2::<syn::Item>(item))
		.and_then(|item| parse::call::CallDef::try_from(attr_span, item));

	let def = match res {
		Ok(def) => def,
		Err(e) => return e.to_compile_error(),
	};

	let (scrate, frame_system) = match (frame_support_path(), frame_system_path()) {
		(Ok(scrate), Ok(frame_system)) => (scrate, frame_system),
		(Err(e), _) | (_, Err(e)) => return e,
	};

	expand::expand_call(&def, &scrate, &frame_system)
}

/// Complete the error enum of a pallet.
pub fn error(attr: TokenStream, item: TokenStream) -> TokenStream {
	let attr_span = attr.span();
	let res = ensure_no_attr_args(&attr, "error")
		.and_then(|_| syn::parse2::<syn::Item>(item))
		.and_then(|item| parse::error::ErrorDef::try_from(attr_span, item));

	let def = match res {
		Ok(def) => def,
		Err(e) => return e.to_compile_error(),
	};

	match frame_support_path() {
		Ok(scrate) => expand::expand_error(&def, &scrate),
		Err(e) => e,
	}
}
