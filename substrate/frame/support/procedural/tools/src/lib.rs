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

//! Proc macro helpers for procedural macros

use proc_macro2::{Span, TokenStream};
use proc_macro_crate::{crate_name, FoundCrate};
use quote::quote;
use syn::{parse::Error, Ident};

/// Package name of the support crate, as written in `Cargo.toml`.
pub const FRAME_SUPPORT: &str = "tiny-frame-support";

/// Package name of the system pallet crate, as written in `Cargo.toml`.
pub const FRAME_SYSTEM: &str = "tiny-frame-system";

/// Generate the crate access for the crate using 2018 syntax.
///
/// A dependency renamed in the caller's manifest is reached under its new name. The crate
/// itself, including its tests and doctests, is reached under its package name, which is why
/// every crate the macros point to declares `extern crate self as <package_name>;`.
pub fn generate_access_from_frame_or_crate(def_crate: &str) -> Result<syn::Path, Error> {
	let ident = match crate_name(def_crate) {
		Ok(FoundCrate::Itself) => {
			let name = def_crate.replace('-', "_");
			Ok(Ident::new(&name, Span::call_site()))
		},
		Ok(FoundCrate::Name(name)) => Ok(Ident::new(&name, Span::call_site())),
		Err(e) => Err(Error::new(Span::call_site(), e)),
	}?;

	Ok(syn::Path::from(ident))
}

/// Path to the support crate or the compile error explaining why it can't be found.
pub fn frame_support_path() -> Result<syn::Path, TokenStream> {
	generate_access_from_frame_or_crate(FRAME_SUPPORT).map_err(|e| e.into_compile_error())
}

/// Path to the system pallet crate or the compile error explaining why it can't be found.
pub fn frame_system_path() -> Result<syn::Path, TokenStream> {
	generate_access_from_frame_or_crate(FRAME_SYSTEM).map_err(|e| e.into_compile_error())
}

// fn to remove white spaces around string types
// (basically whitespaces around tokens)
pub fn clean_type_string(input: &str) -> String {
	input
		.replace(" ::", "::")
		.replace(":: ", "::")
		.replace(" ,", ",")
		.replace(" ;", ";")
		.replace(" [", "[")
		.replace("[ ", "[")
		.replace(" ]", "]")
		.replace(" (", "(")
		.replace("( ", "(")
		.replace(" )", ")")
		.replace(" <", "<")
		.replace("< ", "<")
		.replace(" >", ">")
		.replace("& ", "&")
}

/// Stringified type, as it should appear in generated metadata.
pub fn type_to_string(ty: &syn::Type) -> String {
	clean_type_string(&quote!(#ty).to_string())
}

/// Return all doc attributes literals found.
pub fn get_doc_literals(attrs: &[syn::Attribute]) -> Vec<syn::Expr> {
	attrs
		.iter()
		.filter_map(|attr| {
			if let syn::Meta::NameValue(meta) = &attr.meta {
				meta.path
					.get_ident()
					.filter(|ident| *ident == "doc")
					.map(|_| meta.value.clone())
			} else {
				None
			}
		})
		.collect()
}

/// Return the string content of all doc attributes found, one entry per line.
pub fn get_doc_strings(attrs: &[syn::Attribute]) -> Vec<String> {
	get_doc_literals(attrs)
		.into_iter()
		.filter_map(|expr| match expr {
			syn::Expr::Lit(syn::ExprLit { lit: syn::Lit::Str(s), .. }) => Some(s.value()),
			_ => None,
		})
		.collect()
}
