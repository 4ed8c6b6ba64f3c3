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

use frame_support_procedural_tools::get_doc_literals;
use proc_macro2::{Span, TokenStream};
use quote::ToTokens;
use std::collections::HashSet;
use syn::{
	ext::IdentExt,
	parse::{Parse, ParseStream},
	punctuated::Punctuated,
	spanned::Spanned,
	token, Attribute, Error, Ident, Path, Result, Token,
};

mod keyword {
	syn::custom_keyword!(Pallet);
	syn::custom_keyword!(Call);
	syn::custom_keyword!(Config);
}

/// Declaration of a runtime.
///
/// ```ignore
/// pub struct Runtime {
///     System: frame_system = 0,
///     Balances: pallet_balances::{Pallet, Call, Config<T>},
/// }
/// ```
#[derive(Debug)]
pub struct RuntimeDeclaration {
	pub attrs: Vec<Attribute>,
	pub vis: syn::Visibility,
	pub name: Ident,
	pub pallets: PalletsDeclaration,
}

impl Parse for RuntimeDeclaration {
	fn parse(input: ParseStream) -> Result<Self> {
		let attrs = input.call(Attribute::parse_outer)?;
		if let Some(attr) = attrs.iter().find(|attr| !attr.path().is_ident("doc")) {
			return Err(Error::new(attr.span(), "Only doc attributes are accepted on the runtime"))
		}
		let vis = input.parse()?;
		input.parse::<Token![struct]>()?;
		let name = input.parse()?;
		let pallets = input.parse()?;

		if !input.is_empty() {
			return Err(input.error("Unexpected tokens after the runtime declaration"))
		}

		Ok(Self { attrs, vis, name, pallets })
	}
}

/// The braced list of pallet declarations.
#[derive(Debug)]
pub struct PalletsDeclaration {
	pub pallets: Vec<PalletDeclaration>,
	pub span: Span,
}

impl Parse for PalletsDeclaration {
	fn parse(input: ParseStream) -> Result<Self> {
		let content;
		let brace = syn::braced!(content in input);
		let pallets: Punctuated<PalletDeclaration, Token![,]> =
			content.parse_terminated(PalletDeclaration::parse, Token![,])?;

		Ok(Self { pallets: pallets.into_iter().collect(), span: brace.span.join() })
	}
}

/// The declaration of a pallet, as written in the runtime.
#[derive(Debug, Clone)]
pub struct PalletDeclaration {
	/// Doc literals of the declaration.
	pub docs: Vec<syn::Expr>,
	/// The name of the pallet, e.g.`System` in `System: frame_system`.
	pub name: Ident,
	/// Optional fixed index, e.g. `MyPallet ...  = 3,`.
	pub index: Option<u8>,
	/// The path of the pallet, e.g. `frame_system` in `System: frame_system`.
	pub path: PalletPath,
	/// The declared pallet parts,
	/// e.g. `Some([Pallet, Call])` for `System: system::{Pallet, Call}`
	/// or `None` for `System: system`.
	pub pallet_parts: Option<Vec<PalletPart>>,
}

impl Parse for PalletDeclaration {
	fn parse(input: ParseStream) -> Result<Self> {
		let attrs = input.call(Attribute::parse_outer)?;
		if let Some(attr) = attrs.iter().find(|attr| !attr.path().is_ident("doc")) {
			let msg = "Unsupported attribute, only doc attributes are accepted on pallets";
			return Err(Error::new(attr.span(), msg))
		}
		let docs = get_doc_literals(&attrs);

		let name = input.parse()?;
		let _: Token![:] = input.parse()?;
		let path = input.parse()?;

		// Parse for explicit parts
		let pallet_parts = if input.peek(Token![::]) && input.peek3(token::Brace) {
			let _: Token![::] = input.parse()?;
			Some(parse_pallet_parts(input)?)
		} else if input.peek(Token![::]) {
			return Err(input.error("Unexpected tokens, expected `::{` or `=` or `,`"))
		} else {
			None
		};

		// Parse for pallet index
		let index = if input.peek(Token![=]) {
			input.parse::<Token![=]>()?;
			let index = input.parse::<syn::LitInt>()?;
			let index = index.base10_parse::<u8>().map_err(|_| {
				let msg = format!("Pallet index doesn't fit into u8, index is {}", index);
				Error::new(index.span(), msg)
			})?;
			Some(index)
		} else {
			None
		};

		Ok(Self { docs, name, path, pallet_parts, index })
	}
}

/// A struct representing a path to a pallet. `PalletPath` is almost identical to the standard
/// Rust path with a few restrictions:
/// - No leading colons allowed
/// - Path segments can only consist of identifiers separated by colons
#[derive(Debug, Clone)]
pub struct PalletPath {
	pub inner: Path,
}

impl PalletPath {
	pub fn module_name(&self) -> String {
		self.inner.segments.iter().fold(String::new(), |mut acc, segment| {
			if !acc.is_empty() {
				acc.push_str("::");
			}
			acc.push_str(&segment.ident.to_string());
			acc
		})
	}
}

impl Parse for PalletPath {
	fn parse(input: ParseStream) -> Result<Self> {
		let mut res =
			PalletPath { inner: Path { leading_colon: None, segments: Punctuated::new() } };

		let lookahead = input.lookahead1();
		if lookahead.peek(Token![crate]) ||
			lookahead.peek(Token![self]) ||
			lookahead.peek(Token![super]) ||
			lookahead.peek(Ident)
		{
			let ident = input.call(Ident::parse_any)?;
			res.inner.segments.push(ident.into());
		} else {
			return Err(lookahead.error())
		}

		while input.peek(Token![::]) && input.peek3(Ident) {
			input.parse::<Token![::]>()?;
			let ident = input.parse::<Ident>()?;
			res.inner.segments.push(ident.into());
		}
		Ok(res)
	}
}

impl quote::ToTokens for PalletPath {
	fn to_tokens(&self, tokens: &mut TokenStream) {
		self.inner.to_tokens(tokens);
	}
}

/// Parse [`PalletPart`]'s from a braces enclosed list that is split by commas, e.g.
///
/// `{ Call, Pallet, Config<T> }`
fn parse_pallet_parts(input: ParseStream) -> Result<Vec<PalletPart>> {
	let pallet_parts: ext::Braces<ext::Punctuated<PalletPart, Token![,]>> = input.parse()?;

	let mut resolved = HashSet::new();
	for part in pallet_parts.content.inner.iter() {
		if !resolved.insert(part.name()) {
			let msg = format!(
				"`{}` was already declared before. Please remove the duplicate declaration",
				part.name(),
			);
			return Err(Error::new(part.keyword.span(), msg))
		}
	}

	if !resolved.contains("Pallet") {
		let msg = "`Pallet` part is mandatory, the pallet type is always part of the runtime";
		return Err(Error::new(pallet_parts.span, msg))
	}

	Ok(pallet_parts.content.inner.into_iter().collect())
}

#[derive(Debug, Clone)]
pub enum PalletPartKeyword {
	Pallet(keyword::Pallet),
	Call(keyword::Call),
	Config(keyword::Config),
}

impl Parse for PalletPartKeyword {
	fn parse(input: ParseStream) -> Result<Self> {
		let lookahead = input.lookahead1();

		if lookahead.peek(keyword::Pallet) {
			Ok(Self::Pallet(input.parse()?))
		} else if lookahead.peek(keyword::Call) {
			Ok(Self::Call(input.parse()?))
		} else if lookahead.peek(keyword::Config) {
			Ok(Self::Config(input.parse()?))
		} else {
			Err(lookahead.error())
		}
	}
}

impl PalletPartKeyword {
	/// Returns the name of `Self`.
	fn name(&self) -> &'static str {
		match self {
			Self::Pallet(_) => "Pallet",
			Self::Call(_) => "Call",
			Self::Config(_) => "Config",
		}
	}

	/// Returns `true` if this pallet part is allowed to have generic arguments.
	fn allows_generic(&self) -> bool {
		Self::all_generic_arg().iter().any(|n| *n == self.name())
	}

	/// Returns the names of all pallet parts that allow to have a generic argument.
	fn all_generic_arg() -> &'static [&'static str] {
		&["Config"]
	}
}

impl ToTokens for PalletPartKeyword {
	fn to_tokens(&self, tokens: &mut TokenStream) {
		match self {
			Self::Pallet(inner) => inner.to_tokens(tokens),
			Self::Call(inner) => inner.to_tokens(tokens),
			Self::Config(inner) => inner.to_tokens(tokens),
		}
	}
}

#[derive(Debug, Clone)]
pub struct PalletPart {
	pub keyword: PalletPartKeyword,
	pub generics: syn::Generics,
}

impl Parse for PalletPart {
	fn parse(input: ParseStream) -> Result<Self> {
		let keyword: PalletPartKeyword = input.parse()?;

		let generics: syn::Generics = input.parse()?;
		if !generics.params.is_empty() && !keyword.allows_generic() {
			let valid_generics = PalletPart::format_names(PalletPartKeyword::all_generic_arg());
			let msg = format!(
				"`{}` is not allowed to have generics. \
				 Only the following pallets are allowed to have generics: {}.",
				keyword.name(),
				valid_generics,
			);
			return Err(Error::new(keyword.span(), msg))
		}

		Ok(Self { keyword, generics })
	}
}

impl PalletPart {
	pub fn format_names(names: &[&'static str]) -> String {
		let res: Vec<_> = names.iter().map(|s| format!("`{}`", s)).collect();
		res.join(", ")
	}

	/// The name of this pallet part.
	pub fn name(&self) -> &'static str {
		self.keyword.name()
	}
}

/// The parts assumed when a declaration lists none.
pub fn default_pallet_parts() -> Vec<PalletPart> {
	vec![
		PalletPart {
			keyword: PalletPartKeyword::Pallet(keyword::Pallet(Span::call_site())),
			generics: Default::default(),
		},
		PalletPart {
			keyword: PalletPartKeyword::Call(keyword::Call(Span::call_site())),
			generics: Default::default(),
		},
	]
}

/// Parsing helpers for braces enclosed, comma separated lists.
mod ext {
	use super::*;

	pub struct Braces<P> {
		pub content: P,
		pub span: Span,
	}

	impl<P: Parse> Parse for Braces<P> {
		fn parse(input: ParseStream) -> Result<Self> {
			let content;
			let brace = syn::braced!(content in input);
			Ok(Self { content: content.parse()?, span: brace.span.join() })
		}
	}

	pub struct Punctuated<T, P> {
		pub inner: syn::punctuated::Punctuated<T, P>,
	}

	impl<T: Parse, P: Parse> Parse for Punctuated<T, P> {
		fn parse(input: ParseStream) -> Result<Self> {
			Ok(Self { inner: syn::punctuated::Punctuated::parse_terminated(input)? })
		}
	}
}
