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
use proc_macro2::Span;
use syn::{spanned::Spanned, Error};

/// Definition of an error variant.
pub struct VariantDef {
	/// The variant ident.
	pub ident: syn::Ident,
	/// The variant docs.
	pub docs: Vec<syn::Expr>,
	/// The `cfg` and `allow` attributes of the variant.
	pub attrs: Vec<syn::Attribute>,
}

/// This checks error declaration as a enum declaration with only variants without fields nor
/// discriminant.
pub struct ErrorDef {
	/// The attributes of the enum, `#[doc]` and lints.
	pub attrs: Vec<syn::Attribute>,
	/// The visibility of the enum.
	pub vis: syn::Visibility,
	/// The enum ident, usually `Error`.
	pub ident: syn::Ident,
	/// The name of the generic parameter, usually `T`.
	pub generic_param: syn::Ident,
	/// Variants ident, optional field and doc literals (ordered as declaration order)
	pub variants: Vec<VariantDef>,
	/// The span of the pallet::error attribute.
	pub attr_span: Span,
}

impl ErrorDef {
	pub fn try_from(attr_span: Span, item: syn::Item) -> syn::Result<Self> {
		let item = if let syn::Item::Enum(item) = item {
			item
		} else {
			return Err(Error::new(item.span(), "Invalid error, expected item enum"))
		};

		if !matches!(item.vis, syn::Visibility::Public(_)) {
			let msg = "Invalid error, `Error` must be public";
			return Err(Error::new(item.span(), msg))
		}

		let mut type_params = item.generics.type_params();
		let generic_param = match (type_params.next(), type_params.next()) {
			(Some(param), None) if param.bounds.is_empty() => param.ident.clone(),
			_ => {
				let msg = "Invalid error, expected exactly one generic parameter without bounds: \
					`Error<T>`";
				return Err(Error::new(item.generics.span(), msg))
			},
		};
		if item.generics.params.len() != 1 || item.generics.where_clause.is_some() {
			let msg = "Invalid error, expected exactly one generic parameter without bounds: \
				`Error<T>`";
			return Err(Error::new(item.generics.span(), msg))
		}

		if item.variants.len() > u8::MAX as usize + 1 {
			let msg = "Invalid error, an error enum can declare at most 256 variants";
			return Err(Error::new(item.span(), msg))
		}

		let variants = item
			.variants
			.into_iter()
			.map(|variant| {
				if !matches!(variant.fields, syn::Fields::Unit) {
					let msg = "Invalid error, only unit variants are supported";
					return Err(Error::new(variant.fields.span(), msg))
				}
				if let Some((_, discriminant)) = &variant.discriminant {
					let msg = "Invalid error, unexpected discriminant, discriminants are \
						assigned in declaration order";
					return Err(Error::new(discriminant.span(), msg))
				}
				if variant.ident == "__Ignore" {
					let msg = "Invalid error, `__Ignore` is reserved";
					return Err(Error::new(variant.ident.span(), msg))
				}

				let docs = get_doc_literals(&variant.attrs);
				let attrs = variant
					.attrs
					.into_iter()
					.filter(|attr| !attr.path().is_ident("doc"))
					.collect();

				Ok(VariantDef { ident: variant.ident, docs, attrs })
			})
			.collect::<Result<_, _>>()?;

		Ok(ErrorDef {
			attrs: item.attrs,
			vis: item.vis,
			ident: item.ident,
			generic_param,
			variants,
			attr_span,
		})
	}
}
