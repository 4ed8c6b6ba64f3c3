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

//! Derive macros to derive traits without bounding generic parameters.
//!
//! Only structs are supported. The generated impls carry the where clause of the type and
//! nothing else, so fields such as `Vec<(T::AccountId, T::Balance)>` work without requiring
//! `T` itself to implement the trait.

pub mod clone;
pub mod debug;
pub mod default;
pub mod partial_eq;

use syn::spanned::Spanned;

/// Extract the fields of a struct or return an error naming the derive.
pub(crate) fn struct_fields<'a>(
	input: &'a syn::DeriveInput,
	derive: &str,
) -> syn::Result<&'a syn::Fields> {
	match &input.data {
		syn::Data::Struct(data) => Ok(&data.fields),
		syn::Data::Enum(data) => Err(syn::Error::new(
			data.enum_token.span(),
			format!("`{}` is only supported on structs", derive),
		)),
		syn::Data::Union(data) => Err(syn::Error::new(
			data.union_token.span(),
			format!("`{}` is only supported on structs", derive),
		)),
	}
}

/// The accessor of each field: its name, or its position for tuple structs.
pub(crate) fn field_members(fields: &syn::Fields) -> Vec<syn::Member> {
	fields
		.iter()
		.enumerate()
		.map(|(i, field)| match &field.ident {
			Some(ident) => syn::Member::Named(ident.clone()),
			None => syn::Member::Unnamed(syn::Index { index: i as u32, span: field.span() }),
		})
		.collect()
}
