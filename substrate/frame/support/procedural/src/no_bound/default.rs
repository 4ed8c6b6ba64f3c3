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

use super::{field_members, struct_fields};
use syn::spanned::Spanned;

/// Derive Default but do not bound any generic.
pub fn derive_default_no_bound(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
	let input = syn::parse_macro_input!(input as syn::DeriveInput);

	let fields = match struct_fields(&input, "DefaultNoBound") {
		Ok(fields) => fields,
		Err(e) => return e.to_compile_error().into(),
	};

	let name = &input.ident;
	let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

	let members = field_members(fields);
	let impl_ = match fields {
		syn::Fields::Named(_) => {
			let fields = members.iter().map(|member| {
				quote::quote_spanned!(member.span() =>
					#member: ::core::default::Default::default()
				)
			});
			quote::quote!( Self { #( #fields, )* } )
		},
		syn::Fields::Unnamed(_) => {
			let fields = members
				.iter()
				.map(|member| quote::quote_spanned!(member.span() => ::core::default::Default::default()));
			quote::quote!( Self ( #( #fields, )* ) )
		},
		syn::Fields::Unit => quote::quote!(Self),
	};

	quote::quote!(
		const _: () = {
			#[automatically_derived]
			impl #impl_generics ::core::default::Default for #name #ty_generics #where_clause {
				fn default() -> Self {
					#impl_
				}
			}
		};
	)
	.into()
}
