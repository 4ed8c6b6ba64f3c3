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

/// Derive Debug but do not bound any generics.
pub fn derive_debug_no_bound(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
	let input = syn::parse_macro_input!(input as syn::DeriveInput);

	let fields = match struct_fields(&input, "DebugNoBound") {
		Ok(fields) => fields,
		Err(e) => return e.to_compile_error().into(),
	};

	let input_ident = &input.ident;
	let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

	let members = field_members(fields);
	let impl_ = match fields {
		syn::Fields::Named(_) => {
			let fields = members.iter().map(|member| {
				let name = match member {
					syn::Member::Named(ident) => ident.to_string(),
					syn::Member::Unnamed(index) => index.index.to_string(),
				};
				quote::quote!( .field(#name, &self.#member) )
			});

			quote::quote!(
				fmt.debug_struct(stringify!(#input_ident))
					#( #fields )*
					.finish()
			)
		},
		syn::Fields::Unnamed(_) => {
			let fields = members.iter().map(|member| quote::quote!( .field(&self.#member) ));

			quote::quote!(
				fmt.debug_tuple(stringify!(#input_ident))
					#( #fields )*
					.finish()
			)
		},
		syn::Fields::Unit => quote::quote!(fmt.write_str(stringify!(#input_ident))),
	};

	quote::quote!(
		const _: () = {
			#[automatically_derived]
			impl #impl_generics ::core::fmt::Debug for #input_ident #ty_generics #where_clause {
				fn fmt(&self, fmt: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
					#impl_
				}
			}
		};
	)
	.into()
}
