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

use crate::construct_runtime::Pallet;
use inflector::Inflector;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::Ident;

pub fn expand_outer_config(
	runtime: &Ident,
	pallet_decls: &[Pallet],
	scrate: &TokenStream,
) -> TokenStream {
	let mut fields = TokenStream::new();
	let mut field_names = Vec::new();
	let mut field_types = Vec::new();

	for decl in pallet_decls {
		if let Some(pallet_entry) = decl.find_part("Config") {
			let path = &decl.path;
			let pallet_name = &decl.name;
			let field_name = format_ident!("{}", pallet_name.to_string().to_snake_case());
			let part_is_generic = !pallet_entry.generics.params.is_empty();
			let config = if part_is_generic {
				quote!(#path::GenesisConfig<#runtime>)
			} else {
				quote!(#path::GenesisConfig)
			};

			fields.extend(quote!(pub #field_name: #config,));
			field_names.push(field_name);
			field_types.push(config);
		}
	}

	quote! {
		use #scrate::__private::serde as __genesis_config_serde_import__;

		/// The genesis configuration of the runtime, one field per pallet with a `Config` part.
		#[derive(
			#scrate::__private::serde::Serialize,
			#scrate::__private::serde::Deserialize,
			Default,
		)]
		#[serde(rename_all = "camelCase")]
		#[serde(deny_unknown_fields)]
		#[serde(crate = "__genesis_config_serde_import__")]
		pub struct RuntimeGenesisConfig {
			#fields
		}

		impl #scrate::traits::BuildGenesisConfig for RuntimeGenesisConfig {
			fn build(&self) -> ::core::result::Result<(), #scrate::ConfigurationError> {
				#(
					<#field_types as #scrate::traits::BuildGenesisConfig>::build(&self.#field_names)?;
				)*
				::core::result::Result::Ok(())
			}
		}
	}
}
