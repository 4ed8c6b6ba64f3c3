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

//! Implementation of `construct_runtime`.
//!
//! `construct_runtime` implementation is recursive and can generate code which will call
//! itself in order to get all the pallet parts for each pallet. In this implementation the
//! parts are either written explicitly or default to `{Pallet, Call}`, so a single pass
//! is enough:
//! 1 - parse the runtime declaration,
//! 2 - complete the pallets: resolve implicit indices, check names and indices are unique and
//!   the `System` pallet is declared,
//! 3 - expand the runtime type, the pallet aliases, the pallet registry, the outer call and the
//!   genesis configuration.

pub(crate) mod expand;
pub(crate) mod parse;

use frame_support_procedural_tools::{frame_support_path, get_doc_literals};
use parse::{PalletDeclaration, PalletPart, PalletPath, RuntimeDeclaration};
use proc_macro2::TokenStream;
use quote::quote;
use std::collections::HashMap;
use syn::{Ident, Result};

/// The fixed name of the system pallet.
const SYSTEM_PALLET_NAME: &str = "System";

/// A pallet of the runtime, with all the information required for expansion.
#[derive(Debug, Clone)]
pub struct Pallet {
	/// The name of the pallet, e.g.`System` in `System: frame_system`.
	pub name: Ident,
	/// Either automatically inferred, or defined (e.g. `MyPallet ...  = 3,`).
	pub index: u8,
	/// The path of the pallet, e.g. `frame_system` in `System: frame_system`.
	pub path: PalletPath,
	/// The pallet parts to use for the pallet.
	pub pallet_parts: Vec<PalletPart>,
	/// The doc literals
	pub docs: Vec<syn::Expr>,
}

impl Pallet {
	/// Find matching parts
	pub fn find_part(&self, name: &str) -> Option<&PalletPart> {
		self.pallet_parts.iter().find(|part| part.name() == name)
	}

	/// Return whether pallet contains part
	pub fn exists_part(&self, name: &str) -> bool {
		self.find_part(name).is_some()
	}
}

/// The runtime once every pallet has been resolved.
pub struct Runtime {
	pub decl: RuntimeDeclaration,
	pub pallets: Vec<Pallet>,
}

/// Resolve the indices of the pallets and check their names and indices are unique.
pub fn complete_pallets(decl: impl Iterator<Item = PalletDeclaration>) -> Result<Vec<Pallet>> {
	let mut indices = HashMap::new();
	let mut last_index: Option<u8> = None;
	let mut names = HashMap::new();

	decl.map(|pallet| {
		let final_index = match pallet.index {
			Some(i) => i,
			None => last_index.map_or(Some(0), |i| i.checked_add(1)).ok_or_else(|| {
				let msg = "Pallet index doesn't fit into u8, index is 256";
				syn::Error::new(pallet.name.span(), msg)
			})?,
		};

		last_index = Some(final_index);

		if let Some(used_pallet) = indices.insert(final_index, pallet.name.clone()) {
			let msg = format!(
				"Pallet indices are conflicting: Both pallets {} and {} are at index {}",
				used_pallet, pallet.name, final_index,
			);
			let mut err = syn::Error::new(used_pallet.span(), &msg);
			err.combine(syn::Error::new(pallet.name.span(), msg));
			return Err(err)
		}

		if let Some(used_pallet) = names.insert(pallet.name.clone(), pallet.name.span()) {
			let msg = "Two pallets with the same name!";

			let mut err = syn::Error::new(used_pallet, msg);
			err.combine(syn::Error::new(pallet.name.span(), msg));
			return Err(err)
		}

		Ok(Pallet {
			name: pallet.name,
			index: final_index,
			path: pallet.path,
			pallet_parts: pallet.pallet_parts.unwrap_or_else(parse::default_pallet_parts),
			docs: pallet.docs,
		})
	})
	.collect()
}

/// Parse and complete a runtime declaration.
pub fn resolve(input: TokenStream) -> Result<Runtime> {
	let mut decl = syn::parse2::<RuntimeDeclaration>(input)?;
	let pallet_decls = std::mem::take(&mut decl.pallets.pallets);
	let pallets = complete_pallets(pallet_decls.into_iter())?;

	if !pallets.iter().any(|pallet| pallet.name == SYSTEM_PALLET_NAME) {
		return Err(syn::Error::new(
			decl.pallets.span,
			"`System` pallet declaration is missing. \
			 Please add this line: `System: frame_system,`",
		))
	}

	Ok(Runtime { decl, pallets })
}

/// Implementation of `construct_runtime` macro.
pub fn construct_runtime(input: TokenStream) -> TokenStream {
	let runtime = match resolve(input) {
		Ok(runtime) => runtime,
		Err(e) => return e.into_compile_error(),
	};

	match frame_support_path() {
		Ok(scrate) => construct_runtime_final_expansion(runtime, &quote!(#scrate)),
		Err(e) => e,
	}
}

/// Expand a resolved runtime.
pub fn construct_runtime_final_expansion(runtime: Runtime, scrate: &TokenStream) -> TokenStream {
	let Runtime { decl, pallets } = runtime;
	let name = &decl.name;
	let vis = &decl.vis;
	let docs = get_doc_literals(&decl.attrs);

	let system_pallet = pallets
		.iter()
		.find(|pallet| pallet.name == SYSTEM_PALLET_NAME)
		.expect("`System` pallet presence is checked when the runtime is resolved; qed");

	let all_pallets = decl_all_pallets(name, &pallets);
	let pallet_to_index = decl_pallet_runtime_setup(name, &pallets, scrate);
	let outer_origin = expand::expand_outer_origin(name, system_pallet);
	let dispatch = expand::expand_outer_dispatch(name, system_pallet, &pallets, scrate);
	let config = expand::expand_outer_config(name, &pallets, scrate);
	let integrity_test = decl_integrity_test(name, system_pallet, scrate);

	quote!(
		#( #[doc = #docs] )*
		#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
		#vis struct #name;

		#all_pallets

		#pallet_to_index

		#outer_origin

		#dispatch

		#config

		#integrity_test
	)
}

fn decl_all_pallets<'a>(runtime: &'a Ident, pallet_declarations: &'a [Pallet]) -> TokenStream {
	let mut types = TokenStream::new();
	let mut names = Vec::new();

	for pallet_declaration in pallet_declarations {
		let type_name = &pallet_declaration.name;
		let pallet = &pallet_declaration.path;
		let docs = &pallet_declaration.docs;

		types.extend(quote! {
			#( #[doc = #docs] )*
			pub type #type_name = #pallet::Pallet<#runtime>;
		});
		names.push(type_name);
	}

	let without_system = names.iter().filter(|n| **n != SYSTEM_PALLET_NAME).collect::<Vec<_>>();

	quote!(
		#types

		/// All pallets included in the runtime as a nested tuple of types, in declaration order.
		pub type AllPalletsWithSystem = ( #( #names, )* );

		/// All pallets included in the runtime as a nested tuple of types, in declaration order.
		/// Excludes the System pallet.
		pub type AllPalletsWithoutSystem = ( #( #without_system, )* );
	)
}

fn decl_pallet_runtime_setup(
	runtime: &Ident,
	pallet_declarations: &[Pallet],
	scrate: &TokenStream,
) -> TokenStream {
	let names = pallet_declarations.iter().map(|d| &d.name).collect::<Vec<_>>();
	let name_strings = pallet_declarations.iter().map(|d| d.name.to_string());
	let module_names = pallet_declarations.iter().map(|d| d.path.module_name());
	let indices = pallet_declarations.iter().map(|pallet| pallet.index as usize);

	quote!(
		/// Provides an implementation of `PalletInfo` to provide information
		/// about the pallet setup in the runtime.
		pub struct PalletInfo;

		impl #scrate::traits::PalletInfo for PalletInfo {
			fn index<P: 'static>() -> Option<usize> {
				let type_id = core::any::TypeId::of::<P>();
				#(
					if type_id == core::any::TypeId::of::<#names>() {
						return Some(#indices)
					}
				)*

				None
			}

			fn name<P: 'static>() -> Option<&'static str> {
				let type_id = core::any::TypeId::of::<P>();
				#(
					if type_id == core::any::TypeId::of::<#names>() {
						return Some(#name_strings)
					}
				)*

				None
			}

			fn module_name<P: 'static>() -> Option<&'static str> {
				let type_id = core::any::TypeId::of::<P>();
				#(
					if type_id == core::any::TypeId::of::<#names>() {
						return Some(#module_names)
					}
				)*

				None
			}
		}

		impl #runtime {
			/// The pallets of this runtime, in declaration order.
			pub fn pallets() -> #scrate::__private::Vec<#scrate::traits::PalletInfoData> {
				<AllPalletsWithSystem as #scrate::traits::PalletsInfoAccess>::infos()
			}
		}
	)
}

fn decl_integrity_test(runtime: &Ident, system_pallet: &Pallet, scrate: &TokenStream) -> TokenStream {
	let system_path = &system_pallet.path;

	quote!(
		impl #runtime {
			/// Run the `integrity_test` hook of every pallet, in declaration order.
			pub fn integrity_test() -> ::core::result::Result<(), #scrate::ConfigurationError> {
				<
					AllPalletsWithSystem
					as #scrate::traits::Hooks<#system_path::BlockNumberFor<#runtime>>
				>::integrity_test()
			}
		}

	)
}
