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

use crate::pallet::parse::error::ErrorDef;
use proc_macro2::TokenStream;
use quote::quote_spanned;

/// * add a hidden variant `__Ignore` holding the phantom type,
/// * impl `Debug`, `Clone`, `PartialEq`, `Eq` without bounds on the generic,
/// * impl `as_str`, `index` and `error_names`,
/// * impl `From<Error>` for `&'static str` and for `DispatchError`.
pub fn expand_error(def: &ErrorDef, scrate: &syn::Path) -> TokenStream {
	let span = def.attr_span;
	let attrs = &def.attrs;
	let vis = &def.vis;
	let ident = &def.ident;
	let generic_param = &def.generic_param;

	let variant_ident = def.variants.iter().map(|v| &v.ident).collect::<Vec<_>>();
	let variant_str = variant_ident.iter().map(|v| v.to_string()).collect::<Vec<_>>();
	let variant_docs = def.variants.iter().map(|v| &v.docs).collect::<Vec<_>>();
	let variant_attrs = def.variants.iter().map(|v| &v.attrs).collect::<Vec<_>>();
	let variant_index = (0..def.variants.len()).map(|i| i as u8).collect::<Vec<_>>();

	quote_spanned!(span =>
		#( #attrs )*
		#[derive(
			#scrate::__private::codec::Encode,
			#scrate::__private::codec::Decode,
			#scrate::__private::scale_info::TypeInfo,
		)]
		#[codec(crate = #scrate::__private::codec)]
		#[codec(encode_bound())]
		#[codec(decode_bound())]
		#[scale_info(crate = #scrate::__private::scale_info, skip_type_params(#generic_param))]
		#vis enum #ident<#generic_param> {
			#[doc(hidden)]
			#[codec(skip)]
			__Ignore(::core::marker::PhantomData<(#generic_param,)>, #scrate::Never),
			#(
				#( #[doc = #variant_docs] )*
				#( #variant_attrs )*
				#[codec(index = #variant_index)]
				#variant_ident,
			)*
		}

		impl<#generic_param> #ident<#generic_param> {
			/// Name of the error variant.
			pub fn as_str(&self) -> &'static str {
				match self {
					Self::__Ignore(_, __never) => match *__never {},
					#( Self::#variant_ident => #variant_str, )*
				}
			}

			/// Index of the error variant, in declaration order.
			pub fn index(&self) -> u8 {
				match self {
					Self::__Ignore(_, __never) => match *__never {},
					#( Self::#variant_ident => #variant_index, )*
				}
			}

			/// Names of all error variants, in declaration order.
			pub fn error_names() -> &'static [&'static str] {
				&[ #( #variant_str, )* ]
			}
		}

		impl<#generic_param> ::core::fmt::Debug for #ident<#generic_param> {
			fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
				f.write_str(self.as_str())
			}
		}

		impl<#generic_param> ::core::clone::Clone for #ident<#generic_param> {
			fn clone(&self) -> Self {
				match self {
					Self::__Ignore(_, __never) => match *__never {},
					#( Self::#variant_ident => Self::#variant_ident, )*
				}
			}
		}

		impl<#generic_param> ::core::cmp::PartialEq for #ident<#generic_param> {
			fn eq(&self, other: &Self) -> bool {
				self.index() == other.index()
			}
		}

		impl<#generic_param> ::core::cmp::Eq for #ident<#generic_param> {}

		impl<#generic_param> From<#ident<#generic_param>> for &'static str {
			fn from(err: #ident<#generic_param>) -> &'static str {
				err.as_str()
			}
		}

		impl<#generic_param: Config> From<#ident<#generic_param>>
			for #scrate::dispatch::DispatchError
		{
			fn from(err: #ident<#generic_param>) -> Self {
				let index = <Pallet<#generic_param> as #scrate::traits::PalletInfoAccess>::index();

				#scrate::dispatch::DispatchError::Module(#scrate::dispatch::ModuleError {
					index: index as u8,
					error: err.index(),
					message: Some(err.as_str()),
				})
			}
		}
	)
}
