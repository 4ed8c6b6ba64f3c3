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

use crate::pallet::parse::call::CallDef;
use frame_support_procedural_tools::type_to_string;
use proc_macro2::TokenStream;
use quote::{format_ident, quote_spanned};

/// Expand the call impl block into:
/// * the impl block itself, without the `call_index` attributes,
/// * the `Call<T>` enum, one variant per dispatchable,
/// * the dispatch routing (`UnfilteredDispatchable`) into the pallet functions,
/// * name/index/metadata accessors and the pallet info access.
pub fn expand_call(def: &CallDef, scrate: &syn::Path, frame_system: &syn::Path) -> TokenStream {
	let span = def.attr_span;
	let item_impl = &def.item_impl;
	let pallet_ty = &item_impl.self_ty;
	let generic_param = &def.generic_param;
	let generics = &item_impl.generics;
	let (impl_gen, ty_gen, where_clause) = item_impl.generics.split_for_impl();

	let fn_name = def.methods.iter().map(|m| &m.name).collect::<Vec<_>>();
	let fn_name_str = fn_name.iter().map(|n| n.to_string()).collect::<Vec<_>>();
	let new_call_variant_fn_name =
		fn_name.iter().map(|n| format_ident!("new_call_variant_{}", n)).collect::<Vec<_>>();
	let call_index = def.methods.iter().map(|m| m.call_index).collect::<Vec<_>>();
	let fn_doc = def.methods.iter().map(|m| &m.docs).collect::<Vec<_>>();
	let args_name = def
		.methods
		.iter()
		.map(|m| m.args.iter().map(|(name, _)| name.clone()).collect::<Vec<_>>())
		.collect::<Vec<_>>();
	let args_type = def
		.methods
		.iter()
		.map(|m| m.args.iter().map(|(_, ty)| ty.clone()).collect::<Vec<_>>())
		.collect::<Vec<_>>();
	let args_name_str = args_name
		.iter()
		.map(|names| names.iter().map(|n| n.to_string()).collect::<Vec<_>>())
		.collect::<Vec<_>>();
	let args_type_str = args_type
		.iter()
		.map(|types| types.iter().map(|ty| type_to_string(ty)).collect::<Vec<_>>())
		.collect::<Vec<_>>();
	let args_name_left = args_name
		.iter()
		.map(|names| names.iter().map(|n| format_ident!("__left_{}", n)).collect::<Vec<_>>())
		.collect::<Vec<_>>();
	let args_name_right = args_name
		.iter()
		.map(|names| names.iter().map(|n| format_ident!("__right_{}", n)).collect::<Vec<_>>())
		.collect::<Vec<_>>();

	let call_doc = if def.docs.is_empty() {
		vec![syn::parse_quote!("Contains a variant per dispatchable extrinsic that this pallet has.")]
	} else {
		def.docs.clone()
	};

	let origin_ty = quote_spanned!(span => #frame_system::OriginFor<#generic_param>);

	quote_spanned!(span =>
		#item_impl

		#( #[doc = #call_doc] )*
		#[derive(
			#scrate::__private::codec::Encode,
			#scrate::__private::codec::Decode,
			#scrate::__private::scale_info::TypeInfo,
		)]
		#[codec(crate = #scrate::__private::codec)]
		#[codec(encode_bound())]
		#[codec(decode_bound())]
		#[scale_info(crate = #scrate::__private::scale_info, skip_type_params(#generic_param))]
		#[allow(non_camel_case_types)]
		pub enum Call #generics #where_clause {
			#[doc(hidden)]
			#[codec(skip)]
			__Ignore(
				::core::marker::PhantomData<(#generic_param,)>,
				#scrate::Never,
			),
			#(
				#( #[doc = #fn_doc] )*
				#[codec(index = #call_index)]
				#fn_name {
					#(
						#[allow(missing_docs)]
						#args_name: #args_type,
					)*
				},
			)*
		}

		impl #impl_gen Call #ty_gen #where_clause {
			#(
				#[doc = concat!("Create a call with the variant `", #fn_name_str, "`.")]
				pub fn #new_call_variant_fn_name( #( #args_name: #args_type ),* ) -> Self {
					Self::#fn_name {
						#( #args_name, )*
					}
				}
			)*
		}

		impl #impl_gen ::core::clone::Clone for Call #ty_gen #where_clause {
			fn clone(&self) -> Self {
				match self {
					Self::__Ignore(_, __never) => match *__never {},
					#(
						Self::#fn_name { #( #args_name, )* } => Self::#fn_name {
							#( #args_name: ::core::clone::Clone::clone(#args_name), )*
						},
					)*
				}
			}
		}

		impl #impl_gen ::core::cmp::PartialEq for Call #ty_gen #where_clause {
			#[allow(unreachable_patterns)]
			fn eq(&self, other: &Self) -> bool {
				match (self, other) {
					(Self::__Ignore(_, __never), _) | (_, Self::__Ignore(_, __never)) =>
						match *__never {},
					#(
						(
							Self::#fn_name { #( #args_name: #args_name_left, )* },
							Self::#fn_name { #( #args_name: #args_name_right, )* },
						) => true #( && #args_name_left == #args_name_right )*,
					)*
					_ => false,
				}
			}
		}

		impl #impl_gen ::core::cmp::Eq for Call #ty_gen #where_clause {}

		impl #impl_gen ::core::fmt::Debug for Call #ty_gen #where_clause {
			fn fmt(&self, fmt: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
				match self {
					Self::__Ignore(_, __never) => match *__never {},
					#(
						Self::#fn_name { #( #args_name, )* } => fmt
							.debug_struct(#fn_name_str)
							#( .field(#args_name_str, #args_name) )*
							.finish(),
					)*
				}
			}
		}

		impl #impl_gen #scrate::dispatch::GetCallName for Call #ty_gen #where_clause {
			fn get_call_name(&self) -> &'static str {
				match self {
					Self::__Ignore(_, __never) => match *__never {},
					#( Self::#fn_name { .. } => #fn_name_str, )*
				}
			}

			fn get_call_names() -> &'static [&'static str] {
				&[ #( #fn_name_str, )* ]
			}
		}

		impl #impl_gen #scrate::dispatch::GetCallIndex for Call #ty_gen #where_clause {
			fn get_call_index(&self) -> u8 {
				match self {
					Self::__Ignore(_, __never) => match *__never {},
					#( Self::#fn_name { .. } => #call_index, )*
				}
			}

			fn get_call_indices() -> &'static [u8] {
				&[ #( #call_index, )* ]
			}
		}

		impl #impl_gen #scrate::dispatch::UnfilteredDispatchable for Call #ty_gen #where_clause {
			type RuntimeOrigin = #origin_ty;

			fn dispatch_bypass_filter(
				self,
				origin: Self::RuntimeOrigin,
			) -> #scrate::dispatch::DispatchResult {
				#scrate::dispatch::dispatch_guarded(|| match self {
					Self::__Ignore(_, __never) => match __never {},
					#(
						Self::#fn_name { #( #args_name, )* } => {
							#scrate::__private::log::trace!(
								target: #scrate::dispatch::LOG_TARGET,
								"dispatching {}::{}",
								<#pallet_ty as #scrate::traits::PalletInfoAccess>::name(),
								#fn_name_str,
							);
							#scrate::storage::with_storage_layer(|| {
								<#pallet_ty>::#fn_name(origin, #( #args_name, )*)
							})
						},
					)*
				})
			}
		}

		impl #impl_gen #scrate::dispatch::Callable<#generic_param> for #pallet_ty #where_clause {
			type RuntimeCall = Call #ty_gen;
		}

		impl #impl_gen #pallet_ty #where_clause {
			/// The table of dispatchable functions of this pallet, in declaration order.
			#[doc(hidden)]
			pub fn call_functions() -> &'static [#scrate::dispatch::FunctionMetadata] {
				&[ #(
					#scrate::dispatch::FunctionMetadata {
						name: #fn_name_str,
						index: #call_index,
						args: &[ #(
							#scrate::dispatch::ArgMetadata {
								name: #args_name_str,
								ty: #args_type_str,
							},
						)* ],
						docs: &[ #( #fn_doc, )* ],
					},
				)* ]
			}
		}

		impl #impl_gen #scrate::traits::PalletInfoAccess for #pallet_ty #where_clause {
			fn index() -> usize {
				<
					<#generic_param as #frame_system::Config>::PalletInfo
					as #scrate::traits::PalletInfo
				>::index::<Self>()
					.expect("Pallet is part of the runtime because pallet `Config` trait is \
						implemented by the runtime")
			}

			fn name() -> &'static str {
				<
					<#generic_param as #frame_system::Config>::PalletInfo
					as #scrate::traits::PalletInfo
				>::name::<Self>()
					.expect("Pallet is part of the runtime because pallet `Config` trait is \
						implemented by the runtime")
			}

			fn module_name() -> &'static str {
				<
					<#generic_param as #frame_system::Config>::PalletInfo
					as #scrate::traits::PalletInfo
				>::module_name::<Self>()
					.expect("Pallet is part of the runtime because pallet `Config` trait is \
						implemented by the runtime")
			}
		}

		impl #impl_gen #scrate::traits::PalletsInfoAccess for #pallet_ty #where_clause {
			fn count() -> usize {
				1
			}

			fn infos() -> #scrate::__private::Vec<#scrate::traits::PalletInfoData> {
				use #scrate::traits::PalletInfoAccess;
				let item = #scrate::traits::PalletInfoData {
					index: Self::index(),
					name: Self::name(),
					module_name: Self::module_name(),
				};
				#scrate::__private::vec![item]
			}
		}
	)
}
