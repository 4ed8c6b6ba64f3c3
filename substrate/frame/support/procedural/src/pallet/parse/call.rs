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
use std::collections::{BTreeSet, HashMap};
use syn::{spanned::Spanned, Error};

/// Definition of dispatchables typically `impl<T: Config> Pallet<T> { ... }`
pub struct CallDef {
	/// The impl block, with the `call_index` attributes removed.
	pub item_impl: syn::ItemImpl,
	/// The name of the generic parameter, usually `T`.
	pub generic_param: syn::Ident,
	/// Information on methods (used for expansion).
	pub methods: Vec<CallVariantDef>,
	/// The span of the pallet::call attribute.
	pub attr_span: Span,
	/// Docs, specified on the impl Block.
	pub docs: Vec<syn::Expr>,
}

/// Definition of dispatchable typically: `pub fn transfer(origin, to, amount) -> DispatchResult`
#[derive(Clone)]
pub struct CallVariantDef {
	/// Function name.
	pub name: syn::Ident,
	/// Information on args: `(name, type)`, origin excluded.
	pub args: Vec<(syn::Ident, Box<syn::Type>)>,
	/// Index of the function, for the call enum encoding.
	pub call_index: u8,
	/// Docs, used for metadata.
	pub docs: Vec<syn::Expr>,
}

/// Returns `Some(index)` if the attribute is a `call_index` attribute.
///
/// Both `#[call_index(n)]` and `#[pallet::call_index(n)]` are accepted.
fn call_index_attr(attr: &syn::Attribute) -> syn::Result<Option<u8>> {
	let path = attr.path();
	let is_call_index = match path.segments.len() {
		1 => path.segments[0].ident == "call_index",
		2 => path.segments[0].ident == "pallet" && path.segments[1].ident == "call_index",
		_ => false,
	};

	if !is_call_index {
		return Ok(None)
	}

	let lit = attr.parse_args::<syn::LitInt>()?;
	let index = lit.base10_parse::<u8>().map_err(|_| {
		Error::new(lit.span(), "Invalid call index: expected a number between 0 and 255")
	})?;
	Ok(Some(index))
}

/// Check the syntax is `OriginFor<T>`.
pub fn check_dispatchable_first_arg_type(ty: &syn::Type) -> syn::Result<()> {
	let is_origin = match ty {
		syn::Type::Path(ty) if ty.qself.is_none() =>
			ty.path.segments.last().map_or(false, |s| s.ident == "OriginFor"),
		_ => false,
	};

	if is_origin {
		Ok(())
	} else {
		Err(Error::new(ty.span(), "Invalid type: expected `OriginFor<T>`"))
	}
}

/// Check the return type is `DispatchResult`.
fn check_dispatchable_return_type(sig: &syn::Signature) -> syn::Result<()> {
	let msg = "Invalid call, require return type DispatchResult";
	match &sig.output {
		syn::ReturnType::Type(_, ty) => match &**ty {
			syn::Type::Path(ty) if ty.path.segments.last().map_or(false, |s| {
				s.ident == "DispatchResult" && s.arguments.is_none()
			}) =>
				Ok(()),
			ty => Err(Error::new(ty.span(), msg)),
		},
		syn::ReturnType::Default => Err(Error::new(sig.span(), msg)),
	}
}

/// Check the impl is `impl<T: Config> Pallet<T>` and return the generic parameter.
fn check_pallet_impl(item: &syn::ItemImpl) -> syn::Result<syn::Ident> {
	let msg = "Invalid call, expected `impl<T: Config> Pallet<T>`";

	if let Some((_, path, _)) = &item.trait_ {
		return Err(Error::new(path.span(), msg))
	}

	let mut type_params = item.generics.type_params();
	let generic_param = match (type_params.next(), type_params.next()) {
		(Some(param), None) => param.ident.clone(),
		_ => return Err(Error::new(item.generics.span(), msg)),
	};
	if item.generics.lifetimes().next().is_some() || item.generics.const_params().next().is_some()
	{
		return Err(Error::new(item.generics.span(), msg))
	}

	let is_pallet = match &*item.self_ty {
		syn::Type::Path(ty) => ty.path.segments.last().map_or(false, |s| s.ident == "Pallet"),
		_ => false,
	};
	if !is_pallet {
		return Err(Error::new(item.self_ty.span(), msg))
	}

	Ok(generic_param)
}

impl CallDef {
	pub fn try_from(attr_span: Span, item: syn::Item) -> syn::Result<Self> {
		let mut item_impl = if let syn::Item::Impl(item) = item {
			item
		} else {
			return Err(Error::new(item.span(), "Invalid call, expected item impl"))
		};

		let generic_param = check_pallet_impl(&item_impl)?;

		let mut methods = vec![];
		let mut indices = HashMap::<u8, syn::Ident>::new();
		let mut names = BTreeSet::<String>::new();
		let mut last_index: Option<u8> = None;

		for item in &mut item_impl.items {
			let method = if let syn::ImplItem::Fn(method) = item {
				method
			} else {
				return Err(Error::new(item.span(), "Invalid call, only method accepted"))
			};

			if !matches!(method.vis, syn::Visibility::Public(_)) {
				let msg = "Invalid call, dispatchable function must be public: `pub fn`";
				let span = match method.vis {
					syn::Visibility::Inherited => method.sig.span(),
					_ => method.vis.span(),
				};
				return Err(Error::new(span, msg))
			}

			if !method.sig.generics.params.is_empty() || method.sig.generics.where_clause.is_some()
			{
				let msg = "Invalid call, dispatchable function must not be generic";
				return Err(Error::new(method.sig.generics.span(), msg))
			}

			if let Some(asyncness) = method.sig.asyncness {
				let msg = "Invalid call, dispatchable function must not be async";
				return Err(Error::new(asyncness.span(), msg))
			}

			match method.sig.inputs.first() {
				None => {
					let msg = "Invalid call, must have at least origin arg";
					return Err(Error::new(method.sig.span(), msg))
				},
				Some(syn::FnArg::Receiver(arg)) => {
					let msg = "Invalid call, first argument must be a typed argument, e.g. \
						`origin: OriginFor<T>`";
					return Err(Error::new(arg.span(), msg))
				},
				Some(syn::FnArg::Typed(arg)) => check_dispatchable_first_arg_type(&arg.ty)?,
			}

			check_dispatchable_return_type(&method.sig)?;

			let mut call_index = None;
			let mut kept_attrs = vec![];
			for attr in method.attrs.drain(..) {
				match call_index_attr(&attr)? {
					Some(_) if call_index.is_some() => {
						let msg = "Invalid attribute: only one `call_index` attribute is allowed";
						return Err(Error::new(attr.span(), msg))
					},
					Some(index) => call_index = Some(index),
					None => kept_attrs.push(attr),
				}
			}
			method.attrs = kept_attrs;

			let name = method.sig.ident.clone();
			let final_index = match call_index {
				Some(index) => index,
				None => last_index.map_or(Some(0), |index| index.checked_add(1)).ok_or_else(
					|| Error::new(name.span(), "Call index doesn't fit into u8, index is 256"),
				)?,
			};
			last_index = Some(final_index);

			if let Some(used_fn) = indices.insert(final_index, name.clone()) {
				let msg = format!(
					"Call indices are conflicting: Both functions {} and {} are at index {}",
					used_fn, name, final_index,
				);
				let mut err = Error::new(used_fn.span(), &msg);
				err.combine(Error::new(name.span(), msg));
				return Err(err)
			}

			if !names.insert(name.to_string()) {
				let msg = format!("Invalid call, duplicate function name `{}`", name);
				return Err(Error::new(name.span(), msg))
			}

			let mut args = vec![];
			for arg in method.sig.inputs.iter().skip(1) {
				let arg = if let syn::FnArg::Typed(arg) = arg {
					arg
				} else {
					unreachable!("Only first argument can be receiver");
				};

				let arg_ident = match &*arg.pat {
					syn::Pat::Ident(pat)
						if pat.by_ref.is_none() &&
							pat.mutability.is_none() &&
							pat.subpat.is_none() =>
						pat.ident.clone(),
					_ => {
						let msg = "Invalid call, argument must be ident";
						return Err(Error::new(arg.pat.span(), msg))
					},
				};

				args.push((arg_ident, arg.ty.clone()));
			}

			let docs = get_doc_literals(&method.attrs);

			methods.push(CallVariantDef {
				name,
				args,
				call_index: final_index,
				docs,
			});
		}

		let docs = get_doc_literals(&item_impl.attrs);

		Ok(Self { item_impl, generic_param, methods, attr_span, docs })
	}
}
