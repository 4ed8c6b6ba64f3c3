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

use syn::parse_quote;

#[macro_export]
macro_rules! assert_error_matches {
	($expr:expr, $reg:literal) => {
		match $expr {
			Ok(_) => panic!("Expected an `Error(..)`, but got Ok(..)"),
			Err(e) => {
				let error_message = e.to_string();
				let re = regex::Regex::new($reg).expect("Invalid regex pattern");
				assert!(
					re.is_match(&error_message),
					"Error message \"{}\" does not match the pattern \"{}\"",
					error_message,
					$reg
				);
			},
		}
	};
}

#[macro_export]
macro_rules! assert_call_parses {
	($($tokens:tt)*) => {
		$crate::pallet::parse::call::CallDef::try_from(
			proc_macro2::Span::call_site(),
			syn::parse_quote! { $($tokens)* },
		)
		.unwrap()
	}
}

#[macro_export]
macro_rules! assert_call_parse_error {
	(
		#[error_regex($reg:literal)]
		$($tokens:tt)*
	) => {
		$crate::assert_error_matches!(
			$crate::pallet::parse::call::CallDef::try_from(
				proc_macro2::Span::call_site(),
				parse_quote! { $($tokens)* },
			),
			$reg
		);
	}
}

#[macro_export]
macro_rules! assert_error_parse_error {
	(
		#[error_regex($reg:literal)]
		$($tokens:tt)*
	) => {
		$crate::assert_error_matches!(
			$crate::pallet::parse::error::ErrorDef::try_from(
				proc_macro2::Span::call_site(),
				parse_quote! { $($tokens)* },
			),
			$reg
		);
	}
}


#[test]
fn test_parse_minimal_call() {
	let def = assert_call_parses! {
		impl<T: Config> Pallet<T> {}
	};
	assert!(def.methods.is_empty());
	assert_eq!(def.generic_param.to_string(), "T");
}

#[test]
fn test_parse_call_rejects_non_impl() {
	assert_call_parse_error! {
		#[error_regex("Invalid call, expected item impl")]
		pub struct Pallet<T>(core::marker::PhantomData<T>);
	}
}
