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

use crate::{mock::*, Claims, Error, GenesisConfig};
use frame_support::{
	assert_noop, assert_ok,
	dispatch::{DispatchError, GetCallMetadata, ModuleError, UnfilteredDispatchable},
	traits::{BuildStorage, PalletInfoAccess},
	ConfigurationError,
};
use frame_system::RawOrigin;
use pretty_assertions::assert_eq;

fn content(s: &str) -> String {
	s.to_string()
}

#[test]
fn create_claim_works() {
	new_test_ext().execute_with(|| {
		assert_eq!(ProofOfExistence::get_claim(&content("Hello, world!")), None);
		assert_ok!(ProofOfExistence::create_claim(RawOrigin::Signed(ALICE), content("Hello, world!")));
		assert_eq!(ProofOfExistence::get_claim(&content("Hello, world!")), Some(ALICE));
	});
}

#[test]
fn content_can_only_be_claimed_once() {
	new_test_ext().execute_with(|| {
		assert_ok!(ProofOfExistence::create_claim(RawOrigin::Signed(ALICE), content("doc")));
		assert_noop!(
			ProofOfExistence::create_claim(RawOrigin::Signed(BOB), content("doc")),
			Error::<Test>::AlreadyClaimed
		);
		// the owner cannot claim twice either
		assert_noop!(
			ProofOfExistence::create_claim(RawOrigin::Signed(ALICE), content("doc")),
			Error::<Test>::AlreadyClaimed
		);
	});
}

#[test]
fn revoke_claim_works() {
	new_test_ext().execute_with(|| {
		assert_ok!(ProofOfExistence::create_claim(RawOrigin::Signed(ALICE), content("doc")));
		assert_ok!(ProofOfExistence::revoke_claim(RawOrigin::Signed(ALICE), content("doc")));
		assert_eq!(ProofOfExistence::get_claim(&content("doc")), None);

		// free to be claimed again
		assert_ok!(ProofOfExistence::create_claim(RawOrigin::Signed(BOB), content("doc")));
		assert_eq!(ProofOfExistence::get_claim(&content("doc")), Some(BOB));
	});
}

#[test]
fn revoke_unknown_claim_fails() {
	new_test_ext().execute_with(|| {
		assert_noop!(
			ProofOfExistence::revoke_claim(RawOrigin::Signed(ALICE), content("nothing")),
			Error::<Test>::ClaimNotFound
		);
	});
}

#[test]
fn only_the_owner_can_revoke() {
	new_test_ext().execute_with(|| {
		assert_ok!(ProofOfExistence::create_claim(RawOrigin::Signed(ALICE), content("doc")));
		assert_noop!(
			ProofOfExistence::revoke_claim(RawOrigin::Signed(BOB), content("doc")),
			Error::<Test>::NotClaimOwner
		);
		assert_eq!(ProofOfExistence::get_claim(&content("doc")), Some(ALICE));
	});
}

#[test]
fn unsigned_origins_are_rejected() {
	new_test_ext().execute_with(|| {
		assert_noop!(
			ProofOfExistence::create_claim(RawOrigin::None, content("doc")),
			DispatchError::BadOrigin
		);
		assert_noop!(
			ProofOfExistence::revoke_claim(RawOrigin::Root, content("doc")),
			DispatchError::BadOrigin
		);
	});
}

#[test]
fn errors_carry_the_pallet_index() {
	new_test_ext().execute_with(|| {
		let call = RuntimeCall::ProofOfExistence(crate::Call::revoke_claim { claim: content("x") });
		assert_eq!(
			call.dispatch_bypass_filter(RawOrigin::Signed(ALICE)),
			Err(DispatchError::Module(ModuleError {
				index: 1,
				error: 1,
				message: Some("ClaimNotFound"),
			}))
		);
		assert_eq!(<ProofOfExistence as PalletInfoAccess>::index(), 1);
	});
}

#[test]
fn calls_are_routed_through_the_runtime_call() {
	new_test_ext().execute_with(|| {
		let call = RuntimeCall::ProofOfExistence(crate::Call::create_claim { claim: content("a") });
		let metadata = call.get_call_metadata();
		assert_eq!(metadata.pallet_name, "ProofOfExistence");
		assert_eq!(metadata.function_name, "create_claim");

		assert_ok!(call.dispatch_bypass_filter(RawOrigin::Signed(BOB)));
		assert_eq!(ProofOfExistence::claims(), vec![(content("a"), BOB)]);
	});
}

#[test]
fn genesis_claims_are_stored() {
	ExtBuilder::default().claim("one", ALICE).claim("two", BOB).build().execute_with(|| {
		assert_eq!(ProofOfExistence::get_claim(&content("one")), Some(ALICE));
		assert_eq!(ProofOfExistence::get_claim(&content("two")), Some(BOB));
		assert!(Claims::<Test>::contains_key("one"));

		assert_noop!(
			ProofOfExistence::revoke_claim(RawOrigin::Signed(ALICE), content("two")),
			Error::<Test>::NotClaimOwner
		);
	});
}

#[test]
fn duplicate_genesis_claims_are_rejected() {
	let config = RuntimeGenesisConfig {
		proof_of_existence: GenesisConfig::<Test> {
			claims: vec![(content("one"), ALICE), (content("one"), BOB)],
		},
	};
	assert!(matches!(
		config.build_storage(),
		Err(ConfigurationError::InvalidGenesis { pallet: "ProofOfExistence", .. })
	));
}

#[test]
fn genesis_config_reads_json() {
	let config: GenesisConfig<Test> =
		serde_json::from_str(r#"{ "claims": [["Hello, world!", 1]] }"#).unwrap();
	assert_eq!(config.claims, vec![(content("Hello, world!"), ALICE)]);
}
