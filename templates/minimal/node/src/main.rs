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

//! A minimal node executing blocks against the minimal runtime.

#![warn(missing_docs)]

extern crate minimal_template_runtime as runtime;

mod cli;
mod command;
mod demo;

fn main() {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
		.format_timestamp_millis()
		.init();

	let cli = <cli::Cli as clap::Parser>::parse();
	if let Err(e) = command::run(cli) {
		log::error!("{}", e);
		std::process::exit(1);
	}
}
