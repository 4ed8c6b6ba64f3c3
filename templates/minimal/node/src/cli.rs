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

use clap::Parser;

/// Drive the minimal runtime through the demo blocks.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
	/// The genesis preset the chain starts from.
	#[arg(long, default_value = "development")]
	pub preset: String,

	/// List the available genesis presets and exit.
	#[arg(long, default_value_t = false)]
	pub list_presets: bool,

	/// Print the genesis config of the preset as JSON and exit.
	#[arg(long, default_value_t = false)]
	pub export_genesis: bool,
}
