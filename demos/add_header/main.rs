// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Prints the processing responses a header callout would send, using the
//! shared command line flags. Wire the constructed values into your own
//! ext_proc service implementation to serve them.

use callout_tools::config::CalloutArgs;
use callout_tools::envoy::r#type::v3::StatusCode;
use callout_tools::utils::mutations;
use clap::Parser;
use log::info;

fn main() {
    env_logger::init();

    let args = CalloutArgs::parse();
    if let Some(address) = args.address() {
        info!("server address: {address}");
    }
    if let Some(address) = args.health_check_address() {
        info!("health check address: {address}");
    }

    let header_response = mutations::add_header_mutation(
        vec![("header-request".to_string(), "Value-request".to_string())],
        vec![],
        false,
        true,
        None,
    );
    println!("{header_response:#?}");

    let denied = mutations::add_immediate_response(StatusCode::Forbidden, vec![], None);
    println!("{denied:#?}");
}
