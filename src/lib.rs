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
//! # Envoy Callout Tools
//!
//! Helper library for building Envoy external processing (ext_proc) callout
//! servers. It provides pure builder functions over the ext_proc protobuf
//! messages, a command line option set for server addresses, and a helper
//! that denies an in-flight callout.
//!
//! ## Overview
//!
//! - [`utils::mutations`] builds header mutations, body mutations, immediate
//!   responses and redirects.
//! - [`config`] declares the command line flags shared by callout servers and
//!   the `"host:port"` address parser behind them.
//! - [`utils::denials`] produces the permission-denied status that terminates
//!   a callout.
//!
//! The gRPC service loop, TLS setup and health checking belong to the
//! surrounding server, not to this library.

mod gen;

pub use gen::envoy;

pub mod config;
pub mod utils;
