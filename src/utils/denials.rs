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
//! # Denials Utility Module
//!
//! Helper for denying a callout. The produced `tonic::Status` is the abort
//! signal itself: the surrounding gRPC service terminates the processing
//! stream by propagating it, either with `?` or by sending it as the stream
//! error.

use log::warn;
use tonic::Status;

/// Message used when a callout is denied without an explicit reason.
pub const DENIED_MESSAGE: &str = "Callout content is invalid or not allowed";

/// Denies a gRPC callout, logging the reason.
///
/// Logs `msg` (or [`DENIED_MESSAGE`] when none is given) at warning level and
/// returns a `PERMISSION_DENIED` status carrying that same message.
pub fn deny_callout(msg: Option<&str>) -> Status {
    let msg = msg.unwrap_or(DENIED_MESSAGE);
    warn!("{msg}");
    Status::permission_denied(msg)
}
