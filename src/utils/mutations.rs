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
//! # Mutations Utility Module
//!
//! This module provides utility functions for creating common mutations to HTTP requests and
//! responses in Envoy external processors. These functions simplify the creation of processing
//! responses for modifying headers, bodies, and generating immediate responses.
//!
//! ## Overview
//!
//! The mutations module includes functions for:
//!
//! - Adding and removing HTTP headers
//! - Replacing or clearing HTTP body content
//! - Creating immediate responses with custom status codes
//! - Creating redirect responses
//!
//! These utilities abstract away the complexity of constructing the correct Envoy protobuf
//! message structures. Every function is a pure builder over those structures; none performs
//! I/O beyond one logged warning for contradictory body input.

use crate::envoy::config::core::v3::{
    header_value_option::HeaderAppendAction, HeaderValue, HeaderValueOption,
};
use crate::envoy::r#type::v3::{HttpStatus, StatusCode};
use crate::envoy::service::ext_proc::v3::{
    body_mutation, processing_response::Response, BodyMutation, BodyResponse, CommonResponse,
    HeaderMutation, HeadersResponse, ImmediateResponse, ProcessingResponse,
};
use log::warn;

/// Builds one `HeaderValueOption` per (key, value) pair, in order. When an
/// append action is given it is attached to every entry, otherwise the
/// protocol default applies.
fn set_header_options(
    headers: Vec<(String, String)>,
    append_action: Option<HeaderAppendAction>,
) -> Vec<HeaderValueOption> {
    headers
        .into_iter()
        .map(|(key, value)| HeaderValueOption {
            header: Some(HeaderValue {
                key,
                raw_value: value.into_bytes(),
                ..Default::default()
            }),
            append_action: append_action.map_or(0, |action| action as i32),
            ..Default::default()
        })
        .collect()
}

/// Creates a processing response that adds and/or removes HTTP headers.
///
/// This function constructs a `ProcessingResponse` that modifies HTTP headers in either
/// requests or responses, depending on the `is_request` parameter.
///
/// # Arguments
///
/// * `headers_to_add` - A vector of (key, value) pairs representing headers to add or replace
/// * `headers_to_remove` - A vector of header names to remove
/// * `clear_route_cache` - Whether to clear Envoy's route cache after modifying headers
/// * `is_request` - If true, modifies request headers; if false, modifies response headers
/// * `append_action` - Optional append action applied to every added header; `None` leaves
///   the protocol default
///
/// # Returns
///
/// A `ProcessingResponse` that adds and/or removes the specified headers
pub fn add_header_mutation(
    headers_to_add: Vec<(String, String)>,
    headers_to_remove: Vec<String>,
    clear_route_cache: bool,
    is_request: bool,
    append_action: Option<HeaderAppendAction>,
) -> ProcessingResponse {
    let header_mutation = HeaderMutation {
        set_headers: set_header_options(headers_to_add, append_action),
        remove_headers: headers_to_remove,
    };

    let common_response = CommonResponse {
        header_mutation: Some(header_mutation),
        clear_route_cache,
        ..Default::default()
    };

    let headers_response = HeadersResponse {
        response: Some(common_response),
    };

    let response = if is_request {
        Response::RequestHeaders(headers_response)
    } else {
        Response::ResponseHeaders(headers_response)
    };

    ProcessingResponse {
        response: Some(response),
        ..Default::default()
    }
}

/// Creates a processing response that replaces or clears the HTTP body.
///
/// If `body` is non-empty it becomes the replacement payload and `clear_body` is ignored;
/// supplying both is contradictory and logged as a warning, with the payload winning.
/// Otherwise the `clear_body` flag is applied directly, so `clear_body = false` with no
/// body yields a body response that mutates nothing.
///
/// # Arguments
///
/// * `body` - Optional text to replace the current body with
/// * `clear_body` - Whether to clear the body when no replacement text is given
/// * `clear_route_cache` - Whether to clear Envoy's route cache after modifying the body
/// * `is_request` - If true, modifies the request body; if false, modifies the response body
///
/// # Returns
///
/// A `ProcessingResponse` carrying the body mutation
pub fn add_body_mutation(
    body: Option<String>,
    clear_body: bool,
    clear_route_cache: bool,
    is_request: bool,
) -> ProcessingResponse {
    let mutation = match body {
        Some(body) if !body.is_empty() => {
            if clear_body {
                warn!("body and clear_body are mutually exclusive");
            }
            body_mutation::Mutation::Body(body.into_bytes())
        }
        _ => body_mutation::Mutation::ClearBody(clear_body),
    };

    let common_response = CommonResponse {
        body_mutation: Some(BodyMutation {
            mutation: Some(mutation),
        }),
        clear_route_cache,
        ..Default::default()
    };

    let body_response = BodyResponse {
        response: Some(common_response),
    };

    let response = if is_request {
        Response::RequestBody(body_response)
    } else {
        Response::ResponseBody(body_response)
    };

    ProcessingResponse {
        response: Some(response),
        ..Default::default()
    }
}

/// Creates an immediate response that ends processing early with the given status.
///
/// Header pairs are built with the same per-header semantics as
/// [`add_header_mutation`]. When `headers` is empty the immediate response
/// carries no header mutation at all.
///
/// # Arguments
///
/// * `status` - The HTTP status code for the response
/// * `headers` - A vector of (key, value) pairs representing headers to include
/// * `append_action` - Optional append action applied to every header
///
/// # Returns
///
/// A `ProcessingResponse` containing an immediate response with the specified attributes
pub fn add_immediate_response(
    status: StatusCode,
    headers: Vec<(String, String)>,
    append_action: Option<HeaderAppendAction>,
) -> ProcessingResponse {
    let headers = if headers.is_empty() {
        None
    } else {
        Some(HeaderMutation {
            set_headers: set_header_options(headers, append_action),
            remove_headers: Vec::new(),
        })
    };

    let immediate_response = ImmediateResponse {
        status: Some(HttpStatus {
            code: status as i32,
        }),
        headers,
        ..Default::default()
    };

    ProcessingResponse {
        response: Some(Response::ImmediateResponse(immediate_response)),
        ..Default::default()
    }
}

/// Creates a redirect response with the specified status code and location.
///
/// A specialized version of [`add_immediate_response`] for redirects, e.g.
/// `StatusCode::MovedPermanently` or `StatusCode::Found`.
pub fn add_redirect_response(
    status: StatusCode,
    location: String,
    append_action: Option<HeaderAppendAction>,
) -> ProcessingResponse {
    add_immediate_response(
        status,
        vec![("Location".to_string(), location)],
        append_action,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envoy::service::ext_proc::v3::processing_response::Response as ProcessingResponseVariant;
    use crate::utils::test_log;

    #[test]
    fn test_add_header_mutation_request() {
        let headers_to_add = vec![
            ("X-Test-Header".to_string(), "test-value".to_string()),
            ("X-Another-Header".to_string(), "another-value".to_string()),
        ];
        let headers_to_remove = vec!["X-Remove-Me".to_string(), "X-Remove-Too".to_string()];

        let response =
            add_header_mutation(headers_to_add, headers_to_remove, true, true, None);

        if let Some(ProcessingResponseVariant::RequestHeaders(headers_response)) = response.response
        {
            let common_response = headers_response.response.as_ref().unwrap();
            let header_mutation = common_response.header_mutation.as_ref().unwrap();

            // One set-entry per pair, order preserved.
            assert_eq!(header_mutation.set_headers.len(), 2);
            assert_eq!(
                header_mutation.set_headers[0].header.as_ref().unwrap().key,
                "X-Test-Header"
            );
            assert_eq!(
                String::from_utf8_lossy(
                    &header_mutation.set_headers[0]
                        .header
                        .as_ref()
                        .unwrap()
                        .raw_value
                ),
                "test-value"
            );
            assert_eq!(
                header_mutation.set_headers[1].header.as_ref().unwrap().key,
                "X-Another-Header"
            );

            // No append action supplied, the protocol default stays.
            assert_eq!(header_mutation.set_headers[0].append_action, 0);

            // Removal list appended verbatim, order preserved.
            assert_eq!(
                header_mutation.remove_headers,
                vec!["X-Remove-Me".to_string(), "X-Remove-Too".to_string()]
            );

            assert!(common_response.clear_route_cache);
        } else {
            panic!("Expected RequestHeaders response");
        }
    }

    #[test]
    fn test_add_header_mutation_response() {
        let headers_to_add = vec![("X-Test-Header".to_string(), "test-value".to_string())];

        let response = add_header_mutation(headers_to_add, vec![], false, false, None);

        if let Some(ProcessingResponseVariant::ResponseHeaders(headers_response)) =
            response.response
        {
            let common_response = headers_response.response.as_ref().unwrap();
            assert!(!common_response.clear_route_cache);
        } else {
            panic!("Expected ResponseHeaders response");
        }
    }

    #[test]
    fn test_add_header_mutation_append_action() {
        let headers_to_add = vec![
            ("header1".to_string(), "value1".to_string()),
            ("header2".to_string(), "value2".to_string()),
        ];

        let response = add_header_mutation(
            headers_to_add,
            vec![],
            false,
            true,
            Some(HeaderAppendAction::OverwriteIfExistsOrAdd),
        );

        if let Some(ProcessingResponseVariant::RequestHeaders(headers_response)) = response.response
        {
            let header_mutation = headers_response
                .response
                .as_ref()
                .unwrap()
                .header_mutation
                .as_ref()
                .unwrap();

            // The action is attached to every entry.
            for option in &header_mutation.set_headers {
                assert_eq!(
                    option.append_action,
                    HeaderAppendAction::OverwriteIfExistsOrAdd as i32
                );
            }
        } else {
            panic!("Expected RequestHeaders response");
        }
    }

    #[test]
    fn test_add_body_mutation_replacement() {
        let response = add_body_mutation(Some("hello".to_string()), false, false, true);

        if let Some(ProcessingResponseVariant::RequestBody(body_response)) = response.response {
            let body_mutation = body_response
                .response
                .as_ref()
                .unwrap()
                .body_mutation
                .as_ref()
                .unwrap();

            if let Some(body_mutation::Mutation::Body(body)) = &body_mutation.mutation {
                assert_eq!(String::from_utf8_lossy(body), "hello");
            } else {
                panic!("Expected Body mutation");
            }
        } else {
            panic!("Expected RequestBody response");
        }
    }

    #[test]
    fn test_add_body_mutation_contradictory_input() {
        test_log::init();

        let response = add_body_mutation(Some("hello".to_string()), true, false, true);

        // The replacement payload wins over the clear flag.
        if let Some(ProcessingResponseVariant::RequestBody(body_response)) = response.response {
            let body_mutation = body_response
                .response
                .as_ref()
                .unwrap()
                .body_mutation
                .as_ref()
                .unwrap();

            if let Some(body_mutation::Mutation::Body(body)) = &body_mutation.mutation {
                assert_eq!(String::from_utf8_lossy(body), "hello");
            } else {
                panic!("Expected Body mutation");
            }
        } else {
            panic!("Expected RequestBody response");
        }

        assert!(test_log::contains("body and clear_body are mutually exclusive"));
    }

    #[test]
    fn test_add_body_mutation_clear() {
        let response = add_body_mutation(None, true, true, false);

        if let Some(ProcessingResponseVariant::ResponseBody(body_response)) = response.response {
            let common_response = body_response.response.as_ref().unwrap();
            let body_mutation = common_response.body_mutation.as_ref().unwrap();

            if let Some(body_mutation::Mutation::ClearBody(clear)) = body_mutation.mutation {
                assert!(clear);
            } else {
                panic!("Expected ClearBody mutation");
            }

            assert!(common_response.clear_route_cache);
        } else {
            panic!("Expected ResponseBody response");
        }
    }

    #[test]
    fn test_add_body_mutation_noop() {
        // No body and no clear flag leaves the body untouched.
        let response = add_body_mutation(None, false, false, true);

        if let Some(ProcessingResponseVariant::RequestBody(body_response)) = response.response {
            let body_mutation = body_response
                .response
                .as_ref()
                .unwrap()
                .body_mutation
                .as_ref()
                .unwrap();

            if let Some(body_mutation::Mutation::ClearBody(clear)) = body_mutation.mutation {
                assert!(!clear);
            } else {
                panic!("Expected ClearBody mutation");
            }
        } else {
            panic!("Expected RequestBody response");
        }
    }

    #[test]
    fn test_add_immediate_response_without_headers() {
        let response = add_immediate_response(StatusCode::Forbidden, vec![], None);

        if let Some(ProcessingResponseVariant::ImmediateResponse(immediate_response)) =
            response.response
        {
            assert_eq!(immediate_response.status.as_ref().unwrap().code, 403);
            // No headers supplied, so no header mutation is attached.
            assert!(immediate_response.headers.is_none());
        } else {
            panic!("Expected ImmediateResponse");
        }
    }

    #[test]
    fn test_add_immediate_response_with_headers() {
        let headers = vec![
            ("X-Test-Header".to_string(), "test-value".to_string()),
            ("Content-Type".to_string(), "text/plain".to_string()),
        ];

        let response = add_immediate_response(
            StatusCode::Unauthorized,
            headers,
            Some(HeaderAppendAction::AddIfAbsent),
        );

        if let Some(ProcessingResponseVariant::ImmediateResponse(immediate_response)) =
            response.response
        {
            assert_eq!(immediate_response.status.as_ref().unwrap().code, 401);

            let header_mutation = immediate_response.headers.as_ref().unwrap();
            assert_eq!(header_mutation.set_headers.len(), 2);
            assert_eq!(
                header_mutation.set_headers[0].header.as_ref().unwrap().key,
                "X-Test-Header"
            );
            for option in &header_mutation.set_headers {
                assert_eq!(option.append_action, HeaderAppendAction::AddIfAbsent as i32);
            }
        } else {
            panic!("Expected ImmediateResponse");
        }
    }

    #[test]
    fn test_add_redirect_response() {
        let location = "https://example.com/new-location";

        let response =
            add_redirect_response(StatusCode::MovedPermanently, location.to_string(), None);

        if let Some(ProcessingResponseVariant::ImmediateResponse(immediate_response)) =
            response.response
        {
            assert_eq!(immediate_response.status.as_ref().unwrap().code, 301);

            let header_mutation = immediate_response.headers.as_ref().unwrap();
            assert_eq!(header_mutation.set_headers.len(), 1);
            let header = header_mutation.set_headers[0].header.as_ref().unwrap();
            assert_eq!(header.key, "Location");
            assert_eq!(String::from_utf8_lossy(&header.raw_value), location);

            assert!(immediate_response.body.is_empty());
        } else {
            panic!("Expected ImmediateResponse");
        }
    }
}
