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
//! # Configuration Module
//!
//! Command line options shared by callout servers, together with the
//! `"host:port"` address parser backing the address-typed flags.
//!
//! The parsed values are handed to a server constructor as-is: specifying
//! both an address and a port for the same role is not reconciled here.

use clap::Parser;
use std::fmt;
use thiserror::Error;

/// A `"host:port"` pair parsed from a command line flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPort {
    pub host: String,
    pub port: u16,
}

impl fmt::Display for HostPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Error returned when the text after the address separator is not a port.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseAddressError {
    #[error("invalid port in address {address:?}")]
    InvalidPort {
        address: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Parses a `"host:port"` string into a [`HostPort`].
///
/// An empty string or a string without a `:` separator carries no address
/// and yields `Ok(None)` rather than an error. The value is split at the
/// first colon; the remainder must parse as a base-10 port. Host syntax is
/// not validated.
pub fn parse_addr(value: &str) -> Result<Option<HostPort>, ParseAddressError> {
    let Some((host, port)) = value.split_once(':') else {
        return Ok(None);
    };
    let port = port
        .parse::<u16>()
        .map_err(|source| ParseAddressError::InvalidPort {
            address: value.to_string(),
            source,
        })?;
    Ok(Some(HostPort {
        host: host.to_string(),
        port,
    }))
}

/// Outcome of parsing an address flag. Distinguishes a flag whose value
/// carried no separator (no address) from a flag that was never given.
#[derive(Debug, Clone, PartialEq, Eq)]
struct AddressFlag(Option<HostPort>);

fn address_flag(value: &str) -> Result<AddressFlag, ParseAddressError> {
    parse_addr(value).map(AddressFlag)
}

/// Command line options to pass into a callout server constructor.
///
/// Flag names keep the underscore spelling shared by the callout server
/// family, e.g. `--secure_health_check`.
#[derive(Parser, Debug)]
#[command(rename_all = "snake_case")]
pub struct CalloutArgs {
    /// Run a HTTPS health check rather than an HTTP one.
    #[arg(long)]
    pub secure_health_check: bool,

    /// Do not create a separate health check server.
    #[arg(long)]
    pub combined_health_check: bool,

    /// Address for the server with format: "0.0.0.0:443"
    #[arg(long, value_parser = address_flag)]
    address: Option<AddressFlag>,

    /// Health check address for the server with format: "0.0.0.0:80",
    /// if unset, no health check will be run.
    #[arg(long, value_parser = address_flag)]
    health_check_address: Option<AddressFlag>,

    /// Address for the insecure debug port with format: "0.0.0.0:443"
    #[arg(long, value_parser = address_flag)]
    insecure_address: Option<AddressFlag>,

    /// Port of the server, uses the default ip unless --address is specified.
    #[arg(long)]
    pub port: Option<u16>,

    /// Health check port of the server, uses the default ip unless
    /// --health_check_address is specified.
    #[arg(long)]
    pub health_check_port: Option<u16>,

    /// Insecure debug port of the server, uses the default ip unless
    /// --insecure_address is specified.
    #[arg(long)]
    pub insecure_port: Option<u16>,
}

impl CalloutArgs {
    /// Address parsed from `--address`, if one was supplied.
    pub fn address(&self) -> Option<&HostPort> {
        self.address.as_ref().and_then(|flag| flag.0.as_ref())
    }

    /// Address parsed from `--health_check_address`, if one was supplied.
    pub fn health_check_address(&self) -> Option<&HostPort> {
        self.health_check_address
            .as_ref()
            .and_then(|flag| flag.0.as_ref())
    }

    /// Address parsed from `--insecure_address`, if one was supplied.
    pub fn insecure_address(&self) -> Option<&HostPort> {
        self.insecure_address
            .as_ref()
            .and_then(|flag| flag.0.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_addr_valid() {
        let addr = parse_addr("0.0.0.0:443").expect("parse failed");
        assert_eq!(
            addr,
            Some(HostPort {
                host: "0.0.0.0".to_string(),
                port: 443,
            })
        );
    }

    #[test]
    fn test_parse_addr_splits_at_first_colon() {
        let addr = parse_addr("localhost:8080").expect("parse failed");
        let addr = addr.expect("expected an address");
        assert_eq!(addr.host, "localhost");
        assert_eq!(addr.port, 8080);

        // Everything after the first colon must be the port.
        assert!(parse_addr("localhost:8080:9090").is_err());
    }

    #[test]
    fn test_parse_addr_absent() {
        assert_eq!(parse_addr("").expect("parse failed"), None);
        assert_eq!(parse_addr("localhost").expect("parse failed"), None);
    }

    #[test]
    fn test_parse_addr_invalid_port() {
        let err = parse_addr("localhost:http").expect_err("expected an error");
        assert!(matches!(err, ParseAddressError::InvalidPort { .. }));
        assert!(err.to_string().contains("localhost:http"));
    }

    #[test]
    fn test_args_defaults() {
        let args = CalloutArgs::try_parse_from(["server"]).expect("parse failed");
        assert!(!args.secure_health_check);
        assert!(!args.combined_health_check);
        assert_eq!(args.address(), None);
        assert_eq!(args.health_check_address(), None);
        assert_eq!(args.insecure_address(), None);
        assert_eq!(args.port, None);
        assert_eq!(args.health_check_port, None);
        assert_eq!(args.insecure_port, None);
    }

    #[test]
    fn test_args_all_flags() {
        let args = CalloutArgs::try_parse_from([
            "server",
            "--secure_health_check",
            "--combined_health_check",
            "--address",
            "0.0.0.0:443",
            "--health_check_address",
            "0.0.0.0:80",
            "--insecure_address",
            "127.0.0.1:8080",
            "--port",
            "8443",
            "--health_check_port",
            "8000",
            "--insecure_port",
            "9000",
        ])
        .expect("parse failed");

        assert!(args.secure_health_check);
        assert!(args.combined_health_check);
        assert_eq!(args.address().expect("no address").to_string(), "0.0.0.0:443");
        assert_eq!(
            args.health_check_address().expect("no address").to_string(),
            "0.0.0.0:80"
        );
        assert_eq!(
            args.insecure_address().expect("no address").to_string(),
            "127.0.0.1:8080"
        );
        assert_eq!(args.port, Some(8443));
        assert_eq!(args.health_check_port, Some(8000));
        assert_eq!(args.insecure_port, Some(9000));
    }

    #[test]
    fn test_args_address_without_separator_is_absent() {
        let args = CalloutArgs::try_parse_from(["server", "--address", "localhost"])
            .expect("parse failed");
        assert_eq!(args.address(), None);
    }

    #[test]
    fn test_args_malformed_port_fails_loudly() {
        assert!(CalloutArgs::try_parse_from(["server", "--address", "localhost:http"]).is_err());
        assert!(CalloutArgs::try_parse_from(["server", "--port", "http"]).is_err());
    }
}
