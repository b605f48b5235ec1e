use std::net::{AddrParseError, SocketAddr};
use std::num::ParseIntError;

use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;

/// Gets the host:port to serve on from the env vars HOST and PORT.
/// Uses defaults `127.0.0.1:3000` for whichever is unset.
pub fn get_api_base_url() -> Result<SocketAddr, HostPortError> {
    parse_host_port(std::env::var("HOST").ok(), std::env::var("PORT").ok())
}

fn parse_host_port(host: Option<String>, port: Option<String>) -> Result<SocketAddr, HostPortError> {
    let host = host.unwrap_or_else(|| DEFAULT_HOST.to_string());
    let port = match port {
        Some(p) => p.trim().parse::<u16>()?,
        None => DEFAULT_PORT,
    };
    let address = format!("{}:{}", host, port).parse::<SocketAddr>()?;
    Ok(address)
}

#[derive(Debug, Error)]
pub enum HostPortError {
    #[error("Invalid port: {0}")]
    InvalidPort(#[from] ParseIntError),

    #[error("Invalid hostname: {0}")]
    InvalidHostname(#[from] AddrParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let addr = parse_host_port(None, None).unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn test_overrides() {
        let addr = parse_host_port(Some("0.0.0.0".to_string()), Some("8080".to_string())).unwrap();
        assert_eq!(addr.to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn test_invalid_port() {
        let err = parse_host_port(None, Some("http".to_string())).unwrap_err();
        assert!(matches!(err, HostPortError::InvalidPort(_)));
    }

    #[test]
    fn test_invalid_host() {
        let err = parse_host_port(Some("not a host".to_string()), None).unwrap_err();
        assert!(matches!(err, HostPortError::InvalidHostname(_)));
    }
}
