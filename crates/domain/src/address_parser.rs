use crate::NetAddrError;
use std::net::Ipv6Addr;
use std::str::FromStr;

/// Pieces of a `host[:port]` token. Every part is optional: `"8080"` is a
/// bare port, `"example.com"` a bare host.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HostPort {
    pub host: Option<String>,
    pub scope_id: Option<String>,
    pub port: Option<u16>,
}

impl FromStr for HostPort {
    type Err = NetAddrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_addr_port(s)
    }
}

/// Splits a token into host, IPv6 scope id and port.
///
/// Accepted shapes: `port`, `host`, `host:port`, `[v6]`, `[v6%scope]`, and
/// the bracketed forms followed by `:port`. IPv6 literals must be bracketed,
/// otherwise a trailing `:digits` group is read as the port.
pub fn parse_addr_port(text: &str) -> Result<HostPort, NetAddrError> {
    if text.is_empty() {
        return Err(NetAddrError::InvalidFormat("empty address".to_string()));
    }

    let trailing_digits = text.bytes().rev().take_while(u8::is_ascii_digit).count();
    let digits_start = text.len() - trailing_digits;

    if digits_start == 0 {
        return Ok(HostPort {
            port: Some(parse_port(text)?),
            ..HostPort::default()
        });
    }

    let mut host = text;
    let mut port = None;
    let colon = digits_start - 1;
    if text.as_bytes()[colon] == b':' && trailing_digits > 0 {
        if colon == 0 {
            return Err(NetAddrError::InvalidFormat(format!(
                "{text}: missing host before port"
            )));
        }
        port = Some(parse_port(&text[digits_start..])?);
        host = &text[..colon];
    }

    if host.starts_with('[') {
        let (literal, scope_id) = split_bracketed(host)?;
        return Ok(HostPort {
            host: Some(literal.to_string()),
            scope_id: scope_id.map(str::to_string),
            port,
        });
    }

    Ok(HostPort {
        host: Some(host.to_string()),
        scope_id: None,
        port,
    })
}

fn parse_port(digits: &str) -> Result<u16, NetAddrError> {
    match digits.parse::<u32>() {
        Ok(port @ 1..=65535) => Ok(port as u16),
        _ => Err(NetAddrError::InvalidPort(digits.to_string())),
    }
}

/// `[literal]` or `[literal%scope]`; the closing bracket must end the token.
fn split_bracketed(host: &str) -> Result<(&str, Option<&str>), NetAddrError> {
    let invalid = || NetAddrError::InvalidFormat(host.to_string());

    match host.find(']') {
        Some(end) if end == host.len() - 1 => {}
        _ => return Err(invalid()),
    }

    let inner = &host[1..host.len() - 1];
    let (literal, scope_id) = match inner.find('%') {
        Some(delim) => {
            let scope = &inner[delim + 1..];
            if scope.is_empty() {
                return Err(invalid());
            }
            (&inner[..delim], Some(scope))
        }
        None => (inner, None),
    };

    if Ipv6Addr::from_str(literal).is_err() {
        return Err(invalid());
    }

    Ok((literal, scope_id))
}
