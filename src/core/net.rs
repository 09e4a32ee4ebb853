// src/core/net.rs

// HTTP/1.0 GET over TCP (std-only). Plain http:// only; a redirect to
// https:// is reported as a network error naming the target.

use std::{io::{self, Read, Write}, net::TcpStream, time::Duration};

use crate::config::consts::{SOCKET_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Error, Result};

const MAX_REDIRECTS: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpUrl {
    pub host: String,
    pub port: u16,
    /// Path plus query, always starting with '/'.
    pub path: String,
}

impl HttpUrl {
    pub fn parse(url: &str) -> Result<Self> {
        let url = url.trim();
        let rest = match url.split_once("://") {
            Some((scheme, rest)) if scheme.eq_ignore_ascii_case("http") => rest,
            Some((scheme, _)) => {
                return Err(Error::Network(format!(
                    "unsupported scheme '{scheme}' in {url} (save the page locally instead)"
                )))
            }
            None => url,
        };
        let (authority, path) = match rest.find('/') {
            Some(i) => (&rest[..i], &rest[i..]),
            None => (rest, "/"),
        };
        let (host, port) = match authority.rsplit_once(':') {
            Some((h, p)) => {
                let port = p.parse::<u16>()
                    .map_err(|_| Error::Network(format!("bad port in {url}")))?;
                (h, port)
            }
            None => (authority, 80),
        };
        if host.is_empty() {
            return Err(Error::Network(format!("missing host in {url}")));
        }
        Ok(Self { host: s!(host), port, path: s!(path) })
    }

    pub fn to_url(&self) -> String {
        if self.port == 80 {
            format!("http://{}{}", self.host, self.path)
        } else {
            format!("http://{}:{}{}", self.host, self.port, self.path)
        }
    }
}

/// Fetch `url` and decode the body to text, following a few redirects.
pub fn get_text(url: &str) -> Result<String> {
    let mut target = HttpUrl::parse(url)?;
    for _ in 0..=MAX_REDIRECTS {
        match http_get(&target)? {
            Response::Body(bytes) => return Ok(decode_body(&bytes)),
            Response::Redirect(location) => {
                logd!("HTTP: {} → {}", target.to_url(), location);
                target = resolve_location(&target, &location)?;
            }
        }
    }
    Err(Error::Network(format!("too many redirects for {url}")))
}

pub enum Response {
    Body(Vec<u8>),
    Redirect(String),
}

pub fn http_get(url: &HttpUrl) -> Result<Response> {
    let net_err = |e: io::Error| Error::Network(format!("{}: {e}", url.to_url()));

    let mut s = TcpStream::connect((url.host.as_str(), url.port)).map_err(net_err)?;
    s.set_read_timeout(Some(Duration::from_secs(SOCKET_TIMEOUT_SECS))).map_err(net_err)?;
    s.set_write_timeout(Some(Duration::from_secs(SOCKET_TIMEOUT_SECS))).map_err(net_err)?;

    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: {}\r\nAccept: text/html\r\nConnection: close\r\n\r\n",
        url.path, url.host, USER_AGENT
    );
    s.write_all(req.as_bytes()).map_err(net_err)?;
    s.flush().map_err(net_err)?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf).map_err(net_err)?;
    parse_response(&buf, url)
}

fn parse_response(buf: &[u8], url: &HttpUrl) -> Result<Response> {
    let split = buf.windows(4).position(|w| w == b"\r\n\r\n")
        .ok_or_else(|| Error::Network(format!("malformed HTTP response from {}", url.to_url())))?;
    let head = String::from_utf8_lossy(&buf[..split]);
    let body = buf[split + 4..].to_vec();

    let status_line = head.lines().next().unwrap_or("");
    let code = status_line.split_whitespace().nth(1).unwrap_or("");
    match code {
        "200" => Ok(Response::Body(body)),
        "301" | "302" | "303" | "307" | "308" => {
            let location = head.lines()
                .find_map(|l| {
                    let (k, v) = l.split_once(':')?;
                    k.trim().eq_ignore_ascii_case("location").then(|| s!(v.trim()))
                })
                .ok_or_else(|| Error::Network(format!("redirect without Location from {}", url.to_url())))?;
            Ok(Response::Redirect(location))
        }
        _ => Err(Error::Network(format!("HTTP error: {} {}", status_line, url.to_url()))),
    }
}

fn resolve_location(base: &HttpUrl, location: &str) -> Result<HttpUrl> {
    if location.contains("://") {
        HttpUrl::parse(location)
    } else if location.starts_with('/') {
        Ok(HttpUrl { path: s!(location), ..base.clone() })
    } else {
        let dir = base.path.rsplit_once('/').map_or("", |(d, _)| d);
        Ok(HttpUrl { path: join!(dir, "/", location), ..base.clone() })
    }
}

/// UTF-8 if it is valid UTF-8, otherwise Latin-1 (every byte is one char).
pub fn decode_body(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s!(s),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

/// Percent-encode a query value (RFC 3986 unreserved characters pass through).
pub fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => out.push(b as char),
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}
