use std::sync::{Mutex, PoisonError};

use thiserror::Error;
use tracing::info;

use crate::data_models::ListingId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("no page is mounted at {0:?}")]
    UnknownPath(String),
}

/// Pages of the application shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    Search,
    Product(ListingId),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/app".to_string(),
            Route::Login => "/app/login".to_string(),
            Route::Register => "/app/register".to_string(),
            Route::Search => "/app/search".to_string(),
            Route::Product(id) => format!("/app/product/{}", encode_segment(id.as_str())),
        }
    }

    pub fn parse(path: &str) -> Result<Route, RouteError> {
        let trimmed = path.trim_end_matches('/');
        let route = match trimmed {
            "" | "/app" => Route::Home,
            "/app/login" => Route::Login,
            "/app/register" => Route::Register,
            "/app/search" => Route::Search,
            other => match other.strip_prefix("/app/product/") {
                Some(raw) if !raw.is_empty() && !raw.contains('/') => decode_segment(raw)
                    .map(|id| Route::Product(id.into()))
                    .ok_or_else(|| RouteError::UnknownPath(path.to_string()))?,
                _ => return Err(RouteError::UnknownPath(path.to_string())),
            },
        };
        Ok(route)
    }
}

// Percent-encodes every byte outside the unreserved set.
fn encode_segment(segment: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut out = String::with_capacity(segment.len());
    for &b in segment.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(char::from(b));
            }
            _ => {
                out.push('%');
                out.push(char::from(HEX[(b >> 4) as usize]));
                out.push(char::from(HEX[(b & 0x0F) as usize]));
            }
        }
    }
    out
}

fn decode_segment(segment: &str) -> Option<String> {
    let bytes = segment.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = segment.get(i + 1..i + 3)?;
            if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return None;
            }
            out.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).ok()
}

/// Routing collaborator: receives navigation intents from a page.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Navigator that keeps every visited route in order.
#[derive(Debug, Default)]
pub struct HistoryNavigator {
    history: Mutex<Vec<Route>>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<Route> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn current(&self) -> Option<Route> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&self, route: Route) {
        info!(path = %route.path(), "navigating");
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_path() {
        assert_eq!(Route::Product("42".into()).path(), "/app/product/42");
    }

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(Route::parse("/").unwrap(), Route::Home);
        assert_eq!(Route::parse("/app").unwrap(), Route::Home);
        assert_eq!(Route::parse("/app/login").unwrap(), Route::Login);
        assert_eq!(Route::parse("/app/register/").unwrap(), Route::Register);
        assert_eq!(Route::parse("/app/search").unwrap(), Route::Search);
        assert_eq!(
            Route::parse("/app/product/abc123").unwrap(),
            Route::Product("abc123".into())
        );
    }

    #[test]
    fn test_product_id_is_encoded() {
        assert_eq!(Route::Product("a/b".into()).path(), "/app/product/a%2Fb");
        assert_eq!(
            Route::parse("/app/product/a%2Fb").unwrap(),
            Route::Product("a/b".into())
        );
    }

    #[test]
    fn test_parse_rejects_bad_escapes() {
        assert!(Route::parse("/app/product/%2").is_err());
        assert!(Route::parse("/app/product/%zz").is_err());
        assert!(Route::parse("/app/product/%FF").is_err());
        assert!(Route::parse("/app/product/%+1").is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_paths() {
        assert!(Route::parse("/app/product/").is_err());
        assert!(Route::parse("/app/product/1/edit").is_err());
        assert!(Route::parse("/admin").is_err());
    }

    #[test]
    fn test_path_and_parse_agree() {
        for route in [
            Route::Home,
            Route::Login,
            Route::Register,
            Route::Search,
            Route::Product("7".into()),
            Route::Product("a/b".into()),
            Route::Product("50% off?#top".into()),
            Route::Product("chaise longue".into()),
            Route::Product("théière".into()),
        ] {
            assert_eq!(Route::parse(&route.path()).unwrap(), route);
        }
    }

    #[test]
    fn test_history_navigator_records_in_order() {
        let nav = HistoryNavigator::new();
        assert_eq!(nav.current(), None);
        nav.navigate(Route::Search);
        nav.navigate(Route::Product("1".into()));
        assert_eq!(nav.history(), vec![Route::Search, Route::Product("1".into())]);
        assert_eq!(nav.current(), Some(Route::Product("1".into())));
    }
}
