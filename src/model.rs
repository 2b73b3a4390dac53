//! Data model shared by the extractors and the coverage aggregator.

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::str::FromStr;

/// HTTP methods recognized on both the documentation and client side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    /// Map a client call verb (`get`, `upload`, ...) to its HTTP method.
    ///
    /// `upload` is a multipart submission and counts as `POST`.
    pub fn from_verb(verb: &str) -> Option<Method> {
        if verb.eq_ignore_ascii_case("upload") {
            return Some(Method::Post);
        }
        verb.parse().ok()
    }
}

impl FromStr for Method {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Full Unicode uppercasing, so case-folded keywords like `POſT` parse.
        match s.to_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "PATCH" => Ok(Method::Patch),
            "DELETE" => Ok(Method::Delete),
            _ => Err(anyhow::anyhow!("unknown HTTP method: {}", s)),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `(method, path)` pair with the path kept exactly as written.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Endpoint {
    pub method: Method,
    pub path: String,
}

impl Endpoint {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Endpoint {
            method,
            path: path.into(),
        }
    }
}

impl fmt::Display for Endpoint {
    /// `"METHOD path"`, the form used in missing-endpoint lists.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// Insertion-ordered set of endpoints.
#[derive(Debug, Default, Clone)]
pub struct EndpointList {
    order: Vec<Endpoint>,
    seen: HashSet<Endpoint>,
}

impl EndpointList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `endpoint` unless already present. Returns whether it was added.
    pub fn insert(&mut self, endpoint: Endpoint) -> bool {
        if self.seen.contains(&endpoint) {
            return false;
        }
        self.seen.insert(endpoint.clone());
        self.order.push(endpoint);
        true
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Endpoint> {
        self.order.iter()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<'a> IntoIterator for &'a EndpointList {
    type Item = &'a Endpoint;
    type IntoIter = std::slice::Iter<'a, Endpoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Endpoint> for EndpointList {
    fn from_iter<I: IntoIterator<Item = Endpoint>>(iter: I) -> Self {
        let mut list = EndpointList::new();
        for endpoint in iter {
            list.insert(endpoint);
        }
        list
    }
}

/// Endpoints documented by one documentation file.
#[derive(Debug, Clone)]
pub struct DocSection {
    /// File name, e.g. `projects.md`
    pub name: String,
    pub endpoints: EndpointList,
}

/// Every endpoint invoked anywhere in the client, without provenance.
pub type ClientEndpoints = BTreeSet<Endpoint>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_parse_is_case_insensitive() {
        assert_eq!("get".parse::<Method>().unwrap(), Method::Get);
        assert_eq!("Delete".parse::<Method>().unwrap(), Method::Delete);
        assert!("HEAD".parse::<Method>().is_err());
    }

    #[test]
    fn method_parse_folds_long_s() {
        assert_eq!("po\u{17f}t".parse::<Method>().unwrap(), Method::Post);
    }

    #[test]
    fn upload_verb_is_post() {
        assert_eq!(Method::from_verb("upload"), Some(Method::Post));
        assert_eq!(Method::from_verb("patch"), Some(Method::Patch));
        assert_eq!(Method::from_verb("fetch"), None);
    }

    #[test]
    fn endpoint_display() {
        let ep = Endpoint::new(Method::Post, "/projects.json");
        assert_eq!(ep.to_string(), "POST /projects.json");
    }

    #[test]
    fn endpoint_list_keeps_first_occurrence_order() {
        let list: EndpointList = [
            Endpoint::new(Method::Get, "/b"),
            Endpoint::new(Method::Get, "/a"),
            Endpoint::new(Method::Get, "/b"),
            Endpoint::new(Method::Post, "/b"),
        ]
        .into_iter()
        .collect();

        let rendered: Vec<String> = list.iter().map(|e| e.to_string()).collect();
        assert_eq!(rendered, ["GET /b", "GET /a", "POST /b"]);
    }
}
