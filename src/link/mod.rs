//! Shareable links
//!
//! A planner's state travels in the query string of its page address. This
//! module holds the link value type and the locations a link lives in.

pub mod location;

pub use location::{LinkLocation, MemoryLocation};

use std::fmt;

/// A page address split into path, query pairs and fragment
///
/// The "path" is everything before the query, so an absolute address keeps
/// its scheme and host there untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShareLink {
    path: String,
    query: Vec<(String, String)>,
    fragment: Option<String>,
}

impl ShareLink {
    /// A link to `path` with no query and no fragment
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
            fragment: None,
        }
    }

    /// Parse `path?query#fragment`
    ///
    /// Parsing never fails: malformed percent escapes are kept as literal
    /// text and empty `&&` segments are skipped.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        let (rest, fragment) = match s.split_once('#') {
            Some((rest, frag)) => (rest, Some(frag.to_string())),
            None => (s, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, query),
            None => (rest, ""),
        };

        let query = form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        Self {
            path: path.to_string(),
            query,
            fragment,
        }
    }

    /// The part before the query string
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The fragment, without the leading `#`
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// All query pairs in order
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    /// First value for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the link carries any query parameter at all
    pub fn has_params(&self) -> bool {
        !self.query.is_empty()
    }

    /// Same path and fragment, new query
    pub fn with_query(&self, query: Vec<(String, String)>) -> Self {
        Self {
            path: self.path.clone(),
            query,
            fragment: self.fragment.clone(),
        }
    }

    /// The query string, form-encoded, without the leading `?`
    pub fn query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query.iter())
            .finish()
    }
}

impl fmt::Display for ShareLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)?;
        if self.has_params() {
            write!(f, "?{}", self.query_string())?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{}", fragment)?;
        }
        Ok(())
    }
}
