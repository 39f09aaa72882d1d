//! Raw header specification parsing and merging.
//!
//! # Responsibilities
//! - Parse `Name: Value` strings supplied on the command line or in config
//! - Layer parsed headers over the default header set
//!
//! # Design Decisions
//! - Split on the first colon only; the rest of the string is the value
//! - Specs without a colon are ignored, never reported
//! - Names are normalized to lowercase so overrides match case-insensitively

use std::collections::BTreeMap;

/// Headers applied to every response unless overridden.
pub const DEFAULT_HEADERS: &[(&str, &str)] = &[("content-type", "text/plain; charset=utf-8")];

/// The resolved header set served with every response.
///
/// Keys are lower-cased header names and are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSet {
    entries: BTreeMap<String, String>,
}

impl HeaderSet {
    /// The default header set, with nothing layered on top.
    pub fn defaults() -> Self {
        let entries = DEFAULT_HEADERS
            .iter()
            .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
            .collect();
        Self { entries }
    }

    /// Look up a header by name. The name is matched case-insensitively.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&name.to_lowercase())
            .map(String::as_str)
    }

    /// Iterate over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Never zero: the defaults are always present.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn insert(&mut self, name: String, value: String) {
        self.entries.insert(name, value);
    }
}

impl Default for HeaderSet {
    fn default() -> Self {
        Self::defaults()
    }
}

/// Parse one raw header specification.
///
/// Returns `None` when the spec contains no colon.
pub fn parse_spec(raw: &str) -> Option<(String, String)> {
    let (name, value) = raw.split_once(':')?;
    Some((name.trim().to_lowercase(), value.trim().to_string()))
}

/// Merge raw header specifications over the defaults.
///
/// Later specs overwrite earlier ones with the same name.
pub fn resolve<I, S>(raw_specs: I) -> HeaderSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut headers = HeaderSet::defaults();
    for (name, value) in raw_specs
        .into_iter()
        .filter_map(|raw| parse_spec(raw.as_ref()))
    {
        headers.insert(name, value);
    }
    headers
}
