//! Token catalogs
//!
//! Static, process-wide token lists for every content-negotiation header family.
//! Each family has a `common` subset (what real browsers tend to send) and an `all`
//! superset, registered under labels such as `"mime/common"` or `"charset/all"`.

mod charset;
mod encoding;
mod language;
mod mime;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A static list of header tokens
pub type TokenList = &'static [&'static str];

/// Header families that draw their tokens from a catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Mime,
    Charset,
    Encoding,
    Language,
}

impl Family {
    pub const ALL: [Family; 4] = [
        Family::Mime,
        Family::Charset,
        Family::Encoding,
        Family::Language,
    ];

    /// Label prefix used in the registry
    pub fn prefix(&self) -> &'static str {
        match self {
            Family::Mime => "mime",
            Family::Charset => "charset",
            Family::Encoding => "encoding",
            Family::Language => "language",
        }
    }

    /// Catch-all token appended as the lowest-priority fallback
    pub fn wildcard(&self) -> &'static str {
        match self {
            Family::Mime => "*/*",
            Family::Charset | Family::Encoding | Family::Language => "*",
        }
    }

    /// HTTP header carrying values of this family
    pub fn header_name(&self) -> &'static str {
        match self {
            Family::Mime => "Accept",
            Family::Charset => "Accept-Charset",
            Family::Encoding => "Accept-Encoding",
            Family::Language => "Accept-Language",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Which slice of a family's catalog to draw from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subset {
    Common,
    All,
}

impl Subset {
    pub const ALL: [Subset; 2] = [Subset::Common, Subset::All];

    fn suffix(&self) -> &'static str {
        match self {
            Subset::Common => "common",
            Subset::All => "all",
        }
    }
}

static REGISTRY: Lazy<HashMap<String, TokenList>> = Lazy::new(|| {
    let mut registry = HashMap::new();
    for family in Family::ALL {
        for subset in Subset::ALL {
            registry.insert(label(family, subset), tokens(family, subset));
        }
    }
    registry
});

/// Registry label for a family/subset pair, e.g. `"encoding/common"`
pub fn label(family: Family, subset: Subset) -> String {
    format!("{}/{}", family.prefix(), subset.suffix())
}

/// Tokens for a family/subset pair
pub fn tokens(family: Family, subset: Subset) -> TokenList {
    match (family, subset) {
        (Family::Mime, Subset::Common) => mime::COMMON,
        (Family::Mime, Subset::All) => mime::ALL,
        (Family::Charset, Subset::Common) => charset::COMMON,
        (Family::Charset, Subset::All) => charset::ALL,
        (Family::Encoding, Subset::Common) => encoding::COMMON,
        (Family::Encoding, Subset::All) => encoding::ALL,
        (Family::Language, Subset::Common) => language::COMMON,
        (Family::Language, Subset::All) => language::ALL,
    }
}

/// Look up a token list by its registry label
pub fn get(label: &str) -> Option<TokenList> {
    REGISTRY.get(label).copied()
}

/// All registered labels, sorted
pub fn labels() -> Vec<&'static str> {
    let mut labels: Vec<&'static str> = REGISTRY.keys().map(|s| s.as_str()).collect();
    labels.sort_unstable();
    labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_labels() {
        let labels = labels();
        assert_eq!(labels.len(), 8);
        assert!(labels.contains(&"mime/common"));
        assert!(labels.contains(&"charset/all"));
        assert!(get("trident/all").is_none());
    }

    #[test]
    fn test_common_is_subset_of_all() {
        for family in Family::ALL {
            let all: HashSet<_> = tokens(family, Subset::All).iter().collect();
            for token in tokens(family, Subset::Common) {
                assert!(all.contains(token), "{} missing from {}/all", token, family);
            }
        }
    }

    #[test]
    fn test_tokens_are_header_safe() {
        for label in labels() {
            for token in get(label).unwrap() {
                assert!(!token.is_empty());
                assert!(!token.contains([',', ';', ' ']), "bad token {:?} in {}", token, label);
            }
        }
    }

    #[test]
    fn test_wildcards() {
        assert_eq!(Family::Mime.wildcard(), "*/*");
        assert_eq!(Family::Encoding.wildcard(), "*");
        assert_eq!(Family::Charset.header_name(), "Accept-Charset");
    }
}
