//! Synonym table for query expansion

use std::collections::{HashMap, HashSet};

/// Built-in synonym entries for the jewelry domain
///
/// Maps a normalized root token to its normalized alternatives. Entries are
/// plain lookups; no symmetry is assumed ("zerafet" is a common typo that
/// maps back to the canonical forms, not the other way around).
pub const JEWELRY_SYNONYMS: &[(&str, &[&str])] = &[
    ("zarafet", &["zarif", "ince", "kibar", "zerafet"]),
    ("zerafet", &["zarif", "zarafet"]),
    ("zarif", &["zarafet", "ince", "kibar"]),
    ("sik", &["siklik", "guzel", "modern", "moda", "trend"]),
    ("siklik", &["sik", "guzel"]),
    ("altin", &["gold", "sari", "14k", "22k"]),
    ("gold", &["altin", "sari"]),
    ("gumus", &["silver", "gri", "beyaz", "925"]),
    ("silver", &["gumus"]),
    ("kolye", &["zincir", "gerdanlik", "ucu"]),
    ("gerdanlik", &["kolye"]),
    ("takim", &["set"]),
    ("set", &["takim"]),
    ("hediye", &["armagan", "ozel"]),
    ("tas", &["pirlanta", "zirkon", "swarovski"]),
    ("dogal", &["naturel", "gercek"]),
];

/// Lookup table from a normalized root token to alternative tokens
///
/// The table is injected into the ranker at construction time so tests can
/// substitute their own entries; [`SynonymTable::default`] carries the
/// built-in jewelry entries.
#[derive(Debug, Clone)]
pub struct SynonymTable {
    map: HashMap<String, Vec<String>>,
}

impl SynonymTable {
    /// Build a table from explicit entries
    pub fn new(entries: impl IntoIterator<Item = (String, Vec<String>)>) -> Self {
        Self {
            map: entries.into_iter().collect(),
        }
    }

    /// The built-in jewelry-domain table
    pub fn jewelry() -> Self {
        Self::new(JEWELRY_SYNONYMS.iter().map(|(root, alts)| {
            (
                (*root).to_string(),
                alts.iter().map(|s| (*s).to_string()).collect(),
            )
        }))
    }

    /// A table with no entries (expansion becomes a no-op)
    pub fn empty() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Alternatives mapped for `token`, if the token is a known root
    pub fn alternatives(&self, token: &str) -> Option<&[String]> {
        self.map.get(token).map(Vec::as_slice)
    }

    /// Number of root tokens in the table
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the table has no entries
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for SynonymTable {
    fn default() -> Self {
        Self::jewelry()
    }
}

/// A search token with its provenance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchToken {
    pub text: String,
    /// true when the token was added via table lookup rather than typed
    pub synonym_derived: bool,
}

/// Expand a normalized query into its search tokens
///
/// Splits on whitespace runs, then unions in the table alternatives of each
/// typed token. A token that was both typed and mapped counts as typed, so
/// it never takes the synonym discount.
pub fn expand_query(normalized_query: &str, table: &SynonymTable) -> Vec<SearchToken> {
    let initial: Vec<String> = normalized_query
        .split_whitespace()
        .map(str::to_string)
        .collect();

    let mut tokens: Vec<SearchToken> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for token in &initial {
        if seen.insert(token.clone()) {
            tokens.push(SearchToken {
                text: token.clone(),
                synonym_derived: false,
            });
        }
    }

    for token in &initial {
        if let Some(alternatives) = table.alternatives(token) {
            for alt in alternatives {
                if seen.insert(alt.clone()) {
                    tokens.push(SearchToken {
                        text: alt.clone(),
                        synonym_derived: true,
                    });
                }
            }
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternatives_lookup() {
        let table = SynonymTable::jewelry();
        let alts = table.alternatives("altin").unwrap();
        assert!(alts.contains(&"gold".to_string()));
        assert!(alts.contains(&"sari".to_string()));
        assert!(table.alternatives("yok-boyle-kelime").is_none());
    }

    #[test]
    fn test_expand_tags_synonyms() {
        let table = SynonymTable::jewelry();
        let tokens = expand_query("altin kolye", &table);

        let altin = tokens.iter().find(|t| t.text == "altin").unwrap();
        assert!(!altin.synonym_derived);

        let gold = tokens.iter().find(|t| t.text == "gold").unwrap();
        assert!(gold.synonym_derived);

        let zincir = tokens.iter().find(|t| t.text == "zincir").unwrap();
        assert!(zincir.synonym_derived);
    }

    #[test]
    fn test_typed_token_wins_over_derived() {
        // "gold" maps to "altin", but "altin" was typed as well
        let table = SynonymTable::jewelry();
        let tokens = expand_query("gold altin", &table);

        let altin = tokens.iter().find(|t| t.text == "altin").unwrap();
        assert!(!altin.synonym_derived);
    }

    #[test]
    fn test_expand_without_matches_is_identity() {
        let table = SynonymTable::jewelry();
        let tokens = expand_query("minimalist bileklik", &table);
        assert_eq!(tokens.len(), 2);
        assert!(tokens.iter().all(|t| !t.synonym_derived));
    }

    #[test]
    fn test_empty_table() {
        let table = SynonymTable::empty();
        assert!(table.is_empty());
        let tokens = expand_query("altin", &table);
        assert_eq!(tokens.len(), 1);
        assert!(!tokens[0].synonym_derived);
    }
}
