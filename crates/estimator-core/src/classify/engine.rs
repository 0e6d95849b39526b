use crate::catalog::schema::{ScopeCatalog, ScopeDef};
use crate::model::ScopeMatch;

/// Check a document's text against every scope of a catalog.
///
/// Produces exactly one record per scope, in catalog order. A scope is
/// matched when any of its keywords occurs at least once in the lowercased
/// text. Occurrences are not counted.
pub fn classify_scopes(text: &str, catalog: &ScopeCatalog) -> Vec<ScopeMatch> {
    let haystack = text.to_lowercase();
    catalog
        .scopes
        .iter()
        .map(|scope| classify_one(&haystack, scope))
        .collect()
}

fn classify_one(haystack: &str, scope: &ScopeDef) -> ScopeMatch {
    let matched = scope
        .keywords
        .iter()
        .any(|kw| haystack.contains(kw.as_str()));

    ScopeMatch {
        id: scope.id.clone(),
        title: scope.title.clone(),
        matched,
        keywords: scope.keywords.clone(),
    }
}

/// The matched records only, in catalog order.
pub fn detected(matches: &[ScopeMatch]) -> impl Iterator<Item = &ScopeMatch> {
    matches.iter().filter(|m| m.matched)
}
