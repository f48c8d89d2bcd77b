//! Hierarchical names stored in an arena.

use wrapgen_core::{concatenate_words, join_camel_case, join_snake_case, split_words};

/// Handle to a name segment in a [`NameArena`].
///
/// Two names are equal only if they are the same segment: equality is
/// chain identity, not spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NameId(u32);

impl NameId {
    /// Index of this segment in its arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// What kind of entity a name segment denotes.
///
/// The kind selects the spelling used when the name is projected into
/// target-language syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameKind {
    Namespace,
    Class,
    Enum,
    EnumValue,
    Method,
    Argument,
    Property,
}

impl NameKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NameKind::Namespace => "namespace",
            NameKind::Class => "class",
            NameKind::Enum => "enum",
            NameKind::EnumValue => "enum value",
            NameKind::Method => "method",
            NameKind::Argument => "argument",
            NameKind::Property => "property",
        }
    }
}

/// One link of a name chain: lowercase words plus the enclosing scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameSegment {
    pub kind: NameKind,
    pub words: Vec<String>,
    pub prev: Option<NameId>,
}

/// Append-only storage for name segments.
///
/// Segments are never mutated once pushed, so a [`NameId`] always denotes
/// the same chain.
#[derive(Debug, Clone, Default)]
pub struct NameArena {
    segments: Vec<NameSegment>,
}

impl NameArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a segment made of the given words under `prev`.
    pub fn push<I, S>(&mut self, kind: NameKind, words: I, prev: Option<NameId>) -> NameId
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let id = NameId(self.segments.len() as u32);
        self.segments.push(NameSegment {
            kind,
            words: words.into_iter().map(|w| w.into().to_lowercase()).collect(),
            prev,
        });
        id
    }

    /// Add a segment from a snake_case identifier (e.g., "proxy_config").
    pub fn push_snake(&mut self, kind: NameKind, snake: &str, prev: Option<NameId>) -> NameId {
        self.push(kind, split_words(snake), prev)
    }

    pub fn segment(&self, id: NameId) -> &NameSegment {
        &self.segments[id.index()]
    }

    pub fn kind(&self, id: NameId) -> NameKind {
        self.segment(id).kind
    }

    pub fn words(&self, id: NameId) -> &[String] {
        &self.segment(id).words
    }

    pub fn prev(&self, id: NameId) -> Option<NameId> {
        self.segment(id).prev
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterate over the strict ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: NameId) -> Ancestors<'_> {
        Ancestors {
            arena: self,
            next: self.prev(id),
        }
    }

    /// The nearest strict ancestor of the given kind.
    pub fn first_ancestor_of_kind(&self, id: NameId, kind: NameKind) -> Option<NameId> {
        self.ancestors(id).find(|&a| self.kind(a) == kind)
    }

    /// Segments from the root down to `id` (inclusive).
    fn chain(&self, id: NameId) -> Vec<NameId> {
        let mut chain: Vec<NameId> = self.ancestors(id).collect();
        chain.reverse();
        chain.push(id);
        chain
    }

    /// CamelCase spelling; `full` prefixes every ancestor (e.g., "LinphoneProxyConfig").
    pub fn camel_case(&self, id: NameId, full: bool) -> String {
        if full {
            self.chain(id)
                .into_iter()
                .map(|seg| join_camel_case(self.words(seg), false))
                .collect()
        } else {
            join_camel_case(self.words(id), false)
        }
    }

    /// camelCase spelling of the last segment only (e.g., "getDefaultProxy").
    pub fn lower_camel_case(&self, id: NameId) -> String {
        join_camel_case(self.words(id), true)
    }

    /// snake_case spelling; `full` prefixes every ancestor (e.g., "linphone_core_new").
    pub fn snake_case(&self, id: NameId, full: bool) -> String {
        if full {
            self.chain(id)
                .into_iter()
                .map(|seg| join_snake_case(self.words(seg)))
                .collect::<Vec<_>>()
                .join("_")
        } else {
            join_snake_case(self.words(id))
        }
    }

    /// Words glued together in lowercase; `full` prefixes every ancestor.
    pub fn concatenate(&self, id: NameId, full: bool) -> String {
        if full {
            self.chain(id)
                .into_iter()
                .map(|seg| concatenate_words(self.words(seg), false))
                .collect()
        } else {
            concatenate_words(self.words(id), false)
        }
    }

    /// Nearest ancestor shared by `a` and `b`.
    ///
    /// Only strict ancestors are considered; a root name has no common
    /// parent with anything.
    pub fn find_common_parent(&self, a: NameId, b: NameId) -> Option<NameId> {
        let b_ancestors: Vec<NameId> = self.ancestors(b).collect();
        self.ancestors(a).find(|candidate| b_ancestors.contains(candidate))
    }
}

/// Iterator over the strict ancestors of a name, nearest first.
pub struct Ancestors<'a> {
    arena: &'a NameArena,
    next: Option<NameId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NameId;

    fn next(&mut self) -> Option<NameId> {
        let current = self.next?;
        self.next = self.arena.prev(current);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linphone_names() -> (NameArena, NameId, NameId, NameId, NameId) {
        let mut names = NameArena::new();
        let ns = names.push_snake(NameKind::Namespace, "linphone", None);
        let core = names.push_snake(NameKind::Class, "core", Some(ns));
        let method = names.push_snake(NameKind::Method, "get_default_proxy_config", Some(core));
        let proxy = names.push_snake(NameKind::Class, "proxy_config", Some(ns));
        (names, ns, core, method, proxy)
    }

    #[test]
    fn test_spellings() {
        let (names, ns, _, method, proxy) = linphone_names();

        assert_eq!(names.camel_case(proxy, false), "ProxyConfig");
        assert_eq!(names.camel_case(proxy, true), "LinphoneProxyConfig");
        assert_eq!(names.lower_camel_case(method), "getDefaultProxyConfig");
        assert_eq!(names.snake_case(proxy, false), "proxy_config");
        assert_eq!(
            names.snake_case(method, true),
            "linphone_core_get_default_proxy_config"
        );
        assert_eq!(names.concatenate(ns, true), "linphone");
    }

    #[test]
    fn test_ancestors_nearest_first() {
        let (names, ns, core, method, _) = linphone_names();

        let ancestors: Vec<_> = names.ancestors(method).collect();
        assert_eq!(ancestors, vec![core, ns]);
        assert_eq!(
            names.first_ancestor_of_kind(method, NameKind::Namespace),
            Some(ns)
        );
        assert_eq!(names.first_ancestor_of_kind(ns, NameKind::Namespace), None);
    }

    #[test]
    fn test_find_common_parent() {
        let (names, ns, core, method, proxy) = linphone_names();

        assert_eq!(names.find_common_parent(proxy, method), Some(ns));
        assert_eq!(names.find_common_parent(core, method), Some(ns));
        assert_eq!(names.find_common_parent(ns, method), None);
    }

    #[test]
    fn test_equality_is_identity() {
        let mut names = NameArena::new();
        let a = names.push_snake(NameKind::Class, "core", None);
        let b = names.push_snake(NameKind::Class, "core", None);

        assert_ne!(a, b);
        assert_eq!(names.camel_case(a, true), names.camel_case(b, true));
    }
}
