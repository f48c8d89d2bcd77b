//! Name resolution: projecting name chains into C++ identifiers.

use wrapgen_ir::{NameArena, NameId, NameKind};

/// C++ keywords that cannot be used as member or argument identifiers.
const CPP_RESERVED_WORDS: &[&str] = &[
    "alignas", "alignof", "and", "asm", "auto", "bool", "break", "case", "catch", "char",
    "class", "const", "constexpr", "continue", "decltype", "default", "delete", "do", "double",
    "else", "enum", "explicit", "export", "extern", "false", "float", "for", "friend", "goto",
    "if", "inline", "int", "long", "mutable", "namespace", "new", "noexcept", "not", "nullptr",
    "operator", "or", "private", "protected", "public", "register", "return", "short",
    "signed", "sizeof", "static", "struct", "switch", "template", "this", "throw", "true",
    "try", "typedef", "typeid", "typename", "union", "unsigned", "using", "virtual", "void",
    "volatile", "while", "xor",
];

/// Check if a name is a C++ reserved word.
pub fn is_reserved(name: &str) -> bool {
    CPP_RESERVED_WORDS.contains(&name)
}

/// Get a safe identifier, prefixing reserved words with an underscore ("new" -> "_new").
pub fn safe_name(name: String) -> String {
    if is_reserved(&name) {
        format!("_{}", name)
    } else {
        name
    }
}

/// Spells names of the abstract model as C++ identifiers.
///
/// Each segment kind has its own spelling: namespaces are concatenated
/// lowercase words, classes and enums CamelCase, methods and arguments
/// camelCase. Qualified spellings join segments with `::`.
#[derive(Debug, Clone, Copy)]
pub struct NameResolver<'a> {
    names: &'a NameArena,
}

impl<'a> NameResolver<'a> {
    pub fn new(names: &'a NameArena) -> Self {
        Self { names }
    }

    pub fn names(&self) -> &'a NameArena {
        self.names
    }

    /// Spell `name`, qualified by its ancestors when `recursive` is set.
    ///
    /// Qualification stops at the root or at `top_ancestor`, which is
    /// itself not spelled.
    pub fn translate(&self, name: NameId, recursive: bool, top_ancestor: Option<NameId>) -> String {
        let segment = self.names.segment(name);

        if segment.kind == NameKind::EnumValue {
            // Values are flattened onto their enum rather than chained.
            let value = self.names.camel_case(name, false);
            return match segment.prev {
                Some(enum_name) => {
                    format!("{}{}", self.translate(enum_name, recursive, top_ancestor), value)
                }
                None => value,
            };
        }

        let own = self.segment_spelling(name);
        match segment.prev {
            Some(prev) if recursive && Some(prev) != top_ancestor => {
                format!("{}::{}", self.translate(prev, recursive, top_ancestor), own)
            }
            _ => own,
        }
    }

    /// Unqualified spelling.
    pub fn short(&self, name: NameId) -> String {
        self.translate(name, false, None)
    }

    /// Spelling qualified up to, but excluding, `top_ancestor`.
    ///
    /// `None` qualifies all the way from the global namespace.
    pub fn qualified(&self, name: NameId, top_ancestor: Option<NameId>) -> String {
        self.translate(name, true, top_ancestor)
    }

    /// Name of the underlying C type (e.g., "LinphoneProxyConfig").
    pub fn c_type(&self, name: NameId) -> String {
        self.names.camel_case(name, true)
    }

    /// Name of the underlying C entry point (e.g., "linphone_core_new").
    pub fn c_function(&self, name: NameId) -> String {
        self.names.snake_case(name, true)
    }

    /// Nearest ancestor shared by two names.
    ///
    /// Used to qualify a referenced type only as much as needed relative
    /// to the method that references it.
    pub fn common_parent(&self, a: NameId, b: NameId) -> Option<NameId> {
        self.names.find_common_parent(a, b)
    }

    /// The namespace enclosing `name`.
    pub fn namespace_of(&self, name: NameId) -> Option<NameId> {
        self.names.first_ancestor_of_kind(name, NameKind::Namespace)
    }

    fn segment_spelling(&self, name: NameId) -> String {
        match self.names.kind(name) {
            NameKind::Namespace => self.names.concatenate(name, false),
            NameKind::Class | NameKind::Enum | NameKind::EnumValue => {
                self.names.camel_case(name, false)
            }
            NameKind::Method | NameKind::Argument | NameKind::Property => {
                safe_name(self.names.lower_camel_case(name))
            }
        }
    }
}
