//! Type references used by arguments and return values.

use crate::NameId;

/// Primitive kinds a [`BaseType`] may name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Void,
    Boolean,
    Character,
    Size,
    Time,
    Integer,
    Floatant,
    String,
    StringArray,
}

impl Primitive {
    /// Look up a primitive by its model name (e.g., "string_array").
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "void" => Some(Primitive::Void),
            "boolean" => Some(Primitive::Boolean),
            "character" => Some(Primitive::Character),
            "size" => Some(Primitive::Size),
            "time" => Some(Primitive::Time),
            "integer" => Some(Primitive::Integer),
            "floatant" => Some(Primitive::Floatant),
            "string" => Some(Primitive::String),
            "string_array" => Some(Primitive::StringArray),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Primitive::Void => "void",
            Primitive::Boolean => "boolean",
            Primitive::Character => "character",
            Primitive::Size => "size",
            Primitive::Time => "time",
            Primitive::Integer => "integer",
            Primitive::Floatant => "floatant",
            Primitive::String => "string",
            Primitive::StringArray => "string_array",
        }
    }

    /// Owned string types held by value when returned.
    pub fn is_string_like(&self) -> bool {
        matches!(self, Primitive::String | Primitive::StringArray)
    }
}

/// Width qualifier of a numeric base type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeSize {
    /// Concrete bit width (e.g., 32 for `int32_t`).
    Bits(u8),
    /// Named width spelled verbatim (e.g., "long", "double").
    Named(String),
}

/// A primitive type reference.
///
/// The primitive is kept by name so that an unknown name fails only the
/// member using it; see [`BaseType::primitive`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseType {
    pub name: String,
    pub size: Option<TypeSize>,
    pub is_const: bool,
    pub is_unsigned: bool,
    pub is_ref: bool,
}

impl BaseType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: None,
            is_const: false,
            is_unsigned: false,
            is_ref: false,
        }
    }

    pub fn primitive(&self) -> Option<Primitive> {
        Primitive::from_name(&self.name)
    }

    pub fn with_size(mut self, size: TypeSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn constant(mut self) -> Self {
        self.is_const = true;
        self
    }

    pub fn unsigned(mut self) -> Self {
        self.is_unsigned = true;
        self
    }

    pub fn reference(mut self) -> Self {
        self.is_ref = true;
        self
    }

    /// Integer with a concrete bit width.
    pub fn is_sized_integer(&self) -> bool {
        self.primitive() == Some(Primitive::Integer) && matches!(self.size, Some(TypeSize::Bits(_)))
    }
}

/// Reference to an enum of the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumType {
    /// C-level name the reference was written with.
    pub name: String,
    /// The referenced enum's name, once resolved.
    pub descriptor: Option<NameId>,
}

/// Reference to a class of the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassType {
    /// C-level name the reference was written with.
    pub name: String,
    /// The referenced class's name, once resolved.
    pub descriptor: Option<NameId>,
    pub is_const: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListType {
    pub contained: Box<Type>,
}

/// A type reference in the abstract model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Base(BaseType),
    Enum(EnumType),
    Class(ClassType),
    List(ListType),
}

impl Type {
    pub fn base(name: impl Into<String>) -> Self {
        Type::Base(BaseType::new(name))
    }

    pub fn void() -> Self {
        Type::base("void")
    }

    pub fn enumeration(name: impl Into<String>, descriptor: Option<NameId>) -> Self {
        Type::Enum(EnumType {
            name: name.into(),
            descriptor,
        })
    }

    pub fn class(name: impl Into<String>, descriptor: Option<NameId>) -> Self {
        Type::Class(ClassType {
            name: name.into(),
            descriptor,
            is_const: false,
        })
    }

    pub fn list(contained: Type) -> Self {
        Type::List(ListType {
            contained: Box::new(contained),
        })
    }

    /// Short name of the variant, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Type::Base(_) => "base",
            Type::Enum(_) => "enum",
            Type::Class(_) => "class",
            Type::List(_) => "list",
        }
    }

    /// Whether every enum/class reference inside this type carries a descriptor.
    pub fn is_resolved(&self) -> bool {
        match self {
            Type::Base(_) => true,
            Type::Enum(e) => e.descriptor.is_some(),
            Type::Class(c) => c.descriptor.is_some(),
            Type::List(l) => l.contained.is_resolved(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_names() {
        assert_eq!(Primitive::from_name("string_array"), Some(Primitive::StringArray));
        assert_eq!(Primitive::from_name("floatant"), Some(Primitive::Floatant));
        assert_eq!(Primitive::from_name("quaternion"), None);
        assert_eq!(Primitive::Integer.as_str(), "integer");
    }

    #[test]
    fn test_sized_integer() {
        assert!(BaseType::new("integer").with_size(TypeSize::Bits(8)).is_sized_integer());
        assert!(!BaseType::new("integer").is_sized_integer());
        assert!(
            !BaseType::new("integer")
                .with_size(TypeSize::Named("long".into()))
                .is_sized_integer()
        );
    }

    #[test]
    fn test_is_resolved() {
        assert!(Type::base("integer").is_resolved());
        assert!(!Type::class("LinphoneCall", None).is_resolved());
        assert!(!Type::list(Type::enumeration("LinphoneReason", None)).is_resolved());
    }
}
