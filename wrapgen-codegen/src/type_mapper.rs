//! Mapping abstract types to C++ type syntax.

use wrapgen_ir::{BaseType, ClassType, EnumType, ListType, NameId, Primitive, Type, TypeSize};

use crate::{Error, NameResolver, Registry, Result};

/// Where a type is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Method argument: heavy types are passed by const reference.
    Argument,
    /// Return value: values are transferred.
    Return,
    /// Element of a list, spelled like a value.
    Element,
}

/// How far enum and class names are qualified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Up to the common parent of the type and the referencing method.
    Inferred,
    /// Up to (excluding) the given namespace.
    Within(NameId),
    /// From the global namespace.
    Global,
}

/// Context of one type translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeContext {
    pub position: Position,
    /// The method whose signature contains the type.
    pub method: NameId,
    pub scope: Scope,
}

impl TypeContext {
    pub fn argument(method: NameId) -> Self {
        Self {
            position: Position::Argument,
            method,
            scope: Scope::Inferred,
        }
    }

    pub fn returned(method: NameId) -> Self {
        Self {
            position: Position::Return,
            method,
            scope: Scope::Inferred,
        }
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    /// Qualify within `namespace`, or globally when there is none.
    pub fn within(self, namespace: Option<NameId>) -> Self {
        match namespace {
            Some(ns) => self.with_scope(Scope::Within(ns)),
            None => self.with_scope(Scope::Global),
        }
    }

    fn element(self) -> Self {
        Self {
            position: Position::Element,
            ..self
        }
    }
}

/// Maps [`Type`]s to C++ syntax.
///
/// Class references become `std::shared_ptr`s: a const reference to the
/// shared pointer in argument position, the shared pointer by value
/// otherwise.
#[derive(Debug, Clone, Copy)]
pub struct TypeMapper<'a> {
    resolver: NameResolver<'a>,
    registry: &'a Registry,
}

impl<'a> TypeMapper<'a> {
    pub fn new(resolver: NameResolver<'a>, registry: &'a Registry) -> Self {
        Self { resolver, registry }
    }

    pub fn translate(&self, ty: &Type, ctx: TypeContext) -> Result<String> {
        match ty {
            Type::Base(base) => self.translate_base(base, ctx.position),
            Type::Enum(e) => self.enum_name(e, ctx),
            Type::Class(c) => self.class_type(c, ctx),
            Type::List(l) => self.list_type(l, ctx),
        }
    }

    /// Whether `ty` must be spelled from the global namespace.
    pub fn is_ambiguous(&self, ty: &Type) -> bool {
        self.registry.is_ambiguous(self.resolver.names(), ty)
    }

    pub fn translate_base(&self, base: &BaseType, position: Position) -> Result<String> {
        let primitive = base.primitive().ok_or_else(|| Error::UnknownBaseType {
            name: base.name.clone(),
        })?;
        let argument = position == Position::Argument;

        let mut res = match primitive {
            Primitive::Void if base.is_ref => return Ok("void *".to_string()),
            Primitive::Void => "void".to_string(),
            Primitive::Boolean => "bool".to_string(),
            Primitive::Character => "char".to_string(),
            Primitive::Size => "size_t".to_string(),
            Primitive::Time => "time_t".to_string(),
            Primitive::Integer => match &base.size {
                None => "int".to_string(),
                Some(TypeSize::Named(name)) => name.clone(),
                Some(TypeSize::Bits(bits)) => format!("int{}_t", bits),
            },
            Primitive::Floatant => match &base.size {
                Some(TypeSize::Named(name)) if name == "double" => "double".to_string(),
                _ => "float".to_string(),
            },
            Primitive::String if argument => "std::string &".to_string(),
            Primitive::String => "std::string".to_string(),
            Primitive::StringArray if argument => "std::list<std::string> &".to_string(),
            Primitive::StringArray => "std::list<std::string>".to_string(),
        };

        if base.is_unsigned {
            if base.is_sized_integer() {
                res = format!("u{}", res);
            } else {
                res = format!("unsigned {}", res);
            }
        }

        // Owned strings returned by value are never const.
        if base.is_const && (argument || !primitive.is_string_like()) {
            res = format!("const {}", res);
        }

        if base.is_ref {
            res.push_str(" &");
        }
        Ok(res)
    }

    /// Qualified name of the referenced enum.
    pub fn enum_name(&self, ty: &EnumType, ctx: TypeContext) -> Result<String> {
        let descriptor = ty
            .descriptor
            .ok_or_else(|| Error::unresolved(ty.name.as_str()))?;
        Ok(self
            .resolver
            .qualified(descriptor, self.top_ancestor(descriptor, ctx)))
    }

    /// Qualified name of the referenced class, without the shared pointer.
    pub fn class_name(&self, ty: &ClassType, ctx: TypeContext) -> Result<String> {
        let descriptor = ty
            .descriptor
            .ok_or_else(|| Error::unresolved(ty.name.as_str()))?;
        let name = self
            .resolver
            .qualified(descriptor, self.top_ancestor(descriptor, ctx));
        if ty.is_const {
            Ok(format!("const {}", name))
        } else {
            Ok(name)
        }
    }

    fn class_type(&self, ty: &ClassType, ctx: TypeContext) -> Result<String> {
        let pointee = self.class_name(ty, ctx)?;
        match ctx.position {
            Position::Argument => Ok(format!("const std::shared_ptr<{}> &", pointee)),
            Position::Return | Position::Element => Ok(format!("std::shared_ptr<{}>", pointee)),
        }
    }

    fn list_type(&self, ty: &ListType, ctx: TypeContext) -> Result<String> {
        let element = match ty.contained.as_ref() {
            Type::Base(base) => self.translate_base(base, Position::Element)?,
            Type::Class(class) => self.class_type(class, ctx.element())?,
            other => return Err(Error::unsupported(other.kind_name())),
        };
        match ctx.position {
            Position::Argument => Ok(format!("const std::list<{} > &", element)),
            Position::Return | Position::Element => Ok(format!("std::list<{} >", element)),
        }
    }

    fn top_ancestor(&self, descriptor: NameId, ctx: TypeContext) -> Option<NameId> {
        match ctx.scope {
            Scope::Inferred => self.resolver.common_parent(descriptor, ctx.method),
            Scope::Within(namespace) => Some(namespace),
            Scope::Global => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use wrapgen_ir::{NameArena, NameKind};

    use super::*;

    struct Fixture {
        names: NameArena,
        registry: Registry,
        ns: NameId,
        method: NameId,
        proxy: NameId,
        reason: NameId,
    }

    impl Fixture {
        fn new() -> Self {
            let mut names = NameArena::new();
            let ns = names.push_snake(NameKind::Namespace, "linphone", None);
            let core = names.push_snake(NameKind::Class, "core", Some(ns));
            let method = names.push_snake(NameKind::Method, "add_proxy_config", Some(core));
            let proxy = names.push_snake(NameKind::Class, "proxy_config", Some(ns));
            let reason = names.push_snake(NameKind::Enum, "reason", Some(ns));
            Self {
                names,
                registry: Registry::new(),
                ns,
                method,
                proxy,
                reason,
            }
        }

        fn mapper(&self) -> TypeMapper<'_> {
            TypeMapper::new(NameResolver::new(&self.names), &self.registry)
        }

        fn arg(&self, ty: &Type) -> Result<String> {
            self.mapper().translate(ty, TypeContext::argument(self.method))
        }

        fn ret(&self, ty: &Type) -> Result<String> {
            self.mapper().translate(ty, TypeContext::returned(self.method))
        }
    }

    #[test]
    fn test_base_primitives() {
        let f = Fixture::new();

        assert_eq!(f.ret(&Type::void()).unwrap(), "void");
        assert_eq!(f.ret(&Type::base("boolean")).unwrap(), "bool");
        assert_eq!(f.ret(&Type::base("character")).unwrap(), "char");
        assert_eq!(f.ret(&Type::base("size")).unwrap(), "size_t");
        assert_eq!(f.ret(&Type::base("time")).unwrap(), "time_t");
        assert_eq!(f.ret(&Type::base("integer")).unwrap(), "int");
        assert_eq!(f.ret(&Type::base("floatant")).unwrap(), "float");
        assert_eq!(f.ret(&Type::base("string")).unwrap(), "std::string");
        assert_eq!(
            f.ret(&Type::base("string_array")).unwrap(),
            "std::list<std::string>"
        );
    }

    #[test]
    fn test_base_flags() {
        let f = Fixture::new();
        let int32 = BaseType::new("integer").with_size(TypeSize::Bits(32));
        let long = BaseType::new("integer").with_size(TypeSize::Named("long".into()));
        let double = BaseType::new("floatant").with_size(TypeSize::Named("double".into()));

        assert_eq!(f.ret(&Type::Base(int32.clone())).unwrap(), "int32_t");
        assert_eq!(f.ret(&Type::Base(int32.clone().unsigned())).unwrap(), "uint32_t");
        assert_eq!(f.ret(&Type::Base(long.clone())).unwrap(), "long");
        assert_eq!(f.ret(&Type::Base(long.unsigned())).unwrap(), "unsigned long");
        assert_eq!(
            f.ret(&Type::Base(BaseType::new("integer").unsigned())).unwrap(),
            "unsigned int"
        );
        assert_eq!(f.ret(&Type::Base(double)).unwrap(), "double");
        assert_eq!(
            f.arg(&Type::Base(int32.clone().constant().reference())).unwrap(),
            "const int32_t &"
        );
        assert_eq!(
            f.ret(&Type::Base(int32.unsigned().constant())).unwrap(),
            "const uint32_t"
        );
        assert_eq!(
            f.arg(&Type::Base(BaseType::new("void").reference())).unwrap(),
            "void *"
        );
    }

    #[test]
    fn test_string_constness_depends_on_position() {
        let f = Fixture::new();
        let string = Type::Base(BaseType::new("string").constant());
        let strings = Type::Base(BaseType::new("string_array").constant());

        assert_eq!(f.arg(&string).unwrap(), "const std::string &");
        assert_eq!(f.ret(&string).unwrap(), "std::string");
        assert_eq!(f.arg(&strings).unwrap(), "const std::list<std::string> &");
        assert_eq!(f.ret(&strings).unwrap(), "std::list<std::string>");
    }

    #[test]
    fn test_unknown_base_type() {
        let f = Fixture::new();
        let err = f.ret(&Type::base("quaternion")).unwrap_err();
        assert_eq!(
            err,
            Error::UnknownBaseType {
                name: "quaternion".into()
            }
        );
    }

    #[test]
    fn test_class_argument_and_return_never_collapse() {
        let f = Fixture::new();
        let ty = Type::class("LinphoneProxyConfig", Some(f.proxy));

        assert_eq!(f.arg(&ty).unwrap(), "const std::shared_ptr<ProxyConfig> &");
        assert_eq!(f.ret(&ty).unwrap(), "std::shared_ptr<ProxyConfig>");
    }

    #[test]
    fn test_const_class() {
        let f = Fixture::new();
        let ty = Type::Class(ClassType {
            name: "LinphoneProxyConfig".into(),
            descriptor: Some(f.proxy),
            is_const: true,
        });

        assert_eq!(f.ret(&ty).unwrap(), "std::shared_ptr<const ProxyConfig>");
    }

    #[test]
    fn test_scopes() {
        let f = Fixture::new();
        let mapper = f.mapper();
        let ty = Type::class("LinphoneProxyConfig", Some(f.proxy));
        let ctx = TypeContext::returned(f.method);

        assert_eq!(
            mapper.translate(&ty, ctx.with_scope(Scope::Global)).unwrap(),
            "std::shared_ptr<linphone::ProxyConfig>"
        );
        assert_eq!(
            mapper.translate(&ty, ctx.within(Some(f.ns))).unwrap(),
            "std::shared_ptr<ProxyConfig>"
        );
        assert_eq!(
            mapper
                .translate(&Type::enumeration("LinphoneReason", Some(f.reason)), ctx.within(None))
                .unwrap(),
            "linphone::Reason"
        );
    }

    #[test]
    fn test_unresolved_references() {
        let f = Fixture::new();

        assert_eq!(
            f.ret(&Type::class("LinphoneCall", None)).unwrap_err(),
            Error::unresolved("LinphoneCall")
        );
        assert_eq!(
            f.arg(&Type::enumeration("LinphoneReason", None)).unwrap_err(),
            Error::unresolved("LinphoneReason")
        );
        assert_eq!(f.ret(&Type::enumeration("LinphoneReason", Some(f.reason))).unwrap(), "Reason");
    }

    #[test]
    fn test_lists() {
        let f = Fixture::new();
        let proxies = Type::list(Type::class("LinphoneProxyConfig", Some(f.proxy)));
        let strings = Type::list(Type::Base(BaseType::new("string").constant()));

        assert_eq!(
            f.arg(&proxies).unwrap(),
            "const std::list<std::shared_ptr<ProxyConfig> > &"
        );
        assert_eq!(
            f.ret(&proxies).unwrap(),
            "std::list<std::shared_ptr<ProxyConfig> >"
        );
        assert_eq!(f.arg(&strings).unwrap(), "const std::list<std::string > &");
    }

    #[test]
    fn test_unsupported_containment() {
        let f = Fixture::new();
        let enums = Type::list(Type::enumeration("LinphoneReason", Some(f.reason)));
        let nested = Type::list(Type::list(Type::base("string")));

        assert_eq!(f.ret(&enums).unwrap_err(), Error::unsupported("enum"));
        assert_eq!(f.arg(&nested).unwrap_err(), Error::unsupported("list"));
    }
}
