//! Bridge bodies: the single statement calling the flat C entry point.

use wrapgen_ir::{Argument, ClassType, Method, NameId, NameKind, Primitive, Type};

use crate::{Error, NameResolver, Result, Scope, TypeContext, TypeMapper};

/// Emits the call through to the C function backing a method.
///
/// Arguments are unwrapped into their C representation (raw buffers, raw
/// object pointers, C enums, `bctbx_list_t`s) and the return value is
/// wrapped back into its C++ counterpart.
#[derive(Debug, Clone, Copy)]
pub struct BridgeGenerator<'a> {
    resolver: NameResolver<'a>,
    mapper: TypeMapper<'a>,
}

impl<'a> BridgeGenerator<'a> {
    pub fn new(resolver: NameResolver<'a>, mapper: TypeMapper<'a>) -> Self {
        Self { resolver, mapper }
    }

    pub fn generate(&self, method: &Method) -> Result<String> {
        let namespace = self.resolver.namespace_of(method.name);
        let function = self.resolver.c_function(method.name);

        let mut args = Vec::with_capacity(method.args.len() + 1);
        if method.kind.has_receiver() {
            let class = self
                .resolver
                .names()
                .first_ancestor_of_kind(method.name, NameKind::Class)
                .ok_or_else(|| Error::unresolved(format!("receiver of {}", function)))?;
            args.push(format!("(::{} *)mPrivPtr", self.resolver.c_type(class)));
        }
        for arg in &method.args {
            args.push(self.marshal_argument(arg, method.name, namespace)?);
        }

        let (open, close) = self.marshal_return(&method.return_type, method.name, namespace)?;
        Ok(format!("{}{}({}){};", open, function, args.join(", "), close))
    }

    fn marshal_argument(
        &self,
        arg: &Argument,
        method: NameId,
        namespace: Option<NameId>,
    ) -> Result<String> {
        let param = self.resolver.short(arg.name);
        let ctx = self.context(TypeContext::argument(method), &arg.ty, namespace);

        match &arg.ty {
            Type::Base(base) => {
                self.mapper.translate_base(base, ctx.position)?;
                if base.primitive() == Some(Primitive::String) {
                    Ok(format!("{}.c_str()", param))
                } else if base.is_ref {
                    Ok(format!("&{}", param))
                } else {
                    Ok(param)
                }
            }
            Type::Enum(e) => {
                let descriptor = e
                    .descriptor
                    .ok_or_else(|| Error::unresolved(e.name.as_str()))?;
                Ok(format!("(::{}){}", self.resolver.c_type(descriptor), param))
            }
            Type::Class(class) => {
                let (c_type, pointee) = self.unwrap_class(class, ctx)?;
                Ok(format!(
                    "(::{} *)sharedPtrToCPtr<{}>({})",
                    c_type, pointee, param
                ))
            }
            Type::List(list) => match list.contained.as_ref() {
                Type::Base(base) if base.primitive() == Some(Primitive::String) => {
                    Ok(format!("StringBctbxListWrapper({}).c_list()", param))
                }
                Type::Class(class) => {
                    let (_, pointee) = self.unwrap_class(class, ctx)?;
                    Ok(format!(
                        "ObjectBctbxListWrapper<{}>({}).c_list()",
                        pointee, param
                    ))
                }
                other => Err(unsupported_element(other)),
            },
        }
    }

    /// Text placed before and after the C call.
    fn marshal_return(
        &self,
        ty: &Type,
        method: NameId,
        namespace: Option<NameId>,
    ) -> Result<(String, String)> {
        let ctx = self.context(TypeContext::returned(method), ty, namespace);

        match ty {
            Type::Base(base) => {
                let primitive = base.primitive().ok_or_else(|| Error::UnknownBaseType {
                    name: base.name.clone(),
                })?;
                match primitive {
                    Primitive::Void if !base.is_ref => Ok((String::new(), String::new())),
                    Primitive::StringArray => {
                        Ok(("return cStringArrayToCppList(".to_string(), ")".to_string()))
                    }
                    _ => Ok(("return ".to_string(), String::new())),
                }
            }
            Type::Enum(e) => {
                let enum_name = self.mapper.enum_name(e, ctx)?;
                Ok((format!("return ({})", enum_name), String::new()))
            }
            Type::Class(class) => {
                let (_, pointee) = self.unwrap_class(class, ctx)?;
                Ok((format!("return cPtrToSharedPtr<{}>(", pointee), ")".to_string()))
            }
            Type::List(list) => match list.contained.as_ref() {
                Type::Base(base) if base.primitive() == Some(Primitive::String) => Ok((
                    "return bctbxStringListToCppList(".to_string(),
                    ")".to_string(),
                )),
                Type::Class(class) => {
                    let (_, pointee) = self.unwrap_class(class, ctx)?;
                    Ok((
                        format!("return bctbxObjectListToCppList<{}>(", pointee),
                        ")".to_string(),
                    ))
                }
                other => Err(unsupported_element(other)),
            },
        }
    }

    /// C type name and C++ pointee name of a class reference.
    fn unwrap_class(&self, class: &ClassType, ctx: TypeContext) -> Result<(String, String)> {
        let descriptor = class
            .descriptor
            .ok_or_else(|| Error::unresolved(class.name.as_str()))?;
        let pointee = self.mapper.class_name(class, ctx)?;
        Ok((self.resolver.c_type(descriptor), pointee))
    }

    /// Bridge code lives in the namespace of the method; ambiguous types
    /// are spelled from the global namespace.
    fn context(&self, ctx: TypeContext, ty: &Type, namespace: Option<NameId>) -> TypeContext {
        if self.mapper.is_ambiguous(ty) {
            ctx.with_scope(Scope::Global)
        } else {
            ctx.within(namespace)
        }
    }
}

fn unsupported_element(ty: &Type) -> Error {
    match ty {
        Type::Base(base) => Error::unsupported(base.name.as_str()),
        other => Error::unsupported(other.kind_name()),
    }
}
