//! Method prototypes: in-class declarations and out-of-line definitions.

use wrapgen_ir::{Method, MethodKind};

use crate::{Error, NameResolver, Registry, Result, Scope, TypeContext, TypeMapper};

/// The two prototypes of a translated method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
    /// `[static] <return> <member>(<args>) [const];`
    pub prototype: String,
    /// `<return> <Class>::<member>(<args>) [const]`
    pub impl_prototype: String,
}

/// Builds method prototypes.
///
/// The declaration qualifies referenced types relative to the method; the
/// definition qualifies them relative to the method's namespace, except
/// for ambiguous return types which are spelled from the global namespace.
#[derive(Debug, Clone, Copy)]
pub struct SignatureBuilder<'a> {
    resolver: NameResolver<'a>,
    mapper: TypeMapper<'a>,
    registry: &'a Registry,
}

impl<'a> SignatureBuilder<'a> {
    pub fn new(resolver: NameResolver<'a>, mapper: TypeMapper<'a>, registry: &'a Registry) -> Self {
        Self {
            resolver,
            mapper,
            registry,
        }
    }

    pub fn build(&self, method: &Method) -> Result<MethodSignature> {
        let c_name = self.resolver.c_function(method.name);
        if self.registry.is_escaped(&c_name) {
            return Err(Error::escaped(c_name));
        }

        let namespace = self.resolver.namespace_of(method.name);
        let return_ctx = TypeContext::returned(method.name);
        let return_type = self.mapper.translate(&method.return_type, return_ctx)?;
        let impl_return_ctx = if self.mapper.is_ambiguous(&method.return_type) {
            return_ctx.with_scope(Scope::Global)
        } else {
            return_ctx.within(namespace)
        };
        let impl_return_type = self.mapper.translate(&method.return_type, impl_return_ctx)?;

        let mut params = Vec::with_capacity(method.args.len());
        let mut impl_params = Vec::with_capacity(method.args.len());
        for arg in &method.args {
            let arg_ctx = TypeContext::argument(method.name);
            let arg_name = self.resolver.short(arg.name);
            params.push(format!(
                "{} {}",
                self.mapper.translate(&arg.ty, arg_ctx)?,
                arg_name
            ));
            impl_params.push(format!(
                "{} {}",
                self.mapper.translate(&arg.ty, arg_ctx.within(namespace))?,
                arg_name
            ));
        }

        let name = self.resolver.short(method.name);
        let long_name = self.resolver.qualified(method.name, namespace);
        let constness = if method.is_const { " const" } else { "" };
        let storage = if method.kind == MethodKind::Class {
            "static "
        } else {
            ""
        };

        Ok(MethodSignature {
            prototype: format!(
                "{}{} {}({}){};",
                storage,
                return_type,
                name,
                params.join(", "),
                constness
            ),
            impl_prototype: format!(
                "{} {}({}){}",
                impl_return_type,
                long_name,
                impl_params.join(", "),
                constness
            ),
        })
    }
}
