//! Lowering a model description into the resolved [`Api`].
//!
//! Declarations are lowered first with every enum/class reference left
//! unresolved, while declared types are indexed by their full CamelCase
//! name. A second pass fills each reference's descriptor from the index.
//! References naming nothing stay unresolved; the engine reports them on
//! the member that uses them.

use indexmap::IndexMap;
use wrapgen_ir::{
    Api, Argument, BaseType, Class, ClassType, Enum, EnumValue, Method, MethodKind, NameArena,
    NameId, NameKind, Namespace, Property, Type, TypeSize,
};

use crate::model::{
    ClassDescription, EnumDescription, MethodDescription, ModelDescription,
    NamespaceDescription, PropertyDescription, SizeDescription, TypeDescription,
};

pub(crate) fn lower(model: &ModelDescription) -> Api {
    let mut lowering = Lowering::default();
    let mut namespaces: Vec<Namespace> = model
        .namespaces
        .iter()
        .map(|ns| lowering.namespace(ns, None))
        .collect();
    for ns in &mut namespaces {
        lowering.resolve_namespace(ns);
    }
    Api::new(lowering.names, namespaces)
}

#[derive(Default)]
struct Lowering {
    names: NameArena,
    /// Full C-level name -> declared class
    classes: IndexMap<String, NameId>,
    /// Full C-level name -> declared enum
    enums: IndexMap<String, NameId>,
}

impl Lowering {
    fn namespace(&mut self, desc: &NamespaceDescription, prev: Option<NameId>) -> Namespace {
        let id = self.names.push_snake(NameKind::Namespace, &desc.name, prev);
        let mut ns = Namespace::new(id);
        ns.enums = desc.enums.iter().map(|e| self.enumeration(e, id)).collect();
        ns.classes = desc.classes.iter().map(|c| self.class(c, id)).collect();
        ns.namespaces = desc
            .namespaces
            .iter()
            .map(|child| self.namespace(child, Some(id)))
            .collect();
        ns
    }

    fn enumeration(&mut self, desc: &EnumDescription, ns: NameId) -> Enum {
        let id = self.names.push_snake(NameKind::Enum, &desc.name, Some(ns));
        self.enums.insert(self.names.camel_case(id, true), id);
        let values = desc
            .values
            .iter()
            .map(|value| EnumValue {
                name: self.names.push_snake(NameKind::EnumValue, value, Some(id)),
            })
            .collect();
        Enum { name: id, values }
    }

    fn class(&mut self, desc: &ClassDescription, ns: NameId) -> Class {
        let id = self.names.push_snake(NameKind::Class, &desc.name, Some(ns));
        self.classes.insert(self.names.camel_case(id, true), id);

        let mut class = Class::new(id);
        class.properties = desc
            .properties
            .iter()
            .map(|p| self.property(p, id))
            .collect();
        class.instance_methods = desc
            .instance_methods
            .iter()
            .map(|m| self.method(m, id, MethodKind::Instance))
            .collect();
        class.class_methods = desc
            .class_methods
            .iter()
            .map(|m| self.method(m, id, MethodKind::Class))
            .collect();
        class
    }

    fn property(&mut self, desc: &PropertyDescription, class: NameId) -> Property {
        let name = self
            .names
            .push_snake(NameKind::Property, &desc.name, Some(class));
        Property {
            name,
            getter: desc
                .getter
                .as_ref()
                .map(|m| self.method(m, class, MethodKind::PropertyGetter)),
            setter: desc
                .setter
                .as_ref()
                .map(|m| self.method(m, class, MethodKind::PropertySetter)),
        }
    }

    fn method(&mut self, desc: &MethodDescription, class: NameId, kind: MethodKind) -> Method {
        let id = self.names.push_snake(NameKind::Method, &desc.name, Some(class));
        let return_type = desc.return_type.as_ref().map_or_else(Type::void, lower_type);
        let mut method = Method::new(id, kind, return_type);
        method.is_const = desc.is_const;
        for arg in &desc.args {
            let arg_id = self.names.push_snake(NameKind::Argument, &arg.name, Some(id));
            method.args.push(Argument::new(arg_id, lower_type(&arg.ty)));
        }
        method
    }

    fn resolve_namespace(&self, ns: &mut Namespace) {
        for class in &mut ns.classes {
            for property in &mut class.properties {
                for method in property.getter.iter_mut().chain(property.setter.iter_mut()) {
                    self.resolve_method(method);
                }
            }
            for method in class
                .instance_methods
                .iter_mut()
                .chain(class.class_methods.iter_mut())
            {
                self.resolve_method(method);
            }
        }
        for child in &mut ns.namespaces {
            self.resolve_namespace(child);
        }
    }

    fn resolve_method(&self, method: &mut Method) {
        self.resolve_type(&mut method.return_type);
        for arg in &mut method.args {
            self.resolve_type(&mut arg.ty);
        }
    }

    fn resolve_type(&self, ty: &mut Type) {
        match ty {
            Type::Base(_) => {}
            Type::Enum(e) => e.descriptor = self.enums.get(&e.name).copied(),
            Type::Class(c) => c.descriptor = self.classes.get(&c.name).copied(),
            Type::List(l) => self.resolve_type(&mut l.contained),
        }
    }
}

fn lower_type(desc: &TypeDescription) -> Type {
    match desc {
        TypeDescription::Base {
            name,
            size,
            is_const,
            is_unsigned,
            is_ref,
        } => Type::Base(BaseType {
            name: name.clone(),
            size: size.as_ref().map(|size| match size {
                SizeDescription::Bits(bits) => TypeSize::Bits(*bits),
                SizeDescription::Named(name) => TypeSize::Named(name.clone()),
            }),
            is_const: *is_const,
            is_unsigned: *is_unsigned,
            is_ref: *is_ref,
        }),
        TypeDescription::Enum { name } => Type::enumeration(name.clone(), None),
        TypeDescription::Class { name, is_const } => Type::Class(ClassType {
            name: name.clone(),
            descriptor: None,
            is_const: *is_const,
        }),
        TypeDescription::List { contained } => Type::list(lower_type(contained)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODEL: &str = r#"
{ "namespaces": [ { "name": "linphone",
    "enums": [ { "name": "reason", "values": ["none", "no_response"] } ],
    "classes": [
      { "name": "core",
        "properties": [ { "name": "default_proxy_config",
            "getter": { "name": "get_default_proxy_config", "const": true,
                        "return": { "kind": "class", "name": "LinphoneProxyConfig" } },
            "setter": { "name": "set_default_proxy_config",
                        "args": [ { "name": "config",
                                    "type": { "kind": "class", "name": "LinphoneProxyConfig" } } ] } } ],
        "instance_methods": [
          { "name": "get_friends", "return": { "kind": "list",
              "contained": { "kind": "class", "name": "LinphoneFriend" } } },
          { "name": "get_port", "return": { "kind": "base", "name": "integer", "size": 16, "unsigned": true } } ],
        "class_methods": [ { "name": "new", "return": { "kind": "class", "name": "LinphoneCore" } } ] },
      { "name": "proxy_config",
        "instance_methods": [ { "name": "get_error", "return": { "kind": "enum", "name": "LinphoneReason" } } ] } ],
    "namespaces": [] } ] }
"#;

    fn api() -> Api {
        let model: ModelDescription = MODEL.parse().unwrap();
        model.lower()
    }

    #[test]
    fn test_declarations() {
        let api = api();
        let classes = api.classes();
        assert_eq!(classes.len(), 2);
        assert_eq!(api.names.camel_case(classes[0].name, true), "LinphoneCore");
        assert_eq!(api.names.camel_case(classes[1].name, true), "LinphoneProxyConfig");

        let enums = api.enums();
        assert_eq!(enums.len(), 1);
        assert_eq!(enums[0].values.len(), 2);
        assert_eq!(api.names.snake_case(enums[0].values[1].name, false), "no_response");
    }

    #[test]
    fn test_property_accessors() {
        let api = api();
        let core = api.classes()[0];
        let property = &core.properties[0];

        let getter = property.getter.as_ref().unwrap();
        assert_eq!(getter.kind, MethodKind::PropertyGetter);
        assert!(getter.is_const);
        assert_eq!(
            api.names.snake_case(getter.name, true),
            "linphone_core_get_default_proxy_config"
        );

        let setter = property.setter.as_ref().unwrap();
        assert_eq!(setter.kind, MethodKind::PropertySetter);
        assert_eq!(setter.return_type, Type::void());
        assert_eq!(setter.args.len(), 1);
    }

    #[test]
    fn test_references_are_resolved() {
        let api = api();
        let classes = api.classes();
        let (core, proxy) = (classes[0], classes[1]);

        let getter = core.properties[0].getter.as_ref().unwrap();
        assert_eq!(
            getter.return_type,
            Type::class("LinphoneProxyConfig", Some(proxy.name))
        );
        assert_eq!(
            core.class_methods[0].return_type,
            Type::class("LinphoneCore", Some(core.name))
        );
        assert_eq!(
            proxy.instance_methods[0].return_type,
            Type::enumeration("LinphoneReason", Some(api.enums()[0].name))
        );
    }

    #[test]
    fn test_unknown_reference_stays_unresolved() {
        let api = api();
        let friends = &api.classes()[0].instance_methods[0];
        assert!(!friends.return_type.is_resolved());
    }

    #[test]
    fn test_base_type_qualifiers() {
        let api = api();
        let port = &api.classes()[0].instance_methods[1];
        assert_eq!(
            port.return_type,
            Type::Base(
                BaseType::new("integer")
                    .with_size(TypeSize::Bits(16))
                    .unsigned()
            )
        );
    }
}
