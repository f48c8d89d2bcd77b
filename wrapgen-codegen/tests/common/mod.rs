//! A small Linphone-like model shared by the integration tests.

use wrapgen_codegen::{EngineConfig, Registry};
use wrapgen_ir::{
    Api, Argument, BaseType, Class, Enum, EnumValue, Method, MethodKind, NameArena, NameId,
    NameKind, Namespace, Property, Type,
};

/// Full C-level name of the hub class.
pub const HUB: &str = "LinphoneCore";

/// Escape list used by [`config`].
pub const ESCAPED: &[&str] = &["linphone_core_can_we_add_call", "LinphoneMediaEncryption"];

/// Ambiguity list used by [`config`].
pub const AMBIGUOUS: &[&str] = &["LinphonePayloadType"];

pub fn config() -> EngineConfig {
    config_with(Registry::new().escape(ESCAPED.iter().copied()))
}

pub fn config_with(registry: Registry) -> EngineConfig {
    EngineConfig::new(registry.ambiguous(AMBIGUOUS.iter().copied())).hub_class(HUB)
}

struct Builder {
    names: NameArena,
}

impl Builder {
    fn method(&mut self, owner: NameId, name: &str, kind: MethodKind, ret: Type) -> Method {
        let id = self.names.push_snake(NameKind::Method, name, Some(owner));
        Method::new(id, kind, ret)
    }

    fn arg(&mut self, method: Method, name: &str, ty: Type) -> Method {
        let id = self
            .names
            .push_snake(NameKind::Argument, name, Some(method.name));
        method.arg(Argument::new(id, ty))
    }

    fn enumeration(&mut self, ns: NameId, name: &str, values: &[&str]) -> Enum {
        let id = self.names.push_snake(NameKind::Enum, name, Some(ns));
        let values = values
            .iter()
            .map(|value| EnumValue {
                name: self.names.push_snake(NameKind::EnumValue, value, Some(id)),
            })
            .collect();
        Enum { name: id, values }
    }
}

/// Namespace `linphone` with:
///
/// - enums `Reason` and `MediaEncryption`
/// - class `Core` (the hub): a `default_proxy_config` property, three
///   instance methods and the `new` constructor
/// - class `ProxyConfig`: `get_core` and `set_identity`
/// - class `PayloadType`: `get_mime_type`
pub fn api() -> Api {
    let mut b = Builder {
        names: NameArena::new(),
    };
    let ns = b.names.push_snake(NameKind::Namespace, "linphone", None);
    let core = b.names.push_snake(NameKind::Class, "core", Some(ns));
    let proxy = b.names.push_snake(NameKind::Class, "proxy_config", Some(ns));
    let payload = b.names.push_snake(NameKind::Class, "payload_type", Some(ns));

    let reason = b.enumeration(ns, "reason", &["none", "declined"]);
    let encryption = b.enumeration(ns, "media_encryption", &["none", "srtp"]);
    let reason_id = reason.name;

    let core_type = || Type::class("LinphoneCore", Some(core));
    let proxy_type = || Type::class("LinphoneProxyConfig", Some(proxy));
    let payload_type = || Type::class("LinphonePayloadType", Some(payload));

    // Core
    let mut core_class = Class::new(core);
    let property = b
        .names
        .push_snake(NameKind::Property, "default_proxy_config", Some(core));
    let getter = b
        .method(core, "get_default_proxy_config", MethodKind::Instance, proxy_type())
        .constant();
    let setter = b.method(core, "set_default_proxy_config", MethodKind::Instance, Type::void());
    let setter = b.arg(setter, "config", proxy_type());
    core_class.properties.push(Property {
        name: property,
        getter: Some(getter),
        setter: Some(setter),
    });
    let can_add = b.method(
        core,
        "can_we_add_call",
        MethodKind::Instance,
        Type::base("boolean"),
    );
    let payloads = b.method(
        core,
        "get_payload_types",
        MethodKind::Instance,
        Type::list(payload_type()),
    );
    let reasons = b.method(
        core,
        "get_reasons",
        MethodKind::Instance,
        Type::list(Type::enumeration("LinphoneReason", Some(reason_id))),
    );
    core_class.instance_methods = vec![can_add, payloads, reasons];
    let constructor = b.method(core, "new", MethodKind::Class, core_type());
    core_class.class_methods.push(constructor);

    // ProxyConfig
    let mut proxy_class = Class::new(proxy);
    let get_core = b.method(proxy, "get_core", MethodKind::Instance, core_type());
    let set_identity = b.method(proxy, "set_identity", MethodKind::Instance, Type::void());
    let set_identity = b.arg(
        set_identity,
        "identity",
        Type::Base(BaseType::new("string").constant()),
    );
    proxy_class.instance_methods = vec![get_core, set_identity];

    // PayloadType
    let mut payload_class = Class::new(payload);
    let mime = b
        .method(
            payload,
            "get_mime_type",
            MethodKind::Instance,
            Type::Base(BaseType::new("string").constant()),
        )
        .constant();
    payload_class.instance_methods.push(mime);

    let mut namespace = Namespace::new(ns);
    namespace.enums = vec![reason, encryption];
    namespace.classes = vec![core_class, proxy_class, payload_class];
    Api::new(b.names, vec![namespace])
}
