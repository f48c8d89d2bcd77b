//! Per-member and per-class translation.

use tracing::{info, warn};
use wrapgen_ir::{Api, Class, Enum, Method, Property};

use crate::{
    BridgeGenerator, DependencyAnalyzer, Diagnostic, EngineConfig, Error, NameResolver, Result,
    Severity, SignatureBuilder, TypeMapper,
    emit::{ClassRecord, EnumRecord, EnumValueRecord, MethodRecord},
};

/// The translation engine.
///
/// Holds only shared references to the model and the configuration, so a
/// single translator can be used from several threads at once.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    api: &'a Api,
    config: &'a EngineConfig,
    resolver: NameResolver<'a>,
    signatures: SignatureBuilder<'a>,
    bridge: BridgeGenerator<'a>,
    dependencies: DependencyAnalyzer<'a>,
}

impl<'a> Translator<'a> {
    pub fn new(api: &'a Api, config: &'a EngineConfig) -> Self {
        let resolver = NameResolver::new(&api.names);
        let mapper = TypeMapper::new(resolver, &config.registry);
        Self {
            api,
            config,
            resolver,
            signatures: SignatureBuilder::new(resolver, mapper, &config.registry),
            bridge: BridgeGenerator::new(resolver, mapper),
            dependencies: DependencyAnalyzer::new(resolver, config),
        }
    }

    pub fn api(&self) -> &'a Api {
        self.api
    }

    pub fn config(&self) -> &'a EngineConfig {
        self.config
    }

    pub fn resolver(&self) -> NameResolver<'a> {
        self.resolver
    }

    pub fn dependencies(&self) -> DependencyAnalyzer<'a> {
        self.dependencies
    }

    pub fn translate_method(&self, method: &Method) -> Result<MethodRecord> {
        let signature = self.signatures.build(method)?;
        let source_code = self.bridge.generate(method)?;
        Ok(MethodRecord {
            prototype: signature.prototype,
            impl_prototype: signature.impl_prototype,
            source_code,
        })
    }

    /// Accessors of a property, getter first. Fails as a whole.
    pub fn translate_property(&self, property: &Property) -> Result<Vec<MethodRecord>> {
        property
            .methods()
            .map(|method| self.translate_method(method))
            .collect()
    }

    /// Translate a class, skipping the members that fail.
    ///
    /// Each skipped member is recorded in `diagnostics`. The class itself
    /// fails only when it is escaped.
    pub fn translate_class(
        &self,
        class: &Class,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<ClassRecord> {
        let full_name = self.resolver.c_type(class.name);
        if self.config.registry.is_escaped(&full_name) {
            return Err(Error::escaped(full_name));
        }

        let mut record = ClassRecord {
            name: self.resolver.short(class.name),
            methods: Vec::new(),
            static_methods: Vec::new(),
        };

        for property in &class.properties {
            match self.translate_property(property) {
                Ok(methods) => record.methods.extend(methods),
                Err(e) => self.skip(
                    "property",
                    self.resolver.c_function(property.name),
                    &e,
                    diagnostics,
                ),
            }
        }

        for method in &class.instance_methods {
            match self.translate_method(method) {
                Ok(m) => record.methods.push(m),
                Err(e) => {
                    self.skip("method", self.resolver.c_function(method.name), &e, diagnostics)
                }
            }
        }

        for method in &class.class_methods {
            match self.translate_method(method) {
                Ok(m) => record.static_methods.push(m),
                Err(e) => {
                    self.skip("method", self.resolver.c_function(method.name), &e, diagnostics)
                }
            }
        }

        Ok(record)
    }

    pub fn translate_enum(&self, en: &Enum) -> Result<EnumRecord> {
        let full_name = self.resolver.c_type(en.name);
        if self.config.registry.is_escaped(&full_name) {
            return Err(Error::escaped(full_name));
        }

        let last = en.values.len().saturating_sub(1);
        Ok(EnumRecord {
            name: self.resolver.short(en.name),
            values: en
                .values
                .iter()
                .enumerate()
                .map(|(i, value)| EnumValueRecord {
                    name: self.resolver.short(value.name),
                    not_last: i != last,
                })
                .collect(),
        })
    }

    fn skip(&self, phase: &str, symbol: String, error: &Error, diagnostics: &mut Vec<Diagnostic>) {
        match error {
            Error::EscapedSymbol { .. } => info!(%symbol, "skipping escaped {}", phase),
            _ => warn!(%symbol, reason = error.reason(), "skipping {}: {}", phase, error),
        }
        diagnostics.push(Diagnostic::skipped(Severity::Warning, phase, symbol, error));
    }
}
