//! Emission drivers: assembling translated members into per-artifact trees.

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};
use wrapgen_ir::{Api, Class};

use super::tree::{
    ClassHeader, ClassImpl, EnumsHeader, Includes, MainHeader, NameEntry,
};
use crate::{Diagnostic, EngineConfig, Error, Result, Severity, Translator};

/// Filename of the enums header.
pub const ENUMS_FILENAME: &str = "enums.hh";

/// Header and implementation trees of one class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassArtifacts {
    pub header: ClassHeader,
    pub implementation: ClassImpl,
}

/// A serialized tree and the path it should be written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Relative path from the output directory
    pub path: String,
    /// Pretty-printed JSON tree
    pub content: String,
}

/// Everything produced by one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutput {
    pub enums_header: EnumsHeader,
    pub classes: Vec<ClassArtifacts>,
    pub main_header: MainHeader,
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationOutput {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_warning())
            .count()
    }

    /// Find the artifacts of a class by its wrapper name (e.g., "Core").
    pub fn class(&self, name: &str) -> Option<&ClassArtifacts> {
        self.classes.iter().find(|c| c.header.class.name == name)
    }

    /// Serialize every tree, in generation order.
    pub fn artifacts(&self, aggregate_header: &str) -> serde_json::Result<Vec<Artifact>> {
        let mut artifacts = vec![artifact(
            format!("include/{}.json", ENUMS_FILENAME),
            &self.enums_header,
        )?];
        for class in &self.classes {
            artifacts.push(artifact(
                format!("include/{}.json", class.header.filename),
                &class.header,
            )?);
            artifacts.push(artifact(
                format!("src/{}.json", class.implementation.filename),
                &class.implementation,
            )?);
        }
        artifacts.push(artifact(
            format!("include/{}.json", aggregate_header),
            &self.main_header,
        )?);
        Ok(artifacts)
    }
}

fn artifact(path: String, tree: &impl Serialize) -> serde_json::Result<Artifact> {
    Ok(Artifact {
        path,
        content: serde_json::to_string_pretty(tree)?,
    })
}

/// Runs the engine over a whole model.
///
/// Classes are independent of each other and are translated in parallel;
/// results are gathered back in model order so the output is identical
/// from one run to the next.
pub struct Generator<'a> {
    translator: Translator<'a>,
}

impl<'a> Generator<'a> {
    pub fn new(api: &'a Api, config: &'a EngineConfig) -> Self {
        Self {
            translator: Translator::new(api, config),
        }
    }

    pub fn translator(&self) -> Translator<'a> {
        self.translator
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub fn generate(&self) -> GenerationOutput {
        let mut diagnostics = Vec::new();
        let enums_header = self.enums_header(&mut diagnostics);

        let results: Vec<(Result<ClassArtifacts>, Vec<Diagnostic>)> = self
            .translator
            .api()
            .classes()
            .into_par_iter()
            .map(|class| {
                let mut class_diagnostics = Vec::new();
                let result = self.class_artifacts(class, &mut class_diagnostics);
                (result, class_diagnostics)
            })
            .collect();

        let resolver = self.translator.resolver();
        let mut main_header = MainHeader::new(define_for_filename(
            &self.translator.config().aggregate_header,
        ));
        let mut classes = Vec::with_capacity(results.len());
        for (class, (result, class_diagnostics)) in
            self.translator.api().classes().into_iter().zip(results)
        {
            diagnostics.extend(class_diagnostics);
            match result {
                Ok(artifacts) => {
                    main_header.add_include(artifacts.header.filename.clone());
                    classes.push(artifacts);
                }
                Err(e) => {
                    let symbol = resolver.c_type(class.name);
                    report_skipped("class", &symbol, &e);
                    diagnostics.push(Diagnostic::skipped(Severity::Error, "class", symbol, &e));
                }
            }
        }

        info!(
            classes = classes.len(),
            enums = enums_header.enums.len(),
            diagnostics = diagnostics.len(),
            "generation finished"
        );

        GenerationOutput {
            enums_header,
            classes,
            main_header,
            diagnostics,
        }
    }

    /// Translate every enum of the model, skipping the ones that fail.
    pub fn enums_header(&self, diagnostics: &mut Vec<Diagnostic>) -> EnumsHeader {
        let resolver = self.translator.resolver();
        let mut header = EnumsHeader::default();
        for en in self.translator.api().enums() {
            match self.translator.translate_enum(en) {
                Ok(record) => header.enums.push(record),
                Err(e) => {
                    let symbol = resolver.c_type(en.name);
                    report_skipped("enum", &symbol, &e);
                    diagnostics.push(Diagnostic::skipped(Severity::Error, "enum", symbol, &e));
                }
            }
        }
        header
    }

    /// Header and implementation trees of one class.
    pub fn class_artifacts(
        &self,
        class: &Class,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<ClassArtifacts> {
        let resolver = self.translator.resolver();
        let names = resolver.names();
        debug!(class = %resolver.c_type(class.name), "translating class");

        let record = self.translator.translate_class(class, diagnostics)?;
        let includes = self.translator.dependencies().analyze(class);

        let words = names.words(class.name);
        let basename = names.snake_case(class.name, false);
        let header_filename = format!("{}.hh", basename);
        let namespace = resolver
            .namespace_of(class.name)
            .map(|ns| names.concatenate(ns, true));

        let header = ClassHeader {
            class: record.clone(),
            includes: Includes::new(includes.internal, includes.external),
            prior_declarations: includes
                .prior_declarations
                .into_iter()
                .map(NameEntry::new)
                .collect(),
            define: class_define(words),
            filename: header_filename.clone(),
            private_type: resolver.c_type(class.name),
        };
        let implementation = ClassImpl {
            class: record,
            filename: format!("{}.cc", basename),
            internal_includes: vec![
                NameEntry::new(header_filename),
                NameEntry::new(self.translator.config().c_header.clone()),
            ],
            namespace,
        };

        Ok(ClassArtifacts {
            header,
            implementation,
        })
    }
}

fn report_skipped(phase: &str, symbol: &str, error: &Error) {
    match error {
        Error::EscapedSymbol { .. } => info!(symbol, "skipping escaped {}", phase),
        _ => warn!(symbol, reason = error.reason(), "could not translate {}: {}", phase, error),
    }
}

/// Include guard of a class header (e.g., ["proxy", "config"] -> "_PROXY_CONFIG_HH").
fn class_define(words: &[String]) -> String {
    let mut res = String::new();
    for word in words {
        res.push('_');
        res.push_str(&word.to_uppercase());
    }
    res.push_str("_HH");
    res
}

/// Include guard derived from a filename (e.g., "linphone.hh" -> "_LINPHONE_HH").
fn define_for_filename(filename: &str) -> String {
    let mangled: String = filename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("_{}", mangled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_define() {
        let words = vec!["proxy".to_string(), "config".to_string()];
        assert_eq!(class_define(&words), "_PROXY_CONFIG_HH");
    }

    #[test]
    fn test_define_for_filename() {
        assert_eq!(define_for_filename("linphone.hh"), "_LINPHONE_HH");
        assert_eq!(define_for_filename("belle-sip.hh"), "_BELLE_SIP_HH");
    }
}
