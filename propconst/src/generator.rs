//! Running the generator over a set of resources.
//!
//! The [`Generator`] knows nothing about directories or files. Resources come
//! from a [`ResourceSource`] and generated code goes to a [`SourceSink`], so a
//! caller can plug in the filesystem, an in-memory map or a build system.
//!
//! Every resource is processed and reported on its own: a broken file or a
//! name collision produces a [`Diagnostic`] and the run carries on. Use
//! [`GenerationReport::into_result`] to turn a report with errors into a
//! failure at the end.

use std::fmt::{Display, Formatter};

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::{
    config::GeneratorConfig, descriptor::ResourceDescriptor, error::Error,
    formats::ResourceFormat, model::GenerationModel, registry::NameRegistry,
};

/// Where resource files come from.
pub trait ResourceSource: Sync {
    /// Relative, `/`-separated paths of all resources, in a stable order.
    fn resources(&self) -> Result<Vec<String>, Error>;

    /// The raw content of one resource.
    fn read(&self, relative_path: &str) -> Result<Vec<u8>, Error>;
}

/// Where generated sources go.
pub trait SourceSink: Sync {
    fn write(&self, output_relative_path: &str, contents: &str) -> Result<(), Error>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// A problem with one resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub resource: String,
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    pub fn error(resource: impl Into<String>, err: &Error) -> Self {
        Diagnostic {
            resource: resource.into(),
            severity: Severity::Error,
            message: err.to_string(),
        }
    }

    pub fn warning(resource: impl Into<String>, message: impl Into<String>) -> Self {
        Diagnostic {
            resource: resource.into(),
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let level = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{}: {}: {}", self.resource, level, self.message)
    }
}

/// One generated source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedSource {
    pub resource: String,
    pub fully_qualified_name: String,
    pub output_relative_path: String,
    pub entries: usize,
}

/// Outcome of [`Generator::run`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub generated: Vec<GeneratedSource>,
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationReport {
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Pretty-printed JSON, for tools consuming the outcome of a run.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Fails with [`Error::GenerationFailed`] if any error was reported.
    pub fn into_result(self) -> Result<Self, Error> {
        match self.error_count() {
            0 => Ok(self),
            count => Err(Error::GenerationFailed { count }),
        }
    }
}

/// Generates one source file per resource.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Creates a generator, rejecting an invalid configuration up front.
    pub fn new(config: GeneratorConfig) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Resolves every resource and drops those whose type name is already
    /// taken by an earlier one.
    ///
    /// Returns the accepted descriptors in input order and one error
    /// diagnostic per rejected resource.
    pub fn plan(&self, resources: &[String]) -> (Vec<ResourceDescriptor>, Vec<Diagnostic>) {
        let registry = NameRegistry::new();
        let mut accepted = Vec::with_capacity(resources.len());
        let mut diagnostics = Vec::new();

        for resource in resources {
            let descriptor = self.config.resolve(resource);
            match registry.register(
                &descriptor.fully_qualified_name,
                &descriptor.relative_resource_path,
            ) {
                Ok(()) => accepted.push(descriptor),
                Err(err) => diagnostics.push(Diagnostic::error(
                    descriptor.relative_resource_path.clone(),
                    &err,
                )),
            }
        }
        (accepted, diagnostics)
    }

    /// Loads one resource and builds its model.
    pub fn model<S: ResourceSource + ?Sized>(
        &self,
        source: &S,
        descriptor: &ResourceDescriptor,
    ) -> Result<GenerationModel, Error> {
        let bytes = source.read(&descriptor.relative_resource_path)?;
        let properties =
            ResourceFormat::from_xml_flag(descriptor.is_xml_format).load(&bytes)?;
        GenerationModel::build(
            descriptor,
            &self.config.namespace_root,
            &properties,
            &self.config.options,
        )
    }

    /// Loads, renders and writes one resource.
    pub fn generate<S, K>(
        &self,
        source: &S,
        sink: &K,
        descriptor: &ResourceDescriptor,
    ) -> Result<GeneratedSource, Error>
    where
        S: ResourceSource + ?Sized,
        K: SourceSink + ?Sized,
    {
        debug!(
            "Generating constants for {}: {}",
            descriptor.relative_resource_path, descriptor.fully_qualified_name
        );
        let model = self.model(source, descriptor)?;
        let contents = self.config.template.render_to_string(&model);
        sink.write(&descriptor.output_relative_path, &contents)?;

        Ok(GeneratedSource {
            resource: descriptor.relative_resource_path.clone(),
            fully_qualified_name: descriptor.fully_qualified_name.clone(),
            output_relative_path: descriptor.output_relative_path.clone(),
            entries: model.entries.len(),
        })
    }

    /// Processes every resource of `source`.
    ///
    /// Only failing to list the resources aborts the run; everything else
    /// ends up in the report.
    pub fn run<S, K>(&self, source: &S, sink: &K) -> Result<GenerationReport, Error>
    where
        S: ResourceSource + ?Sized,
        K: SourceSink + ?Sized,
    {
        let resources = source.resources()?;
        let (planned, mut diagnostics) = self.plan(&resources);

        if planned.is_empty() {
            info!("No resources found - no classes to generate");
        } else {
            info!(
                "Generating {} constant class{}",
                planned.len(),
                if planned.len() == 1 { "" } else { "es" }
            );
        }

        let outcomes: Vec<Result<GeneratedSource, Diagnostic>> = planned
            .par_iter()
            .map(|descriptor| {
                self.generate(source, sink, descriptor).map_err(|err| {
                    Diagnostic::error(descriptor.relative_resource_path.clone(), &err)
                })
            })
            .collect();

        let mut generated = Vec::with_capacity(outcomes.len());
        for outcome in outcomes {
            match outcome {
                Ok(source) => {
                    if source.entries == 0 {
                        diagnostics.push(Diagnostic::warning(
                            source.resource.clone(),
                            "resource has no entries",
                        ));
                    }
                    generated.push(source);
                }
                Err(diagnostic) => diagnostics.push(diagnostic),
            }
        }

        diagnostics.sort_by(|a, b| a.resource.cmp(&b.resource));
        for diagnostic in &diagnostics {
            match diagnostic.severity {
                Severity::Error => error!("{}", diagnostic),
                Severity::Warning => warn!("{}", diagnostic),
            }
        }

        Ok(GenerationReport {
            generated,
            diagnostics,
        })
    }
}
