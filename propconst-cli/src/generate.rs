//! The `generate` subcommand.

use std::path::PathBuf;

use clap::Args;
use propconst::{GenerationReport, Generator, GeneratorConfig, Template};
use tracing::info;

use crate::{
    fs::{DirectorySource, FileSink},
    settings::{Settings, parse_option},
};

pub const DEFAULT_RESOURCE_DIR: &str = "src/main/resources";
pub const DEFAULT_OUTPUT_DIR: &str = "target/generated-sources/prop-constants";

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Directory to search for resource files [default: src/main/resources]
    #[arg(short, long)]
    pub resource_dir: Option<PathBuf>,

    /// Directory the generated sources are written to
    /// [default: target/generated-sources/prop-constants]
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Package of the generated classes, e.g. com.example.i18n
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Put all classes into the namespace itself, ignoring subdirectories
    #[arg(long)]
    pub flatten: bool,

    /// Appended to every generated class name
    #[arg(long)]
    pub suffix: Option<String>,

    /// Class layout: keys or values [default: keys]
    #[arg(short, long)]
    pub template: Option<String>,

    /// Template option as KEY=VALUE, e.g. genGetters=true (repeatable)
    #[arg(long = "option", value_name = "KEY=VALUE", value_parser = parse_option)]
    pub options: Vec<(String, String)>,

    /// Glob of files to include, relative to the resource directory (repeatable)
    /// [default: **/*.properties]
    #[arg(long)]
    pub include: Vec<String>,

    /// Glob of files to exclude (repeatable)
    #[arg(long)]
    pub exclude: Vec<String>,

    /// TOML configuration file; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Do nothing
    #[arg(long)]
    pub skip: bool,

    /// Print the run report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Everything `generate` needs after merging flags and configuration file.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub resource_dir: PathBuf,
    pub output_dir: PathBuf,
    pub includes: Vec<String>,
    pub excludes: Vec<String>,
    pub config: GeneratorConfig,
}

impl GenerateArgs {
    /// Merges the flags over the configuration file, if any.
    pub fn into_request(self) -> Result<GenerateRequest, String> {
        let settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };

        let namespace = self
            .namespace
            .or(settings.namespace)
            .ok_or_else(|| "A namespace is required (--namespace or `namespace` in the configuration file)".to_string())?;
        let template = match self.template.or(settings.template) {
            Some(name) => name.parse::<Template>().map_err(|e| e.to_string())?,
            None => Template::default(),
        };

        let mut config = GeneratorConfig::new(namespace)
            .with_flatten(self.flatten || settings.flatten.unwrap_or(false))
            .with_name_suffix(self.suffix.or(settings.suffix).unwrap_or_default())
            .with_template(template);
        for (key, value) in settings.options.into_iter().chain(self.options) {
            config = config.with_option(key, value);
        }

        Ok(GenerateRequest {
            resource_dir: self
                .resource_dir
                .or(settings.resource_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_RESOURCE_DIR)),
            output_dir: self
                .output_dir
                .or(settings.output_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            includes: if self.include.is_empty() {
                settings.include
            } else {
                self.include
            },
            excludes: if self.exclude.is_empty() {
                settings.exclude
            } else {
                self.exclude
            },
            config,
        })
    }
}

/// Runs `generate`. Per-resource problems are in the report, not the error.
pub fn run(args: GenerateArgs) -> Result<GenerationReport, String> {
    let skip = args.skip;
    let request = args.into_request()?;
    let generator = Generator::new(request.config).map_err(|e| e.to_string())?;

    if skip {
        info!("Skipped - skip is set");
        return Ok(GenerationReport::default());
    }

    let source = DirectorySource::scan(&request.resource_dir, &request.includes, &request.excludes)?;
    let sink = FileSink::new(&request.output_dir);
    generator.run(&source, &sink).map_err(|e| e.to_string())
}
