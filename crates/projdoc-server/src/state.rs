use std::sync::Arc;

use tracing::{info, warn};

use projdoc_export::assemble::TemplateSet;
use projdoc_export::convert::build_converter;
use projdoc_export::pipeline::ReportPipeline;
use projdoc_export::styles::StyleDirective;

use crate::config::ServerConfig;
use crate::pages::Pages;

/// Shared application state, injected into all route handlers via Axum state.
///
/// Read-only after startup; every submission builds its own field set and
/// artifacts.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<ReportPipeline>,
    pub pages: Arc<Pages>,
}

impl AppState {
    pub fn new(pipeline: ReportPipeline, pages: Pages) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            pages: Arc::new(pages),
        }
    }

    pub fn from_config(config: &ServerConfig) -> eyre::Result<Self> {
        let style = StyleDirective::reference().with_sizes(&config.font_sizes);
        let templates = TemplateSet::from_dir(&config.template_dir).with_style(style);
        let pipeline = ReportPipeline::new(
            templates,
            build_converter(&config.converter),
            config.input_mode,
        );

        let templates = pipeline.templates();
        for source in [&templates.internal, &templates.external] {
            if !source.path.is_file() {
                warn!(path = %source.path.display(), "report template not found");
            }
        }
        info!(
            converter = pipeline.converter_name(),
            binary = %config.converter.binary().display(),
            input_mode = ?config.input_mode,
            "converter configured"
        );

        let pages = Pages::new().map_err(|e| eyre::eyre!("failed to load page templates: {e}"))?;

        Ok(Self::new(pipeline, pages))
    }
}
