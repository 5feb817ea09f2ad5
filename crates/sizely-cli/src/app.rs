use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use sizely_core::estimate::{EnumerationRequest, compute_breakdown};
use sizely_core::model::payload::PayloadFormat;
use sizely_core::model::task_count::TaskCount;
use tracing::{debug, info};

use crate::config::SizelyConfig;
use crate::render::{self, OutputFormat};

/// Where a task-count payload comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadSource {
    File(PathBuf),
    Json(String),
    Yaml(String),
}

impl PayloadSource {
    pub fn load(&self) -> Result<TaskCount> {
        let tasks = match self {
            PayloadSource::File(path) => {
                let data = fs::read_to_string(path)
                    .with_context(|| format!("reading file {}", path.display()))?;
                TaskCount::parse(&data, PayloadFormat::from_path(path))?
            }
            PayloadSource::Json(input) => TaskCount::from_json(input)?,
            PayloadSource::Yaml(input) => TaskCount::from_yaml(input)?,
        };
        Ok(tasks)
    }
}

/// Runs calculator commands and renders their output. Nothing is rendered on error.
pub struct App {
    config: SizelyConfig,
}

impl App {
    pub fn new(config: SizelyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SizelyConfig {
        &self.config
    }

    fn format(&self, requested: Option<OutputFormat>) -> OutputFormat {
        requested.unwrap_or(self.config.output.format)
    }

    pub fn estimate(&self, source: &PayloadSource, format: Option<OutputFormat>) -> Result<String> {
        let tasks = source.load()?;
        let capacity = compute_breakdown(tasks);
        info!(
            total_points = capacity.total_points,
            total_tasks = capacity.total_tasks,
            "computed sprint capacity"
        );
        render::capacity(&capacity, self.format(format))
    }

    pub fn breakdown(
        &self,
        points: i64,
        max_tasks: Option<i64>,
        format: Option<OutputFormat>,
        show_advice: bool,
    ) -> Result<String> {
        let max_tasks = max_tasks.unwrap_or_else(|| i64::from(self.config.breakdown.max_tasks));
        let request = EnumerationRequest::new(points, max_tasks)?;
        debug!(
            target_points = request.target_points(),
            max_tasks = request.max_tasks(),
            "searching combinations"
        );
        let result = request.run();
        info!(found = result.total_found(), "combination search finished");
        render::combinations(
            &result,
            self.format(format),
            show_advice && self.config.breakdown.show_advice,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sizely_core::EstimateError;

    fn app() -> App {
        App::new(SizelyConfig::default())
    }

    #[test]
    fn estimate_from_inline_json() {
        let out = app()
            .estimate(
                &PayloadSource::Json(r#"{"xs":3,"s":2,"m":1,"l":1}"#.to_string()),
                None,
            )
            .unwrap();
        assert!(out.contains("24 points"));
    }

    #[test]
    fn estimate_from_yaml_file_as_json_output() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("tasks.yml");
        fs::write(&path, "xs: 2\nl: 1\n").unwrap();
        let out = app()
            .estimate(&PayloadSource::File(path), Some(OutputFormat::Json))
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["total_points"], 12);
        assert_eq!(value["breakdown"][3]["size"], "L");
    }

    #[test]
    fn malformed_payload_is_an_error() {
        let err = app()
            .estimate(&PayloadSource::Json("{bad".to_string()), None)
            .expect_err("malformed");
        let estimate_err = err.downcast_ref::<EstimateError>().expect("estimate error");
        assert!(estimate_err.is_malformed());
    }

    #[test]
    fn missing_file_mentions_path() {
        let err = app()
            .estimate(&PayloadSource::File(PathBuf::from("/no/such/tasks.json")), None)
            .expect_err("missing");
        assert!(err.to_string().contains("/no/such/tasks.json"));
    }

    #[test]
    fn breakdown_uses_configured_max_tasks() {
        let mut config = SizelyConfig::default();
        config.breakdown.max_tasks = 3;
        let out = App::new(config)
            .breakdown(30, None, Some(OutputFormat::Json), true)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["max_tasks"], 3);
        assert_eq!(value["total_found"], 1);
    }

    #[test]
    fn breakdown_rejects_non_positive_arguments() {
        for (points, max) in [(0, Some(15)), (-4, None), (10, Some(0)), (10, Some(-2))] {
            let err = app()
                .breakdown(points, max, None, true)
                .expect_err("invalid argument");
            assert!(matches!(
                err.downcast_ref::<EstimateError>(),
                Some(EstimateError::InvalidArgument { .. })
            ));
        }
    }
}
