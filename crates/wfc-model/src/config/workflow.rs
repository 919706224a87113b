use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    ConfigValue, ModelError, ModelResult,
    config::{ClusterConfig, MetadataTerm, metadata::term_definitions},
};

/// Workflow configuration consumed by the image-processing pipeline.
///
/// Built with [`crate::WorkflowConfigBuilder`], which validates the values
/// and derives `metadata_terms`. Field names match the keys the pipeline
/// reads from its JSON configuration file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[non_exhaustive]
pub struct WorkflowConfig {
    /// Directory holding the input images.
    pub input_dir: String,
    /// Path of the results file the pipeline writes.
    pub json: String,
    /// Ordered metadata terms encoded in image filenames.
    pub filename_metadata: Vec<String>,
    /// Path of the workflow script run on each image group.
    pub workflow: String,
    pub img_outdir: String,
    pub include_all_subdirs: bool,
    pub tmp_dir: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub imgformat: String,
    pub delimiter: String,
    pub metadata_filters: BTreeMap<String, String>,
    pub metadata_regex: BTreeMap<String, String>,
    /// Format of the `timestamp` metadata term and of `start_date`/`end_date`.
    pub timestampformat: String,
    pub writeimg: bool,
    /// Extra arguments forwarded to the workflow script.
    pub other_args: BTreeMap<String, String>,
    pub groupby: Vec<String>,
    pub group_name: String,
    pub cleanup: bool,
    pub append: bool,
    pub checkpoint: bool,
    pub verbose: bool,
    /// Cluster backend name, one of [`crate::KNOWN_CLUSTERS`].
    pub cluster: String,
    pub cluster_config: ClusterConfig,
    pub metadata_terms: BTreeMap<String, MetadataTerm>,
    /// Submitted fields that are not attributes of the configuration.
    #[serde(flatten)]
    pub extra: BTreeMap<String, ConfigValue>,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        let filename_metadata = Vec::new();
        let metadata_terms = term_definitions(&filename_metadata);
        Self {
            input_dir: String::new(),
            json: String::new(),
            filename_metadata,
            workflow: String::new(),
            img_outdir: "./output_images".to_string(),
            include_all_subdirs: true,
            tmp_dir: None,
            start_date: None,
            end_date: None,
            imgformat: "png".to_string(),
            delimiter: "_".to_string(),
            metadata_filters: BTreeMap::new(),
            metadata_regex: BTreeMap::new(),
            timestampformat: "%Y-%m-%d %H:%M:%S.%f".to_string(),
            writeimg: false,
            other_args: BTreeMap::new(),
            groupby: vec!["filepath".to_string()],
            group_name: "imgtype".to_string(),
            cleanup: true,
            append: false,
            checkpoint: true,
            verbose: false,
            cluster: "LocalCluster".to_string(),
            cluster_config: ClusterConfig::default(),
            metadata_terms,
            extra: BTreeMap::new(),
        }
    }
}

impl WorkflowConfig {
    /// Render as pretty JSON with a four-space indent.
    pub fn to_json_pretty(&self) -> ModelResult<Vec<u8>> {
        let mut out = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
        self.serialize(&mut ser)
            .map_err(|e| ModelError::Invalid(format!("serialization failed: {e}")))?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_pipeline_defaults() {
        let cfg = WorkflowConfig::default();

        assert_eq!(cfg.img_outdir, "./output_images");
        assert_eq!(cfg.groupby, vec!["filepath".to_string()]);
        assert_eq!(cfg.cluster, "LocalCluster");
        assert!(cfg.include_all_subdirs);
        assert!(!cfg.verbose);
        assert!(cfg.metadata_terms.contains_key("timestamp"));
    }

    #[test]
    fn pretty_json_uses_four_spaces() {
        let bytes = WorkflowConfig::default().to_json_pretty().unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.starts_with("{\n    \"input_dir\": \"\""));
        assert!(text.contains("\n        \"n_workers\": 1"));
    }

    #[test]
    fn extra_fields_are_flattened() {
        let mut cfg = WorkflowConfig::default();
        cfg.extra
            .insert("tz_selection".to_string(), ConfigValue::from("UTC"));

        let json = serde_json::to_value(&cfg).unwrap();
        assert_eq!(json["tz_selection"], "UTC");
        assert!(json.get("extra").is_none());
        assert!(json["start_date"].is_null());
    }
}
