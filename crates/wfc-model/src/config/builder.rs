use std::collections::BTreeMap;

use tracing::debug;

use crate::{
    CLUSTER_FIELDS, ConfigValue, KNOWN_CLUSTERS, ModelError, ModelResult, WorkflowConfig,
    config::metadata::term_definitions,
};

/// Builder assembling a [`WorkflowConfig`] from coerced form values.
///
/// Values are assigned field by field with [`WorkflowConfigBuilder::set`];
/// [`WorkflowConfigBuilder::build`] validates the result and derives the
/// metadata term definitions.
///
/// Assignment rules:
/// - a value of the wrong type is rejected with [`ModelError::TypeMismatch`];
/// - null clears nullable attributes and leaves every other attribute at its current value;
/// - names that are not attributes are kept in [`WorkflowConfig::extra`].
///
/// ```rust
/// use wfc_model::{ConfigValue, WorkflowConfigBuilder};
///
/// let mut builder = WorkflowConfigBuilder::new();
/// builder
///     .set("input_dir", ConfigValue::from("/data/images"))?
///     .set("cores", ConfigValue::Int(8))?;
/// let config = builder.build()?;
///
/// assert_eq!(config.input_dir, "/data/images");
/// assert_eq!(config.cluster_config.cores, 8);
/// # Ok::<(), wfc_model::ModelError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct WorkflowConfigBuilder {
    config: WorkflowConfig,
    user_terms: Vec<String>,
}

impl WorkflowConfigBuilder {
    /// Start from the pipeline defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a value, routing cluster fields into the nested cluster configuration.
    pub fn set(&mut self, name: &str, value: ConfigValue) -> ModelResult<&mut Self> {
        if CLUSTER_FIELDS.contains(&name) {
            self.set_cluster(name, value)
        } else {
            self.set_attribute(name, value)
        }
    }

    /// Assign a top-level attribute.
    pub fn set_attribute(&mut self, name: &str, value: ConfigValue) -> ModelResult<&mut Self> {
        let cfg = &mut self.config;
        match name {
            "input_dir" => keep_or(&mut cfg.input_dir, text(name, value)?),
            "json" => keep_or(&mut cfg.json, text(name, value)?),
            "filename_metadata" => keep_or(&mut cfg.filename_metadata, list(name, value)?),
            "workflow" => keep_or(&mut cfg.workflow, text(name, value)?),
            "img_outdir" => keep_or(&mut cfg.img_outdir, text(name, value)?),
            "include_all_subdirs" => keep_or(&mut cfg.include_all_subdirs, flag(name, value)?),
            "tmp_dir" => cfg.tmp_dir = text(name, value)?,
            "start_date" => cfg.start_date = text(name, value)?,
            "end_date" => cfg.end_date = text(name, value)?,
            "imgformat" => keep_or(&mut cfg.imgformat, text(name, value)?),
            "delimiter" => keep_or(&mut cfg.delimiter, text(name, value)?),
            "metadata_filters" => keep_or(&mut cfg.metadata_filters, map(name, value)?),
            "metadata_regex" => keep_or(&mut cfg.metadata_regex, map(name, value)?),
            "timestampformat" => keep_or(&mut cfg.timestampformat, text(name, value)?),
            "writeimg" => keep_or(&mut cfg.writeimg, flag(name, value)?),
            "other_args" => keep_or(&mut cfg.other_args, map(name, value)?),
            "groupby" => keep_or(&mut cfg.groupby, list(name, value)?),
            "group_name" => keep_or(&mut cfg.group_name, text(name, value)?),
            "cleanup" => keep_or(&mut cfg.cleanup, flag(name, value)?),
            "append" => keep_or(&mut cfg.append, flag(name, value)?),
            "checkpoint" => keep_or(&mut cfg.checkpoint, flag(name, value)?),
            "verbose" => keep_or(&mut cfg.verbose, flag(name, value)?),
            "cluster" => keep_or(&mut cfg.cluster, text(name, value)?),
            "metadata_terms" => keep_or(&mut self.user_terms, list(name, value)?),
            "cluster_config" => {
                return Err(ModelError::Invalid(
                    "cluster_config is assembled from its individual fields".into(),
                ));
            }
            _ => {
                cfg.extra.insert(name.to_string(), value);
            }
        }
        Ok(self)
    }

    /// Assign a field of the nested cluster configuration.
    pub fn set_cluster(&mut self, name: &str, value: ConfigValue) -> ModelResult<&mut Self> {
        let cluster = &mut self.config.cluster_config;
        match name {
            "n_workers" => keep_or(&mut cluster.n_workers, count(name, value)?),
            "cores" => keep_or(&mut cluster.cores, count(name, value)?),
            "memory" => keep_or(&mut cluster.memory, text(name, value)?),
            "disk" => keep_or(&mut cluster.disk, text(name, value)?),
            "log_directory" => cluster.log_directory = text(name, value)?,
            "local_directory" => cluster.local_directory = text(name, value)?,
            "job_extra_directives" => cluster.job_extra_directives = map(name, value)?,
            other => {
                return Err(ModelError::Invalid(format!(
                    "unknown cluster configuration field: {other}"
                )));
            }
        }
        Ok(self)
    }

    /// Validate and finish the configuration.
    pub fn build(self) -> ModelResult<WorkflowConfig> {
        let Self {
            mut config,
            user_terms,
        } = self;

        if !KNOWN_CLUSTERS.contains(&config.cluster.as_str()) {
            return Err(ModelError::Invalid(format!(
                "unknown cluster '{}' (valid: {})",
                config.cluster,
                KNOWN_CLUSTERS.join(", ")
            )));
        }

        config.metadata_terms =
            term_definitions(config.filename_metadata.iter().chain(user_terms.iter()));

        debug!(
            cluster = %config.cluster,
            terms = config.metadata_terms.len(),
            extra = config.extra.len(),
            "workflow configuration built"
        );
        Ok(config)
    }
}

/// Overwrite `slot` unless the submitted value was null.
fn keep_or<T>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}

fn mismatch(field: &str, expected: &'static str, value: &ConfigValue) -> ModelError {
    ModelError::TypeMismatch {
        field: field.to_string(),
        expected,
        actual: value.type_name(),
    }
}

fn text(field: &str, value: ConfigValue) -> ModelResult<Option<String>> {
    match value {
        ConfigValue::Null => Ok(None),
        ConfigValue::Str(s) => Ok(Some(s)),
        other => Err(mismatch(field, "string", &other)),
    }
}

fn flag(field: &str, value: ConfigValue) -> ModelResult<Option<bool>> {
    match value {
        ConfigValue::Null => Ok(None),
        ConfigValue::Bool(b) => Ok(Some(b)),
        other => Err(mismatch(field, "boolean", &other)),
    }
}

fn list(field: &str, value: ConfigValue) -> ModelResult<Option<Vec<String>>> {
    match value {
        ConfigValue::Null => Ok(None),
        ConfigValue::List(items) => Ok(Some(items)),
        other => Err(mismatch(field, "list", &other)),
    }
}

fn map(field: &str, value: ConfigValue) -> ModelResult<Option<BTreeMap<String, String>>> {
    match value {
        ConfigValue::Null => Ok(None),
        ConfigValue::Map(m) => Ok(Some(m)),
        other => Err(mismatch(field, "mapping", &other)),
    }
}

/// Positive count that fits the scheduler's 32-bit fields.
fn count(field: &str, value: ConfigValue) -> ModelResult<Option<u32>> {
    match value {
        ConfigValue::Null => Ok(None),
        ConfigValue::Int(i) => match u32::try_from(i) {
            Ok(n) if n > 0 => Ok(Some(n)),
            _ => Err(ModelError::Invalid(format!(
                "{field} must be a positive integer, got {i}"
            ))),
        },
        other => Err(mismatch(field, "integer", &other)),
    }
}
