mod domain;
pub use domain::{
    CLUSTER_FIELDS, ConfigValue, FieldKind, INPUT_DATE_FORMAT, NULL_LITERAL, Schema, coerce,
    normalize_timestamps, resolve_default_timezone, timezone_catalog,
};

mod error;
pub use error::{ModelError, ModelResult};

mod config;
pub use config::{
    ClusterConfig, KNOWN_CLUSTERS, MetadataTerm, WorkflowConfig, WorkflowConfigBuilder,
};

mod form;
pub use form::FormSubmission;
