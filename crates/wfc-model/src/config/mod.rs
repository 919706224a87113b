mod cluster;
pub use cluster::{ClusterConfig, KNOWN_CLUSTERS};

mod metadata;
pub use metadata::MetadataTerm;

mod workflow;
pub use workflow::WorkflowConfig;

mod builder;
pub use builder::WorkflowConfigBuilder;
