use std::collections::BTreeMap;

use serde::Serialize;

/// Cluster backends the pipeline's job scheduler can start.
pub const KNOWN_CLUSTERS: [&str; 8] = [
    "LocalCluster",
    "HTCondorCluster",
    "LSFCluster",
    "MoabCluster",
    "OARCluster",
    "PBSCluster",
    "SGECluster",
    "SLURMCluster",
];

/// Resources requested from the cluster backend.
///
/// Rendered as the nested `cluster_config` object of the workflow configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClusterConfig {
    /// Number of workers to start.
    pub n_workers: u32,
    /// CPU cores per worker.
    pub cores: u32,
    /// Memory per worker, in the scheduler's notation (e.g. `"4GB"`).
    pub memory: String,
    /// Scratch disk per worker.
    pub disk: String,
    pub log_directory: Option<String>,
    pub local_directory: Option<String>,
    /// Extra scheduler directives passed through to job submission.
    pub job_extra_directives: Option<BTreeMap<String, String>>,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            n_workers: 1,
            cores: 1,
            memory: "1GB".to_string(),
            disk: "1GB".to_string(),
            log_directory: None,
            local_directory: None,
            job_extra_directives: None,
        }
    }
}
