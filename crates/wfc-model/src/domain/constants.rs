//! Well-known field names and literals shared by the form and the model.

/// Literal submitted by the form for "no value", for any field type.
pub const NULL_LITERAL: &str = "null";

/// Pattern produced by the browser's `datetime-local` input.
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Fields stored in the nested cluster configuration instead of as top-level attributes.
pub const CLUSTER_FIELDS: [&str; 7] = [
    "n_workers",
    "cores",
    "memory",
    "disk",
    "log_directory",
    "local_directory",
    "job_extra_directives",
];

pub(crate) const FIELD_TZ_SELECTION: &str = "tz_selection";
pub(crate) const FIELD_START_DATE: &str = "start_date";
pub(crate) const FIELD_END_DATE: &str = "end_date";
pub(crate) const FIELD_TIMESTAMP_FORMAT: &str = "timestampformat";

/// Timezone used when the caller does not supply one.
pub(crate) const DEFAULT_TIMEZONE: &str = "UTC";
