mod value;
pub use value::ConfigValue;

mod schema;
pub use schema::{FieldKind, Schema};

mod coerce;
pub use coerce::coerce;

mod timestamp;
pub use timestamp::normalize_timestamps;

mod timezone;
pub use timezone::{resolve_default_timezone, timezone_catalog};

mod constants;
pub use constants::{CLUSTER_FIELDS, INPUT_DATE_FORMAT, NULL_LITERAL};
pub(crate) use constants::{
    DEFAULT_TIMEZONE, FIELD_END_DATE, FIELD_START_DATE, FIELD_TIMESTAMP_FORMAT,
    FIELD_TZ_SELECTION,
};
