use tracing::debug;

use crate::{
    ModelResult, Schema, WorkflowConfig, WorkflowConfigBuilder, coerce,
    domain::{
        DEFAULT_TIMEZONE, FIELD_END_DATE, FIELD_START_DATE, FIELD_TIMESTAMP_FORMAT,
        FIELD_TZ_SELECTION, NULL_LITERAL,
    },
    normalize_timestamps,
};

/// Raw fields of one form submission, in submission order.
///
/// A repeated field name keeps its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSubmission(Vec<(String, String)>);

impl FormSubmission {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Set a field, replacing an earlier value in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == name) {
            Some((_, slot)) => *slot = value,
            None => self.0.push((name, value)),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Turn the submission into a validated workflow configuration.
    ///
    /// The start/end dates are first localized to `tz_selection` (default
    /// `UTC`) and rendered with `timestampformat` (default: the
    /// configuration's own default). Missing dates count as `"null"`.
    /// Every field is then coerced with `schema` and assigned.
    pub fn into_config(mut self, schema: &Schema) -> ModelResult<WorkflowConfig> {
        let default_format = WorkflowConfig::default().timestampformat;
        let tz = self.get(FIELD_TZ_SELECTION).unwrap_or(DEFAULT_TIMEZONE);
        let format = self.get(FIELD_TIMESTAMP_FORMAT).unwrap_or(&default_format);
        let start = self.get(FIELD_START_DATE).unwrap_or(NULL_LITERAL);
        let end = self.get(FIELD_END_DATE).unwrap_or(NULL_LITERAL);

        let (start, end) = normalize_timestamps(tz, start, end, format)?;
        self.insert(FIELD_START_DATE, start)
            .insert(FIELD_END_DATE, end);

        let mut builder = WorkflowConfigBuilder::new();
        for (name, raw) in self.iter() {
            let value = coerce(name, raw, schema)?;
            builder.set(name, value)?;
        }

        debug!(fields = self.len(), "form submission coerced");
        builder.build()
    }
}

impl<K, V> FromIterator<(K, V)> for FormSubmission
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut form = Self::new();
        for (k, v) in iter {
            form.insert(k, v);
        }
        form
    }
}
