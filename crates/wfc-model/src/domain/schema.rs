use std::{collections::BTreeMap, fmt};

/// Target type of a submitted form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    /// Plain string, passed through unchanged.
    #[default]
    Str,
    /// Base-10 integer.
    Int,
    /// Case-insensitive `true`, anything else is `false`.
    Bool,
    /// Comma-separated list of strings.
    List,
    /// Comma-separated `key:value` pairs.
    Map,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FieldKind::Str => "string",
            FieldKind::Int => "integer",
            FieldKind::Bool => "boolean",
            FieldKind::List => "list",
            FieldKind::Map => "mapping",
        };
        f.write_str(s)
    }
}

const LIST_FIELDS: [&str; 3] = ["filename_metadata", "metadata_terms", "groupby"];
const MAP_FIELDS: [&str; 4] = [
    "job_extra_directives",
    "metadata_filters",
    "metadata_regex",
    "other_args",
];
const INT_FIELDS: [&str; 2] = ["cores", "n_workers"];
const BOOL_FIELDS: [&str; 6] = [
    "include_all_subdirs",
    "checkpoint",
    "verbose",
    "append",
    "cleanup",
    "writeimg",
];

/// Declarative classification of form fields into target types.
///
/// Any field the schema does not know about is treated as [`FieldKind::Str`].
/// [`Schema::default`] holds the classification used by the workflow
/// configuration form; [`Schema::with_field`] extends or overrides it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema(BTreeMap<String, FieldKind>);

impl Schema {
    /// Schema with no classified fields: every field is a string.
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Classify (or reclassify) a field.
    pub fn with_field(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.0.insert(name.into(), kind);
        self
    }

    /// Target type for `name`.
    pub fn kind_of(&self, name: &str) -> FieldKind {
        self.0.get(name).copied().unwrap_or_default()
    }

    /// Iterate over explicitly classified fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, FieldKind)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl Default for Schema {
    fn default() -> Self {
        let groups = [
            (&LIST_FIELDS[..], FieldKind::List),
            (&MAP_FIELDS[..], FieldKind::Map),
            (&INT_FIELDS[..], FieldKind::Int),
            (&BOOL_FIELDS[..], FieldKind::Bool),
        ];

        groups
            .into_iter()
            .flat_map(|(names, kind)| names.iter().map(move |n| (n.to_string(), kind)))
            .fold(Self::empty(), |schema, (name, kind)| {
                schema.with_field(name, kind)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_classifies_known_fields() {
        let schema = Schema::default();

        assert_eq!(schema.kind_of("filename_metadata"), FieldKind::List);
        assert_eq!(schema.kind_of("groupby"), FieldKind::List);
        assert_eq!(schema.kind_of("metadata_filters"), FieldKind::Map);
        assert_eq!(schema.kind_of("job_extra_directives"), FieldKind::Map);
        assert_eq!(schema.kind_of("cores"), FieldKind::Int);
        assert_eq!(schema.kind_of("n_workers"), FieldKind::Int);
        assert_eq!(schema.kind_of("verbose"), FieldKind::Bool);
        assert_eq!(schema.kind_of("cleanup"), FieldKind::Bool);
    }

    #[test]
    fn unknown_fields_are_strings() {
        let schema = Schema::default();
        assert_eq!(schema.kind_of("input_dir"), FieldKind::Str);
        assert_eq!(schema.kind_of("no_such_field"), FieldKind::Str);
        assert_eq!(Schema::empty().kind_of("cores"), FieldKind::Str);
    }

    #[test]
    fn with_field_overrides_existing_kind() {
        let schema = Schema::default()
            .with_field("cores", FieldKind::Str)
            .with_field("retries", FieldKind::Int);

        assert_eq!(schema.kind_of("cores"), FieldKind::Str);
        assert_eq!(schema.kind_of("retries"), FieldKind::Int);
    }

    #[test]
    fn default_has_every_group() {
        let count = Schema::default().iter().count();
        assert_eq!(
            count,
            LIST_FIELDS.len() + MAP_FIELDS.len() + INT_FIELDS.len() + BOOL_FIELDS.len()
        );
    }
}
