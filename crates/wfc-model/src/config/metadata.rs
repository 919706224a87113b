use std::collections::BTreeMap;

use serde::Serialize;

const STR_DATATYPE: &str = "<class 'str'>";
const UNSET_VALUE: &str = "none";

/// Built-in metadata vocabulary understood by the pipeline.
const BUILTIN_TERMS: [(&str, &str); 14] = [
    ("camera", "camera identifier"),
    ("imgtype", "image type"),
    ("zoom", "camera zoom setting"),
    ("exposure", "camera exposure setting"),
    ("gain", "camera gain setting"),
    ("frame", "image series frame identifier"),
    ("lifter", "imaging platform height setting"),
    ("timestamp", "datetime of image"),
    ("id", "image identifier"),
    ("plantbarcode", "plant barcode identifier"),
    ("treatment", "treatment identifier"),
    ("cartag", "plant carrier identifier"),
    ("measurementlabel", "experiment identifier"),
    ("other", "other identifier"),
];

/// Definition of one metadata term the pipeline extracts from filenames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataTerm {
    pub label: String,
    pub datatype: String,
    pub value: String,
}

impl MetadataTerm {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            datatype: STR_DATATYPE.to_string(),
            value: UNSET_VALUE.to_string(),
        }
    }
}

/// Built-in terms plus any user term not already defined, labelled by its own name.
pub(crate) fn term_definitions<'a>(
    user_terms: impl IntoIterator<Item = &'a String>,
) -> BTreeMap<String, MetadataTerm> {
    let mut terms: BTreeMap<String, MetadataTerm> = BUILTIN_TERMS
        .iter()
        .map(|(name, label)| (name.to_string(), MetadataTerm::new(*label)))
        .collect();

    for term in user_terms {
        if term.is_empty() {
            continue;
        }
        terms
            .entry(term.clone())
            .or_insert_with(|| MetadataTerm::new(term.as_str()));
    }
    terms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_terms_are_always_present() {
        let terms = term_definitions(&Vec::<String>::new());
        assert_eq!(terms.len(), BUILTIN_TERMS.len());
        assert_eq!(terms["plantbarcode"].label, "plant barcode identifier");
        assert_eq!(terms["camera"].datatype, "<class 'str'>");
        assert_eq!(terms["camera"].value, "none");
    }

    #[test]
    fn user_terms_extend_without_overriding() {
        let user = vec!["camera".to_string(), "plot".to_string(), String::new()];
        let terms = term_definitions(&user);

        assert_eq!(terms.len(), BUILTIN_TERMS.len() + 1);
        assert_eq!(terms["camera"].label, "camera identifier");
        assert_eq!(terms["plot"].label, "plot");
    }
}
