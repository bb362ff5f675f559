/*
 * attr.rs
 * Copyright (c) 2025 Posit, PBC
 */

/// Pandoc attributes: (identifier, classes, key-value pairs).
///
/// Key-value pairs are a list, not a map: pandoc allows repeated keys and
/// several filters look at the *first* pair only.
pub type Attr = (String, Vec<String>, AttrPairs);

pub type AttrPairs = Vec<(String, String)>;

pub fn empty_attr() -> Attr {
    (String::new(), vec![], vec![])
}

pub fn is_empty_attr(attr: &Attr) -> bool {
    attr.0.is_empty() && attr.1.is_empty() && attr.2.is_empty()
}

/// Attributes with no identifier and no key-value pairs.
pub fn attr_with_classes<I, S>(classes: I) -> Attr
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    (
        String::new(),
        classes.into_iter().map(Into::into).collect(),
        vec![],
    )
}

pub fn has_class(attr: &Attr, class: &str) -> bool {
    attr.1.iter().any(|c| c == class)
}

/// The first key-value pair, if any.
pub fn first_pair(attr: &Attr) -> Option<(&str, &str)> {
    attr.2.first().map(|(k, v)| (k.as_str(), v.as_str()))
}
