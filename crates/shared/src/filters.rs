//! Filter declarations and user selections.
//!
//! A source declares the facets it understands as plain data; the host renders
//! them however it likes and hands the user's choices back as [`FilterValue`]s.

use serde::{Deserialize, Serialize};

/// A filter a source can declare
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Filter {
    /// Exclusive choice between options
    Select {
        id: String,
        title: String,
        options: Vec<String>,
        default: usize,
    },
    /// Any number of named checkboxes
    Group {
        id: String,
        title: String,
        options: Vec<String>,
    },
}

impl Filter {
    pub fn select<S: Into<String>>(
        id: &str,
        title: &str,
        options: impl IntoIterator<Item = S>,
        default: usize,
    ) -> Self {
        Filter::Select {
            id: id.to_string(),
            title: title.to_string(),
            options: options.into_iter().map(Into::into).collect(),
            default,
        }
    }

    pub fn group<S: Into<String>>(
        id: &str,
        title: &str,
        options: impl IntoIterator<Item = S>,
    ) -> Self {
        Filter::Group {
            id: id.to_string(),
            title: title.to_string(),
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Filter::Select { id, .. } | Filter::Group { id, .. } => id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Filter::Select { title, .. } | Filter::Group { title, .. } => title,
        }
    }

    pub fn options(&self) -> &[String] {
        match self {
            Filter::Select { options, .. } | Filter::Group { options, .. } => options,
        }
    }

    /// The selection a host should send when the user changed nothing
    pub fn default_value(&self) -> FilterValue {
        match self {
            Filter::Select { id, default, .. } => FilterValue::Select {
                id: id.clone(),
                index: *default,
            },
            Filter::Group { id, .. } => FilterValue::Group {
                id: id.clone(),
                selected: Vec::new(),
            },
        }
    }
}

/// A user's choice for one declared filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FilterValue {
    Select { id: String, index: usize },
    Group { id: String, selected: Vec<String> },
}

impl FilterValue {
    pub fn id(&self) -> &str {
        match self {
            FilterValue::Select { id, .. } | FilterValue::Group { id, .. } => id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let order = Filter::select("order", "Order by", ["A", "B"], 1);
        assert_eq!(
            order.default_value(),
            FilterValue::Select {
                id: "order".to_string(),
                index: 1
            }
        );

        let tags = Filter::group("tags", "Tags", ["M", "F"]);
        assert_eq!(tags.title(), "Tags");
        assert_eq!(tags.options(), &["M".to_string(), "F".to_string()]);
        assert_eq!(
            tags.default_value(),
            FilterValue::Group {
                id: "tags".to_string(),
                selected: vec![]
            }
        );
    }

    #[test]
    fn test_filter_value_json_shape() {
        let value: FilterValue =
            serde_json::from_str(r#"{"type":"group","id":"tags","selected":["MF"]}"#).unwrap();
        assert_eq!(value.id(), "tags");
        assert_eq!(
            value,
            FilterValue::Group {
                id: "tags".to_string(),
                selected: vec!["MF".to_string()]
            }
        );
    }
}
