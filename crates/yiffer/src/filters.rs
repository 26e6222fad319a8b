//! Search facets offered by the Yiffer source.
//!
//! Declared as plain data for the host, and resolved back from the user's
//! selections into a [`SearchQuery`].

use crate::api::query::{SearchQuery, SortOrder};
use crate::keywords::{self, UNKNOWN_KEYWORD_ID};
use shared::{Filter, FilterValue};
use tracing::debug;

pub const ORDER_FILTER: &str = "order";
pub const CATEGORY_FILTER: &str = "categories";
pub const TAG_FILTER: &str = "tags";
pub const KEYWORD_FILTER: &str = "keywords";

pub const ORDER_OPTIONS: [&str; 2] = ["Recently updated", "User rating"];
pub const CATEGORIES: [&str; 4] = ["Furry", "MLP", "Pokemon", "Other"];
pub const TAGS: [&str; 7] = ["M", "F", "MF", "MM", "FF", "MF+", "I"];

/// All filters, in display order
pub fn filter_list() -> Vec<Filter> {
    vec![
        Filter::select(ORDER_FILTER, "Order by", ORDER_OPTIONS, 0),
        Filter::group(CATEGORY_FILTER, "Categories", CATEGORIES),
        Filter::group(TAG_FILTER, "Tags", TAGS),
        Filter::group(KEYWORD_FILTER, "Keywords", keywords::names()),
    ]
}

/// Map the order selector's index to a sort order
pub fn sort_order(index: usize) -> SortOrder {
    match index {
        0 => SortOrder::Updated,
        _ => SortOrder::UserRating,
    }
}

impl SearchQuery {
    /// Build a search from free text and filter selections
    ///
    /// Unknown filter ids are ignored. Keyword names missing from the keyword
    /// table are dropped rather than sent as id 0.
    pub fn from_filters(search: &str, page: u32, filters: &[FilterValue]) -> Self {
        let mut query = SearchQuery {
            search: search.to_string(),
            page,
            ..Default::default()
        };

        for filter in filters {
            match (filter.id(), filter) {
                (ORDER_FILTER, FilterValue::Select { index, .. }) => {
                    query.order = sort_order(*index);
                }
                (CATEGORY_FILTER, FilterValue::Group { selected, .. }) => {
                    query.categories.extend(selected.iter().cloned());
                }
                (TAG_FILTER, FilterValue::Group { selected, .. }) => {
                    query.tags.extend(selected.iter().cloned());
                }
                (KEYWORD_FILTER, FilterValue::Group { selected, .. }) => {
                    for name in selected {
                        match keywords::lookup(name) {
                            UNKNOWN_KEYWORD_ID => debug!(keyword = %name, "Unknown keyword, skipping"),
                            id => query.keyword_ids.push(id),
                        }
                    }
                }
                (id, _) => debug!(filter = id, "Ignoring unrecognized filter"),
            }
        }

        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(id: &str, selected: &[&str]) -> FilterValue {
        FilterValue::Group {
            id: id.to_string(),
            selected: selected.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn select(id: &str, index: usize) -> FilterValue {
        FilterValue::Select {
            id: id.to_string(),
            index,
        }
    }

    #[test]
    fn test_filter_list_shape() {
        let filters = filter_list();
        let ids: Vec<_> = filters.iter().map(|f| f.id()).collect();
        assert_eq!(ids, vec!["order", "categories", "tags", "keywords"]);

        assert!(matches!(&filters[0], Filter::Select { default: 0, .. }));
        assert_eq!(filters[1].options().len(), 4);
        assert_eq!(filters[2].options().len(), 7);
        assert_eq!(filters[3].options().len(), keywords::all().len());
        assert_eq!(filters[3].options()[0], "abdl");
    }

    #[test]
    fn test_no_filters_defaults() {
        let query = SearchQuery::from_filters("", 1, &[]);
        assert_eq!(query, SearchQuery::listing(1, SortOrder::Updated));
    }

    #[test]
    fn test_default_values_match_no_filters() {
        let defaults: Vec<_> = filter_list().iter().map(Filter::default_value).collect();
        assert_eq!(
            SearchQuery::from_filters("fox", 2, &defaults),
            SearchQuery::from_filters("fox", 2, &[])
        );
    }

    #[test]
    fn test_order_selection() {
        let query = SearchQuery::from_filters("", 1, &[select(ORDER_FILTER, 1)]);
        assert_eq!(query.order, SortOrder::UserRating);

        let query = SearchQuery::from_filters("", 1, &[select(ORDER_FILTER, 0)]);
        assert_eq!(query.order, SortOrder::Updated);
    }

    #[test]
    fn test_facets_resolve_in_order() {
        let filters = vec![
            select(ORDER_FILTER, 1),
            group(CATEGORY_FILTER, &["Pokemon", "Furry"]),
            group(TAG_FILTER, &["MF"]),
            group(KEYWORD_FILTER, &["fox", "not a keyword", "absol"]),
        ];
        let query = SearchQuery::from_filters("tales", 3, &filters);

        assert_eq!(query.search, "tales");
        assert_eq!(query.page, 3);
        assert_eq!(query.categories, vec!["Pokemon", "Furry"]);
        assert_eq!(query.tags, vec!["MF"]);
        assert_eq!(query.keyword_ids, vec![114, 1]);
    }

    #[test]
    fn test_unrecognized_filters_ignored() {
        let filters = vec![
            group("genres", &["Action"]),
            // Right id, wrong shape
            select(TAG_FILTER, 2),
        ];
        let query = SearchQuery::from_filters("", 1, &filters);
        assert_eq!(query, SearchQuery::listing(1, SortOrder::Updated));
    }
}
