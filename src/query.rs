//! Query String Composition
//!
//! Optional filters are described as `(key, predicate, value)` triples,
//! filtered by their predicate and joined with `&`.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::forms::WishlistForm;

/// Characters escaped inside a query value
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>');

/// One optional `key=value` pair
#[derive(Debug, Clone)]
pub struct QueryFilter<'a> {
    pub key: &'static str,
    pub value: &'a str,
    pub include: fn(&str) -> bool,
}

impl<'a> QueryFilter<'a> {
    /// Filter that is dropped when its value is empty
    pub fn unless_empty(key: &'static str, value: &'a str) -> Self {
        Self {
            key,
            value,
            include: is_present,
        }
    }

    fn is_included(&self) -> bool {
        (self.include)(self.value)
    }
}

/// A field counts as present once it is non-empty. Whitespace is a value.
pub fn is_present(value: &str) -> bool {
    !value.is_empty()
}

/// Join the included filters in order. `None` when nothing survives.
pub fn compose_query(filters: &[QueryFilter<'_>]) -> Option<String> {
    let pairs: Vec<String> = filters
        .iter()
        .filter(|f| f.is_included())
        .map(|f| format!("{}={}", f.key, utf8_percent_encode(f.value, QUERY_VALUE)))
        .collect();

    if pairs.is_empty() {
        None
    } else {
        Some(pairs.join("&"))
    }
}

/// Wishlist search filters: `keyword` from the name, then `customer_id`
pub fn search_filters(form: &WishlistForm) -> [QueryFilter<'_>; 2] {
    [
        QueryFilter::unless_empty("keyword", &form.wishlist_name),
        QueryFilter::unless_empty("customer_id", &form.customer_id),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, customer: &str) -> WishlistForm {
        WishlistForm {
            wishlist_name: name.to_string(),
            customer_id: customer.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_customer_only() {
        let f = form("", "C9");
        let query = compose_query(&search_filters(&f)).unwrap();
        assert_eq!(query, "customer_id=C9");
        assert!(!query.contains("keyword="));
    }

    #[test]
    fn test_keyword_only() {
        let f = form("groceries", "");
        assert_eq!(
            compose_query(&search_filters(&f)).as_deref(),
            Some("keyword=groceries")
        );
    }

    #[test]
    fn test_both_empty_is_none() {
        assert_eq!(compose_query(&search_filters(&form("", ""))), None);
    }

    #[test]
    fn test_whitespace_name_is_sent() {
        let f = form("  ", "C1");
        assert_eq!(
            compose_query(&search_filters(&f)).as_deref(),
            Some("keyword=%20%20&customer_id=C1")
        );
    }

    #[test]
    fn test_both_present_single_separator() {
        let f = form("groceries", "C9");
        let query = compose_query(&search_filters(&f)).unwrap();
        assert_eq!(query, "keyword=groceries&customer_id=C9");
        assert!(!query.starts_with('&'));
        assert!(!query.ends_with('&'));
        assert_eq!(query.matches('&').count(), 1);
    }

    #[test]
    fn test_values_are_escaped() {
        let f = form("a&b c", "");
        assert_eq!(
            compose_query(&search_filters(&f)).as_deref(),
            Some("keyword=a%26b%20c")
        );
    }

    #[test]
    fn test_custom_predicate() {
        let filters = [
            QueryFilter {
                key: "available",
                value: "false",
                include: |v| v == "true",
            },
            QueryFilter::unless_empty("category", "toys"),
        ];
        assert_eq!(compose_query(&filters).as_deref(), Some("category=toys"));
    }
}
