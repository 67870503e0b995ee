//! Search filter for the admin camera table

use secureeye_types::CameraRecord;

/// Case-insensitive substring query over camera name and id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    needle: String,
}

impl SearchQuery {
    /// Build a query from the search box contents
    #[must_use]
    pub fn new<S: Into<String>>(input: S) -> Self {
        let raw = input.into();
        let needle = raw.to_lowercase();
        Self { raw, needle }
    }

    /// The text as typed
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether the query matches everything
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Whether `record`'s name or id contains the query, ignoring case
    #[must_use]
    pub fn matches(&self, record: &CameraRecord) -> bool {
        self.needle.is_empty()
            || record.name.to_lowercase().contains(&self.needle)
            || record.id.as_str().to_lowercase().contains(&self.needle)
    }
}

/// Ordered sublist of `records` matching `query`.
///
/// Recomputed from scratch on every call.
pub fn filter_records<'a, I>(records: I, query: &SearchQuery) -> Vec<&'a CameraRecord>
where
    I: IntoIterator<Item = &'a CameraRecord>,
{
    records
        .into_iter()
        .filter(|record| query.matches(record))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    fn cameras() -> Vec<CameraRecord> {
        vec![
            CameraRecord::new("CAM0001", "Front Door Camera", "123 Main St"),
            CameraRecord::new("CAM0002", "Backyard Camera", "456 Elm St"),
            CameraRecord::new("CAM0003", "Garage Camera", "789 Oak St"),
            CameraRecord::new("CAM0004", "Side Entrance Camera", "101 Pine St"),
        ]
    }

    fn matched_ids(records: &[CameraRecord], query: &str) -> Vec<String> {
        filter_records(records, &SearchQuery::new(query))
            .into_iter()
            .map(|r| r.id.to_string())
            .collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let records = cameras();
        assert_eq!(
            matched_ids(&records, ""),
            vec!["CAM0001", "CAM0002", "CAM0003", "CAM0004"]
        );
        assert!(SearchQuery::default().is_empty());
    }

    #[rstest]
    #[case("cam0001", &["CAM0001"])]
    #[case("CAM000", &["CAM0001", "CAM0002", "CAM0003", "CAM0004"])]
    #[case("garage", &["CAM0003"])]
    #[case("DOOR", &["CAM0001"])]
    #[case("camera", &["CAM0001", "CAM0002", "CAM0003", "CAM0004"])]
    #[case("elm", &[])]
    #[case("zzz", &[])]
    fn test_query_matches_name_or_id(#[case] query: &str, #[case] expected: &[&str]) {
        let records = cameras();
        assert_eq!(matched_ids(&records, query), expected);
    }

    #[test]
    fn test_query_keeps_raw_text() {
        let query = SearchQuery::new("Front DOOR");
        assert_eq!(query.as_str(), "Front DOOR");
        assert!(!query.is_empty());
    }

    proptest! {
        #[test]
        fn test_filter_is_exact_ordered_subset(
            names in proptest::collection::vec("[A-Za-z ]{1,12}", 0..10),
            query in "[A-Za-z0-9]{0,3}",
        ) {
            let records: Vec<CameraRecord> = names
                .iter()
                .enumerate()
                .map(|(i, name)| CameraRecord::new(format!("CAM{i:04}"), name.clone(), "x"))
                .collect();
            let needle = query.to_lowercase();

            let filtered = filter_records(&records, &SearchQuery::new(query.clone()));
            let expected: Vec<&CameraRecord> = records
                .iter()
                .filter(|r| {
                    r.name.to_lowercase().contains(&needle)
                        || r.id.as_str().to_lowercase().contains(&needle)
                })
                .collect();

            prop_assert_eq!(filtered, expected);
        }
    }
}
