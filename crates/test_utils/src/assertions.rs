//! Row-shape assertion helpers

use serde::Serialize;

/// Asserts that a serialized row contains exactly the given columns.
///
/// Panics with the offending column name on a mismatch, so test failures
/// point straight at the schema drift.
pub fn assert_row_columns<R: Serialize>(row: &R, columns: &[&str]) {
    let value = serde_json::to_value(row).expect("row must serialize");
    let object = value.as_object().expect("row must serialize to an object");

    for column in columns {
        assert!(
            object.contains_key(*column),
            "row is missing column {:?}",
            column
        );
    }
    for key in object.keys() {
        assert!(
            columns.contains(&key.as_str()),
            "row has unexpected column {:?}",
            key
        );
    }
    assert_eq!(object.len(), columns.len());
}

/// Asserts that two rows serialize to the same value (projection equality)
pub fn assert_rows_equal<R: Serialize>(a: &R, b: &R) {
    let a = serde_json::to_value(a).expect("row must serialize");
    let b = serde_json::to_value(b).expect("row must serialize");
    assert_eq!(a, b);
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_records::TableRecord;

    #[test]
    fn test_assert_row_columns_accepts_matching_row() {
        let member = crate::fixtures::MemberFixtures::john_smith();
        let row = member.to_row().unwrap();
        assert_row_columns(&row, domain_records::Member::COLUMNS);
    }

    #[test]
    #[should_panic(expected = "missing column")]
    fn test_assert_row_columns_rejects_missing_column() {
        let member = crate::fixtures::MemberFixtures::john_smith();
        let row = member.to_row().unwrap();
        assert_row_columns(&row, &["FirstName", "LastName", "NoSuchColumn"]);
    }
}
