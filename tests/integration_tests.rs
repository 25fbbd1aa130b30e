//! Integration tests for gridjson end-to-end conversion

use gridjson::{
    parse_grid_table, table_to_mapping, table_to_mapping_json, table_to_records,
    table_to_records_json, ExtractError,
};
use pretty_assertions::assert_eq;
use serde_json::json;

// ============================================================================
// Records mode
// ============================================================================

mod records {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_readme_records_example() {
        let table = "\
+-------+-----+
| name  | age |
+-------+-----+
| alice | 30  |
| bob   | 25  |
+-------+-----+
";
        let json = table_to_records_json(table).unwrap();
        assert_eq!(
            json,
            r#"[{"name":"alice","age":30},{"name":"bob","age":25}]"#
        );
    }

    #[test]
    fn test_fully_separated_table() {
        let table = "\
+-------+-----+
| name  | age |
+-------+-----+
| alice | 30  |
+-------+-----+
| bob   | 25  |
+-------+-----+
";
        let json = table_to_records_json(table).unwrap();
        assert_eq!(
            json,
            r#"[{"name":"alice","age":30},{"name":"bob","age":25}]"#
        );
    }

    #[test]
    fn test_value_coercion() {
        let table = "\
+--------+---------+--------+-------+
| text   | number  | flag   | list  |
+--------+---------+--------+-------+
| hello  | 42      | true   | [1,2] |
+--------+---------+--------+-------+
";
        let records = table_to_records(table).unwrap();
        assert_eq!(records[0]["text"], json!("hello"));
        assert_eq!(records[0]["number"], json!(42));
        assert_eq!(records[0]["flag"], json!(true));
        assert_eq!(records[0]["list"], json!([1, 2]));
    }

    #[test]
    fn test_multiline_cells_join_with_spaces() {
        let table = "\
+------+----------------+
| code | description    |
+------+----------------+
| e101 | something went |
|      | quite wrong    |
+------+----------------+
";
        let records = table_to_records(table).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0]["description"],
            json!("something went quite wrong")
        );
    }

    #[test]
    fn test_every_row_becomes_a_record() {
        // Rows with empty first cells are kept, not filtered
        let table = "\
+--------+-------+
| name   | value |
+--------+-------+
| first  | 1     |
+--------+-------+
|        | 2     |
+--------+-------+
";
        let records = table_to_records(table).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["name"], json!(""));
        assert_eq!(records[1]["value"], json!(2));
    }

    #[test]
    fn test_shape_mismatch_is_an_error() {
        // Header spans two of the three columns, so body rows have more
        // cells than there are fields.
        let table = "\
+----+----------+----+
| id | combined      |
+----+----------+----+
| 10 | x        | y  |
+----+----------+----+
";
        let err = table_to_records(table).unwrap_err();
        assert!(matches!(err, ExtractError::ShapeMismatch { .. }));
    }
}

// ============================================================================
// Mapping mode
// ============================================================================

mod mapping {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_readme_mapping_example() {
        let table = "\
+-------+-----------+
| Field | Value     |
+-------+-----------+
| host  | localhost |
| port  | 8080      |
+-------+-----------+
";
        let json = table_to_mapping_json(table).unwrap();
        assert_eq!(json, r#"{"host":"localhost","port":8080}"#);
    }

    #[test]
    fn test_empty_keys_skipped_and_duplicates_last_wins() {
        let table = "\
+-------+-------+
| Field | Value |
+-------+-------+
| retry | 1     |
+-------+-------+
|       | noise |
+-------+-------+
| retry | 5     |
+-------+-------+
";
        let mapping = table_to_mapping(table).unwrap();
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping["retry"], json!(5));
    }

    #[test]
    fn test_non_two_column_table_is_an_error() {
        let table = "\
+----+----+----+
| a1 | b1 | c1 |
+----+----+----+
| x1 | y1 | z1 |
+----+----+----+
";
        let err = table_to_mapping(table).unwrap_err();
        assert!(matches!(err, ExtractError::ShapeMismatch { .. }));
    }
}

// ============================================================================
// Normalization / structure
// ============================================================================

mod structure {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalization_is_a_no_op_for_separated_tables() {
        // An explicitly separated table and its prettytable-style
        // unseparated twin must parse to the same structure.
        let separated = "\
+-------+-----+
| name  | age |
+-------+-----+
| alice | 30  |
+-------+-----+
| bob   | 25  |
+-------+-----+
";
        let unseparated = "\
+-------+-----+
| name  | age |
+-------+-----+
| alice | 30  |
| bob   | 25  |
+-------+-----+
";
        let a = parse_grid_table(separated).unwrap();
        let b = parse_grid_table(unseparated).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_blank_lines_around_table_are_ignored() {
        let table = "

+-------+-----+
| name  | age |
+-------+-----+
| alice | 30  |
+-------+-----+

";
        let records = table_to_records(table).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_too_few_lines_is_structural_error() {
        let err = table_to_records("+---+\n| a |\n+---+\n").unwrap_err();
        assert!(matches!(err, ExtractError::StructuralParse { .. }));
    }

    #[test]
    fn test_inconsistent_borders_are_structural_errors() {
        let table = "\
+-------+-----+
| name  | age |
+-------+-----+
| alice | 30  |
+------+------+
";
        let err = table_to_records(table).unwrap_err();
        assert!(matches!(err, ExtractError::StructuralParse { .. }));
    }

    #[test]
    fn test_plain_text_is_a_structural_error() {
        let err = table_to_records_json("this is not a table\nat all\nreally\nnope\n").unwrap_err();
        assert!(matches!(err, ExtractError::StructuralParse { .. }));
    }
}
