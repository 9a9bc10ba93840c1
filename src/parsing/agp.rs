//! Parser for AGP (A Golden Path) tiling files.
//!
//! AGP lines are whitespace/tab-delimited with at least these leading
//! columns: object name, object start, object end, part number, component
//! type. Only the object name and object end are consumed by the loader; the
//! component-specific trailing columns are not inspected. Gap rows count
//! toward an object's extent the same way component rows do.

/// One consumed AGP row: the object name and its end coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgpRow {
    pub object_name: String,
    pub object_end: u64,
}

/// Outcome of parsing a single AGP line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgpLine {
    /// Comment (`#`-prefixed) or blank line, ignored
    Skip,
    /// A well-formed row
    Row(AgpRow),
    /// A row that cannot be used; the loader skips it with a warning
    Malformed(String),
}

/// Parse one AGP line.
///
/// Rows with fewer than three fields, or with a non-numeric or zero object
/// end, are reported as [`AgpLine::Malformed`] so the caller can warn and
/// continue without disturbing the extent computation for other rows.
#[must_use]
pub fn parse_line(line: &str) -> AgpLine {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return AgpLine::Skip;
    }

    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 3 {
        return AgpLine::Malformed(format!("expected at least 3 fields, found {}", fields.len()));
    }

    let object_end: u64 = match fields[2].parse() {
        Ok(end) => end,
        Err(_) => {
            return AgpLine::Malformed(format!("invalid object end '{}'", fields[2]));
        }
    };
    if object_end == 0 {
        return AgpLine::Malformed("object end must be >= 1".to_string());
    }

    AgpLine::Row(AgpRow {
        object_name: fields[0].to_string(),
        object_end,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_component_row() {
        let line = "scaffold1\t1\t615\t1\tW\tAL627309.15\t1\t615\t+";
        match parse_line(line) {
            AgpLine::Row(row) => {
                assert_eq!(row.object_name, "scaffold1");
                assert_eq!(row.object_end, 615);
            }
            other => panic!("expected row, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_gap_row() {
        // Gap rows still contribute to the object extent
        let line = "scaffold1\t616\t715\t2\tN\t100\tscaffold\tyes\tpaired-ends";
        match parse_line(line) {
            AgpLine::Row(row) => assert_eq!(row.object_end, 715),
            other => panic!("expected row, got {other:?}"),
        }
    }

    #[test]
    fn test_space_delimited_row() {
        let line = "chr5 1 2000 1 W AC000001.1 1 2000 +";
        match parse_line(line) {
            AgpLine::Row(row) => {
                assert_eq!(row.object_name, "chr5");
                assert_eq!(row.object_end, 2000);
            }
            other => panic!("expected row, got {other:?}"),
        }
    }

    #[test]
    fn test_comment_and_blank_skipped() {
        assert_eq!(parse_line("# AGP comment"), AgpLine::Skip);
        assert_eq!(parse_line(""), AgpLine::Skip);
        assert_eq!(parse_line("   "), AgpLine::Skip);
    }

    #[test]
    fn test_too_few_fields_is_malformed() {
        assert!(matches!(parse_line("scaffold1\t1"), AgpLine::Malformed(_)));
    }

    #[test]
    fn test_non_numeric_end_is_malformed() {
        assert!(matches!(
            parse_line("scaffold1\t1\tx615\t1\tW"),
            AgpLine::Malformed(_)
        ));
    }

    #[test]
    fn test_zero_end_is_malformed() {
        assert!(matches!(
            parse_line("scaffold1\t0\t0\t1\tW"),
            AgpLine::Malformed(_)
        ));
    }
}
