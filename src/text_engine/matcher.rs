/// Represents a single find match in a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Line number (0-indexed)
    pub line: u32,
    /// Column position (0-indexed, in characters not bytes)
    pub col: u16,
    /// Length of match in characters
    pub len: u16,
}

/// Lowercases `line` and maps every folded character index (plus the end
/// position) back to the original character index it came from.
fn fold_case(line: &str) -> (String, Vec<usize>) {
    let mut folded = String::with_capacity(line.len());
    let mut columns = Vec::with_capacity(line.len() + 1);

    for (index, ch) in line.chars().enumerate() {
        for lower in ch.to_lowercase() {
            folded.push(lower);
            columns.push(index);
        }
    }
    columns.push(line.chars().count());

    (folded, columns)
}

/// Finds all non-overlapping occurrences of a query, line by line
pub struct FindMatcher;

impl FindMatcher {
    pub fn find_all(lines: &[String], query: &str, case_sensitive: bool) -> Vec<Match> {
        if query.is_empty() {
            return Vec::new();
        }

        let needle = if case_sensitive {
            query.to_string()
        } else {
            query.to_lowercase()
        };
        let needle_chars = needle.chars().count();
        let mut matches = Vec::new();

        for (line_num, line) in lines.iter().enumerate() {
            let (haystack, columns) = if case_sensitive {
                (line.clone(), (0..=line.chars().count()).collect())
            } else {
                fold_case(line)
            };
            let mut search_start = 0;

            while let Some(byte_pos) = haystack[search_start..].find(&needle) {
                let absolute_byte_pos = search_start + byte_pos;
                // Columns are reported against the original line, whose
                // characters may fold to a different number of characters
                let start = haystack[..absolute_byte_pos].chars().count();
                let col = columns[start];
                let end = columns[start + needle_chars];

                matches.push(Match {
                    line: line_num as u32,
                    col: col as u16,
                    len: (end - col) as u16,
                });

                search_start = absolute_byte_pos + needle.len();
            }
        }

        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(str::to_string).collect()
    }

    #[test]
    fn test_empty_query() {
        assert!(FindMatcher::find_all(&lines("hello world"), "", false).is_empty());
    }

    #[test]
    fn test_empty_content() {
        assert!(FindMatcher::find_all(&[], "hello", false).is_empty());
    }

    #[test]
    fn test_single_match() {
        let matches = FindMatcher::find_all(&lines("hello world"), "world", false);
        assert_eq!(matches, vec![Match { line: 0, col: 6, len: 5 }]);
    }

    #[test]
    fn test_case_insensitive_by_default() {
        let matches = FindMatcher::find_all(&lines("Hello WORLD"), "world", false);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].col, 6);
    }

    #[test]
    fn test_case_sensitive() {
        let content = lines("Option option OPTION");
        let matches = FindMatcher::find_all(&content, "option", true);
        assert_eq!(matches, vec![Match { line: 0, col: 7, len: 6 }]);
    }

    #[test]
    fn test_multiple_matches_same_line() {
        let matches = FindMatcher::find_all(&lines("foo bar foo baz foo"), "foo", false);
        let cols: Vec<u16> = matches.iter().map(|m| m.col).collect();
        assert_eq!(cols, vec![0, 8, 16]);
    }

    #[test]
    fn test_multiple_lines() {
        let matches = FindMatcher::find_all(&lines("line one\nline two\nline three"), "line", false);
        let rows: Vec<u32> = matches.iter().map(|m| m.line).collect();
        assert_eq!(rows, vec![0, 1, 2]);
    }

    #[test]
    fn test_unicode_content() {
        let matches = FindMatcher::find_all(&lines("héllo wörld"), "wörld", false);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].col, 6); // Character position, not byte
    }

    #[test]
    fn test_columns_survive_case_folding_growth() {
        // 'İ' lowercases to two characters
        let matches = FindMatcher::find_all(&lines("İx foo"), "foo", false);
        assert_eq!(matches, vec![Match { line: 0, col: 3, len: 3 }]);
    }

    #[test]
    fn test_match_covering_folded_character() {
        let matches = FindMatcher::find_all(&lines("aİb"), "i\u{307}b", false);
        assert_eq!(matches, vec![Match { line: 0, col: 1, len: 2 }]);
    }

    // For any query injected into arbitrary content, a case-insensitive find
    // locates it whatever the case of either side.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_case_insensitive_matching(
            content in "[a-zA-Z0-9 ]{0,80}",
            query in "[a-zA-Z]{1,10}",
        ) {
            let upper = vec![format!("{} {}", content, query.to_uppercase())];
            let lower = vec![format!("{} {}", content, query.to_lowercase())];

            let in_upper = FindMatcher::find_all(&upper, &query.to_lowercase(), false);
            let in_lower = FindMatcher::find_all(&lower, &query.to_uppercase(), false);

            prop_assert!(!in_upper.is_empty());
            prop_assert_eq!(in_upper.len(), in_lower.len());
        }
    }
}
