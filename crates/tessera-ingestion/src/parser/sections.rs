/// A numbered top-level grouping of raw transcript lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub lines: Vec<String>,
}

/// Scan lines for sequential numeric section markers and group the lines
/// following each marker under it.
///
/// A marker is a line that, trimmed, consists only of decimal digits and
/// equals the next expected integer (1, 2, 3, ...). Any other digit line is
/// ordinary body text. Marker lines themselves are never stored, lines before
/// the first marker are discarded, and a section with no body lines is not
/// emitted. The trailing buffer is only emitted when a closing marker
/// arrives; input that does not end with one drops its last section.
pub fn parse_sections(lines: &[String]) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut active = false;
    let mut match_token: u64 = 0;

    for line in lines {
        if is_marker(line, match_token + 1) {
            if !current.is_empty() {
                sections.push(Section {
                    id: match_token.to_string(),
                    lines: std::mem::take(&mut current),
                });
            }
            match_token += 1;
            active = true;
            current.clear();
            continue;
        }

        if active {
            current.push(line.clone());
        }
    }

    sections
}

fn is_marker(line: &str, expected: u64) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty()
        && trimmed.chars().all(|c| c.is_ascii_digit())
        && trimmed.parse::<u64>() == Ok(expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn groups_lines_under_sequential_markers() {
        let input = lines(&[
            "1\n",
            "<Q> What is 2+2?\n",
            "4\n",
            "2\n",
            "<Q> What is the capital of France?\n",
            "Paris\n",
            "3\n",
        ]);
        let sections = parse_sections(&input);
        assert_eq!(
            sections,
            vec![
                Section {
                    id: "1".to_string(),
                    lines: lines(&["<Q> What is 2+2?\n", "4\n"]),
                },
                Section {
                    id: "2".to_string(),
                    lines: lines(&["<Q> What is the capital of France?\n", "Paris\n"]),
                },
            ]
        );
    }

    #[test]
    fn trailing_section_without_closing_marker_is_dropped() {
        let input = lines(&["1\n", "first\n", "2\n", "orphaned\n"]);
        let sections = parse_sections(&input);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].id, "1");
    }

    #[test]
    fn lines_before_the_first_marker_are_discarded() {
        let input = lines(&["preamble\n", "more preamble\n", "1\n", "body\n", "2\n"]);
        let sections = parse_sections(&input);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].lines, lines(&["body\n"]));
    }

    #[test]
    fn out_of_sequence_numbers_are_body_text() {
        let input = lines(&["1\n", "5\n", "2\n"]);
        let sections = parse_sections(&input);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].lines, lines(&["5\n"]));
    }

    #[test]
    fn marker_lines_are_never_stored() {
        let input = lines(&["1\n", "body\n", "2\n", "tail\n", "3\n"]);
        for section in parse_sections(&input) {
            for line in &section.lines {
                assert!(!is_marker(line, 2) && !is_marker(line, 3));
            }
        }
    }

    #[test]
    fn consecutive_markers_emit_no_empty_section() {
        let input = lines(&["1\n", "2\n", "body\n", "3\n"]);
        let sections = parse_sections(&input);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].id, "2");
    }

    #[test]
    fn ids_are_strictly_increasing_and_unique() {
        let input = lines(&[
            "1\n", "a\n", "2\n", "b\n", "3\n", "c\n", "4\n", "d\n", "5\n",
        ]);
        let ids: Vec<u64> = parse_sections(&input)
            .iter()
            .map(|s| s.id.parse().unwrap())
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn marker_with_surrounding_whitespace_still_matches() {
        let input = lines(&["  1  \n", "body\n", "\t2\n"]);
        let sections = parse_sections(&input);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].id, "1");
    }
}
