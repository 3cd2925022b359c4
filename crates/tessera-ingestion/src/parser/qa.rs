use super::sections::Section;

/// Line prefix marking a question in the transcript.
pub const QUESTION_MARKER: &str = "<Q>";

/// Whitespace artifact lines dropped when answer lines are joined.
const ANSWER_ARTIFACTS: [&str; 3] = ["\n", "\t", "\u{2003}\n"];

/// One or more questions paired with a single joined answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QaUnit {
    pub questions: Vec<String>,
    pub answer: String,
}

/// The QA units extracted from one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionQa {
    pub section_id: String,
    pub units: Vec<QaUnit>,
}

/// Group each section's lines into question/answer units. A question line
/// closes the current unit once answer lines have accumulated; consecutive
/// question lines batch into the same unit. A non-empty answer buffer at end
/// of section flushes one final unit.
pub fn parse_qa(sections: &[Section]) -> Vec<SectionQa> {
    sections
        .iter()
        .map(|section| {
            let mut units = Vec::new();
            let mut questions: Vec<String> = Vec::new();
            let mut answer_lines: Vec<String> = Vec::new();

            for line in &section.lines {
                if line.starts_with(QUESTION_MARKER) {
                    if !answer_lines.is_empty() {
                        units.push(QaUnit {
                            questions: std::mem::take(&mut questions),
                            answer: join_answer_lines(&answer_lines),
                        });
                        answer_lines.clear();
                    }
                    // Drop the marker and its trailing space.
                    questions.push(line.get(4..).unwrap_or("").to_string());
                    continue;
                }

                answer_lines.push(line.clone());
            }

            if !answer_lines.is_empty() {
                units.push(QaUnit {
                    questions,
                    answer: join_answer_lines(&answer_lines),
                });
            }

            SectionQa {
                section_id: section.id.clone(),
                units,
            }
        })
        .collect()
}

/// Join answer lines with no separator, dropping bare whitespace artifacts
/// carried over from the source transcript.
pub fn join_answer_lines(lines: &[String]) -> String {
    lines
        .iter()
        .filter(|line| !ANSWER_ARTIFACTS.contains(&line.as_str()))
        .map(String::as_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, raw: &[&str]) -> Section {
        Section {
            id: id.to_string(),
            lines: raw.iter().map(|l| l.to_string()).collect(),
        }
    }

    #[test]
    fn pairs_a_question_with_its_answer() {
        let sections = vec![section("1", &["<Q> What is 2+2?\n", "4\n"])];
        let qa = parse_qa(&sections);
        assert_eq!(
            qa,
            vec![SectionQa {
                section_id: "1".to_string(),
                units: vec![QaUnit {
                    questions: vec!["What is 2+2?\n".to_string()],
                    answer: "4\n".to_string(),
                }],
            }]
        );
    }

    #[test]
    fn consecutive_questions_share_one_answer() {
        let sections = vec![section(
            "1",
            &["<Q> Who?\n", "<Q> Which person?\n", "Marie Curie\n"],
        )];
        let units = &parse_qa(&sections)[0].units;
        assert_eq!(units.len(), 1);
        assert_eq!(
            units[0].questions,
            vec!["Who?\n".to_string(), "Which person?\n".to_string()]
        );
        assert_eq!(units[0].answer, "Marie Curie\n");
    }

    #[test]
    fn a_new_question_closes_the_previous_unit() {
        let sections = vec![section(
            "1",
            &["<Q> First?\n", "one\n", "<Q> Second?\n", "two\n"],
        )];
        let units = &parse_qa(&sections)[0].units;
        assert_eq!(units.len(), 2);
        assert_eq!(units[0].answer, "one\n");
        assert_eq!(units[1].questions, vec!["Second?\n".to_string()]);
    }

    #[test]
    fn answer_join_drops_whitespace_artifacts() {
        let lines: Vec<String> = ["Paris", "\n", "is", "\t", "the capital"]
            .iter()
            .map(|l| l.to_string())
            .collect();
        assert_eq!(join_answer_lines(&lines), "Parisisthe capital");
    }

    #[test]
    fn em_space_newline_artifact_is_dropped() {
        let lines: Vec<String> = ["start", "\u{2003}\n", "end"]
            .iter()
            .map(|l| l.to_string())
            .collect();
        assert_eq!(join_answer_lines(&lines), "startend");
    }

    #[test]
    fn answer_lines_without_a_question_yield_an_empty_questions_unit() {
        let sections = vec![section("1", &["no question here\n"])];
        let units = &parse_qa(&sections)[0].units;
        assert_eq!(units.len(), 1);
        assert!(units[0].questions.is_empty());
        assert_eq!(units[0].answer, "no question here\n");
    }

    #[test]
    fn trailing_question_without_an_answer_yields_no_unit() {
        let sections = vec![section("1", &["<Q> Unanswered?\n"])];
        assert!(parse_qa(&sections)[0].units.is_empty());
    }

    #[test]
    fn state_does_not_leak_across_sections() {
        let sections = vec![
            section("1", &["<Q> First?\n", "one\n"]),
            section("2", &["<Q> Second?\n", "two\n"]),
        ];
        let qa = parse_qa(&sections);
        assert_eq!(qa[1].units.len(), 1);
        assert_eq!(qa[1].units[0].questions, vec!["Second?\n".to_string()]);
        assert_eq!(qa[1].units[0].answer, "two\n");
    }

    #[test]
    fn bare_question_marker_yields_an_empty_question() {
        let sections = vec![section("1", &["<Q>\n", "answer\n"])];
        let units = &parse_qa(&sections)[0].units;
        assert_eq!(units[0].questions, vec!["".to_string()]);
    }
}
