pub mod qa;
pub mod sections;

pub use qa::{parse_qa, QaUnit, SectionQa};
pub use sections::{parse_sections, Section};

/// Split raw text into lines, each keeping its trailing newline. Section and
/// QA parsing both depend on lines arriving unmodified.
pub fn read_lines(content: &str) -> Vec<String> {
    content.split_inclusive('\n').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_lines_keeps_newlines() {
        let lines = read_lines("1\nsecond line\nlast");
        assert_eq!(lines, vec!["1\n", "second line\n", "last"]);
    }

    #[test]
    fn read_lines_of_empty_input_is_empty() {
        assert!(read_lines("").is_empty());
    }
}
