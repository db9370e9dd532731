use regex::RegexBuilder;

/// A run of review text, marked when it matches the selected keyword
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub highlighted: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            highlighted: false,
        }
    }

    fn marked(text: &str) -> Self {
        Self {
            text: text.to_string(),
            highlighted: true,
        }
    }
}

/// Splits `text` around case-insensitive occurrences of `keyword`.
///
/// The keyword is matched literally and highlighted segments keep the casing
/// found in the text. Empty segments are never produced.
pub fn highlight(text: &str, keyword: &str) -> Vec<Segment> {
    if keyword.is_empty() {
        return vec![Segment::plain(text)];
    }

    let pattern = match RegexBuilder::new(&regex::escape(keyword))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => pattern,
        Err(e) => {
            log::warn!("Cannot highlight keyword '{}': {}", keyword, e);
            return vec![Segment::plain(text)];
        }
    };

    let mut segments = Vec::new();
    let mut last = 0;
    for found in pattern.find_iter(text) {
        if found.start() > last {
            segments.push(Segment::plain(&text[last..found.start()]));
        }
        segments.push(Segment::marked(found.as_str()));
        last = found.end();
    }
    if last < text.len() || segments.is_empty() {
        segments.push(Segment::plain(&text[last..]));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(segments: &[Segment]) -> String {
        segments
            .iter()
            .map(|s| if s.highlighted { format!("[{}]", s.text) } else { s.text.clone() })
            .collect()
    }

    #[test]
    fn test_marks_every_occurrence_keeping_case() {
        let segments = highlight("Story first, story last. STORY!", "story");
        assert_eq!(render(&segments), "[Story] first, [story] last. [STORY]!");
    }

    #[test]
    fn test_keyword_at_edges() {
        assert_eq!(render(&highlight("mods", "MODS")), "[mods]");
        assert_eq!(render(&highlight("mods are great", "mods")), "[mods] are great");
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        assert_eq!(render(&highlight("c++ (really) c++", "c++")), "[c++] (really) [c++]");
        assert_eq!(render(&highlight("a.b axb", "a.b")), "[a.b] axb");
    }

    #[test]
    fn test_no_match_or_empty_keyword() {
        assert_eq!(highlight("nothing here", "story"), vec![Segment::plain("nothing here")]);
        assert_eq!(highlight("text", ""), vec![Segment::plain("text")]);
        assert_eq!(highlight("", "x"), vec![Segment::plain("")]);
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(render(&highlight("ストーリーが最高、ストーリー", "ストーリー")), "[ストーリー]が最高、[ストーリー]");
    }
}
