/// Characters Windows refuses in filename components.
const INVALID_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Make a string safe as a filename component on the most restrictive common
/// target filesystem. Invalid characters and underscores become spaces, runs
/// of spaces collapse to one, and trailing dots/whitespace are trimmed.
/// Idempotent: sanitizing an already-sanitized name is a no-op.
pub fn sanitize_filename(name: &str) -> String {
    let mut out: String = name
        .chars()
        .map(|c| {
            if INVALID_CHARS.contains(&c) || c == '_' {
                ' '
            } else {
                c
            }
        })
        .collect();
    while out.contains("  ") {
        out = out.replace("  ", " ");
    }
    let out = out
        .trim_start()
        .trim_end_matches(|c: char| c == '.' || c.is_whitespace());
    if out.is_empty() {
        String::from("unnamed")
    } else {
        out.to_string()
    }
}

/// Base output name for one student's files: optional prefix and suffix wrap
/// the student name, each part sanitized, joined by single spaces.
pub fn build_base_name(prefix: Option<&str>, student: &str, suffix: Option<&str>) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(prefix) = prefix.map(str::trim).filter(|p| !p.is_empty()) {
        parts.push(sanitize_filename(prefix));
    }
    parts.push(sanitize_filename(student));
    if let Some(suffix) = suffix.map(str::trim).filter(|s| !s.is_empty()) {
        parts.push(sanitize_filename(suffix));
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::{build_base_name, sanitize_filename};

    #[test]
    fn replaces_invalid_characters_and_underscores() {
        let sanitized = sanitize_filename(r#"a<b>c:d"e/f\g|h?i*j_k"#);
        for c in ['<', '>', ':', '"', '/', '\\', '|', '?', '*', '_'] {
            assert!(!sanitized.contains(c), "found {:?} in {:?}", c, sanitized);
        }
        assert_eq!(sanitized, "a b c d e f g h i j k");
    }

    #[test]
    fn collapses_runs_of_spaces() {
        assert_eq!(sanitize_filename("John__Smith"), "John Smith");
        assert_eq!(sanitize_filename("a / b"), "a b");
    }

    #[test]
    fn trims_whitespace_and_trailing_dots() {
        assert_eq!(sanitize_filename("  John Smith  "), "John Smith");
        assert_eq!(sanitize_filename("John Smith Jr."), "John Smith Jr");
        assert_eq!(sanitize_filename("a. . ."), "a");
    }

    #[test]
    fn empty_result_falls_back_to_unnamed() {
        assert_eq!(sanitize_filename(""), "unnamed");
        assert_eq!(sanitize_filename("___"), "unnamed");
        assert_eq!(sanitize_filename("..."), "unnamed");
    }

    #[test]
    fn is_idempotent() {
        for name in [
            "John_Smith",
            "  a<b>c  ",
            "a. . .",
            "plain name",
            "???",
            "tr_ailing_.",
        ] {
            let once = sanitize_filename(name);
            assert_eq!(sanitize_filename(&once), once, "not idempotent on {:?}", name);
        }
    }

    #[test]
    fn base_name_wraps_student_with_prefix_and_suffix() {
        assert_eq!(build_base_name(None, "John_Smith", None), "John Smith");
        assert_eq!(
            build_base_name(Some("CS101"), "John Smith", Some("HW2")),
            "CS101 John Smith HW2"
        );
        assert_eq!(build_base_name(Some("  "), "Jane", None), "Jane");
        assert_eq!(build_base_name(None, "Jane", Some("a/b")), "Jane a b");
    }
}
