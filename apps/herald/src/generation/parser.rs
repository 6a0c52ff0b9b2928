//! Deterministic subject/body extraction from free-form model output.
//!
//! The prompt asks for `Subject: <line>\n\n<body>` but nothing enforces it,
//! so parsing is total: a malformed or subject-less response degrades to
//! the default subject with the raw text as body, never an error.

/// Subject used when the model output carries no usable `Subject:` line.
pub const DEFAULT_SUBJECT: &str = "Internship Application";

/// A parsed email draft.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailDraft {
    pub subject: String,
    pub body: String,
}

/// Splits raw model output into subject and body.
///
/// The first line matching `Subject: <text>` (case-insensitive, anchored at
/// the start of the line) supplies the subject; every matching line is
/// blanked out of the body, which is then trimmed at both ends. Falls back
/// to [`DEFAULT_SUBJECT`] when no line matches or the matched text trims to
/// nothing.
pub fn parse_email(raw_output: &str) -> EmailDraft {
    let mut subject: Option<String> = None;
    let mut matched_any = false;

    let body_lines: Vec<&str> = raw_output
        .lines()
        .map(|line| match subject_text(line) {
            Some(text) => {
                matched_any = true;
                if subject.is_none() {
                    subject = Some(text.trim().to_string());
                }
                ""
            }
            None => line,
        })
        .collect();

    let body = if matched_any {
        body_lines.join("\n").trim().to_string()
    } else {
        raw_output.trim().to_string()
    };

    let subject = match subject {
        Some(s) if !s.is_empty() => s,
        _ => DEFAULT_SUBJECT.to_string(),
    };

    EmailDraft { subject, body }
}

/// Returns the text after the `Subject:` prefix when the line is a subject
/// line. Matching is anchored: the prefix must start the line, and at least
/// one character must follow the colon.
fn subject_text(line: &str) -> Option<&str> {
    const PREFIX: &str = "subject:";
    let head = line.get(..PREFIX.len())?;
    if !head.eq_ignore_ascii_case(PREFIX) {
        return None;
    }
    let rest = &line[PREFIX.len()..];
    if rest.is_empty() {
        return None;
    }
    Some(rest)
}
