use std::{borrow::Cow, path::Path};

use crate::{
    error::ParsingError,
    grammar::{Frequency, RuleKind, RuleSpec, SourceLine},
};

const COMMENT_MARKER: &str = "//";
const REPEAT_MARKERS: [char; 3] = ['*', '?', '+'];

#[inline]
fn is_stripped(c: char) -> bool {
    matches!(c, '(' | ')' | '*' | '?' | '+' | ' ')
}

/// Remove grouping parentheses, repetition markers and spaces from a rule body.
pub(crate) fn clean_body(body: &str) -> String {
    body.chars().filter(|c| !is_stripped(*c)).collect()
}

fn has_mixed_markers(body: &str) -> bool {
    REPEAT_MARKERS.iter().filter(|marker| body.contains(**marker)).count() > 1
}

fn split_operands(body: &str, delim: &str) -> Vec<String> {
    body.split(delim)
        .filter(|operand| !operand.is_empty())
        .map(String::from)
        .collect()
}

/// Parse the right-hand side of a `label: body` line.
///
/// Returns `None` if the body does not name a single operand.
pub fn parse_rule(body: &str) -> Option<RuleSpec> {
    let frequency = Frequency::of(body);
    let clean = clean_body(body);

    let (kind, operands) = if clean.contains("||") {
        (RuleKind::Disjunction, split_operands(&clean, "||"))
    } else {
        // A body without "&&" yields a single operand here
        let kind = if clean.starts_with('_') {
            RuleKind::Token
        } else {
            RuleKind::Conjunction
        };
        (kind, split_operands(&clean, "&&"))
    };

    if operands.is_empty() {
        return None;
    }

    Some(RuleSpec::new(kind, frequency, operands).with_mixed_markers(has_mixed_markers(body)))
}

/// Split a raw line into label, rule and trailing comment.
///
/// This never fails. If the line is not of the form `label: body` it is
/// returned without label and rule so that it can be passed through as a comment.
pub fn parse_line(line_number: usize, raw: &str) -> SourceLine {
    let (remainder, trailing_comment) = match raw.find(COMMENT_MARKER) {
        Some(start) => (&raw[..start], Some(raw[start..].to_string())),
        None => (raw, None),
    };
    let line = SourceLine::passthrough(line_number, raw, trailing_comment);

    let mut parts = remainder.split(':');
    let (label, body) = match (parts.next(), parts.next(), parts.next()) {
        (Some(label), Some(body), None) => (label.trim(), body.trim()),
        _ => {
            if !remainder.trim().is_empty() {
                tracing::warn!(line = line_number, "Not a rule definition, passing through: {}", raw);
            }
            return line;
        },
    };

    if label.is_empty() || body.is_empty() {
        tracing::warn!(line = line_number, "Rule is missing its label or body, passing through: {}", raw);
        return line;
    }

    let rule = match parse_rule(body) {
        Some(rule) => rule,
        None => {
            tracing::warn!(line = line_number, "Rule '{}' has no operands, passing through", label);
            return line;
        },
    };

    if rule.has_mixed_markers() {
        tracing::warn!(
            line = line_number,
            "Rule '{}' mixes repetition markers, using {}",
            label,
            rule.frequency()
        );
    }

    tracing::debug!(
        line = line_number,
        label,
        kind = ?rule.kind(),
        frequency = %rule.frequency(),
        operands = rule.operands().len(),
        "Parsed rule"
    );

    line.with_rule(label, rule)
}

/// Parse every non-blank line of a grammar definition.
///
/// Line numbers count blank lines too, so they match what an editor shows.
pub fn parse_source(text: &str) -> Vec<SourceLine> {
    text.lines()
        .enumerate()
        .filter(|(_, raw)| !raw.trim().is_empty())
        .map(|(index, raw)| parse_line(index + 1, raw))
        .collect()
}

/// Read a grammar definition file from disk and parse it.
pub fn parse_file(path: &Path) -> Result<Vec<SourceLine>, ParsingError> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            return Err(ParsingError::new(path, format!("Could not read grammar: {}", e)));
        },
    };

    let text = String::from_utf8_lossy(&bytes);
    if let Cow::Owned(_) = text {
        tracing::warn!(path = %path.display(), "Grammar is not valid UTF-8, invalid bytes were replaced");
    }

    let lines = parse_source(&text);
    tracing::info!(
        path = %path.display(),
        lines = lines.len(),
        rules = lines.iter().filter(|line| line.rule().is_some()).count(),
        "Parsed grammar definition"
    );

    Ok(lines)
}
