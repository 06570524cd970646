use serde::Serialize;

use crate::grammar::RuleSpec;

/// A single non-blank line of a grammar definition file.
///
/// `label` and `rule` are either both present or both absent. A line without
/// them is passed through as a comment.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct SourceLine {
    line_number: usize,
    original: String,
    trailing_comment: Option<String>,
    label: Option<String>,
    rule: Option<RuleSpec>,
}

impl SourceLine {
    pub(crate) fn passthrough<S: Into<String>>(line_number: usize, original: S, trailing_comment: Option<String>) -> Self {
        Self {
            line_number,
            original: original.into(),
            trailing_comment,
            label: None,
            rule: None,
        }
    }

    pub(crate) fn with_rule<S: Into<String>>(mut self, label: S, rule: RuleSpec) -> Self {
        self.label = Some(label.into());
        self.rule = Some(rule);
        self
    }

    /// 1-based position of this line in its file.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// The untouched input text.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Everything from the first `//` to the end of the line.
    pub fn trailing_comment(&self) -> Option<&str> {
        self.trailing_comment.as_deref()
    }

    /// The rule name in front of the `:`.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The parsed rule body.
    pub fn rule(&self) -> Option<&RuleSpec> {
        self.rule.as_ref()
    }

    /// Label and rule, if this line defines a rule.
    pub fn definition(&self) -> Option<(&str, &RuleSpec)> {
        match (&self.label, &self.rule) {
            (Some(label), Some(rule)) => Some((label.as_str(), rule)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::parse_source;

    #[test]
    fn test_serialize() {
        let lines = parse_source("Stmt: (Expr && SEMI)+ // s");
        let value = serde_json::to_value(&lines[0]).unwrap();
        assert_eq!(
            value,
            json!({
                "line_number": 1,
                "original": "Stmt: (Expr && SEMI)+ // s",
                "trailing_comment": "// s",
                "label": "Stmt",
                "rule": {
                    "kind": "Conjunction",
                    "frequency": "OneOrMore",
                    "operands": ["Expr", "SEMI"],
                    "mixed_markers": false,
                },
            })
        );
    }

    #[test]
    fn test_serialize_passthrough() {
        let lines = parse_source("// only a comment");
        let value = serde_json::to_value(&lines[0]).unwrap();
        assert_eq!(value["label"], serde_json::Value::Null);
        assert_eq!(value["rule"], serde_json::Value::Null);
        assert_eq!(value["trailing_comment"], "// only a comment");
    }
}
