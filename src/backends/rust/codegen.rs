use itertools::Itertools;
use std::io::Write;

use crate::{
    backends::rust::formatter::RustFormatter,
    error::{Error, GenerationError},
    grammar::{RuleKind, RuleSpec, SourceLine},
};

/// Indentation of every generated line
pub const DEFAULT_INDENTATION: &str = "\t";

fn quote_operands(operands: &[String]) -> String {
    operands.iter().map(|operand| format!("\"{}\"", operand)).join(", ")
}

fn constructor(line: &SourceLine, label: &str, rule: &RuleSpec) -> Result<String, GenerationError> {
    let operands = quote_operands(rule.operands());
    
    let code = match (rule.kind(), rule.frequency().marker()) {
        (RuleKind::Token, None) => format!("create_label_match(vec![{}])", operands),
        (RuleKind::Token, Some(_)) => {
            return Err(GenerationError::UnsupportedFrequency {
                label: label.to_string(),
                line: line.line_number(),
                frequency: rule.frequency(),
            });
        },
        (RuleKind::Conjunction, None) => format!("create_and_rule_once( vec![{}])", operands),
        (RuleKind::Conjunction, Some(marker)) => format!("create_and_rule({}, vec![{}])", marker, operands),
        (RuleKind::Disjunction, None) => format!("create_or_rule_once( vec![{}])", operands),
        (RuleKind::Disjunction, Some(marker)) => format!("create_or_rule({}, vec![{}])", marker, operands),
    };
    
    Ok(code)
}

/// This is the main struct of the [`rust`](crate::backends::rust) backend. It turns
/// parsed grammar lines into calls that register rules in the parser table.
pub struct RustGenerator {
    indentation: String,
}

impl RustGenerator {
    /// Create a new RustGenerator that indents with a single tab.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            indentation: DEFAULT_INDENTATION.to_string(),
        }
    }
    
    /// Use `indentation` in front of every generated line instead of a tab.
    pub fn indentation<S: Into<String>>(mut self, indentation: S) -> Self {
        self.indentation = indentation.into();
        self
    }
    
    /// Render a single line into its output fragments.
    ///
    /// The first fragment always echoes the original line as a comment. If the line
    /// defines a rule, the registration statement follows, then the trailing comment
    /// if there is one, then the line terminator.
    pub fn emit(&self, line: &SourceLine) -> Result<Vec<String>, GenerationError> {
        let mut fmt = RustFormatter::new(&self.indentation);
        fmt.comment(line.original());
        
        if let Some((label, rule)) = line.definition() {
            let code = constructor(line, label, rule)?;
            fmt.statement(format!("result.insert(\"{}\", {});", label, code));
        }
        
        if let Some(comment) = line.trailing_comment() {
            fmt.append(comment);
        }
        
        fmt.end_line();
        Ok(fmt.finish())
    }
    
    /// Render all lines in order. Nothing is returned if any line fails.
    pub fn generate(&self, lines: &[SourceLine]) -> Result<String, GenerationError> {
        let emissions = lines.iter().map(|line| self.emit(line)).collect::<Result<Vec<_>, _>>()?;
        
        tracing::info!(
            lines = lines.len(),
            statements = lines.iter().filter(|line| line.definition().is_some()).count(),
            "Generated registration code"
        );
        
        Ok(emissions.into_iter().flatten().collect())
    }
    
    /// Render all lines and write them to `writer`.
    ///
    /// The whole output is rendered before the first byte is written, so a failing
    /// line leaves `writer` untouched.
    pub fn generate_to<W: Write>(&self, lines: &[SourceLine], mut writer: W) -> Result<(), Error> {
        let code = self.generate(lines)?;
        writer.write_all(code.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_source;
    use crate::grammar::Frequency;
    
    fn render(text: &str) -> Result<String, GenerationError> {
        RustGenerator::new().generate(&parse_source(text))
    }
    
    #[test]
    fn test_token() {
        assert_eq!(
            render("Expr: _IDENT").unwrap(),
            "\t// Expr: _IDENT\n\tresult.insert(\"Expr\", create_label_match(vec![\"_IDENT\"]));\n",
        );
    }
    
    #[test]
    fn test_conjunctions() {
        assert_eq!(
            render("Pair: Key && COLON && Value").unwrap(),
            "\t// Pair: Key && COLON && Value\n\tresult.insert(\"Pair\", create_and_rule_once( vec![\"Key\", \"COLON\", \"Value\"]));\n",
        );
        assert_eq!(
            render("Args: Arg*").unwrap(),
            "\t// Args: Arg*\n\tresult.insert(\"Args\", create_and_rule(RuleRepeats::ZeroOrMore, vec![\"Arg\"]));\n",
        );
        assert_eq!(
            render("Else: (ELSE && Block)?").unwrap(),
            "\t// Else: (ELSE && Block)?\n\tresult.insert(\"Else\", create_and_rule(RuleRepeats::ZeroOrOne, vec![\"ELSE\", \"Block\"]));\n",
        );
    }
    
    #[test]
    fn test_disjunctions() {
        assert_eq!(
            render("Value: Number || String").unwrap(),
            "\t// Value: Number || String\n\tresult.insert(\"Value\", create_or_rule_once( vec![\"Number\", \"String\"]));\n",
        );
        assert_eq!(
            render("Items: (Number || String)+").unwrap(),
            "\t// Items: (Number || String)+\n\tresult.insert(\"Items\", create_or_rule(RuleRepeats::OneOrMore, vec![\"Number\", \"String\"]));\n",
        );
    }
    
    #[test]
    fn test_trailing_comment_on_statement_line() {
        assert_eq!(
            render("Stmt: (Expr && SEMI)+  // statement").unwrap(),
            "\t// Stmt: (Expr && SEMI)+  // statement\n\tresult.insert(\"Stmt\", create_and_rule(RuleRepeats::OneOrMore, vec![\"Expr\", \"SEMI\"]));// statement\n",
        );
    }
    
    #[test]
    fn test_passthrough() {
        assert_eq!(render("// Expressions").unwrap(), "\t// // Expressions\n// Expressions\n");
        assert_eq!(render("a: b: c").unwrap(), "\t// a: b: c\n\n");
    }
    
    #[test]
    fn test_blank_lines_produce_nothing() {
        assert_eq!(render("\n   \n\t\n").unwrap(), "");
    }
    
    #[test]
    fn test_repeated_token_is_fatal() {
        let err = render("A: B\nNum: _DIGIT+\nC: D").unwrap_err();
        assert_eq!(
            err,
            GenerationError::UnsupportedFrequency {
                label: "Num".to_string(),
                line: 2,
                frequency: Frequency::OneOrMore,
            }
        );
    }
    
    #[test]
    fn test_failure_writes_nothing() {
        let mut out = Vec::new();
        let result = RustGenerator::new().generate_to(&parse_source("A: B\nNum: _DIGIT*"), &mut out);
        assert!(result.is_err());
        assert!(out.is_empty());
    }
    
    #[test]
    fn test_indentation() {
        let code = RustGenerator::new().indentation("    ").generate(&parse_source("A: B")).unwrap();
        assert_eq!(code, "    // A: B\n    result.insert(\"A\", create_and_rule_once( vec![\"B\"]));\n");
    }
}
