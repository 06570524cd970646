use serde::Serialize;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// How often a rule has to match.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq, Serialize)]
pub enum Frequency {
    /// No repetition marker
    One,
    /// `+`
    OneOrMore,
    /// `?`
    ZeroOrOne,
    /// `*`
    ZeroOrMore,
}

impl Frequency {
    /// Detect the frequency of a rule body.
    ///
    /// Markers are tested by containment, not by position, in the order
    /// `*`, `?`, `+`. The first one found wins.
    pub fn of(body: &str) -> Self {
        if body.contains('*') {
            Frequency::ZeroOrMore
        } else if body.contains('?') {
            Frequency::ZeroOrOne
        } else if body.contains('+') {
            Frequency::OneOrMore
        } else {
            Frequency::One
        }
    }

    /// Name of the repeat marker in the generated code. `None` for [`Frequency::One`].
    pub fn marker(&self) -> Option<&'static str> {
        match self {
            Frequency::One => None,
            Frequency::OneOrMore => Some("RuleRepeats::OneOrMore"),
            Frequency::ZeroOrOne => Some("RuleRepeats::ZeroOrOne"),
            Frequency::ZeroOrMore => Some("RuleRepeats::ZeroOrMore"),
        }
    }
}

impl Display for Frequency {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Frequency::One => write!(f, "one"),
            Frequency::OneOrMore => write!(f, "one_or_more"),
            Frequency::ZeroOrOne => write!(f, "zero_or_one"),
            Frequency::ZeroOrMore => write!(f, "zero_or_more"),
        }
    }
}

/// The three kinds of rules the parser table knows about.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq, Serialize)]
pub enum RuleKind {
    /// Atomic rule whose body starts with `_`
    Token,
    /// All operands in sequence (`&&`, or a single operand)
    Conjunction,
    /// Any one of the operands (`||`)
    Disjunction,
}

/// A parsed rule body like `(Expr && SEMI)+`.
#[derive(Debug, Clone, Eq, Hash, PartialEq, Serialize)]
pub struct RuleSpec {
    kind: RuleKind,
    frequency: Frequency,
    operands: Vec<String>,
    mixed_markers: bool,
}

impl RuleSpec {
    pub(crate) fn new(kind: RuleKind, frequency: Frequency, operands: Vec<String>) -> Self {
        Self {
            kind,
            frequency,
            operands,
            mixed_markers: false,
        }
    }

    pub(crate) fn with_mixed_markers(mut self, mixed_markers: bool) -> Self {
        self.mixed_markers = mixed_markers;
        self
    }

    /// The kind of this rule.
    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// How often this rule has to match.
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// The labels referenced by this rule, in source order.
    pub fn operands(&self) -> &[String] {
        &self.operands
    }

    /// True if the body contained more than one distinct repetition marker.
    /// Only the highest-priority marker took effect in that case.
    pub fn has_mixed_markers(&self) -> bool {
        self.mixed_markers
    }
}
