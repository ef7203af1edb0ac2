//! AST node types for parsed grammar definitions.
//!
//! A [`Grammar`] exclusively owns its [`Rule`]s and each rule exclusively owns
//! its [`Expression`] tree. Trees are built bottom-up and are never mutated by
//! this crate; passes that rewrite a grammar produce new nodes.
//!
//! Constructors perform no validation beyond structural shape. Name
//! uniqueness and rule-reference resolution belong to later analysis passes,
//! which can use [`Grammar::rule_refs`] and [`Grammar::rule`] to express them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::util::fail;

// ══════════════════════════════════════════════════════════════════════════════
// Top Level
// ══════════════════════════════════════════════════════════════════════════════

/// A complete grammar: optional initializer, ordered rules, and the name of
/// the rule parsing starts from.
///
/// Like every node, serializes with a `"type"` tag (`"grammar"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "grammar", rename_all = "camelCase")]
pub struct Grammar {
    pub initializer: Option<Initializer>,
    pub rules: Vec<Rule>,
    pub start_rule: String,
}

impl Grammar {
    pub fn new(
        initializer: Option<Initializer>,
        rules: Vec<Rule>,
        start_rule: impl Into<String>,
    ) -> Self {
        Self {
            initializer,
            rules,
            start_rule: start_rule.into(),
        }
    }

    /// Look up a rule by name. Returns the first match if names collide.
    pub fn rule(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.name == name)
    }

    /// The rule named by `start_rule`.
    ///
    /// A grammar whose start rule is missing is representable; asking for it
    /// is a contract violation.
    pub fn start(&self) -> crate::Result<&Rule> {
        match self.rule(&self.start_rule) {
            Some(rule) => Ok(rule),
            None => fail(format!(
                "start rule \"{}\" is not defined in the grammar",
                self.start_rule
            )),
        }
    }

    /// Every rule name referenced from any rule body, in pre-order, with
    /// duplicates preserved.
    pub fn rule_refs(&self) -> Vec<&str> {
        let mut refs = Vec::new();
        for rule in &self.rules {
            rule.expression.walk(&mut |expr| {
                if let Expression::RuleRef { name } = expr {
                    refs.push(name.as_str());
                }
            });
        }
        refs
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Raw code block run once before parsing begins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "initializer")]
pub struct Initializer {
    pub code: String,
}

impl Initializer {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

/// `name "display name" = expression`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "rule", rename_all = "camelCase")]
pub struct Rule {
    pub name: String,
    pub display_name: Option<String>,
    pub expression: Expression,
}

impl Rule {
    pub fn new(
        name: impl Into<String>,
        display_name: Option<String>,
        expression: Expression,
    ) -> Self {
        Self {
            name: name.into(),
            display_name,
            expression,
        }
    }

    /// The label used in error messages: the display name if set, else the
    /// rule name.
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Expressions
// ══════════════════════════════════════════════════════════════════════════════

/// A parsing expression. Exactly one variant holds per node.
///
/// Serialized with an internal `"type"` tag using snake_case kind names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Expression {
    /// `a / b / c`, first successful alternative wins.
    Choice { alternatives: Vec<Expression> },
    /// `a b c`, all must succeed in order. May be empty.
    Sequence { elements: Vec<Expression> },
    /// `label:expr`
    Labeled {
        label: String,
        expression: Box<Expression>,
    },
    /// `expr { code }`
    Action {
        expression: Box<Expression>,
        code: String,
    },
    /// `&expr`
    SimpleAnd { expression: Box<Expression> },
    /// `!expr`
    SimpleNot { expression: Box<Expression> },
    /// `&{ code }`
    SemanticAnd { code: String },
    /// `!{ code }`
    SemanticNot { code: String },
    /// `expr?`
    Optional { expression: Box<Expression> },
    /// `expr*`
    ZeroOrMore { expression: Box<Expression> },
    /// `expr+`
    OneOrMore { expression: Box<Expression> },
    /// A deferred reference to another rule by name.
    RuleRef { name: String },
    /// `"text"` or `"text"i`
    Literal {
        value: String,
        #[serde(rename = "ignoreCase")]
        ignore_case: bool,
    },
    /// `[a-z]`, `[^0-9]i`
    Class {
        inverted: bool,
        #[serde(rename = "ignoreCase")]
        ignore_case: bool,
        parts: Vec<ClassPart>,
        /// Original source text, kept for diagnostics.
        #[serde(rename = "rawText")]
        raw_text: String,
    },
    /// `.`
    Any,
}

/// One element of a character class.
///
/// Serializes as a one-char string or a two-element array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClassPart {
    Char(char),
    Range(char, char),
}

impl Expression {
    pub fn choice(alternatives: Vec<Expression>) -> Self {
        Self::Choice { alternatives }
    }

    pub fn sequence(elements: Vec<Expression>) -> Self {
        Self::Sequence { elements }
    }

    pub fn labeled(label: impl Into<String>, expression: Expression) -> Self {
        Self::Labeled {
            label: label.into(),
            expression: Box::new(expression),
        }
    }

    pub fn action(expression: Expression, code: impl Into<String>) -> Self {
        Self::Action {
            expression: Box::new(expression),
            code: code.into(),
        }
    }

    pub fn simple_and(expression: Expression) -> Self {
        Self::SimpleAnd {
            expression: Box::new(expression),
        }
    }

    pub fn simple_not(expression: Expression) -> Self {
        Self::SimpleNot {
            expression: Box::new(expression),
        }
    }

    pub fn semantic_and(code: impl Into<String>) -> Self {
        Self::SemanticAnd { code: code.into() }
    }

    pub fn semantic_not(code: impl Into<String>) -> Self {
        Self::SemanticNot { code: code.into() }
    }

    pub fn optional(expression: Expression) -> Self {
        Self::Optional {
            expression: Box::new(expression),
        }
    }

    pub fn zero_or_more(expression: Expression) -> Self {
        Self::ZeroOrMore {
            expression: Box::new(expression),
        }
    }

    pub fn one_or_more(expression: Expression) -> Self {
        Self::OneOrMore {
            expression: Box::new(expression),
        }
    }

    pub fn rule_ref(name: impl Into<String>) -> Self {
        Self::RuleRef { name: name.into() }
    }

    pub fn literal(value: impl Into<String>, ignore_case: bool) -> Self {
        Self::Literal {
            value: value.into(),
            ignore_case,
        }
    }

    pub fn class(
        inverted: bool,
        ignore_case: bool,
        parts: Vec<ClassPart>,
        raw_text: impl Into<String>,
    ) -> Self {
        Self::Class {
            inverted,
            ignore_case,
            parts,
            raw_text: raw_text.into(),
        }
    }

    pub fn any() -> Self {
        Self::Any
    }

    /// The kind tag of this node.
    pub fn kind(&self) -> ExpressionKind {
        match self {
            Self::Choice { .. } => ExpressionKind::Choice,
            Self::Sequence { .. } => ExpressionKind::Sequence,
            Self::Labeled { .. } => ExpressionKind::Labeled,
            Self::Action { .. } => ExpressionKind::Action,
            Self::SimpleAnd { .. } => ExpressionKind::SimpleAnd,
            Self::SimpleNot { .. } => ExpressionKind::SimpleNot,
            Self::SemanticAnd { .. } => ExpressionKind::SemanticAnd,
            Self::SemanticNot { .. } => ExpressionKind::SemanticNot,
            Self::Optional { .. } => ExpressionKind::Optional,
            Self::ZeroOrMore { .. } => ExpressionKind::ZeroOrMore,
            Self::OneOrMore { .. } => ExpressionKind::OneOrMore,
            Self::RuleRef { .. } => ExpressionKind::RuleRef,
            Self::Literal { .. } => ExpressionKind::Literal,
            Self::Class { .. } => ExpressionKind::Class,
            Self::Any => ExpressionKind::Any,
        }
    }

    /// Direct sub-expressions, in source order.
    pub fn children(&self) -> Vec<&Expression> {
        match self {
            Self::Choice { alternatives } => alternatives.iter().collect(),
            Self::Sequence { elements } => elements.iter().collect(),
            Self::Labeled { expression, .. }
            | Self::Action { expression, .. }
            | Self::SimpleAnd { expression }
            | Self::SimpleNot { expression }
            | Self::Optional { expression }
            | Self::ZeroOrMore { expression }
            | Self::OneOrMore { expression } => vec![expression.as_ref()],
            Self::SemanticAnd { .. }
            | Self::SemanticNot { .. }
            | Self::RuleRef { .. }
            | Self::Literal { .. }
            | Self::Class { .. }
            | Self::Any => Vec::new(),
        }
    }

    /// Visit this node and all its descendants in pre-order.
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a Expression)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }
}

/// Discriminant of [`Expression`], for diagnostics and dispatch tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpressionKind {
    Choice,
    Sequence,
    Labeled,
    Action,
    SimpleAnd,
    SimpleNot,
    SemanticAnd,
    SemanticNot,
    Optional,
    ZeroOrMore,
    OneOrMore,
    RuleRef,
    Literal,
    Class,
    Any,
}

impl ExpressionKind {
    /// The snake_case name used in serialized ASTs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Choice => "choice",
            Self::Sequence => "sequence",
            Self::Labeled => "labeled",
            Self::Action => "action",
            Self::SimpleAnd => "simple_and",
            Self::SimpleNot => "simple_not",
            Self::SemanticAnd => "semantic_and",
            Self::SemanticNot => "semantic_not",
            Self::Optional => "optional",
            Self::ZeroOrMore => "zero_or_more",
            Self::OneOrMore => "one_or_more",
            Self::RuleRef => "rule_ref",
            Self::Literal => "literal",
            Self::Class => "class",
            Self::Any => "any",
        }
    }
}

impl fmt::Display for ExpressionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
