//! Rule trace instrumentation.
//!
//! Trace code is generated text, never a runtime dependency: the emitted
//! parser stays a single self-contained artifact. Fragments assume the
//! surrounding generated code provides:
//!
//! - `peg$tracer`: an object with a `trace(event)` method
//! - `peg$computeLocation(startPos, endPos, exact)` returning
//!   `{ start: { line, column }, end: { line, column } }`
//! - `startPos` (and, for match/fail events, `peg$currPos`) in scope

use std::fmt;
use std::str::FromStr;

use log::{debug, trace};
use pegc_types::util::{fail, indent_lines};

use crate::error::CodegenResult;
use crate::escape::escape_string_literal;
use crate::options::{EmitOptions, DEFAULT_INDENT_UNIT};

/// Column width the default tracer pads event type labels to.
pub const TYPE_COLUMN_WIDTH: usize = 10;

/// Kind of a structured trace event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraceEventKind {
    Enter,
    Match,
    Fail,
}

impl TraceEventKind {
    /// Wire name of the event type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Enter => "rule.enter",
            Self::Match => "rule.match",
            Self::Fail => "rule.fail",
        }
    }

    /// Host expression computing the event's source span.
    fn location_expr(self) -> &'static str {
        match self {
            Self::Enter => "peg$computeLocation(startPos, startPos, true)",
            Self::Match | Self::Fail => "peg$computeLocation(startPos, peg$currPos, true)",
        }
    }
}

impl fmt::Display for TraceEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TraceEventKind {
    type Err = pegc_types::ContractViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rule.enter" => Ok(Self::Enter),
            "rule.match" => Ok(Self::Match),
            "rule.fail" => Ok(Self::Fail),
            other => fail(format!("Invalid event type: {other}.")),
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Fragment generation
// ══════════════════════════════════════════════════════════════════════════════

/// Fragment reporting a `rule.enter` event for `rule_name`, indented by
/// `indent_level` units of two spaces.
pub fn rule_enter_trace(rule_name: &str, indent_level: usize) -> String {
    rule_trace(TraceEventKind::Enter, rule_name, indent_level)
}

/// Fragment reporting a `kind` event for `rule_name`.
pub fn rule_trace(kind: TraceEventKind, rule_name: &str, indent_level: usize) -> String {
    render_rule_trace(kind, rule_name, indent_level, DEFAULT_INDENT_UNIT)
}

/// Reference implementation of an event consumer, `peg$DefaultTracer`.
///
/// Enter events log and then indent; match and fail events dedent and then
/// log; any other type throws `Invalid event type`.
pub fn default_tracer_implementation() -> String {
    DEFAULT_TRACER.to_string()
}

fn render_rule_trace(
    kind: TraceEventKind,
    rule_name: &str,
    indent_level: usize,
    indent_unit: &str,
) -> String {
    let lines = vec![
        "peg$tracer.trace({".to_string(),
        format!("  type: \"{kind}\","),
        format!("  rule: \"{}\",", escape_string_literal(rule_name)),
        format!("  location: {}", kind.location_expr()),
        "});".to_string(),
    ];
    let mut out = indent_lines(lines, indent_level, indent_unit).into_text();
    out.push('\n');
    out
}

// ══════════════════════════════════════════════════════════════════════════════
// Emitter
// ══════════════════════════════════════════════════════════════════════════════

/// Emits trace fragments according to [`EmitOptions`].
///
/// With tracing disabled every fragment is empty, so instrumentation is
/// stripped from the generated parser entirely.
#[derive(Debug, Clone)]
pub struct TraceEmitter {
    options: EmitOptions,
}

impl TraceEmitter {
    pub fn new(options: EmitOptions) -> CodegenResult<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn is_enabled(&self) -> bool {
        self.options.trace
    }

    pub fn rule_trace(&self, kind: TraceEventKind, rule_name: &str, indent_level: usize) -> String {
        if !self.options.trace {
            trace!("tracing disabled, stripping {kind} for rule {rule_name}");
            return String::new();
        }
        debug!("emitting {kind} trace for rule {rule_name} at level {indent_level}");
        render_rule_trace(kind, rule_name, indent_level, &self.options.indent_unit)
    }

    pub fn rule_enter(&self, rule_name: &str, indent_level: usize) -> String {
        self.rule_trace(TraceEventKind::Enter, rule_name, indent_level)
    }

    /// The default tracer, or nothing when tracing is disabled.
    pub fn default_tracer(&self) -> String {
        if self.options.trace {
            default_tracer_implementation()
        } else {
            String::new()
        }
    }
}

const DEFAULT_TRACER: &str = r#"function peg$DefaultTracer() {
  this.indentLevel = 0;
}

peg$DefaultTracer.prototype.trace = function(event) {
  var that = this;

  function log(event) {
    function repeat(string, n) {
       var result = "", i;

       for (i = 0; i < n; i++) {
         result += string;
       }

       return result;
    }

    function pad(string, length) {
      return string + repeat(" ", length - string.length);
    }

    if (typeof console === "object") {
      console.log(
        event.location.start.line + ":" + event.location.start.column + "-"
          + event.location.end.line + ":" + event.location.end.column + " "
          + pad(event.type, 10) + " "
          + repeat("  ", that.indentLevel) + event.rule
      );
    }
  }

  switch (event.type) {
    case "rule.enter":
      log(event);
      this.indentLevel++;
      break;

    case "rule.match":
      this.indentLevel--;
      log(event);
      break;

    case "rule.fail":
      this.indentLevel--;
      log(event);
      break;

    default:
      throw new Error("Invalid event type: " + event.type + ".");
  }
};
"#;
