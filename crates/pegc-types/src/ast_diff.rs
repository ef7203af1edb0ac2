//! Grammar diff infrastructure.
//!
//! Compares two grammars and produces a structured list of rule-level
//! changes. Used for:
//! - Pass idempotence checks (running a pass twice must yield an empty diff)
//! - Reporting which rules a rewriting pass touched
//! - Incremental regeneration of only the changed rules

use crate::ast::*;
use serde::{Deserialize, Serialize};

// ══════════════════════════════════════════════════════════════════════════════
// Types
// ══════════════════════════════════════════════════════════════════════════════

/// One rule, the initializer, or the start rule differing between grammars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrammarChange {
    /// `rules.<name>`, `initializer` or `start_rule`.
    pub path: String,
    pub kind: ChangeKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChangeKind {
    /// Only the rewritten grammar has it.
    Added,
    /// The rewrite dropped it.
    Removed,
    /// Both grammars have it, with different bodies.
    Modified,
}

/// Everything a pass changed in a grammar, old rules first, then new ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrammarDiff {
    pub changes: Vec<GrammarChange>,
}

impl GrammarDiff {
    /// Compute the diff between two grammars.
    pub fn diff(old: &Grammar, new: &Grammar) -> Self {
        let mut changes = Vec::new();
        diff_grammar(old, new, &mut changes);
        GrammarDiff { changes }
    }

    /// True if the two grammars are identical (no changes).
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Number of changes.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "[]".to_string())
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Names of rules added or modified, in the order they were reported.
    pub fn touched_rules(&self) -> Vec<&str> {
        self.changes
            .iter()
            .filter(|c| c.kind != ChangeKind::Removed)
            .filter_map(|c| c.path.strip_prefix("rules."))
            .collect()
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Diff walkers
// ══════════════════════════════════════════════════════════════════════════════

fn push(changes: &mut Vec<GrammarChange>, path: &str, kind: ChangeKind) {
    changes.push(GrammarChange {
        path: path.to_string(),
        kind,
    });
}

fn diff_grammar(old: &Grammar, new: &Grammar, changes: &mut Vec<GrammarChange>) {
    match (&old.initializer, &new.initializer) {
        (None, Some(_)) => push(changes, "initializer", ChangeKind::Added),
        (Some(_), None) => push(changes, "initializer", ChangeKind::Removed),
        (Some(o), Some(n)) if o != n => push(changes, "initializer", ChangeKind::Modified),
        _ => {}
    }

    if old.start_rule != new.start_rule {
        push(changes, "start_rule", ChangeKind::Modified);
    }

    diff_rules(&old.rules, &new.rules, changes);
}

/// Rules are matched by name and by occurrence of that name, so the n-th
/// `start` in `old` pairs with the n-th `start` in `new`. Reordering distinct
/// names alone is not a change.
fn diff_rules(old: &[Rule], new: &[Rule], changes: &mut Vec<GrammarChange>) {
    for (i, rule) in old.iter().enumerate() {
        let occurrence = occurrence_of(old, i);
        let path = format!("rules.{}", rule.name);
        match nth_named(new, &rule.name, occurrence) {
            None => push(changes, &path, ChangeKind::Removed),
            Some(n) if n != rule => push(changes, &path, ChangeKind::Modified),
            Some(_) => {}
        }
    }

    for (i, rule) in new.iter().enumerate() {
        let occurrence = occurrence_of(new, i);
        if nth_named(old, &rule.name, occurrence).is_none() {
            push(changes, &format!("rules.{}", rule.name), ChangeKind::Added);
        }
    }
}

/// How many earlier rules in `rules` share the name of `rules[index]`.
fn occurrence_of(rules: &[Rule], index: usize) -> usize {
    let name = &rules[index].name;
    rules[..index].iter().filter(|r| &r.name == name).count()
}

fn nth_named<'a>(rules: &'a [Rule], name: &str, n: usize) -> Option<&'a Rule> {
    rules.iter().filter(|r| r.name == name).nth(n)
}
