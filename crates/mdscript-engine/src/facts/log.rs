use std::io;

use super::{Fact, FactSink, Label, LabelAllocator};

/// In-memory sink; facts are kept in emission order.
#[derive(Debug, Default)]
pub struct FactLog {
    labels: LabelAllocator,
    facts: Vec<Fact>,
}

impl FactLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn facts(&self) -> &[Fact] {
        &self.facts
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// One line per fact, for eyeballing and snapshot tests.
    pub fn render(&self) -> String {
        self.facts
            .iter()
            .map(render_fact)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn render_fact(fact: &Fact) -> String {
    match fact {
        Fact::File { label, path } => format!("{label} file {path}"),
        Fact::TopLevel {
            label,
            file,
            toplevel_kind,
            is_module,
            location,
        } => format!(
            "{label} toplevel {toplevel_kind:?} in {file} module={is_module} @{location}"
        ),
        Fact::Line {
            label,
            toplevel,
            text,
            location,
            ..
        } => format!("{label} line {text:?} in {toplevel} @{location}"),
        Fact::Comment {
            label,
            toplevel,
            text,
            location,
        } => format!("{label} comment {text:?} in {toplevel} @{location}"),
        Fact::Declaration {
            label,
            toplevel,
            variable,
            name,
            declaration_kind,
            location,
        } => format!(
            "{label} {declaration_kind} {name} -> {variable} in {toplevel} @{location}"
        ),
    }
}

impl FactSink for FactLog {
    fn fresh_label(&mut self) -> Label {
        self.labels.fresh()
    }

    fn emit(&mut self, fact: Fact) -> io::Result<()> {
        self.facts.push(fact);
        Ok(())
    }
}
