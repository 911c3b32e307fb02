use std::collections::HashMap;

use crate::facts::{FactSink, Label};

/// Global bindings shared by every snippet of one document.
///
/// Built fresh for each document and handed to the extractor by mutable
/// reference, block after block.
#[derive(Debug, Default)]
pub struct ExtractionScope {
    variables: HashMap<String, Label>,
}

impl ExtractionScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Label of the global `name`, allocating one from `sink` on first use.
    pub fn declare(&mut self, name: &str, sink: &mut dyn FactSink) -> Label {
        if let Some(label) = self.variables.get(name) {
            return *label;
        }
        let label = sink.fresh_label();
        self.variables.insert(name.to_string(), label);
        label
    }

    pub fn lookup(&self, name: &str) -> Option<Label> {
        self.variables.get(name).copied()
    }
}
