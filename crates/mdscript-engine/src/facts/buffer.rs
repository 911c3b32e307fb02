use std::io;

use super::{Fact, FactSink, Label};

/// Holds back the facts of one unit of work until it succeeds.
///
/// Labels are still drawn from the target sink, so committed facts never
/// collide with anything the target saw before or after. Dropping the
/// buffer without [`commit`](Self::commit) discards its facts; the labels
/// they used stay spent.
pub struct FactBuffer<'a> {
    target: &'a mut dyn FactSink,
    pending: Vec<Fact>,
}

impl<'a> FactBuffer<'a> {
    pub fn new(target: &'a mut dyn FactSink) -> Self {
        Self {
            target,
            pending: Vec::new(),
        }
    }

    /// Number of facts waiting for a commit.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Forward every pending fact to the target, in emission order.
    pub fn commit(self) -> io::Result<()> {
        for fact in self.pending {
            self.target.emit(fact)?;
        }
        Ok(())
    }
}

impl FactSink for FactBuffer<'_> {
    fn fresh_label(&mut self) -> Label {
        self.target.fresh_label()
    }

    fn emit(&mut self, fact: Fact) -> io::Result<()> {
        self.pending.push(fact);
        Ok(())
    }
}
