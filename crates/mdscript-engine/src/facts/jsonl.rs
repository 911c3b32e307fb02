use std::io::{self, Write};

use super::{Fact, FactSink, Label, LabelAllocator};

/// Writes each fact as one JSON object per line.
pub struct JsonLinesWriter<W: Write> {
    labels: LabelAllocator,
    out: W,
    written: usize,
}

impl<W: Write> JsonLinesWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            labels: LabelAllocator::default(),
            out,
            written: 0,
        }
    }

    /// Number of facts written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flushes and returns the underlying writer.
    pub fn into_inner(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> FactSink for JsonLinesWriter<W> {
    fn fresh_label(&mut self) -> Label {
        self.labels.fresh()
    }

    fn emit(&mut self, fact: Fact) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, &fact)?;
        self.out.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::TopLevelKind;
    use crate::position::{Location, Position};
    use pretty_assertions::assert_eq;

    #[test]
    fn writes_one_object_per_line() {
        let mut writer = JsonLinesWriter::new(Vec::new());
        let file = writer.fresh_label();
        writer
            .emit(Fact::File {
                label: file,
                path: "docs/a.md".to_string(),
            })
            .unwrap();
        let toplevel = writer.fresh_label();
        writer
            .emit(Fact::TopLevel {
                label: toplevel,
                file,
                toplevel_kind: TopLevelKind::InlineScript,
                is_module: false,
                location: Location::new(Position::new(3, 1), Position::new(3, 10)),
            })
            .unwrap();

        assert_eq!(writer.written(), 2);
        let out = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(
            out,
            concat!(
                r#"{"kind":"file","label":1,"path":"docs/a.md"}"#,
                "\n",
                r#"{"kind":"top_level","label":2,"file":1,"toplevel_kind":"inline_script","is_module":false,"location":{"start":{"line":3,"column":1},"end":{"line":3,"column":10}}}"#,
                "\n",
            )
        );
    }

    #[test]
    fn propagates_write_failures() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("disk full"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut writer = JsonLinesWriter::new(Broken);
        let err = writer
            .emit(Fact::File {
                label: Label(1),
                path: "a.md".to_string(),
            })
            .unwrap_err();
        assert!(err.to_string().contains("disk full"));
    }
}
