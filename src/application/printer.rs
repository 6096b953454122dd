//! Text rendering of the layout document.
//!
//! Every entry gets a folder line. Files get one extra line beneath it, one level
//! deeper, carrying the file icon.

use std::io::{self, Write};

use tracing::{debug, instrument, trace};

use crate::domain::{Document, Entry, StructureNode};

/// Prefix of every entry line, files included
pub const DIR_ICON: &str = "📁";
/// Prefix of the detail line under each file entry
pub const FILE_ICON: &str = "📄";
/// Indentation per depth level
pub const INDENT: &str = "  ";
/// Width of the `=` rules around the tree
pub const RULE_WIDTH: usize = 50;

/// Writes the layout document to any writer.
#[derive(Debug)]
pub struct TreePrinter<W: Write> {
    out: W,
}

impl<W: Write> TreePrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Header, tree, then footer.
    #[instrument(level = "debug", skip(self, document), fields(title = document.title))]
    pub fn print_document(&mut self, document: &Document) -> io::Result<()> {
        self.print_header(document.title)?;
        self.print_tree(document.entries, 0)?;
        self.print_footer(document)?;
        debug!("document written");
        Ok(())
    }

    pub fn print_header(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out, "{}", title)?;
        writeln!(self.out, "{}", rule())
    }

    /// Pre-order traversal, siblings in insertion order.
    pub fn print_tree(&mut self, entries: &[Entry], depth: usize) -> io::Result<()> {
        for entry in entries {
            trace!(entry = %entry, depth, "entry");
            writeln!(
                self.out,
                "{}{} {}/",
                INDENT.repeat(depth),
                DIR_ICON,
                entry.name
            )?;
            match entry.node {
                StructureNode::Directory { children } => self.print_tree(children, depth + 1)?,
                StructureNode::File => writeln!(
                    self.out,
                    "{}{} {}",
                    INDENT.repeat(depth + 1),
                    FILE_ICON,
                    entry.name
                )?,
            }
        }
        Ok(())
    }

    pub fn print_footer(&mut self, document: &Document) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", rule())?;
        writeln!(self.out, "{}", document.overview_heading)?;
        for item in document.summary {
            writeln!(self.out, "- {}: {}", item.label, item.value)?;
        }
        Ok(())
    }
}

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Renders the whole document into a `String`.
pub fn render_to_string(document: &Document) -> io::Result<String> {
    let mut printer = TreePrinter::new(Vec::new());
    printer.print_document(document)?;
    String::from_utf8(printer.into_inner())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SummaryItem;

    static TINY: Document = Document {
        title: "Tiny",
        entries: &[Entry {
            name: "app",
            node: StructureNode::Directory {
                children: &[
                    Entry {
                        name: "main.js",
                        node: StructureNode::File,
                    },
                    Entry {
                        name: "lib",
                        node: StructureNode::Directory { children: &[] },
                    },
                ],
            },
        }],
        overview_heading: "Overview:",
        summary: &[SummaryItem {
            label: "Backend",
            value: "none",
        }],
    };

    #[test]
    fn renders_tiny_document() {
        let expected = format!(
            "Tiny\n{rule}\n📁 app/\n  📁 main.js/\n    📄 main.js\n  📁 lib/\n\n{rule}\nOverview:\n- Backend: none\n",
            rule = "=".repeat(50)
        );
        assert_eq!(render_to_string(&TINY).unwrap(), expected);
    }

    #[test]
    fn print_tree_honors_starting_depth() {
        let mut printer = TreePrinter::new(Vec::new());
        printer
            .print_tree(TINY.entries[0].children(), 3)
            .unwrap();
        let text = String::from_utf8(printer.into_inner()).unwrap();
        assert_eq!(
            text,
            "      📁 main.js/\n        📄 main.js\n      📁 lib/\n"
        );
    }

    #[test]
    fn print_header_writes_title_and_rule() {
        let mut printer = TreePrinter::new(Vec::new());
        printer.print_header("Title").unwrap();
        let text = String::from_utf8(printer.into_inner()).unwrap();
        assert_eq!(text, format!("Title\n{}\n", "=".repeat(RULE_WIDTH)));
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_errors_propagate() {
        let mut printer = TreePrinter::new(FailingWriter);
        let err = printer.print_document(&TINY).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
