//! Command execution

use std::io::{self, BufWriter, Write};

use tracing::{debug, info, instrument};

use crate::application::TreePrinter;
use crate::cli::args::Cli;
use crate::cli::error::{CliError, CliResult};
use crate::domain::{self, Document, PROJECT_DOCUMENT};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    debug!(debug = cli.debug, "executing");
    let stdout = io::stdout();
    print_layout(&PROJECT_DOCUMENT, stdout.lock())
}

/// Validates the document, then prints it through a buffered writer.
#[instrument(level = "debug", skip(document, out))]
pub fn print_layout<W: Write>(document: &Document, out: W) -> CliResult<()> {
    domain::validate(document.entries)?;
    info!(
        directories = domain::count_directories(document.entries),
        files = domain::count_files(document.entries),
        "layout validated"
    );

    let mut printer = TreePrinter::new(BufWriter::new(out));
    printer
        .print_document(document)
        .and_then(|()| printer.into_inner().flush())
        .map_err(|e| CliError::io("writing layout to stdout", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::render_to_string;
    use crate::domain::{DomainError, Entry, StructureNode};
    use crate::exitcode;

    /// Stdout replaced by a closed pipe.
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn print_layout_reports_closed_stdout_as_io_error() {
        let err = print_layout(&PROJECT_DOCUMENT, ClosedPipe).unwrap_err();
        match &err {
            CliError::Io { context, source } => {
                assert_eq!(context, "writing layout to stdout");
                assert_eq!(source.kind(), io::ErrorKind::BrokenPipe);
            }
            other => panic!("expected I/O error, got {:?}", other),
        }
        assert_eq!(err.exit_code(), exitcode::IOERR);
        assert_eq!(err.to_string(), "I/O error: writing layout to stdout");
    }

    #[test]
    fn print_layout_matches_rendering() {
        let mut buf = Vec::new();
        print_layout(&PROJECT_DOCUMENT, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            render_to_string(&PROJECT_DOCUMENT).unwrap()
        );
    }

    #[test]
    fn print_layout_rejects_malformed_document_before_writing() {
        static BROKEN: Document = Document {
            title: "Broken",
            entries: &[
                Entry {
                    name: "x",
                    node: StructureNode::File,
                },
                Entry {
                    name: "x",
                    node: StructureNode::File,
                },
            ],
            overview_heading: "Overview:",
            summary: &[],
        };
        let mut buf = Vec::new();
        let err = print_layout(&BROKEN, &mut buf).unwrap_err();
        assert!(matches!(
            err,
            CliError::Domain(DomainError::DuplicateEntry { .. })
        ));
        assert!(buf.is_empty());
    }
}
