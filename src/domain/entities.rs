//! Core domain entities: structure nodes and read-only queries over them.

use std::collections::HashSet;
use std::fmt;

use tracing::instrument;

use super::error::{DomainError, DomainResult};

/// Payload of a layout entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureNode {
    /// Directory with children in insertion order
    Directory { children: &'static [Entry] },
    /// Empty file placeholder
    File,
}

/// Named entry in the static layout tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub name: &'static str,
    pub node: StructureNode,
}

impl Entry {
    pub fn is_dir(&self) -> bool {
        matches!(self.node, StructureNode::Directory { .. })
    }

    /// Children of a directory; empty for files.
    pub fn children(&self) -> &'static [Entry] {
        match self.node {
            StructureNode::Directory { children } => children,
            StructureNode::File => &[],
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dir() {
            write!(f, "{}/", self.name)
        } else {
            write!(f, "{}", self.name)
        }
    }
}

/// One step of a pre-order walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    /// Nesting level, 0 for top-level entries
    pub depth: usize,
    /// Slash-joined names from the top-level entry down to this one
    pub path: String,
    pub entry: Entry,
}

/// Walks the layout depth-first, parents before children, siblings in insertion order.
#[instrument(level = "trace", skip(entries))]
pub fn walk(entries: &'static [Entry]) -> Vec<Visit> {
    fn visit(entries: &'static [Entry], depth: usize, prefix: &str, out: &mut Vec<Visit>) {
        for entry in entries {
            let path = if prefix.is_empty() {
                entry.name.to_string()
            } else {
                format!("{}/{}", prefix, entry.name)
            };
            out.push(Visit {
                depth,
                path: path.clone(),
                entry: *entry,
            });
            visit(entry.children(), depth + 1, &path, out);
        }
    }

    let mut out = Vec::new();
    visit(entries, 0, "", &mut out);
    out
}

pub fn count_files(entries: &'static [Entry]) -> usize {
    walk(entries).iter().filter(|v| !v.entry.is_dir()).count()
}

pub fn count_directories(entries: &'static [Entry]) -> usize {
    walk(entries).iter().filter(|v| v.entry.is_dir()).count()
}

/// Deepest entry depth, `None` for an empty layout.
pub fn max_depth(entries: &'static [Entry]) -> Option<usize> {
    walk(entries).iter().map(|v| v.depth).max()
}

/// Checks that names are non-empty, slash-free and unique within each directory.
#[instrument(level = "debug", skip(entries))]
pub fn validate(entries: &[Entry]) -> DomainResult<()> {
    fn check(entries: &[Entry], parent: &str) -> DomainResult<()> {
        let mut seen = HashSet::new();
        for entry in entries {
            let path = if parent.is_empty() {
                entry.name.to_string()
            } else {
                format!("{}/{}", parent, entry.name)
            };
            if entry.name.is_empty() {
                return Err(DomainError::EmptyName {
                    parent: parent.to_string(),
                });
            }
            if entry.name.contains('/') {
                return Err(DomainError::InvalidName { path });
            }
            if !seen.insert(entry.name) {
                return Err(DomainError::DuplicateEntry { path });
            }
            check(entry.children(), &path)?;
        }
        Ok(())
    }

    check(entries, "")
}
