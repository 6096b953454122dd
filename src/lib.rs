//! Prints the proposed directory layout of the Personal Budget Tracker project.

pub mod application;
pub mod cli;
pub mod domain;
pub mod exitcode;
pub mod util;
