//! Typed runner for the `bumpy` versioning tool.
//!
//! [`bumpy::BumpyRunner`] turns high-level operations (list, new, increment,
//! incrementonly, write, assign, label, ensure) into bumpy argument vectors
//! and hands them to a [`tool::ToolRunner`], which locates and spawns the
//! executable.
//!
//! ```no_run
//! use bumpy_runner::bumpy::{BumpyRunner, BumpySettings};
//! use bumpy_runner::tool::process::ProcessToolRunner;
//!
//! let bumpy = BumpyRunner::new(ProcessToolRunner::new());
//! let settings = BumpySettings::new().with_directory("/tmp/proj").with_profile("ci");
//! bumpy.increment(3, &settings)?;
//! # Ok::<(), bumpy_runner::tool::ToolError>(())
//! ```

pub mod bumpy;
pub mod cli;
pub mod config;
pub mod constants;
pub mod tool;
