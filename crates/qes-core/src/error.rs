// crates/qes-core/src/error.rs

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("input directory '{}' does not exist", .0.display())]
    MissingInputDir(PathBuf),

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars operation failed: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Invalid traversal pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Unreadable path during traversal: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("Schema mismatch: {0}")]
    Schema(String),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
