// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error types for OBJ parsing and serialization

use thiserror::Error;

/// Result type for OBJ operations
pub type ObjResult<T> = Result<T, ObjError>;

/// Errors raised while reading or writing OBJ text.
///
/// Line numbers are 1-based and refer to the input stream.
#[derive(Debug, Error)]
pub enum ObjError {
    /// A coordinate token is not a valid floating point number
    #[error("line {line}: malformed number '{token}'")]
    MalformedNumber { line: usize, token: String },

    /// A face reference component is not a valid integer
    #[error("line {line}: malformed face index '{token}'")]
    MalformedIndex { line: usize, token: String },

    /// A record carries fewer coordinates than its type requires
    #[error("line {line}: '{record}' record needs at least {expected} values, found {found}")]
    InsufficientFields {
        line: usize,
        record: &'static str,
        expected: usize,
        found: usize,
    },

    /// The input stream failed
    #[error("failed to read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    /// The output stream failed
    #[error("failed to write OBJ output: {0}")]
    Write(#[source] std::io::Error),
}
