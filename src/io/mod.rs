// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! I/O module - parsing, importing, exporting and comparing OBJ models

mod compare;
mod exporter;
mod importer;
mod parser;

pub use compare::{compare_models, ModelComparison};
pub use exporter::{export_obj_file, write_obj};
pub use importer::import_obj_file;
pub use parser::{parse_obj, parse_obj_str};
