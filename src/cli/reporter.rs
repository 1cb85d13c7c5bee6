// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting

use crate::geometry::{GeometryInfo, TransformStep};
use crate::io::ModelComparison;
use colored::*;
use std::time::Duration;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Report model geometry
    pub fn report_info(file: &str, info: &GeometryInfo) {
        println!("\n{}", "━".repeat(60).bright_black());
        println!("{} {}", "Model:".bold(), file.cyan());
        println!("{}", "━".repeat(60).bright_black());

        println!(
            "  {} {}",
            "Vertices:".bright_black(),
            info.vertex_count.to_string().cyan()
        );
        println!(
            "  {} {}",
            "Faces:".bright_black(),
            info.face_count.to_string().cyan()
        );
        println!(
            "  {} {}",
            "Size:".bright_black(),
            format!(
                "{:.6} × {:.6} × {:.6}",
                info.size.x, info.size.y, info.size.z
            )
            .yellow()
        );
        println!(
            "  {} {}",
            "Origin:".bright_black(),
            format!(
                "({:.6}, {:.6}, {:.6})",
                info.origin.x, info.origin.y, info.origin.z
            )
            .yellow()
        );

        println!("\n{}", "Extent:".bold());
        if info.bbox.is_empty() {
            println!("  {}", "no vertices".bright_black());
        }
        for (label, min, max) in [
            ("x", info.min().x, info.max().x),
            ("y", info.min().y, info.max().y),
            ("z", info.min().z, info.max().z),
        ] {
            println!("  {} {:.6} -> {:.6}", format!("{}:", label).bright_black(), min, max);
        }

        if !info.face_arity.is_empty() {
            println!("\n{}", "Faces by vertex count:".bold());
            for (arity, count) in &info.face_arity {
                println!(
                    "  {} {}",
                    format!("{:>3}-gon:", arity).bright_black(),
                    count.to_string().cyan()
                );
            }
        }

        println!("{}", "━".repeat(60).bright_black());
    }

    /// Report the transform steps that ran and how long the pass took
    pub fn report_steps(steps: &[TransformStep], duration: Duration) {
        if steps.is_empty() {
            eprintln!("{} {}", "ℹ️".bright_blue(), "No transforms requested".bright_black());
        }
        for step in steps {
            eprintln!("  {} {:?}", "•".bright_blue(), step);
        }
        eprintln!(
            "  {} {}",
            "Time:".bright_black(),
            Self::format_duration(duration).yellow()
        );
    }

    /// Report model comparison result
    pub fn report_comparison(a: &str, b: &str, result: &ModelComparison) {
        println!("\n{}", "━".repeat(60).bright_black());
        println!("{} {} {} {}", "Compare:".bold(), a.cyan(), "vs".bright_black(), b.cyan());
        println!("{}", "━".repeat(60).bright_black());

        if result.passed {
            println!("{} {}", "✅".green(), "Models are equivalent".green().bold());
        } else {
            println!("{} {}", "❌".red(), "Models differ".red().bold());
        }

        Self::print_check("Vertex count", result.vertex_count_match);
        Self::print_check("Normal count", result.normal_count_match);
        Self::print_check("Texture count", result.texture_count_match);
        Self::print_check("Face count", result.face_count_match);
        Self::print_check("Values", result.values_match);
        Self::print_check("Faces", result.faces_match);
        Self::print_check("Material", result.material_match);
        println!(
            "  {} {:.3e} (tolerance {:.1e})",
            "Max deviation:".bright_black(),
            result.max_deviation,
            result.tolerance
        );
        println!("{}", "━".repeat(60).bright_black());
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), message);
    }

    /// Print success message
    pub fn success(message: &str) {
        eprintln!("{} {}", "✅".green(), message.green());
    }

    fn print_check(name: &str, ok: bool) {
        let mark = if ok { "ok".green() } else { "mismatch".red() };
        println!("  {} {}", format!("{}:", name).bright_black(), mark);
    }

    /// Format duration for display
    fn format_duration(duration: Duration) -> String {
        let micros = duration.as_micros();

        if micros < 1_000 {
            format!("{}µs", micros)
        } else if micros < 1_000_000 {
            format!("{:.2}ms", micros as f64 / 1_000.0)
        } else {
            format!("{:.2}s", micros as f64 / 1_000_000.0)
        }
    }
}
