// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! objtool CLI

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use objtool::cli::Reporter;
use objtool::{analyze, io, TransformConfig};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "objtool")]
#[command(about = "Displays information about and modifies a Wavefront OBJ model", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    process: ProcessArgs,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Transform an OBJ model and write it back out (default)
    Process(ProcessArgs),

    /// Show geometry information for an OBJ model
    Info {
        /// Input OBJ file, or - for stdin
        input: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compare two OBJ models record by record
    Compare {
        a: PathBuf,
        b: PathBuf,

        /// Comparison tolerance
        #[arg(short, long, default_value = "0.000001")]
        tolerance: f64,
    },

    /// Show version information
    Version,
}

#[derive(Args, Default)]
struct ProcessArgs {
    /// Input OBJ file, or - for stdin
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file; stdout when omitted
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Prefix the output with the pre-transform geometry report as comments
    #[arg(long)]
    info: bool,

    /// TOML file with transform settings; flags override it
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the effective transform settings to a TOML file
    #[arg(long, value_name = "FILE")]
    save_config: Option<PathBuf>,

    /// Set the material name
    #[arg(short, long)]
    material: Option<String>,

    /// Split faces into triangles
    #[arg(short, long)]
    triangulate: bool,

    /// Scale about the center (1.0 = unchanged, 2.0 = double)
    #[arg(short, long)]
    scale: Option<f64>,

    /// Resize so the x extent matches; 0 leaves it unset
    #[arg(long, value_name = "SIZE")]
    resize_x: Option<f64>,

    /// Resize so the y extent matches; 0 leaves it unset
    #[arg(long, value_name = "SIZE")]
    resize_y: Option<f64>,

    /// Resize so the z extent matches; 0 leaves it unset
    #[arg(long, value_name = "SIZE")]
    resize_z: Option<f64>,

    /// Center the model on the origin
    #[arg(short, long)]
    center: bool,

    /// Center the x axis on the origin
    #[arg(long)]
    center_x: bool,

    /// Center the y axis on the origin
    #[arg(long)]
    center_y: bool,

    /// Center the z axis on the origin
    #[arg(long)]
    center_z: bool,

    /// Move the model so its lowest point rests on y = 0
    #[arg(short, long)]
    ground: bool,
}

impl ProcessArgs {
    /// Config file settings with command-line flags layered on top
    fn transform_config(&self) -> Result<TransformConfig> {
        let mut config = TransformConfig::load(self.config.as_deref())?;

        if let Some(material) = &self.material {
            config.material = Some(material.clone());
        }
        if self.triangulate {
            config.triangulate = true;
        }
        if let Some(scale) = self.scale {
            config.scale = scale;
        }
        config.resize.x = self.resize_x.or(config.resize.x);
        config.resize.y = self.resize_y.or(config.resize.y);
        config.resize.z = self.resize_z.or(config.resize.z);
        config.center.x |= self.center || self.center_x;
        config.center.y |= self.center || self.center_y;
        config.center.z |= self.center || self.center_z;
        if self.ground {
            config.ground = true;
        }

        Ok(config)
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    if let Err(err) = run(cli) {
        Reporter::report_error(&format!("{:#}", err));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Process(args)) => process_command(&args, cli.verbose),
        Some(Commands::Info { input, json }) => info_command(&input, json),
        Some(Commands::Compare { a, b, tolerance }) => compare_command(&a, &b, tolerance),
        Some(Commands::Version) => {
            println!("objtool v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        None => process_command(&cli.process, cli.verbose),
    }
}

fn open_input(path: &Path) -> Result<Box<dyn BufRead>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufReader::new(std::io::stdin())));
    }
    let file = File::open(path).with_context(|| format!("Failed to open input file: {:?}", path))?;
    Ok(Box::new(BufReader::new(file)))
}

fn process_command(args: &ProcessArgs, verbose: bool) -> Result<()> {
    let Some(input) = &args.input else {
        eprintln!("Error: Input file required");
        eprintln!("Usage: objtool [OPTIONS] <FILE>");
        std::process::exit(1);
    };

    let config = args.transform_config()?;
    if let Some(path) = &args.save_config {
        config.save(path)?;
    }
    if config.is_identity() {
        tracing::info!("no transforms requested, model is copied through");
    }

    let reader = open_input(input)?;
    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create output file: {:?}", path))?,
        )),
        None => Box::new(BufWriter::new(std::io::stdout().lock())),
    };

    let start = std::time::Instant::now();
    let report = objtool::process(reader, writer, &config, args.info)
        .with_context(|| format!("Error processing {:?}", input))?;

    if verbose {
        Reporter::report_steps(&report.steps, start.elapsed());
        if let Some(path) = &args.output {
            Reporter::success(&format!(
                "{} vertices, {} faces written to {}",
                report.after.vertex_count,
                report.after.face_count,
                path.display()
            ));
        }
    }

    Ok(())
}

fn info_command(input: &Path, json: bool) -> Result<()> {
    let model = io::parse_obj(open_input(input)?)
        .with_context(|| format!("Error reading {:?}", input))?;
    let info = analyze(&model);

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        Reporter::report_info(&input.display().to_string(), &info);
    }

    Ok(())
}

fn compare_command(a: &Path, b: &Path, tolerance: f64) -> Result<()> {
    let model_a = io::import_obj_file(a)?;
    let model_b = io::import_obj_file(b)?;

    let result = io::compare_models(&model_a, &model_b, tolerance);
    Reporter::report_comparison(&a.display().to_string(), &b.display().to_string(), &result);

    if !result.passed {
        std::process::exit(1);
    }

    Ok(())
}
