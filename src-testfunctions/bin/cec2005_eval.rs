use clap::Parser;
use ndarray::Array1;
use serde::Serialize;
use std::path::PathBuf;

use cec2005_testfunctions::{Benchmark, BenchmarkConfigBuilder, TestFunction, get_function_metadata};

/// CLI arguments for evaluating CEC2005 test functions
#[derive(Parser)]
#[command(name = "cec2005_eval")]
#[command(about = "Evaluate CEC2005 benchmark functions on candidate points")]
struct Args {
    /// Function number (1-25, implemented: 1-9)
    #[arg(short, long, default_value = "1")]
    function: usize,

    /// Problem dimension
    #[arg(short, long, default_value = "10")]
    dimension: usize,

    /// Directory holding the support data (overrides CEC2005_DATA_DIR)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Bias table (defaults to <data-dir>/fbias_data.txt)
    #[arg(long)]
    bias_file: Option<PathBuf>,

    /// Seed for the noise source of noisy functions
    #[arg(long)]
    seed: Option<u64>,

    /// Candidate point as comma-separated values
    #[arg(short, long)]
    point: Option<String>,

    /// Evaluate at the global optimum instead of --point
    #[arg(long)]
    optimum: bool,

    /// Print the function catalogue as JSON and exit
    #[arg(long)]
    list: bool,
}

#[derive(Serialize)]
struct EvaluationReport {
    function: usize,
    name: String,
    dimension: usize,
    bias: f64,
    point: Vec<f64>,
    value: f64,
}

fn parse_point(s: &str) -> Result<Vec<f64>, Box<dyn std::error::Error>> {
    s.split(',')
        .map(|t| {
            t.trim()
                .parse::<f64>()
                .map_err(|e| -> Box<dyn std::error::Error> {
                    format!("invalid coordinate '{}': {}", t.trim(), e).into()
                })
        })
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    if args.list {
        println!("{}", serde_json::to_string_pretty(&get_function_metadata())?);
        return Ok(());
    }

    let mut builder = BenchmarkConfigBuilder::new();
    if let Some(dir) = args.data_dir {
        builder = builder.data_dir(dir);
    }
    if let Some(file) = args.bias_file {
        builder = builder.bias_file(file);
    }
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }
    let benchmark = Benchmark::from_config(builder.build())?;
    let function = benchmark.create(args.function, args.dimension)?;

    let point = if args.optimum {
        function.global_optimum()
    } else {
        match args.point {
            Some(p) => Array1::from_vec(parse_point(&p)?),
            None => {
                return Err("either --point or --optimum is required".into());
            }
        }
    };
    let value = function.evaluate(&point)?;

    let report = EvaluationReport {
        function: function.func_num(),
        name: function.name().to_string(),
        dimension: function.dimension(),
        bias: function.bias(),
        point: point.to_vec(),
        value,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
