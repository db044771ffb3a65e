//! Print the analysis of a 3MF file as JSON
//!
//! ```text
//! cargo run --example analyze_3mf -- path/to/model.3mf
//! ```

use std::env;
use std::process;
use threemf_analyzer::{AnalysisRequest, AnalyzerConfig};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <file.3mf> [--no-thumbnail]", args[0]);
        process::exit(1);
    }

    let read_thumbnail = !args.iter().skip(2).any(|arg| arg == "--no-thumbnail");
    let config = AnalyzerConfig::new().with_thumbnail(read_thumbnail);

    let result = match AnalysisRequest::new()
        .with_path(&args[1])
        .with_config(config)
        .analyze()
    {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error analyzing {}: {}", args[1], e);
            process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&result) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing analysis: {}", e);
            process::exit(1);
        }
    }
}
