use std::env;
use std::fs;
use std::io::{self, Read};

use generalize_core::{generalize_json, schema::DebugVerbosity, GeneralizeConfig};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    run_cli()
}

#[derive(Debug, Default)]
struct CliOptions {
    config: GeneralizeConfig,
    input_file: Option<String>,
    compact: bool,
    show_help: bool,
}

// Extract argument handling so it can be exercised from unit tests
fn parse_args(args: &[String]) -> Result<CliOptions, Box<dyn std::error::Error>> {
    let mut options = CliOptions::default();

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--help" | "-h" => {
                options.show_help = true;
            }
            "--no-ignore-array" => {
                options.config.ignore_outer_array = false;
            }
            "--ndjson" => {
                options.config.delimiter = Some(b'\n');
            }
            "--compact" => {
                options.compact = true;
            }
            "--debug" => {
                options.config.debug = true;
            }
            "--verbose" => {
                options.config.debug = true;
                options.config.verbosity = DebugVerbosity::Verbose;
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(format!("Unknown option: {}", other).into());
            }
            other => {
                if options.input_file.is_none() && other != "-" {
                    options.input_file = Some(other.to_string());
                }
            }
        }
    }

    Ok(options)
}

fn run_cli() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let options = parse_args(&args)?;

    if options.show_help {
        print_help();
        return Ok(());
    }

    #[cfg(feature = "trace")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(io::stderr)
        .init();

    // Read input from file or stdin
    let input = if let Some(path) = &options.input_file {
        fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    };

    // For CLI, we treat the entire input as one JSON string
    let json_strings = vec![input];

    let result = generalize_json(&json_strings, Some(options.config))
        .map_err(|e| format!("Schema generalization failed: {}", e))?;

    if options.compact {
        println!("{}", serde_json::to_string(&result.schema)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&result.schema)?);
    }

    anstream::eprintln!("Processed {} JSON value(s)", result.processed_count);
    Ok(())
}

fn print_help() {
    println!("generalize-cli - infer a minimal JSON schema from example values");
    println!();
    println!("USAGE:");
    println!("    generalize-cli [OPTIONS] [FILE]");
    println!();
    println!("ARGS:");
    println!("    <FILE>    Input JSON file (reads from stdin if not provided)");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help            Print this help message");
    println!("    --no-ignore-array     Treat a top-level array as one example, not a stream");
    println!("    --ndjson              Treat input as newline-delimited JSON");
    println!("    --compact             Print the schema on a single line");
    println!("    --debug               Report type widening on stderr");
    println!("    --verbose             Also report new properties and skipped values");
    println!();
    println!("EXAMPLES:");
    println!("    generalize-cli data.json");
    println!("    echo '[1, \"a\", null]' | generalize-cli");
    println!("    generalize-cli --ndjson multi-line.jsonl");
}
