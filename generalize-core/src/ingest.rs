use rayon::prelude::*;
use serde_json::Value;

use crate::error::{GeneralizeError, Result};
use crate::schema::{generalize_with_config, GeneralizeConfig, GeneralizeResult};
use crate::{debug, debug_verbose};

/// Generalize every JSON example found in a collection of strings into one schema.
///
/// Strings are parsed in parallel, then folded strictly in input order so type and
/// property order still follow first occurrence.
pub fn generalize_from_strings(
    json_strings: &[String],
    config: GeneralizeConfig,
) -> Result<GeneralizeResult> {
    if json_strings.is_empty() {
        return Err(GeneralizeError::EmptyInput);
    }

    let parsed: Vec<Vec<Value>> = json_strings
        .par_iter()
        .map(|s| parse_examples(s, &config))
        .collect::<Result<_>>()?;

    let examples: Vec<&Value> = parsed.iter().flatten().collect();
    debug!(
        config,
        "Parsed {} example(s) from {} string(s)",
        examples.len(),
        json_strings.len()
    );

    let schema = generalize_with_config(examples.iter().copied(), &config);

    Ok(GeneralizeResult {
        schema: schema.to_value(),
        processed_count: examples.len(),
    })
}

/// Split one input string into its example values.
fn parse_examples(json_str: &str, config: &GeneralizeConfig) -> Result<Vec<Value>> {
    let mut examples = Vec::new();

    let Some(delimiter) = config.delimiter else {
        if json_str.trim().is_empty() {
            return Ok(examples);
        }
        let document = serde_json::from_str(json_str)
            .map_err(|e| GeneralizeError::invalid_json(&e, 0))?;
        push_document(&mut examples, document, config);
        return Ok(examples);
    };

    let mut line_offset = 0;
    for chunk in json_str.as_bytes().split(|b| *b == delimiter) {
        if !chunk.iter().all(u8::is_ascii_whitespace) {
            let document = serde_json::from_slice(chunk)
                .map_err(|e| GeneralizeError::invalid_json(&e, line_offset))?;
            push_document(&mut examples, document, config);
        } else {
            debug_verbose!(config, "Skipping blank document after line {}", line_offset);
        }
        line_offset += chunk.iter().filter(|b| **b == b'\n').count();
        if delimiter == b'\n' {
            line_offset += 1;
        }
    }

    Ok(examples)
}

fn push_document(examples: &mut Vec<Value>, document: Value, config: &GeneralizeConfig) {
    match document {
        Value::Array(elements) if config.ignore_outer_array => examples.extend(elements),
        other => examples.push(other),
    }
}
