//! Renders an inference result as either human-readable text or JSON.

use abiguess_core::GuessedFragment;
use serde::Serialize;

use crate::error::Error;

#[derive(Serialize)]
struct JsonFragment {
    name: String,
    signature: String,
    inputs: Vec<String>,
}

#[derive(Serialize)]
struct JsonTypes {
    types: Vec<String>,
}

/// Renders a guessed function fragment, either as the synthetic signature or as JSON.
pub fn render_fragment(fragment: &GuessedFragment, json: bool) -> Result<String, Error> {
    if json {
        let payload = JsonFragment {
            name: fragment.name.clone(),
            signature: fragment.signature.clone(),
            inputs: fragment.inputs.iter().map(abiguess_core::format_type).collect(),
        };
        Ok(serde_json::to_string_pretty(&payload)?)
    } else {
        Ok(fragment.signature.clone())
    }
}

/// Renders a bare list of inferred types, either as a parenthesized tuple or as JSON.
pub fn render_types(types: &[abiguess_core::DynSolType], json: bool) -> Result<String, Error> {
    let formatted: Vec<String> = types.iter().map(abiguess_core::format_type).collect();

    if json {
        Ok(serde_json::to_string_pretty(&JsonTypes { types: formatted })?)
    } else {
        Ok(format!("({})", formatted.join(",")))
    }
}
