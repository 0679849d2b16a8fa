use wasm_bindgen::prelude::*;

/// Debug view of the parsed tree. JS `null` and `undefined` are rejected.
#[wasm_bindgen]
pub fn parse(input: Option<String>) -> Result<String, JsError> {
    let parsed = jsonlax::parse_optional(input.as_deref())?;
    Ok(format!("{:#?}", parsed))
}

#[wasm_bindgen]
pub fn stringify(input: &str) -> Result<String, JsError> {
    let parsed = jsonlax::parse(input)?;
    Ok(jsonlax::stringify(&parsed))
}

#[wasm_bindgen]
pub fn format(input: &str, indent: usize) -> Result<String, JsError> {
    let formatted = jsonlax::format(input, indent)?;
    Ok(formatted)
}
