use std::{fs::File, io::BufWriter, path::Path};

use anyhow::{Context, Result};
use polars::{frame::DataFrame, io::{SerWriter, json::JsonFormat}, prelude::JsonWriter};

/// Writes a Polars DataFrame to a JSON file at `path`, as an array of row objects.
pub fn write_json(df: &mut DataFrame, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("[io::json] Failed to create JSON file: {}", path.display()))?;
    JsonWriter::new(BufWriter::new(file))
        .with_json_format(JsonFormat::Json)
        .finish(df)
        .with_context(|| format!("[io::json] Failed to write JSON to {:?}", path))
}

/// Writes a Polars DataFrame to a JSON string, as an array of row objects.
pub fn write_json_string(df: &mut DataFrame) -> Result<String> {
    let mut buffer = Vec::new();
    JsonWriter::new(&mut buffer)
        .with_json_format(JsonFormat::Json)
        .finish(df)
        .context("[io::json] Failed to write JSON to string")?;
    String::from_utf8(buffer)
        .context("[io::json] JSON output is not valid UTF-8")
}
