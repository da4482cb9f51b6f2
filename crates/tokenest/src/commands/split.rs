use std::path::Path;

use anyhow::bail;
use tokenest_core::{split_by_tokens, EstimationSettings};

use super::read_input;

pub fn run(
    settings: &EstimationSettings,
    file: Option<&Path>,
    tokens: usize,
) -> anyhow::Result<()> {
    let text = read_input(file)?;
    println!("{}", render(&text, settings, tokens)?);
    Ok(())
}

fn render(text: &str, settings: &EstimationSettings, tokens: usize) -> anyhow::Result<String> {
    if tokens == 0 {
        bail!("--tokens must be at least 1");
    }
    let options = settings.to_chunk_options()?;
    let chunks = split_by_tokens(text, tokens, &options);
    Ok(serde_json::to_string_pretty(&chunks)?)
}
