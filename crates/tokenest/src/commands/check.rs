use std::path::Path;

use tokenest_core::{estimate_token_count, EstimationSettings};

use super::read_input;

/// Prints whether the input fits and returns the same answer
pub fn run(
    settings: &EstimationSettings,
    file: Option<&Path>,
    limit: usize,
) -> anyhow::Result<bool> {
    let text = read_input(file)?;
    let options = settings.to_options()?;
    let tokens = estimate_token_count(&text, &options);
    let within = tokens <= limit;

    tracing::debug!(tokens, limit, within, "checked token limit");
    println!("{within}");
    Ok(within)
}
