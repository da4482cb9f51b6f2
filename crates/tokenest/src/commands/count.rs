use std::path::Path;

use tokenest_core::{estimate_token_count, EstimationSettings};

use super::read_input;

pub fn run(settings: &EstimationSettings, file: Option<&Path>) -> anyhow::Result<()> {
    let text = read_input(file)?;
    println!("{}", render(&text, settings)?);
    Ok(())
}

fn render(text: &str, settings: &EstimationSettings) -> anyhow::Result<usize> {
    let options = settings.to_options()?;
    Ok(estimate_token_count(text, &options))
}
