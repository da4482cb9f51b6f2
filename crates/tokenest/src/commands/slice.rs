use std::path::Path;

use tokenest_core::{slice_by_tokens, EstimationSettings};

use super::read_input;

pub fn run(
    settings: &EstimationSettings,
    file: Option<&Path>,
    start: i64,
    end: Option<i64>,
) -> anyhow::Result<()> {
    let text = read_input(file)?;
    let options = settings.to_options()?;
    print!("{}", slice_by_tokens(&text, start, end, &options));
    Ok(())
}
