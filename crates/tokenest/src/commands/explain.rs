use std::path::Path;

use serde::Serialize;
use tokenest_core::{classify, segments, EstimationSettings, SegmentClass};

use super::read_input;

#[derive(Debug, Serialize)]
struct SegmentReport<'a> {
    segment: &'a str,
    class: SegmentClass,
    tokens: usize,
}

pub fn run(settings: &EstimationSettings, file: Option<&Path>) -> anyhow::Result<()> {
    let text = read_input(file)?;
    for line in render(&text, settings)? {
        println!("{line}");
    }
    Ok(())
}

fn render(text: &str, settings: &EstimationSettings) -> anyhow::Result<Vec<String>> {
    let options = settings.to_options()?;
    segments(text)
        .map(|segment| {
            let class = classify(segment);
            let report = SegmentReport {
                segment,
                class,
                tokens: class.estimate(segment, &options),
            };
            Ok(serde_json::to_string(&report)?)
        })
        .collect()
}
