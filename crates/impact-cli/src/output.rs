use impact_core::AssessmentResult;
use serde::Serialize;

/// One compact JSON object on a single line.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string(value)?;
    println!("{}", json);
    Ok(())
}

pub fn print_report(result: &AssessmentResult) {
    print!("{}", result.render_text());
}
