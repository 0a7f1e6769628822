//! Scan command - check text for credential-shaped strings.

use std::io::Read;

use tracing::debug;

use crate::cli::output;
use crate::core::scanner;
use crate::error::{DecoyError, Result};

/// Scan a file (or stdin) for known credential patterns.
pub fn execute(path: Option<&str>, json: bool) -> Result<()> {
    let text = read_input(path)?;
    debug!("scanning {} bytes of input", text.len());

    let report = scanner::scan(&text);

    if json {
        let out = serde_json::json!({
            "findings": report.findings,
            "count": report.findings.len(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if report.is_clean() {
        output::success("no credential-shaped strings found");
        return Ok(());
    }

    output::warn(&format!(
        "{} credential pattern{} detected:",
        report.findings.len(),
        if report.findings.len() == 1 { "" } else { "s" }
    ));
    for name in &report.findings {
        output::list_item(name);
    }
    println!();
    output::hint("if any of these are real, rotate them now");

    Ok(())
}

/// Read the text to scan from a file path, or stdin when the path is
/// omitted or `-`.
fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) if path != "-" => std::fs::read_to_string(path)
            .map_err(|e| DecoyError::ReadInput(path.to_string(), e)),
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
