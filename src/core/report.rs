use crate::core::ProbeOutcome;
use std::io::{self, Write};

pub const REMEDIATION_STEPS: &[&str] = &[
    "1. Open RStudio",
    "2. File -> New Project -> Existing Directory -> select the project folder -> Create Project",
    "   (If .Rproj already exists, instead: File -> Open Project -> select your .Rproj file -> Open)",
    "3. Run: library(ClaudeR)",
    "4. Run: claudeAddin()",
    "5. Click 'Start Server' in the Viewer pane",
];

/// Console lines for an outcome, without trailing newlines.
pub fn render(outcome: &ProbeOutcome, base_url: &str) -> Vec<String> {
    match outcome {
        ProbeOutcome::Healthy => vec![format!("✅ R server is running at {}", base_url)],
        ProbeOutcome::Unhealthy { status } => {
            vec![format!("⚠️  R server responded with status {}", status)]
        }
        ProbeOutcome::Unreachable => {
            let mut lines = vec![
                format!("❌ Cannot connect to R server at {}", base_url),
                String::new(),
                "To start the R server:".to_string(),
            ];
            lines.extend(REMEDIATION_STEPS.iter().map(|step| step.to_string()));
            lines
        }
        ProbeOutcome::Error { message } => {
            vec![format!("❌ Error checking connection: {}", message)]
        }
    }
}

pub fn write_report<W: Write>(out: &mut W, outcome: &ProbeOutcome, base_url: &str) -> io::Result<()> {
    for line in render(outcome, base_url) {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}
