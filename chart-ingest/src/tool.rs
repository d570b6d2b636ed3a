//! Subprocess orchestration for optional external converters, mirroring
//! `cm93_importer.py`'s `shutil.which` probe-before-run pattern.

use std::process::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolOutcome {
    Ok,
    Missing,
    Failed(i32),
}

/// Run `tool args...`, treating an `ErrorKind::NotFound` spawn failure as
/// [`ToolOutcome::Missing`] rather than propagating an error: an optional
/// converter not being installed is an expected, SKIP-able condition.
pub fn run_tool(tool: &str, args: &[String]) -> std::io::Result<ToolOutcome> {
    match Command::new(tool).args(args).status() {
        Ok(status) if status.success() => Ok(ToolOutcome::Ok),
        Ok(status) => Ok(ToolOutcome::Failed(status.code().unwrap_or(-1))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ToolOutcome::Missing),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_tool_is_reported_not_errored() {
        let outcome = run_tool("definitely-not-a-real-binary-xyz", &[]).unwrap();
        assert_eq!(outcome, ToolOutcome::Missing);
    }

    #[test]
    fn real_tool_runs_ok() {
        let outcome = run_tool("true", &[]).unwrap();
        assert_eq!(outcome, ToolOutcome::Ok);
    }
}
