//! Icon cache refresh
//!
//! Finder and the Dock cache bundle icons. Re-registering the bundle with
//! Launch Services and bumping its modification time makes them pick up the
//! new `.icns`. Nothing here is fatal: the container already exists.

use std::ffi::OsString;
use std::path::Path;

use crate::host::ToolRunner;
use crate::settings::ToolPaths;

/// Run `lsregister -f <bundle>` then `touch <bundle>`.
///
/// Returns one message per step that failed; failures are also logged.
pub fn refresh_bundle<R: ToolRunner + ?Sized>(
    runner: &R,
    tools: &ToolPaths,
    bundle: &Path,
) -> Vec<String> {
    let steps: [(&Path, Vec<OsString>); 2] = [
        (tools.lsregister.as_path(), vec!["-f".into(), bundle.as_os_str().to_owned()]),
        (tools.touch.as_path(), vec![bundle.as_os_str().to_owned()]),
    ];

    let mut warnings = Vec::new();
    for (program, args) in steps {
        let name = program
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| program.display().to_string());

        let failure = match runner.run(program, &args) {
            Ok(result) if result.success() => None,
            Ok(result) => Some(format!(
                "{name} exited with {:?}: {}",
                result.exit_code,
                result.diagnostic()
            )),
            Err(e) => Some(format!("{name}: {e}")),
        };

        if let Some(message) = failure {
            tracing::warn!("Icon cache refresh step failed: {}", message);
            warnings.push(message);
        }
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::testing::{exit, FakeRunner};
    use crate::host::CommandError;

    #[test]
    fn test_runs_lsregister_then_touch() {
        let runner = FakeRunner::succeeding();
        let bundle = Path::new("/Apps/IVS-NDI Bridge.app");

        let warnings = refresh_bundle(&runner, &ToolPaths::default(), bundle);

        assert!(warnings.is_empty());
        assert_eq!(runner.programs(), vec!["lsregister", "touch"]);
        let calls = runner.calls();
        assert_eq!(
            calls[0].1,
            vec![OsString::from("-f"), OsString::from("/Apps/IVS-NDI Bridge.app")]
        );
        assert_eq!(calls[1].1, vec![OsString::from("/Apps/IVS-NDI Bridge.app")]);
    }

    #[test]
    fn test_failures_are_collected_not_fatal() {
        let runner = FakeRunner::new(|program, _| {
            if program.ends_with("lsregister") {
                Err(CommandError::BinaryNotFound(program.display().to_string()))
            } else {
                Ok(exit(1, "touch: cannot touch: Permission denied"))
            }
        });

        let warnings = refresh_bundle(&runner, &ToolPaths::default(), Path::new("X.app"));

        assert_eq!(runner.calls().len(), 2);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].starts_with("lsregister:"));
        assert!(warnings[1].contains("Permission denied"));
    }
}
