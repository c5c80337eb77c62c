use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::{IconPacker, PackError};
use crate::host::ToolRunner;

/// Packs with `iconutil -c icns <iconset> -o <output>`
pub struct IconutilPacker<'a, R: ToolRunner + ?Sized> {
    runner: &'a R,
    program: PathBuf,
}

impl<'a, R: ToolRunner + ?Sized> IconutilPacker<'a, R> {
    pub fn new(runner: &'a R, program: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            program: program.into(),
        }
    }

    fn args(iconset: &Path, output: &Path) -> Vec<OsString> {
        vec![
            "-c".into(),
            "icns".into(),
            iconset.as_os_str().to_owned(),
            "-o".into(),
            output.as_os_str().to_owned(),
        ]
    }
}

impl<R: ToolRunner + ?Sized> IconPacker for IconutilPacker<'_, R> {
    fn name(&self) -> &'static str {
        "iconutil"
    }

    fn pack(&self, iconset: &Path, output: &Path) -> Result<(), PackError> {
        let result = self.runner.run(&self.program, &Self::args(iconset, output))?;
        if result.success() {
            return Ok(());
        }

        Err(PackError::ToolFailed {
            tool: self.program.display().to_string(),
            exit_code: result.exit_code,
            diagnostic: result.diagnostic(),
        })
    }
}
