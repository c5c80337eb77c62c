//! Host module for external tool execution

pub mod command_runner;

pub use command_runner::{CommandError, CommandResult, CommandRunner, ToolRunner};

#[cfg(test)]
pub mod testing {
    //! Scripted stand-in for the macOS tools

    use super::{CommandError, CommandResult, ToolRunner};
    use std::cell::RefCell;
    use std::ffi::OsString;
    use std::path::{Path, PathBuf};

    type Handler = Box<dyn Fn(&Path, &[OsString]) -> Result<CommandResult, CommandError>>;

    /// Records every invocation and answers with a handler closure
    pub struct FakeRunner {
        handler: Handler,
        calls: RefCell<Vec<(PathBuf, Vec<OsString>)>>,
    }

    impl FakeRunner {
        pub fn new(
            handler: impl Fn(&Path, &[OsString]) -> Result<CommandResult, CommandError> + 'static,
        ) -> Self {
            Self {
                handler: Box::new(handler),
                calls: RefCell::new(Vec::new()),
            }
        }

        /// Every tool exits 0 with no output
        pub fn succeeding() -> Self {
            Self::new(|_, _| Ok(exit(0, "")))
        }

        pub fn calls(&self) -> Vec<(PathBuf, Vec<OsString>)> {
            self.calls.borrow().clone()
        }

        /// Program names (file name component) in call order
        pub fn programs(&self) -> Vec<String> {
            self.calls
                .borrow()
                .iter()
                .map(|(p, _)| {
                    p.file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default()
                })
                .collect()
        }
    }

    impl ToolRunner for FakeRunner {
        fn run(&self, program: &Path, args: &[OsString]) -> Result<CommandResult, CommandError> {
            self.calls
                .borrow_mut()
                .push((program.to_path_buf(), args.to_vec()));
            (self.handler)(program, args)
        }
    }

    pub fn exit(code: i32, stderr: &str) -> CommandResult {
        CommandResult {
            stdout: String::new(),
            stderr: stderr.to_string(),
            exit_code: Some(code),
        }
    }
}
