//! Process spawning capability

use async_trait::async_trait;
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command as TokioCommand;

/// A single external program call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    /// Working directory; inherits the current one when `None`
    pub cwd: Option<PathBuf>,
    /// Payload written to stdin before it is closed
    pub stdin: Option<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            cwd: None,
            stdin: None,
        }
    }

    pub fn cwd(mut self, cwd: Option<PathBuf>) -> Self {
        self.cwd = cwd;
        self
    }

    pub fn stdin(mut self, stdin: Option<String>) -> Self {
        self.stdin = stdin;
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Exit status and captured output of a finished process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Runs external programs to completion
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `invocation` and wait for it to exit. `Err` means the process could
    /// not be spawned or waited on; a non-zero exit is still `Ok`.
    async fn run(&self, invocation: &Invocation) -> io::Result<ProcessOutput>;
}

/// [`CommandRunner`] backed by `tokio::process`
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioRunner;

#[async_trait]
impl CommandRunner for TokioRunner {
    async fn run(&self, invocation: &Invocation) -> io::Result<ProcessOutput> {
        let mut command = TokioCommand::new(&invocation.program);
        command
            .args(&invocation.args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .stdin(if invocation.stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            });

        if let Some(dir) = &invocation.cwd {
            command.current_dir(dir);
        }

        let mut child = command.spawn()?;

        if let (Some(payload), Some(mut stdin)) = (&invocation.stdin, child.stdin.take()) {
            // The child may exit without reading its answers
            match stdin.write_all(payload.as_bytes()).await {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {}
                Err(e) => return Err(e),
            }
            drop(stdin);
        }

        let output = child.wait_with_output().await?;

        Ok(ProcessOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}
