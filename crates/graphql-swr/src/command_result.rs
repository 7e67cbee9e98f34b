use std::process::ExitCode;

/// What a finished command prints, and the status the process exits with.
#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    /// A failed command, reporting `fmt_args` on stderr.
    pub fn stderr(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(format!("{fmt_args}")),
            stdout: None,
        }
    }

    /// A successful command, printing `fmt_args` on stdout.
    pub fn stdout(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: Some(format!("{fmt_args}")),
        }
    }

    /// Print the captured output and hand back the exit status.
    pub fn report(self) -> ExitCode {
        if let Some(stdout) = &self.stdout {
            println!("{stdout}");
        }
        if let Some(stderr) = &self.stderr {
            eprintln!("{stderr}");
        }
        self.exit_code
    }
}
