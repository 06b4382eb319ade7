//! Shell completion generation.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::TaskdeckError;

/// Generate completions for the given shell.
pub fn completions(shell: Shell) -> Result<String, TaskdeckError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();

    clap_complete::generate(shell, &mut cmd, "taskdeck", &mut buf);

    String::from_utf8(buf)
        .map_err(|e| TaskdeckError::Parse(format!("Completion output was not UTF-8: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_bash_completions() {
        let output = completions(Shell::Bash).unwrap();
        assert!(output.contains("taskdeck"));
    }
}
