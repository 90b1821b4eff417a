use std::path::Path;
use std::process::Command;

use crate::error::ToolError;

/// External project tooling the scaffolder delegates to.
pub trait Toolchain {
    /// Creates a new project skeleton named `name` inside `base`.
    fn init_project(&self, base: &Path, name: &str) -> Result<(), ToolError>;

    /// Adds a path dependency `name` at `path` to the project in `project_dir`.
    fn add_path_dependency(
        &self,
        project_dir: &Path,
        path: &str,
        name: &str,
    ) -> Result<(), ToolError>;
}

/// Runs the real `cargo` binary.
#[derive(Debug, Clone)]
pub struct Cargo {
    program: String,
}

impl Default for Cargo {
    fn default() -> Self {
        Self {
            program: "cargo".to_string(),
        }
    }
}

impl Cargo {
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, dir: &Path, args: &[&str]) -> Result<(), ToolError> {
        let command = format!("{} {}", self.program, args.join(" "));
        tracing::debug!("Running `{command}` in {}", dir.display());

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(dir)
            .output()
            .map_err(|source| ToolError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(ToolError::Failed {
                command,
                dir: dir.to_path_buf(),
                stderr,
            });
        }
        Ok(())
    }
}

impl Toolchain for Cargo {
    fn init_project(&self, base: &Path, name: &str) -> Result<(), ToolError> {
        self.run(base, &["init", name])
    }

    fn add_path_dependency(
        &self,
        project_dir: &Path,
        path: &str,
        name: &str,
    ) -> Result<(), ToolError> {
        self.run(project_dir, &["add", "--path", path, name])
    }
}
