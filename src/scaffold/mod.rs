pub mod files;
pub mod toolchain;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::day::{self, DayId, Origin};
use toolchain::Toolchain;

/// Which set of placeholder files a new day gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// One test input, generated `src/main.rs` left alone.
    Single,
    /// Two test inputs, `src/main.rs` replaced by the template.
    #[default]
    Templated,
}

impl Variant {
    pub fn test_inputs(self, day: DayId) -> Vec<String> {
        match self {
            Variant::Single => vec![format!("{day}_test.txt")],
            Variant::Templated => (1..=2).map(|n| format!("{day}_test{n}.txt")).collect(),
        }
    }

    pub fn seeds_template(self) -> bool {
        matches!(self, Variant::Templated)
    }
}

#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    pub variant: Variant,
    pub puzzles_dir: String,
    pub template: String,
    pub utils_path: String,
    pub utils_name: String,
    pub strict: bool,
    pub fail_on_command_error: bool,
}

impl Default for ScaffoldOptions {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            puzzles_dir: "puzzles".to_string(),
            template: "template.rs".to_string(),
            utils_path: "../utils".to_string(),
            utils_name: "utils".to_string(),
            strict: false,
            fail_on_command_error: false,
        }
    }
}

/// Everything one scaffolding run produced.
#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldReport {
    pub day: DayId,
    pub origin: Origin,
    pub project_dir: PathBuf,
    pub placeholders: Vec<PathBuf>,
    pub entry_point: Option<PathBuf>,
    pub command_failures: Vec<String>,
}

impl ScaffoldReport {
    /// The file worth opening in an editor.
    pub fn main_file(&self) -> PathBuf {
        self.entry_point
            .clone()
            .unwrap_or_else(|| self.project_dir.join("src").join("main.rs"))
    }
}

/// Scaffolds the next day under `base`.
///
/// Runs detection, project init, dependency linking, placeholder creation
/// and (for [`Variant::Templated`]) template seeding, in that order. Nothing
/// guards against an existing project of the same name.
pub fn scaffold_day(
    base: &Path,
    options: &ScaffoldOptions,
    toolchain: &impl Toolchain,
) -> Result<ScaffoldReport> {
    let next = day::next_day(base, options.strict)
        .with_context(|| format!("Failed to detect next day in {}", base.display()))?;
    let day = next.day;
    tracing::debug!("Next day is {day} ({:?})", next.origin);

    let puzzles_dir = base.join(&options.puzzles_dir);
    match &next.origin {
        Origin::Continued { .. } => {}
        Origin::FirstRun => std::fs::create_dir_all(&puzzles_dir)
            .with_context(|| format!("Failed to create dir {}", puzzles_dir.display()))?,
        // An existing puzzles dir means earlier days exist; stop before touching them
        Origin::Recovered { reason } => std::fs::create_dir(&puzzles_dir).with_context(|| {
            format!(
                "Failed to create dir {} while recovering from: {reason}",
                puzzles_dir.display()
            )
        })?,
    }

    let name = day.to_string();
    let project_dir = base.join(&name);
    let mut command_failures = Vec::new();

    let results = [
        toolchain.init_project(base, &name),
        toolchain.add_path_dependency(&project_dir, &options.utils_path, &options.utils_name),
    ];
    for result in results {
        if let Err(e) = result {
            if options.fail_on_command_error {
                bail!("Scaffolding {day} aborted: {e}");
            }
            tracing::warn!("{e}");
            command_failures.push(e.to_string());
        }
    }

    let mut placeholders = vec![puzzles_dir.join(format!("{day}.txt"))];
    placeholders.extend(
        options
            .variant
            .test_inputs(day)
            .into_iter()
            .map(|f| puzzles_dir.join(f)),
    );
    placeholders.push(project_dir.join("puzzle.txt"));
    for path in &placeholders {
        files::touch(path)?;
    }

    let entry_point = if options.variant.seeds_template() {
        Some(files::seed_entry_point(
            &base.join(&options.template),
            &project_dir,
        )?)
    } else {
        None
    };

    tracing::info!("Scaffolded {day} in {}", project_dir.display());

    Ok(ScaffoldReport {
        day,
        origin: next.origin,
        project_dir,
        placeholders,
        entry_point,
        command_failures,
    })
}
