use std::fs;
use std::path::Path;

use new_day::day::{self, Origin};
use new_day::error::ToolError;
use new_day::scaffold::toolchain::Toolchain;
use new_day::{ScaffoldOptions, Variant, scaffold_day};
use tempfile::TempDir;

/// Mimics `cargo init` by writing a minimal skeleton.
struct SkeletonToolchain;

impl Toolchain for SkeletonToolchain {
    fn init_project(&self, base: &Path, name: &str) -> Result<(), ToolError> {
        let project = base.join(name);
        fs::create_dir_all(project.join("src")).unwrap();
        fs::write(
            project.join("Cargo.toml"),
            format!("[package]\nname = \"{name}\"\nversion = \"0.1.0\"\nedition = \"2021\"\n"),
        )
        .unwrap();
        fs::write(project.join("src/main.rs"), "fn main() {}\n").unwrap();
        Ok(())
    }

    fn add_path_dependency(
        &self,
        project_dir: &Path,
        path: &str,
        name: &str,
    ) -> Result<(), ToolError> {
        let manifest = project_dir.join("Cargo.toml");
        let mut contents = fs::read_to_string(&manifest).unwrap();
        contents.push_str(&format!("\n[dependencies]\n{name} = {{ path = \"{path}\" }}\n"));
        fs::write(manifest, contents).unwrap();
        Ok(())
    }
}

fn workspace() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("utils/src")).unwrap();
    fs::write(
        temp.path().join("template.rs"),
        "fn main() {\n    let input = utils::load_puzzle_data(0, |s| s);\n}\n",
    )
    .unwrap();
    temp
}

#[test]
fn test_consecutive_days() {
    let temp = workspace();
    let options = ScaffoldOptions::default();

    let first = scaffold_day(temp.path(), &options, &SkeletonToolchain).unwrap();
    let second = scaffold_day(temp.path(), &options, &SkeletonToolchain).unwrap();
    let third = scaffold_day(temp.path(), &options, &SkeletonToolchain).unwrap();

    assert_eq!(first.origin, Origin::FirstRun);
    assert_eq!(second.day.to_string(), "day2");
    assert_eq!(third.day.to_string(), "day3");
    assert!(third.command_failures.is_empty());

    let manifest = fs::read_to_string(temp.path().join("day3/Cargo.toml")).unwrap();
    assert!(manifest.contains("utils = { path = \"../utils\" }"));
    for n in 1..=3 {
        for file in ["", "_test1", "_test2"] {
            let path = temp.path().join(format!("puzzles/day{n}{file}.txt"));
            assert_eq!(fs::read(&path).unwrap(), b"", "{}", path.display());
        }
    }
}

#[test]
fn test_mixed_variants_share_numbering() {
    let temp = workspace();
    let single = ScaffoldOptions {
        variant: Variant::Single,
        ..Default::default()
    };

    scaffold_day(temp.path(), &single, &SkeletonToolchain).unwrap();
    let report = scaffold_day(temp.path(), &ScaffoldOptions::default(), &SkeletonToolchain).unwrap();

    assert!(temp.path().join("puzzles/day1_test.txt").is_file());
    assert!(temp.path().join("puzzles/day2_test1.txt").is_file());
    assert_eq!(
        fs::read(report.main_file()).unwrap(),
        fs::read(temp.path().join("template.rs")).unwrap()
    );
}

#[test]
fn test_detection_does_not_reserve_day() {
    let temp = workspace();
    fs::create_dir_all(temp.path().join("day1")).unwrap();

    let a = day::next_day(temp.path(), true).unwrap();
    let b = day::next_day(temp.path(), true).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.day.to_string(), "day2");
}

#[test]
fn test_report_json() {
    let temp = workspace();
    let report = scaffold_day(temp.path(), &ScaffoldOptions::default(), &SkeletonToolchain).unwrap();

    let json: serde_json::Value = serde_json::to_value(&report).unwrap();
    assert_eq!(json["day"], "day1");
    assert_eq!(json["origin"]["kind"], "first_run");
    assert_eq!(json["placeholders"].as_array().unwrap().len(), 4);
}

#[test]
fn test_lenient_recovery_reuses_day1() {
    let temp = workspace();
    fs::create_dir_all(temp.path().join("day1")).unwrap();
    fs::create_dir_all(temp.path().join("day1-backup")).unwrap();

    let report = scaffold_day(
        temp.path(),
        &ScaffoldOptions {
            variant: Variant::Single,
            ..Default::default()
        },
        &SkeletonToolchain,
    )
    .unwrap();
    assert_eq!(report.day.to_string(), "day1");
    assert!(matches!(report.origin, Origin::Recovered { .. }));
    assert!(temp.path().join("puzzles").is_dir());
}

#[test]
fn test_lenient_recovery_keeps_existing_days() {
    let temp = workspace();
    let options = ScaffoldOptions::default();
    scaffold_day(temp.path(), &options, &SkeletonToolchain).unwrap();
    scaffold_day(temp.path(), &options, &SkeletonToolchain).unwrap();
    let solution = "fn main() {\n    println!(\"142\");\n}\n";
    fs::write(temp.path().join("day1/src/main.rs"), solution).unwrap();
    fs::create_dir_all(temp.path().join("day2_old")).unwrap();

    let err = scaffold_day(temp.path(), &options, &SkeletonToolchain).unwrap_err();

    assert!(format!("{err:#}").contains("day2_old"));
    assert_eq!(
        fs::read_to_string(temp.path().join("day1/src/main.rs")).unwrap(),
        solution
    );
    assert!(!temp.path().join("day3").exists());
}

#[test]
fn test_strict_mode_refuses_malformed_workspace() {
    let temp = workspace();
    fs::create_dir_all(temp.path().join("day1-backup")).unwrap();

    let options = ScaffoldOptions {
        strict: true,
        ..Default::default()
    };
    let err = scaffold_day(temp.path(), &options, &SkeletonToolchain).unwrap_err();
    assert!(format!("{err:#}").contains("day1-backup"));
    assert!(!temp.path().join("puzzles").exists());
}
