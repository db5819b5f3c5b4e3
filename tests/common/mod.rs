#![allow(dead_code)]

use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the hepplot binary, run inside `$dir`
/// with the user config directory isolated to the fixture.
#[macro_export]
macro_rules! hepplot {
    ($dir:expr) => {{
        let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("hepplot"));
        cmd.current_dir($dir)
            .env("XDG_CONFIG_HOME", $dir.join(".xdg"))
            .env("HOME", $dir)
            .env_remove("RUST_LOG");
        cmd
    }};
}

/// Three-column histogram table: lower edge, weight, width.
pub fn histogram_table(bins: usize, scale: f64) -> String {
    let mut content = String::new();
    for i in 0..bins {
        let x = i as f64 * 0.5;
        let weight = scale * (-(i as f64) / 4.0).exp();
        let _ = writeln!(content, "{x:.3e} {weight:.6e} 5.000e-01");
    }
    content
}

/// Two-column line table, symmetric around zero.
pub fn line_table(points: usize) -> String {
    let mut content = String::new();
    for i in 0..points {
        let x = (i as f64).mul_add(0.5, -5.0);
        let y = 6.0 * (-(x * x) / 20.0).exp();
        let _ = writeln!(content, "{x:.4} {y:.6}");
    }
    content
}

/// Temporary working directory holding the input tables.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Fixture with all six well-formed `out03plot-N.dat` tables.
    pub fn with_tables() -> Self {
        let fixture = Self::new();
        fixture.write_tables("");
        fixture
    }

    /// Write the six standard tables under `subdir` (relative to the fixture).
    pub fn write_tables(&self, subdir: &str) {
        let tables = [
            histogram_table(40, 1.0e3),
            histogram_table(30, 0.1),
            histogram_table(30, 0.08),
            line_table(21),
            line_table(21),
            histogram_table(40, 25.0),
        ];
        for (i, content) in tables.iter().enumerate() {
            let name = Path::new(subdir).join(format!("out03plot-{i}.dat"));
            self.create_file(&name.to_string_lossy(), content);
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, relative_path: &str) -> PathBuf {
        self.dir.path().join(relative_path)
    }

    /// Contents of a file written by the binary.
    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.join(relative_path)).expect("Failed to read output")
    }

    /// Number of pages in a generated report.
    pub fn page_count(&self, relative_path: &str) -> usize {
        self.read(relative_path)
            .matches(r#"<section class="page""#)
            .count()
    }
}
