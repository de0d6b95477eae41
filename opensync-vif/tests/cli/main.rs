use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

/// Scratch UCI directory seeded with the wireless fixture, plus an empty sysfs root.
struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::create_dir(dir.path().join("config")).expect("config dir");
        fs::create_dir(dir.path().join("sys")).expect("sys dir");
        fs::copy(
            fixture("fixtures/wireless"),
            dir.path().join("config").join("wireless"),
        )
        .expect("copy wireless");
        Self { dir }
    }

    fn uci_dir(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    fn package(&self, name: &str) -> String {
        fs::read_to_string(self.uci_dir().join(name)).expect("package file")
    }

    fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("write file");
        path
    }

    /// The binary pointed at this workspace.
    fn command(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("opensync-vif"));
        cmd.env_remove("RUST_LOG")
            .arg("--uci-dir")
            .arg(self.uci_dir())
            .arg("--sys-class-net")
            .arg(self.dir.path().join("sys"))
            .arg("--icon-dir")
            .arg(self.dir.path());
        cmd
    }
}

mod apply;
mod hotspot;
mod settings;
mod state;
