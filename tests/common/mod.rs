//! Shared helpers for nsbundle CLI tests.
//!
//! `TestProject` is a throwaway project directory with a `types/` source
//! root. The binary always looks up the formatter on `PATH`, so each project
//! carries its own `bin/` with a stub `npx` and the binary is run with only
//! that directory on `PATH`.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Stub formatter that succeeds and records its arguments
pub const NPX_OK: &str = "#!/bin/sh\necho \"$@\" > \"${0%/*}/npx.args\"\nexit 0\n";

/// Stub formatter that always fails
pub const NPX_FAILING: &str = "#!/bin/sh\necho 'prettier: not installed' >&2\nexit 1\n";

pub const ROOM_FRAGMENT: &str = "namespace Host {\n  interface Room {\n    name: string;\n  }\n}\n";

pub const PLATFORM_FRAGMENT: &str =
    "namespace Host {\n  interface Platform {\n    rooms: Room[];\n  }\n}\n";

pub struct TestProject {
    pub dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self::with_formatter(NPX_OK)
    }

    pub fn with_formatter(script: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("types")).unwrap();

        let project = Self { dir };
        project.install_npx(script);
        project
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.root().join("bin")
    }

    pub fn destination(&self) -> PathBuf {
        self.root().join("dist").join("host.d.ts")
    }

    /// Write a fragment under `types/`, creating parent directories
    pub fn write_fragment(&self, relative: &str, content: impl AsRef<[u8]>) {
        let path = self.root().join("types").join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    pub fn read_destination(&self) -> String {
        fs::read_to_string(self.destination()).unwrap()
    }

    /// Arguments the stub formatter was last called with
    pub fn formatter_args(&self) -> Option<String> {
        fs::read_to_string(self.bin_dir().join("npx.args"))
            .ok()
            .map(|s| s.trim().to_string())
    }

    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_nsbundle"));
        cmd.args(args)
            .current_dir(self.root())
            .env("PATH", self.bin_dir());
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args).output().unwrap()
    }

    fn install_npx(&self, script: &str) {
        let bin = self.bin_dir();
        fs::create_dir_all(&bin).unwrap();
        let npx = bin.join("npx");
        fs::write(&npx, script).unwrap();

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&npx, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }
}

/// Parse NDJSON output into one value per line
pub fn json_lines(stdout: &[u8]) -> Vec<serde_json::Value> {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

pub fn event_names(events: &[serde_json::Value]) -> Vec<String> {
    events
        .iter()
        .filter_map(|e| e["event"].as_str().map(str::to_string))
        .collect()
}
