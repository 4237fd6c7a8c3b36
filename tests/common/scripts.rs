//! Fake spotdl executables (shell scripts) for exercising the real `SpotDl`
//!
//! Every script records its arguments (one per line) in `args.txt` next to
//! itself and exposes the `--output` value as `$out` to the script body.

#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use spotdora::SpotDl;
use tempfile::TempDir;

pub struct FakeSpotDl {
    dir: TempDir,
    script: PathBuf,
}

impl FakeSpotDl {
    /// Creates a script whose behavior is `body` (POSIX sh).
    pub fn new(body: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let script = dir.path().join("spotdl");
        let args_file = dir.path().join("args.txt");

        let contents = format!(
            r#"#!/bin/sh
printf '%s\n' "$@" > '{args}'
out=""
prev=""
for a in "$@"; do
  if [ "$prev" = "--output" ]; then out="$a"; fi
  prev="$a"
done
{body}
"#,
            args = args_file.display(),
            body = body,
        );

        {
            let mut file = fs::File::create(&script).unwrap();
            file.write_all(contents.as_bytes()).unwrap();
            file.sync_all().unwrap();
        }
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        Self { dir, script }
    }

    pub fn path(&self) -> &Path {
        &self.script
    }

    /// A `SpotDl` running this script, with no settle delay
    pub fn spotdl(&self) -> SpotDl {
        SpotDl::new(self.script.to_string_lossy())
            .with_timeout(Duration::from_secs(10))
            .with_settle_delay(Duration::ZERO)
    }

    /// Arguments of the last invocation
    pub fn recorded_args(&self) -> Vec<String> {
        fs::read_to_string(self.dir.path().join("args.txt"))
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }
}
