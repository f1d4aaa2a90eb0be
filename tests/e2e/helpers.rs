use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

pub const LICENSE_MAP: &str = r#"
[licenses]
MIT = "docs/legal/licenses/MIT.txt"
"Apache-2.0" = ["docs/legal/licenses/Apache-2.0.txt", "docs/legal/licenses/Apache-2.0-NOTICE.txt"]
"BSD-3-Clause" = "docs/legal/licenses/BSD-3-Clause.txt"
"#;

pub const CARGO_ABOUT: &str = r#"{
  "overview": [],
  "crates": [
    {"package": {"name": "anyhow", "version": "1.0.86"}, "license": "MIT OR Apache-2.0"},
    {"package": {"name": "clap", "version": "4.5.4"}, "license": "MIT OR Apache-2.0"}
  ]
}"#;

pub const GO_LICENSES: &str = "\
github.com/spf13/cobra,https://github.com/spf13/cobra/blob/v1.8.0/LICENSE.txt,Apache-2.0
golang.org/x/sys/unix,https://cs.opensource.google/go/x/sys/+/v0.15.0:LICENSE,BSD-3-Clause
";

pub const SNIPPETS: &str = "\
# Attributions required by bundled third-party components
Copyright (c) The Go Authors
Copyright 2013 Steve Francia
";

pub const NOTICE: &str = "\
Demo Project
Copyright 2024 Demo Authors

This product bundles golang.org/x/sys, Copyright (c) The Go Authors.
This product bundles cobra, Copyright 2013 Steve Francia <spf@spf13.com>.
";

pub struct TestProject {
    pub dir: TempDir,
    pub binary_path: String,
}

impl TestProject {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let binary_path = env!("CARGO_BIN_EXE_legal-audit").to_string();

        Self { dir, binary_path }
    }

    /// Project with every input in its conventional location and all checks passing.
    pub fn compliant() -> Self {
        let project = Self::new();
        project.write("target/legal/cargo-about.json", CARGO_ABOUT);
        project.write("target/legal/go-licenses.csv", GO_LICENSES);
        project.write("docs/legal/license-files.toml", LICENSE_MAP);
        for file in ["MIT.txt", "Apache-2.0.txt", "Apache-2.0-NOTICE.txt", "BSD-3-Clause.txt"] {
            project.write(&format!("docs/legal/licenses/{}", file), "license text\n");
        }
        project.write("docs/legal/notice-snippets.txt", SNIPPETS);
        project.write("NOTICE", NOTICE);
        project
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create fixture directory");
        }
        fs::write(path, content).expect("Failed to write fixture file");
    }

    pub fn remove(&self, relative: &str) {
        fs::remove_file(self.dir.path().join(relative)).expect("Failed to remove fixture file");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn run_auditor(&self, args: &[&str]) -> Output {
        Command::new(&self.binary_path)
            .args(args)
            .current_dir(self.dir.path())
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run legal-audit")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
