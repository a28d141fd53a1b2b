#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const CONTROLLERS_DIR: &str = "src/TowerOps.Api/Controllers";
pub const POLICIES_FILE: &str = "src/TowerOps.Api/Authorization/ApiAuthorizationPolicies.cs";
pub const IMPORTS_DIR: &str = "src/TowerOps.Application/Commands/Imports";
pub const REPORTS_DIR: &str = "src/TowerOps.Application/Commands/Reports";
pub const API_DOC: &str = "docs/Api-Doc.md";
pub const APPLICATION_DOC: &str = "docs/Application-Doc.md";

pub const SUCCESS_LINE: &str =
    "Doc drift checks passed: controllers, policies, and critical commands are documented.";

pub const MANUAL_COMMANDS: &[&str] = &[
    "LogAuditEntryCommand",
    "CreateApprovalRecordCommand",
    "SubmitForCustomerAcceptanceCommand",
    "AcceptByCustomerCommand",
    "RejectByCustomerCommand",
];

/// A throwaway repository that passes every check until a test edits it.
pub struct TestRepo {
    _tmp: TempDir,
    pub root: PathBuf,
}

impl TestRepo {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().join("repo");
        let repo = Self { _tmp: tmp, root };

        repo.write(
            &format!("{}/WidgetController.cs", CONTROLLERS_DIR),
            "public class WidgetController : ApiControllerBase {}\n",
        );
        repo.write(
            &format!("{}/ApiControllerBase.cs", CONTROLLERS_DIR),
            "public abstract class ApiControllerBase {}\n",
        );
        repo.write(
            POLICIES_FILE,
            "public static class ApiAuthorizationPolicies\n{\n    public const string CanViewWidget = \"CanViewWidget\";\n    public const string MaxRetries = \"3\";\n}\n",
        );
        fs::create_dir_all(repo.path(IMPORTS_DIR)).expect("create imports dir");
        fs::create_dir_all(repo.path(REPORTS_DIR)).expect("create reports dir");

        repo.write(
            API_DOC,
            "# API\n\n| Controller | Policy |\n|---|---|\n| `WidgetController` | `CanViewWidget` |\n",
        );
        repo.write(APPLICATION_DOC, &application_doc(&[]));
        repo
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    pub fn write(&self, rel: &str, body: &str) {
        let p = self.path(rel);
        if let Some(parent) = p.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(p, body).expect("write fixture file");
    }

    pub fn remove(&self, rel: &str) {
        let p = self.path(rel);
        if p.is_dir() {
            fs::remove_dir_all(p).expect("remove fixture dir");
        } else {
            fs::remove_file(p).expect("remove fixture file");
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("docdrift");
        cmd.env_remove("DOCDRIFT_LOG")
            .arg("--repo")
            .arg(repo_arg(&self.root));
        cmd
    }

    pub fn run_json(&self, args: &[&str], success: bool) -> Value {
        let mut cmd = self.cmd();
        let assert = cmd.arg("--json").args(args).assert();
        let assert = if success {
            assert.success()
        } else {
            assert.failure()
        };
        let out = assert.get_output().stdout.clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

/// Application doc mentioning every pinned command plus `extra`.
pub fn application_doc(extra: &[&str]) -> String {
    let mut body = String::from("# Application\n\n");
    for c in MANUAL_COMMANDS.iter().chain(extra) {
        body.push_str(&format!("- `{}`\n", c));
    }
    body
}

fn repo_arg(root: &Path) -> &str {
    root.to_str().expect("repo path utf8")
}
