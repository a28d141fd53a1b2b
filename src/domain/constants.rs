pub const CONTROLLERS_DIR: &str = "src/TowerOps.Api/Controllers";
pub const POLICIES_FILE: &str = "src/TowerOps.Api/Authorization/ApiAuthorizationPolicies.cs";
pub const IMPORTS_DIR: &str = "src/TowerOps.Application/Commands/Imports";
pub const REPORTS_DIR: &str = "src/TowerOps.Application/Commands/Reports";
pub const API_DOC: &str = "docs/Api-Doc.md";
pub const APPLICATION_DOC: &str = "docs/Application-Doc.md";

/// Repo-relative overlay picked up automatically when `--config` is absent.
pub const CONFIG_FILE_NAME: &str = "docdrift.toml";

pub const SOURCE_EXTENSION: &str = "cs";
pub const CONTROLLER_SUFFIX: &str = "Controller";
pub const COMMAND_SUFFIX: &str = "Command";
/// Companion files that share a command's stem but are not commands.
pub const COMMAND_COMPANION_SUFFIXES: &[&str] = &["Handler", "Validator"];

/// Shared abstract controller; never documented on its own.
pub const CONTROLLER_BASE_CLASS: &str = "ApiControllerBase";
pub const POLICY_PREFIX: &str = "Can";

/// Critical commands living outside the scanned Imports/Reports trees.
pub const CRITICAL_MANUAL_COMMANDS: &[&str] = &[
    "LogAuditEntryCommand",
    "CreateApprovalRecordCommand",
    "SubmitForCustomerAcceptanceCommand",
    "AcceptByCustomerCommand",
    "RejectByCustomerCommand",
];

pub const SUCCESS_MESSAGE: &str =
    "Doc drift checks passed: controllers, policies, and critical commands are documented.";

pub const LOG_ENV: &str = "DOCDRIFT_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";
