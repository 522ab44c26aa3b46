//! User account resource

use declarative::{Account, Action, ApplyContext, ApplyError, ApplyResult};
use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Account creation tool
pub const USERADD: &str = "/usr/sbin/useradd";

/// Account modification tool
pub const USERMOD: &str = "/usr/sbin/usermod";

/// Login shell used when none is configured
pub const DEFAULT_SHELL: &str = "/usr/bin/zsh";

/// Parent of default home directories
pub const HOME_ROOT: &str = "/home";

/// A user account that should exist with a given shell and home directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAction {
    #[serde(default, rename = "user", deserialize_with = "null_as_default")]
    pub name: String,

    /// Whether the account should exist
    #[serde(default, deserialize_with = "null_as_default")]
    pub present: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shell: Option<String>,

    #[serde(default, rename = "homedir", skip_serializing_if = "Option::is_none")]
    pub home: Option<String>,
}

#[cfg(test)]
impl UserAction {
    pub fn new(name: &str, present: bool) -> Self {
        Self {
            name: name.to_string(),
            present,
            ..Default::default()
        }
    }

    pub fn with_shell(mut self, shell: &str) -> Self {
        self.shell = Some(shell.to_string());
        self
    }

    pub fn with_home(mut self, home: &str) -> Self {
        self.home = Some(home.to_string());
        self
    }
}

impl UserAction {
    /// Configured home directory; empty counts as unset
    fn configured_home(&self) -> Option<&str> {
        self.home.as_deref().filter(|h| !h.is_empty())
    }

    /// Shell to set: the configured one, or [`DEFAULT_SHELL`]
    pub fn effective_shell(&self) -> &str {
        self.shell
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SHELL)
    }

    /// `/home/<name>`
    pub fn default_home(&self) -> String {
        format!("{}/{}", HOME_ROOT, self.name)
    }

    /// Home directory to set on an account that may already exist
    ///
    /// Configured value first, then whatever the account database recorded,
    /// then the default path.
    pub fn effective_home(&self, existing: Option<&Account>) -> String {
        if let Some(home) = self.configured_home() {
            return home.to_string();
        }
        existing
            .map(|account| account.home.clone())
            .filter(|home| !home.is_empty())
            .unwrap_or_else(|| self.default_home())
    }

    fn create(&self, ctx: &mut ApplyContext) -> Result<(), ApplyError> {
        let home = self
            .configured_home()
            .map_or_else(|| self.default_home(), ToString::to_string);

        // uid, gid and groups are left to useradd's defaults
        ctx.run(USERADD, &["-m", "-d", &home, &self.name])
    }

    fn reconcile(
        &self,
        ctx: &mut ApplyContext,
        existing: Option<&Account>,
    ) -> Result<(), ApplyError> {
        let shell = self.effective_shell();
        let home = self.effective_home(existing);

        ctx.run(USERMOD, &["-s", shell, "-d", &home, &self.name])
    }
}

impl Action for UserAction {
    fn kind(&self) -> &'static str {
        "user"
    }

    fn apply(&self, ctx: &mut ApplyContext) -> Result<ApplyResult, ApplyError> {
        let existing = ctx.lookup_account(&self.name)?;

        let mut result = ApplyResult::Modified;
        if self.present && existing.is_none() {
            self.create(ctx)?;
            result = ApplyResult::Created;
        }

        // Shell and home are reconciled on every run, new account or not
        self.reconcile(ctx, existing.as_ref())?;

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{FakeAccounts, RecordingRunner};

    fn apply(
        action: &UserAction,
        runner: &RecordingRunner,
        accounts: &FakeAccounts,
    ) -> Result<ApplyResult, ApplyError> {
        let mut ctx = ApplyContext::new(runner, accounts);
        action.apply(&mut ctx)
    }

    #[test]
    fn test_missing_user_is_created_then_modified() {
        let runner = RecordingRunner::default();
        let accounts = FakeAccounts::default();
        let action = UserAction::new("alice", true);

        assert_eq!(
            apply(&action, &runner, &accounts).unwrap(),
            ApplyResult::Created
        );
        assert_eq!(
            runner.commands(),
            vec![
                "/usr/sbin/useradd -m -d /home/alice alice",
                "/usr/sbin/usermod -s /usr/bin/zsh -d /home/alice alice",
            ]
        );
    }

    #[test]
    fn test_missing_user_with_explicit_settings() {
        let runner = RecordingRunner::default();
        let accounts = FakeAccounts::default();
        let action = UserAction::new("svc", true)
            .with_shell("/bin/bash")
            .with_home("/srv/svc");

        apply(&action, &runner, &accounts).unwrap();
        assert_eq!(
            runner.commands(),
            vec![
                "/usr/sbin/useradd -m -d /srv/svc svc",
                "/usr/sbin/usermod -s /bin/bash -d /srv/svc svc",
            ]
        );
    }

    #[test]
    fn test_empty_strings_fall_back_to_defaults() {
        let runner = RecordingRunner::default();
        let accounts = FakeAccounts::default();
        let action = UserAction::new("bob", true).with_shell("").with_home("");

        apply(&action, &runner, &accounts).unwrap();
        assert_eq!(
            runner.commands(),
            vec![
                "/usr/sbin/useradd -m -d /home/bob bob",
                "/usr/sbin/usermod -s /usr/bin/zsh -d /home/bob bob",
            ]
        );
    }

    #[test]
    fn test_existing_user_keeps_recorded_home() {
        let runner = RecordingRunner::default();
        let accounts = FakeAccounts::default().with_account("carol", "/var/lib/carol");
        let action = UserAction::new("carol", true).with_shell("/bin/sh");

        assert_eq!(
            apply(&action, &runner, &accounts).unwrap(),
            ApplyResult::Modified
        );
        assert_eq!(
            runner.commands(),
            vec!["/usr/sbin/usermod -s /bin/sh -d /var/lib/carol carol"]
        );
    }

    #[test]
    fn test_existing_user_with_explicit_home() {
        let runner = RecordingRunner::default();
        let accounts = FakeAccounts::default().with_account("carol", "/var/lib/carol");
        let action = UserAction::new("carol", true).with_home("/home/carol");

        apply(&action, &runner, &accounts).unwrap();
        assert_eq!(
            runner.commands(),
            vec!["/usr/sbin/usermod -s /usr/bin/zsh -d /home/carol carol"]
        );
    }

    #[test]
    fn test_not_wanted_is_never_created() {
        let runner = RecordingRunner::default();
        let accounts = FakeAccounts::default();
        let action = UserAction::new("mallory", false);

        apply(&action, &runner, &accounts).unwrap();
        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].program, USERMOD);
    }

    #[test]
    fn test_lookup_failure_spawns_nothing() {
        let runner = RecordingRunner::default();
        let accounts = FakeAccounts::default().failing();
        let action = UserAction::new("alice", true);

        let err = apply(&action, &runner, &accounts).unwrap_err();
        assert!(matches!(err, ApplyError::AccountLookupFailed { ref user, .. } if user == "alice"));
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn test_failed_creation_skips_modification() {
        let runner = RecordingRunner::default().with_exit(USERADD, 9);
        let accounts = FakeAccounts::default();
        let action = UserAction::new("alice", true);

        let err = apply(&action, &runner, &accounts).unwrap_err();
        assert!(matches!(
            err,
            ApplyError::ExternalCommandFailed { ref status, .. } if status.code == Some(9)
        ));
        assert_eq!(runner.calls().len(), 1);
    }

    #[test]
    fn test_failed_modification_is_reported() {
        let runner = RecordingRunner::default().with_exit(USERMOD, 6);
        let accounts = FakeAccounts::default().with_account("dave", "/home/dave");
        let action = UserAction::new("dave", true);

        let err = apply(&action, &runner, &accounts).unwrap_err();
        assert!(err.is_external());
        assert_eq!(runner.calls().len(), 1);
    }

    #[test]
    fn test_decode_field_names() {
        let action: UserAction = serde_json::from_str(
            r#"{"user": "erin", "present": true, "shell": "/bin/fish", "homedir": "/data/erin"}"#,
        )
        .unwrap();
        assert_eq!(
            action,
            UserAction::new("erin", true)
                .with_shell("/bin/fish")
                .with_home("/data/erin")
        );

        let action: UserAction = serde_json::from_str(r#"{"user": "erin"}"#).unwrap();
        assert!(!action.present);
        assert_eq!(action.shell, None);
        assert_eq!(action.home, None);
    }

    #[test]
    fn test_decode_null_fields_as_defaults() {
        let action: UserAction = serde_json::from_str(
            r#"{"user": "a", "present": null, "shell": null, "homedir": null}"#,
        )
        .unwrap();
        assert_eq!(action, UserAction::new("a", false));

        let action: UserAction = serde_json::from_str(r#"{"user": null}"#).unwrap();
        assert_eq!(action.name, "");
    }

    #[test]
    fn test_decode_rejects_wrong_types() {
        assert!(serde_json::from_str::<UserAction>(r#"{"user": 42}"#).is_err());
        assert!(serde_json::from_str::<UserAction>(r#"{"user": "a", "present": "yes"}"#).is_err());
    }

    #[test]
    fn test_serialize_keeps_populated_fields() {
        let input = r#"{"user":"erin","present":true,"shell":"/bin/fish","homedir":"/data/erin"}"#;
        let action: UserAction = serde_json::from_str(input).unwrap();

        assert_eq!(
            serde_json::to_value(&action).unwrap(),
            serde_json::from_str::<serde_json::Value>(input).unwrap()
        );
    }
}
