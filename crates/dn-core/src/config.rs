// # Config Store
//
// Resolves registrar credentials and persists them for later invocations.
//
// ## Resolution Order
//
// For each of the API key, API user and API URL:
// 1. Environment variable (`DN_API_KEY`, `DN_API_USER`, `DN_API_URL`), empty = unset
// 2. Per-user config file, parsed lazily once and cached
// 3. Absent
//
// A missing or corrupt file degrades to "unconfigured", never to an error.
//
// ## Persistence
//
// - Directory is created with mode 0700
// - Content goes to a temporary file created with mode 0600, fsynced, then
//   renamed over the target, so the file is never readable by others and never
//   half-written
// - The in-memory cache is dropped after a save
//
// ## File Format
//
// ```json
// {
//   "api_key": "...",
//   "api_user": "...",
//   "api_url": "https://..."
// }
// ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::env::{API_KEY_VAR, API_URL_VAR, API_USER_VAR, EnvLookup, ProcessEnv};
use crate::error::{Error, Result};

/// Directory below the home directory holding the config file
const CONFIG_DIR: &str = ".config/dn";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Persisted credentials, without any environment overrides applied
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Registrar API key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Registrar API user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_user: Option<String>,

    /// Optional API base URL override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

impl ConfigFile {
    /// Parse file contents leniently
    ///
    /// Returns `None` unless the content is a JSON object. Keys holding
    /// anything other than a string are ignored.
    pub fn parse(content: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(content).ok()?;
        let map = value.as_object()?;
        let field = |key: &str| map.get(key).and_then(Value::as_str).map(str::to_string);

        Some(Self {
            api_key: field("api_key"),
            api_user: field("api_user"),
            api_url: field("api_url"),
        })
    }
}

/// Credential store backed by the environment and a per-user JSON file
pub struct ConfigStore {
    env: Box<dyn EnvLookup>,
    path: PathBuf,
    cache: RwLock<Option<ConfigFile>>,
}

impl std::fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never expose resolved credentials
        f.debug_struct("ConfigStore").finish_non_exhaustive()
    }
}

impl ConfigStore {
    /// Create a store that resolves its home directory from `env`
    pub fn new(env: impl EnvLookup + 'static) -> Self {
        let path = default_config_path(&env);
        Self::with_path(env, path)
    }

    /// Create a store reading the real process environment
    pub fn from_process_env() -> Self {
        Self::new(ProcessEnv)
    }

    /// Create a store with an explicit config file location
    pub fn with_path(env: impl EnvLookup + 'static, path: impl Into<PathBuf>) -> Self {
        Self {
            env: Box::new(env),
            path: path.into(),
            cache: RwLock::new(None),
        }
    }

    /// Resolved API key
    pub fn api_key(&self) -> Option<String> {
        self.resolve(API_KEY_VAR, |file| file.api_key.clone())
    }

    /// Resolved API user
    pub fn api_user(&self) -> Option<String> {
        self.resolve(API_USER_VAR, |file| file.api_user.clone())
    }

    /// Resolved API base URL override
    pub fn api_url(&self) -> Option<String> {
        self.resolve(API_URL_VAR, |file| file.api_url.clone())
    }

    /// True when both the API key and the API user resolve
    pub fn is_configured(&self) -> bool {
        self.api_key().is_some() && self.api_user().is_some()
    }

    /// Location of the config file
    ///
    /// Never include this in user-facing messages.
    pub fn config_path(&self) -> &Path {
        &self.path
    }

    /// Persist credentials, replacing any previous file
    ///
    /// Either the whole credential set is committed or the previous file is
    /// left untouched.
    pub fn save(&self, api_key: &str, api_user: &str, api_url: Option<&str>) -> Result<()> {
        let file = ConfigFile {
            api_key: Some(api_key.to_string()),
            api_user: Some(api_user.to_string()),
            api_url: api_url.map(str::to_string),
        };

        let mut json = serde_json::to_string_pretty(&file)?;
        json.push('\n');

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            create_private_dir(parent)?;
        }

        write_private_atomic(&self.path, json.as_bytes())?;

        // Reset cached config
        *self.cache.write().unwrap_or_else(|e| e.into_inner()) = None;

        tracing::debug!(has_api_url = api_url.is_some(), "Credentials saved");
        Ok(())
    }

    fn resolve(&self, var: &str, pick: impl FnOnce(&ConfigFile) -> Option<String>) -> Option<String> {
        if let Some(value) = self.env.non_empty(var) {
            tracing::trace!("{} resolved from environment", var);
            return Some(value);
        }

        self.with_file(pick).filter(|value| !value.is_empty())
    }

    fn with_file<T>(&self, read: impl FnOnce(&ConfigFile) -> T) -> T {
        {
            let guard = self.cache.read().unwrap_or_else(|e| e.into_inner());
            if let Some(file) = guard.as_ref() {
                return read(file);
            }
        }

        let loaded = load_file(&self.path);
        let mut guard = self.cache.write().unwrap_or_else(|e| e.into_inner());
        read(guard.get_or_insert(loaded))
    }
}

/// Default config file location derived from the home directory
pub fn default_config_path(env: &dyn EnvLookup) -> PathBuf {
    let home = env
        .non_empty("HOME")
        .or_else(|| env.non_empty("USERPROFILE"))
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    home.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Load the config file, treating any problem as "no stored credentials"
fn load_file(path: &Path) -> ConfigFile {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file present");
            return ConfigFile::default();
        }
        Err(e) => {
            tracing::warn!("Config file unreadable, ignoring it: {}", e);
            return ConfigFile::default();
        }
    };

    ConfigFile::parse(&content).unwrap_or_else(|| {
        tracing::warn!("Config file is not a JSON object, ignoring it");
        ConfigFile::default()
    })
}

/// Create a directory (and parents) readable only by the owner
fn create_private_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }

    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }

    builder
        .create(dir)
        .map_err(|e| Error::config(format!("Failed to create config directory: {}", e)))
}

/// Write `contents` to `path` via a 0600 temporary file and a rename
fn write_private_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let temp_path = temp_path(path);

    // A stale temp file may carry other permissions; never reuse it
    match fs::remove_file(&temp_path) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(Error::config(format!("Failed to clear temporary file: {}", e))),
    }

    let result = write_new_private_file(&temp_path, contents).and_then(|()| {
        fs::rename(&temp_path, path)
            .map_err(|e| Error::config(format!("Failed to replace config file: {}", e)))
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }

    result
}

fn write_new_private_file(path: &Path, contents: &[u8]) -> Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options
        .open(path)
        .map_err(|e| Error::config(format!("Failed to create config file: {}", e)))?;

    // The creation mode is filtered through the umask; pin it exactly
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(0o600))
            .map_err(|e| Error::config(format!("Failed to restrict config file: {}", e)))?;
    }

    file.write_all(contents)
        .and_then(|()| file.sync_all())
        .map_err(|e| Error::config(format!("Failed to write config file: {}", e)))
}

fn temp_path(path: &Path) -> PathBuf {
    let mut temp = path.to_path_buf();
    temp.set_extension("tmp");
    temp
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::{TempDir, tempdir};

    fn env_with_home(dir: &TempDir, vars: &[(&str, &str)]) -> HashMap<String, String> {
        let mut env = HashMap::from([(
            "HOME".to_string(),
            dir.path().to_string_lossy().into_owned(),
        )]);
        for (name, value) in vars {
            env.insert((*name).to_string(), (*value).to_string());
        }
        env
    }

    fn write_config(dir: &TempDir, content: &str) {
        let config_dir = dir.path().join(CONFIG_DIR);
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(config_dir.join(CONFIG_FILE), content).unwrap();
    }

    #[cfg(unix)]
    fn mode(path: &Path) -> u32 {
        use std::os::unix::fs::PermissionsExt;
        fs::metadata(path).unwrap().permissions().mode() & 0o777
    }

    #[test]
    fn test_env_vars_take_priority() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(env_with_home(
            &dir,
            &[(API_KEY_VAR, "env-key"), (API_USER_VAR, "env-user")],
        ));

        assert_eq!(store.api_key().as_deref(), Some("env-key"));
        assert_eq!(store.api_user().as_deref(), Some("env-user"));
        assert!(store.is_configured());
    }

    #[test]
    fn test_reads_from_config_file() {
        let dir = tempdir().unwrap();
        write_config(
            &dir,
            r#"{"api_key": "file-key", "api_user": "file-user", "api_url": "https://file.api.com"}"#,
        );

        let store = ConfigStore::new(env_with_home(&dir, &[]));

        assert_eq!(store.api_key().as_deref(), Some("file-key"));
        assert_eq!(store.api_user().as_deref(), Some("file-user"));
        assert_eq!(store.api_url().as_deref(), Some("https://file.api.com"));
    }

    #[test]
    fn test_env_overrides_file_per_field() {
        let dir = tempdir().unwrap();
        write_config(&dir, r#"{"api_key": "file-key", "api_user": "file-user"}"#);

        let store = ConfigStore::new(env_with_home(&dir, &[(API_KEY_VAR, "env-key")]));

        assert_eq!(store.api_key().as_deref(), Some("env-key"));
        assert_eq!(store.api_user().as_deref(), Some("file-user"));
    }

    #[test]
    fn test_empty_env_var_falls_through_to_file() {
        let dir = tempdir().unwrap();
        write_config(&dir, r#"{"api_key": "file-key", "api_user": "file-user"}"#);

        let store = ConfigStore::new(env_with_home(&dir, &[(API_KEY_VAR, "")]));
        assert_eq!(store.api_key().as_deref(), Some("file-key"));

        let empty = tempdir().unwrap();
        let store = ConfigStore::new(env_with_home(&empty, &[(API_KEY_VAR, "")]));
        assert_eq!(store.api_key(), None);
    }

    #[test]
    fn test_unconfigured_when_nothing_present() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(env_with_home(&dir, &[]));

        assert_eq!(store.api_key(), None);
        assert_eq!(store.api_user(), None);
        assert_eq!(store.api_url(), None);
        assert!(!store.is_configured());
    }

    #[test]
    fn test_is_configured_requires_both() {
        let dir = tempdir().unwrap();

        let only_user = ConfigStore::new(env_with_home(&dir, &[(API_USER_VAR, "user")]));
        assert!(!only_user.is_configured());

        let only_key = ConfigStore::new(env_with_home(&dir, &[(API_KEY_VAR, "key")]));
        assert!(!only_key.is_configured());
    }

    #[test]
    fn test_corrupt_file_degrades_to_unconfigured() {
        let dir = tempdir().unwrap();
        write_config(&dir, "not valid json{{{");

        let store = ConfigStore::new(env_with_home(&dir, &[]));
        assert_eq!(store.api_key(), None);
        assert!(!store.is_configured());

        let dir = tempdir().unwrap();
        write_config(&dir, r#"["api_key", "api_user"]"#);
        let store = ConfigStore::new(env_with_home(&dir, &[]));
        assert_eq!(store.api_user(), None);
    }

    #[test]
    fn test_save_round_trips_through_fresh_store() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(env_with_home(&dir, &[]));
        store
            .save("saved-key", "saved-user", Some("https://custom.api.com"))
            .unwrap();

        let fresh = ConfigStore::new(env_with_home(&dir, &[]));
        assert_eq!(fresh.api_key().as_deref(), Some("saved-key"));
        assert_eq!(fresh.api_user().as_deref(), Some("saved-user"));
        assert_eq!(fresh.api_url().as_deref(), Some("https://custom.api.com"));
    }

    #[test]
    fn test_save_without_url_omits_it() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(env_with_home(&dir, &[]));
        store.save("key", "user", Some("https://old.api.com")).unwrap();
        store.save("key", "user", None).unwrap();

        let raw = fs::read_to_string(store.config_path()).unwrap();
        let value: Value = serde_json::from_str(&raw).unwrap();
        assert!(value.get("api_url").is_none());
        assert!(raw.ends_with('\n'));

        let fresh = ConfigStore::new(env_with_home(&dir, &[]));
        assert_eq!(fresh.api_url(), None);
    }

    #[test]
    fn test_save_resets_cached_config() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(env_with_home(&dir, &[]));
        assert_eq!(store.api_key(), None);

        store.save("new-key", "new-user", None).unwrap();

        assert_eq!(store.api_key().as_deref(), Some("new-key"));
        assert_eq!(store.api_user().as_deref(), Some("new-user"));
    }

    #[test]
    fn test_config_path_is_under_home() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(env_with_home(&dir, &[]));

        assert_eq!(
            store.config_path(),
            dir.path().join(".config").join("dn").join("config.json")
        );
    }

    #[test]
    fn test_userprofile_used_without_home() {
        let dir = tempdir().unwrap();
        let env = HashMap::from([(
            "USERPROFILE".to_string(),
            dir.path().to_string_lossy().into_owned(),
        )]);

        assert_eq!(
            default_config_path(&env),
            dir.path().join(".config").join("dn").join("config.json")
        );
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(env_with_home(&dir, &[]));
        store.save("key", "user", None).unwrap();

        assert!(!temp_path(store.config_path()).exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_save_sets_restrictive_permissions() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(env_with_home(&dir, &[]));
        store.save("secret-key", "secret-user", None).unwrap();

        assert_eq!(mode(store.config_path()), 0o600);
        assert_eq!(mode(store.config_path().parent().unwrap()), 0o700);
    }

    #[cfg(unix)]
    #[test]
    fn test_overwrite_tightens_loose_existing_file() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        write_config(&dir, r#"{"api_key": "old-key", "api_user": "old-user"}"#);
        let path = dir.path().join(CONFIG_DIR).join(CONFIG_FILE);
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        let store = ConfigStore::new(env_with_home(&dir, &[]));
        store.save("new-key", "new-user", None).unwrap();

        assert_eq!(mode(&path), 0o600);
        assert_eq!(store.api_key().as_deref(), Some("new-key"));

        store.save("newer-key", "newer-user", None).unwrap();
        assert_eq!(mode(&path), 0o600);
    }

    #[cfg(unix)]
    #[test]
    fn test_save_failure_propagates_and_keeps_old_file() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let store = ConfigStore::new(env_with_home(&dir, &[]));
        store.save("old-key", "old-user", None).unwrap();

        let config_dir = store.config_path().parent().unwrap().to_path_buf();
        fs::set_permissions(&config_dir, fs::Permissions::from_mode(0o500)).unwrap();

        // Root ignores directory permissions; only assert when the write is refused
        if let Err(err) = store.save("new-key", "new-user", None) {
            assert!(matches!(err, Error::Config(_)));
            let fresh = ConfigStore::new(env_with_home(&dir, &[]));
            assert_eq!(fresh.api_key().as_deref(), Some("old-key"));
        }

        fs::set_permissions(&config_dir, fs::Permissions::from_mode(0o700)).unwrap();
    }
}
