//! Test doubles and common utilities for command contract tests
//!
//! The doubles record everything they see so tests can assert on what a
//! command sent to the registrar and what it showed the operator.

#![allow(dead_code)]

use async_trait::async_trait;
use dn_core::env::{API_KEY_VAR, API_URL_VAR, API_USER_VAR};
use dn_core::error::{Error, Result};
use dn_core::model::{Payload, Request, Response};
use dn_core::traits::{ApiClient, ApiClientFactory, Terminal, TransportConfig};
use dn_core::{CommandContext, ConfigStore, Dispatcher, ExitStatus, Subcommand};
use std::collections::{HashMap, VecDeque};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const TEST_KEY: &str = "key123secret";
pub const TEST_USER: &str = "user456secret";

/// What the stub answers with
#[derive(Clone)]
enum Reply {
    Respond(Response),
    Fail(String),
}

/// ApiClient double returning one canned reply and recording requests
#[derive(Clone)]
pub struct StubApiClient {
    reply: Reply,
    requests: Arc<Mutex<Vec<Request>>>,
}

impl StubApiClient {
    /// Answer every request with `response`
    pub fn responding(response: Response) -> Self {
        Self {
            reply: Reply::Respond(response),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Successful answer without data
    pub fn ok() -> Self {
        Self::responding(Response::ok(Payload::Empty))
    }

    /// Registrar-reported failure
    pub fn rejecting(description: &str) -> Self {
        Self::responding(Response::failure(2400, description))
    }

    /// Transport error with `message`
    pub fn failing(message: &str) -> Self {
        Self {
            reply: Reply::Fail(message.to_string()),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// The single request sent, panicking if there was not exactly one
    pub fn only_request(&self) -> Request {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

#[async_trait]
impl ApiClient for StubApiClient {
    async fn post(&self, request: &Request) -> Result<Response> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.reply {
            Reply::Respond(response) => Ok(response.clone()),
            Reply::Fail(message) => Err(Error::transport(message.clone())),
        }
    }
}

/// Factory double handing out a shared stub and counting builds
#[derive(Clone)]
pub struct StubFactory {
    client: StubApiClient,
    builds: Arc<AtomicUsize>,
}

impl StubFactory {
    pub fn new(client: StubApiClient) -> Self {
        Self {
            client,
            builds: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn build_count(&self) -> usize {
        self.builds.load(Ordering::SeqCst)
    }
}

impl ApiClientFactory for StubFactory {
    fn create(&self, store: &ConfigStore) -> Result<Box<dyn ApiClient>> {
        TransportConfig::from_store(store)?;
        self.builds.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(self.client.clone()))
    }
}

/// Terminal double with scripted answers and recorded output
#[derive(Default)]
pub struct ScriptedTerminal {
    answers: Mutex<VecDeque<String>>,
    confirms: Mutex<VecDeque<bool>>,
    stdin: Mutex<VecDeque<String>>,
    prompts: Mutex<Vec<String>>,
    lines: Mutex<Vec<String>>,
    tables: Mutex<Vec<(Vec<String>, Vec<Vec<String>>)>>,
}

impl ScriptedTerminal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue answers for `ask`/`ask_hidden`, in order
    pub fn with_answers(self, answers: &[&str]) -> Self {
        self.answers
            .lock()
            .unwrap()
            .extend(answers.iter().map(|a| a.to_string()));
        self
    }

    pub fn with_confirm(self, answer: bool) -> Self {
        self.confirms.lock().unwrap().push_back(answer);
        self
    }

    /// Queue raw stdin lines for `read_line`
    pub fn with_stdin(self, lines: &[&str]) -> Self {
        self.stdin
            .lock()
            .unwrap()
            .extend(lines.iter().map(|l| l.to_string()));
        self
    }

    /// Every question asked, in order
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// Every rendered line, tagged with its style, e.g. `[error] ...`
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    /// All rendered text including table cells
    pub fn output(&self) -> String {
        let mut out = self.lines().join("\n");
        for (headers, rows) in self.tables.lock().unwrap().iter() {
            out.push('\n');
            out.push_str(&headers.join(" | "));
            for row in rows {
                out.push('\n');
                out.push_str(&row.join(" | "));
            }
        }
        out
    }

    pub fn tables(&self) -> Vec<(Vec<String>, Vec<Vec<String>>)> {
        self.tables.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.tagged("[error] ")
    }

    pub fn warnings(&self) -> Vec<String> {
        self.tagged("[warning] ")
    }

    pub fn successes(&self) -> Vec<String> {
        self.tagged("[success] ")
    }

    fn tagged(&self, tag: &str) -> Vec<String> {
        self.lines()
            .iter()
            .filter_map(|line| line.strip_prefix(tag).map(str::to_string))
            .collect()
    }

    fn push(&self, tag: &str, message: &str) {
        self.lines
            .lock()
            .unwrap()
            .push(format!("[{}] {}", tag, message));
    }

    fn next_answer(&self, question: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(question.to_string());
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| Error::invalid_input(format!("unexpected prompt: {}", question)))
    }
}

impl Terminal for ScriptedTerminal {
    fn ask(&self, question: &str, default: Option<&str>) -> Result<String> {
        let answer = self.next_answer(question)?;
        match default {
            Some(default) if answer.is_empty() => Ok(default.to_string()),
            _ => Ok(answer),
        }
    }

    fn ask_hidden(&self, question: &str) -> Result<String> {
        self.next_answer(question)
    }

    fn confirm(&self, question: &str, default: bool) -> Result<bool> {
        self.prompts.lock().unwrap().push(question.to_string());
        Ok(self.confirms.lock().unwrap().pop_front().unwrap_or(default))
    }

    fn read_line(&self) -> Result<Option<String>> {
        Ok(self.stdin.lock().unwrap().pop_front())
    }

    fn text(&self, message: &str) {
        self.push("text", message);
    }

    fn title(&self, message: &str) {
        self.push("title", message);
    }

    fn section(&self, message: &str) {
        self.push("section", message);
    }

    fn listing(&self, items: &[String]) {
        for item in items {
            self.push("item", item);
        }
    }

    fn success(&self, message: &str) {
        self.push("success", message);
    }

    fn warning(&self, message: &str) {
        self.push("warning", message);
    }

    fn caution(&self, message: &str) {
        self.push("caution", message);
    }

    fn error(&self, message: &str) {
        self.push("error", message);
    }

    fn table(&self, headers: &[&str], rows: Vec<Vec<String>>) {
        self.tables.lock().unwrap().push((
            headers.iter().map(|h| h.to_string()).collect(),
            rows,
        ));
    }
}

/// Environment with both credentials set
pub fn configured_env() -> HashMap<String, String> {
    HashMap::from([
        (API_KEY_VAR.to_string(), TEST_KEY.to_string()),
        (API_USER_VAR.to_string(), TEST_USER.to_string()),
    ])
}

/// Same as [`configured_env`] plus a custom API URL
pub fn configured_env_with_url(url: &str) -> HashMap<String, String> {
    let mut env = configured_env();
    env.insert(API_URL_VAR.to_string(), url.to_string());
    env
}

/// Store rooted in `dir` with credentials from the environment
pub fn configured_store(dir: &Path) -> ConfigStore {
    ConfigStore::with_path(configured_env(), dir.join("dn").join("config.json"))
}

/// Store rooted in `dir` with nothing configured
pub fn empty_store(dir: &Path) -> ConfigStore {
    ConfigStore::with_path(HashMap::new(), dir.join("dn").join("config.json"))
}

/// Everything a contract test needs to run one command
pub struct Harness {
    pub dir: tempfile::TempDir,
    pub terminal: Arc<ScriptedTerminal>,
    pub factory: StubFactory,
    pub client: StubApiClient,
    pub ctx: CommandContext,
}

impl Harness {
    /// Configured credentials, client built through the factory
    pub fn configured(client: StubApiClient, terminal: ScriptedTerminal) -> Self {
        Self::build(client, terminal, configured_store)
    }

    /// No credentials anywhere
    pub fn unconfigured(client: StubApiClient, terminal: ScriptedTerminal) -> Self {
        Self::build(client, terminal, empty_store)
    }

    /// Custom store built inside the harness' temp dir
    pub fn build(
        client: StubApiClient,
        terminal: ScriptedTerminal,
        store: impl FnOnce(&Path) -> ConfigStore,
    ) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let terminal = Arc::new(terminal);
        let factory = StubFactory::new(client.clone());
        let ctx = CommandContext::new(
            store(dir.path()),
            terminal.clone(),
            Arc::new(factory.clone()),
        );
        Self {
            dir,
            terminal,
            factory,
            client,
            ctx,
        }
    }

    pub async fn run(&self, command: &dyn Subcommand) -> ExitStatus {
        Dispatcher::new().dispatch(&self.ctx, command).await
    }

    /// Parse `args` as typed after `dn` and run the command
    pub async fn run_args(&self, args: &[&str]) -> ExitStatus {
        let argv = std::iter::once("dn").chain(args.iter().copied());
        Dispatcher::new()
            .run_args(&self.ctx, argv)
            .await
            .expect("arguments parse")
    }
}

/// Contact flags that avoid every prompt
pub fn contact_flags() -> Vec<&'static str> {
    vec![
        "--first-name",
        "Jane",
        "--last-name",
        "Doe",
        "--email",
        "jane@example.com",
        "--phone",
        "+1.5551234567",
        "--organization",
        "",
        "--address",
        "1 Main St",
        "--city",
        "Springfield",
        "--state",
        "IL",
        "--postal-code",
        "62701",
        "--country",
        "US",
    ]
}
