//! Test doubles for the runner and UI capabilities

use crate::catalog::ComponentOption;
use crate::exec::{CommandRunner, Invocation, ProcessOutput};
use crate::ui::{Prompter, Reporter};
use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::io;
use std::sync::{Arc, Mutex};

enum Scripted {
    Output(ProcessOutput),
    SpawnError,
}

#[derive(Default)]
struct RunnerState {
    calls: Vec<Invocation>,
    responses: HashMap<String, Scripted>,
}

/// Records invocations; answers with scripted outputs keyed by command line,
/// or a successful empty output.
#[derive(Clone, Default)]
pub struct RecordingRunner {
    state: Arc<Mutex<RunnerState>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, command: &str, output: ProcessOutput) {
        self.state
            .lock()
            .unwrap()
            .responses
            .insert(command.to_string(), Scripted::Output(output));
    }

    /// Make `command` exit with status 1 and `stderr`
    pub fn fail(&self, command: &str, stderr: &str) {
        self.respond(
            command,
            ProcessOutput {
                exit_code: Some(1),
                stdout: String::new(),
                stderr: stderr.to_string(),
            },
        );
    }

    pub fn fail_spawn(&self, command: &str) {
        self.state
            .lock()
            .unwrap()
            .responses
            .insert(command.to_string(), Scripted::SpawnError);
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls().iter().map(ToString::to_string).collect()
    }
}

#[async_trait]
impl CommandRunner for RecordingRunner {
    async fn run(&self, invocation: &Invocation) -> io::Result<ProcessOutput> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(invocation.clone());

        match state.responses.get(&invocation.to_string()) {
            Some(Scripted::Output(output)) => Ok(output.clone()),
            Some(Scripted::SpawnError) => Err(io::Error::new(
                io::ErrorKind::NotFound,
                "No such file or directory",
            )),
            None => Ok(ProcessOutput {
                exit_code: Some(0),
                ..ProcessOutput::default()
            }),
        }
    }
}

/// Everything a flow reported, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Intro(String),
    Info(String),
    Warning(String),
    Error(String),
    DryRun(String),
    StepStart(String),
    StepDone(String),
    StepFailed(String),
    NextSteps(Vec<String>),
    Outro(String),
}

#[derive(Default)]
pub struct RecordingReporter {
    notices: RefCell<Vec<Notice>>,
}

impl RecordingReporter {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    pub fn dry_runs(&self) -> Vec<String> {
        self.notices()
            .into_iter()
            .filter_map(|n| match n {
                Notice::DryRun(command) => Some(command),
                _ => None,
            })
            .collect()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.notices()
            .into_iter()
            .filter_map(|n| match n {
                Notice::Warning(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    fn push(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}

impl Reporter for RecordingReporter {
    fn intro(&self, title: &str) {
        self.push(Notice::Intro(title.to_string()));
    }

    fn info(&self, message: &str) {
        self.push(Notice::Info(message.to_string()));
    }

    fn warning(&self, message: &str) {
        self.push(Notice::Warning(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.push(Notice::Error(message.to_string()));
    }

    fn dry_run(&self, command: &str) {
        self.push(Notice::DryRun(command.to_string()));
    }

    fn step_start(&self, message: &str) {
        self.push(Notice::StepStart(message.to_string()));
    }

    fn step_done(&self, message: &str) {
        self.push(Notice::StepDone(message.to_string()));
    }

    fn step_failed(&self, message: &str) {
        self.push(Notice::StepFailed(message.to_string()));
    }

    fn next_steps(&self, steps: &[String]) {
        self.push(Notice::NextSteps(steps.to_vec()));
    }

    fn outro(&self, message: &str) {
        self.push(Notice::Outro(message.to_string()));
    }
}

/// Answers prompts from queues; an exhausted queue is an I/O error
#[derive(Default)]
pub struct ScriptedPrompter {
    selections: RefCell<VecDeque<Vec<String>>>,
    confirmations: RefCell<VecDeque<bool>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn select(self, values: &[&str]) -> Self {
        self.selections
            .borrow_mut()
            .push_back(values.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn confirm_with(self, answer: bool) -> Self {
        self.confirmations.borrow_mut().push_back(answer);
        self
    }

    /// Messages passed to `confirm`
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    pub fn selections_left(&self) -> usize {
        self.selections.borrow().len()
    }
}

impl Prompter for ScriptedPrompter {
    fn select_components(&self, _catalog: &[ComponentOption]) -> io::Result<Vec<String>> {
        self.selections
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| io::Error::other("no scripted selection"))
    }

    fn confirm(&self, message: &str, _default: bool) -> io::Result<bool> {
        self.asked.borrow_mut().push(message.to_string());
        self.confirmations
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| io::Error::other("no scripted confirmation"))
    }
}
