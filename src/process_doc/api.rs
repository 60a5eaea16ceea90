//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for
//! clients. It owns the store and the effective configuration, dispatches to
//! [`commands::process`], and returns structured results. It never prints.
//!
//! `ProcessApi<S: ReportStore>` is generic over storage:
//! - Production: `ProcessApi<FileStore>`
//! - Testing: `ProcessApi<InMemoryStore>`

use crate::commands;
use crate::config::ProcessConfig;
use crate::error::Result;
use crate::model::ProcessRequest;
use crate::store::ReportStore;

pub struct ProcessApi<S: ReportStore> {
    store: S,
    config: ProcessConfig,
}

impl<S: ReportStore> ProcessApi<S> {
    pub fn new(store: S, config: ProcessConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &ProcessConfig {
        &self.config
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }

    /// Copy or fabricate the report for `request`.
    pub fn process(&mut self, request: &ProcessRequest) -> Result<commands::CmdResult> {
        commands::process::run(&mut self.store, &self.config, request)
    }
}
