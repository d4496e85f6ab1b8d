//! AppContext — explicit per-process state.
//!
//! No global singletons: one context is constructed at startup,
//! threaded into every handler call, and torn down explicitly at
//! shutdown.

use std::path::Path;

use ublog_core::config::UblogConfig;
use ublog_core::errors::UblogResult;
use ublog_core::models::{Cursor, MutationResult, PageOutcome, Post, User};
use ublog_session::SessionStore;
use ublog_storage::StorageEngine;

use crate::mutations::{self, PostInput};
use crate::paginator;
use crate::queries;

/// Everything a handler entry point needs: the durable store, the
/// session collaborator, and configuration.
pub struct AppContext {
    pub store: StorageEngine,
    pub sessions: SessionStore,
    pub config: UblogConfig,
}

impl AppContext {
    /// Open a context backed by a database file.
    pub fn open(path: &Path, config: UblogConfig) -> UblogResult<Self> {
        let store = StorageEngine::open(path, config.storage.read_pool_size)?;
        let sessions = SessionStore::new(config.session.ttl_secs);
        Ok(Self {
            store,
            sessions,
            config,
        })
    }

    /// Open an in-memory context (for testing).
    pub fn open_in_memory(config: UblogConfig) -> UblogResult<Self> {
        let store = StorageEngine::open_in_memory()?;
        let sessions = SessionStore::new(config.session.ttl_secs);
        Ok(Self {
            store,
            sessions,
            config,
        })
    }

    /// Tear the context down. Sessions and connections drop here;
    /// nothing outlives the context.
    pub fn shutdown(self) {
        drop(self);
    }

    // Query surface.

    pub fn fetch_page(&self, limit: u32, cursor: Option<&Cursor>) -> PageOutcome {
        paginator::fetch_page(
            &self.store,
            self.config.pagination.max_page_limit,
            limit,
            cursor,
        )
    }

    pub fn get_post(&self, id: &str) -> UblogResult<Option<Post>> {
        queries::get_post(&self.store, id)
    }

    pub fn get_author(&self, post: &Post) -> UblogResult<Option<User>> {
        queries::get_author(&self.store, post)
    }

    pub fn current_user(&self, token: &str) -> UblogResult<Option<User>> {
        queries::current_user(&self.store, &self.sessions, token)
    }

    // Mutation surface.

    pub fn create_post(&self, token: &str, input: &PostInput) -> UblogResult<MutationResult> {
        mutations::create_post(&self.store, &self.sessions, token, input)
    }

    pub fn update_post(
        &self,
        token: &str,
        id: &str,
        input: &PostInput,
    ) -> UblogResult<MutationResult> {
        mutations::update_post(&self.store, &self.sessions, token, id, input)
    }

    pub fn delete_post(&self, token: &str, id: &str) -> UblogResult<MutationResult> {
        mutations::delete_post(&self.store, &self.sessions, token, id)
    }

    pub fn logout(&self, token: &str) -> bool {
        mutations::logout(&self.sessions, token)
    }
}
