//! StorageEngine — owns ConnectionPool, implements PostStore + UserStore,
//! startup pragma configuration and migrations.

use std::path::Path;

use ublog_core::errors::UblogResult;
use ublog_core::models::{Cursor, Post, User};
use ublog_core::traits::{PageSnapshot, PostStore, UserStore};

use crate::migrations;
use crate::pool::ConnectionPool;

/// The durable ordered post store. Owns the connection pool and
/// provides the full PostStore + UserStore interface.
pub struct StorageEngine {
    pool: ConnectionPool,
    /// When true, use the read pool for read operations (file-backed
    /// mode). When false, route all reads through the writer
    /// (in-memory mode, because in-memory read pool connections are
    /// isolated databases).
    use_read_pool: bool,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk.
    pub fn open(path: &Path, read_pool_size: usize) -> UblogResult<Self> {
        let pool = ConnectionPool::open(path, read_pool_size)?;
        let engine = Self {
            pool,
            use_read_pool: true,
        };
        engine.initialize()?;
        Ok(engine)
    }

    /// Open an in-memory storage engine (for testing). Routes all reads
    /// through the writer since in-memory read pool connections are
    /// isolated databases that can't see the writer's changes.
    pub fn open_in_memory() -> UblogResult<Self> {
        let pool = ConnectionPool::open_in_memory(1)?;
        let engine = Self {
            pool,
            use_read_pool: false,
        };
        engine.initialize()?;
        Ok(engine)
    }

    /// Run migrations on the writer.
    fn initialize(&self) -> UblogResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| migrations::run_migrations(conn))
    }

    /// Get a reference to the connection pool (for advanced operations).
    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    /// Execute a read-only query on the best available connection.
    fn with_reader<F, T>(&self, f: F) -> UblogResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> UblogResult<T>,
    {
        if self.use_read_pool {
            self.pool.readers.with_conn(f)
        } else {
            self.pool.writer.with_conn_sync(f)
        }
    }
}

impl PostStore for StorageEngine {
    fn create(&self, post: &Post) -> UblogResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| crate::queries::post_crud::insert_post(conn, post))
    }

    fn get(&self, id: &str) -> UblogResult<Option<Post>> {
        self.with_reader(|conn| crate::queries::post_crud::get_post(conn, id))
    }

    fn update(&self, post: &Post) -> UblogResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| crate::queries::post_crud::update_post(conn, post))
    }

    fn delete(&self, id: &str) -> UblogResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| crate::queries::post_crud::delete_post(conn, id))
    }

    fn snapshot_page(&self, limit: u32, cursor: Option<&Cursor>) -> UblogResult<PageSnapshot> {
        self.with_reader(|conn| crate::queries::post_page::snapshot_page(conn, limit, cursor))
    }

    fn count(&self) -> UblogResult<u64> {
        self.with_reader(crate::queries::post_page::count_posts)
    }
}

impl UserStore for StorageEngine {
    fn create_user(&self, user: &User) -> UblogResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| crate::queries::user_ops::insert_user(conn, user))
    }

    fn get_user(&self, id: &str) -> UblogResult<Option<User>> {
        self.with_reader(|conn| crate::queries::user_ops::get_user(conn, id))
    }
}
