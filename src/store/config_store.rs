// ==========================================
// 模块化厨房配置系统 - 配置存储
// ==========================================
// 职责: 键值配置的读写、快照与变更通知
// 存储: config_kv 表 (scope + key + value)
// ==========================================
// 说明: 管线核心不直接依赖存储;UI 通过变更通知
//       重新调用 recompute,存储只是注入边界
// ==========================================

use crate::domain::config::KitchenConfig;
use rusqlite::{params, Connection};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// 默认 busy_timeout (毫秒)
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// 一次提交的键值补丁
pub type StorePatch = Vec<(String, String)>;

type Subscriber = Box<dyn Fn(&StorePatch) + Send + Sync>;

// ==========================================
// 存储错误
// ==========================================
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("数据库错误: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("锁获取失败: {0}")]
    Lock(String),
}

/// 默认存储文件路径 (数据目录下)
pub fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("kitchen-configurator")
        .join("config.db")
}

/// 配置 SQLite 连接的统一 PRAGMA
///
/// foreign_keys 与 busy_timeout 需要每个连接单独设置
fn configure_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

// ==========================================
// ConfigStore - 配置存储
// ==========================================
pub struct ConfigStore {
    conn: Arc<Mutex<Connection>>,
    subscribers: Mutex<Vec<Subscriber>>,
}

impl ConfigStore {
    /// 打开 (或创建) 文件存储
    pub fn open(db_path: &str) -> Result<Self, StoreError> {
        let conn = Connection::open(db_path)?;
        Self::from_connection(conn)
    }

    /// 内存存储 (测试与演算场景)
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        configure_connection(&conn)?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS config_kv (
                scope_id TEXT NOT NULL,
                key      TEXT NOT NULL,
                value    TEXT NOT NULL,
                PRIMARY KEY (scope_id, key)
            );",
        )?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            subscribers: Mutex::new(Vec::new()),
        })
    }

    /// 读取单键 (scope_id='global')
    pub fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let conn = self.lock_conn()?;
        let result = conn.query_row(
            "SELECT value FROM config_kv WHERE scope_id = 'global' AND key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        );

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(StoreError::Database(e)),
        }
    }

    /// 提交键值补丁 (UPSERT),提交成功后触发变更通知
    pub fn set_patch(&self, patch: &StorePatch) -> Result<(), StoreError> {
        if patch.is_empty() {
            return Ok(());
        }

        {
            let conn = self.lock_conn()?;
            conn.execute("BEGIN TRANSACTION", [])?;
            for (key, value) in patch {
                conn.execute(
                    "INSERT INTO config_kv (scope_id, key, value) VALUES ('global', ?1, ?2)
                     ON CONFLICT(scope_id, key) DO UPDATE SET value = ?2",
                    params![key, value],
                )?;
            }
            conn.execute("COMMIT", [])?;
        }

        debug!(keys = patch.len(), "配置补丁已提交,触发变更通知");
        self.notify(patch);
        Ok(())
    }

    /// 全量快照 (scope_id='global')
    pub fn snapshot(&self) -> Result<HashMap<String, String>, StoreError> {
        let conn = self.lock_conn()?;
        let mut stmt = conn
            .prepare("SELECT key, value FROM config_kv WHERE scope_id = 'global' ORDER BY key")?;

        let mut map = HashMap::new();
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;
        for row in rows {
            let (key, value) = row?;
            map.insert(key, value);
        }
        Ok(map)
    }

    /// 从快照载入规范配置 (别名在载入边界收敛)
    pub fn load_config(&self) -> Result<KitchenConfig, StoreError> {
        Ok(KitchenConfig::from_kv_snapshot(&self.snapshot()?))
    }

    /// 订阅变更通知
    ///
    /// 回调在补丁提交之后同步触发;典型用法是
    /// 在回调里重新载入配置并调用 recompute
    pub fn subscribe(&self, subscriber: impl Fn(&StorePatch) + Send + Sync + 'static) {
        if let Ok(mut subs) = self.subscribers.lock() {
            subs.push(Box::new(subscriber));
        }
    }

    fn notify(&self, patch: &StorePatch) {
        if let Ok(subs) = self.subscribers.lock() {
            for sub in subs.iter() {
                sub(patch);
            }
        }
    }

    fn lock_conn(&self) -> Result<std::sync::MutexGuard<'_, Connection>, StoreError> {
        self.conn
            .lock()
            .map_err(|e| StoreError::Lock(e.to_string()))
    }
}
