//! Key-value store access for the schemaless request flows.
//!
//! Moving, technical-service and sell/pickup requests are stored as JSON
//! values under a per-flow key prefix. The store offers no range query;
//! callers scan a prefix and filter client-side.

use redis::{AsyncCommands, Client};

use crate::error::{AppError, AppResult};

#[derive(Clone)]
pub struct KvStore {
    client: Client,
}

impl KvStore {
    /// Create a new store handle and verify the connection
    pub async fn new(url: &str) -> AppResult<Self> {
        let client = Client::open(url)
            .map_err(|e| AppError::Store(format!("Failed to create Redis client: {}", e)))?;

        let mut conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| AppError::Store(format!("Failed to connect to Redis: {}", e)))?;

        redis::cmd("PING")
            .query_async::<_, String>(&mut conn)
            .await
            .map_err(|e| AppError::Store(format!("Redis connection test failed: {}", e)))?;

        Ok(Self { client })
    }

    /// Fetch every JSON value stored under the given key prefix.
    /// Keys that disappear between SCAN and MGET are silently dropped.
    pub async fn scan_prefix(&self, prefix: &str) -> AppResult<Vec<String>> {
        let mut conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| AppError::Store(format!("Failed to get Redis connection: {}", e)))?;

        let pattern = format!("{}*", prefix);
        let keys: Vec<String> = {
            let mut iter = conn
                .scan_match::<_, String>(&pattern)
                .await
                .map_err(|e| AppError::Store(format!("SCAN failed for {}: {}", pattern, e)))?;
            let mut keys = Vec::new();
            while let Some(key) = iter.next_item().await {
                keys.push(key);
            }
            keys
        };

        if keys.is_empty() {
            return Ok(Vec::new());
        }

        let values: Vec<Option<String>> = redis::cmd("MGET")
            .arg(&keys)
            .query_async(&mut conn)
            .await
            .map_err(|e| AppError::Store(format!("MGET failed for {}: {}", pattern, e)))?;

        Ok(values.into_iter().flatten().collect())
    }
}
