// src/domain/services/clock.rs
use chrono::{DateTime, Utc};
use std::fmt::Debug;

/// Source of the fallback timestamp for items without `createdAt`
pub trait Clock: Send + Sync + Debug {
    fn now(&self) -> DateTime<Utc>;

    fn now_secs(&self) -> i64 {
        self.now().timestamp()
    }
}
