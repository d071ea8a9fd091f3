//! 时间类型模块
//!
//! `Timestamp`: 可序列化的毫秒时间戳，用于缓存 TTL、历史记录与界面显示。
//! 获取当前时间由平台决定（浏览器用 `Date.now()`，测试用模拟时钟），这里只负责运算。

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};
use std::time::Duration;

/// 毫秒时间戳
///
/// 内部存储为 `i64`，表示自 Unix 纪元以来的毫秒数
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    #[inline]
    pub const fn new(ms: i64) -> Self {
        Self(ms)
    }

    #[inline]
    pub const fn as_millis(&self) -> i64 {
        self.0
    }

    /// 从当前时间起已经过去的时长（时钟回拨时为 0）
    #[inline]
    pub fn elapsed_since(&self, now: Timestamp) -> Duration {
        now - *self
    }

    /// RFC 3339 格式（UTC），无法表示时返回原始毫秒数
    pub fn to_rfc3339(&self) -> String {
        DateTime::<Utc>::from_timestamp_millis(self.0)
            .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Secs, true))
            .unwrap_or_else(|| self.0.to_string())
    }
}

impl From<i64> for Timestamp {
    fn from(ms: i64) -> Self {
        Self(ms)
    }
}

impl From<Timestamp> for i64 {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

impl Add<Duration> for Timestamp {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self::Output {
        Self(self.0 + rhs.as_millis() as i64)
    }
}

impl Sub<Timestamp> for Timestamp {
    type Output = Duration;

    /// 计算两个时间戳之间的差值（返回 Duration）
    fn sub(self, rhs: Timestamp) -> Self::Output {
        let diff_ms = (self.0 - rhs.0).max(0);
        Duration::from_millis(diff_ms as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_saturates_on_clock_skew() {
        let earlier = Timestamp::new(1_000);
        let later = earlier + Duration::from_secs(2);
        assert_eq!(earlier.elapsed_since(later), Duration::from_secs(2));
        assert_eq!(later.elapsed_since(earlier), Duration::ZERO);
    }

    #[test]
    fn test_rfc3339() {
        assert_eq!(Timestamp::new(0).to_rfc3339(), "1970-01-01T00:00:00Z");
    }
}
