use crate::utils::error::Result;
use chrono::{DateTime, Utc};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// 互動輸入來源，`Ok(None)` 代表輸入已結束
pub trait InputSource: Send {
    fn read_line(&mut self) -> Result<Option<String>>;
}

pub trait ConfigProvider: Send + Sync {
    fn total_spaces(&self) -> u32;
    fn rate_per_minute(&self) -> f64;
    fn currency_symbol(&self) -> &str;
}
