//! MASKTRONIC C20 共享领域模型
//!
//! 前端与核心引擎共用的纯数据类型，不依赖 DOM 或 web_sys。

mod config;
mod date;
mod role;
mod route;

pub use config::{AppConfig, MenuConfig, MenuConfigItem, RouterConfig};
pub use date::Timestamp;
pub use role::{Role, UserSession};
pub use route::{DEFAULT_ACTION, DEFAULT_LANGUAGE, Route, Screen};

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const APP_TITLE: &str = "MASKTRONIC C20";
pub const CONFIG_APP: &str = "app";
pub const CONFIG_MENU: &str = "menu";
pub const CONFIG_ROUTER: &str = "router";
