//! 路由定义模块 - 领域模型
//!
//! `Route` 是导航的最小单位：当前显示的屏幕、界面语言以及可选的子动作（标签页）。
//! 地址栏 hash 的编码与解析也集中在这里，浏览器前进/后退与手动修改 hash
//! 都经过同一个解析器。

use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub const DEFAULT_LANGUAGE: &str = "pl";
pub const DEFAULT_ACTION: &str = "default";

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_action() -> String {
    DEFAULT_ACTION.to_string()
}

/// 导航目标
///
/// 一旦进入历史记录即不可变，每次导航都会生成新的 `Route` 替换当前路由。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub view: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_action")]
    pub action: String,
}

impl Route {
    pub fn new(view: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            view: view.into(),
            language: language.into(),
            action: default_action(),
        }
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    /// 校验路由：`view` 必须是非空字符串
    pub fn validate(&self) -> Result<(), String> {
        if self.view.trim().is_empty() {
            return Err("route.view must be a non-empty string".to_string());
        }
        Ok(())
    }

    /// 已知屏幕（未知 view 返回 None）
    pub fn screen(&self) -> Option<Screen> {
        Screen::from_view(&self.view)
    }

    /// 编码为地址栏 hash：`#/{language}/{view}[/{action}]`
    ///
    /// 默认动作不写入 hash。
    pub fn to_hash(&self) -> String {
        if self.action.is_empty() || self.action == DEFAULT_ACTION {
            format!("#/{}/{}", self.language, self.view)
        } else {
            format!("#/{}/{}/{}", self.language, self.view, self.action)
        }
    }

    /// 从地址栏 hash 解析路由
    ///
    /// 接受 `#/pl/login-screen`、`#/pl/user-menu-screen/reports`，
    /// 只有一段时视为 view 并使用默认语言。空 hash 返回 None。
    pub fn from_hash(hash: &str) -> Option<Self> {
        let trimmed = hash.trim_start_matches('#').trim_start_matches('/');
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => None,
            [view] => Some(Self::new(*view, DEFAULT_LANGUAGE)),
            [language, view] => Some(Self::new(*view, *language)),
            [language, view, action, ..] => Some(Self::new(*view, *language).with_action(*action)),
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hash())
    }
}

/// 应用屏幕枚举
///
/// 屏幕的 DOM id 与路由的 `view` 相同。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Screen {
    /// 登录页面 (默认屏幕)
    #[default]
    Login,
    /// 角色菜单
    UserMenu,
    /// 系统设置
    System,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Login, Screen::UserMenu, Screen::System];

    pub fn from_view(view: &str) -> Option<Self> {
        match view {
            "login-screen" => Some(Self::Login),
            "user-menu-screen" => Some(Self::UserMenu),
            "system-screen" => Some(Self::System),
            _ => None,
        }
    }

    pub fn view_id(&self) -> &'static str {
        match self {
            Self::Login => "login-screen",
            Self::UserMenu => "user-menu-screen",
            Self::System => "system-screen",
        }
    }

    /// 定义该屏幕是否需要登录
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Self::Login)
    }

    pub fn route(&self, language: &str) -> Route {
        Route::new(self.view_id(), language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_omits_default_action() {
        let route = Route::new("login-screen", "pl");
        assert_eq!(route.to_hash(), "#/pl/login-screen");

        let route = route.with_action("reports");
        assert_eq!(route.to_hash(), "#/pl/login-screen/reports");
    }

    #[test]
    fn test_from_hash_variants() {
        assert_eq!(Route::from_hash(""), None);
        assert_eq!(Route::from_hash("#/"), None);

        let only_view = Route::from_hash("#system-screen").unwrap();
        assert_eq!(only_view.view, "system-screen");
        assert_eq!(only_view.language, DEFAULT_LANGUAGE);

        let full = Route::from_hash("#/en/user-menu-screen/workshop").unwrap();
        assert_eq!(full.language, "en");
        assert_eq!(full.view, "user-menu-screen");
        assert_eq!(full.action, "workshop");
    }

    #[test]
    fn test_hash_is_parsed_back() {
        let route = Route::new("user-menu-screen", "en").with_action("users");
        assert_eq!(Route::from_hash(&route.to_hash()), Some(route));
    }

    #[test]
    fn test_validate_rejects_blank_view() {
        assert!(Route::new("", "pl").validate().is_err());
        assert!(Route::new("   ", "pl").validate().is_err());
        assert!(Route::new("login-screen", "pl").validate().is_ok());
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let route: Route = serde_json::from_str(r#"{"view":"system-screen"}"#).unwrap();
        assert_eq!(route.language, DEFAULT_LANGUAGE);
        assert_eq!(route.action, DEFAULT_ACTION);
    }

    #[test]
    fn test_screen_auth_rules() {
        assert!(!Screen::Login.requires_auth());
        assert!(Screen::UserMenu.requires_auth());
        for screen in Screen::ALL {
            assert_eq!(Screen::from_view(screen.view_id()), Some(screen));
        }
        assert_eq!(Screen::from_view("reports-screen"), None);
    }
}
