//! 配置文档类型
//!
//! 对应 `/config/app.json`、`/config/menu.json`、`/config/router.json`。
//! 加载器在校验与后处理之后再反序列化为这些类型，因此可选字段都已带上默认值。

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

fn default_theme() -> String {
    "default".to_string()
}

fn default_route() -> String {
    "/".to_string()
}

/// `app.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub app_name: String,
    pub version: String,
    pub language: String,
    #[serde(default)]
    pub supported_languages: Vec<String>,
    #[serde(default)]
    pub debug: bool,
    #[serde(default = "default_theme")]
    pub theme: String,
}

impl AppConfig {
    pub fn supports_language(&self, language: &str) -> bool {
        self.supported_languages.iter().any(|l| l == language)
    }
}

/// `menu.json` 中的单个菜单项
///
/// 除 `id`/`label`/`view` 以外的字段保留在 `extra` 中。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuConfigItem {
    pub id: Value,
    pub label: String,
    pub view: String,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl MenuConfigItem {
    /// id 可能是数字或字符串，统一转为字符串
    pub fn id_string(&self) -> String {
        match &self.id {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// `menu.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuConfig {
    pub menu_items: Vec<MenuConfigItem>,
    #[serde(default)]
    pub role_restrictions: HashMap<String, Vec<String>>,
}

impl MenuConfig {
    /// 角色允许的菜单 key；未配置限制时返回 None（不过滤）
    pub fn restrictions_for(&self, role: &str) -> Option<&[String]> {
        self.role_restrictions.get(role).map(|v| v.as_slice())
    }
}

/// `router.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouterConfig {
    pub routes: HashMap<String, Value>,
    #[serde(default = "default_route")]
    pub default_route: String,
    #[serde(default)]
    pub supported_languages: Vec<String>,
    #[serde(default)]
    pub case_sensitive: bool,
}

impl RouterConfig {
    /// 按路径查找路由配置，遵守 `case_sensitive`
    pub fn find_route(&self, path: &str) -> Option<&Value> {
        if self.case_sensitive {
            return self.routes.get(path);
        }
        let wanted = path.to_lowercase();
        self.routes
            .iter()
            .find(|(declared, _)| declared.to_lowercase() == wanted)
            .map(|(_, route)| route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_menu_item_keeps_extra_fields() {
        let config: MenuConfig = serde_json::from_value(json!({
            "menu_items": [{"id": 7, "label": "Raporty", "view": "reports", "icon": "chart"}]
        }))
        .unwrap();

        let item = &config.menu_items[0];
        assert_eq!(item.id_string(), "7");
        assert_eq!(item.extra.get("icon"), Some(&json!("chart")));
        assert!(config.restrictions_for("ADMIN").is_none());
    }

    #[test]
    fn test_router_lookup_case_insensitive() {
        let config: RouterConfig = serde_json::from_value(json!({
            "routes": {"/Login": {"view": "login-screen"}}
        }))
        .unwrap();

        assert_eq!(config.default_route, "/");
        assert!(config.find_route("/login").is_some());

        let strict = RouterConfig {
            case_sensitive: true,
            ..config
        };
        assert!(strict.find_route("/login").is_none());
        assert!(strict.find_route("/Login").is_some());
    }
}
