//! LocalStorage 封装模块
//!
//! 只保存界面偏好（语言、上次的用户名），不保存密码或会话。

const LANGUAGE_KEY: &str = "masktronic_language";
const LAST_USERNAME_KEY: &str = "masktronic_last_username";

/// 本地存储操作封装
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// 键不存在或存储不可用时返回 `None`
    pub fn get(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    pub fn set(key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }
}

/// 用户偏好
pub struct Preferences;

impl Preferences {
    pub fn language() -> Option<String> {
        LocalStorage::get(LANGUAGE_KEY)
    }

    pub fn save_language(language: &str) {
        if !LocalStorage::set(LANGUAGE_KEY, language) {
            masktronic::log_warn!("[Storage] Could not persist language preference");
        }
    }

    pub fn last_username() -> Option<String> {
        LocalStorage::get(LAST_USERNAME_KEY)
    }

    pub fn save_last_username(username: &str) {
        if !LocalStorage::set(LAST_USERNAME_KEY, username) {
            masktronic::log_warn!("[Storage] Could not persist last username");
        }
    }
}
