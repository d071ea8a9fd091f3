//! 认证模块
//!
//! 会话只存在于内存中。认证守卫通过 `AuthContext` 读取状态，与导航管理器解耦。

use crate::web::Preferences;
use leptos::prelude::*;
use masktronic::{ConsoleError, ConsoleResult, log_info};
use masktronic_shared::{Role, UserSession};

/// 认证上下文
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub session: RwSignal<UserSession>,
    /// 登录表单的预填用户名
    pub last_username: RwSignal<String>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(UserSession::default()),
            last_username: RwSignal::new(Preferences::last_username().unwrap_or_default()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with_untracked(|s| s.is_authenticated)
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

/// 登录（本地会话，不做服务端校验）
///
/// 用户名与密码都不能为空；成功后记住用户名以便下次预填。
pub fn login(ctx: &AuthContext, username: &str, password: &str, role: Role) -> ConsoleResult<()> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(ConsoleError::validation("username and password are required").in_op("auth.login"));
    }

    Preferences::save_last_username(username);
    ctx.last_username.set(username.to_string());
    ctx.session.set(UserSession::authenticated(username, role));
    log_info!("[Auth] {} logged in as {}", username, role);
    Ok(())
}

/// 注销并清除会话；导航由调用方负责
pub fn logout(ctx: &AuthContext) {
    ctx.session.set(UserSession::default());
    log_info!("[Auth] Logged out");
}
