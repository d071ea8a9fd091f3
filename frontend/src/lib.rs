//! MASKTRONIC C20 控制台前端
//!
//! 采用 Context-Driven 架构：
//! - `services`: 导航、配置、菜单与翻译服务（核心引擎的浏览器实例）
//! - `web::router`: 屏幕宿主与地址栏监听
//! - `guards`: 导航监听器（认证守卫、选择器翻译）
//! - `auth`: 认证状态管理
//! - `components`: UI 组件层

mod auth;
mod components;
mod guards;
mod serde_helper;
mod services;

use crate::auth::AuthContext;
use crate::components::login::LoginPage;
use crate::components::system::SystemPage;
use crate::components::user_menu::UserMenuPage;
use crate::services::{Services, UiState, provide_services};

use leptos::prelude::*;
use leptos::task::spawn_local;
use masktronic::config::LoadOptions;
use masktronic::navigation::NavigateOptions;
use masktronic::{log_error, log_info, log_warn};
use masktronic_shared::{CONFIG_APP, CONFIG_MENU, CONFIG_ROUTER, DEFAULT_LANGUAGE, Route, Screen};
use std::time::Duration;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
// 以减小 WASM 二进制体积。
pub(crate) mod web {
    mod http;
    pub mod router;
    mod storage;
    pub mod timer;

    pub use http::BrowserHttpClient;
    pub use storage::Preferences;
    pub use timer::BrowserRuntime;
}

use web::Preferences;
use web::router::{RouterOutlet, SignalScreenHost, current_hash, init_location_listeners};

/// 菜单配置的轮询间隔
const MENU_WATCH_INTERVAL: Duration = Duration::from_secs(60);

/// 屏幕匹配函数
fn route_matcher(screen: Screen) -> AnyView {
    match screen {
        Screen::Login => view! { <LoginPage /> }.into_any(),
        Screen::UserMenu => view! { <UserMenuPage /> }.into_any(),
        Screen::System => view! { <SystemPage /> }.into_any(),
    }
}

/// 启动流程：加载配置，确定语言，再导航到地址栏指向的屏幕
async fn bootstrap(services: Services, saved_language: bool) {
    let options = LoadOptions {
        allow_partial_load: true,
        ..LoadOptions::default()
    };
    match services
        .config
        .load_configs(&[CONFIG_APP, CONFIG_MENU, CONFIG_ROUTER], options)
        .await
    {
        Ok(batch) => {
            for (name, e) in &batch.errors {
                log_warn!("[App] Starting without '{}': {}", name, e);
            }
        }
        Err(e) => log_error!("[App] Config bootstrap failed: {}", e),
    }

    // 没有保存的偏好时采用 app.json 中的默认语言
    if !saved_language {
        if let Some(language) = services
            .config
            .get_config_value(CONFIG_APP, "language")
            .and_then(|v| v.as_str().map(str::to_string))
        {
            if services.i18n.set_language(&language).is_ok() {
                services.ui.language.set(language);
            }
        }
    }

    let initial = Route::from_hash(&current_hash()).unwrap_or_else(|| services.route_to(Screen::Login));
    log_info!("[App] Starting at {}", initial.to_hash());
    services.go(initial, NavigateOptions::replace()).await;

    spawn_local(services.config.watch_config(CONFIG_MENU, MENU_WATCH_INTERVAL).run());
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 界面语言：保存的偏好优先
    let saved = Preferences::language();
    let saved_language = saved.is_some();
    let ui = UiState::new(saved.as_deref().unwrap_or(DEFAULT_LANGUAGE));
    provide_context(ui);

    // 2. 认证上下文与屏幕宿主
    let auth = AuthContext::new();
    provide_context(auth);
    let host = SignalScreenHost::new();
    provide_context(host);

    // 3. 服务只构造一次，经 Context 共享
    let services = Services::new(host, ui, auth);
    provide_services(services.clone());

    // 4. 浏览器后退/前进
    init_location_listeners(services.nav.clone());

    spawn_local(bootstrap(services, saved_language));

    view! { <RouterOutlet matcher=route_matcher /> }
}
