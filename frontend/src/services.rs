//! 应用服务
//!
//! 导航、配置、菜单与翻译服务在 `App` 中构造一次，通过 Context 共享，不挂在 window 上。
//! 服务内部使用 `Rc`，因此以 `StoredValue::new_local` 的形式放进 Context。

use leptos::prelude::*;
use masktronic::config::{ConfigEvent, ConfigLoader};
use masktronic::i18n::I18nManager;
use masktronic::menu::MenuManager;
use masktronic::navigation::{NavigateOptions, NavigationManager};
use masktronic::{ConsoleResult, log_error, log_warn};
use masktronic_shared::{Route, Screen};
use std::rc::Rc;

use crate::auth::AuthContext;
use crate::guards::{AuthGuard, TranslationApplier};
use crate::web::router::SignalScreenHost;
use crate::web::{BrowserHttpClient, BrowserRuntime, Preferences};

pub type Navigator = NavigationManager<SignalScreenHost, BrowserRuntime>;
pub type Configs = ConfigLoader<BrowserHttpClient, BrowserRuntime>;

/// 可响应的界面状态
#[derive(Clone, Copy)]
pub struct UiState {
    /// 当前界面语言，组件按它重新渲染文本
    pub language: RwSignal<String>,
    /// 每次配置加载或变化时递增
    pub config_revision: RwSignal<u32>,
}

impl UiState {
    pub fn new(language: &str) -> Self {
        Self {
            language: RwSignal::new(language.to_string()),
            config_revision: RwSignal::new(0),
        }
    }
}

#[derive(Clone)]
pub struct Services {
    pub nav: Navigator,
    pub config: Configs,
    pub menu: Rc<MenuManager>,
    pub i18n: Rc<I18nManager>,
    pub ui: UiState,
    pub auth: AuthContext,
}

impl Services {
    pub fn new(host: SignalScreenHost, ui: UiState, auth: AuthContext) -> Self {
        let nav = NavigationManager::new(host, BrowserRuntime);
        let config = ConfigLoader::new(BrowserHttpClient, BrowserRuntime);
        let i18n = Rc::new(I18nManager::with_language(&ui.language.get_untracked()));

        // 守卫先于翻译：被拦截的导航不需要重新翻译
        nav.add_listener(Rc::new(AuthGuard::new(auth, nav.clone())));
        nav.add_listener(Rc::new(TranslationApplier::new(i18n.clone(), ui)));

        config.add_config_listener(move |name: &str, event: &ConfigEvent<'_>| {
            match event {
                ConfigEvent::Loaded(_) | ConfigEvent::Changed(_) => {
                    ui.config_revision.update(|rev| *rev += 1);
                }
                ConfigEvent::Error(e) => log_warn!("[App] Config '{}' unavailable: {}", name, e),
            }
            Ok(())
        });

        Self {
            nav,
            config,
            menu: Rc::new(MenuManager::with_default_handlers()),
            i18n,
            ui,
            auth,
        }
    }

    /// 当前语言下的路由
    pub fn route_to(&self, screen: Screen) -> Route {
        screen.route(&self.ui.language.get_untracked())
    }

    /// 切换界面语言：写入偏好并以新语言替换当前路由
    pub async fn change_language(&self, language: &str) -> ConsoleResult<()> {
        self.i18n.set_language(language)?;
        self.ui.language.set(language.to_string());
        Preferences::save_language(language);

        if let Some(current) = self.nav.current_route() {
            let route = Route {
                language: language.to_string(),
                ..current
            };
            self.nav.replace_route(route).await?;
        }
        Ok(())
    }

    /// 导航并记录失败；界面事件处理器使用
    pub async fn go(&self, route: Route, options: NavigateOptions) {
        if let Err(e) = self.nav.navigate(route, options).await {
            log_error!("[App] Navigation failed: {}", e);
        }
    }
}

/// Context 中的服务句柄；可复制，可以放进响应式闭包
pub type ServiceStore = StoredValue<Services, LocalStorage>;

pub fn provide_services(services: Services) -> ServiceStore {
    let store = StoredValue::new_local(services);
    provide_context(store);
    store
}

pub fn use_service_store() -> ServiceStore {
    expect_context::<ServiceStore>()
}
