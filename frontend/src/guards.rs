//! 导航监听器
//!
//! - `AuthGuard`: 未登录时拦截受保护的屏幕并重定向到登录
//! - `TranslationApplier`: 每次导航后按路由语言重新应用选择器翻译

use async_trait::async_trait;
use leptos::prelude::*;
use leptos::task::spawn_local;
use masktronic::i18n::{BindingTarget, I18nManager};
use masktronic::navigation::{NavigateOptions, NavigationListener, RouteChange};
use masktronic::{ConsoleResult, log_error, log_info, log_warn};
use masktronic_shared::Screen;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsCast;

use crate::auth::AuthContext;
use crate::services::{Navigator, UiState};
use crate::web::timer::sleep;

/// 认证守卫
///
/// 持有导航管理器的克隆用于重定向；两者都活到应用结束。
pub struct AuthGuard {
    auth: AuthContext,
    nav: Navigator,
}

impl AuthGuard {
    pub fn new(auth: AuthContext, nav: Navigator) -> Self {
        Self { auth, nav }
    }
}

#[async_trait(?Send)]
impl NavigationListener for AuthGuard {
    async fn before_navigate(&self, change: &RouteChange) -> ConsoleResult<bool> {
        let protected = change.to.screen().is_some_and(|s| s.requires_auth());
        if !protected || self.auth.is_authenticated() {
            return Ok(true);
        }

        log_info!("[Router] Access Denied. Redirecting to Login.");
        let login = Screen::Login.route(&change.to.language);
        let nav = self.nav.clone();
        // 当前导航结束后才会轮到这次重定向
        spawn_local(async move {
            if let Err(e) = nav.navigate(login, NavigateOptions::replace()).await {
                log_error!("[Router] Redirect to login failed: {}", e);
            }
        });
        Ok(false)
    }
}

/// 选择器翻译
pub struct TranslationApplier {
    i18n: Rc<I18nManager>,
    ui: UiState,
}

impl TranslationApplier {
    pub fn new(i18n: Rc<I18nManager>, ui: UiState) -> Self {
        Self { i18n, ui }
    }

    fn apply_bindings(&self) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        for binding in self.i18n.resolve_bindings() {
            let Ok(nodes) = document.query_selector_all(binding.selector) else {
                continue;
            };
            for index in 0..nodes.length() {
                let Some(element) = nodes
                    .item(index)
                    .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
                else {
                    continue;
                };
                let result = match binding.target {
                    BindingTarget::Text => {
                        element.set_text_content(Some(&binding.text));
                        Ok(())
                    }
                    BindingTarget::Placeholder => element.set_attribute("placeholder", &binding.text),
                    BindingTarget::Title => element.set_attribute("title", &binding.text),
                };
                if let Err(e) = result {
                    log_warn!("[I18n] Could not translate {}: {:?}", binding.selector, e);
                }
            }
        }
    }
}

#[async_trait(?Send)]
impl NavigationListener for TranslationApplier {
    async fn after_navigate(&self, change: &RouteChange) -> ConsoleResult<()> {
        let language = &change.to.language;
        if *language != self.i18n.language() && self.i18n.set_language(language).is_ok() {
            self.ui.language.set(language.clone());
        }

        // 等待新屏幕渲染到 DOM
        sleep(Duration::ZERO).await;
        self.apply_bindings();
        Ok(())
    }
}
