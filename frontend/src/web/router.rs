//! 路由宿主模块
//!
//! 封装 window.history 与 document.title，所有对地址栏的写操作都集中在此模块。
//! 导航的排队、历史与监听器由核心引擎的 `NavigationManager` 负责，
//! 这里只把它的结果写进信号，再由 `RouterOutlet` 渲染。

use leptos::prelude::*;
use leptos::task::spawn_local;
use masktronic::navigation::{ScreenHost, TransitionEffect};
use masktronic::{log_debug, log_error, log_warn};
use masktronic_shared::{Route, Screen};
use wasm_bindgen::prelude::*;

use crate::serde_helper::{from_value, to_value};
use crate::services::Navigator;

/// 当前地址栏 hash
pub fn current_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// 写入 History 状态；路由本身作为 state 保存，后退时直接还原
fn write_history_state(route: &Route, replace: bool) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let state = to_value(route).unwrap_or(JsValue::NULL);
    let url = route.to_hash();

    let result = if replace {
        history.replace_state_with_url(&state, "", Some(&url))
    } else {
        history.push_state_with_url(&state, "", Some(&url))
    };
    if let Err(e) = result {
        log_warn!("[Router] Could not update history: {:?}", e);
    }
}

/// 信号驱动的屏幕宿主
///
/// 导航管理器写入这些信号，组件只读取。
#[derive(Clone, Copy)]
pub struct SignalScreenHost {
    screen: RwSignal<Option<Screen>>,
    transition: RwSignal<Option<&'static str>>,
    /// 当前路由的 action，对应菜单中的激活项
    active_action: RwSignal<String>,
}

impl SignalScreenHost {
    pub fn new() -> Self {
        Self {
            screen: RwSignal::new(None),
            transition: RwSignal::new(None),
            active_action: RwSignal::new(String::new()),
        }
    }

    pub fn screen(&self) -> Signal<Option<Screen>> {
        self.screen.into()
    }

    pub fn transition_class(&self) -> Signal<Option<&'static str>> {
        self.transition.into()
    }

    pub fn active_action(&self) -> Signal<String> {
        self.active_action.into()
    }
}

impl ScreenHost for SignalScreenHost {
    fn show_screen(&self, view: &str) -> bool {
        match Screen::from_view(view) {
            Some(screen) => {
                self.screen.set(Some(screen));
                true
            }
            None => false,
        }
    }

    fn begin_transition(&self, effect: TransitionEffect) {
        self.transition.set(effect.css_class());
    }

    fn end_transition(&self, _effect: TransitionEffect) {
        self.transition.set(None);
    }

    fn set_title(&self, title: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    }

    fn update_active_menu(&self, route: &Route) {
        self.active_action.set(route.action.clone());
    }

    fn write_url(&self, route: &Route, replace: bool) {
        write_history_state(route, replace);
    }
}

/// 初始化浏览器后退/前进与手动修改 hash 的监听
///
/// 两个事件都交给 `on_location_change`；与当前路由相同的位置会被忽略。
pub fn init_location_listeners(nav: Navigator) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let popstate = {
        let nav = nav.clone();
        Closure::<dyn Fn(web_sys::PopStateEvent)>::new(move |ev: web_sys::PopStateEvent| {
            let state_route = from_value::<Route>(ev.state()).ok();
            follow_location(nav.clone(), state_route);
        })
    };

    let hashchange = Closure::<dyn Fn()>::new(move || {
        follow_location(nav.clone(), None);
    });

    for (event, closure) in [
        ("popstate", popstate.as_ref()),
        ("hashchange", hashchange.as_ref()),
    ] {
        if window
            .add_event_listener_with_callback(event, closure.unchecked_ref())
            .is_err()
        {
            log_warn!("[Router] Could not listen for {}", event);
        }
    }

    // 泄漏闭包以保持监听器存活
    popstate.forget();
    hashchange.forget();
}

fn follow_location(nav: Navigator, state_route: Option<Route>) {
    let hash = current_hash();
    log_debug!("[Router] Location changed to {}", hash);
    spawn_local(async move {
        if let Err(e) = nav.on_location_change(state_route, &hash).await {
            log_error!("[Router] Could not follow location {}: {}", hash, e);
        }
    });
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由出口组件
///
/// 根据宿主中的当前屏幕渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 屏幕匹配函数：接收当前屏幕，返回对应视图
    matcher: fn(Screen) -> AnyView,
) -> impl IntoView {
    let host = expect_context::<SignalScreenHost>();
    let screen = host.screen();
    let transition = host.transition_class();

    view! {
        <main class=move || match transition.get() {
            Some(class) => format!("screen-host {}", class),
            None => "screen-host".to_string(),
        }>
            {move || match screen.get() {
                Some(current) => matcher(current),
                None => view! {
                    <div class="flex items-center justify-center min-h-screen">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                    </div>
                }
                .into_any(),
            }}
        </main>
    }
}
