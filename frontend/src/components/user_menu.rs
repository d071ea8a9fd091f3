use crate::auth::{logout, use_auth};
use crate::components::tr;
use crate::services::{Services, use_service_store};
use crate::web::router::SignalScreenHost;
use leptos::prelude::*;
use leptos::task::spawn_local;
use masktronic::i18n::translate;
use masktronic::menu::{LOGOUT_KEY, MenuItem, MenuOutcome};
use masktronic::navigation::NavigateOptions;
use masktronic::{log_error, log_warn};
use masktronic_shared::{CONFIG_MENU, DEFAULT_ACTION, Role, Route, Screen};

/// `menu.json` 中该角色的限制；配置未加载时不过滤
fn role_restrictions(services: &Services, role: Role) -> Option<Vec<String>> {
    let path = format!("role_restrictions.{}", role.as_str());
    let value = services.config.get_config_value(CONFIG_MENU, &path)?;
    match serde_json::from_value(value) {
        Ok(list) => Some(list),
        Err(e) => {
            log_warn!("[Menu] Ignoring malformed restrictions for {}: {}", role, e);
            None
        }
    }
}

/// 执行菜单项的结果
async fn run_outcome(services: Services, key: &'static str, outcome: MenuOutcome) {
    match outcome {
        MenuOutcome::Navigate { view, action } => {
            let route = Route::new(view, services.ui.language.get_untracked()).with_action(action);
            services.go(route, NavigateOptions::default()).await;
        }
        MenuOutcome::Template(_) | MenuOutcome::Unavailable => {
            // 内容区由路由的 action 决定
            if let Err(e) = services
                .nav
                .navigate_action(key, NavigateOptions::default())
                .await
            {
                log_error!("[Menu] Could not open '{}': {}", key, e);
            }
        }
        MenuOutcome::Logout => {
            logout(&services.auth);
            services.nav.clear_history();
            let login = services.route_to(Screen::Login);
            services.go(login, NavigateOptions::replace()).await;
        }
    }
}

#[component]
pub fn UserMenuPage() -> impl IntoView {
    let store = use_service_store();
    let auth = use_auth();
    let host = expect_context::<SignalScreenHost>();
    let ui = store.with_value(|s| s.ui);
    let active = host.active_action();

    let role = auth.session.with_untracked(|s| s.role);
    let username = auth.session.with_untracked(|s| s.username.clone());

    // 配置变化时重新计算可见菜单
    let items = move || {
        ui.config_revision.track();
        store.with_value(|services| {
            let restrictions = role_restrictions(services, role);
            services
                .menu
                .items_for(role, restrictions.as_deref())
                .into_iter()
                .copied()
                .collect::<Vec<MenuItem>>()
        })
    };

    let content = move || {
        let action = active.get();
        let lang = ui.language.get();
        if action.is_empty() || action == DEFAULT_ACTION {
            return view! {
                <p class="text-base-content/60">{translate(&lang, "user_menu.select_hint")}</p>
            }
            .into_any();
        }
        match store.with_value(|services| services.menu.select(role, &action)) {
            Ok(MenuOutcome::Template(html)) => view! { <div inner_html=html></div> }.into_any(),
            _ => view! {
                <div role="alert" class="alert alert-warning">
                    {translate(&lang, "user_menu.unavailable")}
                </div>
            }
            .into_any(),
        }
    };

    let select_item = move |key: &'static str| {
        let services = store.get_value();
        match services.menu.select(role, key) {
            Ok(outcome) => spawn_local(run_outcome(services, key, outcome)),
            Err(e) => log_warn!("[Menu] {}", e),
        }
    };

    let role_label = format!("role.{}", role.as_str());

    view! {
        <section id="user-menu-screen" class="screen min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-7xl mx-auto space-y-6">
                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1 gap-2">
                        <h2 class="text-xl font-bold px-2">{tr(ui, "user_menu.title")}</h2>
                        <span class="badge badge-neutral hidden md:inline-flex">
                            {tr(ui, "user_menu.welcome")} " " {username} " · "
                            {move || ui.language.with(|lang| translate(lang, &role_label))}
                        </span>
                    </div>
                    <div class="flex-none">
                        <button
                            id="logout-button"
                            on:click=move |_| select_item(LOGOUT_KEY)
                            class="btn btn-outline btn-error"
                        >
                            {tr(ui, "user_menu.logout")}
                        </button>
                    </div>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    <ul id="user-menu-items" class="menu bg-base-100 rounded-box shadow-xl">
                        <For
                            each=items
                            key=|item| item.key
                            children=move |item: MenuItem| {
                                let is_active = move || active.get() == item.key;
                                view! {
                                    <li>
                                        <a
                                            class:active=is_active
                                            title=tr(ui, item.description)
                                            on:click=move |_| select_item(item.key)
                                        >
                                            <span>{item.icon}</span>
                                            {tr(ui, item.label)}
                                        </a>
                                    </li>
                                }
                            }
                        />
                    </ul>
                    <div id="menu-content" class="md:col-span-2 card bg-base-100 shadow-xl">
                        <div class="card-body">{content}</div>
                    </div>
                </div>
            </div>
        </section>
    }
}
