use crate::components::tr;
use crate::services::{Services, use_service_store};
use crate::web::router::SignalScreenHost;
use leptos::prelude::*;
use leptos::task::spawn_local;
use masktronic::config::LoadOptions;
use masktronic::i18n::translate;
use masktronic::navigation::NavigateOptions;
use masktronic::{log_error, log_info, log_warn};
use masktronic_shared::{CONFIG_APP, CONFIG_MENU, CONFIG_ROUTER, Screen, Timestamp};

const CONFIG_NAMES: [&str; 3] = [CONFIG_APP, CONFIG_MENU, CONFIG_ROUTER];

/// 诊断表中的一行
#[derive(Clone, PartialEq)]
struct ConfigRow {
    name: &'static str,
    loaded_at: Option<String>,
}

fn config_rows(services: &Services) -> Vec<ConfigRow> {
    CONFIG_NAMES
        .iter()
        .map(|name| ConfigRow {
            name: *name,
            loaded_at: services
                .config
                .get_config_value(name, "_metadata.loaded_at")
                .and_then(|v| v.as_i64())
                .map(|ms| Timestamp::new(ms).to_rfc3339()),
        })
        .collect()
}

/// 清空缓存并强制重新拉取全部配置
async fn reload_all(services: Services) {
    services.config.clear_config_cache(None);
    let options = LoadOptions {
        force_reload: true,
        cache_bust: true,
        allow_partial_load: true,
        ..LoadOptions::default()
    };
    match services.config.load_configs(&CONFIG_NAMES, options).await {
        Ok(batch) if batch.is_complete() => log_info!("[System] All configs reloaded"),
        Ok(batch) => {
            for (name, e) in &batch.errors {
                log_warn!("[System] '{}' could not be reloaded: {}", name, e);
            }
        }
        Err(e) => log_error!("[System] Config reload failed: {}", e),
    }
}

#[component]
pub fn SystemPage() -> impl IntoView {
    let store = use_service_store();
    let host = expect_context::<SignalScreenHost>();
    let ui = store.with_value(|s| s.ui);
    let active = host.active_action();
    let languages = store.with_value(|s| s.i18n.supported_languages());
    let (reloading, set_reloading) = signal(false);

    let rows = move || {
        ui.config_revision.track();
        store.with_value(config_rows)
    };

    let app_version = move || {
        ui.config_revision.track();
        store.with_value(|s| s.config.get_config_value(CONFIG_APP, "version"))
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_else(|| "-".to_string())
    };

    let on_language = move |ev| {
        let language = event_target_value(&ev);
        let services = store.get_value();
        spawn_local(async move {
            if let Err(e) = services.change_language(&language).await {
                log_warn!("[System] {}", e);
            }
        });
    };

    let on_reload = move |_| {
        set_reloading.set(true);
        let services = store.get_value();
        spawn_local(async move {
            reload_all(services).await;
            set_reloading.set(false);
        });
    };

    let on_back = move |_| {
        let services = store.get_value();
        spawn_local(async move {
            match services.nav.navigate_back(1).await {
                Ok(true) => {}
                // 没有历史（例如直接打开链接）时回到菜单
                _ => {
                    let menu = services.route_to(Screen::UserMenu);
                    services.go(menu, NavigateOptions::replace()).await;
                }
            }
        });
    };

    view! {
        <section id="system-screen" class="screen min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-3xl mx-auto space-y-6">
                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1">
                        <h2 class="text-xl font-bold px-2">{tr(ui, "system.title")}</h2>
                    </div>
                    <div class="flex-none">
                        <button id="system-back" on:click=on_back class="btn btn-ghost">
                            {tr(ui, "system.back")}
                        </button>
                    </div>
                </div>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <label id="language-label" class="label" for="language-select">
                            {tr(ui, "system.language")}
                        </label>
                        <select
                            id="language-select"
                            class=move || {
                                if active.get() == "language" {
                                    "select select-bordered select-primary"
                                } else {
                                    "select select-bordered"
                                }
                            }
                            on:change=on_language
                        >
                            {languages
                                .into_iter()
                                .map(|lang| {
                                    let key = format!("language.{}", lang);
                                    view! {
                                        <option value=lang selected=move || ui.language.get() == lang>
                                            {move || ui.language.with(|current| translate(current, &key))}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>
                </div>

                <Show when=move || active.get() == "network">
                    <div role="alert" class="alert alert-info">
                        <span class="font-bold">{tr(ui, "system.network")}</span>
                        <span>{tr(ui, "system.network.hint")}</span>
                    </div>
                </Show>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body p-0">
                        <div class="flex items-center justify-between p-6 pb-2">
                            <div>
                                <h3 id="config-heading" class="card-title">{tr(ui, "system.config")}</h3>
                                <p class="text-base-content/70 text-sm">"v" {app_version}</p>
                            </div>
                            <button
                                id="reload-config"
                                on:click=on_reload
                                disabled=move || reloading.get()
                                class="btn btn-outline btn-sm"
                            >
                                {tr(ui, "system.config.reload")}
                            </button>
                        </div>
                        <table class="table table-zebra w-full">
                            <tbody>
                                <For
                                    each=rows
                                    key=|row| (row.name, row.loaded_at.clone())
                                    children=move |row: ConfigRow| {
                                        view! {
                                            <tr>
                                                <td class="font-mono">{row.name}</td>
                                                <td>
                                                    {match row.loaded_at {
                                                        Some(at) => view! {
                                                            {tr(ui, "system.config.loaded_at")} " " {at}
                                                        }
                                                        .into_any(),
                                                        None => view! {
                                                            <span class="text-error">
                                                                {tr(ui, "system.config.not_loaded")}
                                                            </span>
                                                        }
                                                        .into_any(),
                                                    }}
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </div>
            </div>
        </section>
    }
}
