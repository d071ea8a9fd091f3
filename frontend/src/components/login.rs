use crate::auth::{login, use_auth};
use crate::components::tr;
use crate::services::use_service_store;
use leptos::prelude::*;
use leptos::task::spawn_local;
use masktronic::i18n::translate;
use masktronic::navigation::{NavigateOptions, TransitionEffect};
use masktronic_shared::{APP_TITLE, Role, Screen};

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = use_service_store();
    let auth = use_auth();
    let ui = store.with_value(|s| s.ui);

    let (username, set_username) = signal(auth.last_username.get_untracked());
    let (password, set_password) = signal(String::new());
    let (role, set_role) = signal(Role::Operator);
    let (error_msg, set_error_msg) = signal(Option::<&'static str>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if login(&auth, &username.get(), &password.get(), role.get()).is_err() {
            set_error_msg.set(Some("login.error.empty"));
            return;
        }

        set_error_msg.set(None);
        set_password.set(String::new());

        let services = store.get_value();
        spawn_local(async move {
            let target = services.route_to(Screen::UserMenu);
            let options = NavigateOptions::default().with_transition(TransitionEffect::Fade);
            services.go(target, options).await;
        });
    };

    view! {
        <section id="login-screen" class="screen hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">{APP_TITLE}</h1>
                    <h2 class="text-base-content/70">{tr(ui, "login.title")}</h2>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>
                                    {move || {
                                        let key = error_msg.get().unwrap_or_default();
                                        ui.language.with(|lang| translate(lang, key))
                                    }}
                                </span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="username">
                                {tr(ui, "login.username")}
                            </label>
                            <input
                                id="username"
                                type="text"
                                placeholder=tr(ui, "login.username.placeholder")
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                                prop:value=username
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                {tr(ui, "login.password")}
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder=tr(ui, "login.password.placeholder")
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="role">
                                {tr(ui, "login.role")}
                            </label>
                            <select
                                id="role"
                                class="select select-bordered"
                                on:change=move |ev| {
                                    if let Ok(selected) = event_target_value(&ev).parse::<Role>() {
                                        set_role.set(selected);
                                    }
                                }
                            >
                                {Role::ALL
                                    .into_iter()
                                    .map(|r| {
                                        let key = format!("role.{}", r.as_str());
                                        view! {
                                            <option value=r.as_str() selected=move || role.get() == r>
                                                {move || ui.language.with(|lang| translate(lang, &key))}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </div>
                        <div class="form-control mt-6">
                            <button id="login-submit" type="submit" class="btn btn-primary">
                                {tr(ui, "login.submit")}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </section>
    }
}
