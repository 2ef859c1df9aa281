use contracts::system::auth::Credentials;
use leptos::prelude::*;

use crate::system::auth::context::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let session = use_session();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let credentials = Credentials::new(username.get(), password.get());
        match session.login(&credentials) {
            // Сессия переключает AppShell на основной макет
            Ok(()) => set_error_message.set(None),
            Err(e) => {
                set_password.set(String::new());
                set_error_message.set(Some(e));
            }
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Gym Panel"</h1>
                <h2>"Sistemə giriş"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"İstifadəçi adı"</label>
                        <input
                            type="text"
                            id="username"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Şifrə"</label>
                        <input
                            type="password"
                            id="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <button type="submit" class="button button--primary login-submit">
                        "Daxil ol"
                    </button>
                </form>
            </div>
        </div>
    }
}
