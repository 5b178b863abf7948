use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::api::LoginError;
use crate::system::auth::context::{do_login, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (correo, set_correo) = signal(String::new());
    let (contrasena, set_contrasena) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let correo_val = correo.get();
        let contrasena_val = contrasena.get();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match do_login(set_auth_state, correo_val, contrasena_val).await {
                Ok(()) => {
                    // AuthState switches AppRoutes over to the main layout.
                    set_is_loading.set(false);
                }
                Err(LoginError::InvalidCredentials) => {
                    set_error_message.set(Some(
                        "Credenciales incorrectas. Verifica tu email y contraseña.".to_string(),
                    ));
                    set_is_loading.set(false);
                }
                Err(LoginError::Network(detail)) => {
                    log::error!("login: {}", detail);
                    set_error_message.set(Some(
                        "Error al conectar con el servidor. Inténtalo más tarde.".to_string(),
                    ));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Distribuidora de Limpieza"</h1>
                <h2>"INICIAR SESIÓN"</h2>
                <p class="login-info">"Usa tu email para iniciar sesión"</p>

                <Show when=move || error_message.get().is_some()>
                    <div class="alert alert--error">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form__group">
                        <label for="correo">"Email"</label>
                        <input
                            type="email"
                            id="correo"
                            placeholder="Email"
                            prop:value=move || correo.get()
                            on:input=move |ev| set_correo.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form__group">
                        <label for="contrasena">"Contraseña"</label>
                        <input
                            type="password"
                            id="contrasena"
                            placeholder="Contraseña"
                            prop:value=move || contrasena.get()
                            on:input=move |ev| set_contrasena.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Entrando..." } else { "Entrar" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
