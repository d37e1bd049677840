use crate::layout::global_context::use_global_context;
use crate::system::auth::{do_login, use_auth};
use contracts::system::access::PageKey;
use contracts::system::auth::SessionRole;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_auth();
    let ctx = use_global_context();
    let role_code = RwSignal::new(String::new());

    let selected = Memo::new(move |_| SessionRole::from_code(&role_code.get()));

    let on_continue = move |_| {
        match selected.get_untracked() {
            Some(role) => {
                do_login(session, role);
                ctx.navigate(PageKey::Dashboard);
            }
            None => session.error.set(Some("Please select a role".to_string())),
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Workforce Portal"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || session.error.get().is_some()>
                    <div class="error-message">
                        {move || session.error.get().unwrap_or_default()}
                    </div>
                </Show>

                <div class="login-form">
                    <div class="form__group">
                        <label class="form__label" for="roleSelect">"Role"</label>
                        <Select value=role_code attr:id="roleSelect">
                            <option value="">"Select a role"</option>
                            {SessionRole::all().into_iter().map(|role| view! {
                                <option value=role.code()>{role.display_name()}</option>
                            }).collect_view()}
                        </Select>
                    </div>

                    {move || selected.get().map(|role| view! {
                        <div class="login-role-description">
                            <strong>{role.display_name()}</strong>
                            <p>{role.description()}</p>
                        </div>
                    })}

                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_continue
                        disabled=Signal::derive(move || selected.get().is_none())
                    >
                        {move || if selected.get().is_some() { "Continue to Dashboard" } else { "Select Role to Continue" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}
