pub mod contribution_modal;
pub mod dashboard_page;
pub mod goal_modal;
pub mod modal;
pub mod stat_card;

use yew::prelude::*;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::options::SelectOption;

/// Client for the configured backend; falls back to the default base URL
/// when no config is provided above this component.
#[hook]
pub fn use_api_client() -> ApiClient {
    let config = use_context::<AppConfig>().unwrap_or_default();
    ApiClient::new(&config)
}

/// Blocking browser alert.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// `oninput` handler writing an `<input>` value into one field of a form state.
pub fn bind_input<T>(form: &UseStateHandle<T>, apply: fn(&mut T, String)) -> Callback<InputEvent>
where
    T: Clone + 'static,
{
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        apply(&mut next, input.value());
        form.set(next);
    })
}

/// `onchange` handler writing a `<select>` value into one field of a form state.
pub fn bind_select<T>(form: &UseStateHandle<T>, apply: fn(&mut T, String)) -> Callback<Event>
where
    T: Clone + 'static,
{
    let form = form.clone();
    Callback::from(move |e: Event| {
        let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        apply(&mut next, select.value());
        form.set(next);
    })
}

pub fn render_options(options: &[SelectOption], selected: &str) -> Html {
    html! {
        { for options.iter().map(|option| html! {
            <option value={option.value.clone()} selected={option.value == selected}>
                { option.label.clone() }
            </option>
        }) }
    }
}
