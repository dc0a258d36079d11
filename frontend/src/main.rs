mod api;
mod card;
mod components;
mod config;
mod dashboard;
mod error;
mod format;
mod forms;
mod icons;
mod models;
mod options;

use yew::prelude::*;

use components::dashboard_page::DashboardPage;
use config::AppConfig;

#[function_component(App)]
fn app() -> Html {
    let config = use_state(AppConfig::from_env);

    html! {
        <ContextProvider<AppConfig> context={(*config).clone()}>
            <div class="min-h-screen bg-background">
                <DashboardPage />
            </div>
        </ContextProvider<AppConfig>>
    }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    log::info!("using backend at {}", AppConfig::from_env().api_base_url);
    yew::Renderer::<App>::new().render();
}
