use log::error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::contribution_modal::ContributionModal;
use super::goal_modal::GoalModal;
use super::stat_card::{StatCard, StatIcon};
use super::use_api_client;
use crate::card::GoalCardView;
use crate::dashboard::{apply_load, fetch_dashboard, DashboardStats, GoalList};
use crate::icons::{icon_piggy_bank, icon_plus};
use crate::options::{load_categories, load_goals_for_select, SelectOptions};

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let client = use_api_client();

    let stats = use_state(DashboardStats::default);
    let goal_list = use_state(|| GoalList::Loading);
    let categories = use_state(|| SelectOptions::Loading);
    let goal_options = use_state(|| SelectOptions::Loading);
    let goal_modal_open = use_state(|| false);
    let contribution_modal_open = use_state(|| false);

    // Stats are only replaced once all three reads succeeded.
    let reload = {
        let client = client.clone();
        let stats = stats.clone();
        let goal_list = goal_list.clone();
        Callback::from(move |_: ()| {
            let client = client.clone();
            let stats = stats.clone();
            let goal_list = goal_list.clone();
            spawn_local(async move {
                let result = fetch_dashboard(&client).await;
                if let Err(err) = &result {
                    error!("failed to load dashboard from {}: {}", err.url(), err);
                }
                let outcome = apply_load(result);
                if let Some(next) = outcome.stats {
                    stats.set(next);
                }
                goal_list.set(outcome.goals);
            });
        })
    };

    {
        let client = client.clone();
        let categories = categories.clone();
        let reload = reload.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    let options = load_categories(&client).await;
                    categories.set(SelectOptions::Ready(options));
                });
                reload.emit(());
                || ()
            },
            (),
        );
    }

    let open_goal_modal = {
        let goal_modal_open = goal_modal_open.clone();
        Callback::from(move |_: MouseEvent| goal_modal_open.set(true))
    };
    let close_goal_modal = {
        let goal_modal_open = goal_modal_open.clone();
        Callback::from(move |_: ()| goal_modal_open.set(false))
    };
    let on_goal_saved = {
        let goal_modal_open = goal_modal_open.clone();
        let reload = reload.clone();
        Callback::from(move |_: ()| {
            reload.emit(());
            goal_modal_open.set(false);
        })
    };

    let open_contribution_modal = {
        let client = client.clone();
        let goal_options = goal_options.clone();
        let contribution_modal_open = contribution_modal_open.clone();
        Callback::from(move |_: MouseEvent| {
            let client = client.clone();
            let goal_options = goal_options.clone();
            goal_options.set(SelectOptions::Loading);
            spawn_local(async move {
                let options = load_goals_for_select(&client).await;
                goal_options.set(SelectOptions::Ready(options));
            });
            contribution_modal_open.set(true);
        })
    };
    let close_contribution_modal = {
        let contribution_modal_open = contribution_modal_open.clone();
        Callback::from(move |_: ()| contribution_modal_open.set(false))
    };
    let on_contribution_saved = {
        let contribution_modal_open = contribution_modal_open.clone();
        let reload = reload.clone();
        Callback::from(move |_: ()| {
            contribution_modal_open.set(false);
            reload.emit(());
        })
    };

    html! {
        <div class="p-6 max-w-7xl mx-auto">
            <div class="flex items-center justify-between pb-4 border-b border-border">
                <h1 class="text-2xl font-bold text-foreground">{"Minhas Metas"}</h1>
                <div class="flex gap-3">
                    <button id="btn-abrir-economia" onclick={open_contribution_modal} class="flex items-center gap-2 bg-[#B2CBDE] text-[#173E63] px-4 py-2 rounded-xl font-bold text-sm hover:opacity-90 transition-all">
                        { icon_piggy_bank() }
                        {"Adicionar Economia"}
                    </button>
                    <button id="btn-abrir-meta" onclick={open_goal_modal} class="flex items-center gap-2 bg-primary text-primary-foreground px-4 py-2 rounded-xl font-bold text-sm hover:opacity-90 transition-all">
                        { icon_plus() }
                        {"Nova Meta"}
                    </button>
                </div>
            </div>

            <div class="pt-5 space-y-6">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    <StatCard title="Total Economizado" value={stats.total_saved_label()} icon={StatIcon::Wallet} />
                    <StatCard title="Economizado este Mês" value={stats.this_month_label()} icon={StatIcon::Calendar} />
                    <StatCard title="Metas Ativas" value={stats.active_goals_label()} icon={StatIcon::Target} />
                </div>

                { goal_list_view(&goal_list) }
            </div>

            <GoalModal
                open={*goal_modal_open}
                categories={(*categories).clone()}
                on_close={close_goal_modal}
                on_saved={on_goal_saved} />
            <ContributionModal
                open={*contribution_modal_open}
                goals={(*goal_options).clone()}
                on_close={close_contribution_modal}
                on_saved={on_contribution_saved} />
        </div>
    }
}

fn goal_list_view(list: &GoalList) -> Html {
    let body = match (list.message(), list) {
        (Some(message), _) => html! { <p class="text-sm text-muted-foreground">{ message }</p> },
        (None, GoalList::Loaded(entries)) => html! {
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                { for entries.iter().enumerate().map(|(idx, entry)| html! {
                    <GoalCardView key={idx} entry={entry.clone()} />
                }) }
            </div>
        },
        (None, _) => html! {},
    };

    html! {
        <div id="lista-metas-container" class="space-y-4">
            <h3 class="font-bold text-foreground text-lg">{"Progresso das Metas"}</h3>
            { body }
        </div>
    }
}
