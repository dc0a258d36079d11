use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::modal::Modal;
use super::{alert, bind_input, bind_select, render_options, use_api_client};
use crate::forms::{GoalForm, SubmitOutcome, GOAL_SAVE_FAILED};
use crate::options::SelectOptions;

#[derive(Properties, PartialEq)]
pub struct GoalModalProps {
    pub open: bool,
    pub categories: SelectOptions,
    pub on_close: Callback<()>,
    /// Emitted after the backend accepted the new goal.
    pub on_saved: Callback<()>,
}

#[function_component(GoalModal)]
pub fn goal_modal(props: &GoalModalProps) -> Html {
    let client = use_api_client();
    let form = use_state(GoalForm::default);

    let close = {
        let form = form.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: ()| {
            form.set(GoalForm::default());
            on_close.emit(());
        })
    };
    let on_cancel = {
        let close = close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };

    let on_submit = {
        let form = form.clone();
        let on_saved = props.on_saved.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = match form.to_request() {
                Ok(request) => request,
                Err(err) => {
                    alert(&err.to_string());
                    return;
                }
            };

            let client = client.clone();
            let form = form.clone();
            let on_saved = on_saved.clone();
            spawn_local(async move {
                let result = client.create_goal(&request).await;
                match &result {
                    Ok(goal) => info!("goal {} created ({})", goal.id, goal.name),
                    Err(err) => error!("failed to save goal: {}", err),
                }
                let outcome = SubmitOutcome::from_result(&result, GOAL_SAVE_FAILED);
                if let Some(message) = outcome.alert() {
                    alert(message);
                }
                if outcome.closes_modal() {
                    form.set(GoalForm::default());
                    on_saved.emit(());
                }
            });
        })
    };

    let categories = props.categories.options();

    html! {
        <Modal title="Nova Meta" open={props.open} on_close={close}>
            <form id="form-meta" class="space-y-3" onsubmit={on_submit}>
                <div class="space-y-1">
                    <label for="nome" class="text-[12px] font-bold text-muted-foreground">{"Nome da meta"}</label>
                    <input id="nome" name="nome" type="text" required={true} value={form.name.clone()}
                        oninput={bind_input(&form, |f, v| f.name = v)}
                        class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-sm border-none" />
                </div>
                <div class="space-y-1">
                    <label for="valorAlvo" class="text-[12px] font-bold text-muted-foreground">{"Valor alvo (R$)"}</label>
                    <input id="valorAlvo" name="valorAlvo" type="number" step="0.01" min="0" required={true} value={form.target_value.clone()}
                        oninput={bind_input(&form, |f, v| f.target_value = v)}
                        class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-sm border-none" />
                </div>
                <div class="grid grid-cols-2 gap-3">
                    <div class="space-y-1">
                        <label for="periodo" class="text-[12px] font-bold text-muted-foreground">{"Período"}</label>
                        <select id="periodo" name="periodo"
                            onchange={bind_select(&form, |f, v| f.period = v)}
                            class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-sm border-none">
                            <option value="ANUAL" selected={form.period == "ANUAL"}>{"Anual"}</option>
                            <option value="MENSAL" selected={form.period == "MENSAL"}>{"Mensal"}</option>
                        </select>
                    </div>
                    <div class="space-y-1">
                        <label for="ano" class="text-[12px] font-bold text-muted-foreground">{"Ano"}</label>
                        <input id="ano" name="ano" type="number" required={true} value={form.year.clone()}
                            oninput={bind_input(&form, |f, v| f.year = v)}
                            class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-sm border-none" />
                    </div>
                </div>
                {
                    if form.shows_month() {
                        html! {
                            <div id="campo-mes" class="space-y-1">
                                <label for="mes" class="text-[12px] font-bold text-muted-foreground">{"Mês"}</label>
                                <input id="mes" name="mes" type="number" min="1" max="12" required={true} value={form.month.clone()}
                                    oninput={bind_input(&form, |f, v| f.month = v)}
                                    class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-sm border-none" />
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                <div class="space-y-1">
                    <label for="categoria" class="text-[12px] font-bold text-muted-foreground">{"Categoria"}</label>
                    <select id="categoria" name="categoria"
                        onchange={bind_select(&form, |f, v| f.category_id = v)}
                        class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-sm border-none">
                        { render_options(&categories, &form.category_id) }
                    </select>
                </div>
                <div class="flex gap-3 pt-2">
                    <button type="submit" class="flex-1 bg-[#173E63] text-white py-2 rounded-[10px] text-sm font-bold">{"Salvar Meta"}</button>
                    <button type="button" onclick={on_cancel} class="flex-1 bg-[#B2CBDE] text-[#173E63] py-2 rounded-[10px] text-sm font-bold">{"Cancelar"}</button>
                </div>
            </form>
        </Modal>
    }
}
