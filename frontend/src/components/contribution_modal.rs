use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::modal::Modal;
use super::{alert, bind_input, bind_select, render_options, use_api_client};
use crate::forms::{ContributionForm, SubmitOutcome, CONTRIBUTION_SAVE_FAILED};
use crate::options::SelectOptions;

#[derive(Properties, PartialEq)]
pub struct ContributionModalProps {
    pub open: bool,
    pub goals: SelectOptions,
    pub on_close: Callback<()>,
    /// Emitted after the backend accepted the contribution.
    pub on_saved: Callback<()>,
}

#[function_component(ContributionModal)]
pub fn contribution_modal(props: &ContributionModalProps) -> Html {
    let client = use_api_client();
    let form = use_state(ContributionForm::default);

    let close = {
        let form = form.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: ()| {
            form.set(ContributionForm::default());
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

            // goal and date are checked before any request is made
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
                let result = client.create_contribution(&request).await;
                match &result {
                    Ok(()) => info!("contribution saved for goal {}", request.goal.id),
                    Err(err) => error!("failed to save contribution: {}", err),
                }
                let outcome = SubmitOutcome::from_result(&result, CONTRIBUTION_SAVE_FAILED);
                if let Some(message) = outcome.alert() {
                    alert(message);
                }
                if outcome.closes_modal() {
                    form.set(ContributionForm::default());
                    on_saved.emit(());
                }
            });
        })
    };

    let goals = props.goals.options();

    html! {
        <Modal title="Adicionar Economia" open={props.open} on_close={close}>
            <form id="form-economia" class="space-y-3" onsubmit={on_submit}>
                <div class="space-y-1">
                    <label for="meta" class="text-[12px] font-bold text-muted-foreground">{"Meta"}</label>
                    <select id="meta" name="meta"
                        onchange={bind_select(&form, |f, v| f.goal_id = v)}
                        class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-sm border-none">
                        { render_options(&goals, &form.goal_id) }
                    </select>
                </div>
                <div class="space-y-1">
                    <label for="economia" class="text-[12px] font-bold text-muted-foreground">{"Valor (R$)"}</label>
                    <input id="economia" name="economia" type="number" step="0.01" min="0" required={true} value={form.amount.clone()}
                        oninput={bind_input(&form, |f, v| f.amount = v)}
                        class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-sm border-none" />
                </div>
                <div class="space-y-1">
                    <label for="data_economia" class="text-[12px] font-bold text-muted-foreground">{"Data"}</label>
                    <input id="data_economia" name="data_economia" type="date" value={form.date.clone()}
                        oninput={bind_input(&form, |f, v| f.date = v)}
                        class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-sm border-none" />
                </div>
                <div class="flex gap-3 pt-2">
                    <button type="submit" class="flex-1 bg-[#173E63] text-white py-2 rounded-[10px] text-sm font-bold">{"Salvar Economia"}</button>
                    <button type="button" onclick={on_cancel} class="flex-1 bg-[#B2CBDE] text-[#173E63] py-2 rounded-[10px] text-sm font-bold">{"Cancelar"}</button>
                </div>
            </form>
        </Modal>
    }
}
