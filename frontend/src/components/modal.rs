use yew::prelude::*;

use crate::icons::icon_close;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    pub open: bool,
    pub on_close: Callback<()>,
    pub children: Children,
}

/// Overlay dialog. Clicking the overlay or the close button emits `on_close`;
/// clicks inside the dialog stay inside it.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    if !props.open {
        return html! {};
    }

    let on_overlay = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_close_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_inside = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-overlay ativo fixed inset-0 bg-black/40 flex items-center justify-center z-50" onclick={on_overlay}>
            <div class="modal bg-white w-full max-w-md rounded-[10px] shadow-lg p-6" onclick={keep_inside}>
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-lg font-bold text-[#173E63]">{ props.title.clone() }</h2>
                    <button type="button" class="p-1 rounded-full hover:bg-secondary" aria-label="Fechar" onclick={on_close_button}>
                        { icon_close() }
                    </button>
                </div>
                { for props.children.iter() }
            </div>
        </div>
    }
}
