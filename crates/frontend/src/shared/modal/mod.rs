use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use crate::shared::icons::icon;

#[component]
pub fn Modal(
    /// Title of the modal
    title: String,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    // Handle Escape key
    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" {
                    on_close.run(());
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    });

    let handle_overlay_click = move |_| {
        on_close.run(());
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=handle_overlay_click>
            <div class="modal" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Диалог подтверждения разрушительного действия. Удаление выполняется
/// только после явного подтверждения.
#[component]
pub fn ConfirmDialog(
    /// Вопрос пользователю
    message: String,
    /// Подтверждение
    on_confirm: Callback<()>,
    /// Отказ/закрытие
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal title="Подтверждение".to_string() on_close=on_cancel>
            <p class="confirm-dialog__message">{message}</p>
            <div class="confirm-dialog__actions">
                <button class="btn btn-danger" on:click=move |_| on_confirm.run(())>
                    {icon("trash")}
                    "Удалить"
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    "Отмена"
                </button>
            </div>
        </Modal>
    }
}
