use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

/// Modal dialog with a header, scrollable body and optional footer.
///
/// Closes on Escape, on overlay click and on the close button.
#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: String,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Optional footer buttons (Save, Cancel, etc.)
    #[prop(optional, into)]
    footer: Option<ViewFn>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    let keydown = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || keydown.remove());

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
                {footer.map(|footer| view! { <div class="modal-footer">{footer.run()}</div> })}
            </div>
        </div>
    }
}

/// Modal frame of a details form: error box, fieldset and Save/Close footer.
///
/// In view mode the fieldset is disabled and Save is not rendered.
#[component]
pub fn DetailsModal(
    #[prop(into)] title: String,
    editable: bool,
    error: RwSignal<Option<String>>,
    on_save: Callback<()>,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let footer = ViewFn::from(move || {
        view! {
            {editable.then(|| view! {
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_save.run(())>
                    {icon("save")}
                    " Save"
                </Button>
            })}
            <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                "Close"
            </Button>
        }
    });

    view! {
        <Modal title=title on_close=on_close footer=footer>
            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__text">{e}</span>
                </div>
            })}
            <fieldset class="details-form" disabled=!editable>
                {children()}
            </fieldset>
        </Modal>
    }
}

/// Browser confirm; false when there is no window
pub fn confirm_action(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
