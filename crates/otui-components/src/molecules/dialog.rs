use std::cell::RefCell;
use std::rc::Rc;

use gloo::console;
use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use otui_core::button::ButtonStyle;
use otui_core::{
    DialogController, DialogFooter, DialogText, DismissPolicy, Handler, ListenerBindings,
    SurfaceEvent,
};
use web_sys::HtmlDialogElement;
use yew::prelude::*;

use crate::atoms::Button;
use crate::defaults::use_ui_defaults;
use crate::foundations::merge_classes;
use crate::surface::{DIALOG_EVENTS, DomSurface, surface_event};

type SharedController = Rc<RefCell<Option<DialogController<DomSurface>>>>;

/// Props for [`Dialog`].
#[derive(Properties, PartialEq)]
pub struct DialogProps {
    /// Caller-owned visibility.
    pub is_open: bool,
    /// Invoked once per dismissal; the caller is expected to clear `is_open`.
    pub on_close: Callback<()>,
    /// Invoked before `on_close` when the user confirms. The confirm button is
    /// only rendered when this is set.
    #[prop_or_default]
    pub on_confirm: Option<Callback<()>>,
    /// Heading text.
    #[prop_or_default]
    pub title: Option<AttrValue>,
    /// Text under the heading.
    #[prop_or_default]
    pub description: Option<AttrValue>,
    /// Confirm button label; falls back to the configured default.
    #[prop_or_default]
    pub confirm_text: Option<AttrValue>,
    /// Cancel button label; falls back to the configured default.
    #[prop_or_default]
    pub cancel_text: Option<AttrValue>,
    /// Honour backdrop dismissal; falls back to the configured default.
    #[prop_or_default]
    pub close_by_backdrop: Option<bool>,
    /// Honour the Escape key; falls back to the configured default.
    #[prop_or_default]
    pub close_by_escape: Option<bool>,
    /// Extra classes on the `<dialog>` element.
    #[prop_or_default]
    pub class: Classes,
    /// Dialog body.
    #[prop_or_default]
    pub children: Children,
}

fn handler(callback: &Callback<()>) -> Handler {
    let callback = callback.clone();
    Rc::new(move || callback.emit(()))
}

/// Settle the controller once the current task finishes.
fn settle_after_task(controller: SharedController) {
    Timeout::new(0, move || {
        if let Some(active) = controller.borrow_mut().as_mut() {
            active.settle();
        }
    })
    .forget();
}

fn listen(
    element: &HtmlDialogElement,
    kind: &'static str,
    controller: SharedController,
) -> EventListener {
    EventListener::new_with_options(
        element,
        kind,
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            let Some(surface_event) = surface_event(kind, event) else {
                return;
            };
            let is_key = matches!(surface_event, SurfaceEvent::KeyDown(_));
            let dispatch = controller
                .borrow_mut()
                .as_mut()
                .map(|active| active.dispatch(surface_event));
            if let Some(dispatch) = dispatch
                && dispatch.finish().is_suppressed()
            {
                event.prevent_default();
            }
            if is_key {
                settle_after_task(controller.clone());
            }
        },
    )
}

/// Modal dialog on the native `<dialog>` element.
///
/// The element is shown with `showModal()` whenever `is_open` is set and
/// closed when it is cleared. Backdrop and Escape dismissal follow
/// `close_by_backdrop` and `close_by_escape`; the cancel button always closes.
///
/// `on_close` fires once per open cycle. After a confirm or cancel click the
/// caller should clear `is_open` promptly: a native close (Escape, backdrop)
/// arriving before that still hides the element but is not reported again.
#[function_component(Dialog)]
pub fn dialog(props: &DialogProps) -> Html {
    let defaults = use_ui_defaults();
    let dialog_ref = use_node_ref();
    let controller: SharedController = use_mut_ref(|| None);

    let policy = DismissPolicy {
        close_by_backdrop: props
            .close_by_backdrop
            .unwrap_or(defaults.dialog.close_by_backdrop),
        close_by_escape: props
            .close_by_escape
            .unwrap_or(defaults.dialog.close_by_escape),
    };
    let text = DialogText::from(&defaults.dialog).with_overrides(
        props.confirm_text.as_deref(),
        props.cancel_text.as_deref(),
    );

    {
        let controller = controller.clone();
        let dialog_ref = dialog_ref.clone();
        use_effect_with_deps(
            move |_| {
                *controller.borrow_mut() = dialog_ref
                    .cast::<HtmlDialogElement>()
                    .map(|element| DialogController::new(DomSurface::new(element)));
                move || {
                    let released = controller.borrow_mut().take();
                    drop(released);
                }
            },
            (),
        );
    }
    {
        let controller = controller.clone();
        use_effect_with_deps(
            move |is_open| {
                if let Some(active) = controller.borrow_mut().as_mut()
                    && let Err(err) = active.synchronize(*is_open)
                {
                    console::error!("dialog surface failed to open", err.to_string());
                }
                || ()
            },
            props.is_open,
        );
    }
    {
        let controller = controller.clone();
        let dialog_ref = dialog_ref.clone();
        use_effect_with_deps(
            move |(on_close, close_by_backdrop, close_by_escape)| {
                let policy = DismissPolicy {
                    close_by_backdrop: *close_by_backdrop,
                    close_by_escape: *close_by_escape,
                };
                if let Some(active) = controller.borrow_mut().as_mut() {
                    active.attach_listeners(ListenerBindings::new(handler(on_close), policy));
                }
                let listeners = dialog_ref.cast::<HtmlDialogElement>().map(|element| {
                    DIALOG_EVENTS.map(|kind| listen(&element, kind, controller.clone()))
                });
                move || {
                    drop(listeners);
                    if let Some(active) = controller.borrow_mut().as_mut() {
                        active.detach_listeners();
                    }
                }
            },
            (
                props.on_close.clone(),
                policy.close_by_backdrop,
                policy.close_by_escape,
            ),
        );
    }

    let on_submit = {
        let controller = controller.clone();
        let on_confirm = props.on_confirm.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let confirm = on_confirm.as_ref().map(handler);
            let close = handler(&on_close);
            let dispatch = controller
                .borrow_mut()
                .as_mut()
                .map(|active| active.confirm_submit(confirm, close));
            if let Some(dispatch) = dispatch {
                dispatch.finish();
            }
        })
    };
    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            let close = handler(&on_close);
            let dispatch = controller
                .borrow_mut()
                .as_mut()
                .map(|active| active.cancel_click(close));
            if let Some(dispatch) = dispatch {
                dispatch.finish();
            }
        })
    };

    let has_header = props.title.is_some() || props.description.is_some();
    let DialogFooter { cancel, confirm } = text.footer(props.on_confirm.is_some());

    html! {
        <dialog
            ref={dialog_ref}
            class={merge_classes("ot-dialog", &props.class)}
            closedby={policy.closed_by()}
        >
            <form method="dialog" onsubmit={on_submit}>
                {has_header.then(|| html! {
                    <header>
                        {props.title.clone().map(|title| html! { <h3>{title}</h3> }).unwrap_or_default()}
                        {props.description.clone().map(|description| html! { <p>{description}</p> }).unwrap_or_default()}
                    </header>
                }).unwrap_or_default()}
                <div>{ for props.children.iter() }</div>
                <footer>
                    <Button
                        r#type="button"
                        class="outline"
                        style_type={ButtonStyle::Outline}
                        onclick={on_cancel}
                    >
                        {cancel}
                    </Button>
                    {confirm.map(|confirm| html! {
                        <Button r#type="submit" value="confirm">{confirm}</Button>
                    }).unwrap_or_default()}
                </footer>
            </form>
        </dialog>
    }
}
