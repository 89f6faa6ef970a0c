/// Reusable UI components

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::notify::Notification;

/// Delay before a freshly mounted toast gets its "show" class, so the CSS
/// slide-in transition can run.
const TOAST_SHOW_DELAY_MS: u32 = 100;
/// How long a toast stays fully visible once presented.
const TOAST_DISPLAY_MS: u32 = 5_000;
/// Duration of the fade-out transition before the toast leaves the layout.
const TOAST_FADE_MS: u32 = 300;

#[derive(Clone, PartialEq)]
enum ToastPhase {
    Hidden,
    Appearing,
    Shown,
    Fading,
}

#[derive(Properties, PartialEq)]
pub struct NotificationToastProps {
    /// The page's single notification slot. Setting a new value replaces
    /// whatever is on screen and restarts the timers.
    pub slot: UseStateHandle<Option<Notification>>,
}

#[function_component(NotificationToast)]
pub fn notification_toast(props: &NotificationToastProps) -> Html {
    let phase = use_state(|| ToastPhase::Hidden);

    // Drive the show and fade timers from the slot content. Every present
    // is a distinct value (notifications carry a sequence number), so the
    // effect re-runs and drops the old timers even when the message repeats;
    // a stale timer never acts on a newer toast.
    {
        let phase = phase.clone();
        use_effect_with((*props.slot).clone(), move |notification| {
            let timers = match notification {
                Some(_) => {
                    phase.set(ToastPhase::Appearing);
                    let show = {
                        let phase = phase.clone();
                        Timeout::new(TOAST_SHOW_DELAY_MS, move || phase.set(ToastPhase::Shown))
                    };
                    let fade = {
                        let phase = phase.clone();
                        Timeout::new(TOAST_DISPLAY_MS, move || phase.set(ToastPhase::Fading))
                    };
                    Some((show, fade))
                }
                None => {
                    phase.set(ToastPhase::Hidden);
                    None
                }
            };
            move || drop(timers)
        });
    }

    // Once the fade-out has played, clear the slot so the toast leaves the
    // layout entirely.
    {
        let slot = props.slot.clone();
        use_effect_with((*phase).clone(), move |phase| {
            let clear = if *phase == ToastPhase::Fading {
                Some(Timeout::new(TOAST_FADE_MS, move || slot.set(None)))
            } else {
                None
            };
            move || drop(clear)
        });
    }

    match (&*props.slot, &*phase) {
        (Some(notification), ToastPhase::Shown) => html! {
            <div class={format!("notification {} show", notification.kind.css_class())}>
                {&notification.message}
            </div>
        },
        (Some(notification), _) => html! {
            <div class={format!("notification {}", notification.kind.css_class())}>
                {&notification.message}
            </div>
        },
        (None, _) => html! {
            <div class="notification hidden"></div>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct SpinnerProps {
    #[prop_or_default]
    pub message: Option<String>,
}

#[function_component(Spinner)]
pub fn spinner(props: &SpinnerProps) -> Html {
    html! {
        <div class="loading-container">
            <div class="loading-spinner"></div>
            if let Some(msg) = &props.message {
                <p class="loading-message">{msg}</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ActionButtonProps {
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    pub children: Children,
    /// While true the button is disabled and its label reads "Loading...".
    #[prop_or(false)]
    pub busy: bool,
    #[prop_or(false)]
    pub disabled: bool,
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or(AttrValue::Static("button"))]
    pub r#type: AttrValue,
    #[prop_or_default]
    pub id: Option<AttrValue>,
}

#[derive(PartialEq, Clone)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Danger,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        ButtonVariant::Primary
    }
}

impl ButtonVariant {
    fn css_class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Danger => "btn-danger",
        }
    }
}

#[function_component(ActionButton)]
pub fn action_button(props: &ActionButtonProps) -> Html {
    let class = classes!(
        "btn",
        props.variant.css_class(),
        props.busy.then_some("loading"),
    );

    html! {
        <button
            id={props.id.clone()}
            type={props.r#type.clone()}
            onclick={props.onclick.clone()}
            disabled={props.busy || props.disabled}
            class={class}
        >
            if props.busy {
                {"Loading..."}
            } else {
                {props.children.clone()}
            }
        </button>
    }
}
