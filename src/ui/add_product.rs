/// Add-product page

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api;
use crate::notify::Notification;
use crate::product::NewProduct;
use crate::ui::components::{ActionButton, NotificationToast};
use crate::validate;

/// Pause between the success toast appearing and navigating away, so the
/// user sees the confirmation before the page changes.
const REDIRECT_DELAY_MS: u32 = 1_500;

const PRODUCTS_PAGE_PATH: &str = "/products";

#[function_component(AddProductPage)]
pub fn add_product_page() -> Html {
    let name = use_state(|| String::new());
    let url = use_state(|| String::new());
    let submitting = use_state(|| false);
    let notification = use_state(|| None::<Notification>);

    // Name field input
    let on_name_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                name.set(input.value());
            }
        })
    };

    // URL field input
    let on_url_input = {
        let url = url.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                url.set(input.value());
            }
        })
    };

    // Submit handler
    let on_submit = {
        let name = name.clone();
        let url = url.clone();
        let submitting = submitting.clone();
        let notification = notification.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            // A submit while the previous request is in flight does nothing.
            if *submitting {
                return;
            }

            // Validate before any request goes out: URL shape first, then
            // platform support.
            if let Err(err) = validate::validate_product_url(&url) {
                notification.set(Some(Notification::error(err.to_string())));
                return;
            }

            submitting.set(true);

            let payload = NewProduct {
                name: (*name).clone(),
                url: (*url).clone(),
            };

            let name = name.clone();
            let url = url.clone();
            let submitting = submitting.clone();
            let notification = notification.clone();

            spawn_local(async move {
                match api::create_product(&payload).await {
                    Ok(product) => {
                        log::info!("now tracking {} on {}", product.name, product.platform);
                        notification.set(Some(Notification::success(
                            "Product added successfully!",
                        )));
                        name.set(String::new());
                        url.set(String::new());

                        // Let the toast land before leaving the page.
                        Timeout::new(REDIRECT_DELAY_MS, go_to_products).forget();
                    }
                    Err(err) => {
                        log::error!("create failed: {}", err);
                        notification.set(Some(Notification::error(
                            err.user_message("Failed to add product"),
                        )));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="container">
            <NotificationToast slot={notification.clone()} />

            <h1>{"Price Watcher"}</h1>
            <p class="subtitle">{"Track prices across your favourite stores."}</p>

            <form id="productForm" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="name">{"Product Name"}</label>
                    <input
                        type="text"
                        id="name"
                        name="name"
                        placeholder="e.g. Wireless Mouse"
                        value={(*name).clone()}
                        oninput={on_name_input}
                        required={true}
                    />
                </div>

                <div class="form-group">
                    <label for="url">{"Product URL"}</label>
                    <input
                        type="text"
                        id="url"
                        name="url"
                        placeholder="https://www.amazon.in/dp/..."
                        value={(*url).clone()}
                        oninput={on_url_input}
                        required={true}
                    />
                </div>

                <ActionButton r#type="submit" busy={*submitting}>
                    {"Add Product"}
                </ActionButton>
            </form>

            <p class="page-nav">
                <a href={PRODUCTS_PAGE_PATH}>{"View tracked products"}</a>
            </p>
        </div>
    }
}

// Helper functions

fn go_to_products() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(PRODUCTS_PAGE_PATH) {
        log::error!("redirect failed: {:?}", e);
    }
}
