/// Products listing page

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::money::format_inr;
use crate::notify::Notification;
use crate::platform::Platform;
use crate::product::{without_product, Product};
use crate::ui::components::{ActionButton, ButtonVariant, NotificationToast, Spinner};

const CONFIRM_DELETE_PROMPT: &str = "Are you sure you want to delete this product?";

#[derive(Clone, PartialEq)]
enum ViewState {
    Loading,
    Idle,
    Error(String),
}

#[function_component(ProductsPage)]
pub fn products_page() -> Html {
    let state = use_state(|| ViewState::Loading);
    let products = use_state(|| Vec::<Product>::new());
    let refreshing = use_state(|| false);
    let notification = use_state(|| None::<Notification>);

    // Load products on mount
    {
        let state = state.clone();
        let products = products.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                log::debug!("fetching tracked products");
                match api::fetch_products().await {
                    Ok(list) => {
                        products.set(list);
                        state.set(ViewState::Idle);
                    }
                    Err(e) => {
                        log::error!("listing failed: {}", e);
                        state.set(ViewState::Error(e.user_message("Failed to load products")));
                    }
                }
            });
            || ()
        });
    }

    // Notification relay for the cards
    let notify = {
        let notification = notification.clone();
        Callback::from(move |n: Notification| notification.set(Some(n)))
    };

    // Drop a deleted product from the list, leaving the rest untouched
    let on_deleted = {
        let products = products.clone();
        Callback::from(move |id: String| {
            products.set(without_product(&products, &id));
        })
    };

    // Refresh handler: a full reload, so the server re-renders the page
    let on_refresh = {
        let refreshing = refreshing.clone();
        let notify = notify.clone();

        Callback::from(move |_| {
            if *refreshing {
                return;
            }
            refreshing.set(true);

            let Some(window) = web_sys::window() else {
                refreshing.set(false);
                return;
            };
            if let Err(e) = window.location().reload() {
                log::error!("reload failed: {:?}", e);
                notify.emit(Notification::error("Failed to refresh products"));
                refreshing.set(false);
            }
        })
    };

    html! {
        <div class="container">
            <NotificationToast slot={notification.clone()} />

            <div class="header">
                <h1>{"Tracked Products"}</h1>
                <div class="header-actions">
                    <a class="page-nav" href="/">{"Add a product"}</a>
                    <ActionButton
                        id="refreshBtn"
                        onclick={on_refresh}
                        busy={*refreshing}
                        variant={ButtonVariant::Secondary}
                    >
                        {"Refresh"}
                    </ActionButton>
                </div>
            </div>

            {match &*state {
                ViewState::Loading => html! {
                    <Spinner message="Loading products..." />
                },
                ViewState::Error(msg) => html! {
                    <div class="error-state">
                        <p>{msg.clone()}</p>
                    </div>
                },
                ViewState::Idle => {
                    if products.is_empty() {
                        html! {
                            <div class="empty-state">
                                <p>{"No products tracked yet."}</p>
                                <p class="empty-state-hint">{"Add one from the home page."}</p>
                            </div>
                        }
                    } else {
                        html! {
                            <div class="products-grid">
                                {for products.iter().map(|product| html! {
                                    <ProductCard
                                        key={product.id.clone()}
                                        product={product.clone()}
                                        notify={notify.clone()}
                                        on_deleted={on_deleted.clone()}
                                    />
                                })}
                            </div>
                        }
                    }
                }
            }}
        </div>
    }
}

// Product card component

#[derive(Properties, PartialEq)]
struct ProductCardProps {
    product: Product,
    notify: Callback<Notification>,
    on_deleted: Callback<String>,
}

#[function_component(ProductCard)]
fn product_card(props: &ProductCardProps) -> Html {
    let scraping = use_state(|| false);
    let deleting = use_state(|| false);
    let product = &props.product;

    // Scrape-now handler
    let on_scrape = {
        let scraping = scraping.clone();
        let notify = props.notify.clone();
        let id = product.id.clone();

        Callback::from(move |_| {
            if *scraping {
                return;
            }
            scraping.set(true);

            let scraping = scraping.clone();
            let notify = notify.clone();
            let id = id.clone();

            spawn_local(async move {
                match api::scrape_product(&id).await {
                    Ok(outcome) => {
                        log::debug!("scraped {}: {}", outcome.product, outcome.message);
                        notify.emit(Notification::success(format!(
                            "Price scraped successfully! Current price: {}",
                            format_inr(outcome.price)
                        )));
                    }
                    Err(e) => {
                        log::error!("scrape failed for {}: {}", id, e);
                        notify.emit(Notification::error(e.user_message("Failed to scrape price")));
                    }
                }
                scraping.set(false);
            });
        })
    };

    // Delete handler, gated on a confirm dialog
    let on_delete = {
        let deleting = deleting.clone();
        let notify = props.notify.clone();
        let on_deleted = props.on_deleted.clone();
        let id = product.id.clone();

        Callback::from(move |_| {
            if *deleting || !confirm_delete() {
                return;
            }
            deleting.set(true);

            let deleting = deleting.clone();
            let notify = notify.clone();
            let on_deleted = on_deleted.clone();
            let id = id.clone();

            spawn_local(async move {
                match api::delete_product(&id).await {
                    Ok(outcome) => {
                        log::debug!("removed {}: {}", outcome.id, outcome.message);
                        notify.emit(Notification::success("Product deleted successfully!"));
                        deleting.set(false);
                        on_deleted.emit(id.clone());
                    }
                    Err(e) => {
                        log::error!("delete failed for {}: {}", id, e);
                        notify.emit(Notification::error(e.user_message("Failed to delete product")));
                        deleting.set(false);
                    }
                }
            });
        })
    };

    let platform_label = Platform::from_wire(&product.platform)
        .map(|p| p.display_name().to_string())
        .unwrap_or_else(|| product.platform.clone());

    html! {
        <div class="product-card">
            <div class="product-header">
                <h3 class="product-name">{&product.name}</h3>
                <span class={format!("platform-badge {}", product.platform)}>
                    {platform_label}
                </span>
            </div>

            <p class="product-date">
                {format!("Tracked since {}", display_date(&product.created_at))}
            </p>
            <p class="product-date">
                {format!("Last checked {}", display_date(&product.updated_at))}
            </p>
            <a class="product-link" href={product.url.clone()} target="_blank" rel="noopener">
                {"View product"}
            </a>

            <div class="product-actions">
                <ActionButton onclick={on_scrape} busy={*scraping}>
                    {"Check Price"}
                </ActionButton>
                <ActionButton onclick={on_delete} busy={*deleting} variant={ButtonVariant::Danger}>
                    {"Delete"}
                </ActionButton>
            </div>
        </div>
    }
}

// Helper functions

fn confirm_delete() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    window
        .confirm_with_message(CONFIRM_DELETE_PROMPT)
        .unwrap_or(false)
}

fn display_date(raw: &str) -> String {
    let date = js_sys::Date::new(&JsValue::from_str(raw));
    if date.get_time().is_nan() {
        return raw.to_string();
    }

    format!(
        "{:04}-{:02}-{:02}",
        date.get_full_year(),
        date.get_month() + 1,
        date.get_date()
    )
}
