//! Admin dashboard view
//!
//! shows "Loading..." until the mount's single fetch settles, then the
//! welcome line, the status line and the orders list.

use leptos::prelude::*;
use shared::{AppConfig, DashboardState, OrderItem, RenderedDashboard};

use crate::api::DashboardSource;

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let source = use_context::<DashboardSource>()
        .unwrap_or_else(|| DashboardSource::http(config.endpoint.clone()));
    let policy = config.failure_policy;
    let (state, set_state) = signal(DashboardState::Loading);

    // the body runs once per mount, so this is the only request this view
    // makes. it is not aborted on unmount.
    let request = source.fetch();
    leptos::task::spawn_local(async move {
        let outcome = request
            .await
            .and_then(|response| policy.evaluate(&response));

        match set_state.try_update(|state| state.settle(policy, outcome)) {
            Some(Some(err)) => log::error!("unhandled dashboard failure: {err}"),
            Some(None) => {}
            None => log::debug!("dashboard response arrived after unmount, dropped"),
        }
    });

    move || match state.get() {
        DashboardState::Loading => view! { <p>"Loading..."</p> }.into_any(),
        DashboardState::Loaded(payload) => match RenderedDashboard::from_payload(&payload) {
            Ok(rendered) => view! { <DashboardBody rendered=rendered /> }.into_any(),
            Err(err) => {
                log::error!("unhandled dashboard failure: {err}");
                ().into_any()
            }
        },
        DashboardState::Failed(message) => view! {
            <p class="error">"Error: "{message}</p>
        }
        .into_any(),
    }
}

#[component]
fn DashboardBody(rendered: RenderedDashboard) -> impl IntoView {
    let RenderedDashboard {
        welcome,
        status,
        orders,
    } = rendered;

    view! {
        <div>
            <p>{welcome}</p>
            <p>{status}</p>
            <ul>
                // keyed by position, not content
                <For
                    each=move || orders.clone()
                    key=|order: &OrderItem| order.index
                    children=|order: OrderItem| view! { <li>{order.text}</li> }
                />
            </ul>
        </div>
    }
}

// ==============================================================================
// tests
// ==============================================================================
