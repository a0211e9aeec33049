use gloo_timers::future::IntervalStream;
use machine_client::{MachineClient, MachineStatusView, StatusPoller, StatusSink};
use stylist::style;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;

use crate::request::WebTransport;

const POLL_INTERVAL_MS: u32 = 2000;
const COIN_AMOUNT: u32 = 1;

/// Writes each polled status into the panel's signal.
struct PanelSink<'a> {
    status: &'a Signal<Option<MachineStatusView>>,
}

impl<'a> StatusSink for PanelSink<'a> {
    fn render(&self, view: &MachineStatusView) {
        self.status.set(Some(view.clone()));
    }
}

#[component]
pub fn MachinePanel(cx: Scope) -> View<DomNode> {
    let css_style = style! { r#"
        display: flex;
        flex-direction: column;
        align-items: flex-start;
        padding: 1em;
        background-color: gray;
        .credit {
            font-size: 2em;
        }
        .stats {
            font-size: 0.8em;
        }
        .actions button {
            margin-right: 0.5em;
            cursor: pointer;
        }
    "#
    }.expect("CSS should work");
    log::debug!("Panel CSS class: {}", css_style.get_class_name());

    let status = create_signal(cx, None);
    let poller = create_ref(cx, StatusPoller::new(
        MachineClient::new(WebTransport::from_page()),
        PanelSink { status },
    ));
    // Polling ends when the panel's scope is dropped.
    spawn_local_scoped(cx, poller.run(IntervalStream::new(POLL_INTERVAL_MS)));

    let credit = create_memo(cx, move || {
        (*status.get()).as_ref().map_or("Waiting for machine...".to_string(), |view| view.credit_label())
    });
    let state = create_memo(cx, move || {
        (*status.get()).as_ref().map_or(String::new(), |view| view.state_label().to_string())
    });
    let stats = create_memo(cx, move || {
        (*status.get()).as_ref().and_then(|view| view.stats_label()).unwrap_or_default()
    });

    view! { cx,
        div(class=css_style.get_class_name()) {
            div(class="credit") { (credit.get()) }
            div(class="state") { (state.get()) }
            div(class="stats") { (stats.get()) }
            div(class="actions") {
                button(on:click=move |_| spawn_local_scoped(cx, async move {
                    let _ = poller.insert_coin(COIN_AMOUNT).await;
                })) { "Insert coin" }
                button(on:click=move |_| spawn_local_scoped(cx, async move {
                    let _ = poller.vend_item().await;
                })) { "Vend item" }
                button(on:click=move |_| spawn_local_scoped(cx, async move {
                    let _ = poller.press_button().await;
                })) { "Press button" }
            }
        }
    }
}
