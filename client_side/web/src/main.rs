mod request;
mod machine_panel;

use machine_panel::MachinePanel;
use sycamore::prelude::*;
use web_sys::window;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    if let Some(document) = window().and_then(|window| window.document()) {
        document.set_title("Vending Machine");
    }

    sycamore::render(|cx| {
        view! { cx,
            MachinePanel
        }
    });
}
