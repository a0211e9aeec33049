use std::cell::RefCell;
use std::io::Write;

use machine_client::{MachineStatusView, StatusSink};

pub fn status_line(view: &MachineStatusView) -> String {
    let mut line = format!("{} | State: {}", view.credit_label(), view.state_label());
    if let Some(stats) = view.stats_label() {
        line.push_str(" | ");
        line.push_str(&stats);
    }
    line
}

/// Prints a line per status, skipping polls that report exactly what is already shown.
pub struct TerminalSink<W> {
    out: RefCell<W>,
    shown: RefCell<Option<MachineStatusView>>,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        TerminalSink {
            out: RefCell::new(out),
            shown: RefCell::new(None),
        }
    }
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> StatusSink for TerminalSink<W> {
    fn render(&self, view: &MachineStatusView) {
        if self.shown.borrow().as_ref() == Some(view) {
            return;
        }
        let mut out = self.out.borrow_mut();
        if let Err(error) = writeln!(out, "{}", status_line(view)).and_then(|_| out.flush()) {
            tracing::warn!("Could not print status: {}", error);
            return;
        }
        *self.shown.borrow_mut() = Some(view.clone());
    }
}
