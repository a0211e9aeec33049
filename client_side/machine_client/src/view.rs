use common::api::{MachineStats, MachineStatus};

/// What the panel shows. Rebuilt from every successful poll and never merged with the
/// previous one.
#[derive(Clone, PartialEq, Debug)]
pub struct MachineStatusView {
    pub credit: f64,
    pub state: String,
    pub stats: Option<MachineStats>,
}

impl MachineStatusView {
    pub fn credit_label(&self) -> String {
        format!("Credit: {}", format_credit(self.credit))
    }
    /// The machine's state, exactly as the service reported it.
    pub fn state_label(&self) -> &str {
        &self.state
    }
    pub fn stats_label(&self) -> Option<String> {
        self.stats.as_ref().map(|stats| format!(
            "Cash box: {}, items sold: {}",
            format_credit(stats.cash_box),
            stats.items_sold
        ))
    }
}

impl From<MachineStatus> for MachineStatusView {
    fn from(status: MachineStatus) -> Self {
        MachineStatusView {
            credit: status.deposit,
            state: status.state,
            stats: status.stats,
        }
    }
}

/// Whole amounts print without decimals, anything else with cents. Rounds to the cent
/// before deciding which.
pub fn format_credit(amount: f64) -> String {
    let cents = (amount * 100.0).round();
    if cents % 100.0 == 0.0 {
        format!("${:.0}", cents / 100.0)
    } else {
        format!("${:.2}", cents / 100.0)
    }
}

/// The rendering surface the poller writes to.
pub trait StatusSink {
    fn render(&self, view: &MachineStatusView);
}

impl<S: StatusSink + ?Sized> StatusSink for &S {
    fn render(&self, view: &MachineStatusView) {
        (**self).render(view)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn whole_credit_has_no_decimals() {
        assert_eq!(format_credit(3.0), "$3");
        assert_eq!(format_credit(0.0), "$0");
        assert_eq!(format_credit(120.0), "$120");
    }

    #[test]
    fn fractional_credit_has_cents() {
        assert_eq!(format_credit(1.5), "$1.50");
        assert_eq!(format_credit(0.25), "$0.25");
    }

    #[test]
    fn rounds_to_cents_before_dropping_decimals() {
        assert_eq!(format_credit(2.999), "$3");
        assert_eq!(format_credit(2.994), "$2.99");
        assert_eq!(format_credit(0.001), "$0");
    }

    #[test]
    fn labels_come_from_status() {
        let view = MachineStatusView::from(MachineStatus {
            deposit: 3.0,
            state: "idle".to_string(),
            stats: Some(MachineStats { cash_box: 40.0, items_sold: 17 }),
        });
        assert_eq!(view.credit_label(), "Credit: $3");
        assert_eq!(view.state_label(), "idle");
        assert_eq!(view.stats_label().as_deref(), Some("Cash box: $40, items sold: 17"));
    }

    #[test]
    fn state_is_not_interpreted() {
        let view = MachineStatusView { credit: 0.0, state: "  Out Of Service! ".to_string(), stats: None };
        assert_eq!(view.state_label(), "  Out Of Service! ");
        assert_eq!(view.stats_label(), None);
    }
}
