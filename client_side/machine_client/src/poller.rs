use std::cell::Cell;
use std::future::Future;
use std::pin::pin;

use common::api::CommandReply;
use futures::{Stream, StreamExt};

use crate::client::MachineClient;
use crate::error::ClientResult;
use crate::transport::Transport;
use crate::view::{MachineStatusView, StatusSink};

#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct PollStats {
    pub refreshes: u64,
    pub failures: u64,
    pub commands: u64,
}

/// Keeps a [`StatusSink`] eventually consistent with the machine and relays commands to it.
///
/// The sink is only ever written with a complete view from a successful poll; a failed poll
/// is logged and leaves whatever is on screen alone. Every command is followed by exactly
/// one refresh, whether or not the command went through.
pub struct StatusPoller<T, S> {
    client: MachineClient<T>,
    sink: S,
    stats: Cell<PollStats>,
}

impl<T: Transport, S: StatusSink> StatusPoller<T, S> {
    pub fn new(client: MachineClient<T>, sink: S) -> Self {
        StatusPoller {
            client,
            sink,
            stats: Cell::new(PollStats::default()),
        }
    }
    pub fn sink(&self) -> &S {
        &self.sink
    }
    pub fn stats(&self) -> PollStats {
        self.stats.get()
    }

    pub async fn refresh_status(&self) -> ClientResult<MachineStatusView> {
        self.update_stats(|stats| stats.refreshes += 1);
        match self.client.get_status().await {
            Ok(status) => {
                let view = MachineStatusView::from(status);
                log::debug!("Machine status: {:?}", view);
                self.sink.render(&view);
                Ok(view)
            }
            Err(error) => {
                self.update_stats(|stats| stats.failures += 1);
                log::warn!("Status refresh failed: {}", error);
                Err(error)
            }
        }
    }

    pub async fn insert_coin(&self, amount: u32) -> ClientResult<CommandReply> {
        let result = self.client.insert_coin(amount).await;
        self.reconcile("Coin insert", result).await
    }
    pub async fn vend_item(&self) -> ClientResult<CommandReply> {
        let result = self.client.vend_item().await;
        self.reconcile("Vend", result).await
    }
    pub async fn press_button(&self) -> ClientResult<CommandReply> {
        let result = self.client.press_button().await;
        self.reconcile("Button press", result).await
    }
    pub async fn trigger(&self, trigger_name: &str) -> ClientResult<CommandReply> {
        let result = self.client.trigger(trigger_name).await;
        self.reconcile("Trigger", result).await
    }

    // The display is never updated from a command reply; the server decides what the credit is.
    async fn reconcile(&self, command: &str, result: ClientResult<CommandReply>) -> ClientResult<CommandReply> {
        self.update_stats(|stats| stats.commands += 1);
        match &result {
            Ok(reply) => log::info!("{} accepted: {}", command, reply.message),
            Err(error) => log::warn!("{} failed: {}", command, error),
        }
        // Failures are already logged by the refresh itself.
        let _ = self.refresh_status().await;
        result
    }

    /// Refreshes once right away and then once per tick until `ticks` ends.
    ///
    /// Each refresh completes before the next tick is taken, so periodic polls never overlap.
    pub async fn run(&self, ticks: impl Stream<Item = ()>) {
        let _ = self.refresh_status().await;
        let mut ticks = pin!(ticks);
        while let Some(()) = ticks.next().await {
            let _ = self.refresh_status().await;
        }
    }

    /// Like [`run`](Self::run), but stops at the first tick boundary after `shutdown` resolves.
    pub async fn run_until(&self, ticks: impl Stream<Item = ()>, shutdown: impl Future<Output = ()>) {
        self.run(ticks.take_until(shutdown)).await;
        log::debug!("Status polling stopped");
    }

    fn update_stats(&self, update: impl FnOnce(&mut PollStats)) {
        let mut stats = self.stats.get();
        update(&mut stats);
        self.stats.set(stats);
    }
}
