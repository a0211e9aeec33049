use common::api::{self, CoinInsert, CommandReply, ErrorBody, MachineStatus};
use serde::de::DeserializeOwned;

use crate::error::{ClientError, ClientResult};
use crate::transport::{HttpMethod, RawResponse, Transport};

/// Typed access to the machine endpoints over some [`Transport`].
pub struct MachineClient<T> {
    transport: T,
}

impl<T: Transport> MachineClient<T> {
    pub fn new(transport: T) -> Self {
        MachineClient { transport }
    }

    pub async fn get_status(&self) -> ClientResult<MachineStatus> {
        let response = self.transport.request(HttpMethod::Get, api::MACHINE_STATUS, None).await?;
        decode(response)
    }
    pub async fn insert_coin(&self, amount: u32) -> ClientResult<CommandReply> {
        let body = serde_json::to_string(&CoinInsert { amount })
            .map_err(|e| ClientError::Parse(e.to_string()))?;
        self.command(api::COIN_INSERT, Some(body)).await
    }
    pub async fn vend_item(&self) -> ClientResult<CommandReply> {
        self.command(api::VEND_ITEM, None).await
    }
    pub async fn press_button(&self) -> ClientResult<CommandReply> {
        self.command(api::BUTTON_PRESS, None).await
    }
    pub async fn trigger(&self, trigger_name: &str) -> ClientResult<CommandReply> {
        if !is_valid_trigger_name(trigger_name) {
            return Err(ClientError::InvalidTrigger(trigger_name.to_string()));
        }
        self.command(&api::trigger_path(trigger_name), None).await
    }

    async fn command(&self, path: &str, body: Option<String>) -> ClientResult<CommandReply> {
        let response = self.transport.request(HttpMethod::Post, path, body).await?;
        decode(response)
    }
}

// Trigger names go into the query string unescaped, so only identifiers are allowed.
fn is_valid_trigger_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

pub fn decode<R: DeserializeOwned>(response: RawResponse) -> ClientResult<R> {
    if !response.is_success() {
        let detail = match serde_json::from_str::<ErrorBody>(&response.body) {
            Ok(error) => error.detail_text(),
            Err(_) => response.body,
        };
        return Err(ClientError::Protocol { status: response.status, detail });
    }
    serde_json::from_str(&response.body).map_err(|e| ClientError::Parse(e.to_string()))
}
