use serde::{Serialize, Deserialize, Deserializer};

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct MachineStatus {
    pub deposit: f64,
    pub state: String,
    #[serde(default, deserialize_with = "stats_or_none")]
    pub stats: Option<MachineStats>,
}
// A stats block that doesn't decode is dropped rather than failing the whole status.
fn stats_or_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<MachineStats>, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct MachineStats {
    pub cash_box: f64,
    pub items_sold: u64,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct CoinInsert {
    pub amount: u32,
}

/// Reply to every command endpoint.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct CommandReply {
    pub message: String,
}

/// Body of a non-success response. `detail` is a string for command
/// failures and a list of field errors for rejected request bodies.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct ErrorBody {
    pub detail: serde_json::Value,
}
impl ErrorBody {
    pub fn detail_text(&self) -> String {
        match &self.detail {
            serde_json::Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }
}

//////
// Status
//////
pub const MACHINE_STATUS: &str = "/machine/status";

//////
// Commands
//////
pub const COIN_INSERT: &str = "/machine/coin_insert";
pub const VEND_ITEM: &str = "/machine/vend_item";
pub const BUTTON_PRESS: &str = "/machine/button_press";
/// Takes the trigger name as the `trigger_name` query parameter.
pub const TRIGGER: &str = "/machine/trigger";

pub fn trigger_path(trigger_name: &str) -> String {
    format!("{}?trigger_name={}", TRIGGER, trigger_name)
}
