use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Clone)]
pub(crate) struct ObjectPage {
    pub(crate) results: Vec<PlayerRecord>
}

#[derive(Deserialize, Debug, Clone)]
pub(crate) struct PlayerRecord {
    pub(crate) id: String,
    pub(crate) properties: PlayerProperties
}

// Properties come back as strings or not at all, unknown ones are dropped
#[derive(Deserialize, Debug, Clone)]
pub(crate) struct PlayerProperties {
    #[serde(default)]
    pub(crate) name: Option<String>,
    #[serde(default)]
    pub(crate) role: Option<String>,
    #[serde(default)]
    pub(crate) country: Option<String>
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub(crate) struct NewPlayer {
    pub(crate) name: String,
    pub(crate) role: String,
    pub(crate) country: String
}
