//! Host-facing records: the serialized envelope and display options.

use serde::{Deserialize, Serialize};

/// Envelope handed to hosts: the package tag plus the encoded payload text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedPcd {
    /// Package tag used for dispatch.
    #[serde(rename = "type")]
    pub pcd_type: String,
    /// JSON payload text.
    pub pcd: String,
}

/// How a host labels an instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayOptions {
    /// Same for every instance of the package.
    pub header: String,
    /// Short per-instance label.
    pub display_name: String,
}
