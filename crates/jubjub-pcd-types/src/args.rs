//! Prover inputs as a host supplies them: eight optional decimal strings.

use serde::{Deserialize, Serialize};

/// One numeric input slot. Absent and empty values are treated alike.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BigIntArgument {
    /// Raw decimal text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl BigIntArgument {
    /// Slot holding `value`.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }

    /// Slot with nothing in it.
    pub fn empty() -> Self {
        Self { value: None }
    }

    /// The value, if present and non-empty.
    pub fn present(&self) -> Option<&str> {
        self.value.as_deref().filter(|v| !v.is_empty())
    }
}

impl From<&str> for BigIntArgument {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<Option<String>> for BigIntArgument {
    fn from(value: Option<String>) -> Self {
        Self { value }
    }
}

/// All prover inputs. Keys follow the host's argument names.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JubJubSignaturePcdArgs {
    /// `R8` x coordinate.
    #[serde(rename = "xR8")]
    pub x_r8: BigIntArgument,
    /// `R8` y coordinate.
    #[serde(rename = "yR8")]
    pub y_r8: BigIntArgument,
    /// Signature scalar.
    #[serde(rename = "S")]
    pub s: BigIntArgument,
    /// Public key x coordinate.
    #[serde(rename = "xSigningKeys")]
    pub x_signing_key: BigIntArgument,
    /// Public key y coordinate.
    #[serde(rename = "ySigningKeys")]
    pub y_signing_key: BigIntArgument,
    /// The signed message.
    pub message: BigIntArgument,
    /// First pre-image element.
    #[serde(rename = "xMessagePreImage")]
    pub x_pre_image: BigIntArgument,
    /// Second pre-image element.
    #[serde(rename = "yMessagePreImage")]
    pub y_pre_image: BigIntArgument,
}

impl JubJubSignaturePcdArgs {
    /// Every slot filled, in wire order.
    #[allow(clippy::too_many_arguments)]
    pub fn from_values(
        x_r8: &str,
        y_r8: &str,
        s: &str,
        x_signing_key: &str,
        y_signing_key: &str,
        message: &str,
        x_pre_image: &str,
        y_pre_image: &str,
    ) -> Self {
        Self {
            x_r8: x_r8.into(),
            y_r8: y_r8.into(),
            s: s.into(),
            x_signing_key: x_signing_key.into(),
            y_signing_key: y_signing_key.into(),
            message: message.into(),
            x_pre_image: x_pre_image.into(),
            y_pre_image: y_pre_image.into(),
        }
    }
}
