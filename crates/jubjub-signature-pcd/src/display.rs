//! Display labels.

use jubjub_pcd_types::{
    DisplayOptions, DISPLAY_HEADER, DISPLAY_NAME_ID_CHARS, DISPLAY_NAME_PREFIX,
};

use crate::pcd::JubJubSignaturePcd;

/// Short label built from the first characters of the claim's `R8[0]`.
/// Shorter values are shown whole.
pub fn get_display_options(pcd: &JubJubSignaturePcd) -> DisplayOptions {
    let r8_x: String = pcd.claim().signature.r8[0]
        .chars()
        .take(DISPLAY_NAME_ID_CHARS)
        .collect();

    DisplayOptions {
        header: DISPLAY_HEADER.to_string(),
        display_name: format!("{}{}", DISPLAY_NAME_PREFIX, r8_x),
    }
}
