//! Fixed names and display strings.

/// Package name, also the `type` tag carried by every serialized instance.
pub const JUBJUB_SIGNATURE_TYPE_NAME: &str = "jubjub-signature-pcd";

/// Header shown above every instance.
pub const DISPLAY_HEADER: &str = "JubJub Signature";

/// Start of every display name.
pub const DISPLAY_NAME_PREFIX: &str = "jubjub-sig-";

/// Characters of `R8[0]` shown after [`DISPLAY_NAME_PREFIX`].
pub const DISPLAY_NAME_ID_CHARS: usize = 5;
