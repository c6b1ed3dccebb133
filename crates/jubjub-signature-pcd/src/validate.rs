//! Presence checks on prover arguments.

use jubjub_pcd_types::{JubJubSignaturePcdArgs, PcdError, PcdResult};

/// All eight inputs, each known to be present and non-empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidatedArgs<'a> {
    /// `R8` x coordinate.
    pub x_r8: &'a str,
    /// `R8` y coordinate.
    pub y_r8: &'a str,
    /// Signature scalar.
    pub s: &'a str,
    /// Public key x coordinate.
    pub x_signing_key: &'a str,
    /// Public key y coordinate.
    pub y_signing_key: &'a str,
    /// Signed message.
    pub message: &'a str,
    /// First pre-image element.
    pub x_pre_image: &'a str,
    /// Second pre-image element.
    pub y_pre_image: &'a str,
}

/// Checks presence in the order signature, keys, message, pre-image and
/// reports the first missing category.
pub fn validate_args(args: &JubJubSignaturePcdArgs) -> PcdResult<ValidatedArgs<'_>> {
    let (Some(x_r8), Some(y_r8), Some(s)) =
        (args.x_r8.present(), args.y_r8.present(), args.s.present())
    else {
        return Err(PcdError::InvalidSignatureInput);
    };

    let (Some(x_signing_key), Some(y_signing_key)) =
        (args.x_signing_key.present(), args.y_signing_key.present())
    else {
        return Err(PcdError::InvalidKeyInput);
    };

    let message = args.message.present().ok_or(PcdError::InvalidMessageInput)?;

    let (Some(x_pre_image), Some(y_pre_image)) =
        (args.x_pre_image.present(), args.y_pre_image.present())
    else {
        return Err(PcdError::InvalidPreImageInput);
    };

    Ok(ValidatedArgs {
        x_r8,
        y_r8,
        s,
        x_signing_key,
        y_signing_key,
        message,
        x_pre_image,
        y_pre_image,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use jubjub_pcd_types::BigIntArgument;

    fn full_args() -> JubJubSignaturePcdArgs {
        JubJubSignaturePcdArgs::from_values("1", "2", "3", "4", "5", "6", "7", "8")
    }

    #[test]
    fn test_all_present() {
        let args = full_args();
        let validated = validate_args(&args).unwrap();
        assert_eq!(validated.x_r8, "1");
        assert_eq!(validated.s, "3");
        assert_eq!(validated.y_signing_key, "5");
        assert_eq!(validated.y_pre_image, "8");
    }

    #[test]
    fn test_each_missing_slot_maps_to_its_error() {
        let cases: [(fn(&mut JubJubSignaturePcdArgs), PcdError); 8] = [
            (|a| a.x_r8 = BigIntArgument::empty(), PcdError::InvalidSignatureInput),
            (|a| a.y_r8 = BigIntArgument::empty(), PcdError::InvalidSignatureInput),
            (|a| a.s = BigIntArgument::empty(), PcdError::InvalidSignatureInput),
            (|a| a.x_signing_key = BigIntArgument::empty(), PcdError::InvalidKeyInput),
            (|a| a.y_signing_key = BigIntArgument::empty(), PcdError::InvalidKeyInput),
            (|a| a.message = BigIntArgument::empty(), PcdError::InvalidMessageInput),
            (|a| a.x_pre_image = BigIntArgument::empty(), PcdError::InvalidPreImageInput),
            (|a| a.y_pre_image = BigIntArgument::empty(), PcdError::InvalidPreImageInput),
        ];

        for (clear, expected) in cases {
            let mut args = full_args();
            clear(&mut args);
            assert_eq!(validate_args(&args), Err(expected));
        }
    }

    #[test]
    fn test_empty_string_counts_as_missing() {
        let mut args = full_args();
        args.message = BigIntArgument::new("");
        assert_eq!(validate_args(&args), Err(PcdError::InvalidMessageInput));
    }

    #[test]
    fn test_signature_reported_before_later_categories() {
        let args = JubJubSignaturePcdArgs {
            s: BigIntArgument::empty(),
            y_signing_key: BigIntArgument::empty(),
            message: BigIntArgument::empty(),
            x_pre_image: BigIntArgument::empty(),
            ..full_args()
        };
        assert_eq!(validate_args(&args), Err(PcdError::InvalidSignatureInput));

        let args = JubJubSignaturePcdArgs {
            message: BigIntArgument::empty(),
            y_pre_image: BigIntArgument::empty(),
            ..full_args()
        };
        assert_eq!(validate_args(&args), Err(PcdError::InvalidMessageInput));
    }

    #[test]
    fn test_validation_does_not_parse() {
        let args = JubJubSignaturePcdArgs::from_values("x", "y", "z", "k", "k", "m", "p", "q");
        assert!(validate_args(&args).is_ok());
    }
}
