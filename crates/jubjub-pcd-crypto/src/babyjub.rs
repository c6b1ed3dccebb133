//! Baby Jubjub: the twisted Edwards curve `168700·x² + y² = 1 + 168696·x²·y²`
//! over the BN254 scalar field, with cofactor 8.
//!
//! Coordinates follow the circom/iden3 convention (not the rescaled `a = 1`
//! form used by `ark-ed-on-bn254`); only the prime-order scalar field is
//! borrowed from that crate. The configured generator is `Base8`, which
//! spans the prime-order subgroup.

use ark_bn254::Fr as Fq;
use ark_ec::{
    models::CurveConfig,
    twisted_edwards::{Affine, MontCurveConfig, Projective, TECurveConfig},
};
use ark_ed_on_bn254::Fr as SubgroupScalar;
use ark_ff::{BigInteger, MontFp, PrimeField};
use num_bigint::{BigInt, BigUint};
use std::sync::OnceLock;

use crate::field::fr_from_canonical;

/// Affine Baby Jubjub point.
pub type BabyJubJubAffine = Affine<BabyJubJubConfig>;
/// Projective Baby Jubjub point, used for arithmetic.
pub type BabyJubJubProjective = Projective<BabyJubJubConfig>;

/// Curve parameters in circom coordinates.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct BabyJubJubConfig;

impl CurveConfig for BabyJubJubConfig {
    type BaseField = Fq;
    type ScalarField = SubgroupScalar;

    const COFACTOR: &'static [u64] = &[8];

    /// 8^{-1} mod l
    const COFACTOR_INV: SubgroupScalar =
        MontFp!("2394026564107420727433200628387514462817212225638746351800188703329891451411");
}

impl TECurveConfig for BabyJubJubConfig {
    const COEFF_A: Fq = MontFp!("168700");
    const COEFF_D: Fq = MontFp!("168696");
    const GENERATOR: BabyJubJubAffine = BabyJubJubAffine::new_unchecked(BASE8_X, BASE8_Y);

    type MontCurveConfig = BabyJubJubConfig;
}

impl MontCurveConfig for BabyJubJubConfig {
    const COEFF_A: Fq = MontFp!("168698");
    const COEFF_B: Fq = MontFp!("1");

    type TECurveConfig = BabyJubJubConfig;
}

/// `Base8.x`
pub const BASE8_X: Fq =
    MontFp!("5299619240641551281634865583518297030282874472190772894086521144482721001553");
/// `Base8.y`
pub const BASE8_Y: Fq =
    MontFp!("16950150798460657717958625567821834550301663161624707787222815936182638968203");

static SUBGROUP_ORDER: OnceLock<BigUint> = OnceLock::new();

/// Generator of the prime-order subgroup.
pub fn base8() -> BabyJubJubAffine {
    BabyJubJubConfig::GENERATOR
}

/// Prime subgroup order `l`.
pub fn subgroup_order() -> &'static BigUint {
    SUBGROUP_ORDER
        .get_or_init(|| BigUint::from_bytes_le(&SubgroupScalar::MODULUS.to_bytes_le()))
}

/// Affine point from integer coordinates, if both lie in the field and the
/// point is on the curve. Subgroup membership is not checked.
pub fn point_from_coordinates(x: &BigInt, y: &BigInt) -> Option<BabyJubJubAffine> {
    let point = BabyJubJubAffine::new_unchecked(fr_from_canonical(x)?, fr_from_canonical(y)?);
    point.is_on_curve().then_some(point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::fr_to_bigint;
    use ark_ec::{AffineRepr, CurveGroup};
    use ark_ff::Zero;

    #[test]
    fn test_base8_on_curve_and_in_subgroup() {
        let b8 = base8();
        assert!(b8.is_on_curve());
        assert!(b8.is_in_correct_subgroup_assuming_on_curve());
        assert!(b8.mul_bigint(subgroup_order().to_u64_digits()).is_zero());
    }

    #[test]
    fn test_subgroup_order() {
        assert_eq!(
            subgroup_order().to_string(),
            "2736030358979909402780800718157159386076813972158567259200215660948447373041"
        );
    }

    #[test]
    fn test_point_from_coordinates() {
        let b8 = base8();
        let (x, y) = (fr_to_bigint(&b8.x), fr_to_bigint(&b8.y));
        assert_eq!(point_from_coordinates(&x, &y), Some(b8));

        // Off-curve
        assert!(point_from_coordinates(&x, &(y.clone() + 1)).is_none());
        // Out of field range
        assert!(point_from_coordinates(&BigInt::from(-1), &y).is_none());
        // Identity (0, 1) is on the curve
        assert!(point_from_coordinates(&BigInt::from(0), &BigInt::from(1)).is_some());
    }

    #[test]
    fn test_group_law_consistency() {
        let b8 = base8();
        let two = b8.mul_bigint([2u64]).into_affine();
        let sum = (b8.into_group() + b8.into_group()).into_affine();
        assert_eq!(two, sum);
        assert!(two.is_on_curve());
    }
}
