//! Host-side table of PCD packages, keyed by type tag.

use async_trait::async_trait;
use jubjub_pcd_types::{DisplayOptions, PcdError, PcdResult, SerializedPcd};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::package::{JubJubSignaturePcdPackage, PcdPackage};

/// Object-safe view of a [`PcdPackage`] that works on serialized instances.
#[async_trait]
pub trait DynPcdPackage: Send + Sync {
    /// Type tag this package handles.
    fn name(&self) -> &'static str;

    /// Decodes, then verifies.
    async fn verify_serialized(&self, serialized: &SerializedPcd) -> PcdResult<bool>;

    /// Decodes, then derives display options.
    async fn display_options_serialized(
        &self,
        serialized: &SerializedPcd,
    ) -> PcdResult<DisplayOptions>;
}

#[async_trait]
impl<P> DynPcdPackage for P
where
    P: PcdPackage + 'static,
{
    fn name(&self) -> &'static str {
        P::NAME
    }

    async fn verify_serialized(&self, serialized: &SerializedPcd) -> PcdResult<bool> {
        let pcd = self.deserialize(&serialized.pcd).await?;
        self.verify(&pcd).await
    }

    async fn display_options_serialized(
        &self,
        serialized: &SerializedPcd,
    ) -> PcdResult<DisplayOptions> {
        let pcd = self.deserialize(&serialized.pcd).await?;
        Ok(self.display_options(&pcd))
    }
}

/// Packages keyed by type tag.
#[derive(Default)]
pub struct PcdRegistry {
    packages: HashMap<&'static str, Arc<dyn DynPcdPackage>>,
}

impl PcdRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the JubJub signature package installed.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(JubJubSignaturePcdPackage::new()));
        registry
    }

    /// Returns the package previously registered under the same name.
    pub fn register(&mut self, package: Arc<dyn DynPcdPackage>) -> Option<Arc<dyn DynPcdPackage>> {
        debug!(name = package.name(), "registering PCD package");
        self.packages.insert(package.name(), package)
    }

    /// Package registered under `name`.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn DynPcdPackage>> {
        self.packages.get(name)
    }

    /// Registered tags, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.packages.keys().copied().collect();
        names.sort_unstable();
        names
    }

    fn package_for(&self, serialized: &SerializedPcd) -> PcdResult<&Arc<dyn DynPcdPackage>> {
        self.get(&serialized.pcd_type)
            .ok_or_else(|| PcdError::UnknownPcdType(serialized.pcd_type.clone()))
    }

    /// Verifies with whichever package owns the envelope's tag.
    pub async fn verify(&self, serialized: &SerializedPcd) -> PcdResult<bool> {
        self.package_for(serialized)?.verify_serialized(serialized).await
    }

    /// Display options from whichever package owns the envelope's tag.
    pub async fn display_options(&self, serialized: &SerializedPcd) -> PcdResult<DisplayOptions> {
        self.package_for(serialized)?
            .display_options_serialized(serialized)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prover::{prove, prove_with};
    use crate::serialize::serialize;
    use crate::testing::{signed_args, REJECTING};
    use jubjub_pcd_types::{JubJubSignaturePcdArgs, JUBJUB_SIGNATURE_TYPE_NAME};

    #[tokio::test]
    async fn test_dispatch_by_type_tag() {
        let registry = PcdRegistry::with_defaults();
        assert_eq!(registry.names(), vec![JUBJUB_SIGNATURE_TYPE_NAME]);

        let serialized = serialize(&prove(&signed_args([1, 2])).unwrap()).unwrap();
        assert_eq!(registry.verify(&serialized).await, Ok(true));

        let options = registry.display_options(&serialized).await.unwrap();
        assert_eq!(options.header, "JubJub Signature");
    }

    #[tokio::test]
    async fn test_unknown_type() {
        let registry = PcdRegistry::with_defaults();
        let serialized = SerializedPcd {
            pcd_type: "unknown-pcd".into(),
            pcd: "{}".into(),
        };

        assert_eq!(
            registry.verify(&serialized).await,
            Err(PcdError::UnknownPcdType("unknown-pcd".into()))
        );
        assert!(PcdRegistry::new().verify(&serialized).await.is_err());
    }

    #[tokio::test]
    async fn test_register_replaces_same_name() {
        let mut registry = PcdRegistry::with_defaults();
        let previous = registry.register(Arc::new(JubJubSignaturePcdPackage::with_backend(REJECTING)));
        assert!(previous.is_some());
        assert_eq!(registry.names().len(), 1);

        let args = JubJubSignaturePcdArgs::from_values("1", "2", "3", "4", "5", "15", "7", "8");
        let pcd = prove_with(&crate::testing::ACCEPTING, &args).unwrap();
        let serialized = serialize(&pcd).unwrap();
        assert_eq!(registry.verify(&serialized).await, Ok(false));
    }

    #[tokio::test]
    async fn test_malformed_payload_surfaces_error() {
        let registry = PcdRegistry::with_defaults();
        let serialized = SerializedPcd {
            pcd_type: JUBJUB_SIGNATURE_TYPE_NAME.into(),
            pcd: "{\"type\":\"jubjub-signature-pcd\"}".into(),
        };
        assert!(matches!(
            registry.verify(&serialized).await,
            Err(PcdError::DeserializationFailed(_))
        ));
    }
}
