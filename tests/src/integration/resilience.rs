//! # Resilience Flows
//!
//! Corrupt ledger entries, legacy record shapes, and an unavailable or
//! failing ledger must degrade exactly as specified: enumeration skips,
//! explicit loads surface, writes refuse.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use willvault_core::{
        Address, ApprovingSigner, FixedTimeSource, InMemoryLedger, Ledger, WillId, WillStatus,
        WillVaultApi, WillVaultError, WillVaultService, CATALOG_KEY,
    };

    fn vault_on(
        ledger: Arc<InMemoryLedger>,
    ) -> WillVaultService<InMemoryLedger, ApprovingSigner, FixedTimeSource> {
        WillVaultService::new(ledger, ApprovingSigner::new(), FixedTimeSource::at(1_700_000_000))
    }

    async fn seed_will(
        vault: &WillVaultService<InMemoryLedger, ApprovingSigner, FixedTimeSource>,
    ) -> WillId {
        vault
            .create_will(
                Address::new("0xOwner"),
                Address::new("0xBene"),
                Address::new("0xExec"),
                10.0,
                String::new(),
            )
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_corrupt_record_skipped_in_enumeration() {
        let ledger = Arc::new(InMemoryLedger::new());
        let vault = vault_on(Arc::clone(&ledger));
        let good_id = seed_will(&vault).await;

        // Corrupt a second, cataloged entry behind the store's back.
        let bad_id = seed_will(&vault).await;
        ledger
            .set_data(&format!("will_{bad_id}"), b"{truncated")
            .await
            .unwrap();

        let listed = vault.list_wills().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, good_id);

        // The explicit load of that exact id surfaces the corruption.
        assert!(matches!(
            vault.get_will(&bad_id).await.unwrap_err(),
            WillVaultError::MalformedData { .. }
        ));
    }

    #[tokio::test]
    async fn test_corrupt_record_blocks_mutation() {
        let ledger = Arc::new(InMemoryLedger::new());
        let vault = vault_on(Arc::clone(&ledger));
        let id = seed_will(&vault).await;
        ledger
            .set_data(&format!("will_{id}"), b"\xff\xfe")
            .await
            .unwrap();

        assert!(matches!(
            vault.activate(&id, &Address::new("0xOwner")).await.unwrap_err(),
            WillVaultError::MalformedData { .. }
        ));
    }

    #[tokio::test]
    async fn test_corrupt_catalog_reads_as_empty() {
        let ledger = Arc::new(InMemoryLedger::new());
        let vault = vault_on(Arc::clone(&ledger));
        seed_will(&vault).await;

        ledger.set_data(CATALOG_KEY, b"[[[").await.unwrap();
        assert!(vault.list_wills().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_legacy_record_defaults_to_draft() {
        let ledger = Arc::new(InMemoryLedger::new());
        let vault = vault_on(Arc::clone(&ledger));

        // A pre-lifecycle entry: plain numeric value, no status/conditions.
        ledger
            .set_data(
                "will_0-legacyy",
                br#"{"data":"42.5","timestamp":50,"owner":"0xOld","beneficiary":"0xB","executor":"0xE"}"#,
            )
            .await
            .unwrap();
        ledger
            .set_data(CATALOG_KEY, br#"["0-legacyy"]"#)
            .await
            .unwrap();

        let listed = vault.list_wills().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].status, WillStatus::Draft);
        assert_eq!(listed[0].conditions, "");

        // Legacy plain value still reveals through the fallback decode path.
        let params = willvault_core::ChallengeParams::new("0xpk", "0xledger", 1, 1_700_000_000);
        assert_eq!(
            vault.reveal_value(&listed[0].id, &params).await.unwrap(),
            42.5
        );
    }

    #[tokio::test]
    async fn test_unavailable_ledger_degrades_reads_refuses_writes() {
        let ledger = Arc::new(InMemoryLedger::new());
        let vault = vault_on(Arc::clone(&ledger));
        let id = seed_will(&vault).await;

        ledger.set_available(false);

        assert!(vault.list_wills().await.unwrap().is_empty());
        assert!(vault.get_will(&id).await.unwrap().is_none());
        assert_eq!(
            vault
                .create_will(
                    Address::new("0xOwner"),
                    Address::new("0xBene"),
                    Address::new("0xExec"),
                    1.0,
                    String::new(),
                )
                .await
                .unwrap_err(),
            WillVaultError::Unavailable
        );
    }

    #[tokio::test]
    async fn test_write_failure_surfaces_as_ledger_error() {
        let ledger = Arc::new(InMemoryLedger::new());
        let vault = vault_on(Arc::clone(&ledger));

        ledger.set_fail_writes(true);
        assert!(matches!(
            vault
                .create_will(
                    Address::new("0xOwner"),
                    Address::new("0xBene"),
                    Address::new("0xExec"),
                    1.0,
                    String::new(),
                )
                .await
                .unwrap_err(),
            WillVaultError::Ledger(_)
        ));
    }
}
