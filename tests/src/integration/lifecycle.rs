//! # Lifecycle Flows
//!
//! Full create → activate → execute flows through the service, including
//! the forbidden-caller probes and the reveal gate.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use willvault_core::{
        domain::codec, Address, ApprovingSigner, ChallengeParams, FixedTimeSource, InMemoryLedger,
        RejectingSigner, Signer, WillId, WillStatus, WillVaultApi, WillVaultError,
        WillVaultService,
    };

    fn vault<S: Signer>(
        signer: S,
    ) -> WillVaultService<InMemoryLedger, S, FixedTimeSource> {
        WillVaultService::new(
            Arc::new(InMemoryLedger::new()),
            signer,
            FixedTimeSource::at(1_700_000_000),
        )
    }

    fn owner() -> Address {
        Address::new("0xOwner")
    }

    fn beneficiary() -> Address {
        Address::new("0xBeneficiary")
    }

    fn executor() -> Address {
        Address::new("0xExecutor")
    }

    #[tokio::test]
    async fn test_create_then_load_preserves_fields() {
        let vault = vault(ApprovingSigner::new());
        let will = vault
            .create_will(owner(), beneficiary(), executor(), 10.0, "per stirpes".into())
            .await
            .unwrap();

        let loaded = vault.get_will(&will.id).await.unwrap().unwrap();
        assert_eq!(loaded.beneficiary, beneficiary());
        assert_eq!(loaded.executor, executor());
        assert_eq!(loaded.status, WillStatus::Draft);
        assert_eq!(loaded.conditions, "per stirpes");
        assert_eq!(codec::decode(&loaded.obfuscated_value).unwrap(), 10.0);
    }

    #[tokio::test]
    async fn test_full_lifecycle_with_forbidden_probe() {
        let vault = vault(ApprovingSigner::new());
        let will = vault
            .create_will(owner(), beneficiary(), executor(), 10.0, String::new())
            .await
            .unwrap();
        assert_eq!(will.status, WillStatus::Draft);

        let activated = vault.activate(&will.id, &owner()).await.unwrap();
        assert_eq!(activated.status, WillStatus::Active);

        // Someone other than the executor cannot execute; status holds.
        let err = vault
            .execute(&will.id, &Address::new("0xSomeoneElse"))
            .await
            .unwrap_err();
        assert!(matches!(err, WillVaultError::Forbidden { .. }));
        let held = vault.get_will(&will.id).await.unwrap().unwrap();
        assert_eq!(held.status, WillStatus::Active);

        let executed = vault.execute(&will.id, &executor()).await.unwrap();
        assert_eq!(executed.status, WillStatus::Executed);
    }

    #[tokio::test]
    async fn test_lifecycle_is_monotonic() {
        let vault = vault(ApprovingSigner::new());
        let will = vault
            .create_will(owner(), beneficiary(), executor(), 10.0, String::new())
            .await
            .unwrap();

        // No skipping draft → executed.
        assert!(matches!(
            vault.execute(&will.id, &executor()).await.unwrap_err(),
            WillVaultError::InvalidTransition { .. }
        ));

        vault.activate(&will.id, &owner()).await.unwrap();
        vault.execute(&will.id, &executor()).await.unwrap();

        // Executed is terminal; nothing moves it again.
        assert!(matches!(
            vault.activate(&will.id, &owner()).await.unwrap_err(),
            WillVaultError::InvalidTransition { .. }
        ));
        assert!(matches!(
            vault.execute(&will.id, &executor()).await.unwrap_err(),
            WillVaultError::InvalidTransition { .. }
        ));
        let stored = vault.get_will(&will.id).await.unwrap().unwrap();
        assert_eq!(stored.status, WillStatus::Executed);
    }

    #[tokio::test]
    async fn test_owner_case_differences_are_identity() {
        let vault = vault(ApprovingSigner::new());
        let will = vault
            .create_will(
                Address::new("0xAbCdEf"),
                beneficiary(),
                executor(),
                5.0,
                String::new(),
            )
            .await
            .unwrap();

        // Activation by the same address in different casing succeeds.
        let activated = vault
            .activate(&will.id, &Address::new("0XABCDEF"))
            .await
            .unwrap();
        assert_eq!(activated.status, WillStatus::Active);
    }

    #[tokio::test]
    async fn test_reveal_gated_on_signature() {
        let vault = vault(ApprovingSigner::new());
        let will = vault
            .create_will(owner(), beneficiary(), executor(), 1234.5, String::new())
            .await
            .unwrap();

        let params = ChallengeParams::new("0xsessionkey", "0xledger", 11155111, 1_700_000_000);
        let value = vault.reveal_value(&will.id, &params).await.unwrap();
        assert_eq!(value, 1234.5);
    }

    #[tokio::test]
    async fn test_reveal_rejected_by_user() {
        let vault = vault(RejectingSigner);
        let will = vault
            .create_will(owner(), beneficiary(), executor(), 1234.5, String::new())
            .await
            .unwrap();

        let params = ChallengeParams::new("0xsessionkey", "0xledger", 11155111, 1_700_000_000);
        assert_eq!(
            vault.reveal_value(&will.id, &params).await.unwrap_err(),
            WillVaultError::UserRejected
        );
    }

    #[tokio::test]
    async fn test_reveal_of_missing_will() {
        let vault = vault(ApprovingSigner::new());
        let params = ChallengeParams::new("0xsessionkey", "0xledger", 1, 1_700_000_000);
        assert!(matches!(
            vault
                .reveal_value(&WillId::from("0-missing"), &params)
                .await
                .unwrap_err(),
            WillVaultError::NotFound { .. }
        ));
    }
}
