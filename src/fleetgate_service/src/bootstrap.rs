use color_eyre::eyre::Result;
use secrecy::ExposeSecret;

use fleetgate_adapters::config::settings::BootstrapSettings;
use fleetgate_application::RegisterAdministratorUseCase;
use fleetgate_core::{AdministratorDraft, AdministratorStore};

/// Seeds the first administrator so a fresh deployment can log in at all.
///
/// Runs only against an empty store; once any administrator exists the
/// configured seed is ignored. Skipped with a warning when the bootstrap
/// settings are blank.
#[tracing::instrument(name = "Bootstrap administrator", skip_all)]
pub async fn ensure_bootstrap_administrator<S>(
    store: &S,
    settings: &BootstrapSettings,
) -> Result<()>
where
    S: AdministratorStore + Clone,
{
    if store.count().await? > 0 {
        tracing::debug!("administrators already present, skipping bootstrap seed");
        return Ok(());
    }

    if settings.admin_email.trim().is_empty()
        || settings.admin_secret.expose_secret().trim().is_empty()
        || settings.admin_duress_secret.expose_secret().trim().is_empty()
    {
        tracing::warn!("no bootstrap administrator configured, store starts empty");
        return Ok(());
    }

    let draft = AdministratorDraft::parse(
        &settings.admin_email,
        settings.admin_secret.clone(),
        settings.admin_duress_secret.clone(),
        "Admin",
    )?;

    let administrator = RegisterAdministratorUseCase::new(store.clone())
        .execute(draft)
        .await?;

    tracing::info!(email = %administrator.email, "seeded bootstrap administrator");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleetgate_adapters::persistence::InMemoryAdministratorStore;
    use fleetgate_core::{CredentialHasher, Role};
    use secrecy::Secret;

    fn settings(email: &str, secret: &str, duress: &str) -> BootstrapSettings {
        BootstrapSettings {
            admin_email: email.to_string(),
            admin_secret: Secret::from(secret.to_string()),
            admin_duress_secret: Secret::from(duress.to_string()),
        }
    }

    #[tokio::test]
    async fn seeds_an_admin_into_an_empty_store() {
        let store = InMemoryAdministratorStore::new();
        let settings = settings("root@example.com", "RealPass1", "DecoyPass1");

        ensure_bootstrap_administrator(&store, &settings).await.unwrap();

        assert_eq!(store.count().await.unwrap(), 1);
        let seeded = store.list(None).await.unwrap().remove(0);
        assert_eq!(seeded.role, Role::Admin);
        let hasher = CredentialHasher;
        assert!(hasher.verify(&seeded.secret_hash, "RealPass1"));
        assert!(hasher.verify(&seeded.duress_hash, "DecoyPass1"));
    }

    #[tokio::test]
    async fn skips_when_store_already_has_administrators() {
        let store = InMemoryAdministratorStore::new();
        ensure_bootstrap_administrator(&store, &settings("a@example.com", "RealPass1", "DecoyPass1"))
            .await
            .unwrap();
        ensure_bootstrap_administrator(&store, &settings("b@example.com", "OtherPass1", "OtherDecoy1"))
            .await
            .unwrap();

        assert_eq!(store.count().await.unwrap(), 1);
        let seeded = store.list(None).await.unwrap().remove(0);
        assert_eq!(seeded.email.as_str(), "a@example.com");
    }

    #[tokio::test]
    async fn skips_when_not_configured() {
        let store = InMemoryAdministratorStore::new();
        ensure_bootstrap_administrator(&store, &settings("", "", "")).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn rejects_an_invalid_seed() {
        let store = InMemoryAdministratorStore::new();
        let result =
            ensure_bootstrap_administrator(&store, &settings("root@example.com", "same", "same"))
                .await;
        assert!(result.is_err());
        assert_eq!(store.count().await.unwrap(), 0);
    }
}
