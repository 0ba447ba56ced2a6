//! # Vigil Runtime
//!
//! Wires the registry together with the in-memory adapters and runs a
//! seeded end-to-end scenario: users sign up, cases move through the
//! lifecycle, a signal is recorded, and the resulting projections and
//! ledgers are printed as JSON.
//!
//! ## Startup Sequence
//!
//! 1. Initialize the `tracing` subscriber (`RUST_LOG` honored).
//! 2. Build the store and the identity/time adapters.
//! 3. Seed the user directory and credentials.
//! 4. Run the scenario through the public facades only.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use vigil_engine::adapters::{InMemoryIdentityProvider, SystemTimeSource};
use vigil_engine::{
    CallerContext, CaseApi, CaseListFilter, CreateCaseInput, CreateSignalInput, Registry,
    RegistryConfig, SignalApi, UserApi,
};
use vigil_store::Database;
use vigil_types::{
    CaseStatus, DetectionMethod, Priority, ReporterType, Role, SignalStrength, UserAccount, UserId,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("starting vigil registry");

    let db = Arc::new(Database::new());
    let identity = InMemoryIdentityProvider::new();

    // Seed the identity collaborator: two staff accounts.
    let officer = UserId::new();
    let reviewer = UserId::new();
    identity.register("token-officer", officer);
    identity.register("token-reviewer", reviewer);
    {
        let mut guard = db.write();
        guard.directory.upsert(
            officer,
            UserAccount {
                name: Some("Dana Osei".to_owned()),
                email: Some("dana.osei@example.org".to_owned()),
            },
        );
        guard.directory.upsert(
            reviewer,
            UserAccount {
                name: None,
                email: Some("reviewer@example.org".to_owned()),
            },
        );
    }

    let registry = Registry::new(
        Arc::clone(&db),
        identity,
        SystemTimeSource,
        RegistryConfig::default(),
    );
    let cases = registry.cases();
    let signals = registry.signals();
    let users = registry.users();

    let officer_ctx = CallerContext::authenticated("token-officer").with_ip("10.0.0.7");
    let reviewer_ctx = CallerContext::authenticated("token-reviewer");

    // Profiles: the officer manages users, the reviewer reviews.
    users
        .create_user_profile(&officer_ctx, Role::Admin, "Pharmacovigilance".to_owned())
        .context("officer profile")?;
    users
        .create_user_profile(&reviewer_ctx, Role::Reviewer, "Safety Review".to_owned())
        .context("reviewer profile")?;
    users.update_last_login(&officer_ctx);

    // A case moves draft -> under_review, gets assigned, and closes.
    let case_id = cases
        .create_case(
            &officer_ctx,
            CreateCaseInput {
                priority: Priority::High,
                patient_age: Some(54),
                patient_gender: None,
                patient_weight: Some(72.5),
                product_name: "DrugX".to_owned(),
                batch_number: Some("B-2218".to_owned()),
                indication: Some("Hypertension".to_owned()),
                dosage: Some("10 mg daily".to_owned()),
                adverse_event: "Severe headache".to_owned(),
                event_description: "Recurring severe headache after dose increase".to_owned(),
                event_date: 1_755_000_000_000,
                report_date: 1_755_100_000_000,
                seriousness: true,
                outcome: None,
                reporter_type: ReporterType::HealthcareProfessional,
                reporter_country: "DE".to_owned(),
            },
        )
        .context("create case")?;

    cases
        .update_case_status(
            &officer_ctx,
            &case_id,
            CaseStatus::UnderReview,
            Some("Escalating for medical review".to_owned()),
        )
        .context("escalate case")?;
    cases
        .assign_case(&officer_ctx, &case_id, reviewer)
        .context("assign case")?;
    cases
        .update_case_status(&reviewer_ctx, &case_id, CaseStatus::Closed, None)
        .context("close case")?;

    // A signal over the same product/event pair.
    signals
        .create_signal(
            &officer_ctx,
            CreateSignalInput {
                signal_name: "DrugX / Severe headache".to_owned(),
                description: "Cluster of headache reports after dose increases".to_owned(),
                product_name: "DrugX".to_owned(),
                adverse_event: "Severe headache".to_owned(),
                detection_method: DetectionMethod::ClinicalReview,
                strength: SignalStrength::Moderate,
                related_cases: vec![case_id],
                assigned_to: Some(reviewer),
            },
        )
        .context("create signal")?;

    // Project the results.
    let detail = cases.get_case(&officer_ctx, &case_id).context("get case")?;
    println!("{}", serde_json::to_string_pretty(&detail)?);

    let listing = cases.get_cases(&officer_ctx, &CaseListFilter::default(), None)?;
    info!(cases = listing.len(), "case listing");

    let stats = cases.get_case_stats(&officer_ctx)?;
    println!("{}", serde_json::to_string_pretty(&stats)?);

    let signal_stats = signals.get_signal_stats(&officer_ctx)?;
    println!("{}", serde_json::to_string_pretty(&signal_stats)?);

    let staff = users.get_all_users(&officer_ctx).context("list users")?;
    info!(profiles = staff.len(), "user listing");

    let store = registry.database().read();
    info!(
        audit_entries = store.audit.len(),
        workflow_entries = store.workflow.len(),
        "ledgers written"
    );

    Ok(())
}
