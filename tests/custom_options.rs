mod common;

use common::{walk_to_final_stage, RecordingHost};

use intake_core::catalog::options::{OptionCatalog, OptionRepository};
use intake_core::catalog::Catalog;
use intake_core::core::{SubmitOutcome, WizardSession};
use intake_core::domain::FieldValue;
use intake_core::locale::Locale;
use intake_core::storage::JsonOptionStore;

#[test]
fn custom_option_is_usable_for_the_rest_of_the_session() {
    let mut session = WizardSession::new(Catalog::intake(), Locale::En);
    let mut host = RecordingHost::default();

    walk_to_final_stage(&mut session);
    let entry = session
        .add_custom_option("insurer", "Shire & Stable")
        .unwrap();
    assert_eq!(entry.slug, "shire_stable");

    session.apply("insured", FieldValue::Boolean(true)).unwrap();
    session
        .apply("insurer", FieldValue::choice(entry.slug.clone()))
        .unwrap();
    session
        .apply("policy_number", FieldValue::text("SS-0042"))
        .unwrap();

    let outcome = session.submit(&mut host).unwrap();
    assert!(matches!(outcome, SubmitOutcome::Saved(_)));
    assert_eq!(
        host.saved[0].values.get("insurer"),
        Some(&FieldValue::choice("shire_stable"))
    );
}

#[test]
fn custom_options_carry_across_sessions_through_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonOptionStore::new(dir.path()).unwrap();

    // First session invents an insurer; the host writes it through.
    {
        let mut session = WizardSession::new(Catalog::intake(), Locale::En);
        let entry = session
            .add_custom_option("insurer", "Paddock Direct")
            .unwrap();
        store.create("insurer", &entry).unwrap();
    }

    // A later session seeds its option catalog from the store.
    let mut options = OptionCatalog::standard();
    options
        .extend_custom("insurer", store.list("insurer").unwrap())
        .unwrap();
    let mut session = WizardSession::with_options(Catalog::intake(), Locale::Ar, options);
    let mut host = RecordingHost::default();

    walk_to_final_stage(&mut session);
    session.apply("insured", FieldValue::Boolean(true)).unwrap();
    session
        .apply("insurer", FieldValue::choice("paddock_direct"))
        .unwrap();
    session
        .apply("policy_number", FieldValue::text("PD-7"))
        .unwrap();

    let outcome = session.submit(&mut host).unwrap();
    assert!(matches!(outcome, SubmitOutcome::Saved(_)));
}

#[test]
fn unknown_custom_slug_still_fails_validation() {
    let mut session = WizardSession::new(Catalog::intake(), Locale::En);
    let mut host = RecordingHost::default();

    walk_to_final_stage(&mut session);
    session.apply("insured", FieldValue::Boolean(true)).unwrap();
    session
        .apply("insurer", FieldValue::choice("never_added"))
        .unwrap();
    session
        .apply("policy_number", FieldValue::text("X-1"))
        .unwrap();

    let outcome = session.submit(&mut host).unwrap();
    let SubmitOutcome::Blocked(issues) = outcome else {
        panic!("expected blocked submission, got {outcome:?}");
    };
    assert!(issues.iter().any(|issue| issue.field == "insurer"));
    assert!(host.saved.is_empty());
}
