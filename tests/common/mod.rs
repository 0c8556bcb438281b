use chrono::NaiveDate;

use intake_core::core::{IntakeHost, WizardSession};
use intake_core::domain::{FieldValue, FinalRecord};
use intake_core::errors::SaveError;

/// Host double that records saves and can reject the next attempt.
#[derive(Default)]
pub struct RecordingHost {
    pub saved: Vec<FinalRecord>,
    pub cancelled: usize,
    pub reject_with: Option<String>,
}

impl IntakeHost for RecordingHost {
    fn save(&mut self, record: FinalRecord) -> Result<(), SaveError> {
        if let Some(reason) = self.reject_with.take() {
            return Err(SaveError::new(reason));
        }
        self.saved.push(record);
        Ok(())
    }

    fn cancel(&mut self) {
        self.cancelled += 1;
    }
}

pub fn sample_date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn fill_identity(session: &mut WizardSession<'_>) {
    session.apply("name", FieldValue::text("Zephyr")).unwrap();
    session
        .apply("foaling_date", FieldValue::Date(sample_date(2018, 5, 14)))
        .unwrap();
    session.apply("sex", FieldValue::choice("gelding")).unwrap();
}

pub fn fill_ownership(session: &mut WizardSession<'_>) {
    session
        .apply("owner_name", FieldValue::text("R. Calloway"))
        .unwrap();
    session
        .apply("owner_contact", FieldValue::text("r.calloway@example.org"))
        .unwrap();
}

pub fn fill_health(session: &mut WizardSession<'_>) {
    session
        .apply("health_status", FieldValue::choice("sound"))
        .unwrap();
}

/// Fills every required answer and advances the session to the final stage.
pub fn walk_to_final_stage(session: &mut WizardSession<'_>) {
    fill_identity(session);
    fill_ownership(session);
    fill_health(session);
    for _ in 0..session.stage_count() - 1 {
        session.go_next().unwrap();
    }
}
