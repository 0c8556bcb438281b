pub mod assembler;
pub mod gate;
pub mod resolver;
pub mod session;

pub use assembler::{assemble, IntakeHost};
pub use gate::{FieldIssue, IssueReason, ValidationGate};
pub use resolver::{ChangeOutcome, DependencyResolver};
pub use session::{JumpOutcome, NextOutcome, SubmitOutcome, WizardSession};
