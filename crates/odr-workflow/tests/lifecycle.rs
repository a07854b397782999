//! End-to-end lifecycle coverage: a dispute from login through intake,
//! analysis, mediation, agreement, and completion, plus the guard
//! failures along the way.

use odr_case::intake::DraftParty;
use odr_case::{CaseError, DisputeType, PartyRole};
use odr_core::{FileMetadata, User};
use odr_session::{MessageKind, MessageSender, OwnerSide, SessionError};
use odr_workflow::{Delivery, Guard, Stage, WorkflowController, WorkflowError};

fn login(controller: &mut WorkflowController) {
    controller.login(User::new("Alice", "a@x.com"));
}

fn fill_draft(controller: &mut WorkflowController) {
    let draft = controller.draft_mut().expect("form stage has a draft");
    draft.dispute_type = Some(DisputeType::Freelance);
    draft.title = "Unpaid web development invoice".to_string();
    draft.description = "Work delivered, client withholding payment".to_string();
    draft.amount = "4000".to_string();
    draft.claimant = DraftParty {
        name: "Alice".to_string(),
        email: "a@x.com".to_string(),
    };
    draft.respondent = DraftParty {
        name: "Bob".to_string(),
        email: "b@x.com".to_string(),
    };
}

/// Drive a fresh controller to the mediation stage.
fn at_mediation() -> WorkflowController {
    let mut c = WorkflowController::new();
    login(&mut c);
    fill_draft(&mut c);
    c.submit_case().unwrap();
    c.request_analysis().unwrap();
    c.proceed_to_mediation().unwrap();
    c
}

#[test]
fn login_at_home_auto_advances_to_form() {
    let mut c = WorkflowController::new();
    assert_eq!(c.stage(), Stage::Home);
    login(&mut c);
    assert_eq!(c.stage(), Stage::Form);
    assert!(c.draft_mut().is_some());
}

#[test]
fn start_case_without_user_names_the_authentication_guard() {
    let mut c = WorkflowController::new();
    match c.start_case() {
        Err(WorkflowError::InvalidTransition { from, to, guard }) => {
            assert_eq!(from, Stage::Home);
            assert_eq!(to, Stage::Form);
            assert_eq!(guard, Guard::Authentication);
        }
        other => panic!("expected InvalidTransition, got {other:?}"),
    }
    // Controller unchanged; the same transition succeeds after login.
    assert_eq!(c.stage(), Stage::Home);
    login(&mut c);
    assert_eq!(c.stage(), Stage::Form);
}

#[test]
fn valid_case_flows_to_analysis_with_exact_split() {
    // Scenario: freelance dispute over 4000 between Alice and Bob.
    let mut c = WorkflowController::new();
    login(&mut c);
    fill_draft(&mut c);
    let case = c.submit_case().unwrap();
    assert_eq!(case.amount.minor_units(), 400_000);
    assert_eq!(c.stage(), Stage::Analysis);

    let rec = c.request_analysis().unwrap();
    assert_eq!(
        rec.proposed_split.claimant_share.minor_units()
            + rec.proposed_split.respondent_share.minor_units(),
        400_000
    );
}

#[test]
fn invalid_draft_keeps_form_stage_and_draft() {
    let mut c = WorkflowController::new();
    login(&mut c);
    fill_draft(&mut c);
    c.draft_mut().unwrap().amount = "not a number".to_string();
    match c.submit_case() {
        Err(WorkflowError::Case(CaseError::InvalidAmount(_))) => {}
        other => panic!("expected InvalidAmount, got {other:?}"),
    }
    assert_eq!(c.stage(), Stage::Form);
    // Draft survives for correction and resubmission.
    c.draft_mut().unwrap().amount = "4000".to_string();
    c.submit_case().unwrap();
    assert_eq!(c.stage(), Stage::Analysis);
}

#[test]
fn mediation_requires_a_computed_recommendation() {
    let mut c = WorkflowController::new();
    login(&mut c);
    fill_draft(&mut c);
    c.submit_case().unwrap();
    match c.proceed_to_mediation() {
        Err(WorkflowError::InvalidTransition { guard, .. }) => {
            assert_eq!(guard, Guard::RecommendationReady);
        }
        other => panic!("expected InvalidTransition, got {other:?}"),
    }
    assert_eq!(c.stage(), Stage::Analysis);
    c.request_analysis().unwrap();
    c.proceed_to_mediation().unwrap();
    assert_eq!(c.stage(), Stage::Mediation);
}

#[test]
fn empty_message_is_rejected_and_log_unchanged() {
    let mut c = at_mediation();
    c.post_message(MessageSender::User, MessageKind::Message, "hello")
        .unwrap();
    let before = c.session().unwrap().messages().count();
    assert_eq!(
        c.post_message(MessageSender::User, MessageKind::Message, "   "),
        Err(WorkflowError::Session(SessionError::EmptyMessage))
    );
    assert_eq!(c.session().unwrap().messages().count(), before);
}

#[test]
fn agreement_is_available_at_any_point_in_mediation() {
    // No mediation completion criteria: generating immediately works.
    let mut c = at_mediation();
    let agreement = c.generate_agreement().unwrap();
    assert!(agreement.case_number.as_str().starts_with("ODR-"));
    assert_eq!(c.stage(), Stage::Agreement);
}

#[test]
fn session_evidence_is_carried_into_the_case_record() {
    let mut c = at_mediation();
    let evidence_before = c.case().unwrap().evidence.len();
    c.attach_evidence(
        [FileMetadata::new("chat-screenshot.png", 2048)],
        OwnerSide::Submitter,
    )
    .unwrap();
    c.generate_agreement().unwrap();
    let case = c.case().unwrap();
    assert_eq!(case.evidence.len(), evidence_before + 1);
    assert!(case
        .evidence
        .iter()
        .any(|e| e.name == "chat-screenshot.png"));
}

#[test]
fn completion_requires_both_signatures() {
    let mut c = at_mediation();
    c.generate_agreement().unwrap();

    // Neither signed.
    match c.complete_case() {
        Err(WorkflowError::InvalidTransition { guard, .. }) => {
            assert_eq!(guard, Guard::FullyExecuted);
        }
        other => panic!("expected InvalidTransition, got {other:?}"),
    }

    // One signed.
    let first = c.sign(PartyRole::Claimant).unwrap();
    assert!(c.complete_case().is_err());
    assert!(!c.agreement().unwrap().is_executed());

    // Re-signing is idempotent.
    assert_eq!(c.sign(PartyRole::Claimant).unwrap(), first);

    // Both signed.
    c.sign(PartyRole::Respondent).unwrap();
    assert!(c.agreement().unwrap().is_executed());
    c.complete_case().unwrap();
    assert_eq!(c.stage(), Stage::Complete);
}

#[test]
fn stale_scheduled_delivery_is_suppressed() {
    let mut c = at_mediation();
    let token = c.issue_token();

    // The timer fires after the controller has left mediation.
    c.generate_agreement().unwrap();
    let outcome = c
        .deliver_scheduled(
            token,
            MessageSender::Counterparty,
            MessageKind::Message,
            "late reply",
        )
        .unwrap();
    assert_eq!(outcome, Delivery::Suppressed);
    assert_eq!(c.session().unwrap().messages().count(), 0);
}

#[test]
fn live_scheduled_delivery_appends() {
    let mut c = at_mediation();
    let token = c.issue_token();
    let outcome = c
        .deliver_scheduled(
            token,
            MessageSender::Assistant,
            MessageKind::Suggestion,
            "Consider a staged payment plan.",
        )
        .unwrap();
    assert!(matches!(outcome, Delivery::Delivered(_)));
    assert_eq!(c.session().unwrap().messages().count(), 1);
}

#[test]
fn new_dispute_loops_back_home_keeping_the_user() {
    let mut c = at_mediation();
    c.generate_agreement().unwrap();
    c.sign(PartyRole::Claimant).unwrap();
    c.sign(PartyRole::Respondent).unwrap();
    c.complete_case().unwrap();

    c.new_dispute().unwrap();
    assert_eq!(c.stage(), Stage::Home);
    assert!(c.user().is_some());
    assert!(c.case().is_none());
    assert!(c.recommendation().is_none());
    assert!(c.session().is_none());
    assert!(c.agreement().is_none());

    // The kept user means start_case works without another login.
    c.start_case().unwrap();
    assert_eq!(c.stage(), Stage::Form);
}

#[test]
fn transition_trail_records_the_full_lifecycle() {
    let mut c = at_mediation();
    c.generate_agreement().unwrap();
    c.sign(PartyRole::Claimant).unwrap();
    c.sign(PartyRole::Respondent).unwrap();
    c.complete_case().unwrap();

    let pairs: Vec<_> = c.transitions().iter().map(|t| (t.from, t.to)).collect();
    assert_eq!(
        pairs,
        vec![
            (Stage::Home, Stage::Form),
            (Stage::Form, Stage::Analysis),
            (Stage::Analysis, Stage::Mediation),
            (Stage::Mediation, Stage::Agreement),
            (Stage::Agreement, Stage::Complete),
        ]
    );
}

#[test]
fn operations_out_of_stage_order_are_rejected() {
    let mut c = WorkflowController::new();
    assert!(matches!(
        c.submit_case(),
        Err(WorkflowError::InvalidTransition {
            guard: Guard::StageOrder,
            ..
        })
    ));
    assert!(matches!(
        c.generate_agreement(),
        Err(WorkflowError::InvalidTransition {
            guard: Guard::StageOrder,
            ..
        })
    ));
    assert!(matches!(
        c.complete_case(),
        Err(WorkflowError::InvalidTransition {
            guard: Guard::StageOrder,
            ..
        })
    ));
    assert_eq!(c.stage(), Stage::Home);
}
