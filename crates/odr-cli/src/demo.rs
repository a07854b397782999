//! # Demo Subcommand
//!
//! Drives a scripted dispute through the full lifecycle: login, intake,
//! analysis, a short mediation exchange with scripted automated replies,
//! agreement generation, signatures, and completion. Useful as a living
//! walkthrough of the workflow contract.

use std::collections::VecDeque;

use clap::Args;
use tracing::info;

use odr_case::intake::DraftParty;
use odr_case::{DisputeType, PartyRole};
use odr_core::{FileMetadata, User};
use odr_session::{
    MessageKind, MessageLog, MessageSender, OwnerSide, ResponseGenerator, SUGGESTED_REPLIES,
};
use odr_workflow::{Delivery, WorkflowController};

/// Arguments for the demo subcommand.
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Disputed amount for the scripted case.
    #[arg(long, default_value = "4000")]
    pub amount: String,
}

/// A fixed script of automated replies, consumed in order.
struct ScriptedReplies {
    queue: VecDeque<(MessageSender, MessageKind, &'static str)>,
}

impl ScriptedReplies {
    fn new() -> Self {
        Self {
            queue: VecDeque::from([
                (
                    MessageSender::Assistant,
                    MessageKind::Message,
                    "Welcome to the mediation room. I will help both parties \
                     work toward the recommended settlement.",
                ),
                (
                    MessageSender::Counterparty,
                    MessageKind::Message,
                    "I have concerns about the delivered work, but I am \
                     willing to negotiate.",
                ),
                (
                    MessageSender::Assistant,
                    MessageKind::Suggestion,
                    "A 60-40 split reflects substantial delivery with partial \
                     shared responsibility. Shall we proceed to an agreement?",
                ),
            ]),
        }
    }
}

impl ResponseGenerator for ScriptedReplies {
    fn next_reply(&mut self, log: &MessageLog) -> Option<(MessageSender, MessageKind, String)> {
        if log.is_empty() {
            return None;
        }
        self.queue
            .pop_front()
            .map(|(sender, kind, body)| (sender, kind, body.to_string()))
    }
}

/// Run the scripted end-to-end dispute.
pub fn run(args: &DemoArgs) -> anyhow::Result<()> {
    let mut controller = WorkflowController::new();

    // Login auto-advances home -> form.
    controller.login(User::new("Alice", "alice@example.com"));
    info!(stage = %controller.stage(), "logged in");

    let draft = controller
        .draft_mut()
        .ok_or_else(|| anyhow::anyhow!("no intake draft after login"))?;
    draft.dispute_type = Some(DisputeType::Freelance);
    draft.title = "Unpaid web development invoice".to_string();
    draft.description =
        "Completed and delivered a website; the client is withholding payment citing quality concerns.".to_string();
    draft.amount = args.amount.clone();
    draft.claimant = DraftParty {
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
    };
    draft.respondent = DraftParty {
        name: "Bob".to_string(),
        email: "bob@example.com".to_string(),
    };
    draft.add_evidence(FileMetadata::new("contract.pdf", 84_213));
    draft.add_evidence(FileMetadata::new("delivery-email.eml", 12_044));

    let case = controller.submit_case()?;
    println!("Case submitted: {} ({} dispute, amount {})", case.id, case.dispute_type, case.amount);

    let recommendation = controller.request_analysis()?;
    println!("\nRecommendation: {}", recommendation.summary);
    println!(
        "Proposed split: {} to claimant, {} to respondent",
        recommendation.proposed_split.claimant_share,
        recommendation.proposed_split.respondent_share
    );

    controller.proceed_to_mediation()?;
    info!(stage = %controller.stage(), "mediation opened");

    // A short exchange: the user opens with a suggested reply, then a
    // scheduler drains the scripted automated responses.
    let mut replies = ScriptedReplies::new();
    controller.post_message(MessageSender::User, MessageKind::Message, SUGGESTED_REPLIES[0])?;
    loop {
        let token = controller.issue_token();
        let next = match controller.session() {
            Some(session) => replies.next_reply(session.log()),
            None => None,
        };
        let Some((sender, kind, body)) = next else {
            break;
        };
        match controller.deliver_scheduled(token, sender, kind, &body)? {
            Delivery::Delivered(_) => {}
            Delivery::Suppressed => break,
        }
    }
    controller.attach_evidence(
        [FileMetadata::new("revision-history.pdf", 40_960)],
        OwnerSide::Submitter,
    )?;

    println!("\nTranscript:");
    if let Some(session) = controller.session() {
        for message in session.messages() {
            println!("  [{}] {}", message.sender, message.body);
        }
    }

    let agreement = controller.generate_agreement()?;
    println!("\nAgreement {} generated on {}", agreement.case_number, agreement.date);
    println!(
        "Financial terms: {} total, {} to claimant, {} to respondent",
        agreement.financial.total,
        agreement.financial.to_claimant,
        agreement.financial.to_respondent
    );

    controller.sign(PartyRole::Claimant)?;
    controller.sign(PartyRole::Respondent)?;
    controller.complete_case()?;
    println!("\nBoth parties signed; case complete.");

    controller.new_dispute()?;
    info!(stage = %controller.stage(), "ready for the next dispute");
    Ok(())
}
