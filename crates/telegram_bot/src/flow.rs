//! The entry conversation flow.
//!
//! One parameterized state machine, instantiated per (chat, entry kind):
//! a selector label starts the flow, a valid amount moves it to category
//! selection, a catalog label commits the entry. Input that matches nothing
//! parks every flow where it stands; there is no rejection message.

use ledger::EntryKind;

use crate::state::{FlowState, Session};

/// The outcome of offering a message to the flows in progress.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Step {
    /// An amount was accepted; ask for the category next.
    AmountAccepted(EntryKind),
    /// A flow reached its terminal state; the entry is ready for the sink.
    Committed {
        kind: EntryKind,
        amount: String,
        category: &'static str,
    },
    /// Nothing consumed the message; every flow stays where it is.
    Parked,
}

/// Starts (or restarts) the flow for `kind`. A previously entered amount
/// for the same kind is discarded.
pub(crate) fn start(session: &mut Session, kind: EntryKind) {
    session.set_flow(kind, FlowState::AwaitingAmount);
}

/// Ends every flow in progress for the chat. No entry is written.
pub(crate) fn cancel(session: &mut Session) {
    session.clear();
}

/// Offers `text` to each flow in progress, in the fixed kind order. The
/// first flow whose expected pattern matches consumes the message; if none
/// matches the message is ignored and the flows stay parked.
pub(crate) fn advance(session: &mut Session, text: &str) -> Step {
    for kind in EntryKind::ALL {
        match session.flow(kind) {
            Some(FlowState::AwaitingAmount) => {
                let Ok(amount) = ledger::amount::parse(text) else {
                    continue;
                };
                session.set_flow(kind, FlowState::AwaitingCategory { amount });
                return Step::AmountAccepted(kind);
            }
            Some(FlowState::AwaitingCategory { amount }) => {
                let Some(category) = ledger::resolve_category(kind, text) else {
                    continue;
                };
                let amount = amount.clone();
                session.clear_flow(kind);
                return Step::Committed {
                    kind,
                    amount,
                    category,
                };
            }
            None => {}
        }
    }

    Step::Parked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_starts_a_flow_awaiting_the_amount() {
        let mut session = Session::default();

        start(&mut session, EntryKind::Expense);

        assert_eq!(
            session.flow(EntryKind::Expense),
            Some(&FlowState::AwaitingAmount)
        );
        assert_eq!(session.flow(EntryKind::Revenue), None);
    }

    #[test]
    fn valid_amount_is_stored_normalized() {
        let mut session = Session::default();
        start(&mut session, EntryKind::Expense);

        let step = advance(&mut session, "1,500.00");

        assert_eq!(step, Step::AmountAccepted(EntryKind::Expense));
        assert_eq!(
            session.flow(EntryKind::Expense),
            Some(&FlowState::AwaitingCategory {
                amount: "1500.00".to_string()
            })
        );
    }

    #[test]
    fn invalid_amount_parks_the_flow() {
        let mut session = Session::default();
        start(&mut session, EntryKind::Expense);

        for text in ["abc", "", "12.", "1,23"] {
            assert_eq!(advance(&mut session, text), Step::Parked);
            assert_eq!(
                session.flow(EntryKind::Expense),
                Some(&FlowState::AwaitingAmount),
                "{text:?} moved the flow"
            );
        }
    }

    #[test]
    fn catalog_label_commits_with_the_glyph_stripped() {
        let mut session = Session::default();
        start(&mut session, EntryKind::Expense);
        advance(&mut session, "1,500.00");

        let step = advance(&mut session, "🏠 Housing");

        assert_eq!(
            step,
            Step::Committed {
                kind: EntryKind::Expense,
                amount: "1500.00".to_string(),
                category: "Housing",
            }
        );
        assert!(session.is_idle());
    }

    #[test]
    fn unknown_category_parks_the_flow() {
        let mut session = Session::default();
        start(&mut session, EntryKind::Expense);
        advance(&mut session, "10");

        assert_eq!(advance(&mut session, "Housing"), Step::Parked);
        assert_eq!(
            session.flow(EntryKind::Expense),
            Some(&FlowState::AwaitingCategory {
                amount: "10".to_string()
            })
        );
    }

    #[test]
    fn cancel_discards_every_flow_without_committing() {
        let mut session = Session::default();
        start(&mut session, EntryKind::Expense);
        advance(&mut session, "10");
        start(&mut session, EntryKind::Revenue);

        cancel(&mut session);

        assert!(session.is_idle());
        assert_eq!(advance(&mut session, "🏠 Housing"), Step::Parked);
    }

    #[test]
    fn restarting_a_flow_discards_the_pending_amount() {
        let mut session = Session::default();
        start(&mut session, EntryKind::Expense);
        advance(&mut session, "10");

        start(&mut session, EntryKind::Expense);

        assert_eq!(
            session.flow(EntryKind::Expense),
            Some(&FlowState::AwaitingAmount)
        );
    }

    #[test]
    fn kinds_do_not_share_amounts_or_categories() {
        let mut session = Session::default();

        start(&mut session, EntryKind::Expense);
        assert_eq!(
            advance(&mut session, "10"),
            Step::AmountAccepted(EntryKind::Expense)
        );

        start(&mut session, EntryKind::Revenue);
        assert_eq!(
            advance(&mut session, "20"),
            Step::AmountAccepted(EntryKind::Revenue)
        );

        assert_eq!(
            advance(&mut session, "🏠 Housing"),
            Step::Committed {
                kind: EntryKind::Expense,
                amount: "10".to_string(),
                category: "Housing",
            }
        );
        assert_eq!(
            advance(&mut session, "💼 Salary"),
            Step::Committed {
                kind: EntryKind::Revenue,
                amount: "20".to_string(),
                category: "Salary",
            }
        );
        assert!(session.is_idle());
    }
}
