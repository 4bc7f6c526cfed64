use crate::slots::{SlotKind, Slots};
use crate::traits::{BoardId, ProviderQuery};

/// Board-specific parameter name for a slot, or `None` when the board has no
/// equivalent filter.
pub fn field_name(slot: SlotKind, board: BoardId) -> Option<&'static str> {
    match (slot, board) {
        (SlotKind::Keywords, BoardId::Careerjet | BoardId::Jooble) => Some("keywords"),
        (SlotKind::Keywords, BoardId::Web3) => Some("tag"),
        (SlotKind::Location, BoardId::Careerjet | BoardId::Jooble) => Some("location"),
        (SlotKind::Location, BoardId::Web3) => Some("country"),
        (SlotKind::Remote, BoardId::Web3) => Some("remote"),
        (SlotKind::Remote, _) => None,
        (SlotKind::Days, BoardId::Jooble) => Some("datePosted"),
        (SlotKind::Days, BoardId::Web3) => Some("posted_since"),
        (SlotKind::Days, BoardId::Careerjet) => None,
    }
}

/// Cumulative search intent for one session.
#[derive(Debug, Clone, Default)]
pub struct ConversationContext {
    slots: Slots,
}

impl ConversationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slots(&self) -> &Slots {
        &self.slots
    }

    pub fn update(&mut self, new_slots: Slots) {
        self.slots.merge(new_slots);
    }

    pub fn to_provider_params(&self, board: BoardId) -> ProviderQuery {
        let mut params = ProviderQuery::new();
        let slots = &self.slots;

        let values = [
            (SlotKind::Keywords, slots.keywords.as_ref().map(|kw| kw.joined())),
            (SlotKind::Location, slots.location.clone()),
            (SlotKind::Remote, slots.remote.map(|r| r.to_string())),
            (SlotKind::Days, slots.days.map(|n| format!("last {n} days"))),
        ];

        for (slot, value) in values {
            if let (Some(field), Some(value)) = (field_name(slot, board), value) {
                params.insert(field.to_string(), value);
            }
        }

        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots::Keywords;

    fn full_context() -> ConversationContext {
        let mut ctx = ConversationContext::new();
        ctx.update(Slots {
            keywords: Some(Keywords::List(vec!["python".into(), "developer".into()])),
            location: Some("Bangalore".into()),
            remote: Some(false),
            days: Some(7),
        });
        ctx
    }

    #[test]
    fn careerjet_params() {
        let params = full_context().to_provider_params(BoardId::Careerjet);
        assert_eq!(params.len(), 2);
        assert_eq!(params["keywords"], "python developer");
        assert_eq!(params["location"], "Bangalore");
    }

    #[test]
    fn jooble_params() {
        let params = full_context().to_provider_params(BoardId::Jooble);
        assert_eq!(params.len(), 3);
        assert_eq!(params["keywords"], "python developer");
        assert_eq!(params["location"], "Bangalore");
        assert_eq!(params["datePosted"], "last 7 days");
    }

    #[test]
    fn web3_params() {
        let params = full_context().to_provider_params(BoardId::Web3);
        assert_eq!(params.len(), 4);
        assert_eq!(params["tag"], "python developer");
        assert_eq!(params["country"], "Bangalore");
        assert_eq!(params["remote"], "false");
        assert_eq!(params["posted_since"], "last 7 days");
    }

    #[test]
    fn text_keywords_pass_through() {
        let mut ctx = ConversationContext::new();
        ctx.update(Slots {
            keywords: Some(Keywords::Text("devops".into())),
            ..Default::default()
        });
        assert_eq!(ctx.to_provider_params(BoardId::Web3)["tag"], "devops");
    }

    #[test]
    fn empty_context_yields_empty_queries() {
        let ctx = ConversationContext::new();
        for board in BoardId::ALL {
            assert!(ctx.to_provider_params(board).is_empty());
        }
    }

    #[test]
    fn updates_accumulate_across_turns() {
        let mut ctx = full_context();
        ctx.update(Slots {
            location: Some("Remote".into()),
            remote: Some(true),
            ..Default::default()
        });
        let params = ctx.to_provider_params(BoardId::Web3);
        assert_eq!(params["country"], "Remote");
        assert_eq!(params["remote"], "true");
        assert_eq!(params["tag"], "python developer");
    }
}
