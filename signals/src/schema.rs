/// Parameter signature for one broker push-event kind.
///
/// The registry is arity-only: parameter names document the wire layout, but
/// no value typing is enforced at dispatch time.
#[derive(Debug, PartialEq, Eq)]
pub struct EventSignature {
    pub name: &'static str,
    pub params: &'static [&'static str],
}

impl EventSignature {
    pub fn arity(&self) -> usize { self.params.len() }

    /// Looks up a signature by event-kind name.
    pub fn from_name(name: &str) -> Option<&'static EventSignature> {
        SIGNATURES.iter().find(|s| s.name == name).copied()
    }
}

/// Real-time quote push. The only kind with a specialized dispatcher.
pub static REAL_DATA_RECEIVED: EventSignature =
    EventSignature { name: "real_data_received", params: &["subject", "real_type", "data"] };

/// Every push-event kind the broker control can raise.
///
/// One generic dispatcher can be constructed per entry; kinds other than
/// `real_data_received` carry no extra bookkeeping.
pub static SIGNATURES: &[&EventSignature] = &[
    &REAL_DATA_RECEIVED,
    &EventSignature {
        name: "tr_data_received",
        params: &["screen", "request_name", "tr_code", "record_name", "prev_next"],
    },
    &EventSignature { name: "message_received", params: &["screen", "request_name", "tr_code", "message"] },
    &EventSignature { name: "order_event_received", params: &["category", "item_count", "field_list"] },
    &EventSignature { name: "connect_event", params: &["error_code"] },
    &EventSignature { name: "condition_list_received", params: &["success", "message"] },
    &EventSignature {
        name: "condition_hit_received",
        params: &["subject", "hit_type", "condition_name", "condition_index"],
    },
    &EventSignature {
        name: "condition_result_received",
        params: &["screen", "subject_list", "condition_name", "condition_index", "prev_next"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_kind() {
        let sig = EventSignature::from_name("real_data_received").unwrap();
        assert_eq!(sig.arity(), 3);
        assert_eq!(sig.params, &["subject", "real_type", "data"]);
    }

    #[test]
    fn lookup_unknown_kind() {
        assert!(EventSignature::from_name("no_such_event").is_none());
    }

    #[test]
    fn registry_names_are_unique() {
        for (i, a) in SIGNATURES.iter().enumerate() {
            for b in &SIGNATURES[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
