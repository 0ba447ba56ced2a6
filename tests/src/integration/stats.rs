//! Aggregate statistics: full-scan recounts over cases and signals.

#[cfg(test)]
mod tests {
    use crate::{case_input, signal_input, TestRegistry};
    use vigil_engine::{CaseApi, CreateCaseInput, SignalApi};
    use vigil_types::{CaseStatus, Priority, SignalStatus, SignalStrength};

    fn serious(mut input: CreateCaseInput) -> CreateCaseInput {
        input.seriousness = true;
        input
    }

    #[test]
    fn test_case_stats_recount_scenario() {
        // 3 draft + 2 closed, 1 serious => total=5, draft=3, closed=2,
        // serious=1.
        let fixture = TestRegistry::new();
        let (_, ctx) = fixture.signup("dana");
        let cases = fixture.cases();

        cases.create_case(&ctx, serious(case_input("DrugX", "Headache"))).unwrap();
        cases.create_case(&ctx, case_input("DrugX", "Nausea")).unwrap();
        cases.create_case(&ctx, case_input("DrugY", "Rash")).unwrap();
        for event in ["Dizziness", "Fatigue"] {
            let id = cases.create_case(&ctx, case_input("DrugZ", event)).unwrap();
            cases.update_case_status(&ctx, &id, CaseStatus::Closed, None).unwrap();
        }

        let stats = cases.get_case_stats(&ctx).unwrap();
        assert_eq!(stats.total, 5);
        assert_eq!(stats.by_status.draft, 3);
        assert_eq!(stats.by_status.closed, 2);
        assert_eq!(stats.by_status.submitted, 0);
        assert_eq!(stats.serious, 1);
        // The manual clock pins every creation into the current month.
        assert_eq!(stats.this_month, 5);
    }

    #[test]
    fn test_priority_breakdown() {
        let fixture = TestRegistry::new();
        let (_, ctx) = fixture.signup("dana");
        let cases = fixture.cases();

        for (n, priority) in [Priority::Low, Priority::Low, Priority::Urgent]
            .into_iter()
            .enumerate()
        {
            let mut input = case_input("DrugX", &format!("Event {n}"));
            input.priority = priority;
            cases.create_case(&ctx, input).unwrap();
        }

        let stats = cases.get_case_stats(&ctx).unwrap();
        assert_eq!(stats.by_priority.low, 2);
        assert_eq!(stats.by_priority.urgent, 1);
        assert_eq!(stats.by_priority.medium, 0);
    }

    #[test]
    fn test_this_month_tracks_creation_not_event_dates() {
        let fixture = TestRegistry::new();
        let (_, ctx) = fixture.signup("dana");
        let cases = fixture.cases();

        cases.create_case(&ctx, case_input("DrugX", "Headache")).unwrap();
        // Jump the clock two months ahead; the old case leaves the bucket.
        fixture.clock.advance(62 * 24 * 60 * 60 * 1000);
        cases.create_case(&ctx, case_input("DrugX", "Nausea")).unwrap();

        let stats = cases.get_case_stats(&ctx).unwrap();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.this_month, 1);
    }

    #[test]
    fn test_signal_stats_recount() {
        let fixture = TestRegistry::new();
        let (_, ctx) = fixture.signup("dana");
        let signals = fixture.signals();

        let confirmed = signals.create_signal(&ctx, signal_input("DrugX", "Headache")).unwrap();
        signals.update_signal_status(&ctx, &confirmed, SignalStatus::Confirmed).unwrap();
        signals.create_signal(&ctx, signal_input("DrugY", "Nausea")).unwrap();
        let mut strong = signal_input("DrugZ", "Rash");
        strong.strength = SignalStrength::Strong;
        signals.create_signal(&ctx, strong).unwrap();

        let stats = signals.get_signal_stats(&ctx).unwrap();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.by_status.detected, 2);
        assert_eq!(stats.by_status.confirmed, 1);
        assert_eq!(stats.by_strength.moderate, 2);
        assert_eq!(stats.by_strength.strong, 1);
    }

    #[test]
    fn test_stats_on_an_empty_store_are_all_zero() {
        let fixture = TestRegistry::new();
        let (_, ctx) = fixture.signup("dana");

        let stats = fixture.cases().get_case_stats(&ctx).unwrap();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.serious, 0);

        let stats = fixture.signals().get_signal_stats(&ctx).unwrap();
        assert_eq!(stats.total, 0);
    }
}
