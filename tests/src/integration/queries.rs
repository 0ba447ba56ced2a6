//! Query layer: single-predicate index precedence, result caps, ordering,
//! display-name joins, and full-text search composition.

#[cfg(test)]
mod tests {
    use crate::{case_input, signal_input, TestRegistry};
    use vigil_engine::{CaseApi, CaseListFilter, SignalApi, SignalListFilter};
    use vigil_store::CaseSearchFilter;
    use vigil_types::{CaseStatus, Priority, SignalStatus, SignalStrength};

    #[test]
    fn test_case_filter_precedence_applies_only_the_first_predicate() {
        let fixture = TestRegistry::new();
        let (officer, ctx) = fixture.signup("dana");
        let cases = fixture.cases();

        // One closed/low case, one draft/low case assigned to the officer.
        let closed = cases.create_case(&ctx, case_input("DrugX", "Headache")).unwrap();
        cases.update_case_status(&ctx, &closed, CaseStatus::Closed, None).unwrap();
        let draft = cases.create_case(&ctx, case_input("DrugY", "Nausea")).unwrap();
        cases.assign_case(&ctx, &draft, officer).unwrap();

        // status + priority supplied: only status is honored. The closed
        // case is low priority too, so a combined AND would also return
        // it — the giveaway is the draft case NOT matching on priority.
        let listing = cases
            .get_cases(
                &ctx,
                &CaseListFilter {
                    status: Some(CaseStatus::Draft),
                    priority: Some(Priority::Urgent),
                    assigned_to: None,
                },
                None,
            )
            .unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].doc.id, draft);

        // priority + assignee supplied: only priority is honored.
        let listing = cases
            .get_cases(
                &ctx,
                &CaseListFilter {
                    status: None,
                    priority: Some(Priority::Medium),
                    assigned_to: Some(vigil_types::UserId::new()),
                },
                None,
            )
            .unwrap();
        assert_eq!(listing.len(), 2);

        // Assignee alone works through its index.
        let listing = cases
            .get_cases(
                &ctx,
                &CaseListFilter {
                    status: None,
                    priority: None,
                    assigned_to: Some(officer),
                },
                None,
            )
            .unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].doc.id, draft);
    }

    #[test]
    fn test_case_listing_is_newest_first_and_capped() {
        let fixture = TestRegistry::new();
        let (_, ctx) = fixture.signup("dana");
        let cases = fixture.cases();

        for n in 0..60 {
            cases
                .create_case(&ctx, case_input("DrugX", &format!("Event {n}")))
                .unwrap();
        }

        // Default cap is 50.
        let listing = cases.get_cases(&ctx, &CaseListFilter::default(), None).unwrap();
        assert_eq!(listing.len(), 50);
        assert_eq!(listing[0].doc.record.adverse_event, "Event 59");
        assert!(listing[0].doc.creation_time > listing[49].doc.creation_time);

        // An explicit limit overrides it in both directions.
        assert_eq!(
            cases.get_cases(&ctx, &CaseListFilter::default(), Some(5)).unwrap().len(),
            5
        );
        assert_eq!(
            cases.get_cases(&ctx, &CaseListFilter::default(), Some(100)).unwrap().len(),
            60
        );
    }

    #[test]
    fn test_case_listing_joins_display_names() {
        let fixture = TestRegistry::new();
        let (_, ctx) = fixture.signup("dana");
        let (reviewer, _) = fixture.signup("remi");
        let cases = fixture.cases();

        let id = cases.create_case(&ctx, case_input("DrugX", "Headache")).unwrap();
        cases.assign_case(&ctx, &id, reviewer).unwrap();

        let listing = cases.get_cases(&ctx, &CaseListFilter::default(), None).unwrap();
        assert_eq!(listing[0].created_by_name.as_deref(), Some("dana"));
        assert_eq!(listing[0].assigned_to_name.as_deref(), Some("remi"));
    }

    #[test]
    fn test_search_prefix_matches_and_composes_filters() {
        let fixture = TestRegistry::new();
        let (_, ctx) = fixture.signup("dana");
        let cases = fixture.cases();

        let severe = cases
            .create_case(&ctx, case_input("DrugX", "Severe headache"))
            .unwrap();
        cases.create_case(&ctx, case_input("DrugY", "Mild headache")).unwrap();
        cases.create_case(&ctx, case_input("DrugX", "Nausea")).unwrap();
        cases.update_case_status(&ctx, &severe, CaseStatus::UnderReview, None).unwrap();

        // Prefix match over the adverseEvent field.
        let hits = cases.search_cases(&ctx, "head", &CaseSearchFilter::default()).unwrap();
        assert_eq!(hits.len(), 2);

        // Search composes its equality filters (unlike list filtering).
        let hits = cases
            .search_cases(
                &ctx,
                "headache",
                &CaseSearchFilter {
                    status: Some(CaseStatus::UnderReview),
                    priority: None,
                    product_name: Some("DrugX".to_owned()),
                },
            )
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, severe);

        // Unmatched term: empty, not an error.
        assert!(cases
            .search_cases(&ctx, "anaphylaxis", &CaseSearchFilter::default())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_search_caps_at_twenty() {
        let fixture = TestRegistry::new();
        let (_, ctx) = fixture.signup("dana");
        let cases = fixture.cases();

        for n in 0..25 {
            cases
                .create_case(&ctx, case_input("DrugX", &format!("Headache {n}")))
                .unwrap();
        }

        let hits = cases.search_cases(&ctx, "headache", &CaseSearchFilter::default()).unwrap();
        assert_eq!(hits.len(), 20);
    }

    #[test]
    fn test_signal_filter_precedence_and_name_join() {
        let fixture = TestRegistry::new();
        let (_, ctx) = fixture.signup("dana");
        let signals = fixture.signals();

        let confirmed = signals.create_signal(&ctx, signal_input("DrugX", "Headache")).unwrap();
        signals.update_signal_status(&ctx, &confirmed, SignalStatus::Confirmed).unwrap();
        let mut strong = signal_input("DrugY", "Nausea");
        strong.strength = SignalStrength::Strong;
        signals.create_signal(&ctx, strong).unwrap();

        // status + strength: only status honored. The confirmed signal is
        // moderate, so an AND would return nothing.
        let listing = signals
            .get_signals(
                &ctx,
                &SignalListFilter {
                    status: Some(SignalStatus::Confirmed),
                    strength: Some(SignalStrength::Strong),
                    product_name: None,
                },
            )
            .unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].doc.id, confirmed);
        assert_eq!(listing[0].created_by_name.as_deref(), Some("dana"));

        // strength alone, then product alone.
        let listing = signals
            .get_signals(
                &ctx,
                &SignalListFilter {
                    status: None,
                    strength: Some(SignalStrength::Strong),
                    product_name: None,
                },
            )
            .unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].doc.record.product_name, "DrugY");

        let listing = signals
            .get_signals(
                &ctx,
                &SignalListFilter {
                    status: None,
                    strength: None,
                    product_name: Some("DrugX".to_owned()),
                },
            )
            .unwrap();
        assert_eq!(listing.len(), 1);
    }

    #[test]
    fn test_get_case_returns_history_with_performer_names() {
        let fixture = TestRegistry::new();
        let (_, officer_ctx) = fixture.signup("dana");
        let (_, reviewer_ctx) = fixture.signup("remi");
        let cases = fixture.cases();

        let id = cases
            .create_case(&officer_ctx, case_input("DrugX", "Headache"))
            .unwrap();
        cases
            .update_case_status(&reviewer_ctx, &id, CaseStatus::Submitted, None)
            .unwrap();

        let detail = cases.get_case(&officer_ctx, &id).unwrap();
        assert_eq!(detail.workflow[0].performed_by_name.as_deref(), Some("remi"));
        assert_eq!(detail.workflow[1].performed_by_name.as_deref(), Some("dana"));
    }
}
