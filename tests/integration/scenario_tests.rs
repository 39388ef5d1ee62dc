//! Scenario integration tests
//!
//! Drives the six scenarios through the in-memory ledger and checks both the
//! reports and their effect on ledger state.

#[cfg(test)]
mod tests {
    use crate::common::{BatchReportAssertions, InMemoryLedger};
    use crate::{assert_approx_eq, assert_err, assert_ok};
    use stellar_first_flight::scenarios::batch_requests;
    use stellar_first_flight::{
        BatchSummary, FailureKind, ItemResult, PaymentRequest, check_balance, create_account,
        create_accounts_batch, monitor_balances, report, send_payment, send_payments_batch,
    };

    // ==================== Account creation ====================

    #[tokio::test]
    async fn test_create_account_opens_funded_account() {
        let ledger = InMemoryLedger::new();

        let account = assert_ok!(create_account(&ledger).await);

        assert!(account.funding.is_success());
        assert_eq!(ledger.native_balance(&account.public_key), Some(10_000.0));
    }

    #[tokio::test]
    async fn test_mass_creation_funds_every_account() {
        let ledger = InMemoryLedger::new();

        let result = create_accounts_batch(&ledger, 5).await;

        result.assert_counts(5, 0);
        result.assert_in_input_order();
        assert_approx_eq!(result.summary.total_value, 50_000.0);
        assert_eq!(ledger.account_count(), 5);

        let numbers: Vec<usize> = result
            .results
            .iter()
            .filter_map(|r| r.result.success())
            .map(|a| a.number)
            .collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    }

    // ==================== Balances ====================

    #[tokio::test]
    async fn test_check_balance_reserve_breakdown() {
        let ledger = InMemoryLedger::new();
        let owner = ledger.open_account("100.0000000");

        let sheet = assert_ok!(check_balance(&ledger, &owner.public_key()).await);
        let native = sheet.native.unwrap();

        assert_approx_eq!(native.total, 100.0);
        assert_approx_eq!(native.reserved, 0.5);
        assert_approx_eq!(native.available, 99.5);
    }

    #[tokio::test]
    async fn test_check_balance_unknown_account() {
        let ledger = InMemoryLedger::new();
        let err = assert_err!(check_balance(&ledger, "GUNKNOWN").await);
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_monitor_reports_missing_accounts_and_continues() {
        let ledger = InMemoryLedger::new();
        let a = ledger.open_account("10.0000000").public_key();
        let b = ledger.open_account("20.0000000").public_key();
        let c = ledger.open_account("30.0000000").public_key();
        let keys = vec![
            a,
            "GMISSINGONE".to_string(),
            b,
            "GMISSINGTWO".to_string(),
            c,
        ];

        let result = monitor_balances(&ledger, &keys).await;
        let batch = &result.batch;

        batch.assert_counts(3, 2);
        batch.assert_in_input_order();
        batch.assert_kinds(&[
            None,
            Some(FailureKind::NotFound),
            None,
            Some(FailureKind::NotFound),
            None,
        ]);
        assert_approx_eq!(batch.summary.total_value, 60.0);
        assert_eq!(batch.summary.average, Some(20.0));

        let text = report::render_monitor(&result);
        assert!(text.contains("Average balance:        20.00 XLM"));
        assert!(text.contains("Total monitored:        5 accounts"));
    }

    #[tokio::test]
    async fn test_monitor_empty_list() {
        let ledger = InMemoryLedger::new();

        let result = monitor_balances(&ledger, &[]).await;

        result.batch.assert_counts(0, 0);
        assert_eq!(result.batch.summary.average, None);
        assert!(!report::render_monitor(&result).contains("Average"));
    }

    // ==================== Payments ====================

    #[tokio::test]
    async fn test_single_payment_moves_funds() {
        let ledger = InMemoryLedger::new();
        let source = ledger.open_account("100.0000000");
        let destination = ledger.open_account("1.0000000").public_key();

        let payment = PaymentRequest::new(destination.clone(), "25", None);
        let outcome = assert_ok!(send_payment(&ledger, &source.secret_seed(), payment, 30).await);

        assert_eq!(outcome.source_balance.as_deref(), Some("100.0000000"));
        assert_eq!(ledger.native_balance(&source.public_key()), Some(75.0));
        assert_eq!(ledger.native_balance(&destination), Some(26.0));
    }

    #[tokio::test]
    async fn test_single_payment_failure_propagates() {
        let ledger = InMemoryLedger::new();
        let source = ledger.open_account("100.0000000");

        let payment = PaymentRequest::new(ledger.open_account("1").public_key(), "500", None);
        let err = assert_err!(send_payment(&ledger, &source.secret_seed(), payment, 30).await);

        assert!(err.is_submission());
        assert!(ledger.submitted().is_empty());
    }

    #[tokio::test]
    async fn test_batch_payments_consume_sequence_in_order() {
        let ledger = InMemoryLedger::new();
        let source = ledger.open_account("100.0000000");
        let starting_sequence = ledger.account(&source.public_key()).unwrap().sequence;

        let recipients: Vec<_> = (1..=3)
            .map(|i| {
                stellar_first_flight::config::Recipient::new(
                    ledger.open_account("1.0000000").public_key(),
                    format!("Payment-00{}", i),
                )
            })
            .collect();

        let result = send_payments_batch(
            &ledger,
            &source.secret_seed(),
            batch_requests(&recipients, "2"),
            30,
        )
        .await;

        result.assert_counts(3, 0);
        assert_approx_eq!(result.summary.total_value, 6.0);

        let memos: Vec<Option<String>> = ledger.submitted().into_iter().map(|p| p.memo).collect();
        assert_eq!(
            memos,
            vec![
                Some("Payment-001".to_string()),
                Some("Payment-002".to_string()),
                Some("Payment-003".to_string()),
            ]
        );

        let source_after = ledger.account(&source.public_key()).unwrap();
        assert_eq!(source_after.sequence, starting_sequence + 3);
        assert_approx_eq!(source_after.native_balance().unwrap().amount().unwrap(), 94.0);
    }

    #[tokio::test]
    async fn test_batch_payment_failure_is_isolated() {
        let ledger = InMemoryLedger::new();
        let source = ledger.open_account("100.0000000");
        let first = ledger.open_account("1").public_key();
        let third = ledger.open_account("1").public_key();

        // The second destination was never created on the ledger
        let payments = vec![
            PaymentRequest::new(first.clone(), "2", Some("Payment-001".to_string())),
            PaymentRequest::new(
                crate::common::fixtures::random_public_key(),
                "2",
                Some("Payment-002".to_string()),
            ),
            PaymentRequest::new(third.clone(), "2", Some("Payment-003".to_string())),
        ];

        let result = send_payments_batch(&ledger, &source.secret_seed(), payments, 30).await;

        result.assert_counts(2, 1);
        result.assert_kinds(&[None, Some(FailureKind::SubmissionError), None]);
        assert_eq!(
            BatchSummary::count_kind(&result.results, FailureKind::SubmissionError),
            1
        );
        match &result.results[1].result {
            ItemResult::Failure { message, .. } => assert!(message.contains("op_no_destination")),
            other => panic!("expected failure, got {:?}", other),
        }
        assert_eq!(ledger.native_balance(&third), Some(3.0));

        let text = report::render_payment_batch(&result);
        assert!(text.contains("Successful: 2"));
        assert!(text.contains("Failed:     1"));
        assert!(text.contains("XLM sent:   4.00 XLM"));
    }

    #[tokio::test]
    async fn test_batch_is_repeatable_against_fresh_ledgers() {
        async fn run() -> Vec<Option<FailureKind>> {
            let ledger = InMemoryLedger::new();
            let keys = vec![ledger.open_account("5").public_key(), "GNOPE".to_string()];
            monitor_balances(&ledger, &keys)
                .await
                .batch
                .results
                .iter()
                .map(|r| r.result.failure_kind())
                .collect()
        }

        assert_eq!(run().await, run().await);
    }
}
