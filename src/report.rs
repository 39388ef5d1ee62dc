//! Console report rendering
//!
//! Every function here is pure: it turns scenario results into the text a
//! binary prints. Nothing is written to disk.

use crate::config::Network;
use crate::core::batch::{BatchReport, BatchSummary, ItemResult};
use crate::core::horizon::FRIENDBOT_FUNDING_XLM;
use crate::core::payment::PaymentRequest;
use crate::scenarios::{
    AccountSnapshot, BalanceSheet, CreatedAccount, MonitorReport, NewAccount, PaymentOutcome,
};
use crate::utils::{abbreviate_key, truncate_key};

const BANNER_WIDTH: usize = 45;
const RULE_WIDTH: usize = 41;
const HASH_PREVIEW: usize = 16;
const KEY_PREVIEW: usize = 8;

/// Framed section title
pub fn banner(title: &str) -> String {
    let bar = "=".repeat(BANNER_WIDTH);
    format!("{}\n  {}\n{}\n", bar, title, bar)
}

fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

fn join(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn outcome_label<R>(result: &ItemResult<R>) -> String {
    match result {
        ItemResult::Success(_) => "SUCCESS".to_string(),
        ItemResult::Failure { kind, message } => format!("FAILED ({}): {}", kind, message),
    }
}

/// Keys of a freshly generated account and the funding outcome
pub fn render_new_account(account: &NewAccount) -> String {
    let mut lines = vec![
        banner("NEW STELLAR ACCOUNT"),
        "PUBLIC KEY (shareable):".to_string(),
        format!("  {}", account.public_key),
        String::new(),
        "SECRET KEY (NEVER SHARE):".to_string(),
        format!("  {}", account.secret_seed.expose()),
        String::new(),
    ];

    match &account.funding {
        ItemResult::Success(receipt) => {
            lines.push(format!(
                "Account funded with {:.0} XLM",
                FRIENDBOT_FUNDING_XLM
            ));
            if let Some(hash) = &receipt.hash {
                lines.push(format!("Transaction hash: {}", hash));
            }
        }
        ItemResult::Failure { message, .. } => {
            lines.push(format!("Could not fund account: {}", message));
        }
    }

    lines.push(String::new());
    lines.push("IMPORTANT: Save these keys in a secure place".to_string());
    lines.push("TIP: Copy them to a .env file (see .env.example)".to_string());
    join(lines)
}

/// Per-account details and totals for the mass creation batch
pub fn render_created_accounts(report: &BatchReport<usize, CreatedAccount>) -> String {
    let mut lines = vec![banner("CREATED ACCOUNTS SUMMARY")];

    for item in &report.results {
        match &item.result {
            ItemResult::Success(account) => {
                lines.push(format!("Account {}:", account.number));
                lines.push(format!("  Public Key:  {}", account.public_key));
                lines.push(format!("  Secret Key:  {}", account.secret_seed.expose()));
                lines.push(format!("  Balance:     {:.0} XLM", account.funded_amount));
                if let Some(hash) = &account.hash {
                    lines.push(format!("  Funding tx:  {}", hash));
                }
            }
            ItemResult::Failure { .. } => {
                lines.push(format!("Account {}:", item.item));
                lines.push(format!("  {}", outcome_label(&item.result)));
            }
        }
        lines.push(String::new());
    }

    let summary = &report.summary;
    lines.push(format!("Total accounts created: {}", summary.succeeded));
    if summary.failed > 0 {
        lines.push(format!("Accounts not funded:    {}", summary.failed));
    }
    lines.push(format!("Total XLM distributed:  {:.2} XLM", summary.total_value));
    lines.push(String::new());
    lines.push("SECURITY REMINDER:".to_string());
    lines.push("  - Save all keys in a secure location".to_string());
    lines.push("  - Consider using a password manager".to_string());
    lines.push("  - NEVER commit keys to git".to_string());
    join(lines)
}

/// Account header plus every balance line
pub fn render_balance_sheet(sheet: &BalanceSheet) -> String {
    let account = &sheet.account;
    let mut lines = vec![
        banner("ACCOUNT INFORMATION"),
        "Account ID:".to_string(),
        format!("  {}", account.account_id),
        String::new(),
        "Sequence Number:".to_string(),
        format!("  {}", account.sequence),
        String::new(),
        banner("BALANCES"),
    ];

    for (index, balance) in account.balances.iter().enumerate() {
        let number = index + 1;
        match (balance.is_native(), &sheet.native) {
            (true, Some(breakdown)) => {
                lines.push(format!("{}. XLM (Lumens):", number));
                lines.push(format!("  Total:     {} XLM", balance.balance));
                lines.push(format!("  Reserved:  {:.7} XLM", breakdown.reserved));
                lines.push(format!("  Available: {:.7} XLM", breakdown.available));
            }
            (true, None) => {
                lines.push(format!("{}. XLM (Lumens):", number));
                lines.push(format!("  Total:     {} XLM", balance.balance));
            }
            (false, _) => {
                let code = balance.asset_code.as_deref().unwrap_or(&balance.asset_type);
                lines.push(format!("{}. {}:", number, code));
                lines.push(format!("  Balance: {}", balance.balance));
                if let Some(issuer) = &balance.asset_issuer {
                    lines.push(format!("  Issuer:  {}", truncate_key(issuer, KEY_PREVIEW)));
                }
            }
        }
        lines.push(String::new());
    }

    if account.balances.is_empty() {
        lines.push("(no balances)".to_string());
    }
    join(lines)
}

/// Explanation printed when a queried account does not exist
pub fn render_not_found_hints(public_key: &str) -> String {
    join(vec![
        format!(
            "Account {} was not found on the network.",
            truncate_key(public_key, KEY_PREVIEW)
        ),
        "Possible causes:".to_string(),
        "  - Account was never created/funded".to_string(),
        "  - Typo in the public key".to_string(),
        "  - Wrong network (testnet vs mainnet)".to_string(),
    ])
}

fn render_snapshot(
    number: usize,
    key: &str,
    result: &ItemResult<AccountSnapshot>,
) -> Vec<String> {
    let mut lines = vec![
        format!("=== ACCOUNT {} ===", number),
        format!("Account: {}", abbreviate_key(key, 5, 3)),
    ];
    match result {
        ItemResult::Success(snapshot) => {
            lines.push(format!("  Balance:    {:.2} XLM", snapshot.balance));
            lines.push(format!("  Trustlines: {}", snapshot.trustlines));
            lines.push(format!("  Sequence:   {}", snapshot.sequence));
        }
        ItemResult::Failure { kind, message } => {
            lines.push(format!("  Error ({}): {}", kind, message));
        }
    }
    lines.push(String::new());
    lines
}

/// Per-account monitor lines followed by the aggregate dashboard
pub fn render_monitor(report: &MonitorReport) -> String {
    let mut lines = vec![banner("STELLAR ACCOUNTS MONITOR")];

    for item in &report.batch.results {
        lines.extend(render_snapshot(item.index + 1, &item.item, &item.result));
    }

    let summary: &BatchSummary = &report.batch.summary;
    lines.push(banner("MONITORING SUMMARY"));
    lines.push(format!("Active accounts:        {}", summary.succeeded));
    lines.push(format!("Accounts with errors:   {}", summary.failed));
    lines.push(format!(
        "Total balance:          {:.2} XLM",
        summary.total_value
    ));
    lines.push(format!("Total trustlines:       {}", report.total_trustlines));
    lines.push(format!("Total monitored:        {} accounts", summary.total));
    if let Some(average) = summary.average {
        lines.push(format!("Average balance:        {:.2} XLM", average));
    }
    join(lines)
}

/// Details of an accepted single payment
pub fn render_payment(
    payment: &PaymentRequest,
    outcome: &PaymentOutcome,
    network: Network,
) -> String {
    let mut lines = vec![banner("PAYMENT SUCCESSFUL")];
    if let Some(balance) = &outcome.source_balance {
        lines.push(format!("Balance before:   {} XLM", balance));
    }
    lines.push(format!("You sent:         {} XLM", payment.amount));
    lines.push(format!("To:               {}", payment.destination));
    lines.push(format!(
        "Memo:             {}",
        payment.memo.as_deref().unwrap_or("(none)")
    ));
    lines.push(format!("Transaction hash: {}", outcome.hash));
    if let Some(ledger) = outcome.ledger {
        lines.push(format!("Ledger:           {}", ledger));
    }
    lines.push(format!("View on: {}", network.explorer_tx_url(&outcome.hash)));
    join(lines)
}

fn hash_preview(hash: &str) -> String {
    match hash.get(..HASH_PREVIEW) {
        Some(prefix) if hash.len() > HASH_PREVIEW => format!("{}...", prefix),
        _ => hash.to_string(),
    }
}

/// Per-payment status lines followed by the transaction summary
pub fn render_payment_batch(report: &BatchReport<PaymentRequest, PaymentOutcome>) -> String {
    let mut lines = vec![banner("TRANSACTION SUMMARY")];

    for item in &report.results {
        let payment = &item.item;
        let hash = match &item.result {
            ItemResult::Success(outcome) => hash_preview(&outcome.hash),
            ItemResult::Failure { .. } => "N/A".to_string(),
        };
        lines.push(format!(
            "{}. {}",
            item.index + 1,
            payment.memo.as_deref().unwrap_or("(no memo)")
        ));
        lines.push(format!("   Status:    {}", outcome_label(&item.result)));
        lines.push(format!(
            "   Recipient: {}",
            truncate_key(&payment.destination, KEY_PREVIEW)
        ));
        lines.push(format!("   Hash:      {}", hash));
        lines.push(String::new());
    }

    let summary = &report.summary;
    lines.push(rule());
    lines.push(format!("Successful: {}", summary.succeeded));
    lines.push(format!("Failed:     {}", summary.failed));
    lines.push(format!("Total:      {}", summary.total));
    lines.push(format!("XLM sent:   {:.2} XLM", summary.total_value));
    if let Some(average) = summary.average {
        lines.push(format!("Average:    {:.2} XLM", average));
    }
    join(lines)
}
