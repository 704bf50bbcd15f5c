//! Performance benchmarks for the Contract Payment Audit Engine.
//!
//! Verifies that batch evaluation stays linear in record count: the
//! per-run indices are built once, so doubling the batch should roughly
//! double the runtime.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use contract_audit::audit::audit_contracts;
use contract_audit::config::AuditConfig;
use contract_audit::models::{
    ApprovedPayment, ContractRecord, ContractStatus, ExceptionRecord, MaidType, PayrollRecord,
    PriceRow,
};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn price_table() -> Vec<PriceRow> {
    let categories = ["Filipina", "Ethiopian", "Other"];
    let mut rows = Vec::new();
    for category in categories {
        for year in 2020..=2025 {
            rows.push(PriceRow {
                nationality_category: category.to_string(),
                contract_type: "Standard".to_string(),
                valid_from: date(&format!("{year}-01-01")).into(),
                valid_to: date(&format!("{year}-12-31")).into(),
                minimum_payment: Some(Decimal::new(1300 + (year as i64 - 2020) * 40, 0)),
            });
        }
    }
    rows
}

fn batch(size: usize) -> (Vec<ContractRecord>, Vec<PayrollRecord>, Vec<ExceptionRecord>) {
    let contracts: Vec<ContractRecord> = (0..size)
        .map(|i| ContractRecord {
            id: format!("C{i}"),
            nationality_category: if i % 2 == 0 { "Filipina" } else { "Ethiopian" }.to_string(),
            contract_type: "Standard".to_string(),
            amount_paid: Some(Decimal::new(1200 + (i as i64 % 500), 0)),
            start_of_contract: Some(date("2023-06-15")),
            upgrade_amount: (i % 5 == 0).then(|| Decimal::new(200, 0)),
            pro_rated: Some(Decimal::new(700, 0)),
        })
        .collect();

    // Every other contract is eligible; a handful are exceptional.
    let payroll: Vec<PayrollRecord> = (0..size)
        .step_by(2)
        .map(|i| PayrollRecord {
            contract_id: format!("C{i}"),
            status: ContractStatus::WithClient,
            maid_type: MaidType::Cc,
        })
        .collect();

    let exceptions: Vec<ExceptionRecord> = (0..size.max(1))
        .step_by(10)
        .map(|i| ExceptionRecord {
            contract_id: format!("C{i}"),
            payment: ApprovedPayment::Amount(Decimal::new(1250, 0)),
        })
        .collect();

    (contracts, payroll, exceptions)
}

fn bench_batch_sizes(c: &mut Criterion) {
    let prices = price_table();
    let config = AuditConfig::default();
    let month_start = date("2025-06-01");

    let mut group = c.benchmark_group("audit_batch");
    for size in [100usize, 1_000, 10_000] {
        let (contracts, payroll, exceptions) = batch(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                audit_contracts(
                    black_box(&contracts),
                    black_box(&payroll),
                    black_box(&exceptions),
                    black_box(&prices),
                    month_start,
                    &config,
                )
                .unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_batch_sizes);
criterion_main!(benches);
