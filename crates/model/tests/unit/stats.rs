//! Statistics accounting tests.
//!
//! Verifies that outcomes fold into the counters correctly and that the
//! report renders.

use bussim_core::common::{Delay, GlobalAddr, SimTime, TransportError};
use bussim_core::core::cpu::TransactionOutcome;
use bussim_core::payload::Command;
use bussim_core::stats::SimStats;

fn completed_read(bytes: usize, latency: u64) -> TransactionOutcome {
    TransactionOutcome {
        command: Command::Read,
        address: 0x10,
        data: vec![0; bytes],
        latency: Delay::new(latency),
        issued_at: SimTime::ZERO,
        finished_at: SimTime::new(latency),
        result: Ok(()),
    }
}

fn failed_read(err: TransportError) -> TransactionOutcome {
    TransactionOutcome {
        command: Command::Read,
        address: 0x9000,
        data: vec![0; 4],
        latency: Delay::ZERO,
        issued_at: SimTime::ZERO,
        finished_at: SimTime::ZERO,
        result: Err(err),
    }
}

// ══════════════════════════════════════════════════════════
// 1. Counter accounting
// ══════════════════════════════════════════════════════════

#[test]
fn completed_transactions_count_traffic_and_latency() {
    let mut stats = SimStats::new();
    stats.record(&completed_read(4, 10));
    stats.record(&completed_read(1, 10));

    assert_eq!(stats.transactions, 2);
    assert_eq!(stats.completed, 2);
    assert_eq!(stats.failed, 0);
    assert_eq!(stats.reads, 2);
    assert_eq!(stats.bytes_read, 5);
    assert_eq!(stats.total_latency, 20);
}

#[test]
fn failures_are_split_by_kind() {
    let mut stats = SimStats::new();
    stats.record(&failed_read(TransportError::UnmappedAddress {
        router: "bus0".to_string(),
        addr: GlobalAddr::new(0x9000),
    }));
    stats.record(&failed_read(TransportError::MalformedRequest {
        length: 0,
        capacity: 0,
    }));

    assert_eq!(stats.failed, 2);
    assert_eq!(stats.unmapped, 1);
    assert_eq!(stats.malformed, 1);
    assert_eq!(stats.out_of_range, 0);
    // Failed reads move no bytes.
    assert_eq!(stats.bytes_read, 0);
}

#[test]
fn writes_count_separately_from_reads() {
    let mut stats = SimStats::new();
    let outcome = TransactionOutcome {
        command: Command::Write,
        address: 0x20,
        data: vec![1, 2, 3],
        latency: Delay::new(10),
        issued_at: SimTime::ZERO,
        finished_at: SimTime::new(10),
        result: Ok(()),
    };
    stats.record(&outcome);

    assert_eq!(stats.writes, 1);
    assert_eq!(stats.reads, 0);
    assert_eq!(stats.bytes_written, 3);
    assert_eq!(stats.bytes_read, 0);
}

// ══════════════════════════════════════════════════════════
// 2. Reporting
// ══════════════════════════════════════════════════════════

#[test]
fn report_renders_counts() {
    let mut stats = SimStats::new();
    stats.record(&completed_read(1, 10));
    stats.finish(10);

    let report = stats.to_string();
    assert!(report.contains("transactions : 1 (1 completed, 0 failed)"), "got: {report}");
    assert!(report.contains("sim time     : 10 tu"), "got: {report}");
}

#[test]
fn stats_serialize_to_json() {
    let mut stats = SimStats::new();
    stats.record(&completed_read(4, 10));
    let value = serde_json::to_value(&stats).expect("serialize");
    assert_eq!(value["transactions"], 1);
    assert_eq!(value["bytes_read"], 4);
}
