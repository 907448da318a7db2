//! CPU initiator unit tests.
//!
//! Verifies outcome reporting (data, latency, completion time), malformed
//! request rejection before the chain is entered, the programmed workload
//! queue, and strict sequencing.

use bussim_core::common::{Delay, SimTime, TransportError};
use bussim_core::core::cpu::{Cpu, Request};
use bussim_core::payload::Command;
use bussim_core::sim::clock::SimClock;

use crate::common::harness::bus_with_preloaded_memory;

const LATENCY: u64 = 10;

fn cpu_with_memory() -> (Cpu, SimClock) {
    let clock = SimClock::new();
    let bus = bus_with_preloaded_memory(0, 256, LATENCY);
    (Cpu::new("cpu0", Box::new(bus), clock.clone()), clock)
}

// ══════════════════════════════════════════════════════════
// 1. Successful transactions
// ══════════════════════════════════════════════════════════

#[test]
fn read_reports_data_latency_and_completion_time() {
    let (mut cpu, _) = cpu_with_memory();
    let outcome = cpu.read(0x10, 1);

    assert!(outcome.is_completed());
    assert_eq!(outcome.data, vec![0x10]);
    assert_eq!(outcome.latency, Delay::new(LATENCY));
    assert_eq!(outcome.issued_at, SimTime::ZERO);
    assert_eq!(outcome.finished_at, SimTime::new(LATENCY));
}

#[test]
fn write_then_read_round_trips_through_the_chain() {
    let (mut cpu, _) = cpu_with_memory();
    let outcome = cpu.write(0x20, vec![0xAA, 0xBB]);
    assert!(outcome.is_completed());

    let outcome = cpu.read(0x20, 2);
    assert!(outcome.is_completed());
    assert_eq!(outcome.data, vec![0xAA, 0xBB]);
}

#[test]
fn completion_time_reflects_an_advanced_clock() {
    let (mut cpu, clock) = cpu_with_memory();
    let _ = clock.advance(Delay::new(100));

    let outcome = cpu.read(0, 1);
    assert_eq!(outcome.issued_at, SimTime::new(100));
    assert_eq!(outcome.finished_at, SimTime::new(100 + LATENCY));
}

// ══════════════════════════════════════════════════════════
// 2. Failed transactions
// ══════════════════════════════════════════════════════════

#[test]
fn failure_is_distinguishable_and_charges_no_latency() {
    let (mut cpu, _) = cpu_with_memory();
    let outcome = cpu.read(0x9000, 4);

    assert!(!outcome.is_completed());
    assert!(matches!(
        outcome.result,
        Err(TransportError::UnmappedAddress { .. })
    ));
    assert_eq!(outcome.latency, Delay::ZERO);
    assert_eq!(outcome.finished_at, outcome.issued_at);
    // A failed read yields no valid data.
    assert_eq!(outcome.data, vec![0; 4]);
}

#[test]
fn zero_length_request_is_malformed() {
    let (mut cpu, _) = cpu_with_memory();
    let outcome = cpu.execute(Request::read(0, 0));
    assert!(matches!(
        outcome.result,
        Err(TransportError::MalformedRequest {
            length: 0,
            capacity: 0
        })
    ));
}

#[test]
fn length_exceeding_write_data_is_malformed() {
    let (mut cpu, _) = cpu_with_memory();
    let outcome = cpu.execute(Request {
        command: Command::Write,
        address: 0,
        length: 8,
        data: Some(vec![1, 2]),
    });
    assert!(matches!(
        outcome.result,
        Err(TransportError::MalformedRequest {
            length: 8,
            capacity: 2
        })
    ));
    assert_eq!(outcome.latency, Delay::ZERO);
}

// ══════════════════════════════════════════════════════════
// 3. Programmed workload
// ══════════════════════════════════════════════════════════

#[test]
fn step_executes_requests_in_order_then_idles() {
    let (mut cpu, _) = cpu_with_memory();
    cpu.program(vec![Request::read(0x01, 1), Request::read(0x02, 1)]);
    assert!(!cpu.is_idle());

    let first = cpu.step().expect("first request");
    assert_eq!(first.data, vec![0x01]);
    let second = cpu.step().expect("second request");
    assert_eq!(second.data, vec![0x02]);

    assert!(cpu.is_idle());
    assert!(cpu.step().is_none());
}

#[test]
fn enqueue_appends_to_the_workload() {
    let (mut cpu, _) = cpu_with_memory();
    cpu.enqueue(Request::write(0x30, vec![5]));
    cpu.enqueue(Request::read(0x30, 1));

    let _ = cpu.step().expect("write");
    let read_back = cpu.step().expect("read");
    assert_eq!(read_back.data, vec![5]);
}

#[test]
fn a_failed_request_does_not_stop_later_ones() {
    let (mut cpu, _) = cpu_with_memory();
    cpu.program(vec![Request::read(0x9000, 4), Request::read(0x10, 1)]);

    let failed = cpu.step().expect("failing request");
    assert!(!failed.is_completed());

    let ok = cpu.step().expect("next request");
    assert!(ok.is_completed());
    assert_eq!(ok.data, vec![0x10]);
}
