//! Benchmarks for dashboard filtering and patch merging

use boxdesk_core::filter::{TechnicianFilter, filter_boxes};
use boxdesk_types::{Assignee, BoxRecord, Device, DeviceId, DevicePatch, Status};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

const TECHNICIANS: [&str; 3] = ["Magnus", "Freja", "Mikkel"];
const DEVICE_TYPES: [&str; 4] = ["Speaker", "Amp", "Subwoofer", "Soundbar"];

fn snapshot(boxes: usize, devices_per_box: usize) -> Vec<BoxRecord> {
    (0..boxes)
        .map(|i| {
            let mut record = BoxRecord::new(format!("box-{i}"), i.to_string());
            record.device_type = Some(DEVICE_TYPES[i % DEVICE_TYPES.len()].to_string());
            record.assigned_technician = if i % 4 == 0 {
                Assignee::Unassigned
            } else {
                Assignee::Technician(TECHNICIANS[i % TECHNICIANS.len()].to_string())
            };
            record.devices = (0..devices_per_box)
                .map(|d| Device::new(format!("{i}-{d}"), format!("SN{i:05}{d:03}")))
                .collect();
            record
        })
        .collect()
}

/// Benchmark filtering the snapshot on every keystroke
fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_boxes");

    for size in [100_usize, 1_000, 10_000] {
        let boxes = snapshot(size, 4);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("search", size), &boxes, |b, boxes| {
            b.iter(|| filter_boxes(black_box(boxes), black_box("sub"), &TechnicianFilter::All));
        });

        let magnus = TechnicianFilter::parse("Magnus");
        group.bench_with_input(
            BenchmarkId::new("search_and_technician", size),
            &boxes,
            |b, boxes| b.iter(|| filter_boxes(black_box(boxes), black_box("1"), &magnus)),
        );
    }

    group.finish();
}

/// Benchmark merging a bulk edit into a box's devices
fn bench_patch(c: &mut Criterion) {
    let mut group = c.benchmark_group("device_patch");

    for devices in [10_usize, 100, 500] {
        let record = snapshot(1, devices).remove(0);
        let targets: Vec<DeviceId> = record
            .devices
            .iter()
            .step_by(2)
            .map(|device| device.id.clone())
            .collect();
        let patch = DevicePatch::status(Status::Completed).with_point_of_error("PSU");

        group.throughput(Throughput::Elements(devices as u64));
        group.bench_with_input(
            BenchmarkId::new("apply_half", devices),
            &record.devices,
            |b, current| b.iter(|| patch.apply(black_box(current), black_box(&targets))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_filter, bench_patch);
criterion_main!(benches);
