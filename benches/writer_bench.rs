//! Benchmarks for LineWriter

use std::hint::black_box;
use std::io;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use respwire::LineWriter;

fn int_line_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_int_crlf");
    group.throughput(Throughput::Elements(1_000));

    group.bench_function("cached", |b| {
        let mut writer = LineWriter::new(io::sink());
        b.iter(|| {
            for v in 0..1_000 {
                writer.write_int_crlf(black_box(v % 101)).unwrap();
            }
        });
    });

    group.bench_function("general", |b| {
        let mut writer = LineWriter::new(io::sink());
        b.iter(|| {
            for v in 0..1_000 {
                writer.write_int_crlf(black_box(v * 2_147_483 - 1_073_741_823)).unwrap();
            }
        });
    });

    group.bench_function("std_fmt_baseline", |b| {
        let mut writer = io::BufWriter::with_capacity(8192, io::sink());
        b.iter(|| {
            for v in 0..1_000 {
                let value = black_box(v * 2_147_483 - 1_073_741_823);
                io::Write::write_fmt(&mut writer, format_args!("{}\r\n", value)).unwrap();
            }
        });
    });

    group.finish();
}

fn frame_benchmarks(c: &mut Criterion) {
    let value = vec![b'x'; 512];

    c.bench_function("multi_bulk_set", |b| {
        let mut writer = LineWriter::new(io::sink());
        b.iter(|| {
            let args: [&[u8]; 3] = [b"SET", b"key:000042", &value];
            writer.write_byte(b'*').unwrap();
            writer.write_int_crlf(args.len() as i32).unwrap();
            for arg in args {
                writer.write_byte(b'$').unwrap();
                writer.write_int_crlf(arg.len() as i32).unwrap();
                writer.write_bytes(arg).unwrap();
                writer.write_crlf().unwrap();
            }
            writer.flush().unwrap();
        });
    });
}

criterion_group!(benches, int_line_benchmarks, frame_benchmarks);
criterion_main!(benches);
