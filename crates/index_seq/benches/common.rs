use std::hint::black_box;
use std::time::{Duration, Instant};

use bench::apply_small_runtime_config;
use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use index_seq::{
    ArraySequence, DelegatingSequence, Sequence, SequenceAppend, SequenceInsert, SequencePrepend,
    SequenceRemove, SequenceReplace,
};

const SIZES: [usize; 3] = [1_000, 4_000, 16_000];
const OPS_PER_SIZE: usize = 100;
const VALUE_RANGE: std::ops::RangeInclusive<i64> = -1_000_000_000..=1_000_000_000;
const WORKLOAD_WEIGHTS: &[(OpKind, u32)] = &[
    (OpKind::Get, 30),
    (OpKind::Replace, 20),
    (OpKind::Insert, 15),
    (OpKind::Remove, 15),
    (OpKind::Append, 5),
    (OpKind::Prepend, 5),
    (OpKind::Traverse, 10),
];

#[derive(Clone, Copy)]
enum OpKind {
    Get,
    Replace,
    Insert,
    Remove,
    Append,
    Prepend,
    Traverse,
}

#[derive(Clone, Copy)]
enum Op {
    Get { offset: usize },
    Replace { offset: usize, value: i64 },
    Insert { offset: usize, value: i64 },
    Remove { offset: usize },
    Append { value: i64 },
    Prepend { value: i64 },
    Traverse,
}

trait BenchSequence:
    Sequence<Item = i64>
    + SequenceReplace
    + SequenceInsert
    + SequenceRemove
    + SequenceAppend
    + SequencePrepend
{
    fn with_items(items: &[i64]) -> Self;
}

impl BenchSequence for ArraySequence<i64> {
    fn with_items(items: &[i64]) -> Self {
        ArraySequence::from_items(0, items.to_vec())
    }
}

impl BenchSequence for DelegatingSequence<ArraySequence<i64>> {
    fn with_items(items: &[i64]) -> Self {
        DelegatingSequence::new(ArraySequence::from_items(0, items.to_vec()))
    }
}

pub fn bench_workload(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_seq/workload");

    for &size in &SIZES {
        apply_small_runtime_config(&mut group);
        let base_seed = seed_base(size as u64);
        let mut init_rng = StdRng::seed_from_u64(base_seed);
        let initial = bench::random_values(&mut init_rng, size, VALUE_RANGE);

        bench_sequence::<ArraySequence<i64>, _>(&mut group, "array", size, base_seed, &initial);
        bench_sequence::<DelegatingSequence<ArraySequence<i64>>, _>(
            &mut group,
            "delegating",
            size,
            base_seed,
            &initial,
        );
    }

    group.finish();
}

pub fn bench_traverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_seq/traverse");
    apply_small_runtime_config(&mut group);

    for &size in &SIZES {
        let mut rng = bench::default_rng();
        let sequence =
            ArraySequence::from_items(0, bench::random_values(&mut rng, size, VALUE_RANGE));

        group.bench_function(BenchmarkId::new("traverser", size), |bencher| {
            bencher.iter(|| {
                let mut total = 0_i64;
                let mut traverser = sequence.traverse();
                while let Ok(value) = traverser.next() {
                    total += *value;
                }
                black_box(total)
            })
        });

        group.bench_function(BenchmarkId::new("iter", size), |bencher| {
            bencher.iter(|| black_box(sequence.iter().copied().sum::<i64>()))
        });

        group.bench_function(BenchmarkId::new("get_loop", size), |bencher| {
            bencher.iter(|| {
                let mut total = 0_i64;
                for index in sequence.first_index()..=sequence.last_index() {
                    total += *sequence.get(index).unwrap();
                }
                black_box(total)
            })
        });
    }

    group.finish();
}

fn bench_sequence<S, M>(
    group: &mut BenchmarkGroup<'_, M>,
    label: &str,
    size: usize,
    base_seed: u64,
    initial: &[i64],
) where
    S: BenchSequence,
    M: Measurement<Value = Duration>,
{
    let mut sequence = S::with_items(initial);

    group.bench_function(BenchmarkId::new(label, size), |bencher| {
        bencher.iter_custom(|iters| {
            let mut total = Duration::ZERO;
            // Reuse the same sequence; regenerate ops per iteration from a
            // fixed seed.
            for iter in 0..iters {
                let iter_seed = seed_for_iter(base_seed, iter);
                let mut op_rng = StdRng::seed_from_u64(iter_seed);
                let ops = generate_ops(sequence.len(), &mut op_rng);
                let start = Instant::now();
                run_ops(&mut sequence, &ops);
                black_box(sequence.len());
                total += start.elapsed();
            }
            total
        })
    });
}

fn run_ops<S: BenchSequence>(sequence: &mut S, ops: &[Op]) {
    for op in ops {
        match *op {
            Op::Get { offset } => {
                let index = sequence.first_index() + offset as i64;
                black_box(sequence.get(index).is_ok());
            }
            Op::Replace { offset, value } => {
                let index = sequence.first_index() + offset as i64;
                black_box(sequence.replace(index, value).is_ok());
            }
            Op::Insert { offset, value } => {
                let index = sequence.first_index() + offset as i64;
                black_box(sequence.insert(index, value).is_ok());
            }
            Op::Remove { offset } => {
                let index = sequence.first_index() + offset as i64;
                black_box(sequence.remove(index).is_ok());
            }
            Op::Append { value } => sequence.append(value),
            Op::Prepend { value } => sequence.prepend(value),
            Op::Traverse => {
                let mut total = 0_i64;
                let mut traverser = sequence.traverse();
                while let Ok(value) = traverser.next() {
                    total += *value;
                }
                black_box(total);
            }
        }
    }
}

fn choose_kind<R: Rng + ?Sized>(rng: &mut R) -> OpKind {
    let total: u32 = WORKLOAD_WEIGHTS.iter().map(|(_, weight)| *weight).sum();
    let mut roll = rng.random_range(0..total);
    for (kind, weight) in WORKLOAD_WEIGHTS {
        if roll < *weight {
            return *kind;
        }
        roll -= *weight;
    }
    OpKind::Insert
}

fn generate_ops(size: usize, rng: &mut impl Rng) -> Vec<Op> {
    let mut len = size;
    let mut ops = Vec::with_capacity(OPS_PER_SIZE);

    for step in 0..OPS_PER_SIZE {
        let remaining = OPS_PER_SIZE - step;
        let mut kind = choose_kind(rng);
        let drift = len as isize - size as isize;
        if drift > remaining as isize {
            kind = OpKind::Remove;
        } else if drift < -(remaining as isize) {
            kind = OpKind::Insert;
        }
        if len == 0 && matches!(kind, OpKind::Get | OpKind::Replace | OpKind::Remove) {
            kind = OpKind::Insert;
        }

        match kind {
            OpKind::Get => ops.push(Op::Get {
                offset: rng.random_range(0..len),
            }),
            OpKind::Replace => ops.push(Op::Replace {
                offset: rng.random_range(0..len),
                value: rng.random_range(VALUE_RANGE),
            }),
            OpKind::Insert => {
                ops.push(Op::Insert {
                    offset: rng.random_range(0..=len),
                    value: rng.random_range(VALUE_RANGE),
                });
                len += 1;
            }
            OpKind::Remove => {
                ops.push(Op::Remove {
                    offset: rng.random_range(0..len),
                });
                len -= 1;
            }
            OpKind::Append => {
                ops.push(Op::Append {
                    value: rng.random_range(VALUE_RANGE),
                });
                len += 1;
            }
            OpKind::Prepend => {
                ops.push(Op::Prepend {
                    value: rng.random_range(VALUE_RANGE),
                });
                len += 1;
            }
            OpKind::Traverse => ops.push(Op::Traverse),
        }
    }

    ops
}

const SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

fn seed_base(size: u64) -> u64 {
    mix_seed(0x5EED_2026 ^ size.wrapping_mul(SEED_MIX))
}

fn seed_for_iter(base: u64, iter: u64) -> u64 {
    mix_seed(base ^ iter.wrapping_mul(SEED_MIX))
}

fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
