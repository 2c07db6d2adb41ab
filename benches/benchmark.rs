use criterion::{
    criterion_group,
    criterion_main,
    BenchmarkGroup,
    Criterion,
    SamplingMode
};
use criterion::measurement::WallTime;

use number_place::Grid;
use number_place::solver::{BacktrackingSolver, Solver};

use std::time::Duration;

// Explanation of benchmark classes:
//
// empty: Grids without any clues, which measure raw fill speed.
// classic: A competition riddle with few clues, which measures search with
//          heavy backtracking.
// partial: A riddle with many clues, which measures search that is mostly
//          determined by the givens.

const MEASUREMENT_TIME_SECS: u64 = 30;
const SAMPLE_SIZE: usize = 100;

const EMPTY_4X4: &'static str = "4;,,,,,,,,,,,,,,,";

const EMPTY_9X9: &'static str = "9;\
     , , , , , , , , ,\
     , , , , , , , , ,\
     , , , , , , , , ,\
     , , , , , , , , ,\
     , , , , , , , , ,\
     , , , , , , , , ,\
     , , , , , , , , ,\
     , , , , , , , , ,\
     , , , , , , , , ";

const CLASSIC_9X9: &'static str = "9;\
     , , , ,8,1, , , ,\
     , ,2, , ,7,8, , ,\
     ,5,3, , , ,1,7, ,\
    3,7, , , , , , , ,\
    6, , , , , , , ,3,\
     , , , , , , ,2,4,\
     ,6,9, , , ,2,3, ,\
     , ,5,9, , ,4, , ,\
     , , ,6,5, , , , ";

const PARTIAL_9X9: &'static str = "9;\
    1, ,3, ,5, ,7, ,9,\
     ,5, ,7, ,9, ,2, ,\
    7, ,9, ,2, ,4, ,6,\
     ,1, ,3, ,5, ,9, ,\
    3, ,5, ,9, ,2, ,4,\
     ,9, ,2, ,4, ,6, ,\
    5, ,1, ,4, ,9, ,8,\
     ,4, ,9, ,8, ,3, ,\
    9, ,8, ,3, ,6, ,2";

fn benchmark_riddle(group: &mut BenchmarkGroup<WallTime>, id: &str,
        code: &str) {
    let riddle = Grid::parse(code).unwrap();

    group.bench_function(id, |b| b.iter(|| {
        let mut grid = riddle.clone();
        assert!(BacktrackingSolver.solve(&mut grid));
    }));
}

fn benchmark_backtracking(c: &mut Criterion) {
    let mut group = c.benchmark_group("backtracking");
    group.measurement_time(Duration::from_secs(MEASUREMENT_TIME_SECS));
    group.sample_size(SAMPLE_SIZE);
    group.sampling_mode(SamplingMode::Flat);

    benchmark_riddle(&mut group, "empty 4x4", EMPTY_4X4);
    benchmark_riddle(&mut group, "empty 9x9", EMPTY_9X9);
    benchmark_riddle(&mut group, "classic 9x9", CLASSIC_9X9);
    benchmark_riddle(&mut group, "partial 9x9", PARTIAL_9X9);
}

criterion_group!(all, benchmark_backtracking);

criterion_main!(all);
