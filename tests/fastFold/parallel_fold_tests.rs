use approx::assert_relative_eq;
use fastFold::prelude::*;
use std::thread;

fn hardware_workers() -> usize {
    thread::available_parallelism().map(|p| p.get()).unwrap_or(4)
}

#[test]
fn test_scan_worker_count_invariance() {
    // Integer results must be identical for every worker count.
    let n = 1000;
    let input: Vec<i64> = (0..n as i64).map(|i| (i * 31) % 23 - 11).collect();
    let expected: Vec<i64> = input
        .iter()
        .scan(0i64, |acc, &v| {
            *acc += v;
            Some(*acc)
        })
        .collect();

    for workers in [1, 2, hardware_workers(), n, n + 10] {
        for backend in [Backend::Threads, Backend::TaskPool] {
            let fold = Fold::new()
                .workers(workers)
                .backend(backend)
                .build()
                .unwrap();
            assert_eq!(
                fold.scan(&input).unwrap(),
                expected,
                "workers={workers} backend={backend:?}"
            );
        }
    }
}

#[test]
fn test_reduce_worker_count_invariance() {
    let n = 1000;
    let a: Vec<i64> = (0..n as i64).map(|i| i % 7 - 3).collect();
    let b: Vec<i64> = (0..n as i64).map(|i| i % 5 + 1).collect();
    let expected: i64 = a.iter().zip(&b).map(|(x, y)| x * y).sum();

    for workers in [1, 2, hardware_workers(), n, n + 10] {
        for backend in [Backend::Threads, Backend::TaskPool] {
            let fold = Fold::new()
                .workers(workers)
                .backend(backend)
                .build()
                .unwrap();
            assert_eq!(
                fold.reduce(&a, &b).unwrap(),
                expected,
                "workers={workers} backend={backend:?}"
            );
        }
    }
}

#[test]
fn test_backend_equivalence_floats() {
    // For a fixed worker count both backends chunk identically and so
    // compute the identical floating-point expression tree.
    let n = 777;
    let x: Vec<f64> = (0..n).map(|i| (i as f64 / 13.0).sin()).collect();
    let y: Vec<f64> = (0..n).map(|i| (i as f64 / 7.0).cos()).collect();

    for workers in [1usize, 3, 8] {
        let threads = Fold::new()
            .workers(workers)
            .backend(Backend::Threads)
            .build()
            .unwrap();
        let tasks = Fold::new()
            .workers(workers)
            .backend(Backend::TaskPool)
            .build()
            .unwrap();

        let scan_threads = threads.scan(&x).unwrap();
        let scan_tasks = tasks.scan(&x).unwrap();
        assert_eq!(scan_threads, scan_tasks, "workers={workers}");

        let dot_threads: f64 = threads.reduce(&x, &y).unwrap();
        let dot_tasks: f64 = tasks.reduce(&x, &y).unwrap();
        assert_eq!(dot_threads, dot_tasks, "workers={workers}");
    }
}

#[test]
fn test_float_scan_tolerance_across_worker_counts() {
    // Summation order follows the chunk structure, so float results may
    // differ across worker counts within rounding tolerance.
    let n = 2048;
    let input: Vec<f64> = (0..n)
        .map(|i| (i as f64 * 0.37).sin() / 3.0 + 0.25)
        .collect();
    let expected: Vec<f64> = input
        .iter()
        .scan(0.0f64, |acc, &v| {
            *acc += v;
            Some(*acc)
        })
        .collect();

    for workers in [1, 2, 7, 64, n, n + 10] {
        let fold = Fold::new().workers(workers).build().unwrap();
        let output = fold.scan(&input).unwrap();
        assert_eq!(output.len(), n);
        for i in 0..n {
            assert_relative_eq!(
                output[i],
                expected[i],
                max_relative = 1e-9,
                epsilon = 1e-12
            );
        }
    }
}

#[test]
fn test_float_reduce_tolerance_across_worker_counts() {
    let n = 4096;
    let a: Vec<f64> = (0..n).map(|i| (i as f64 / 29.0).sin()).collect();
    let b: Vec<f64> = (0..n).map(|i| (i as f64 / 31.0).cos() + 2.0).collect();
    let expected: f64 = a.iter().zip(&b).map(|(x, y)| x * y).sum();

    for workers in [1, 2, hardware_workers(), 100, n + 10] {
        for backend in [Backend::Threads, Backend::TaskPool] {
            let fold = Fold::new()
                .workers(workers)
                .backend(backend)
                .build()
                .unwrap();
            let dot = fold.reduce(&a, &b).unwrap();
            assert_relative_eq!(dot, expected, max_relative = 1e-9);
        }
    }
}
