use sosu_kazoe::par_engine::{count_parallel, default_worker_count};
use sosu_kazoe::seq_engine::count_sequential;

/// どのワーカー数でも、並列カウントは逐次カウントと同じ個数を返す。
#[test]
fn parallel_count_equals_sequential_count_for_any_worker_count() {
    let numbers = generate_numbers(5_000);
    let seq = count_sequential(&numbers);

    for workers in [1usize, 2, 3, 4, 7, 8, 32] {
        let par = count_parallel(&numbers, workers);
        assert_eq!(
            par.primes, seq.primes,
            "parallel count with {workers} workers should equal sequential count"
        );
        assert!(
            par.workers <= workers,
            "used workers ({}) should not exceed requested ({workers})",
            par.workers
        );
    }
}

/// workers == 0 はワーカー数の自動検出を意味し、結果は逐次実行と一致する。
#[test]
fn parallel_count_with_auto_detected_workers() {
    let numbers = generate_numbers(2_000);
    let seq = count_sequential(&numbers);
    let par = count_parallel(&numbers, 0);

    assert_eq!(par.primes, seq.primes);
    assert!(par.workers >= 1);
    assert!(par.workers <= default_worker_count());
}

/// 空の入力では両エンジンとも 0 を返し、並列側はタスクを 1 つも起動しない。
#[test]
fn empty_input_counts_zero_primes() {
    let numbers: Vec<i64> = Vec::new();

    let seq = count_sequential(&numbers);
    assert_eq!(seq.primes, 0);
    assert_eq!(seq.workers, 1);

    let par = count_parallel(&numbers, 4);
    assert_eq!(par.primes, 0);
    assert_eq!(par.workers, 0, "no chunks means no workers are used");
}

/// 同じ入力に対して繰り返し実行しても個数は変わらない（冪等性）。
#[test]
fn repeated_runs_yield_identical_totals() {
    let numbers = generate_numbers(1_000);

    let seq_first = count_sequential(&numbers);
    let seq_second = count_sequential(&numbers);
    assert_eq!(seq_first.primes, seq_second.primes);

    let par_first = count_parallel(&numbers, 4);
    let par_second = count_parallel(&numbers, 4);
    assert_eq!(par_first.primes, par_second.primes);
    assert_eq!(par_first.primes, seq_first.primes);
}

/// 入力がワーカー数より少ない場合、使用ワーカー数は入力数まで減る。
#[test]
fn tiny_input_uses_fewer_workers_than_requested() {
    let numbers = vec![2i64, 3];
    let par = count_parallel(&numbers, 8);

    assert_eq!(par.primes, 2);
    assert_eq!(par.workers, 2, "two items across eight workers yields two chunks");
}

/// 決定的な疑似乱数（LCG）で、負数・0・大きい値が混在する入力を作る（テスト専用）。
fn generate_numbers(count: usize) -> Vec<i64> {
    let mut state: u64 = 0x5EED_5EED_5EED_5EED;
    let mut numbers = Vec::with_capacity(count);
    for _ in 0..count {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let r = state >> 33;
        let n = match r % 20 {
            0 => 0,
            1 => -((r % 1_000) as i64 + 1),
            2 => 2_147_483_647 - (r % 7) as i64,
            _ => (r % 1_500_000) as i64 + 2,
        };
        numbers.push(n);
    }
    numbers
}
