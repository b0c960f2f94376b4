use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use crate::engine_types::CountResult;
use crate::partition;
use crate::primality::is_prime;

/// ワーカー数の自動検出値（rayon のスレッドプールサイズ）。
pub fn default_worker_count() -> usize {
    rayon::current_num_threads().max(1)
}

/// 入力をチャンクに分割し、チャンクごとに 1 タスクを起動して素数を数える。
///
/// - `workers == 0` はワーカー数の自動検出（`default_worker_count`）を意味します。
/// - 各タスクは自分のチャンクだけを走査してローカルカウントを作り、
///   完了時に 1 回だけ共有のアトミックカウンタへ加算します。
///   他タスクのチャンクを読み書きすることはありません。
/// - `rayon::scope` の終了が全タスク完了のバリアであり、集計値を読むのは
///   スコープを抜けた後だけです（したがって加算は Relaxed で十分）。
/// - 時間計測はタスク起動から join までを覆い、IO は含みません。
/// - 入力が空の場合はタスクを 1 つも起動せず、個数 0・ワーカー数 0 を返します。
pub fn count_parallel(numbers: &[i64], workers: usize) -> CountResult {
    let workers = if workers == 0 {
        default_worker_count()
    } else {
        workers
    };
    let chunks = partition::plan(numbers.len(), workers);

    log::info!(
        "Counting {} numbers with {} workers ({} chunks)",
        numbers.len(),
        workers,
        chunks.len()
    );

    let total = AtomicU64::new(0);
    let start = Instant::now();

    rayon::scope(|s| {
        for &chunk in &chunks {
            let total = &total;
            s.spawn(move |_| {
                let mut local: u64 = 0;
                for &n in &numbers[chunk.from..chunk.to] {
                    if is_prime(n) {
                        local += 1;
                    }
                }
                total.fetch_add(local, Ordering::Relaxed);
            });
        }
    });

    let elapsed = start.elapsed();

    CountResult {
        primes: total.load(Ordering::Relaxed),
        elapsed,
        workers: chunks.len(),
    }
}
