use std::time::Instant;

use crate::engine_types::CountResult;
use crate::primality::is_prime;

/// 入力全体を 1 スレッドで順に走査して素数を数える。
///
/// - 時間計測はカウントループのみを対象とし、入力の読み込み（IO）は含みません。
/// - この結果は並列エンジンの検算基準でもあります（同じ入力なら個数は必ず一致する）。
pub fn count_sequential(numbers: &[i64]) -> CountResult {
    let start = Instant::now();

    let mut primes: u64 = 0;
    for &n in numbers {
        if is_prime(n) {
            primes += 1;
        }
    }

    CountResult {
        primes,
        elapsed: start.elapsed(),
        workers: 1,
    }
}
