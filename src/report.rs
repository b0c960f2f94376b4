use std::io::Write;
use std::time::Duration;

use crate::engine_types::PrimeResult;
use crate::par_engine::count_parallel;
use crate::seq_engine::count_sequential;

/// 非負整数を 3 桁区切りでフォーマットする（例: 1234567 → `"1,234,567"`）。
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn as_millis_f64(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

/// 同じ入力に対して逐次パス・並列パスの順に実行し、結果を `out` に書き出す。
///
/// 出力は 4 行:
///
/// ```text
/// File: <path> (<N> numbers)
/// [Single-Threaded] Primes found: <count>  Time: <ms> ms
/// [Multi-Threaded] (<w> workers) Primes found: <count>  Time: <ms> ms
/// Speedup: <seq_ms / par_ms>x
/// ```
///
/// - 個数は `format_count` で 3 桁区切り、時間は小数 1 桁の ms、
///   スピードアップ比は小数 2 桁で表示します。
/// - `workers == 0` は並列パスのワーカー数自動検出を意味します。
pub fn run_report(
    path: &str,
    numbers: &[i64],
    workers: usize,
    out: &mut impl Write,
) -> PrimeResult<()> {
    writeln!(
        out,
        "File: {} ({} numbers)",
        path,
        format_count(numbers.len() as u64)
    )?;

    let seq = count_sequential(numbers);
    writeln!(
        out,
        "[Single-Threaded] Primes found: {}  Time: {:.1} ms",
        format_count(seq.primes),
        as_millis_f64(seq.elapsed)
    )?;

    let par = count_parallel(numbers, workers);
    writeln!(
        out,
        "[Multi-Threaded] ({} workers) Primes found: {}  Time: {:.1} ms",
        par.workers,
        format_count(par.primes),
        as_millis_f64(par.elapsed)
    )?;

    let speedup = as_millis_f64(seq.elapsed) / as_millis_f64(par.elapsed);
    writeln!(out, "Speedup: {speedup:.2}x")?;

    Ok(())
}
