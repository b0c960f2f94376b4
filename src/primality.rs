/// 64bit 符号付き整数に対する決定的な素数判定。
///
/// - n < 2 は素数でない。2 と 3 は素数。
/// - 2 または 3 で割り切れる値を除外した後、6k±1 の形の候補
///   （i = 5, 11, 17, … に対する i と i+2）で試し割りする。
/// - `i * i <= n` の比較は `checked_mul` でオーバーフローを防ぐ。
///   オーバーフローした時点で i > √n が確定するため、試し割りを打ち切ってよい。
///
/// 副作用なし・エラー条件なし。逐次・並列の両エンジンから呼ばれる。
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 || n == 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let mut i: i64 = 5;
    while let Some(sq) = i.checked_mul(i) {
        if sq > n {
            break;
        }
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}
