use std::error::Error;
use std::time::Duration;

// エンジン層（逐次 / 並列カウンタ、入力取得）で共有するエラー型と結果型の定義。

/// エンジン共通の結果型。
///
/// - 入力ファイルの読み込みやレポート出力など、失敗しうる処理はすべてこの型を返します。
/// - エラーは `Send + Sync` な Box でラップされ、ワーカースレッドから安全に伝播できる想定です。
pub type PrimeResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

/// 1 回のカウント実行（逐次または並列）の集計結果。
///
/// - `elapsed` はカウントループのみを覆い、入力ファイルの読み込み（IO）は含みません。
/// - 素数判定は決定的なので、同じ入力に対して逐次・並列どちらで実行しても
///   `primes` は一致する必要があります。
#[derive(Clone, Copy, Debug)]
pub struct CountResult {
    /// 見つかった素数の個数。
    pub primes: u64,
    /// カウント処理の経過時間（wall-clock）。
    pub elapsed: Duration,
    /// 実際に使用したワーカー数。逐次実行では常に 1。
    /// 並列実行では実際に走査したチャンク数（入力が小さい場合、設定値より少なくなる）。
    pub workers: usize,
}
