//! 入力を固定数のワーカーに割り当てるための分割計画。

/// 入力スライスに対する半開区間 `[from, to)` のインデックス範囲。
///
/// 1 つのチャンクはちょうど 1 つのワーカーに割り当てられ、
/// ワーカーは自分のチャンク以外の範囲を読み書きしません。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chunk {
    pub from: usize,
    pub to: usize,
}

impl Chunk {
    pub fn len(&self) -> usize {
        self.to - self.from
    }

    pub fn is_empty(&self) -> bool {
        self.from >= self.to
    }
}

/// `total` 件の入力を最大 `workers` 個の連続チャンクに分割する。
///
/// - チャンクサイズは `ceil(total / workers)`。
/// - チャンクは互いに重ならず、順序どおりに並び、合計で `[0, total)` を過不足なく覆います。
/// - `total` が小さい場合、生成されるチャンク数は `workers` より少なくなります
///   （`from >= total` になった時点で打ち切り）。
/// - `total == 0` の場合は空の計画を返します。
/// - `workers >= 1` は呼び出し側の契約です。
pub fn plan(total: usize, workers: usize) -> Vec<Chunk> {
    debug_assert!(workers >= 1, "workers must be >= 1");
    if total == 0 {
        return Vec::new();
    }

    let chunk_size = total.div_ceil(workers);
    let mut chunks = Vec::with_capacity(workers);
    let mut from = 0usize;
    while from < total {
        let to = (from + chunk_size).min(total);
        chunks.push(Chunk { from, to });
        from = to;
    }
    chunks
}
