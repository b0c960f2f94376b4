use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::engine_types::PrimeResult;

/// 数値ファイルを読み込み、パースできた値だけを元の順序で返す。
///
/// - 1 行 1 トークンのテキストとして扱い、各行は trim してから処理します。
/// - 空行はスキップ。`i64` としてパースできない行も黙ってスキップします
///   （ログも出しません。回復済みのエラーとして扱う仕様で、実行の成否にも影響しない）。
/// - ファイルが開けない・読めない場合のみエラーを返します。
///
/// 返されたベクタはロード後に変更されず、読み取り専用のスライスとして
/// 全ワーカーで共有される前提です。
pub fn load_numbers<P: AsRef<Path>>(path: P) -> PrimeResult<Vec<i64>> {
    let path_ref = path.as_ref();
    let file = File::open(path_ref).map_err(|e| {
        // OS 固有メッセージは環境によっては文字化けすることがあるため、
        // ログとしては英語のみの簡潔なメッセージに統一する。
        if let Some(code) = e.raw_os_error() {
            format!("Failed to open numbers file {path_ref:?}: OS error code {code}")
        } else {
            format!("Failed to open numbers file {path_ref:?}: unknown I/O error")
        }
    })?;
    let reader = BufReader::new(file);

    let mut numbers = Vec::new();
    let mut line_no: u64 = 0;
    for line_res in reader.lines() {
        line_no += 1;
        let line = line_res.map_err(|e| format!("I/O error at line {line_no}: {e}"))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Ok(n) = trimmed.parse::<i64>() {
            numbers.push(n);
        }
    }
    Ok(numbers)
}
