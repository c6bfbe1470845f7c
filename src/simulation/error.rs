// src/simulation/error.rs

use thiserror::Error;

/// シミュレーション実行時のエラー
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("設定値が不正です: {field} = {value} ({reason})")]
    InvalidConfiguration {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
    #[error("シミュレーションはステップ {step} で中断されました。")]
    Cancelled { step: usize },
}

/// 設定ファイル読み込み時のエラー
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("ファイル {path} を開けません: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("ファイル {path} のYAMLを解析できません: {source}")]
    Yaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("ラン `{id}` の設定が不正です: {source}")]
    InvalidRun {
        id: String,
        #[source]
        source: SimulationError,
    },
    #[error("ラン `{0}` が重複しています。")]
    DuplicateRun(String),
}
