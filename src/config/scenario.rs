// src/config/scenario.rs

use serde::Deserialize;

use crate::config::parameters::SimulationConfig;

/// 複数のシミュレーションをまとめたシナリオ
#[derive(Debug, Deserialize, Clone)]
pub struct Scenario {
    pub runs: Vec<RunInstance>,
}

/// シナリオ中の1回分の実行
#[derive(Debug, Deserialize, Clone)]
pub struct RunInstance {
    pub id: String,
    pub parameters: SimulationConfig,
}
