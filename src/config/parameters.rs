// src/config/parameters.rs

use log::warn;
use serde::Deserialize;

use crate::simulation::error::SimulationError;

/// 既定の時間ステップ (ms)
pub const DEFAULT_STEP_SIZE: f64 = 0.01;

/// 推奨範囲の上限（元のパラメータ入力の上限）。下限は `validate` で検査する。
pub const RECOMMENDED_INJECTION_MAX: f64 = 50.0;
pub const RECOMMENDED_SODIUM_CONDUCTANCE_MAX: f64 = 200.0;
pub const RECOMMENDED_GATING_SPEED_MAX: f64 = 1.0;

/// 1回の実行で計算できるステップ数の上限
pub const MAX_STEP_COUNT: usize = u32::MAX as usize;

fn default_step_size() -> f64 {
    DEFAULT_STEP_SIZE
}

/// 1回のシミュレーションの設定
///
/// 実行中は変更されない。ゲート変数 m, h, n は既定では [0, 1] に制限されず、
/// 極端な設定では範囲外に出ることがある。`clamp_gating` を true にすると各ステップで制限する。
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SimulationConfig {
    pub injection_amplitude: f64,    // 注入電流の振幅 (µA)
    pub max_sodium_conductance: f64, // Na最大コンダクタンス (mS/cm²)
    pub gating_speed_factor: f64,    // hゲートの速度倍率（1.0 = 通常）
    pub duration: f64,               // シミュレーション時間 (ms)
    #[serde(default = "default_step_size")]
    pub step_size: f64, // 時間ステップ (ms)
    #[serde(default)]
    pub clamp_gating: bool, // ゲート変数を [0, 1] に制限するか
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            injection_amplitude: 10.0,
            max_sodium_conductance: 120.0,
            gating_speed_factor: 1.0,
            duration: 50.0,
            step_size: DEFAULT_STEP_SIZE,
            clamp_gating: false,
        }
    }
}

fn invalid(field: &'static str, value: f64, reason: &'static str) -> SimulationError {
    SimulationError::InvalidConfiguration {
        field,
        value,
        reason,
    }
}

impl SimulationConfig {
    /// 設定値の検証
    ///
    /// # 戻り値
    /// - 全ての値が有効なら `Ok(())`
    /// - 最初に見つかった不正な値について `SimulationError::InvalidConfiguration`
    pub fn validate(&self) -> Result<(), SimulationError> {
        let fields = [
            ("injection_amplitude", self.injection_amplitude),
            ("max_sodium_conductance", self.max_sodium_conductance),
            ("gating_speed_factor", self.gating_speed_factor),
            ("duration", self.duration),
            ("step_size", self.step_size),
        ];
        if let Some((field, value)) = fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(invalid(*field, *value, "有限の値ではありません"));
        }

        if self.injection_amplitude < 0.0 {
            return Err(invalid(
                "injection_amplitude",
                self.injection_amplitude,
                "負の値は指定できません",
            ));
        }
        if self.max_sodium_conductance < 0.0 {
            return Err(invalid(
                "max_sodium_conductance",
                self.max_sodium_conductance,
                "負の値は指定できません",
            ));
        }
        if self.gating_speed_factor <= 0.0 {
            return Err(invalid(
                "gating_speed_factor",
                self.gating_speed_factor,
                "正の値である必要があります",
            ));
        }
        if self.duration <= 0.0 {
            return Err(invalid("duration", self.duration, "正の値である必要があります"));
        }
        if self.step_size <= 0.0 {
            return Err(invalid("step_size", self.step_size, "正の値である必要があります"));
        }
        if self.duration / self.step_size > MAX_STEP_COUNT as f64 {
            return Err(invalid(
                "duration",
                self.duration,
                "ステップ数が上限を超える",
            ));
        }
        if self.step_count() == 0 {
            return Err(invalid(
                "duration",
                self.duration,
                "時間ステップ1つ分より短い",
            ));
        }
        Ok(())
    }

    /// 計算するステップ数 N = floor(duration / step_size)
    ///
    /// 0.01 のような2進数で表せない刻みで 4999.999... になるのを避けるため、わずかな許容幅を加える。
    pub fn step_count(&self) -> usize {
        let ratio = self.duration / self.step_size;
        if !ratio.is_finite() || ratio <= 0.0 {
            return 0;
        }
        (ratio + ratio * 1e-12).floor() as usize
    }

    /// 推奨範囲外の値について警告を出力する
    ///
    /// # 戻り値
    /// - 推奨範囲外だったフィールド名
    pub fn warn_outside_recommended_ranges(&self) -> Vec<&'static str> {
        let mut outside = Vec::new();
        if self.injection_amplitude > RECOMMENDED_INJECTION_MAX {
            outside.push("injection_amplitude");
        }
        if self.max_sodium_conductance > RECOMMENDED_SODIUM_CONDUCTANCE_MAX {
            outside.push("max_sodium_conductance");
        }
        if self.gating_speed_factor > RECOMMENDED_GATING_SPEED_MAX {
            outside.push("gating_speed_factor");
        }
        for field in &outside {
            warn!("{} is outside its recommended range: {:?}", field, self);
        }
        outside
    }
}
