// src/models/channels.rs

/// Na平衡電位 (mV)
pub const SODIUM_REVERSAL: f64 = 50.0;
/// K最大コンダクタンス (mS/cm²)
pub const POTASSIUM_MAX_CONDUCTANCE: f64 = 36.0;
/// K平衡電位 (mV)
pub const POTASSIUM_REVERSAL: f64 = -77.0;
/// リークコンダクタンス (mS/cm²)
pub const LEAK_CONDUCTANCE: f64 = 0.3;
/// リーク平衡電位 (mV)
pub const LEAK_REVERSAL: f64 = -54.4;
/// 膜容量 (µF/cm²)
pub const MEMBRANE_CAPACITANCE: f64 = 1.0;

/// 各チャネルを流れる電流 (µA/cm²)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IonicCurrents {
    pub sodium: f64,
    pub potassium: f64,
    pub leak: f64,
}

impl IonicCurrents {
    /// 外部電流から各イオン電流を順に差し引いた正味の膜電流
    pub fn net_membrane_current(&self, i_ext: f64) -> f64 {
        i_ext - self.sodium - self.potassium - self.leak
    }
}

/// Na電流 g_Na * m^3 * h * (V - E_Na)
pub fn sodium_current(max_conductance: f64, m: f64, h: f64, v: f64) -> f64 {
    max_conductance * m.powi(3) * h * (v - SODIUM_REVERSAL)
}

/// K電流 g_K * n^4 * (V - E_K)
pub fn potassium_current(n: f64, v: f64) -> f64 {
    POTASSIUM_MAX_CONDUCTANCE * n.powi(4) * (v - POTASSIUM_REVERSAL)
}

/// リーク電流 g_L * (V - E_L)
pub fn leak_current(v: f64) -> f64 {
    LEAK_CONDUCTANCE * (v - LEAK_REVERSAL)
}

/// 全てのイオン電流を計算する純粋関数
///
/// # 引数
/// - `max_sodium_conductance`: Na最大コンダクタンス (mS/cm²)
/// - `m`, `h`, `n`: ゲート変数
/// - `v`: 膜電位 (mV)
///
/// # 戻り値
/// - 各チャネルの電流
pub fn ionic_currents(max_sodium_conductance: f64, m: f64, h: f64, n: f64, v: f64) -> IonicCurrents {
    IonicCurrents {
        sodium: sodium_current(max_sodium_conductance, m, h, v),
        potassium: potassium_current(n, v),
        leak: leak_current(v),
    }
}
