// src/simulation/load_parameters.rs

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;

use serde::de::DeserializeOwned;

use crate::config::{Scenario, SimulationConfig};
use crate::simulation::error::LoadError;

/// YAML パース共通関数
fn parse_yaml<T: DeserializeOwned, R: Read>(reader: R, path: &str) -> Result<T, LoadError> {
    serde_yaml::from_reader(reader).map_err(|source| LoadError::Yaml {
        path: path.to_string(),
        source,
    })
}

fn open(path: &str) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::Io {
        path: path.to_string(),
        source,
    })
}

/// シミュレーション設定の読み込み
pub fn load_simulation_config(path: &str) -> Result<SimulationConfig, LoadError> {
    let config: SimulationConfig = parse_yaml(open(path)?, path)?;
    config.validate().map_err(|source| LoadError::InvalidRun {
        id: path.to_string(),
        source,
    })?;
    Ok(config)
}

/// シナリオの検証
///
/// ランIDの重複と各ランの設定値を確認する。
pub fn validate_scenario(scenario: &Scenario) -> Result<(), LoadError> {
    let mut seen = HashSet::new();
    for run in &scenario.runs {
        if !seen.insert(run.id.as_str()) {
            return Err(LoadError::DuplicateRun(run.id.clone()));
        }
        run.parameters.validate().map_err(|source| LoadError::InvalidRun {
            id: run.id.clone(),
            source,
        })?;
    }
    Ok(())
}

/// シナリオをリーダから読み込む
pub fn read_scenario<R: Read>(reader: R, path: &str) -> Result<Scenario, LoadError> {
    let scenario: Scenario = parse_yaml(reader, path)?;
    validate_scenario(&scenario)?;
    Ok(scenario)
}

/// シナリオの読み込み
pub fn load_scenario(path: &str) -> Result<Scenario, LoadError> {
    read_scenario(open(path)?, path)
}
