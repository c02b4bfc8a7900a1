use serde::{Deserialize, Serialize};

use crate::error::{ChartStyleError, ChartStyleResult};

use super::ChartConfiguration;

pub const CHART_CONFIGURATION_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfigurationJsonContractV1 {
    pub schema_version: u32,
    pub configuration: ChartConfiguration,
}

impl ChartConfiguration {
    pub fn to_json_pretty(&self) -> ChartStyleResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartStyleError::InvalidData(format!("failed to serialize configuration json: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartStyleResult<String> {
        let payload = ChartConfigurationJsonContractV1 {
            schema_version: CHART_CONFIGURATION_JSON_SCHEMA_V1,
            configuration: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartStyleError::InvalidData(format!(
                "failed to serialize configuration contract v1: {e}"
            ))
        })
    }

    /// Accepts both a bare configuration and a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartStyleResult<Self> {
        if let Ok(configuration) = serde_json::from_str::<ChartConfiguration>(input) {
            return Ok(configuration);
        }
        let payload: ChartConfigurationJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                ChartStyleError::InvalidData(format!(
                    "failed to parse configuration json payload: {e}"
                ))
            })?;
        if payload.schema_version != CHART_CONFIGURATION_JSON_SCHEMA_V1 {
            return Err(ChartStyleError::InvalidData(format!(
                "unsupported configuration schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.configuration)
    }
}
