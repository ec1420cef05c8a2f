//! Fixed-rate oracle implementation for testing and development.
//!
//! Serves conversions from a static rate table configured per token. Rates
//! are expressed in basis points of payment-asset units per reference unit,
//! so a rate of 20000 bps means two payment units per reference unit. A
//! token without a configured rate is a hard failure, never a default rate.

use crate::{PriceError, PriceOracle, PriceOracleFactory, PriceOracleRegistry};
use alloy_primitives::{Address, U256};
use async_trait::async_trait;
use paygate_types::{
    with_0x_prefix, ConfigSchema, Field, FieldType, ImplementationRegistry, Schema,
    ValidationError, BPS_DENOMINATOR,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// Configuration for the fixed-rate oracle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedRateOracleConfig {
    /// Asset identifier of the platform's reference currency.
    pub reference_currency: String,
    /// Native-asset units per reference unit, in bps.
    pub native_rate_bps: u64,
    /// Token rates (token address -> token units per reference unit, bps).
    #[serde(default)]
    pub token_rates_bps: HashMap<String, u64>,
}

/// Configuration schema for the fixed-rate oracle.
pub struct FixedRateOracleSchema;

impl ConfigSchema for FixedRateOracleSchema {
    fn validate(&self, config: &toml::Value) -> Result<(), ValidationError> {
        let schema = Schema::new(
            vec![
                Field::new("reference_currency", FieldType::String).with_validator(|value| {
                    let s = value.as_str().unwrap_or_default();
                    Address::from_str(s)
                        .map(|_| ())
                        .map_err(|e| format!("invalid address: {}", e))
                }),
                Field::new(
                    "native_rate_bps",
                    FieldType::Integer {
                        min: Some(1),
                        max: None,
                    },
                ),
            ],
            vec![Field::new(
                "token_rates_bps",
                FieldType::Table(Schema::new(vec![], vec![])),
            )],
        );
        schema.validate(config)
    }
}

/// Fixed-rate oracle backed by a static rate table.
pub struct FixedRateOracle {
    reference_currency: Address,
    native_rate_bps: u64,
    token_rates_bps: HashMap<Address, u64>,
}

impl FixedRateOracle {
    /// Creates a new fixed-rate oracle from the given configuration.
    pub fn new(config: FixedRateOracleConfig) -> Result<Self, PriceError> {
        let reference_currency = Address::from_str(&config.reference_currency).map_err(|e| {
            PriceError::Configuration(format!("Invalid reference currency address: {}", e))
        })?;

        let mut token_rates_bps = HashMap::new();
        for (raw_address, rate) in &config.token_rates_bps {
            let token = Address::from_str(&with_0x_prefix(raw_address)).map_err(|e| {
                PriceError::Configuration(format!("Invalid token address {}: {}", raw_address, e))
            })?;
            if *rate == 0 {
                return Err(PriceError::Configuration(format!(
                    "Zero rate configured for token {}",
                    raw_address
                )));
            }
            token_rates_bps.insert(token, *rate);
        }

        Ok(Self {
            reference_currency,
            native_rate_bps: config.native_rate_bps,
            token_rates_bps,
        })
    }

    fn convert(reference_amount: U256, rate_bps: u64) -> U256 {
        reference_amount * U256::from(rate_bps) / U256::from(BPS_DENOMINATOR)
    }
}

#[async_trait]
impl PriceOracle for FixedRateOracle {
    fn config_schema(&self) -> Box<dyn ConfigSchema> {
        Box::new(FixedRateOracleSchema)
    }

    async fn native_amount_for(&self, reference_amount: U256) -> Result<U256, PriceError> {
        Ok(Self::convert(reference_amount, self.native_rate_bps))
    }

    fn reference_currency(&self) -> Address {
        self.reference_currency
    }

    async fn token_amount_for(
        &self,
        token: Address,
        reference_amount: U256,
        _hint: Option<U256>,
    ) -> Result<U256, PriceError> {
        let rate = self.token_rates_bps.get(&token).ok_or_else(|| {
            PriceError::OracleUnavailable(format!("no rate configured for token {}", token))
        })?;
        Ok(Self::convert(reference_amount, *rate))
    }
}

/// Registry for the fixed-rate oracle implementation.
pub struct Registry;

impl ImplementationRegistry for Registry {
    const NAME: &'static str = "fixed_rate";
    type Factory = PriceOracleFactory;

    fn factory() -> Self::Factory {
        |config: &toml::Value| -> Result<Box<dyn PriceOracle>, PriceError> {
            FixedRateOracleSchema
                .validate(config)
                .map_err(|e| PriceError::Configuration(e.to_string()))?;

            let oracle_config: FixedRateOracleConfig =
                config.clone().try_into().map_err(|e| {
                    PriceError::Configuration(format!("Invalid fixed_rate config: {}", e))
                })?;

            Ok(Box::new(FixedRateOracle::new(oracle_config)?))
        }
    }
}

impl PriceOracleRegistry for Registry {}
