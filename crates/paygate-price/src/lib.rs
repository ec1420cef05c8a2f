//! Price conversion module for the paygate settlement core.
//!
//! This module converts reference-currency amounts into the payer's chosen
//! settlement asset through a price oracle, with a bounded slippage margin
//! on top. It follows the same trait-based pattern as the other settlement
//! components: the oracle is a pluggable implementation, and the conversion
//! service treats every oracle failure as a hard failure. Substituting a
//! guessed price for a failed lookup is a direct loss-of-funds risk, so no
//! fallback rate exists anywhere in this module.

use alloy_primitives::{Address, U256};
use async_trait::async_trait;
use paygate_types::{
    ConfigSchema, ImplementationRegistry, PaymentRequest, BPS_DENOMINATOR, NATIVE_ASSET,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Re-export implementations
pub mod implementations {
    pub mod fixed_rate;
}

/// Errors that can occur during price conversion.
#[derive(Debug, Error)]
pub enum PriceError {
    /// Error that occurs when the oracle cannot produce a price.
    #[error("Oracle unavailable: {0}")]
    OracleUnavailable(String),
    /// Error that occurs when a slippage bound exceeds the bps denominator.
    #[error("Invalid slippage: {0} bps exceeds 10000")]
    InvalidSlippage(u16),
    /// Error that occurs when configuration is invalid.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Trait defining the interface for price oracle implementations.
///
/// This trait must be implemented by any price source that wants to
/// integrate with the settlement core. Implementations are read-only from
/// the core's perspective; the quoted value may change between the quote
/// and execution, which is exactly what the slippage margin and intent
/// deadlines absorb.
#[async_trait]
pub trait PriceOracle: Send + Sync {
    /// Returns the configuration schema for this oracle implementation.
    ///
    /// The schema is used to validate TOML configuration before the
    /// implementation is constructed.
    fn config_schema(&self) -> Box<dyn ConfigSchema>;

    /// Native-asset equivalent of `reference_amount`.
    async fn native_amount_for(&self, reference_amount: U256) -> Result<U256, PriceError>;

    /// Asset identifier of the platform's reference currency.
    fn reference_currency(&self) -> Address;

    /// `token` equivalent of `reference_amount`.
    ///
    /// `hint` optionally selects a conversion route for oracles that
    /// support more than one; implementations without routes ignore it.
    async fn token_amount_for(
        &self,
        token: Address,
        reference_amount: U256,
        hint: Option<U256>,
    ) -> Result<U256, PriceError>;
}

/// Type alias for price oracle factory functions.
///
/// This is the function signature that all oracle implementations must
/// provide to create instances of their oracle interface.
pub type PriceOracleFactory = fn(&toml::Value) -> Result<Box<dyn PriceOracle>, PriceError>;

/// Registry trait for price oracle implementations.
///
/// This trait extends the base ImplementationRegistry to specify that
/// oracle implementations must provide a PriceOracleFactory.
pub trait PriceOracleRegistry: ImplementationRegistry<Factory = PriceOracleFactory> {}

/// Get all registered price oracle implementations.
///
/// Returns a vector of (name, factory) tuples for all available oracle
/// implementations.
pub fn get_all_implementations() -> Vec<(&'static str, PriceOracleFactory)> {
    use implementations::fixed_rate;

    vec![(fixed_rate::Registry::NAME, fixed_rate::Registry::factory())]
}

/// Inflates `amount` by the slippage margin: `amount + amount * bps / 10000`.
///
/// Slippage only ever inflates. It is the payer's maximum acceptable
/// overpayment protecting the payee from adverse price movement between
/// quote and execution, never a discount. A zero bound is the identity.
pub fn apply_slippage(amount: U256, max_slippage_bps: u16) -> Result<U256, PriceError> {
    if u64::from(max_slippage_bps) > BPS_DENOMINATOR {
        return Err(PriceError::InvalidSlippage(max_slippage_bps));
    }

    let margin = amount * U256::from(max_slippage_bps) / U256::from(BPS_DENOMINATOR);
    Ok(amount + margin)
}

/// Service converting reference-currency amounts into payment assets.
///
/// Wraps a single oracle implementation and applies the slippage margin to
/// every conversion, including the 1:1 reference-currency path where it
/// absorbs rounding and gas variance.
pub struct ConversionService {
    oracle: Arc<dyn PriceOracle>,
}

impl ConversionService {
    /// Creates a new ConversionService backed by the given oracle.
    pub fn new(oracle: Arc<dyn PriceOracle>) -> Self {
        Self { oracle }
    }

    /// Amount of `payment_token` the payer must provide to cover
    /// `reference_amount`, slippage margin included.
    ///
    /// `payment_token` set to `NATIVE_ASSET` selects the native-asset
    /// quote; the oracle's own reference currency converts 1:1. Any oracle
    /// failure aborts the conversion with
    /// [`PriceError::OracleUnavailable`].
    pub async fn expected_payment_amount(
        &self,
        payment_token: Address,
        reference_amount: U256,
        max_slippage_bps: u16,
    ) -> Result<U256, PriceError> {
        if u64::from(max_slippage_bps) > BPS_DENOMINATOR {
            return Err(PriceError::InvalidSlippage(max_slippage_bps));
        }

        let converted = if payment_token == NATIVE_ASSET {
            self.oracle
                .native_amount_for(reference_amount)
                .await
                .map_err(|e| {
                    warn!("native asset price lookup failed: {}", e);
                    e
                })?
        } else if payment_token == self.oracle.reference_currency() {
            reference_amount
        } else {
            self.oracle
                .token_amount_for(payment_token, reference_amount, None)
                .await
                .map_err(|e| {
                    warn!(token = %payment_token, "token price lookup failed: {}", e);
                    e
                })?
        };

        let expected = apply_slippage(converted, max_slippage_bps)?;
        debug!(
            token = %payment_token,
            %converted,
            %expected,
            "price conversion complete"
        );
        Ok(expected)
    }

    /// Convenience over [`Self::expected_payment_amount`] taking the asset
    /// and slippage bound from a payment request.
    pub async fn expected_for_request(
        &self,
        request: &PaymentRequest,
        reference_amount: U256,
    ) -> Result<U256, PriceError> {
        self.expected_payment_amount(
            request.payment_token,
            reference_amount,
            request.max_slippage_bps,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    const REFERENCE: Address = address!("e7f1725e7734ce288f8367e1bb143e90bb3f0512");
    const OTHER_TOKEN: Address = address!("5fbdb2315678afecb367f032d93f642f64180aa3");

    /// Oracle stub quoting 2 native units and 3 token units per reference
    /// unit, or failing on demand.
    struct StubOracle {
        failing: bool,
    }

    #[async_trait]
    impl PriceOracle for StubOracle {
        fn config_schema(&self) -> Box<dyn ConfigSchema> {
            unimplemented!("not exercised by these tests")
        }

        async fn native_amount_for(&self, reference_amount: U256) -> Result<U256, PriceError> {
            if self.failing {
                return Err(PriceError::OracleUnavailable("feed offline".to_string()));
            }
            Ok(reference_amount * U256::from(2u64))
        }

        fn reference_currency(&self) -> Address {
            REFERENCE
        }

        async fn token_amount_for(
            &self,
            _token: Address,
            reference_amount: U256,
            _hint: Option<U256>,
        ) -> Result<U256, PriceError> {
            if self.failing {
                return Err(PriceError::OracleUnavailable("feed offline".to_string()));
            }
            Ok(reference_amount * U256::from(3u64))
        }
    }

    fn service(failing: bool) -> ConversionService {
        ConversionService::new(Arc::new(StubOracle { failing }))
    }

    #[test]
    fn test_apply_slippage() {
        assert_eq!(
            apply_slippage(U256::from(2_000_000u64), 100).unwrap(),
            U256::from(2_020_000u64)
        );
        // Zero bound is the identity
        assert_eq!(
            apply_slippage(U256::from(123_456u64), 0).unwrap(),
            U256::from(123_456u64)
        );
        // Full bound doubles
        assert_eq!(
            apply_slippage(U256::from(100u64), 10_000).unwrap(),
            U256::from(200u64)
        );
    }

    #[test]
    fn test_slippage_never_deflates() {
        for bps in [0u16, 1, 99, 250, 9_999, 10_000] {
            for amount in [0u64, 1, 7, 1_000_000] {
                let amount = U256::from(amount);
                assert!(apply_slippage(amount, bps).unwrap() >= amount);
            }
        }
    }

    #[test]
    fn test_slippage_out_of_range() {
        assert!(matches!(
            apply_slippage(U256::from(1u64), 10_001),
            Err(PriceError::InvalidSlippage(10_001))
        ));
    }

    #[tokio::test]
    async fn test_native_asset_conversion() {
        let amount = service(false)
            .expected_payment_amount(NATIVE_ASSET, U256::from(1_000_000u64), 100)
            .await
            .unwrap();
        // 2x quote plus 1% slippage
        assert_eq!(amount, U256::from(2_020_000u64));
    }

    #[tokio::test]
    async fn test_reference_currency_skips_conversion() {
        let amount = service(false)
            .expected_payment_amount(REFERENCE, U256::from(1_000_000u64), 50)
            .await
            .unwrap();
        // 1:1, slippage still applied
        assert_eq!(amount, U256::from(1_005_000u64));
    }

    #[tokio::test]
    async fn test_token_conversion() {
        let amount = service(false)
            .expected_payment_amount(OTHER_TOKEN, U256::from(1_000u64), 0)
            .await
            .unwrap();
        assert_eq!(amount, U256::from(3_000u64));
    }

    #[tokio::test]
    async fn test_expected_for_request() {
        let request = PaymentRequest {
            payment_type: paygate_types::PaymentType::PayPerView,
            creator: OTHER_TOKEN,
            content_id: 1,
            payment_token: NATIVE_ASSET,
            max_slippage_bps: 100,
            deadline: 1_700_000_000,
        };

        let amount = service(false)
            .expected_for_request(&request, U256::from(1_000_000u64))
            .await
            .unwrap();
        assert_eq!(amount, U256::from(2_020_000u64));
    }

    #[tokio::test]
    async fn test_oracle_failure_aborts() {
        let err = service(true)
            .expected_payment_amount(NATIVE_ASSET, U256::from(1_000u64), 100)
            .await
            .unwrap_err();
        assert!(matches!(err, PriceError::OracleUnavailable(_)));

        let err = service(true)
            .expected_payment_amount(OTHER_TOKEN, U256::from(1_000u64), 100)
            .await
            .unwrap_err();
        assert!(matches!(err, PriceError::OracleUnavailable(_)));
    }

    #[tokio::test]
    async fn test_slippage_checked_before_oracle() {
        // An out-of-range bound is rejected even when the oracle is down
        let err = service(true)
            .expected_payment_amount(NATIVE_ASSET, U256::from(1_000u64), 10_001)
            .await
            .unwrap_err();
        assert!(matches!(err, PriceError::InvalidSlippage(10_001)));
    }
}
