//! Whole-home price estimator.
//!
//! Prices a consultation request from the room count and selected option
//! packages. The breakdown feeds the same quote payload as the planner.

#[cfg(test)]
#[path = "estimator_test.rs"]
mod estimator_test;

use serde::{Deserialize, Serialize};

/// Smallest configurable room count.
pub const MIN_ROOMS: u32 = 1;

/// Largest configurable room count.
pub const MAX_ROOMS: u32 = 10;

/// An optional package with its display label and price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionPricing {
    pub name: String,
    pub price: u64,
}

/// Pricing table for the estimator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimatorPricing {
    /// Flat price of the base system build-out.
    pub base_price: u64,
    /// Added per configured room.
    pub room_multiplier: u64,
    pub lighting: OptionPricing,
    pub heating: OptionPricing,
    pub voice: OptionPricing,
    pub security: OptionPricing,
}

impl EstimatorPricing {
    /// The site's standard pricing table.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            base_price: 250_000,
            room_multiplier: 120_000,
            lighting: OptionPricing { name: "지능형 조명 제어".to_string(), price: 80_000 },
            heating: OptionPricing { name: "각방 난방 제어".to_string(), price: 150_000 },
            voice: OptionPricing { name: "전 구역 음성 인식".to_string(), price: 190_000 },
            security: OptionPricing { name: "통합 보안 모니터링".to_string(), price: 220_000 },
        }
    }

    /// Price out a configuration. Out-of-range room counts are clamped to
    /// the supported range.
    #[must_use]
    pub fn estimate(&self, rooms: u32, options: QuoteOptions) -> Estimate {
        let rooms = rooms.clamp(MIN_ROOMS, MAX_ROOMS);
        let mut breakdown = vec![
            LineItem { item: "기본 시스템 구축".to_string(), price: self.base_price },
            LineItem { item: format!("구역별 구성 ({rooms}개)"), price: self.room_multiplier * u64::from(rooms) },
        ];
        for (enabled, option) in [
            (options.lighting, &self.lighting),
            (options.heating, &self.heating),
            (options.voice, &self.voice),
            (options.security, &self.security),
        ] {
            if enabled {
                breakdown.push(LineItem { item: option.name.clone(), price: option.price });
            }
        }
        let total = breakdown.iter().map(|l| l.price).sum();
        Estimate { rooms, options, breakdown, total }
    }
}

/// Which option packages the customer selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteOptions {
    pub lighting: bool,
    pub heating: bool,
    pub voice: bool,
    pub security: bool,
}

/// One row of an estimate or quote breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub item: String,
    pub price: u64,
}

/// A priced configuration: the ordered breakdown and its total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Estimate {
    pub rooms: u32,
    pub options: QuoteOptions,
    pub breakdown: Vec<LineItem>,
    pub total: u64,
}
