//! # Fee Suggest
//!
//! Library for EIP-1559 gas fee suggestion and inclusion estimation.
//!
//! The engine turns a window of recent fee history into low/medium/high fee
//! tiers, each with a predicted block/time bracket until inclusion. Fee
//! composition rules differ per chain class (classic L1s, Arbitrum-style and
//! Optimism-style rollups, and Linea-style rollups which delegate to an
//! on-chain gas oracle).
//!
//! The engine is a pure computation over a caller-supplied snapshot of chain
//! data: it does not submit transactions, does not hold keys, and keeps no
//! state between calls.

pub mod chain_data;
pub mod config;
pub mod congestion;
pub mod constants;
pub mod engine;
pub mod error;
pub mod gas_price;
pub mod inclusion;
pub mod percentile;
pub mod priority_fee;
pub mod strategy;
pub mod types;

pub use chain_data::{ChainData, LineaGasEstimate, RpcChainData};
pub use config::{ChainClass, ChainParameters, SuggestionsConfig};
pub use engine::SuggestionEngine;
pub use error::SuggestError;
pub use types::{Fee, FeeSuggestions, GasPrice, Inclusion, TxSuggestions};
