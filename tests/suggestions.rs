//! End-to-end engine tests over a mock chain data source.

use alloy::{
    rpc::types::{FeeHistory, TransactionRequest},
    transports::{TransportErrorKind, TransportResult},
};
use async_trait::async_trait;
use fee_suggest::{
    ChainClass, ChainData, ChainParameters, Fee, LineaGasEstimate, SuggestError, SuggestionEngine,
    SuggestionsConfig,
};
use std::sync::Mutex;

/// Canned chain data with call recording.
#[derive(Debug, Default)]
struct MockChainData {
    history: FeeHistory,
    gas_limit: u64,
    linea: Option<LineaGasEstimate>,
    fail_transport: bool,
    /// Reward percentiles of every fee history fetch, in call order.
    percentile_calls: Mutex<Vec<Vec<f64>>>,
}

#[async_trait]
impl ChainData for MockChainData {
    async fn fetch_fee_history(
        &self,
        _block_count: u64,
        _last_block: Option<u64>,
        reward_percentiles: &[f64],
    ) -> TransportResult<FeeHistory> {
        if self.fail_transport {
            return Err(TransportErrorKind::custom_str("node unavailable"));
        }
        self.percentile_calls.lock().unwrap().push(reward_percentiles.to_vec());
        Ok(self.history.clone())
    }

    async fn estimate_gas_limit(&self, _call: &TransactionRequest) -> TransportResult<u64> {
        if self.fail_transport {
            return Err(TransportErrorKind::custom_str("node unavailable"));
        }
        Ok(self.gas_limit)
    }

    async fn estimate_linea_gas(
        &self,
        _call: &TransactionRequest,
    ) -> TransportResult<LineaGasEstimate> {
        self.linea.ok_or_else(|| TransportErrorKind::custom_str("linea_estimateGas unsupported"))
    }
}

/// The ten-block L1 scenario: four observed blocks plus the projected
/// next-block base fee.
fn l1_history() -> FeeHistory {
    FeeHistory {
        oldest_block: 100,
        base_fee_per_gas: vec![10, 11, 12, 13, 14],
        gas_used_ratio: vec![0.4, 0.6, 0.5, 0.7],
        reward: Some(vec![
            vec![10, 20, 30],
            vec![11, 21, 31],
            vec![12, 22, 32],
            vec![13, 23, 33],
        ]),
        ..Default::default()
    }
}

fn l1_params() -> ChainParameters {
    ChainParameters { chain_class: ChainClass::L1, network_block_time: 12.0 }
}

#[tokio::test]
async fn l1_suggestions_use_projected_base_fee_and_column_medians() {
    let source = MockChainData { history: l1_history(), ..Default::default() };
    let engine = SuggestionEngine::new(source);
    let config = SuggestionsConfig::for_chain_class(ChainClass::L1);

    let suggestions = engine.suggest_transaction(&l1_params(), &config, None).await.unwrap();

    // No call message, no gas estimate.
    assert_eq!(suggestions.gas_limit, 0);

    let fees = suggestions.fees;
    assert_eq!(fees.estimated_base_fee, 14);
    // Median of reward column 0 over [10, 11, 12, 13].
    assert_eq!(fees.low.max_priority_fee_per_gas, 11);
    assert_eq!(fees.priority_fee_lower_bound, 11);

    // Tier ordering holds for both fee fields.
    assert!(fees.low.max_priority_fee_per_gas <= fees.medium.max_priority_fee_per_gas);
    assert!(fees.medium.max_priority_fee_per_gas <= fees.high.max_priority_fee_per_gas);
    assert!(fees.low.max_fee_per_gas <= fees.medium.max_fee_per_gas);
    assert!(fees.medium.max_fee_per_gas <= fees.high.max_fee_per_gas);

    // Max fee always covers the priority fee.
    for fee in [fees.low, fees.medium, fees.high] {
        assert!(fee.max_fee_per_gas >= fee.max_priority_fee_per_gas);
    }

    assert!((0.0..=1.0).contains(&fees.congestion));
}

#[tokio::test]
async fn engine_requests_one_reward_column_per_tier() {
    let source = MockChainData { history: l1_history(), ..Default::default() };
    let engine = SuggestionEngine::new(source);
    let config = SuggestionsConfig::for_chain_class(ChainClass::L1);

    engine.suggest_transaction(&l1_params(), &config, None).await.unwrap();

    let calls = engine.source().percentile_calls.lock().unwrap().clone();
    assert_eq!(calls, vec![vec![25.0, 50.0, 75.0]]);
}

#[tokio::test]
async fn gas_limit_is_estimated_only_with_a_call_message() {
    let source =
        MockChainData { history: l1_history(), gas_limit: 53_000, ..Default::default() };
    let engine = SuggestionEngine::new(source);
    let config = SuggestionsConfig::for_chain_class(ChainClass::L1);

    let call = TransactionRequest::default();
    let with_call =
        engine.suggest_transaction(&l1_params(), &config, Some(&call)).await.unwrap();
    assert_eq!(with_call.gas_limit, 53_000);

    let without_call = engine.suggest_transaction(&l1_params(), &config, None).await.unwrap();
    assert_eq!(without_call.gas_limit, 0);
}

#[tokio::test]
async fn arb_and_op_share_the_rollup_path() {
    let config = SuggestionsConfig::for_chain_class(ChainClass::ArbStack);
    let mut results = Vec::new();
    for chain_class in [ChainClass::ArbStack, ChainClass::OpStack] {
        let source = MockChainData { history: l1_history(), ..Default::default() };
        let engine = SuggestionEngine::new(source);
        let params = ChainParameters { chain_class, network_block_time: 2.0 };
        results.push(engine.suggest_transaction(&params, &config, None).await.unwrap());
    }

    // Identical inputs, identical output: the two stacks use one formula,
    // and rollups report zero congestion.
    assert_eq!(results[0], results[1]);
    assert_eq!(results[0].fees.congestion, 0.0);
}

#[tokio::test]
async fn identical_inputs_yield_identical_results() {
    let source = MockChainData { history: l1_history(), ..Default::default() };
    let engine = SuggestionEngine::new(source);
    let config = SuggestionsConfig::for_chain_class(ChainClass::L1);

    let first = engine.suggest_transaction(&l1_params(), &config, None).await.unwrap();
    let second = engine.suggest_transaction(&l1_params(), &config, None).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn empty_fee_history_is_surfaced() {
    let source = MockChainData::default();
    let engine = SuggestionEngine::new(source);
    let config = SuggestionsConfig::for_chain_class(ChainClass::L1);

    let result = engine.suggest_transaction(&l1_params(), &config, None).await;
    assert!(matches!(result, Err(SuggestError::EmptyFeeHistory)));
}

#[tokio::test]
async fn transport_failures_propagate_unwrapped() {
    let source = MockChainData { fail_transport: true, ..Default::default() };
    let engine = SuggestionEngine::new(source);
    let config = SuggestionsConfig::for_chain_class(ChainClass::L1);

    let result = engine.suggest_transaction(&l1_params(), &config, None).await;
    assert!(matches!(result, Err(SuggestError::Transport(_))));
}

#[tokio::test]
async fn linea_tiers_come_from_the_oracle() {
    let source = MockChainData {
        history: FeeHistory {
            base_fee_per_gas: vec![7, 7, 7, 7, 7],
            gas_used_ratio: vec![0.5; 4],
            reward: Some(vec![vec![100]; 4]),
            ..Default::default()
        },
        linea: Some(LineaGasEstimate {
            base_fee_per_gas: 7,
            priority_fee_per_gas: 1_000,
            gas_limit: 21_000,
        }),
        ..Default::default()
    };
    let engine = SuggestionEngine::new(source);
    let params =
        ChainParameters { chain_class: ChainClass::LineaStack, network_block_time: 3.0 };
    let config = SuggestionsConfig::for_chain_class(ChainClass::LineaStack);

    let suggestions = engine.suggest_transaction(&params, &config, None).await.unwrap();

    // The oracle's gas limit wins over eth_estimateGas.
    assert_eq!(suggestions.gas_limit, 21_000);

    let fees = suggestions.fees;
    // Priority fee buffered by 15%, identical across tiers.
    let buffered = 1_150;
    assert_eq!(fees.low.max_priority_fee_per_gas, buffered);
    assert_eq!(fees.medium, fees.low);
    assert_eq!(fees.high, fees.low);
    // Max fee is 2 * baseFee + bufferedPriority.
    assert_eq!(fees.low.max_fee_per_gas, 2 * 7 + buffered);
    assert_eq!(fees.estimated_base_fee, 7);
    assert_eq!(fees.congestion, 0.0);

    // Fee history was fetched for inclusion only, with the medium
    // percentile as the single reward column.
    let calls = engine.source().percentile_calls.lock().unwrap().clone();
    assert_eq!(calls, vec![vec![50.0]]);
}

#[tokio::test]
async fn inclusion_can_be_rechecked_for_a_held_fee() {
    let history = FeeHistory {
        base_fee_per_gas: (100..=112).collect(),
        gas_used_ratio: vec![0.5; 12],
        reward: Some((1..=12).map(|tip| vec![tip]).collect()),
        ..Default::default()
    };
    let source = MockChainData { history, ..Default::default() };
    let engine = SuggestionEngine::new(source);
    let config = SuggestionsConfig::for_chain_class(ChainClass::L1);

    // A fee that clears every threshold lands in the next-block bracket.
    let generous = Fee { max_priority_fee_per_gas: 50, max_fee_per_gas: 500 };
    let inclusion = engine.estimate_inclusion(&l1_params(), &config, &generous).await.unwrap();
    assert_eq!((inclusion.min_blocks, inclusion.max_blocks), (1, 2));

    // A fee below every threshold gets the open-ended bracket.
    let stingy = Fee { max_priority_fee_per_gas: 0, max_fee_per_gas: 1 };
    let inclusion = engine.estimate_inclusion(&l1_params(), &config, &stingy).await.unwrap();
    assert_eq!((inclusion.min_blocks, inclusion.max_blocks), (6, 7));
    assert_eq!(inclusion.min_time.as_secs(), 72);

    // Raising the tip with the max fee held fixed never worsens the bracket.
    let mut last = (u32::MAX, u32::MAX);
    for tip in [0, 10, 20, 50] {
        let fee = Fee { max_priority_fee_per_gas: tip, max_fee_per_gas: 500 };
        let inclusion = engine.estimate_inclusion(&l1_params(), &config, &fee).await.unwrap();
        assert!((inclusion.min_blocks, inclusion.max_blocks) <= last);
        last = (inclusion.min_blocks, inclusion.max_blocks);
    }
}

#[tokio::test]
async fn inclusion_recheck_requires_fee_history() {
    let source = MockChainData::default();
    let engine = SuggestionEngine::new(source);
    let config = SuggestionsConfig::for_chain_class(ChainClass::L1);

    let fee = Fee { max_priority_fee_per_gas: 1, max_fee_per_gas: 10 };
    let result = engine.estimate_inclusion(&l1_params(), &config, &fee).await;
    assert!(matches!(result, Err(SuggestError::EmptyFeeHistory)));
}
