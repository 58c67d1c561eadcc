use super::{PricingRule, PricingRuleRequest, PricingRuleResult};

/// A rule assembled from two closures instead of a dedicated type.
///
/// Useful for one-off promotions and tests.
pub struct CustomRule<A, C> {
    name: String,
    applies: A,
    calculate: C,
}

impl<A, C> CustomRule<A, C>
where
    A: Fn(&PricingRuleRequest<'_>) -> bool + Send + Sync,
    C: Fn(&PricingRuleRequest<'_>) -> PricingRuleResult + Send + Sync,
{
    pub fn new(name: impl Into<String>, applies: A, calculate: C) -> Self {
        Self {
            name: name.into(),
            applies,
            calculate,
        }
    }
}

impl<A, C> PricingRule for CustomRule<A, C>
where
    A: Fn(&PricingRuleRequest<'_>) -> bool + Send + Sync,
    C: Fn(&PricingRuleRequest<'_>) -> PricingRuleResult + Send + Sync,
{
    fn applies_to(&self, request: &PricingRuleRequest<'_>) -> bool {
        (self.applies)(request)
    }

    fn calculate_price(&self, request: &PricingRuleRequest<'_>) -> PricingRuleResult {
        (self.calculate)(request)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
