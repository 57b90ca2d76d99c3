//! Фасад банкомата: владеет цепочкой и разбирает строку запроса один раз на входе.

use crate::{
    chain::Chain,
    error::{BancomatError, Result},
    model::{Amount, Payout},
};
use log::warn;

#[derive(Debug, Clone, Default)]
pub struct Dispenser {
    chain: Chain,
}

impl Dispenser {
    pub fn new() -> Self {
        Dispenser { chain: Chain::standard() }
    }

    pub fn with_chain(chain: Chain) -> Self {
        Dispenser { chain }
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn validate(&self, label: &str) -> bool {
        self.chain.validate(label)
    }

    /// `Err(InvalidAmountFormat)` только для некорректной строки; невозможная
    /// выдача и чужая валюта возвращаются как неуспешный `Payout`.
    pub fn cash_out(&self, amount: &str) -> Result<Payout> {
        let amount: Amount = amount.parse()?;
        Ok(self.chain.cash_out(&amount))
    }

    /// Пачка запросов. Некорректная сумма прерывает пачку, если не выставлен
    /// `skip_invalid`; тогда она пишется в лог и пропускается.
    pub fn cash_out_all<S: AsRef<str>>(&self, requests: &[S], skip_invalid: bool) -> Result<Vec<Payout>> {
        let mut payouts = Vec::with_capacity(requests.len());
        for r in requests {
            match self.cash_out(r.as_ref()) {
                Ok(p) => payouts.push(p),
                Err(e @ BancomatError::InvalidAmountFormat(_)) if skip_invalid => warn!("skipped: {e}"),
                Err(e) => return Err(e),
            }
        }
        Ok(payouts)
    }
}
