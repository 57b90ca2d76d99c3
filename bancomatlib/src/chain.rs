//! Цепочка номиналов: упорядоченный список правил и один проход курсором по нему.
//!
//! Каждое правило берёт из остатка столько своих купюр, сколько помещается, и
//! передаёт остаток следующему. В конце стоит общий «дефолтный» обработчик:
//! успех только при нулевом остатке.

use crate::{
    error::{BancomatError, Result},
    model::{Amount, Currency, DenominationRule, Dispensed, Outcome, Payout},
};
use log::{debug, trace};

const STANDARD: [DenominationRule; 5] = [
    DenominationRule::new(100, Currency::Dollar),
    DenominationRule::new(50, Currency::Dollar),
    DenominationRule::new(10, Currency::Dollar),
    DenominationRule::new(10, Currency::Ruble),
    DenominationRule::new(1, Currency::Ruble),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    rules: Vec<DenominationRule>,
}

impl Chain {
    /// Внутри одной валюты номиналы должны строго убывать, иначе жадная выдача
    /// пропустит крупные купюры.
    pub fn new(rules: Vec<DenominationRule>) -> Result<Self> {
        for (i, rule) in rules.iter().enumerate() {
            if rule.value == 0 {
                return Err(BancomatError::InvalidChain(format!("zero denomination {rule}")));
            }
            let earlier = rules[..i].iter().filter(|r| r.currency == rule.currency);
            if let Some(prev) = earlier.last() {
                if prev.value == rule.value {
                    return Err(BancomatError::InvalidChain(format!("duplicate denomination {rule}")));
                }
                if prev.value < rule.value {
                    return Err(BancomatError::InvalidChain(format!(
                        "{rule} must come before {prev}"
                    )));
                }
            }
        }
        Ok(Chain { rules })
    }

    /// 100$, 50$, 10$, 10 рублей, 1 рублей.
    pub fn standard() -> Self {
        Chain { rules: STANDARD.to_vec() }
    }

    pub fn rules(&self) -> &[DenominationRule] {
        &self.rules
    }

    /// Валюты, для которых в цепочке есть хотя бы один номинал, в порядке цепочки.
    pub fn currencies(&self) -> Vec<Currency> {
        let mut out = Vec::new();
        for r in &self.rules {
            if !out.contains(&r.currency) {
                out.push(r.currency);
            }
        }
        out
    }

    /// Точное совпадение надписи с одним из номиналов; дефолтный обработчик всегда отвечает `false`.
    pub fn validate(&self, label: &str) -> bool {
        let hit = self.rules.iter().find(|r| r.label() == label);
        trace!("validate {label:?}: {}", hit.map_or("no match".to_string(), |r| r.label()));
        hit.is_some()
    }

    pub fn cash_out(&self, amount: &Amount) -> Payout {
        let mut remainder = amount.quantity;
        let mut notes = Vec::new();
        let mut matched_currency = false;

        for rule in &self.rules {
            if amount.currency != Some(rule.currency) {
                continue;
            }
            matched_currency = true;

            let count = remainder / rule.value;
            if count > 0 {
                remainder -= count * rule.value;
                notes.push(Dispensed { value: rule.value, currency: rule.currency, count });
            }
            debug!("{amount}: {rule} x{count}, remainder {remainder}");
        }

        // дефолтный обработчик
        let outcome = if remainder == 0 {
            Outcome::Dispensed
        } else if matched_currency {
            Outcome::UnmatchedDenomination { remainder }
        } else {
            Outcome::UnrecognizedCurrency
        };
        debug!("{amount}: {}", outcome.as_str());

        Payout { requested: *amount, notes, outcome }
    }
}

impl Default for Chain {
    fn default() -> Self {
        Chain::standard()
    }
}
