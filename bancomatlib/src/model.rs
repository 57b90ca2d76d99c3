//! Доменные модели: валюта, сумма запроса, номинал и результат выдачи.

use crate::error::{BancomatError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

// Без ведущих нулей: Display суммы совпадает с исходной строкой.
static AMOUNT_RE: LazyLock<std::result::Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^(?P<qty>0|[1-9][0-9]*)(?P<sfx>.*)$"));

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Currency {
    Dollar,
    Ruble,
    Euro,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Dollar, Currency::Ruble, Currency::Euro];

    /// Суффикс, которым валюта записывается после числа: `120$`, `30 рублей`.
    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Dollar => "$",
            Currency::Ruble => " рублей",
            Currency::Euro => "€",
        }
    }

    /// Код ISO 4217.
    pub fn code(self) -> &'static str {
        match self {
            Currency::Dollar => "USD",
            Currency::Ruble => "RUB",
            Currency::Euro => "EUR",
        }
    }

    pub fn from_symbol(s: &str) -> Option<Currency> {
        Currency::ALL.into_iter().find(|c| c.symbol() == s)
    }
}

/// Сумма запроса. `currency == None` для голого числа без суффикса (`"0"`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Amount {
    pub quantity: u64,
    pub currency: Option<Currency>,
}

impl Amount {
    pub fn new(quantity: u64, currency: Currency) -> Self {
        Amount { quantity, currency: Some(currency) }
    }

    pub fn is_zero(&self) -> bool {
        self.quantity == 0
    }
}

impl FromStr for Amount {
    type Err = BancomatError;

    fn from_str(s: &str) -> Result<Self> {
        let re = AMOUNT_RE.as_ref().map_err(|e| BancomatError::Regex(e.clone()))?;
        let invalid = || BancomatError::InvalidAmountFormat(s.to_string());

        let caps = re.captures(s).ok_or_else(invalid)?;
        let quantity: u64 = caps["qty"].parse().map_err(|_| invalid())?;
        let currency = match &caps["sfx"] {
            "" => None,
            sfx => Some(Currency::from_symbol(sfx).ok_or_else(invalid)?),
        };

        Ok(Amount { quantity, currency })
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.quantity, self.currency.map_or("", Currency::symbol))
    }
}

/// Один номинал в цепочке. После создания не меняется.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DenominationRule {
    pub value: u64,
    pub currency: Currency,
}

impl DenominationRule {
    pub const fn new(value: u64, currency: Currency) -> Self {
        DenominationRule { value, currency }
    }

    /// Надпись на купюре, с которой сравнивает `validate`.
    pub fn label(&self) -> String {
        format!("{}{}", self.value, self.currency.symbol())
    }
}

impl fmt::Display for DenominationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Сколько купюр одного номинала выдано.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dispensed {
    pub value: u64,
    pub currency: Currency,
    pub count: u64,
}

impl Dispensed {
    pub fn total(&self) -> u64 {
        self.value * self.count
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Outcome {
    /// Сумма разложена полностью.
    Dispensed,
    /// Валюта известна цепочке, но остаток не раскладывается.
    UnmatchedDenomination { remainder: u64 },
    /// Ни один номинал не подошёл по валюте.
    UnrecognizedCurrency,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Dispensed => "dispensed",
            Outcome::UnmatchedDenomination { .. } => "unmatched_denomination",
            Outcome::UnrecognizedCurrency => "unrecognized_currency",
        }
    }
}

/// Результат `cash_out`: запрошенная сумма, трасса выданных купюр по убыванию и итог.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Payout {
    pub requested: Amount,
    pub notes: Vec<Dispensed>,
    pub outcome: Outcome,
}

impl Payout {
    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Dispensed
    }

    /// Что осталось невыданным после прохода по цепочке.
    pub fn remainder(&self) -> u64 {
        match self.outcome {
            Outcome::Dispensed => 0,
            Outcome::UnmatchedDenomination { remainder } => remainder,
            Outcome::UnrecognizedCurrency => self.requested.quantity,
        }
    }
}
