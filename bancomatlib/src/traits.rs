//! Трэйты пакетного ввода/вывода на основе std::io::{BufRead, Write}.

use crate::{error::Result, model::Payout};
use std::io::{BufRead, Write};

/// Читает пачку запросов на выдачу как есть, без разбора сумм.
pub trait ReadFormat {
    fn read<R: BufRead>(r: R) -> Result<Vec<String>>;
}

pub trait WriteFormat {
    fn write<W: Write>(w: W, payouts: &[Payout]) -> Result<()>;
}

pub trait Format: ReadFormat + WriteFormat {}
impl<T: ReadFormat + WriteFormat> Format for T {}
