//! Текст: по запросу на строку; отчёт в виде классической консольной трассы
//! `120$ = 100*1 + 10*2.`

use crate::{error::Result, model::Payout};
use std::io::{BufRead, Write};

pub struct Text;

impl crate::traits::ReadFormat for Text {
    fn read<R: BufRead>(r: R) -> Result<Vec<String>> {
        let mut out = Vec::new();
        for line in r.lines() {
            let line = line?;
            let line = line.trim();
            if !line.is_empty() {
                out.push(line.to_string());
            }
        }
        Ok(out)
    }
}

impl crate::traits::WriteFormat for Text {
    fn write<W: Write>(mut w: W, payouts: &[Payout]) -> Result<()> {
        for p in payouts {
            writeln!(w, "{}", render(p))?;
        }
        Ok(())
    }
}

/// Одна строка трассы для одного `Payout`.
pub fn render(p: &Payout) -> String {
    let parts: Vec<String> = p.notes.iter().map(|n| format!("{}*{}", n.value, n.count)).collect();
    let mut s = p.requested.to_string();
    if !parts.is_empty() {
        s.push_str(" = ");
        s.push_str(&parts.join(" + "));
    }
    if p.is_success() {
        s.push('.');
    } else {
        s.push_str(" невалидная сумма =(.");
    }
    s
}
