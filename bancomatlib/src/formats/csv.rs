//! Простой CSV. Запросы: колонка `amount`, пробелы по краям полей отбрасываются.
//! Отчёт: request,status,value,currency,count,remainder — строка на номинал.

use crate::{error::Result, model::Payout};
use csv::{ReaderBuilder, Trim, WriterBuilder};
use std::io::{BufRead, Write};

#[derive(serde::Deserialize)]
struct CsvRequest {
    amount: String,
}

#[derive(serde::Serialize)]
struct CsvOutRow<'a> {
    request: String,
    status: &'a str,
    value: Option<u64>,
    currency: Option<&'a str>,
    count: Option<u64>,
    remainder: u64,
}

pub struct Csv;

impl crate::traits::ReadFormat for Csv {
    fn read<R: BufRead>(r: R) -> Result<Vec<String>> {
        let mut rdr = ReaderBuilder::new().flexible(true).trim(Trim::Fields).from_reader(r);
        let mut out = Vec::new();
        for rec in rdr.deserialize::<CsvRequest>() {
            out.push(rec?.amount);
        }
        Ok(out)
    }
}

impl crate::traits::WriteFormat for Csv {
    fn write<W: Write>(mut w: W, payouts: &[Payout]) -> Result<()> {
        let mut wrt = WriterBuilder::new().from_writer(&mut w);

        for p in payouts {
            let row = |value, currency, count| CsvOutRow {
                request: p.requested.to_string(),
                status: p.outcome.as_str(),
                value,
                currency,
                count,
                remainder: p.remainder(),
            };
            if p.notes.is_empty() {
                wrt.serialize(row(None, None, None))?;
            }
            for n in &p.notes {
                wrt.serialize(row(Some(n.value), Some(n.currency.code()), Some(n.count)))?;
            }
        }
        wrt.flush()?;
        Ok(())
    }
}
