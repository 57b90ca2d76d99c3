//! Упрощённый XML: <Requests><amount/>...</Requests> на входе, <Report><payout/>...</Report> на выходе.

use crate::{error::{BancomatError, Result}, model::Payout};
use quick_xml::{de::from_reader, se::to_string};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};

#[derive(Deserialize, Debug)]
struct XmlRequests {
    #[serde(rename = "amount", default)]
    amounts: Vec<String>,
}

#[derive(Serialize, Debug)]
struct XmlNote {
    value: u64,
    currency: &'static str,
    count: u64,
}

#[derive(Serialize, Debug)]
struct XmlPayout {
    request: String,
    status: &'static str,
    remainder: u64,
    note: Vec<XmlNote>,
}

#[derive(Serialize, Debug)]
#[serde(rename = "Report")]
struct XmlReport {
    payout: Vec<XmlPayout>,
}

pub struct SimpleXml;

impl crate::traits::ReadFormat for SimpleXml {
    fn read<R: BufRead>(r: R) -> Result<Vec<String>> {
        let x: XmlRequests = from_reader(r).map_err(|e| BancomatError::Xml(format!("{e}")))?;
        Ok(x.amounts.into_iter().map(|a| a.trim().to_string()).collect())
    }
}

impl crate::traits::WriteFormat for SimpleXml {
    fn write<W: Write>(mut w: W, payouts: &[Payout]) -> Result<()> {
        let payout = payouts.iter().map(|p| XmlPayout {
            request: p.requested.to_string(),
            status: p.outcome.as_str(),
            remainder: p.remainder(),
            note: p.notes.iter().map(|n| XmlNote {
                value: n.value,
                currency: n.currency.code(),
                count: n.count,
            }).collect(),
        }).collect();

        let s = to_string(&XmlReport { payout }).map_err(|e| BancomatError::Xml(format!("{e}")))?;
        w.write_all(s.as_bytes())?;
        Ok(())
    }
}
