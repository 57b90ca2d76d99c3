use bancomatlib::{formats::xml::SimpleXml, traits::{ReadFormat, WriteFormat}, Dispenser};
use std::io::Cursor;

#[test]
fn simple_xml_requests_to_report() {
    let input = "<Requests><amount>150$</amount><amount>125$</amount></Requests>";
    let requests = SimpleXml::read(Cursor::new(input)).expect("read simple xml");
    assert_eq!(requests, ["150$", "125$"]);

    let d = Dispenser::new();
    let payouts: Vec<_> = requests.iter().map(|r| d.cash_out(r).unwrap()).collect();

    let mut out = Vec::new();
    SimpleXml::write(&mut out, &payouts).expect("write simple xml");
    let out = String::from_utf8(out).unwrap();
    assert!(out.starts_with("<Report>"));
    assert!(out.contains("<request>150$</request><status>dispensed</status><remainder>0</remainder>"));
    assert!(out.contains("<note><value>50</value><currency>USD</currency><count>1</count></note>"));
    assert!(out.contains("<status>unmatched_denomination</status><remainder>5</remainder>"));
}
