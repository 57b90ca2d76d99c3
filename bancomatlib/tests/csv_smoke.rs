use bancomatlib::{formats::csv::Csv, traits::{ReadFormat, WriteFormat}, Dispenser};
use std::io::Cursor;

#[test]
fn csv_requests_to_report() {
    let input = "amount\n120$\n7€\n";
    let requests = Csv::read(Cursor::new(input)).expect("read csv");
    assert_eq!(requests, ["120$", "7€"]);

    let d = Dispenser::new();
    let payouts: Vec<_> = requests.iter().map(|r| d.cash_out(r).unwrap()).collect();

    let mut out = Vec::new();
    Csv::write(&mut out, &payouts).expect("write csv");
    let out = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines, [
        "request,status,value,currency,count,remainder",
        "120$,dispensed,100,USD,1,0",
        "120$,dispensed,10,USD,2,0",
        "7€,unrecognized_currency,,,,7",
    ]);
}

#[test]
fn csv_trims_fields_like_text() {
    let requests = Csv::read(Cursor::new("amount\n 120$ \n  30 рублей\n")).expect("read csv");
    assert_eq!(requests, ["120$", "30 рублей"]);
    assert!(Dispenser::new().cash_out(&requests[0]).unwrap().is_success());
}
