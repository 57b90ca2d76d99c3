use std::io::Write;
use std::process::{Command, Output, Stdio};

fn bancomat(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_bancomat"))
        .args(args)
        .env("RUST_LOG", "warn")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn bancomat");
    child.stdin.take().unwrap().write_all(stdin.as_bytes()).unwrap();
    child.wait_with_output().expect("wait bancomat")
}

fn stdout(o: &Output) -> String {
    String::from_utf8(o.stdout.clone()).unwrap()
}

#[test]
fn validate_exit_status() {
    let ok = bancomat(&["validate", "100$", "10 рублей"], "");
    assert!(ok.status.success());
    assert_eq!(stdout(&ok), "100$: true\n10 рублей: true\n");

    let bad = bancomat(&["validate", "100$", "20$"], "");
    assert_eq!(bad.status.code(), Some(1));
    assert!(stdout(&bad).contains("20$: false"));
}

#[test]
fn cash_out_exit_status() {
    let ok = bancomat(&["cash-out", "120$", "30 рублей"], "");
    assert!(ok.status.success());
    assert_eq!(stdout(&ok), "120$ = 100*1 + 10*2.\n30 рублей = 10*3.\n");

    let failed = bancomat(&["cash-out", "120$", "125$"], "");
    assert_eq!(failed.status.code(), Some(1));
    assert!(stdout(&failed).contains("125$ = 100*1 + 10*2 невалидная сумма =(."));

    let malformed = bancomat(&["cash-out", "abc"], "");
    assert!(!malformed.status.success());
}

#[test]
fn batch_stops_on_malformed_request() {
    let o = bancomat(&["batch"], "120$\nabc\n30 рублей\n");
    assert!(!o.status.success());
    assert!(stdout(&o).is_empty());
    assert!(String::from_utf8_lossy(&o.stderr).contains("InvalidAmountFormat"));
}

#[test]
fn batch_skip_invalid_warns_and_continues() {
    let o = bancomat(&["batch", "--skip-invalid"], "120$\nabc\n30 рублей\n");
    assert!(o.status.success());
    assert_eq!(stdout(&o), "120$ = 100*1 + 10*2.\n30 рублей = 10*3.\n");
    let stderr = String::from_utf8_lossy(&o.stderr);
    assert!(stderr.contains("WARN") && stderr.contains("skipped"));
}

#[test]
fn batch_csv_report_fails_on_unpayable() {
    let o = bancomat(&["batch", "--in-format", "csv", "--out-format", "csv"], "amount\n 125$ \n");
    assert_eq!(o.status.code(), Some(1));
    assert!(stdout(&o).contains("125$,unmatched_denomination,100,USD,1,5"));
}
