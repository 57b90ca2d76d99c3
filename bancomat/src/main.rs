use bancomatlib::{
    error::{BancomatError, Result},
    formats::{csv::Csv, text::{self, Text}, xml::SimpleXml},
    traits::{ReadFormat, WriteFormat},
    Dispenser,
};
use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::info;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::process::ExitCode;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Fmt {
    Text,
    Csv,
    Xml,
}

#[derive(Parser, Debug)]
#[command(name="bancomat", version, about="Банкомат: проверка купюр и выдача сумм")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Проверить надписи на купюрах
    Validate {
        #[arg(required = true)]
        labels: Vec<String>,
    },

    /// Выдать суммы, например `120$` или `"30 рублей"`
    CashOut {
        #[arg(required = true)]
        amounts: Vec<String>,
    },

    /// Пакетная выдача из файла
    Batch {
        /// Входной файл (по умолчанию stdin)
        #[arg(short='i', long="input")]
        input: Option<String>,

        /// Выходной файл (по умолчанию stdout)
        #[arg(short='o', long="output")]
        output: Option<String>,

        /// Формат входа
        #[arg(long="in-format", value_enum, default_value = "text")]
        in_format: Fmt,

        /// Формат выхода
        #[arg(long="out-format", value_enum, default_value = "text")]
        out_format: Fmt,

        /// Пропускать некорректные суммы вместо ошибки
        #[arg(long="skip-invalid")]
        skip_invalid: bool,
    },

    /// Показать номиналы в порядке цепочки
    Denominations,
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(Env::default()
        .default_filter_or("warn")
    ).init();

    let cli = Cli::parse();
    let dispenser = Dispenser::new();

    match cli.command {
        Command::Validate { labels } => {
            let mut all_valid = true;
            for label in &labels {
                let ok = dispenser.validate(label);
                all_valid &= ok;
                println!("{label}: {ok}");
            }
            Ok(exit_code(all_valid))
        }
        Command::CashOut { amounts } => {
            let mut all_paid = true;
            for amount in &amounts {
                let payout = dispenser.cash_out(amount)?;
                all_paid &= payout.is_success();
                println!("{}", text::render(&payout));
            }
            Ok(exit_code(all_paid))
        }
        Command::Batch { input, output, in_format, out_format, skip_invalid } => {
            batch(&dispenser, input, output, in_format, out_format, skip_invalid)
        }
        Command::Denominations => {
            for rule in dispenser.chain().rules() {
                println!("{rule}");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn batch(
    dispenser: &Dispenser,
    input: Option<String>,
    output: Option<String>,
    in_format: Fmt,
    out_format: Fmt,
    skip_invalid: bool,
) -> Result<ExitCode> {
    // reader
    let reader: Box<dyn io::Read> = match input {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(io::stdin()),
    };
    let br = BufReader::new(reader);

    let requests = match in_format {
        Fmt::Text => Text::read(br),
        Fmt::Csv => Csv::read(br),
        Fmt::Xml => SimpleXml::read(br),
    }?;
    info!("{} requests read", requests.len());

    let payouts = dispenser.cash_out_all(&requests, skip_invalid)?;
    let all_paid = payouts.iter().all(|p| p.is_success());

    // writer
    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    match out_format {
        Fmt::Text => Text::write(&mut writer, &payouts),
        Fmt::Csv => Csv::write(&mut writer, &payouts),
        Fmt::Xml => SimpleXml::write(&mut writer, &payouts),
    }?;

    writer.flush().map_err(BancomatError::from)?;
    Ok(exit_code(all_paid))
}

fn exit_code(ok: bool) -> ExitCode {
    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
