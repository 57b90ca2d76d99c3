use bancomatlib::{
    formats::text::Text,
    traits::{ReadFormat, WriteFormat},
    Dispenser,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Пример: суммы построчно из stdin -> трасса выдачи в stdout
    let requests = Text::read(std::io::BufReader::new(std::io::stdin()))?;
    let d = Dispenser::new();
    let payouts = requests.iter().map(|r| d.cash_out(r)).collect::<Result<Vec<_>, _>>()?;
    Text::write(std::io::stdout(), &payouts)?;
    Ok(())
}
