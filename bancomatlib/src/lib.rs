//! bancomatlib — банкомат на цепочке номиналов: проверка купюр и жадная выдача суммы.

pub mod error;
pub mod model;
pub mod chain;
pub mod dispenser;
pub mod traits;

pub mod formats {
    pub mod text;
    pub mod csv;
    pub mod xml;
}

pub use chain::Chain;
pub use dispenser::Dispenser;
