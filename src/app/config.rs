use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Read, Write},
    path::Path,
};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use super::swatch::ViewKind;
use crate::sorted_vec::Direction;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub order: Direction,
    /// Blank rows between two items of the stack.
    pub spacing: u16,
    pub initial_items: Vec<ViewKind>,
    /// How many swatches may be built over the whole session.
    pub swatch_budget: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            order: Direction::Ascending,
            spacing: 1,
            initial_items: ViewKind::ALL.to_vec(),
            swatch_budget: None,
        }
    }
}

pub fn read_config<R: Read>(reader: R) -> anyhow::Result<Config> {
    Ok(serde_json::from_reader(BufReader::new(reader))?)
}

pub fn load_config<P: AsRef<Path>>(path: P) -> anyhow::Result<Config> {
    let path = path.as_ref();
    match File::open(path) {
        Ok(f) => read_config(f).with_context(|| format!("parsing {}", path.display())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Config::default()),
        Err(e) => Err(e).with_context(|| format!("opening {}", path.display())),
    }
}

pub fn store_config<W>(writer: W, config: &Config) -> io::Result<()>
where
    W: Write,
{
    let mut file = BufWriter::new(writer);
    serde_json::to_writer_pretty(&mut file, config)?;
    writeln!(file)?;
    file.flush()
}
