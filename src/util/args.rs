use std::path::PathBuf;
use structopt::StructOpt;

#[derive(StructOpt)]
pub struct Args {
    /// Source file. Reads from the prompt when omitted.
    #[structopt(name = "FILE_NAME")]
    pub file_name: Option<PathBuf>,

    /// Print the token stream.
    #[structopt(long)]
    pub tokens: bool,

    /// Print the syntax tree.
    #[structopt(long)]
    pub ast: bool,

    /// Print the final symbol table.
    #[structopt(long)]
    pub symbols: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self::new()
    }
}

impl Args {
    pub fn new() -> Self {
        Self::from_args()
    }
}
