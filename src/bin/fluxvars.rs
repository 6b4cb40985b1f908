use fluxvars::{
    ast::VariableAssignment,
    format::{format_option_block, OPTION_NAME},
    Result,
};
use std::io::{self, Read};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "fluxvars",
    about = "Renders variable assignments as a Flux option block"
)]
struct Opt {
    /// Name of the emitted option record.
    #[structopt(long)]
    name: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let opt = Opt::from_args();

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    let variables: Vec<VariableAssignment> = serde_json::from_str(&input)?;
    log::debug!("read {} variable assignments", variables.len());

    let block = format_option_block(opt.name.as_deref().unwrap_or(OPTION_NAME), &variables)?;
    if !block.is_empty() {
        println!("{}", block);
    }
    Ok(())
}
