use clap::Parser;

use crate::config::DEFAULT_CALORIE_LIMIT;

#[derive(Parser, Debug)]
#[command(author, version, about = "Interactive recipe creator", long_about = None)]
pub struct Cli {
    /// Warn when a viewed recipe's total calories exceed this value
    #[arg(long, default_value_t = DEFAULT_CALORIE_LIMIT, allow_negative_numbers = true)]
    pub calorie_limit: i64,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
