mod parser;
mod prompt;

pub use parser::parse_roster;
pub use prompt::prompt_roster;
