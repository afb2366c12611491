use clap::Parser;

/// Ranks a list of ideas by asking which of two ideas you prefer, over and over.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) The ideas to add to the session. With the default text format, one idea per line,
    /// optionally followed by '; <cost>'.
    #[clap(short, long, value_parser)]
    pub input: Option<String>,

    /// (default text) The format of the input: 'text' or 'json'.
    #[clap(long, value_parser)]
    pub input_type: Option<String>,

    /// (file path, optional) A session file in JSON format. It is loaded if it exists, and the ratings are
    /// saved back into it at the end.
    #[clap(short, long, value_parser)]
    pub state: Option<String>,

    /// (number, optional) The maximum number of comparisons to ask for. By default, comparisons continue
    /// until 'q' is answered or the input ends.
    #[clap(short, long, value_parser)]
    pub rounds: Option<u32>,

    /// (file path, 'stdout' or empty) If specified, the ranking will be written in JSON format to the given
    /// location. Otherwise it is printed as a table.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard error.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
