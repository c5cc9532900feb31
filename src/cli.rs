//! Command-line argument parsing for time-window

/// Parse command line arguments
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Args {
    /// RFC 3339 instant to evaluate instead of now
    pub at: Option<String>,
    pub validate: bool,
    pub help: bool,
    /// Set when an option is missing its value
    pub error: Option<String>,
}

pub fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    parse_args_from(&args)
}

/// Parse an explicit argv (first element is the program name)
pub fn parse_args_from(args: &[String]) -> Args {
    let mut result = Args::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--at" => {
                if i + 1 < args.len() {
                    i += 1;
                    result.at = Some(args[i].clone());
                } else {
                    result.error = Some("--at requires an RFC 3339 timestamp".to_string());
                }
            }
            "--validate" => result.validate = true,
            "--help" | "-h" => result.help = true,
            _ => {}
        }
        i += 1;
    }

    result
}

pub fn print_help() {
    println!("time-window - daily time window check\n");
    println!("USAGE:");
    println!("    time-window [OPTIONS]\n");
    println!("OPTIONS:");
    println!("    --at INSTANT    Evaluate an RFC 3339 instant (default: now, UTC)");
    println!("    --validate      Validate configuration and exit");
    println!("    --help, -h      Show this help message\n");
    println!("ENVIRONMENT:");
    println!("    WINDOW_START    Start of the window, e.g. \"2:00 AM -0600\"");
    println!("    WINDOW_STOP     End of the window (exclusive), e.g. \"6:00 AM -0600\"");
    println!("    WINDOW_DAYS     Optional comma-separated days, e.g. \"Mon,Tue\"");
    println!("    WINDOW_LOCATION Optional IANA location days are read in, e.g. \"America/Denver\"");
    println!("                    (default: the offset of WINDOW_START)\n");
    println!("EXIT STATUS:");
    println!("    0 when inside the window, 1 when outside or on error");
}
