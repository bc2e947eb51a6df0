use std::path::PathBuf;
use clap::Subcommand;
use crate::enums::output_format::OutputFormat;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Start the HTTP analysis service
    Serve {
        #[clap(long)]
        host: Option<String>,
        #[clap(short, long)]
        port: Option<u16>,
    },
    /// Analyze a Java source file ("-" reads stdin)
    Analyze {
        file: PathBuf,
        #[clap(long)]
        no_security: bool,
        #[clap(long)]
        no_performance: bool,
        #[clap(long)]
        no_style: bool,
        #[clap(long)]
        no_bugs: bool,
        /// Skip the remote model and run the heuristic analyzer only
        #[clap(long)]
        offline: bool,
        #[clap(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Check the configuration file
    Validate,
    /// List the bundled sample snippets or print one of them
    Samples {
        name: Option<String>,
    },
}
