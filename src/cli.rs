use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, DEFAULT_PREFIX};

#[derive(Parser, Debug)]
#[command(name = "ena-release", version, about)]
pub struct ReleaseCli {
    /// Only print what is going to be done
    #[arg(long)]
    pub dry: bool,

    /// Stamp the version from version.txt into every workspace member
    #[arg(long)]
    pub set_version: bool,

    /// Commit all changes and tag the repository as v<version>
    #[arg(long)]
    pub tag: bool,

    /// Publish packages in the order listed in publish-order.txt
    #[arg(long)]
    pub publish: bool,

    /// Continue when a commit, tag or publish command fails
    #[arg(long)]
    pub keep_going: bool,

    /// Dependencies whose name starts with this prefix get their version stamped
    #[arg(long, value_name = "PREFIX", default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Workspace root containing Cargo.toml, version.txt and publish-order.txt
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub workspace: PathBuf,

    /// Print debug logs
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl From<ReleaseCli> for Config {
    fn from(cli: ReleaseCli) -> Self {
        Config {
            dry_run: cli.dry,
            set_version: cli.set_version,
            tag: cli.tag,
            publish: cli.publish,
            keep_going: cli.keep_going,
            prefix: cli.prefix,
            workspace: cli.workspace,
        }
    }
}
