use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

use clap::Parser;

use crate::history::DEFAULT_HISTORY_FILE;

#[derive(Parser, Debug)]
#[command(name = "gopher-translator")]
#[command(about = "HTTP service that translates English into gopher language")]
#[command(version)]
pub struct Args {
    /// TCP port to listen on
    #[arg(short = 'p', long, default_value_t = 8080)]
    pub port: u16,

    /// Address to bind
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Path of the translation history log
    #[arg(long, default_value = DEFAULT_HISTORY_FILE)]
    pub history_file: PathBuf,
}
