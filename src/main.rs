use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::{debug, info};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use nedgen::config::TopologyConfig;
use nedgen::config_loader::prepare_topology;
use nedgen::ned::{emit_ned, NedLayout};

/// NED network generator for RemoteExec client/server simulations
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path of the NED file to generate
    #[arg(short, long, default_value = "RemoteExecNetwork.ned")]
    output: PathBuf,

    /// Path to the key=value topology file (created with defaults if missing)
    #[arg(short, long, default_value = "topo.txt")]
    topology: PathBuf,

    /// Print the topology actually used as JSON before generating
    #[arg(long)]
    print_config: bool,
}

/// Command line reduced to the arguments `Args` understands
#[derive(Debug, Default)]
struct FilteredArgs {
    /// Program name followed by recognized arguments
    kept: Vec<OsString>,
    /// Everything that was dropped
    ignored: Vec<OsString>,
}

/// Reduce raw argv to recognized arguments before clap sees it.
///
/// `-o`/`-t` take the next argument as their value whatever it looks like,
/// and the last occurrence wins. An option missing its value is dropped, as
/// is anything unrecognized, so clap never fails on stray input.
fn filter_args<I, T>(argv: I) -> FilteredArgs
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut argv = argv.into_iter().map(Into::into);
    let mut filtered = FilteredArgs::default();
    filtered.kept.extend(argv.next());

    let mut output: Option<OsString> = None;
    let mut topology: Option<OsString> = None;
    let mut passthrough = Vec::new();

    while let Some(arg) = argv.next() {
        let slot = match arg.to_str() {
            Some("-o") | Some("--output") => &mut output,
            Some("-t") | Some("--topology") => &mut topology,
            Some("--print-config") | Some("-h") | Some("--help") | Some("-V")
            | Some("--version") => {
                passthrough.push(arg);
                continue;
            }
            _ => {
                filtered.ignored.push(arg);
                continue;
            }
        };
        match argv.next() {
            Some(value) => *slot = Some(value),
            None => filtered.ignored.push(arg),
        }
    }

    // `--name=value` keeps clap from reading a hyphenated value as a flag
    for (name, value) in [("--output=", output), ("--topology=", topology)] {
        if let Some(value) = value {
            let mut joined = OsString::from(name);
            joined.push(value);
            filtered.kept.push(joined);
        }
    }
    filtered.kept.extend(passthrough);
    filtered
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Parse command-line arguments
    let filtered = filter_args(std::env::args_os());
    let args = Args::parse_from(filtered.kept);

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if !filtered.ignored.is_empty() {
        debug!("Ignoring unrecognized arguments: {:?}", filtered.ignored);
    }

    info!("Topology file: {:?}", args.topology);
    info!("Output file: {:?}", args.output);

    let config = prepare_topology(&args.topology);

    // A parse error silently reverts to defaults, so show what was really used
    if args.print_config {
        let json = serde_json::to_string_pretty(&config)
            .wrap_err("Failed to serialize topology configuration")?;
        println!("{}", json);
    }

    emit_ned(&args.output, &config, &NedLayout::default())?;

    println!("NED file generated: {}", args.output.display());
    print!("{}", usage_hint(&args.topology));
    Ok(())
}

/// Text telling the user where the topology lives and what it looks like
fn usage_hint(topology_path: &Path) -> String {
    let mut hint = format!(
        "\nYou can modify the topology by editing the file: {}\nFormat example:\n",
        topology_path.display()
    );
    for line in TopologyConfig::default().to_key_value_lines() {
        hint.push_str(&line);
        hint.push('\n');
    }
    hint
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::parse_from(filter_args(argv.iter().copied()).kept)
    }

    #[test]
    fn test_cli_defaults() {
        let args = parse(&["nedgen"]);

        assert_eq!(args.output, PathBuf::from("RemoteExecNetwork.ned"));
        assert_eq!(args.topology, PathBuf::from("topo.txt"));
        assert!(!args.print_config);
    }

    #[test]
    fn test_cli_short_flags() {
        let args = parse(&["nedgen", "-o", "net.ned", "-t", "custom_topo.txt"]);

        assert_eq!(args.output, PathBuf::from("net.ned"));
        assert_eq!(args.topology, PathBuf::from("custom_topo.txt"));
    }

    #[test]
    fn test_cli_long_flags() {
        let args = parse(&["nedgen", "--topology", "t.txt", "--output", "n.ned", "--print-config"]);

        assert_eq!(args.output, PathBuf::from("n.ned"));
        assert_eq!(args.topology, PathBuf::from("t.txt"));
        assert!(args.print_config);
    }

    #[test]
    fn test_cli_unknown_flags_around_output() {
        let args = parse(&["nedgen", "--verbose", "-o", "x.ned"]);
        assert_eq!(args.output, PathBuf::from("x.ned"));

        let args = parse(&["nedgen", "-x", "-o", "x.ned", "--debug", "-t", "t.txt", "-q"]);
        assert_eq!(args.output, PathBuf::from("x.ned"));
        assert_eq!(args.topology, PathBuf::from("t.txt"));
    }

    #[test]
    fn test_cli_stray_words_ignored() {
        let filtered = filter_args(["nedgen", "stray", "-o", "net.ned", "words"]);
        assert_eq!(filtered.ignored, vec![OsString::from("stray"), OsString::from("words")]);

        let args = Args::parse_from(filtered.kept);
        assert_eq!(args.output, PathBuf::from("net.ned"));
    }

    #[test]
    fn test_cli_dangling_topology_flag() {
        let filtered = filter_args(["nedgen", "-o", "x.ned", "-t"]);
        assert_eq!(filtered.ignored, vec![OsString::from("-t")]);

        let args = Args::parse_from(filtered.kept);
        assert_eq!(args.output, PathBuf::from("x.ned"));
        assert_eq!(args.topology, PathBuf::from("topo.txt"));
    }

    #[test]
    fn test_cli_last_output_wins() {
        let args = parse(&["nedgen", "-o", "a.ned", "-o", "b.ned"]);
        assert_eq!(args.output, PathBuf::from("b.ned"));
    }

    #[test]
    fn test_cli_value_may_look_like_flag() {
        let args = parse(&["nedgen", "-o", "--verbose", "-t", "-weird.txt"]);
        assert_eq!(args.output, PathBuf::from("--verbose"));
        assert_eq!(args.topology, PathBuf::from("-weird.txt"));
    }

    #[test]
    fn test_usage_hint() {
        let hint = usage_hint(Path::new("topo.txt"));
        assert_eq!(
            hint,
            "\nYou can modify the topology by editing the file: topo.txt\nFormat example:\n\
             num_clients=3\nnum_servers=5\narray_size=99\nnum_subtasks=3\n"
        );
    }
}
