use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use mbeuc_tools::{
    decode_hex, encode_wides, format_report_pretty, inspect_descriptor, parse_wide,
    resolve_descriptor,
};

#[derive(Parser)]
#[command(
    name = "mbeuc-tools",
    version,
    about = "mbeuc descriptor inspection and conversion tools"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Inspect a descriptor's code sets, signal bits, and mask.
    Inspect {
        /// Preset name (euc-jp, euc-kr, euc-cn, euc-tw) or a raw
        /// 9-integer descriptor string.
        descriptor: String,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
    /// Decode hex bytes into wide code points.
    Decode {
        /// Preset name or raw descriptor string.
        descriptor: String,
        /// Bytes to decode, as hex digits ("61A4A2" or "61 a4 a2").
        hex: String,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
    /// Encode wide code points into hex bytes.
    Encode {
        /// Preset name or raw descriptor string.
        descriptor: String,
        /// Code points, decimal or 0x-prefixed hex.
        #[arg(required = true)]
        wides: Vec<String>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Inspect { descriptor, format } => {
            let desc = resolve_descriptor(&descriptor)?;
            let report = inspect_descriptor(&desc);
            match format {
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&report).context("serialize json")?;
                    println!("{json}");
                }
                OutputFormat::Pretty => {
                    print!("{}", format_report_pretty(&report));
                }
            }
        }
        Command::Decode {
            descriptor,
            hex,
            format,
        } => {
            let desc = resolve_descriptor(&descriptor)?;
            let wides = decode_hex(&desc, &hex)?;
            match format {
                OutputFormat::Json => {
                    let hexes: Vec<String> =
                        wides.iter().map(|wide| format!("0x{wide:X}")).collect();
                    let json = serde_json::to_string_pretty(&hexes).context("serialize json")?;
                    println!("{json}");
                }
                OutputFormat::Pretty => {
                    for wide in wides {
                        println!("0x{wide:X}");
                    }
                }
            }
        }
        Command::Encode { descriptor, wides } => {
            let desc = resolve_descriptor(&descriptor)?;
            let wides: Vec<_> = wides
                .iter()
                .map(|arg| parse_wide(arg))
                .collect::<Result<_>>()?;
            println!("{}", encode_wides(&desc, &wides)?);
        }
    }
    Ok(())
}
