use anyhow::Context;
use genesis_dump::{encode_dump, remap_dump, GenesisConfig, GenesisInput, StateDump};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(
    name = "genesis-dump",
    about = "Rewrites a captured state dump to canonical placeholder addresses."
)]
struct Opt {
    /// Captured raw state dump (JSON).
    #[structopt(long, parse(from_os_str))]
    dump: PathBuf,

    /// Deployment input with reserved addresses and code hash fingerprints (JSON).
    #[structopt(long, parse(from_os_str))]
    input: PathBuf,

    /// Output path for the hex-of-JSON dump.
    #[structopt(long, parse(from_os_str), default_value = "state-dump.hex")]
    hex_output: PathBuf,

    /// Output path for the plain JSON dump.
    #[structopt(long, parse(from_os_str), default_value = "state-dump.json")]
    json_output: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let opt = Opt::from_args();

    let dump_data = tokio::fs::read(&opt.dump)
        .await
        .with_context(|| format!("Reading state dump from {:?}", opt.dump))?;
    let dump: StateDump = serde_json::from_slice(&dump_data)?;
    tracing::info!("Dump root: {:?}", dump.root);

    let input_data = tokio::fs::read(&opt.input)
        .await
        .with_context(|| format!("Reading deployment input from {:?}", opt.input))?;
    let input: GenesisInput = serde_json::from_slice(&input_data)?;
    let config = GenesisConfig::from_input(&input);

    let pins = config.reserved_pins(&dump);
    let remapped = remap_dump(&dump, &pins)?;
    let encoded = encode_dump(&remapped)?;

    // Nothing is written until the whole transformation has succeeded.
    tokio::fs::write(&opt.hex_output, encoded.hex.as_bytes())
        .await
        .with_context(|| format!("Writing {:?}", opt.hex_output))?;
    tokio::fs::write(&opt.json_output, encoded.json.as_bytes())
        .await
        .with_context(|| format!("Writing {:?}", opt.json_output))?;
    tracing::info!(
        "State dump written to {:?} (hex) and {:?} (json)",
        opt.hex_output,
        opt.json_output
    );

    Ok(())
}
