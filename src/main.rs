use clap::Parser;
use stopwait_arq::config::SimulationConfig;
use stopwait_arq::engine::simulate;
use tracing_subscriber::EnvFilter;

/// Run a single Stop-and-Wait simulation and print the result as JSON
#[derive(Parser, Debug)]
#[command(name = "stopwait_arq", version)]
struct Args {
    /// Message to transfer
    #[arg(default_value = "")]
    message: String,

    /// Maximum characters per packet
    #[arg(long, default_value_t = 4)]
    packet_size: usize,

    /// Probability that a data packet is lost
    #[arg(long = "loss", default_value_t = 0.1)]
    loss_rate: f64,

    /// Probability that a data packet is corrupted
    #[arg(long = "corruption", default_value_t = 0.1)]
    corruption_rate: f64,

    /// Probability that an acknowledgment is lost
    #[arg(long = "ack-loss", default_value_t = 0.05)]
    ack_loss_rate: f64,

    /// Attempts allowed per packet before the run aborts
    #[arg(long = "max-retries", default_value_t = 20)]
    max_retries_per_packet: u32,

    /// Seed for the channel; random when omitted
    #[arg(long)]
    seed: Option<u64>,
}

impl From<Args> for SimulationConfig {
    fn from(args: Args) -> Self {
        Self {
            message: args.message,
            packet_size: args.packet_size,
            loss_rate: args.loss_rate,
            corruption_rate: args.corruption_rate,
            ack_loss_rate: args.ack_loss_rate,
            max_retries_per_packet: args.max_retries_per_packet,
            seed: args.seed,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SimulationConfig::from(Args::parse());

    match simulate(&config) {
        Ok(result) => {
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    }
}
