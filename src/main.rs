use std::io::Write;
use std::net::SocketAddr;

use anyhow::Context;
use clap::{Parser, Subcommand};

mod packet;
mod server;

#[derive(Parser)]
#[command(author, version, about = "Base62 encoder/decoder for u64 values", long_about = None)]
struct Command {
    #[command(subcommand)]
    command: Commands,

    #[arg(long = "log-level", global = true, default_value = "info")]
    log_level: tracing::Level,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the Base62 encoding of each value
    Encode {
        #[arg(required = true)]
        values: Vec<u64>,
    },
    /// Print the u64 each Base62 string represents
    Decode {
        #[arg(required = true)]
        encoded: Vec<String>,
    },
    /// Serve encode/decode over HTTP
    ///
    /// The default port 80 is privileged on most systems; pass `--port` to run unprivileged.
    Serve {
        #[arg(long, default_value = "0.0.0.0")]
        bind: std::net::IpAddr,

        #[arg(long, short, default_value_t = 80)]
        port: u16,
    },
}

fn encode_all(values: &[u64], out: &mut impl Write) -> anyhow::Result<()> {
    for &value in values {
        writeln!(out, "{}", b62::encode(value))?;
    }
    Ok(())
}

/// Stops at the first string that does not decode.
fn decode_all(encoded: &[String], out: &mut impl Write) -> anyhow::Result<()> {
    for text in encoded {
        let value = b62::decode(text).with_context(|| format!("failed to decode {text:?}"))?;
        writeln!(out, "{value}")?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Command::parse();

    // initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Encode { values } => encode_all(&values, &mut std::io::stdout().lock())?,
        Commands::Decode { encoded } => decode_all(&encoded, &mut std::io::stdout().lock())?,
        Commands::Serve { bind, port } => {
            let addr = SocketAddr::new(bind, port);
            tracing::info!(%addr, "listening");

            axum::Server::bind(&addr)
                .serve(server::router().into_make_service())
                .await
                .context("server failed")?;
        }
    }

    Ok(())
}
