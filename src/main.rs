//! Interactive terminal chat, standing in for the browser widget shell.

use anyhow::Context as _;
use euromatch_support::{
    ChatWidget, ClientConfig, ClockRandomSource, Rejection, Submission, SupportClient,
};
use std::io::{self, BufRead, Write};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = ClientConfig::from_env().context("loading support client configuration")?;
    let client = SupportClient::new(config).context("building support client")?;
    let widget = ChatWidget::new(client, &ClockRandomSource);
    info!(session_id = %widget.session_id(), "support chat session started");

    if let Some(greeting) = widget.transcript().entries().first() {
        println!("assistant> {}\n", greeting.content);
    }

    let stdin = io::stdin();
    loop {
        print!("you> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        if line.trim() == "quit" {
            break;
        }

        match widget.submit(&line).await {
            Submission::Replied(reply) => println!("assistant> {}\n", reply),
            Submission::RemoteRejected | Submission::TransportFailed => {
                if let Some(entry) = widget.transcript().last() {
                    println!("assistant> {}\n", entry.content);
                }
            }
            Submission::Rejected(Rejection::EmptyMessage) => continue,
            Submission::Rejected(Rejection::Busy) => {
                println!("(still waiting on the previous reply)\n");
            }
        }
    }

    Ok(())
}
