use clap::Parser;
use sru_query::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sru_query=warn".parse()?),
        )
        .init();

    let cli = Cli::parse();

    let result = {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        sru_query::run(&cli, &mut stdin.lock(), &mut stdout.lock()).await
    };

    if let Err(e) = result {
        eprintln!("sru-query: {e}");
        std::process::exit(e.exit_code());
    }
    Ok(())
}
