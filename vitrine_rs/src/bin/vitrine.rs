use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    vitrine::cli::run().await
}
