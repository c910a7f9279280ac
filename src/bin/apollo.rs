use std::process;

use apollo_cli::cli::Apollo;
use apollo_cli::ApolloError;
use calm_io::stdoutln;
use clap::Parser;

#[tokio::main]
async fn main() {
    let app = Apollo::parse();
    timber::init(app.log_level);

    let code = match app.run().await {
        Ok(output) => match output.print(app.json()) {
            Ok(()) => output.exit_code(),
            Err(e) => report(&ApolloError::new(e), app.json()),
        },
        Err(error) => report(&error, app.json()),
    };
    process::exit(code)
}

fn report(error: &ApolloError, json: bool) -> i32 {
    tracing::debug!(?error);
    let _ = if json {
        stdoutln!("{}", error.get_json())
    } else {
        error.print()
    };
    1
}
