use std::process::ExitCode;

use shopsmart_storefront::{Options, run};

fn main() -> ExitCode {
    shopsmart_observability::init();

    let options = match Options::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("{err:#}");
            eprintln!("usage: shopsmart-storefront [--text TEXT] [--category TAG] [--sort KEY]");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(err) = run(&options, &mut stdout) {
        tracing::error!(error = format!("{err:#}").as_str(), "storefront query failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
