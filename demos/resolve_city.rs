use epw_finder::EpwFinder;
use std::env;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let city = env::args().skip(1).collect::<Vec<_>>().join(" ");
    if city.trim().is_empty() {
        eprintln!("usage: resolve_city <city name>");
        return ExitCode::FAILURE;
    }

    let finder = match EpwFinder::new().await {
        Ok(finder) => finder,
        Err(e) => {
            eprintln!("Could not set up: {e}");
            return ExitCode::FAILURE;
        }
    };

    match finder.resolve(&city).await {
        Ok(resolution) => {
            println!(
                "{} is in {}, {}",
                resolution.query, resolution.location.iso_name, resolution.location.region
            );
            println!(
                "Dataset: {} ({})",
                resolution.dataset.city, resolution.dataset.candidate.year_range
            );
            println!("{}", resolution.payload.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} ({})", e, e.kind());
            ExitCode::FAILURE
        }
    }
}
